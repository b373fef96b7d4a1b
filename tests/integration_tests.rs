//! Integration tests for end-to-end scanning.
//!
//! These tests verify that complete C-Minus programs scan into the expected
//! token streams, including comments, line numbering, and error recovery.

use std::io::Cursor;

use cminus_scanner::{
    scanner::{
        scanner::{tokenize, Scanner},
        tokens::TokenKind,
    },
    ScanConfig,
};

#[test]
fn test_scan_gcd_program() {
    let source = r#"/* computes the greatest common divisor */
int gcd(int u, int v)
{
    if (v == 0) return u;
    else return gcd(v, u - u / v * v);
}
"#;
    let tokens = tokenize(Cursor::new(source.to_string()), ScanConfig::default()).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::If,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Number,
            TokenKind::RParen,
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::Minus,
            TokenKind::Identifier,
            TokenKind::Divide,
            TokenKind::Identifier,
            TokenKind::Times,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(tokens[1].lexeme, "gcd");
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[10].line, 4);
}

#[test]
fn test_scan_array_and_while_program() {
    let source = "int a[10];\nwhile (i >= 0) { a[i] = i; }\n";
    let tokens = tokenize(Cursor::new(source.to_string()), ScanConfig::default()).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::LBracket,
            TokenKind::Number,
            TokenKind::RBracket,
            TokenKind::Semicolon,
            TokenKind::While,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::GreaterEqual,
            TokenKind::Number,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Identifier,
            TokenKind::LBracket,
            TokenKind::Identifier,
            TokenKind::RBracket,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn test_scan_program_with_lexical_errors() {
    let source = "void main(void) {\n    x = 3 $ 4;\n    y = !z;\n}\n";
    let tokens = tokenize(Cursor::new(source.to_string()), ScanConfig::default()).unwrap();

    let errors: Vec<_> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Error)
        .collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].lexeme, "$");
    assert_eq!(errors[0].line, 2);
    assert_eq!(errors[1].lexeme, "!");
    assert_eq!(errors[1].line, 3);

    // Scanning recovered after each error and still reached end of input.
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
}

#[test]
fn test_comment_spanning_whole_program_body() {
    let source = "a\n/* one\ntwo\nthree */\nb\n";
    let tokens = tokenize(Cursor::new(source.to_string()), ScanConfig::default()).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].lexeme, "a");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].lexeme, "b");
    assert_eq!(tokens[1].line, 5);
    assert_eq!(tokens[2].kind, TokenKind::EndOfFile);
}

#[test]
fn test_pull_interface_reaches_steady_state() {
    let mut scanner = Scanner::new(
        Cursor::new("int x;".to_string()),
        ScanConfig::default(),
    );

    let mut seen_eof = 0;
    for _ in 0..8 {
        if scanner.next_token().unwrap().kind == TokenKind::EndOfFile {
            seen_eof += 1;
        }
    }

    // int, x, ; then EndOfFile forever.
    assert_eq!(seen_eof, 5);
}
