use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("int", TokenKind::Int);
        map.insert("void", TokenKind::Void);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfFile,
    Error,
    Identifier,
    Number,

    // Reserved words
    If,
    Else,
    While,
    Return,
    Int,
    Void,

    Plus,
    Minus,
    Times,
    Divide,

    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,
    Equal,
    NotEqual,
    Assign,

    Semicolon,
    Comma,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One lexical unit: kind, literal spelling, and the 1-based line on which
/// the token completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexeme: {}}}", self.kind, self.lexeme)
    }
}

impl Token {
    fn carries_spelling(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Identifier | TokenKind::Number | TokenKind::Error
        )
    }

    /// Human-readable form used by the trace side channel.
    pub fn describe(&self) -> String {
        if self.carries_spelling() {
            format!("{} ({})", self.kind, self.lexeme)
        } else {
            format!("{}", self.kind)
        }
    }
}
