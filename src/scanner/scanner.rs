use std::io::{self, BufRead, Write};

use crate::{
    errors::errors::{Error, ErrorImpl},
    ScanConfig,
};

use super::{
    source::LineSource,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// States of the scanning DFA. The accepting state of the original automaton
/// is represented by exiting the scan loop with a resolved [`TokenKind`], so
/// every state below has an exhaustive transition for every character class
/// and no unreachable fallback exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    InEq,
    InNe,
    InLt,
    InGt,
    InOver,
    InComment,
    InNum,
    InId,
}

/// The DFA token recognizer.
///
/// One instance is created per compilation unit and owns all mutable
/// scanning state: the buffered line, cursor, line number, and end-of-input
/// flag (via [`LineSource`]). Each call to [`Scanner::next_token`] returns
/// exactly one token; lexical errors are returned as `Error`-kind tokens and
/// scanning continues on the next call.
pub struct Scanner<R: BufRead> {
    source: LineSource<R>,
    config: ScanConfig,
    listing: Box<dyn Write>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R, config: ScanConfig) -> Scanner<R> {
        let source = LineSource::new(reader, config.line_limit);
        Scanner {
            source,
            config,
            listing: Box::new(io::stdout()),
        }
    }

    /// Redirects the echo/trace side channels, e.g. into a buffer for tests.
    pub fn with_listing(mut self, listing: Box<dyn Write>) -> Scanner<R> {
        self.listing = listing;
        self
    }

    /// Returns the next token in the source.
    ///
    /// Always terminates and always yields a token: unrecognized characters
    /// and a bare `!` come back as `Error`-kind tokens, and once end of
    /// input is reached every further call returns `EndOfFile`. Only a
    /// failed line read surfaces as `Err`.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let mut state = State::Start;
        let mut lexeme = String::new();

        let mut kind = loop {
            let c = self.next_char()?;
            state = match state {
                State::Start => match c {
                    None => break TokenKind::EndOfFile,
                    Some(ch) if ch.is_ascii_digit() => {
                        lexeme.push(ch);
                        State::InNum
                    }
                    Some(ch) if ch.is_ascii_alphabetic() => {
                        lexeme.push(ch);
                        State::InId
                    }
                    Some(' ' | '\t' | '\n' | '\r') => State::Start,
                    Some('=') => {
                        lexeme.push('=');
                        State::InEq
                    }
                    Some('!') => {
                        lexeme.push('!');
                        State::InNe
                    }
                    Some('<') => {
                        lexeme.push('<');
                        State::InLt
                    }
                    Some('>') => {
                        lexeme.push('>');
                        State::InGt
                    }
                    // Not saved: a comment must leave the lexeme empty when
                    // scanning resumes in Start.
                    Some('/') => State::InOver,
                    Some(ch) => {
                        lexeme.push(ch);
                        break match ch {
                            '+' => TokenKind::Plus,
                            '-' => TokenKind::Minus,
                            '*' => TokenKind::Times,
                            '(' => TokenKind::LParen,
                            ')' => TokenKind::RParen,
                            '[' => TokenKind::LBracket,
                            ']' => TokenKind::RBracket,
                            '{' => TokenKind::LBrace,
                            '}' => TokenKind::RBrace,
                            ';' => TokenKind::Semicolon,
                            ',' => TokenKind::Comma,
                            _ => TokenKind::Error,
                        };
                    }
                },

                State::InEq => match c {
                    Some('=') => {
                        lexeme.push('=');
                        break TokenKind::Equal;
                    }
                    _ => {
                        self.source.pushback();
                        break TokenKind::Assign;
                    }
                },

                // A bare `!` matches no token shape.
                State::InNe => match c {
                    Some('=') => {
                        lexeme.push('=');
                        break TokenKind::NotEqual;
                    }
                    _ => {
                        self.source.pushback();
                        break TokenKind::Error;
                    }
                },

                State::InLt => match c {
                    Some('=') => {
                        lexeme.push('=');
                        break TokenKind::LessEqual;
                    }
                    _ => {
                        self.source.pushback();
                        break TokenKind::LessThan;
                    }
                },

                State::InGt => match c {
                    Some('=') => {
                        lexeme.push('=');
                        break TokenKind::GreaterEqual;
                    }
                    _ => {
                        self.source.pushback();
                        break TokenKind::GreaterThan;
                    }
                },

                State::InOver => match c {
                    Some('*') => State::InComment,
                    _ => {
                        self.source.pushback();
                        break TokenKind::Divide;
                    }
                },

                State::InComment => match c {
                    Some('*') => match self.next_char()? {
                        Some('/') => State::Start,
                        None => break TokenKind::EndOfFile,
                        Some(_) => {
                            // The second character may itself open the
                            // closing `*/`, so it goes back to the source.
                            self.source.pushback();
                            State::InComment
                        }
                    },
                    None => break TokenKind::EndOfFile,
                    Some(_) => State::InComment,
                },

                State::InNum => match c {
                    Some(ch) if ch.is_ascii_digit() => {
                        lexeme.push(ch);
                        State::InNum
                    }
                    _ => {
                        self.source.pushback();
                        break TokenKind::Number;
                    }
                },

                State::InId => match c {
                    Some(ch) if ch.is_ascii_alphanumeric() => {
                        lexeme.push(ch);
                        State::InId
                    }
                    _ => {
                        self.source.pushback();
                        break TokenKind::Identifier;
                    }
                },
            };
        };

        if kind == TokenKind::Identifier {
            if let Some(reserved) = RESERVED_LOOKUP.get(lexeme.as_str()) {
                kind = *reserved;
            }
        }

        let token = Token {
            kind,
            lexeme,
            line: self.source.lineno().max(1),
        };

        if self.config.trace_scan {
            let _ = writeln!(self.listing, "\t{}: {}", token.line, token.describe());
        }

        Ok(token)
    }

    /// Fetches one character, echoing a freshly read line first when the
    /// echo switch is on.
    fn next_char(&mut self) -> Result<Option<char>, Error> {
        let lineno = self.source.lineno();
        let c = self.source.next_char().map_err(|err| {
            Error::new(
                ErrorImpl::LineRead {
                    message: err.to_string(),
                },
                lineno + 1,
            )
        })?;

        if self.config.echo_source {
            if let Some((lineno, text)) = self.source.take_new_line() {
                let _ = write!(self.listing, "{:4}: {}", lineno, text);
            }
        }

        Ok(c)
    }
}

/// Scans the whole input, collecting every token through the trailing
/// `EndOfFile`.
pub fn tokenize<R: BufRead>(reader: R, config: ScanConfig) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(reader, config);
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::EndOfFile;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
