//! Lexical analysis module for the C-Minus scanner.
//!
//! This module contains the scanner that converts source text into a stream
//! of tokens for a downstream parser. It handles:
//!
//! - Line-buffered character input with one-character pushback
//! - DFA-driven classification of identifiers, numbers, and operators
//! - Multi-character operator disambiguation with one token of lookahead
//! - `/* ... */` comment skipping, including comments spanning lines
//! - Reserved-word recognition after a full identifier has been scanned

pub mod scanner;
pub mod source;
pub mod tokens;
