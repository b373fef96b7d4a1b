//! Error types for the scanner.
//!
//! Lexical problems never appear here: an unrecognized character or a bare
//! `!` is reported as an `Error`-kind token and scanning continues. The
//! types in this module cover the conditions that do cross the scanner
//! boundary as `Err`, which are all I/O: a source file that cannot be
//! opened, or a line read that fails mid-scan.

pub mod errors;
