use std::fmt::Display;

use thiserror::Error as ThisError;

/// An I/O failure tagged with the 1-based source line on which it occurred.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::LineRead { .. } => "LineRead",
            ErrorImpl::SourceOpen { .. } => "SourceOpen",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.internal_error)
    }
}

#[derive(ThisError, Debug, Clone)]
pub enum ErrorImpl {
    #[error("failed to read source line: {message}")]
    LineRead { message: String },
    #[error("cannot open source file {path:?}: {message}")]
    SourceOpen { path: String, message: String },
}
