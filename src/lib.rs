#![allow(clippy::module_inception)]

pub mod errors;
pub mod scanner;

/// Caller-supplied scanning options.
///
/// `echo_source` and `trace_scan` drive the diagnostic side channels only;
/// neither affects the returned token stream. `line_limit` bounds how many
/// bytes of a physical line are buffered at once.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Echo each source line to the listing as it is read.
    pub echo_source: bool,
    /// Print each token to the listing as it is produced.
    pub trace_scan: bool,
    /// Maximum number of bytes buffered per physical line.
    pub line_limit: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            echo_source: false,
            trace_scan: false,
            line_limit: 256,
        }
    }
}
