use std::io::{self, BufRead, Read};

/// Line-buffered character source with one-character pushback.
///
/// Holds exactly one physical line at a time, tracks the 1-based line
/// number, and signals end of input by returning `None` on every call once
/// the underlying reader is exhausted. Callers may push back at most one
/// character between two fetches.
pub struct LineSource<R: BufRead> {
    reader: R,
    line: String,
    pos: usize,
    lineno: usize,
    eof: bool,
    fresh: bool,
    limit: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R, limit: usize) -> LineSource<R> {
        LineSource {
            reader,
            line: String::new(),
            pos: 0,
            lineno: 0,
            eof: false,
            fresh: false,
            limit,
        }
    }

    /// Fetches the next character, reading a new line if the current one is
    /// exhausted. Returns `Ok(None)` once end of input is reached, and keeps
    /// returning it on every later call.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        if self.pos >= self.line.len() {
            if self.eof {
                return Ok(None);
            }
            self.line.clear();
            let read = (&mut self.reader)
                .take(self.limit as u64)
                .read_line(&mut self.line)?;
            if read == 0 {
                self.eof = true;
                return Ok(None);
            }
            self.lineno += 1;
            self.fresh = true;
            self.pos = 0;
        }

        let c = self.line.as_bytes()[self.pos] as char;
        self.pos += 1;
        Ok(Some(c))
    }

    /// Backtracks one character in the current line. A no-op once end of
    /// input has been observed, so the cursor is never corrupted by a
    /// pushback following the end-of-input sentinel.
    pub fn pushback(&mut self) {
        if !self.eof {
            self.pos -= 1;
        }
    }

    /// The 1-based number of the most recently read line (0 before any line
    /// has been read).
    pub fn lineno(&self) -> usize {
        self.lineno
    }

    pub fn at_eof(&self) -> bool {
        self.eof
    }

    /// Returns the freshly read line (with its number) if one was loaded
    /// since the last call. Consumed by the echo side channel.
    pub fn take_new_line(&mut self) -> Option<(usize, &str)> {
        if self.fresh {
            self.fresh = false;
            Some((self.lineno, self.line.as_str()))
        } else {
            None
        }
    }
}
