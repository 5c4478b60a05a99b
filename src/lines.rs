//! Source line splitting
//!
//! Input lines end at `\r\n`, `\n` or a lone `\r`, so files written on any
//! platform split the same way. Terminators are not part of the yielded line.
//!
//! ```rust
//! use markdown_html_converter::lines::SourceLines;
//!
//! let lines: Vec<String> = SourceLines::new("a\r\nb\rc\n".as_bytes())
//!     .collect::<Result<_, _>>()
//!     .expect("valid UTF-8");
//! assert_eq!(lines, ["a", "b", "c"]);
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Split one `\n`-terminated chunk into the lines it holds
///
/// A trailing `\n`, `\r\n` or `\r` ends the chunk; every other `\r` ends a
/// line inside it.
pub fn split_chunk(chunk: &str) -> impl Iterator<Item = &str> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}

/// Iterator over the lines of a UTF-8 reader
///
/// Invalid UTF-8 is reported as an `io::ErrorKind::InvalidData` error, after
/// which the iterator ends.
#[derive(Debug)]
pub struct SourceLines<R> {
    reader: R,
    pending: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> SourceLines<R> {
    /// Wrap `reader`
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }

            let mut chunk = String::new();
            match self.reader.read_line(&mut chunk) {
                Ok(0) => self.done = true,
                Ok(_) => self.pending.extend(split_chunk(&chunk).map(str::to_string)),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
