//! Markdown converter - transforms Markdown lines into an HTML fragment
//!
//! This module drives a conversion run: it reads the source one line at a
//! time, trims it, rewrites inline spans, hands the result to the block state
//! machine and writes the generated HTML incrementally. Nothing but the block
//! flags is kept between lines.
//!
//! # Conversion Pipeline
//!
//! For every input line:
//!
//! 1. Split on `\r\n`, `\n` or `\r` and strip leading and trailing whitespace
//! 2. Rewrite inline spans (see [`crate::inline`])
//! 3. Classify the line and emit tag transitions (see [`crate::block`])
//!
//! After the last line every still-open block is closed and the writer is
//! flushed.
//!
//! # Output
//!
//! The output is an HTML fragment with one tag or content line per output
//! line. There is no `<html>` or `<body>` scaffold.
//!
//! # Examples
//!
//! ```rust
//! use markdown_html_converter::converter::HtmlConverter;
//!
//! let converter = HtmlConverter::new();
//! let html = converter
//!     .convert_str("# Title\n\nSome **bold** text\n")
//!     .expect("Conversion failed");
//! assert_eq!(html, "<h1>Title</h1>\n<p>\nSome <b>bold</b> text\n</p>\n");
//! ```

use crate::block::{BlockState, trim_line};
use crate::error::ConversionError;
use crate::inline::InlineRewriter;
use crate::lines::SourceLines;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Conversion options
///
/// Each inline stage can be switched off independently. Block handling is not
/// configurable.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Rewrite `**text**` and `__text__`
    pub bold_and_emphasis: bool,
    /// Replace `[[text]]` with a content digest
    pub content_hash: bool,
    /// Remove `C`/`c` inside `((text))`
    pub strip_letter_c: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            bold_and_emphasis: true,
            content_hash: true,
            strip_letter_c: true,
        }
    }
}

/// Counters collected during one conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Input lines consumed
    pub lines_read: usize,
    /// Input lines whose content was written (tags not counted)
    pub lines_written: usize,
}

/// Markdown to HTML converter
///
/// # Example
///
/// ```rust
/// use markdown_html_converter::converter::HtmlConverter;
///
/// let converter = HtmlConverter::new();
/// let mut html = Vec::new();
/// let stats = converter
///     .convert("- one\n- two\n".as_bytes(), &mut html)
///     .expect("Conversion failed");
///
/// assert_eq!(stats.lines_read, 2);
/// assert_eq!(
///     String::from_utf8(html).unwrap(),
///     "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HtmlConverter {
    rewriter: InlineRewriter,
}

impl HtmlConverter {
    /// Create a new converter with every inline stage enabled
    pub fn new() -> Self {
        Self::with_options(ConversionOptions::default())
    }

    /// Create a new converter with custom options
    ///
    /// # Examples
    ///
    /// ```rust
    /// use markdown_html_converter::converter::{ConversionOptions, HtmlConverter};
    ///
    /// let converter = HtmlConverter::with_options(ConversionOptions {
    ///     content_hash: false,
    ///     ..Default::default()
    /// });
    /// let html = converter.convert_str("[[kept]]").expect("Conversion failed");
    /// assert_eq!(html, "<p>\n[[kept]]\n</p>\n");
    /// ```
    pub fn with_options(options: ConversionOptions) -> Self {
        Self {
            rewriter: InlineRewriter::from_options(&options),
        }
    }

    /// Convert every line of `input`, writing the HTML fragment to `output`
    ///
    /// Lines are processed and written one at a time. The end-of-document
    /// flush runs after the last line and `output` is flushed before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Io` when reading a line fails (including
    /// invalid UTF-8) or when writing to `output` fails. Output produced
    /// before the failure is left in place.
    pub fn convert<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<ConversionStats, ConversionError> {
        let mut state = BlockState::new();
        let mut stats = ConversionStats::default();

        for line in SourceLines::new(input) {
            let line = line?;
            stats.lines_read += 1;

            let rewritten = self.rewriter.rewrite(trim_line(&line));
            if state.process_line(&rewritten, &mut output)? {
                stats.lines_written += 1;
            }
        }

        state.finish(&mut output)?;
        output.flush()?;

        debug!(
            "converted {} lines, wrote {}",
            stats.lines_read, stats.lines_written
        );
        Ok(stats)
    }

    /// Convert an in-memory Markdown document to an HTML fragment
    pub fn convert_str(&self, markdown: &str) -> Result<String, ConversionError> {
        let mut buffer = Vec::with_capacity(markdown.len() * 2);
        self.convert(markdown.as_bytes(), &mut buffer)?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Convert the file at `input_path`, overwriting `output_path`
    ///
    /// The input is opened first so an unreadable source never creates or
    /// truncates the output. The output handle is flushed on success and
    /// dropped on every error path; a failed run may leave a partial file.
    pub fn convert_file(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<ConversionStats, ConversionError> {
        let input = BufReader::new(File::open(input_path)?);
        let output = BufWriter::new(File::create(output_path)?);

        let stats = self.convert(input, output)?;
        info!(
            "converted {} -> {} ({} lines read, {} written)",
            input_path.display(),
            output_path.display(),
            stats.lines_read,
            stats.lines_written
        );
        Ok(stats)
    }
}

impl Default for HtmlConverter {
    fn default() -> Self {
        Self::new()
    }
}
