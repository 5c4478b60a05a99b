//! Markdown HTML Converter
//!
//! This library converts a constrained subset of Markdown into an HTML
//! fragment, line by line, writing output as it goes.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `inline`: per-line span rewriting (bold/emphasis, content hash, letter strip)
//! - `block`: line classification and open-block state machine
//! - `lines`: source line splitting on `\r\n`, `\n` and `\r`
//! - `converter`: conversion driver over readers, writers, strings and files
//! - `digest`: 128-bit content digests for `[[...]]` spans
//! - `cli`: argument parsing and validation for the `convert` binary
//! - `error`: error type and exit codes
//!
//! # Supported Markup
//!
//! - `#` to `######` headings
//! - `-` prefixed unordered list items, `*` prefixed ordered list items
//! - paragraphs of consecutive lines joined with `<br/>`, closed by a blank line
//! - `**bold**`, `__emphasis__`, `[[hashed]]` and `((stripped))` spans
//!
//! Nested lists, code blocks, links, images, tables and blockquotes are not
//! recognised; such lines are treated as plain text.

pub mod block;
pub mod cli;
pub mod converter;
pub mod digest;
pub mod error;
pub mod inline;
pub mod lines;

pub use block::BlockState;
pub use converter::{ConversionOptions, ConversionStats, HtmlConverter};
pub use error::ConversionError;
