//! Inline span rewriting
//!
//! Rewrites markup inside a single line before block classification. Three
//! stages run in a fixed order, each on the output of the previous one:
//!
//! 1. **Emphasis**: `**text**` → `<b>text</b>`, `__text__` → `<em>text</em>`
//! 2. **Content hash**: `[[text]]` → 32-character hex digest of `text`
//! 3. **Letter strip**: `((text))` → `text` with every `C` and `c` removed
//!
//! All spans are non-greedy, never cross a line boundary, and need at least
//! one character between the delimiters. There is no escape syntax.
//!
//! # Examples
//!
//! ```rust
//! use markdown_html_converter::inline::InlineRewriter;
//!
//! let rewriter = InlineRewriter::new();
//! assert_eq!(rewriter.rewrite("**bold** and __soft__"), "<b>bold</b> and <em>soft</em>");
//! assert_eq!(rewriter.rewrite("[[Hello]]"), "8b1a9953c4611296a827abf8c47804d7");
//! assert_eq!(rewriter.rewrite("((Cat City))"), "at ity");
//! ```

use crate::converter::ConversionOptions;
use crate::digest::ContentHasher;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

fn bold_regex() -> Option<&'static Regex> {
    static BOLD_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    BOLD_REGEX
        .get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").ok())
        .as_ref()
}

fn emphasis_regex() -> Option<&'static Regex> {
    static EMPHASIS_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMPHASIS_REGEX
        .get_or_init(|| Regex::new(r"__(.+?)__").ok())
        .as_ref()
}

fn hash_span_regex() -> Option<&'static Regex> {
    static HASH_SPAN_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    HASH_SPAN_REGEX
        .get_or_init(|| Regex::new(r"\[\[(.+?)\]\]").ok())
        .as_ref()
}

fn strip_span_regex() -> Option<&'static Regex> {
    static STRIP_SPAN_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    STRIP_SPAN_REGEX
        .get_or_init(|| Regex::new(r"\(\((.+?)\)\)").ok())
        .as_ref()
}

/// Replace `**text**` with `<b>text</b>` and `__text__` with `<em>text</em>`
pub fn rewrite_emphasis(line: &str) -> String {
    let bolded = match bold_regex() {
        Some(regex) => regex.replace_all(line, "<b>${1}</b>"),
        None => Cow::Borrowed(line),
    };

    match emphasis_regex() {
        Some(regex) => regex.replace_all(&bolded, "<em>${1}</em>").into_owned(),
        None => bolded.into_owned(),
    }
}

/// Replace every `[[text]]` span, delimiters included, with the digest of `text`
pub fn replace_content_hashes(line: &str, hasher: &ContentHasher) -> String {
    let Some(regex) = hash_span_regex() else {
        return line.to_string();
    };

    regex
        .replace_all(line, |caps: &Captures<'_>| hasher.digest(caps[1].as_bytes()))
        .into_owned()
}

/// Replace every `((text))` span with `text` minus all `C` and `c` characters
pub fn strip_letter_c(line: &str) -> String {
    let Some(regex) = strip_span_regex() else {
        return line.to_string();
    };

    regex
        .replace_all(line, |caps: &Captures<'_>| {
            caps[1]
                .chars()
                .filter(|&ch| ch != 'C' && ch != 'c')
                .collect::<String>()
        })
        .into_owned()
}

/// Applies the enabled inline stages to one line at a time
#[derive(Debug, Clone)]
pub struct InlineRewriter {
    bold_and_emphasis: bool,
    content_hash: bool,
    strip_letter_c: bool,
    hasher: ContentHasher,
}

impl InlineRewriter {
    /// Create a rewriter with every stage enabled
    pub fn new() -> Self {
        Self::from_options(&ConversionOptions::default())
    }

    /// Create a rewriter that runs only the stages enabled in `options`
    pub fn from_options(options: &ConversionOptions) -> Self {
        Self {
            bold_and_emphasis: options.bold_and_emphasis,
            content_hash: options.content_hash,
            strip_letter_c: options.strip_letter_c,
            hasher: ContentHasher::new(),
        }
    }

    /// Rewrite one line: emphasis, then content hash, then letter strip
    pub fn rewrite(&self, line: &str) -> String {
        let mut line = line.to_string();

        if self.bold_and_emphasis {
            line = rewrite_emphasis(&line);
        }
        if self.content_hash {
            line = replace_content_hashes(&line, &self.hasher);
        }
        if self.strip_letter_c {
            line = strip_letter_c(&line);
        }

        line
    }
}

impl Default for InlineRewriter {
    fn default() -> Self {
        Self::new()
    }
}
