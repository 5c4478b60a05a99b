//! Block classification and open-block tracking
//!
//! Every rewritten line is classified by its leading characters and fed through
//! a small state machine that remembers which blocks currently have an open
//! tag. Transitions write the matching open/close tags to the output before the
//! line's own content, so the HTML fragment is produced in document order.
//!
//! # Classification
//!
//! The checks are evaluated independently and always in this order:
//!
//! 1. **Heading**: 1-6 leading `#` → `<hN>rest</hN>`
//! 2. **Unordered item**: leading `-` → `<li>rest</li>`, opening `<ul>` if needed;
//!    a line without a leading `-` closes an open `<ul>`
//! 3. **Ordered item**: leading `*` → `<li>rest</li>`, opening `<ol>` if needed;
//!    a line without a leading `*` closes an open `<ol>`
//! 4. **Paragraph**: only when the line is not a heading and no list is open.
//!    A substantive line opens `<p>` or, inside a paragraph, emits `<br/>`;
//!    a trivial line closes an open paragraph.
//!
//! A line is *substantive* when it is longer than one character. Only
//! substantive lines are written as content; trivial lines can only close
//! blocks.
//!
//! A paragraph that is open when a heading or list item arrives stays open
//! until the next trivial line outside any list, or until the end of the
//! document.

use log::{debug, trace};
use std::io::{self, Write};

/// Highest heading level recognised
pub const MAX_HEADING_LEVEL: usize = 6;

/// Leading-marker profile of one rewritten line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    /// Length in Unicode scalar values
    pub len: usize,
    /// Number of leading `#`
    pub hashes: usize,
    /// Number of leading `-`
    pub dashes: usize,
    /// Number of leading `*`
    pub stars: usize,
}

impl LineShape {
    /// Measure a rewritten, already trimmed line
    pub fn of(line: &str) -> Self {
        Self {
            len: line.chars().count(),
            hashes: leading_count(line, '#'),
            dashes: leading_count(line, '-'),
            stars: leading_count(line, '*'),
        }
    }

    /// Heading level when the line has 1 to 6 leading `#`
    pub fn heading_level(&self) -> Option<usize> {
        (1..=MAX_HEADING_LEVEL)
            .contains(&self.hashes)
            .then_some(self.hashes)
    }

    /// Whether the line carries content to be written
    pub fn is_substantive(&self) -> bool {
        self.len > 1
    }
}

/// Whitespace removed around lines and item text
///
/// Unicode whitespace plus the information separators `\x1c`..=`\x1f`.
pub fn is_line_space(ch: char) -> bool {
    ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch)
}

/// Strip [`is_line_space`] characters from both ends of `text`
pub fn trim_line(text: &str) -> &str {
    text.trim_matches(is_line_space)
}

fn leading_count(line: &str, marker: char) -> usize {
    line.chars().take_while(|&ch| ch == marker).count()
}

/// Open-block flags for one conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockState {
    /// `<ul>` emitted without its `</ul>`
    pub unordered_open: bool,
    /// `<ol>` emitted without its `</ol>`
    pub ordered_open: bool,
    /// `<p>` emitted without its `</p>`
    pub paragraph_open: bool,
}

impl BlockState {
    /// Create a state with no open blocks
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no block is open
    pub fn is_idle(&self) -> bool {
        !(self.unordered_open || self.ordered_open || self.paragraph_open)
    }

    /// Classify one rewritten line and write its tags and content to `out`
    ///
    /// Returns `true` when the line's own content was written.
    pub fn process_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let shape = LineShape::of(line);
        trace!("line shape {:?}", shape);

        let heading = shape.heading_level();
        let mut rendered = match heading {
            Some(level) => format!(
                "<h{level}>{}</h{level}>",
                trim_line(line.trim_start_matches('#'))
            ),
            None => line.to_string(),
        };

        if shape.dashes > 0 {
            if !self.unordered_open {
                debug!("opening unordered list");
                writeln!(out, "<ul>")?;
                self.unordered_open = true;
            }
            rendered = format!("<li>{}</li>", trim_line(line.trim_start_matches('-')));
        } else if self.unordered_open {
            debug!("closing unordered list");
            writeln!(out, "</ul>")?;
            self.unordered_open = false;
        }

        if shape.stars > 0 {
            if !self.ordered_open {
                debug!("opening ordered list");
                writeln!(out, "<ol>")?;
                self.ordered_open = true;
            }
            rendered = format!("<li>{}</li>", trim_line(line.trim_start_matches('*')));
        } else if self.ordered_open {
            debug!("closing ordered list");
            writeln!(out, "</ol>")?;
            self.ordered_open = false;
        }

        if heading.is_none() && !self.unordered_open && !self.ordered_open {
            if shape.is_substantive() {
                if self.paragraph_open {
                    writeln!(out, "<br/>")?;
                } else {
                    debug!("opening paragraph");
                    writeln!(out, "<p>")?;
                    self.paragraph_open = true;
                }
            } else if self.paragraph_open {
                debug!("closing paragraph");
                writeln!(out, "</p>")?;
                self.paragraph_open = false;
            }
        }

        if shape.is_substantive() {
            writeln!(out, "{rendered}")?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Close every block still open at the end of the document
    ///
    /// Tags are emitted in the order `</ul>`, `</ol>`, `</p>`, and the state is
    /// reset so it can be reused.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.unordered_open {
            writeln!(out, "</ul>")?;
        }
        if self.ordered_open {
            writeln!(out, "</ol>")?;
        }
        if self.paragraph_open {
            writeln!(out, "</p>")?;
        }
        if !self.is_idle() {
            debug!("closed blocks left open at end of document");
        }

        *self = Self::default();
        Ok(())
    }
}
