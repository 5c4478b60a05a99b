//! Feature Independence Tests
//!
//! The three inline stages (bold/emphasis, content hash, letter strip) can be
//! toggled separately. Disabling one stage must not change what the others
//! produce, and block structure must not depend on any of them.

use markdown_html_converter::converter::{ConversionOptions, HtmlConverter};
use markdown_html_converter::digest::ContentHasher;
use proptest::prelude::*;

const SAMPLE: &str = "**b** [[k]] ((Cc x))";

fn convert_with(bold_and_emphasis: bool, content_hash: bool, strip_letter_c: bool) -> String {
    HtmlConverter::with_options(ConversionOptions {
        bold_and_emphasis,
        content_hash,
        strip_letter_c,
    })
    .convert_str(SAMPLE)
    .expect("Conversion failed")
}

fn paragraph(content: &str) -> String {
    format!("<p>\n{content}\n</p>\n")
}

#[test]
fn test_all_enabled() {
    let digest = ContentHasher::new().digest(b"k");
    assert_eq!(
        convert_with(true, true, true),
        paragraph(&format!("<b>b</b> {digest}  x"))
    );
}

#[test]
fn test_all_disabled() {
    assert_eq!(convert_with(false, false, false), paragraph(SAMPLE));
}

#[test]
fn test_bold_only() {
    assert_eq!(
        convert_with(true, false, false),
        paragraph("<b>b</b> [[k]] ((Cc x))")
    );
}

#[test]
fn test_hash_only() {
    let digest = ContentHasher::new().digest(b"k");
    // The leading "**" now marks an ordered list item
    assert_eq!(
        convert_with(false, true, false),
        format!("<ol>\n<li>b** {digest} ((Cc x))</li>\n</ol>\n")
    );
}

#[test]
fn test_strip_only() {
    assert_eq!(
        convert_with(false, false, true),
        "<ol>\n<li>b** [[k]]  x</li>\n</ol>\n"
    );
}

proptest! {
    /// Block tags are the same whichever inline stages run, for input
    /// without inline markup
    #[test]
    fn prop_blocks_independent_of_inline_options(
        lines in prop::collection::vec("(# |- |\\* )?[a-z ]{0,10}", 0..30),
        bold in any::<bool>(),
        hash in any::<bool>(),
        strip in any::<bool>(),
    ) {
        let markdown = lines.join("\n");
        let baseline = HtmlConverter::new()
            .convert_str(&markdown)
            .expect("Conversion failed");
        let toggled = HtmlConverter::with_options(ConversionOptions {
            bold_and_emphasis: bold,
            content_hash: hash,
            strip_letter_c: strip,
        })
        .convert_str(&markdown)
        .expect("Conversion failed");

        prop_assert_eq!(baseline, toggled);
    }
}
