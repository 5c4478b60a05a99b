//! Basic conversion example demonstrating the Markdown converter

use markdown_html_converter::converter::HtmlConverter;

fn main() {
    println!("=== Markdown HTML Converter - Basic Examples ===\n");

    // Example 1: Heading and paragraph
    show(
        "Example 1: Heading and paragraph",
        "# Welcome\nThis is a test document.\nIt spans two lines.",
    );

    // Example 2: Lists
    show(
        "Example 2: Unordered and ordered lists",
        "- apples\n- pears\n\n* wash\n* eat",
    );

    // Example 3: Inline spans
    show(
        "Example 3: Inline spans",
        "**bold**, __emphasis__, [[Hello]] and ((Cat City))",
    );

    // Example 4: All heading levels
    show(
        "Example 4: All heading levels",
        "# H1\n## H2\n### H3\n#### H4\n##### H5\n###### H6\n####### not a heading",
    );
}

fn show(title: &str, markdown: &str) {
    println!("{}", title);
    println!("Input Markdown:");
    println!("{}\n", markdown);

    let converter = HtmlConverter::new();
    let html = converter.convert_str(markdown).expect("Conversion failed");

    println!("Output HTML:");
    println!("{}", html);
    println!("---\n");
}
