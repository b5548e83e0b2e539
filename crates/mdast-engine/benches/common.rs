// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section ##\n\nParagraph with some content.\nAnother line of it.\n\nSetext Heading\n==============\n\n***\n\n\\# escaped opener\n- - -\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_setext_heavy(sections: usize, lines_per_heading: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        for line in 0..lines_per_heading {
            content.push_str(&format!("Section {section} line {line}\n"));
        }
        content.push_str(if section % 2 == 0 { "===\n\n" } else { "---\n\n" });
    }

    content
}
