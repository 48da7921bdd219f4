// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_document(sections: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\nParagraph with some content.\n\n"));
        content.push_str("```json vega-lite\n{\n  \"mark\": \"bar\",\n  \"data\": {\"name\": \"sales\"}\n}\n```\n");
        content.push_str("```csv sales\nregion,total\nnorth,1\nsouth,2\n```\n\n");
        content.push_str("```\nplain code\n```\n\n");
    }
    content
}
