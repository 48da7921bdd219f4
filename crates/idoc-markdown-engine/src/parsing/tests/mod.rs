//! Parser tests.
//!
//! Fixtures (.md) live in `fixtures/`; each is checked against the parser
//! invariants and an expected block shape.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Block, Document};
use crate::parsing::parse;

/// One entry per block: `"prose"` or the plugin language.
fn shape(doc: &Document) -> Vec<&str> {
    doc.iter()
        .map(|b| match b {
            Block::Prose(_) => "prose",
            Block::Plugin(p) => p.language.as_str(),
        })
        .collect()
}

fn load_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

// Fixture-based tests

#[rstest]
#[case::shopping_list(
    "shopping_list",
    &["prose", "json tabulator", "prose", "json vega-lite", "prose"]
)]
#[case::dashboard(
    "dashboard",
    &[
        "prose", "css", "csv salesData", "yaml dropdown", "prose", "yaml slider", "prose",
        "yaml number", "prose", "yaml mermaid", "prose", "json vega", "prose",
    ]
)]
#[case::plain_fences("plain_fences", &["prose", "yaml treebark", "prose"])]
#[case::unterminated("unterminated", &["prose", "json vega-lite"])]
#[case::no_final_newline("no_final_newline", &["prose", "css"])]
#[case::opens_with_plugin(
    "opens_with_plugin",
    &["json tabulator", "prose", "csv people", "prose"]
)]
fn fixture_shape(#[case] name: &str, #[case] expected: &[&str]) {
    let md = load_fixture(name);
    let doc = parse(&md);
    invariants::check(&md, &doc);
    assert_eq!(shape(&doc), expected);
}

#[test]
fn fixture_shopping_list_blocks() {
    let doc = parse(&load_fixture("shopping_list"));

    assert_eq!(
        doc.blocks[0],
        Block::prose("## Select the items you want to buy\n\n")
    );
    assert_eq!(
        doc.blocks[2],
        Block::prose("\n\n## Total Price\n\n${{total}}\n\n### Categories\n\n")
    );
    let Block::Plugin(table) = &doc.blocks[1] else {
        panic!("expected plugin block");
    };
    assert!(table.content.starts_with("{\n  \"dataSourceName\": \"itemsData\","));
    assert!(table.content.ends_with("\"variableId\": \"itemsData_selected\"\n}"));
    assert_eq!(doc.blocks[4], Block::prose("\n"));
}

#[test]
fn fixture_unterminated_keeps_rest_of_input() {
    let doc = parse(&load_fixture("unterminated"));
    let plugin = doc.blocks[1].as_plugin().unwrap();
    assert!(!plugin.is_terminated());
    assert_eq!(plugin.content, "{\n  \"mark\": \"line\"\n");
}

#[test]
fn fixture_plain_fences_stay_prose() {
    let doc = parse(&load_fixture("plain_fences"));
    let prose = doc.blocks[0].as_prose().unwrap();
    assert!(prose.markdown.contains("```json vega\n{\"mark\": \"point\"}\n```"));
    assert!(prose.markdown.contains("```yaml slider\nnot a slider\n```\n~~~\n\n"));
}

#[test]
fn fixture_carriage_returns_stay_in_prose() {
    let doc = parse(&load_fixture("opens_with_plugin"));
    let csv = doc.blocks[2].as_plugin().unwrap();
    assert_eq!(csv.content, "name\nada");
    assert_eq!(csv.layout().closing_line(), Some("```\r"));
    assert_eq!(doc.blocks[3], Block::prose("\n\r\nCRLF prose\r\n"));
}

// Scenario tests

#[test]
fn intro_plugin_outro() {
    let text = "Intro\n\n```json vega\n{\"a\":1}\n```\n\nOutro";
    let doc = parse(text);
    invariants::check(text, &doc);
    assert_eq!(
        doc.blocks,
        vec![
            Block::prose("Intro\n\n"),
            Block::plugin("json vega", "{\"a\":1}"),
            Block::prose("\n\nOutro"),
        ]
    );
}

#[test]
fn empty_document() {
    let doc = parse("");
    assert!(doc.is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse("\n\n\n");
    assert_eq!(doc.blocks, vec![Block::prose("\n\n\n")]);
}

#[test]
fn adjacent_plugins_have_no_prose_between() {
    let text = "```css\na{}\n```\n```csv data\nx\n```";
    let doc = parse(text);
    invariants::check(text, &doc);
    assert_eq!(
        doc.blocks,
        vec![Block::plugin("css", "a{}"), Block::plugin("csv data", "x")]
    );
}

#[test]
fn blank_line_between_plugins_is_prose() {
    let doc = parse("```css\na{}\n```\n\n```css\nb{}\n```");
    assert_eq!(doc.blocks[1], Block::prose("\n\n"));
}

#[test]
fn unterminated_fence_content_runs_to_end() {
    let text = "Intro\n```yaml slider\nvariableId: x\nmin: 0";
    let doc = parse(text);
    invariants::check(text, &doc);
    let plugin = doc.blocks[1].as_plugin().unwrap();
    assert_eq!(plugin.content, "variableId: x\nmin: 0");
    assert!(!plugin.is_terminated());
    assert_eq!(plugin.layout().closing_line(), None);
}

#[test]
fn plain_fence_line_is_prose() {
    let text = "```\nplain\n```\n";
    let doc = parse(text);
    invariants::check(text, &doc);
    assert_eq!(doc.blocks, vec![Block::prose(text)]);
}

#[test]
fn unclosed_plain_fence_swallows_the_rest() {
    let text = "```\n```json vega\n{}\n```json vega\n";
    let doc = parse(text);
    invariants::check(text, &doc);
    assert_eq!(doc.len(), 1);
}

#[test]
fn fence_inside_plugin_is_content() {
    let text = "````yaml treebark\n```json vega\n{}\n```\n````";
    let doc = parse(text);
    invariants::check(text, &doc);
    assert_eq!(
        doc.blocks,
        vec![Block::plugin("yaml treebark", "```json vega\n{}\n```")]
    );
}

#[test]
fn closing_fence_with_info_does_not_close() {
    let text = "```css\na{}\n```css\n```";
    let doc = parse(text);
    invariants::check(text, &doc);
    assert_eq!(doc.blocks, vec![Block::plugin("css", "a{}\n```css")]);
}

#[test]
fn tilde_plugin_ignores_backtick_closer() {
    let text = "~~~css\na{}\n```\n~~~";
    let doc = parse(text);
    invariants::check(text, &doc);
    assert_eq!(doc.blocks, vec![Block::plugin("css", "a{}\n```")]);
}

#[test]
fn info_string_is_trimmed() {
    let text = "```   json   vega  \n{}\n```";
    let doc = parse(text);
    invariants::check(text, &doc);
    assert_eq!(doc.blocks[0].as_plugin().unwrap().language, "json   vega");
}

#[test]
fn indented_fences_are_recognized() {
    let text = "  ```css\na{}\n   ```\n";
    let doc = parse(text);
    invariants::check(text, &doc);
    assert_eq!(doc.blocks[0], Block::plugin("css", "a{}"));
}

#[test]
fn inline_triple_backticks_are_prose() {
    let text = "```let x = 1``` is inline\n";
    let doc = parse(text);
    invariants::check(text, &doc);
    assert_eq!(doc.blocks, vec![Block::prose(text)]);
}

#[rstest]
#[case::no_newline("Hello")]
#[case::final_newline("Hello\n")]
#[case::plugin_no_newline("```css\na{}\n```")]
#[case::plugin_final_newline("```css\na{}\n```\n")]
#[case::plugin_two_newlines("```css\na{}\n```\n\n")]
#[case::only_fence("```css")]
#[case::fence_and_newline("```css\n")]
#[case::empty_body("```css\n```")]
#[case::blank_body("```css\n\n```")]
#[case::blank_lines_in_body("```css\n\n\na{}\n\n\n```")]
#[case::leading_blank("\n```css\na{}\n```")]
#[case::crlf("a\r\n```css\r\na{}\r\n```\r\nb\r\n")]
#[case::unicode("Ünïcødé ✓\n```yaml mermaid\ngraph: \"→\"\n```\n日本語")]
fn trailing_newlines_round_trip_exactly(#[case] text: &str) {
    invariants::check(text, &parse(text));
}
