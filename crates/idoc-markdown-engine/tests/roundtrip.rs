use idoc_markdown_engine::{
    Block, Document, MarkdownDocument, PluginKind, parse, serialize, validate,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Text fragments that are each a whole number of lines.
const FRAGMENTS: &[&str] = &[
    "",
    "\n",
    "# Heading\n",
    "Some *prose* with `code`.\n",
    "```json vega\n{\"mark\": \"bar\"}\n```\n",
    "```csv salesData\nregion,total\nnorth,1\n```\n",
    "```yaml slider\n```\n",
    "```css\n\n```\n",
    "```\nplain code\n```\n",
    "~~~~yaml treebark\n```\n~~~~\n",
    "```unknown-plugin x\nanything\n```\n",
    "```json tabulator\n{}\n",
    "```` \n",
];

#[test]
fn every_fragment_combination_round_trips() {
    for a in FRAGMENTS {
        for b in FRAGMENTS {
            for c in FRAGMENTS {
                let text = format!("{a}{b}{c}");
                let doc = parse(&text);
                assert_eq!(serialize(&doc), text, "text round trip for {text:?}");
                assert_eq!(parse(&serialize(&doc)), doc, "structural round trip for {text:?}");
                assert!(validate(&doc).is_ok(), "parsed document invalid for {text:?}");

                let trimmed = text.trim_end_matches('\n');
                assert_eq!(serialize(&parse(trimmed)), trimmed);
            }
        }
    }
}

#[rstest]
#[case::single_plugin(vec![Block::plugin("json vega", "{}")])]
#[case::adjacent_plugins(vec![
    Block::plugin("css", "p { margin: 0; }"),
    Block::plugin("csv people", "name\nada"),
    Block::plugin("yaml number", ""),
])]
#[case::prose_sandwich(vec![
    Block::prose("# Title\n\n"),
    Block::plugin("yaml mermaid", "graph TD\n  A --> B"),
    Block::prose("\n\nClosing words."),
])]
#[case::content_with_fences(vec![
    Block::prose("Example:\n"),
    Block::plugin("yaml treebark", "```\n````\n~~~"),
])]
#[case::backtick_language(vec![Block::plugin("weird`tag", "x")])]
#[case::trailing_newlines_in_content(vec![Block::plugin("css", "a{}\n\n")])]
#[case::prose_with_plain_fence(vec![
    Block::prose("```\n```json vega\n```\n"),
    Block::plugin("json vega", "{}"),
])]
fn built_documents_round_trip(#[case] blocks: Vec<Block>) {
    let doc = Document::new(blocks);
    assert!(validate(&doc).is_ok());

    let text = serialize(&doc);
    assert_eq!(parse(&text), doc);
    assert_eq!(serialize(&parse(&text)), text);
}

#[test]
fn empty_block_list_serializes_to_nothing() {
    assert_eq!(serialize(&Document::default()), "");
    assert_eq!(parse(""), Document::default());
}

#[test]
fn editing_one_block_leaves_the_rest_byte_identical() {
    let text = "## Chart\n\n~~~json vega-lite   \n{\"mark\": \"bar\"}\n~~~~\n\nText with  double  spaces.\n\n```yaml slider\nvariableId: x\n```\n";
    let mut doc = parse(text);

    let chart = doc.blocks[1].as_plugin_mut().unwrap();
    chart.content = "{\"mark\": \"line\"}".into();

    assert_eq!(
        serialize(&doc),
        text.replace("{\"mark\": \"bar\"}", "{\"mark\": \"line\"}")
    );
}

#[test]
fn inserting_and_removing_blocks() {
    let mut doc = parse("# Title\n\n```css\na{}\n```\n\nEnd\n");

    doc.blocks.insert(2, Block::plugin("csv extra", "n\n1"));
    assert!(validate(&doc).is_ok());
    assert_eq!(
        serialize(&doc),
        "# Title\n\n```css\na{}\n```\n```csv extra\nn\n1\n```\n\nEnd\n"
    );

    doc.blocks.remove(1);
    assert_eq!(serialize(&doc), "# Title\n\n```csv extra\nn\n1\n```\n\nEnd\n");
}

#[test]
fn agent_edit_through_json_envelope() {
    let text = "## Select the items\n\n```json tabulator\n{\"dataSourceName\": \"items\"}\n```\n\n### Categories\n\n```json vega-lite\n{\"mark\": \"bar\"}\n```";

    let json = MarkdownDocument::with_default_schema(parse(text))
        .to_json()
        .unwrap();
    let mut envelope = MarkdownDocument::from_json(&json).unwrap();
    let Block::Plugin(chart) = &mut envelope.blocks[3] else {
        panic!("expected the chart block");
    };
    chart.content = "{\"mark\": \"bar\", \"title\": \"Items\"}".into();

    let edited = serialize(&envelope.into_document());
    assert_eq!(
        edited,
        text.replace("{\"mark\": \"bar\"}", "{\"mark\": \"bar\", \"title\": \"Items\"}")
    );
}

#[test]
fn serialize_is_idempotent_after_reparse() {
    let doc = Document::new(vec![
        Block::prose("Intro\n"),
        Block::plugin("json vega", "{}\n```"),
        Block::plugin("css", ""),
    ]);
    let once = serialize(&doc);
    assert_eq!(serialize(&parse(&once)), once);
}

#[test]
fn classification_of_parsed_blocks() {
    let doc = parse("```csv salesData\na\n```\n```csv\nb\n```\n```json vega\n{}\n```");
    let kinds: Vec<_> = doc.plugins().map(|p| p.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            PluginKind::Csv {
                data_source: "salesData"
            },
            PluginKind::Generic,
            PluginKind::Vega,
        ]
    );
}
