pub mod blocks;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::models::{Block, Document, FenceLayout, PluginBlock, ProseBlock};
use blocks::{BlockBuilder, BlockKind, BlockNode, LineClassifier};
use rope::{lines_with_spans, slice_to_string};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Parses document text into blocks. Never fails: malformed fences are
/// recovered at end of input.
pub fn parse(text: &str) -> Document {
    parse_document(&Rope::from(text))
}

/// Parses raw bytes, rejecting input that is not UTF-8 text.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document, ParseError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse(text))
}

pub fn parse_document(rope: &Rope) -> Document {
    let nodes = build_nodes(rope);
    let blocks: Vec<Block> = nodes.iter().map(|node| to_block(rope, node)).collect();

    for (index, block) in blocks.iter().enumerate() {
        if let Block::Plugin(plugin) = block
            && !plugin.is_terminated()
        {
            log::warn!(
                "block {index}: `{}` fence has no closing delimiter; closed at end of input",
                plugin.language
            );
        }
    }
    log::debug!("parsed {} bytes into {} blocks", rope.len(), blocks.len());

    Document::new(blocks)
}

/// What a prose run would do to the parser if it stood between plugin blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProseScan {
    /// Some line would open a plugin block.
    pub opens_plugin: bool,
    /// The text ends inside an un-annotated fence.
    pub ends_in_plain_fence: bool,
}

pub(crate) fn scan_prose(text: &str) -> ProseScan {
    let rope = Rope::from(text);
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();
    for lr in lines_with_spans(&rope) {
        builder.push(&classifier.classify(&lr));
    }
    let ends_in_plain_fence = builder.in_plain_fence();
    let opens_plugin = builder.finish(rope.len()).iter().any(BlockNode::is_plugin);
    ProseScan {
        opens_plugin,
        ends_in_plain_fence,
    }
}

fn build_nodes(rope: &Rope) -> Vec<BlockNode> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    builder.finish(rope.len())
}

fn to_block(rope: &Rope, node: &BlockNode) -> Block {
    match &node.kind {
        BlockKind::Prose => Block::Prose(ProseBlock {
            markdown: slice_to_string(rope, node.span),
        }),
        BlockKind::Plugin {
            language,
            opening,
            closing,
            empty_body,
            ..
        } => {
            let layout = FenceLayout::recorded(
                slice_to_string(rope, *opening),
                closing.map(|sp| slice_to_string(rope, sp)),
                *empty_body,
            );
            Block::Plugin(PluginBlock::with_layout(
                language.clone(),
                slice_to_string(rope, node.content_span),
                layout,
            ))
        }
    }
}
