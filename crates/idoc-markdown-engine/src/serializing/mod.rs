//! # Block Serializer
//!
//! Writes blocks back to text. Prose is copied verbatim; plugin blocks reuse
//! the delimiter lines they were parsed from while those still fit, and fall
//! back to a canonical fence otherwise.

use std::borrow::Cow;

use crate::models::{Block, Document, PluginBlock};
use crate::parsing::blocks::kinds::{CodeFence, FenceMarker};

/// Serializes a document. `serialize(&parse(t)) == t` for any text `t`.
pub fn serialize(doc: &Document) -> String {
    serialize_blocks(&doc.blocks)
}

pub fn serialize_blocks(blocks: &[Block]) -> String {
    let capacity = blocks
        .iter()
        .map(|b| match b {
            Block::Prose(p) => p.markdown.len(),
            Block::Plugin(p) => p.language.len() + p.content.len() + 16,
        })
        .sum();
    let mut out = String::with_capacity(capacity);

    let mut after_plugin = false;
    for block in blocks {
        match block {
            Block::Prose(prose) => {
                out.push_str(&prose.markdown);
                after_plugin = false;
            }
            Block::Plugin(plugin) => {
                // Consecutive plugin blocks share exactly one newline.
                if after_plugin {
                    out.push('\n');
                }
                write_plugin(&mut out, plugin);
                after_plugin = true;
            }
        }
    }

    log::debug!("serialized {} blocks into {} bytes", blocks.len(), out.len());
    out
}

/// Appends one plugin block: opening line, body, closing line.
pub fn write_plugin(out: &mut String, block: &PluginBlock) {
    let (opening, closing) = delimiters(block);

    out.push_str(&opening);
    let bodyless = block.layout().is_empty_body() && block.content.is_empty();
    if !bodyless {
        out.push('\n');
        out.push_str(&block.content);
    }
    if let Some(closing) = closing {
        out.push('\n');
        out.push_str(&closing);
    }
}

/// Picks the delimiter lines for a block. `None` closing means the block is
/// written unterminated, as it was parsed.
fn delimiters(block: &PluginBlock) -> (Cow<'_, str>, Option<Cow<'_, str>>) {
    let layout = block.layout();
    if let Some(line) = layout.opening_line()
        && let Some(open) = CodeFence::open(line)
        && open.info.trim() == block.language
        && CodeFence::encloses(open.fence, &block.content)
    {
        if !block.is_terminated() {
            return (Cow::Borrowed(line), None);
        }
        let closing = match layout.closing_line() {
            Some(c) if CodeFence::closes(open.fence, c) => Cow::Borrowed(c),
            _ => Cow::Owned(open.fence.to_string()),
        };
        return (Cow::Borrowed(line), Some(closing));
    }

    let (opening, closing) = canonical_delimiters(&block.language, &block.content);
    (Cow::Owned(opening), Some(Cow::Owned(closing)))
}

/// Canonical delimiters: backticks unless the language holds one, long enough
/// that no content line closes the block early.
pub fn canonical_delimiters(language: &str, content: &str) -> (String, String) {
    let marker = if language.contains('`') {
        FenceMarker::Tilde
    } else {
        FenceMarker::Backtick
    };
    let fence = CodeFence::fitting(marker, content);
    let gap = if language.starts_with(marker.as_char()) {
        " "
    } else {
        ""
    };
    (format!("{fence}{gap}{language}"), fence.to_string())
}
