use crate::parsing::rope::span::Span;

use super::kinds::Fence;

/// The kind of a top-level block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Verbatim text between plugin blocks, plain fences included.
    Prose,
    /// An annotated fenced block.
    Plugin {
        fence: Fence,
        /// Trimmed info-string.
        language: String,
        /// The opening delimiter line, without its newline.
        opening: Span,
        /// The closing delimiter line; `None` when input ended first.
        closing: Option<Span>,
        /// True when no line sat between the delimiters.
        empty_body: bool,
    },
}

/// A parsed block with its spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Prose text, or plugin content between the delimiter lines.
    pub content_span: Span,
}

impl BlockNode {
    pub fn is_plugin(&self) -> bool {
        matches!(self.kind, BlockKind::Plugin { .. })
    }
}
