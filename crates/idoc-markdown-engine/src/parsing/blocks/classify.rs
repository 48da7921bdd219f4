use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, Fence};

/// A line that looks like an opening fence delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opener {
    pub fence: Fence,
    /// Info-string after the fence run, untrimmed.
    pub info: String,
}

impl Opener {
    /// The trimmed info-string; empty for a plain fence.
    pub fn language(&self) -> &str {
        self.info.trim()
    }
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope, newline included.
    pub line: Span,
    /// Span of the line without its newline.
    pub body: Span,
    /// Line text without its newline.
    pub text: String,
    /// Whether the line ends with `\n`.
    pub has_newline: bool,
    /// Set if the line could open a fenced block.
    pub opener: Option<Opener>,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.body();
        let opener = CodeFence::open(text).map(|open| Opener {
            fence: open.fence,
            info: open.info.to_string(),
        });

        LineClass {
            line: lr.span,
            body: lr.body_span(),
            text: text.to_string(),
            has_newline: lr.has_newline(),
            opener,
        }
    }
}
