use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    kinds::{CodeFence, Fence},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone)]
enum State {
    InProse,
    /// Inside an un-annotated fence. Its lines are prose, but nothing inside
    /// can open a plugin block until the fence closes.
    InPlainFence { fence: Fence },
    InPlugin {
        fence: Fence,
        language: String,
        opening: Span,
        opening_has_newline: bool,
        body_start: usize,
    },
}

/// Line-driven state machine emitting prose and plugin block nodes.
pub struct BlockBuilder {
    state: State,
    /// Start of the pending prose run.
    prose_start: usize,
    /// Set while the last emitted node is a closed plugin block.
    after_plugin: bool,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: State::InProse,
            prose_start: 0,
            after_plugin: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        match &self.state {
            State::InPlugin { .. } => self.consume_plugin_line(c),
            State::InPlainFence { fence } => {
                if CodeFence::closes(*fence, &c.text) {
                    self.state = State::InProse;
                }
            }
            State::InProse => {
                let Some(opener) = &c.opener else {
                    return;
                };
                let language = opener.language();
                if language.is_empty() {
                    self.state = State::InPlainFence {
                        fence: opener.fence,
                    };
                    return;
                }
                let state = State::InPlugin {
                    fence: opener.fence,
                    language: language.to_string(),
                    opening: c.body,
                    opening_has_newline: c.has_newline,
                    body_start: c.line.end,
                };
                self.flush_prose(c.line.start, true);
                self.state = state;
            }
        }
    }

    /// True while an un-annotated fence is still open.
    pub fn in_plain_fence(&self) -> bool {
        matches!(self.state, State::InPlainFence { .. })
    }

    /// Flushes pending text at end of input (`len` bytes) and returns the nodes.
    ///
    /// An unterminated plugin block runs to the end of input.
    pub fn finish(mut self, len: usize) -> Vec<BlockNode> {
        let state = std::mem::replace(&mut self.state, State::InProse);
        match state {
            State::InPlugin {
                fence,
                language,
                opening,
                opening_has_newline,
                body_start,
            } => {
                self.out.push(BlockNode {
                    kind: BlockKind::Plugin {
                        fence,
                        language,
                        opening,
                        closing: None,
                        empty_body: !opening_has_newline,
                    },
                    span: Span::new(opening.start, len),
                    content_span: Span::new(body_start, len),
                });
            }
            State::InProse | State::InPlainFence { .. } => self.flush_prose(len, false),
        }
        self.out
    }

    fn consume_plugin_line(&mut self, c: &LineClass) {
        let State::InPlugin { fence, .. } = &self.state else {
            return;
        };
        if !CodeFence::closes(*fence, &c.text) {
            return;
        }

        let State::InPlugin {
            fence,
            language,
            opening,
            body_start,
            ..
        } = std::mem::replace(&mut self.state, State::InProse)
        else {
            return;
        };

        // The newline before the closing line belongs to neither content nor prose.
        let empty_body = body_start == c.line.start;
        let content_span = if empty_body {
            Span::empty(body_start)
        } else {
            Span::new(body_start, c.line.start - 1)
        };

        self.out.push(BlockNode {
            kind: BlockKind::Plugin {
                fence,
                language,
                opening,
                closing: Some(c.body),
                empty_body,
            },
            span: Span::new(opening.start, c.body.end),
            content_span,
        });
        self.prose_start = c.body.end;
        self.after_plugin = true;
    }

    fn flush_prose(&mut self, end: usize, before_plugin: bool) {
        let span = Span::new(self.prose_start, end);
        self.prose_start = end;
        if span.is_empty() {
            return;
        }
        // A lone newline between two plugin blocks is the joint the
        // serializer writes back; it is not a prose block.
        if before_plugin && self.after_plugin && span.len() == 1 {
            self.after_plugin = false;
            return;
        }
        self.out.push(BlockNode {
            kind: BlockKind::Prose,
            span,
            content_span: span,
        });
        self.after_plugin = false;
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
