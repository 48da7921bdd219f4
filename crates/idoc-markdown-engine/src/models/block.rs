use serde::{Deserialize, Serialize};

use crate::plugins::PluginKind;

/// One segment of a document: verbatim prose or a fenced plugin block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Prose(ProseBlock),
    Plugin(PluginBlock),
}

impl Block {
    pub fn prose(markdown: impl Into<String>) -> Self {
        Block::Prose(ProseBlock {
            markdown: markdown.into(),
        })
    }

    pub fn plugin(language: impl Into<String>, content: impl Into<String>) -> Self {
        Block::Plugin(PluginBlock::new(language, content))
    }

    pub fn as_prose(&self) -> Option<&ProseBlock> {
        match self {
            Block::Prose(p) => Some(p),
            Block::Plugin(_) => None,
        }
    }

    pub fn as_plugin(&self) -> Option<&PluginBlock> {
        match self {
            Block::Plugin(p) => Some(p),
            Block::Prose(_) => None,
        }
    }

    pub fn as_plugin_mut(&mut self) -> Option<&mut PluginBlock> {
        match self {
            Block::Plugin(p) => Some(p),
            Block::Prose(_) => None,
        }
    }

    pub fn is_plugin(&self) -> bool {
        matches!(self, Block::Plugin(_))
    }
}

/// Free-form markdown kept byte for byte, separators included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProseBlock {
    pub markdown: String,
}

/// A fenced block whose info-string names the plugin that consumes it.
///
/// Equality compares `language` and `content` only; the fence layout is
/// presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginBlock {
    pub language: String,
    pub content: String,
    #[serde(skip)]
    layout: FenceLayout,
}

impl PluginBlock {
    /// A new block with the canonical fence layout.
    pub fn new(language: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_layout(language.into(), content.into(), FenceLayout::default())
    }

    pub(crate) fn with_layout(language: String, content: String, layout: FenceLayout) -> Self {
        Self {
            language,
            content,
            layout,
        }
    }

    pub fn layout(&self) -> &FenceLayout {
        &self.layout
    }

    /// False when the source ended before a closing delimiter.
    pub fn is_terminated(&self) -> bool {
        self.layout.terminated
    }

    /// Classifies the language against the built-in vocabulary.
    pub fn kind(&self) -> PluginKind<'_> {
        PluginKind::of(&self.language)
    }
}

impl PartialEq for PluginBlock {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && self.content == other.content
    }
}

impl Eq for PluginBlock {}

/// How a plugin block's delimiters were written in its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceLayout {
    pub(crate) opening: Option<String>,
    pub(crate) closing: Option<String>,
    pub(crate) terminated: bool,
    pub(crate) empty_body: bool,
}

impl FenceLayout {
    pub(crate) fn recorded(opening: String, closing: Option<String>, empty_body: bool) -> Self {
        Self {
            opening: Some(opening),
            terminated: closing.is_some(),
            closing,
            empty_body,
        }
    }

    /// The opening delimiter line as parsed, without its newline.
    pub fn opening_line(&self) -> Option<&str> {
        self.opening.as_deref()
    }

    /// The closing delimiter line as parsed, without its newline.
    pub fn closing_line(&self) -> Option<&str> {
        self.closing.as_deref()
    }

    /// True when no line sat between the parsed delimiters.
    pub fn is_empty_body(&self) -> bool {
        self.empty_body
    }
}

impl Default for FenceLayout {
    fn default() -> Self {
        Self {
            opening: None,
            closing: None,
            terminated: true,
            empty_body: false,
        }
    }
}
