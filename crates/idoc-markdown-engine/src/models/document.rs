use crate::models::{Block, PluginBlock};
use crate::parsing::{self, ParseError};
use crate::serializing;
use crate::validation::{self, ValidationReport};

/// A document as an ordered list of blocks in reading order.
///
/// Built by one parse (or by hand), edited freely, then serialized. It holds no
/// reference to the text it came from.
///
/// ```rust
/// # use idoc_markdown_engine::Document;
/// let text = "Intro\n\n```json vega\n{}\n```\n";
/// let mut doc = Document::from_markdown(text);
/// doc.plugins_mut().next().unwrap().content = "{\"mark\":\"bar\"}".into();
/// assert_eq!(doc.to_markdown(), "Intro\n\n```json vega\n{\"mark\":\"bar\"}\n```\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn from_markdown(text: &str) -> Self {
        parsing::parse(text)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        parsing::parse_bytes(bytes)
    }

    pub fn to_markdown(&self) -> String {
        serializing::serialize(self)
    }

    /// Checks that the blocks survive a serialize/parse round trip unchanged.
    pub fn validate(&self) -> Result<(), ValidationReport> {
        validation::validate(self)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn plugins(&self) -> impl Iterator<Item = &PluginBlock> {
        self.blocks.iter().filter_map(Block::as_plugin)
    }

    pub fn plugins_mut(&mut self) -> impl Iterator<Item = &mut PluginBlock> {
        self.blocks.iter_mut().filter_map(Block::as_plugin_mut)
    }

    /// Indices of plugin blocks whose source had no closing delimiter.
    pub fn unterminated(&self) -> Vec<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.as_plugin().is_some_and(|p| !p.is_terminated()))
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
