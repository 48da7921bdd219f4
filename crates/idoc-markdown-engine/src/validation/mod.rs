//! Structural checks for caller-built documents.
//!
//! A parsed document always passes. A document assembled or edited by hand
//! passes exactly when `parse(serialize(doc)) == doc`.

use std::fmt;

use crate::models::{Block, Document, PluginBlock, ProseBlock};
use crate::parsing::scan_prose;

/// A reason a block would not survive a serialize/parse round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Issue {
    #[error("plugin language is empty")]
    EmptyLanguage,
    #[error("plugin language has surrounding whitespace")]
    UntrimmedLanguage,
    #[error("plugin language contains a line break")]
    MultilineLanguage,
    #[error("unterminated plugin block is followed by other blocks")]
    UnterminatedNotLast,
    #[error("prose block is empty")]
    EmptyProse,
    #[error("prose block follows another prose block")]
    AdjacentProse,
    #[error("prose before a plugin block does not end with a newline")]
    UnterminatedLine,
    #[error("prose after a plugin block does not start with a newline")]
    MissingSeparator,
    #[error("prose between two plugin blocks is only the joining newline")]
    JointOnly,
    #[error("prose contains a line that opens a plugin block")]
    ContainsPluginFence,
    #[error("prose leaves a plain fence open before a plugin block")]
    OpenPlainFence,
}

/// An issue located at a block index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockIssue {
    pub index: usize,
    pub issue: Issue,
}

impl fmt::Display for BlockIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block {}: {}", self.index, self.issue)
    }
}

/// Every issue found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<BlockIssue>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "document has {} invalid block(s)", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "; {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

pub fn validate(doc: &Document) -> Result<(), ValidationReport> {
    let issues = check(&doc.blocks);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationReport { issues })
    }
}

/// Collects issues for a block list in order.
pub fn check(blocks: &[Block]) -> Vec<BlockIssue> {
    let mut issues = Vec::new();
    let last = blocks.len().saturating_sub(1);

    for (index, block) in blocks.iter().enumerate() {
        let prev = index.checked_sub(1).and_then(|i| blocks.get(i));
        let next = blocks.get(index + 1);
        let found = match block {
            Block::Plugin(plugin) => check_plugin(plugin, index == last),
            Block::Prose(prose) => check_prose(prose, prev, next),
        };
        issues.extend(found.into_iter().map(|issue| BlockIssue { index, issue }));
    }

    issues
}

fn check_plugin(plugin: &PluginBlock, is_last: bool) -> Vec<Issue> {
    let mut issues = Vec::new();
    let language = plugin.language.as_str();
    if language.trim().is_empty() {
        issues.push(Issue::EmptyLanguage);
    } else if language.trim() != language {
        issues.push(Issue::UntrimmedLanguage);
    }
    if language.contains('\n') {
        issues.push(Issue::MultilineLanguage);
    }
    if !plugin.is_terminated() && !is_last {
        issues.push(Issue::UnterminatedNotLast);
    }
    issues
}

fn check_prose(prose: &ProseBlock, prev: Option<&Block>, next: Option<&Block>) -> Vec<Issue> {
    let text = prose.markdown.as_str();
    if text.is_empty() {
        return vec![Issue::EmptyProse];
    }

    let mut issues = Vec::new();
    let after_plugin = prev.and_then(Block::as_plugin);
    let before_plugin = next.is_some_and(Block::is_plugin);

    if matches!(prev, Some(Block::Prose(_))) {
        issues.push(Issue::AdjacentProse);
    }
    if after_plugin.is_some_and(PluginBlock::is_terminated) && !text.starts_with('\n') {
        issues.push(Issue::MissingSeparator);
    }
    if before_plugin && !text.ends_with('\n') {
        issues.push(Issue::UnterminatedLine);
    }
    if after_plugin.is_some() && before_plugin && text == "\n" {
        issues.push(Issue::JointOnly);
    }

    let scan = scan_prose(text);
    if scan.opens_plugin {
        issues.push(Issue::ContainsPluginFence);
    }
    if before_plugin && scan.ends_in_plain_fence {
        issues.push(Issue::OpenPlainFence);
    }
    issues
}
