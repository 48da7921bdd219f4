pub mod envelope;
pub mod io;
pub mod models;
pub mod parsing;
pub mod plugins;
pub mod rendering;
pub mod serializing;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use envelope::{EnvelopeError, MarkdownDocument, SCHEMA_ID};
pub use models::{Block, Document, FenceLayout, PluginBlock, ProseBlock};
pub use parsing::{ParseError, parse, parse_bytes};
pub use plugins::{PluginKind, PluginVocabulary};
pub use rendering::{HtmlHost, RenderHost, Session};
pub use serializing::serialize;
pub use validation::{BlockIssue, Issue, ValidationReport, validate};
