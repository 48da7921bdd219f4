//! JSON packaging of a document under a root object with an optional
//! `$schema` field, as consumed by validation tooling.

use serde::{Deserialize, Serialize};

use crate::models::{Block, Document};
use crate::validation::{self, ValidationReport};

/// Identifier of the published markdown-mode document schema.
pub const SCHEMA_ID: &str = "https://microsoft.github.io/chartifact/schema/idoc_markdown_v1.json";

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("invalid envelope JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ValidationReport),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownDocument {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub blocks: Vec<Block>,
}

impl MarkdownDocument {
    pub fn wrap(doc: Document, schema: Option<String>) -> Self {
        Self {
            schema,
            blocks: doc.blocks,
        }
    }

    /// Wraps a document tagged with [`SCHEMA_ID`].
    pub fn with_default_schema(doc: Document) -> Self {
        Self::wrap(doc, Some(SCHEMA_ID.to_string()))
    }

    pub fn into_document(self) -> Document {
        Document::new(self.blocks)
    }

    pub fn to_json(&self) -> Result<String, EnvelopeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads an envelope and checks that its blocks can be serialized
    /// without changing shape.
    pub fn from_json(json: &str) -> Result<Self, EnvelopeError> {
        let envelope: Self = serde_json::from_str(json)?;
        validation::validate(&Document::new(envelope.blocks.clone()))?;
        Ok(envelope)
    }
}
