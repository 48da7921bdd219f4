//! # Rendering sessions
//!
//! A [`Session`] owns the [`RenderHost`] it was constructed with and drives
//! it block by block. Hosts hold all output state, so any number of sessions
//! can run side by side in one process.

pub mod html;

use uuid::Uuid;

use crate::models::{Block, Document, PluginBlock};
use crate::parsing;
use crate::plugins::{PluginKind, PluginVocabulary};

pub use html::HtmlHost;

/// The capabilities a session needs from whatever displays a document.
pub trait RenderHost {
    fn render_prose(&mut self, index: usize, markdown: &str);

    fn render_plugin(&mut self, index: usize, block: &PluginBlock, kind: PluginKind<'_>);

    /// Reports a problem with a title and a human-readable detail.
    fn report_error(&mut self, title: &str, detail: &str);
}

pub struct Session<H: RenderHost> {
    id: Uuid,
    host: H,
    vocabulary: PluginVocabulary,
}

impl<H: RenderHost> Session<H> {
    pub fn new(host: H) -> Self {
        Self::with_vocabulary(host, PluginVocabulary::default())
    }

    pub fn with_vocabulary(host: H, vocabulary: PluginVocabulary) -> Self {
        Self {
            id: Uuid::new_v4(),
            host,
            vocabulary,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn vocabulary(&self) -> &PluginVocabulary {
        &self.vocabulary
    }

    /// Parses and renders text, returning the parsed document.
    pub fn render(&mut self, text: &str) -> Document {
        let doc = parsing::parse(text);
        self.render_document(&doc);
        doc
    }

    /// Like [`Session::render`] for raw bytes. Non-UTF-8 input is reported to
    /// the host and nothing is rendered.
    pub fn render_bytes(&mut self, bytes: &[u8]) -> Option<Document> {
        match parsing::parse_bytes(bytes) {
            Ok(doc) => {
                self.render_document(&doc);
                Some(doc)
            }
            Err(e) => {
                self.host.report_error("Invalid document", &e.to_string());
                None
            }
        }
    }

    pub fn render_document(&mut self, doc: &Document) {
        log::debug!("session {}: rendering {} blocks", self.id, doc.len());
        for (index, block) in doc.iter().enumerate() {
            match block {
                Block::Prose(prose) => self.host.render_prose(index, &prose.markdown),
                Block::Plugin(plugin) => {
                    if !plugin.is_terminated() {
                        self.host.report_error(
                            "Unterminated plugin block",
                            &format!(
                                "The `{}` block at position {index} has no closing fence; it runs to the end of the document.",
                                plugin.language
                            ),
                        );
                    }
                    let kind = self.vocabulary.classify(&plugin.language);
                    self.host.render_plugin(index, plugin, kind);
                }
            }
        }
    }
}
