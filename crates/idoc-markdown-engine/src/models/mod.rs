pub mod block;
pub mod document;

pub use block::{Block, FenceLayout, PluginBlock, ProseBlock};
pub use document::Document;
