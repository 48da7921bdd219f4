//! # Block Parsing
//!
//! Two-phase parsing of a document into prose and plugin blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (spans, newline, fence opener).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine
//!    (`in-prose`, `in-plain-fence`, `in-plugin`) emits `BlockNode`s as
//!    blocks open and close.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode` and `BlockKind`
//! - **`kinds`**: fence syntax (`CodeFence`, `Fence`, `FenceMarker`)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Plugin bodies are raw zones: nothing inside them is reparsed
//! - Un-annotated fences are prose, and so is everything they enclose
//! - Node spans tile the input; the lone newline joining two plugin blocks is
//!   the only byte left uncovered

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, Opener};
pub use types::{BlockKind, BlockNode};
