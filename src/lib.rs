//! Collective Unconscious Terminal
//!
//! An alternate-reality-game console: a themed terminal that fabricates
//! system messages, scripted "entity" responses, randomized atmospheric
//! events, and a handful of faux command handlers.
//!
//! Nothing here is real. There is no backend, no network, no persistence.
//! Every "other user" is a string table, every "trace" is fabricated, and
//! the "encryption" is a reversible encoding toy.
//!
//! # Architecture
//!
//! - `session` - Core terminal logic: state, message dispatch, commands,
//!   the virtual-time scheduler that sequences delayed text
//! - `content` - Canned string tables, classification labels, evidence data
//! - `tui` - Terminal user interface with ratatui

pub mod content;
pub mod session;
pub mod tui;

pub use session::Session;

/// Terminal version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the terminal
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum TerminalError {
    #[error("Decode failure: {0}")]
    DecodeFailure(String),

    #[error("Evidence file not found: index {0}")]
    EvidenceNotFound(usize),
}
