//! Canned content for the terminal fiction
//!
//! Classification labels, identifiers, and the string tables every
//! "intelligent" response is drawn from.

pub mod evidence;
pub mod tables;

pub use evidence::*;
pub use tables::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification labels attached to system messages
///
/// Purely cosmetic flavor. The UNCLASSIFIED..TOP SECRET ladder carries no
/// access-control meaning; WARNING/ERROR/ALERT/CRITICAL mark in-fiction
/// "failures" that are just rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    Unclassified,
    Confidential,
    Secret,
    TopSecret,
    Warning,
    Error,
    Alert,
    Critical,
}

impl Classification {
    pub fn color(&self) -> &'static str {
        match self {
            Classification::Unclassified => "gray",
            Classification::Confidential => "blue",
            Classification::Secret => "yellow",
            Classification::TopSecret => "magenta",
            Classification::Warning => "yellow",
            Classification::Error => "red",
            Classification::Alert => "red",
            Classification::Critical => "magenta",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Unclassified => write!(f, "UNCLASSIFIED"),
            Classification::Confidential => write!(f, "CONFIDENTIAL"),
            Classification::Secret => write!(f, "SECRET"),
            Classification::TopSecret => write!(f, "TOP SECRET"),
            Classification::Warning => write!(f, "WARNING"),
            Classification::Error => write!(f, "ERROR"),
            Classification::Alert => write!(f, "ALERT"),
            Classification::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}
