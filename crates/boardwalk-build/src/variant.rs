//! Board variant selection
//!
//! A variant is the board-specific pin-mapping/startup source set, compiled
//! as its own static library. Selection is a three-way branch on
//! `build.variant`: absent (no variant library at all), equal to the
//! framework's shipped variant, or a custom name resolved against the
//! project directory.

use crate::flags::DEFAULT_VARIANT;
use boardwalk_config::BoardConfig;
use serde::{Deserialize, Serialize};

/// Which variant source set a board builds against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantSelection {
    /// No `build.variant` key; no variant library is built
    NoVariant,
    /// The variant shipped with the framework package
    Default,
    /// A project-local variant directory with the given name
    Custom(String),
}

impl VariantSelection {
    /// Classify the descriptor's `build.variant` value
    pub fn from_board(board: &BoardConfig) -> Self {
        match board.get_str("build.variant") {
            None => Self::NoVariant,
            Some(name) if name == DEFAULT_VARIANT => Self::Default,
            Some(name) => Self::Custom(name.to_string()),
        }
    }

    /// Whether a variant library will be built
    pub fn builds_library(&self) -> bool {
        !matches!(self, Self::NoVariant)
    }

    /// The custom variant name, if any
    pub fn custom_name(&self) -> Option<&str> {
        match self {
            Self::Custom(name) => Some(name),
            _ => None,
        }
    }
}
