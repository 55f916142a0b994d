//! USB identity derivation
//!
//! A board either carries a full USB identity or none at all: the four
//! `USB_*` defines are emitted together or not emitted, never partially.
//! VID and PID come from the first `build.hwids` pair only; boards listing
//! multiple hardware ids are resolved against the first entry.

use crate::plan::Define;
use boardwalk_config::BoardConfig;
use serde::{Deserialize, Serialize};

/// USB identity metadata for one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsbIdentity {
    /// Board exposes no USB identity
    None,
    /// Full identity derived from the descriptor
    Identity {
        vid: String,
        pid: String,
        product: String,
        manufacturer: String,
    },
}

impl UsbIdentity {
    /// Derive the identity from a board descriptor
    ///
    /// Requires a non-empty `build.usb_product` and a usable first
    /// `build.hwids` pair; anything less yields `None`. The manufacturer
    /// falls back to an empty string when `vendor` is absent.
    pub fn from_board(board: &BoardConfig) -> Self {
        let product = match board.get_str("build.usb_product") {
            Some(product) if !product.is_empty() => product.to_string(),
            _ => return Self::None,
        };

        let Some((vid, pid)) = board.hwids().into_iter().next() else {
            return Self::None;
        };

        let manufacturer = board.get_str("vendor").unwrap_or_default().to_string();

        Self::Identity {
            vid,
            pid,
            product,
            manufacturer,
        }
    }

    /// Whether an identity was derived
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Identity { .. })
    }

    /// The preprocessor definitions for this identity
    ///
    /// Product and manufacturer strings are stripped of embedded double
    /// quotes and wrapped in escaped quotes for the command line.
    pub fn defines(&self) -> Vec<Define> {
        match self {
            Self::None => Vec::new(),
            Self::Identity {
                vid,
                pid,
                product,
                manufacturer,
            } => vec![
                Define::value("USB_VID", vid),
                Define::value("USB_PID", pid),
                Define::value("USB_PRODUCT", quoted(product)),
                Define::value("USB_MANUFACTURER", quoted(manufacturer)),
            ],
        }
    }
}

/// Strip embedded double quotes, then wrap in escaped quotes
fn quoted(s: &str) -> String {
    format!("\\\"{}\\\"", s.replace('"', ""))
}
