//! Boardwalk Configuration System
//!
//! Provides the input-side data model for board build-plan resolution:
//! - Board descriptors (board.toml) with dotted-key access
//! - Package directory maps sourced from the host package manager
//!
//! # Example
//!
//! ```no_run
//! use boardwalk_config::{BoardConfig, PackageIndex};
//! use std::path::Path;
//!
//! let board = BoardConfig::from_file(Path::new("boards/mbcwb.toml")).unwrap();
//! let mut packages = PackageIndex::new();
//! packages.insert("core-framework", "/pkgs/framework-a52b");
//! ```

pub mod board;
pub mod packages;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Board descriptor not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read board descriptor: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use board::BoardConfig;
pub use packages::{PackageIndex, CMSIS, CMSIS_VENDOR, CORE_FRAMEWORK};
