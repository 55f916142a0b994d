/// Build plan resolution error types
use std::path::PathBuf;
use thiserror::Error;

pub type BuildResult<T> = Result<T, BuildError>;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Package '{name}' is not registered in the package index")]
    MissingPackage { name: String },

    #[error("Package '{name}' directory does not exist: {path}")]
    PackageDirMissing { name: String, path: PathBuf },

    #[error("Board descriptor has no 'build.cpu' value")]
    MissingCpu,

    #[error("Configuration error: {0}")]
    Config(#[from] boardwalk_config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// Create a missing package error
    pub fn missing_package(name: impl Into<String>) -> Self {
        Self::MissingPackage { name: name.into() }
    }

    /// Create a package directory missing error
    pub fn package_dir_missing(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::PackageDirMissing {
            name: name.into(),
            path: path.into(),
        }
    }
}
