//! Package Directory Map
//!
//! Maps package names to the directories a package manager unpacked them
//! into. The map itself performs no filesystem checks; whether a referenced
//! directory must exist is resolver policy.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The board framework package (cores, variants, bundled libraries)
pub const CORE_FRAMEWORK: &str = "core-framework";

/// The architecture-neutral CMSIS package
pub const CMSIS: &str = "cmsis";

/// The vendor device-header CMSIS package
pub const CMSIS_VENDOR: &str = "cmsis-vendor";

/// Package-name to directory map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageIndex {
    dirs: HashMap<String, PathBuf>,
}

impl PackageIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            dirs: HashMap::new(),
        }
    }

    /// Register a package directory
    pub fn insert(&mut self, name: impl Into<String>, dir: impl Into<PathBuf>) {
        self.dirs.insert(name.into(), dir.into());
    }

    /// Get a package directory, if registered
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.dirs.get(name).map(PathBuf::as_path)
    }

    /// Whether a package is registered
    pub fn contains(&self, name: &str) -> bool {
        self.dirs.contains_key(name)
    }

    /// List registered package names
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.dirs.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut index = PackageIndex::new();
        index.insert(CORE_FRAMEWORK, "/pkgs/framework-a52b");

        assert_eq!(
            index.get(CORE_FRAMEWORK),
            Some(Path::new("/pkgs/framework-a52b"))
        );
        assert!(index.contains(CORE_FRAMEWORK));
        assert!(!index.contains(CMSIS));
    }

    #[test]
    fn test_missing_package() {
        let index = PackageIndex::new();
        assert_eq!(index.get(CMSIS_VENDOR), None);
    }

    #[test]
    fn test_names_sorted() {
        let mut index = PackageIndex::new();
        index.insert(CMSIS_VENDOR, "/pkgs/cmsis-atmel");
        index.insert(CORE_FRAMEWORK, "/pkgs/framework-a52b");
        index.insert(CMSIS, "/pkgs/cmsis");

        assert_eq!(index.names(), vec!["cmsis", "cmsis-vendor", "core-framework"]);
    }
}
