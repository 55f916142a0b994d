//! Bundled library discovery
//!
//! The framework package ships a `libraries/` tree (SD, WiFi control, …)
//! that the build engine uses as a library lookup root. The resolver only
//! records the root itself; this module enumerates the individual library
//! directories for engines that want them expanded.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the framework's bundled library directories, sorted by path
///
/// Returns one entry per immediate subdirectory of
/// `<framework_dir>/libraries`. Stray files are skipped; a missing
/// `libraries/` directory yields an empty list.
pub fn bundled_libraries(framework_dir: &Path) -> Vec<PathBuf> {
    let libraries_dir = framework_dir.join("libraries");

    let mut dirs: Vec<PathBuf> = WalkDir::new(&libraries_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect();

    dirs.sort();
    dirs
}
