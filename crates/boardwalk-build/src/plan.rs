//! Build plan value type
//!
//! The plan is an ordered accumulator: every list keeps insertion order,
//! nothing is deduplicated, and front insertion is explicit. Resolution
//! builds one plan in a single pass and hands it off immutably; the host
//! build engine applies it once.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A preprocessor definition, with or without a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Define {
    /// Bare definition (`-DNAME`)
    Name(String),
    /// Valued definition (`-DNAME=VALUE`)
    Value(String, String),
}

impl Define {
    /// Create a bare definition
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Create a valued definition
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Value(name.into(), value.into())
    }
}

impl std::fmt::Display for Define {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Value(name, value) => write!(f, "{name}={value}"),
        }
    }
}

/// Request for the build engine to compile one static library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryBuild {
    /// Library name, as it appears in the final link list
    pub name: String,
    /// Directory holding the library's sources
    pub source_dir: PathBuf,
}

/// Fully resolved build plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    /// Assembler flags
    pub asm_flags: Vec<String>,
    /// C-only flags
    pub c_flags: Vec<String>,
    /// C++-only flags
    pub cxx_flags: Vec<String>,
    /// Flags shared by C and C++ compilation
    pub common_flags: Vec<String>,
    /// Linker flags
    pub link_flags: Vec<String>,
    /// Preprocessor definitions
    pub defines: Vec<Define>,
    /// Include search paths, first match wins downstream
    pub include_paths: Vec<PathBuf>,
    /// Library search paths
    pub lib_paths: Vec<PathBuf>,
    /// Library source search paths (bundled library lookup roots)
    pub lib_source_paths: Vec<PathBuf>,
    /// Library names to link, in link order
    pub libs: Vec<String>,
    /// Active linker script, if resolution selected one
    pub ldscript: Option<String>,
    /// Static libraries the build engine must compile
    pub library_builds: Vec<LibraryBuild>,
}

impl BuildPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Append assembler flags
    pub fn add_asm_flags<I, S>(&mut self, flags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.asm_flags.extend(flags.into_iter().map(Into::into));
    }

    /// Append C-only flags
    pub fn add_c_flags<I, S>(&mut self, flags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.c_flags.extend(flags.into_iter().map(Into::into));
    }

    /// Append C++-only flags
    pub fn add_cxx_flags<I, S>(&mut self, flags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cxx_flags.extend(flags.into_iter().map(Into::into));
    }

    /// Append shared compiler flags
    pub fn add_common_flags<I, S>(&mut self, flags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_flags.extend(flags.into_iter().map(Into::into));
    }

    /// Append linker flags
    pub fn add_link_flags<I, S>(&mut self, flags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.link_flags.extend(flags.into_iter().map(Into::into));
    }

    /// Copy the accumulated shared flags onto the assembler flag list
    ///
    /// Assemble-with-preprocessor sources must see the same optimization
    /// and architecture flags as C/C++ compilation. Call this after all
    /// shared-flag accumulation the assembler should observe.
    pub fn mirror_common_flags(&mut self) {
        self.asm_flags.extend(self.common_flags.iter().cloned());
    }

    /// Append one preprocessor definition
    pub fn define(&mut self, define: Define) {
        self.defines.push(define);
    }

    /// Append preprocessor definitions
    pub fn add_defines<I>(&mut self, defines: I)
    where
        I: IntoIterator<Item = Define>,
    {
        self.defines.extend(defines);
    }

    /// Append an include search path
    pub fn add_include(&mut self, path: impl Into<PathBuf>) {
        self.include_paths.push(path.into());
    }

    /// Append a library search path
    pub fn add_lib_path(&mut self, path: impl Into<PathBuf>) {
        self.lib_paths.push(path.into());
    }

    /// Append a library search path unless it is already present
    pub fn ensure_lib_path(&mut self, path: &Path) {
        if !self.lib_paths.iter().any(|p| p == path) {
            self.lib_paths.push(path.to_path_buf());
        }
    }

    /// Append a library source search path
    pub fn add_lib_source_path(&mut self, path: impl Into<PathBuf>) {
        self.lib_source_paths.push(path.into());
    }

    /// Append a library to the link list
    pub fn add_lib(&mut self, name: impl Into<String>) {
        self.libs.push(name.into());
    }

    /// Insert a library at the front of the link list
    pub fn prepend_lib(&mut self, name: impl Into<String>) {
        self.libs.insert(0, name.into());
    }

    /// Insert libraries at the front of the link list, preserving their order
    pub fn prepend_libs<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut front: Vec<String> = names.into_iter().map(Into::into).collect();
        front.append(&mut self.libs);
        self.libs = front;
    }

    /// Record a static library the build engine must compile
    ///
    /// Returns the library name for later link-order placement.
    pub fn request_library(&mut self, name: impl Into<String>, source_dir: impl Into<PathBuf>) -> String {
        let name = name.into();
        self.library_builds.push(LibraryBuild {
            name: name.clone(),
            source_dir: source_dir.into(),
        });
        name
    }

    /// Set the active linker script path
    pub fn set_ldscript(&mut self, script: impl Into<String>) {
        self.ldscript = Some(script.into());
    }

    /// Render the plan as pretty JSON for hand-off or inspection
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flag_accumulation_preserves_order() {
        let mut plan = BuildPlan::new();
        plan.add_common_flags(["-Os", "-Wall"]);
        plan.add_common_flags(["-mthumb"]);

        assert_eq!(plan.common_flags, vec!["-Os", "-Wall", "-mthumb"]);
    }

    #[test]
    fn test_no_deduplication() {
        let mut plan = BuildPlan::new();
        plan.add_common_flags(["-Os"]);
        plan.add_common_flags(["-Os"]);

        assert_eq!(plan.common_flags, vec!["-Os", "-Os"]);
    }

    #[test]
    fn test_mirror_common_flags_copies_snapshot() {
        let mut plan = BuildPlan::new();
        plan.add_asm_flags(["-x", "assembler-with-cpp"]);
        plan.add_common_flags(["-Os", "-mthumb"]);
        plan.mirror_common_flags();

        assert_eq!(
            plan.asm_flags,
            vec!["-x", "assembler-with-cpp", "-Os", "-mthumb"]
        );

        // Later common-flag appends must not leak into assembler flags
        plan.add_common_flags(["-Wall"]);
        assert_eq!(
            plan.asm_flags,
            vec!["-x", "assembler-with-cpp", "-Os", "-mthumb"]
        );
    }

    #[test]
    fn test_prepend_lib() {
        let mut plan = BuildPlan::new();
        plan.add_lib("m");
        plan.prepend_lib("arm_cortexM0l_math");

        assert_eq!(plan.libs, vec!["arm_cortexM0l_math", "m"]);
    }

    #[test]
    fn test_prepend_libs_preserves_order() {
        let mut plan = BuildPlan::new();
        plan.add_lib("arm_cortexM0l_math");
        plan.add_lib("m");
        plan.prepend_libs(["FrameworkArduinoVariant", "FrameworkArduino"]);

        assert_eq!(
            plan.libs,
            vec![
                "FrameworkArduinoVariant",
                "FrameworkArduino",
                "arm_cortexM0l_math",
                "m"
            ]
        );
    }

    #[test]
    fn test_ensure_lib_path_is_idempotent() {
        let mut plan = BuildPlan::new();
        plan.add_lib_path("/variants/x/linker_scripts/gcc");
        plan.ensure_lib_path(Path::new("/variants/x/linker_scripts/gcc"));

        assert_eq!(plan.lib_paths.len(), 1);

        plan.ensure_lib_path(Path::new("/variants/x"));
        assert_eq!(plan.lib_paths.len(), 2);
    }

    #[test]
    fn test_request_library_returns_name() {
        let mut plan = BuildPlan::new();
        let name = plan.request_library("FrameworkArduino", "/fw/cores/samd21");

        assert_eq!(name, "FrameworkArduino");
        assert_eq!(plan.library_builds.len(), 1);
        assert_eq!(
            plan.library_builds[0].source_dir,
            PathBuf::from("/fw/cores/samd21")
        );
    }

    #[test]
    fn test_define_display() {
        assert_eq!(Define::name("USBCON").to_string(), "USBCON");
        assert_eq!(
            Define::value("F_CPU", "48000000L").to_string(),
            "F_CPU=48000000L"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mut plan = BuildPlan::new();
        plan.add_common_flags(["-Os"]);
        plan.define(Define::value("USB_VID", "0x1209"));
        plan.set_ldscript("flash_with_bootloader.ld");

        let json = plan.to_json().unwrap();
        let back: BuildPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
