//! Build plan resolution pipeline
//!
//! Resolution is a single synchronous pass: package preconditions, flag and
//! define accumulation, search path ordering, linker script selection,
//! variant selection, and final link-order placement. The only filesystem
//! access is the package directory existence check; everything else is a
//! pure function of the descriptor and the index.

use crate::error::{BuildError, BuildResult};
use crate::flags;
use crate::plan::{BuildPlan, Define};
use crate::usb::UsbIdentity;
use crate::variant::VariantSelection;
use boardwalk_config::{BoardConfig, PackageIndex, CMSIS, CMSIS_VENDOR, CORE_FRAMEWORK};
use std::path::PathBuf;

/// Resolves board descriptors into build plans
pub struct Resolver {
    /// Package directories from the host package manager
    packages: PackageIndex,
    /// Project root, where custom variant directories live
    project_dir: PathBuf,
}

impl Resolver {
    /// Create a resolver for the project at the given path
    pub fn new(packages: PackageIndex, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            packages,
            project_dir: project_dir.into(),
        }
    }

    /// Resolve a board descriptor into a complete build plan
    ///
    /// Fails before producing any plan fragment when a required package
    /// directory is missing on disk or the descriptor lacks `build.cpu`.
    /// Every other absent descriptor key degrades to a documented default
    /// or to omission of the dependent plan fragment.
    pub fn resolve(&self, board: &BoardConfig) -> BuildResult<BuildPlan> {
        let framework_dir = self.package_dir(CORE_FRAMEWORK)?;
        let cmsis_dir = self.package_dir(CMSIS)?;
        let cmsis_vendor_dir = self.package_dir(CMSIS_VENDOR)?;

        let cpu = board.get_str("build.cpu").ok_or(BuildError::MissingCpu)?;
        let usb = UsbIdentity::from_board(board);

        let core_dir = framework_dir.join("cores").join(flags::BUILD_CORE);
        let variant_dir = framework_dir.join("variants").join(flags::DEFAULT_VARIANT);
        let ldscript_dir = variant_dir.join("linker_scripts").join("gcc");

        let mut plan = BuildPlan::new();

        plan.add_asm_flags(flags::ASM_FLAGS.iter().copied());
        plan.add_c_flags(flags::C_FLAGS.iter().copied());
        plan.add_common_flags(flags::common_flags(cpu));
        plan.add_cxx_flags(flags::CXX_FLAGS.iter().copied());
        plan.add_link_flags(flags::link_flags(cpu));

        plan.add_defines(flags::static_defines(board));

        plan.add_include(core_dir.clone());
        plan.add_include(framework_dir.join("libraries").join("ABCNeopixel"));
        plan.add_include(cmsis_dir.join("CMSIS").join("Include"));
        plan.add_include(cmsis_vendor_dir.join("CMSIS").join("Device").join("ATMEL"));

        plan.add_lib_path(cmsis_dir.join("CMSIS").join("Lib").join("GCC"));
        plan.add_lib_path(variant_dir.clone());
        plan.add_lib_path(ldscript_dir.clone());

        for lib in flags::SYSTEM_LIBS {
            plan.add_lib(*lib);
        }

        // Framework libraries call into the DSP math library; it must sit
        // ahead of everything accumulated so far in the link list.
        plan.prepend_lib(flags::MATH_LIB);

        // All common flags the assembler should observe are accumulated by
        // now; mirror late so the copy is complete.
        plan.mirror_common_flags();
        plan.define(Define::value("ARDUINO", flags::ARDUINO_API_VERSION));
        plan.add_defines(usb.defines());

        plan.add_lib_source_path(framework_dir.join("libraries"));

        if board.get_str("build.ldscript").unwrap_or("").is_empty() {
            plan.ensure_lib_path(&ldscript_dir);
            plan.set_ldscript(board.get_str("build.arduino.ldscript").unwrap_or(""));
        }

        let mut built = Vec::new();
        match VariantSelection::from_board(board) {
            VariantSelection::Custom(name) => {
                let custom_dir = self.project_dir.join(&name);
                plan.define(Define::name("CUSTOM_VARIANT"));
                plan.add_include(custom_dir.clone());
                plan.add_include(variant_dir.clone());
                built.push(plan.request_library(flags::VARIANT_LIB, custom_dir));
            }
            VariantSelection::Default => {
                plan.add_include(variant_dir.clone());
                built.push(plan.request_library(flags::VARIANT_LIB, variant_dir.clone()));
            }
            VariantSelection::NoVariant => {}
        }

        built.push(plan.request_library(flags::CORE_LIB, core_dir));

        // Most specific symbol definitions first: [variant?, core] ahead of
        // the math and system libraries.
        plan.prepend_libs(built);

        Ok(plan)
    }

    /// Load a board descriptor from a TOML file and resolve it
    pub fn resolve_file(&self, board_path: &std::path::Path) -> BuildResult<BuildPlan> {
        let board = BoardConfig::from_file(board_path)?;
        self.resolve(&board)
    }

    /// Look up a package directory and enforce the existence precondition
    fn package_dir(&self, name: &str) -> BuildResult<PathBuf> {
        let dir = self
            .packages
            .get(name)
            .ok_or_else(|| BuildError::missing_package(name))?;

        if !dir.is_dir() {
            return Err(BuildError::package_dir_missing(name, dir));
        }

        Ok(dir.to_path_buf())
    }
}
