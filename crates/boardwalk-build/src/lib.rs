//! Boardwalk build plan resolution
//!
//! Turns a sparse board descriptor and a package directory map into a
//! complete, internally-consistent build plan for the SAMD21 board family:
//! - Compiler/assembler/linker flag accumulation
//! - Conditional USB identity definitions
//! - Include and library search path ordering
//! - Variant selection and static library link order
//! - Linker script resolution
//!
//! Actual compilation, linking, and dependency tracking belong to the host
//! build engine; this crate only computes the plan it consumes.

pub mod error;
pub mod flags;
pub mod libraries;
pub mod plan;
pub mod resolver;
pub mod usb;
pub mod variant;

// Re-export main types
pub use error::{BuildError, BuildResult};
pub use libraries::bundled_libraries;
pub use plan::{BuildPlan, Define, LibraryBuild};
pub use resolver::Resolver;
pub use usb::UsbIdentity;
pub use variant::VariantSelection;

// Re-export boardwalk-config types for convenience
pub use boardwalk_config::{BoardConfig, PackageIndex};
