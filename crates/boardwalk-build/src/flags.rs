//! Fixed SAMD21 toolchain tables
//!
//! The flag sets are constants for this microcontroller family; only the
//! CPU variant flag is interpolated from the board descriptor. Values
//! follow the GCC ARM embedded conventions: size optimization, per-section
//! code/data splitting for dead-code elimination, no RTTI or exceptions,
//! freestanding linking against the nano/nosys spec files.

use crate::plan::Define;
use boardwalk_config::BoardConfig;

/// Core source set name under the framework's `cores/` directory
pub const BUILD_CORE: &str = "samd21";

/// Variant shipped with the framework package
pub const DEFAULT_VARIANT: &str = "briki_mbcwb_samd21";

/// CMSIS DSP math library, front-inserted in the link list
pub const MATH_LIB: &str = "arm_cortexM0l_math";

/// Base system libraries the framework code calls into
pub const SYSTEM_LIBS: &[&str] = &["m"];

/// Name of the framework core static library
pub const CORE_LIB: &str = "FrameworkArduino";

/// Name of the board variant static library
pub const VARIANT_LIB: &str = "FrameworkArduinoVariant";

/// Arduino API version reported through the `ARDUINO` define
pub const ARDUINO_API_VERSION: &str = "10805";

/// Assembler-only flags
pub const ASM_FLAGS: &[&str] = &["-x", "assembler-with-cpp"];

/// C-only flags
pub const C_FLAGS: &[&str] = &["-std=gnu11"];

/// C++-only flags
pub const CXX_FLAGS: &[&str] = &[
    "-fno-rtti",
    "-fno-exceptions",
    "-std=gnu++11",
    "-fno-threadsafe-statics",
];

/// Flags shared by C and C++ compilation, with the CPU variant interpolated
pub fn common_flags(cpu: &str) -> Vec<String> {
    vec![
        "-Os".to_string(),
        "-ffunction-sections".to_string(),
        "-fdata-sections".to_string(),
        "-Wall".to_string(),
        "-mthumb".to_string(),
        "-nostdlib".to_string(),
        "--param".to_string(),
        "max-inline-insns-single=500".to_string(),
        format!("-mcpu={cpu}"),
    ]
}

/// Linker flags, with the CPU variant interpolated
pub fn link_flags(cpu: &str) -> Vec<String> {
    vec![
        "-Os".to_string(),
        "-mthumb".to_string(),
        "-Wl,--gc-sections".to_string(),
        "-Wl,--check-sections".to_string(),
        "-Wl,--unresolved-symbols=report-all".to_string(),
        "-Wl,--warn-common".to_string(),
        "-Wl,--warn-section-align".to_string(),
        format!("-mcpu={cpu}"),
        "--specs=nosys.specs".to_string(),
        "--specs=nano.specs".to_string(),
    ]
}

/// Architecture defines every SAMD21 translation unit sees
///
/// `F_CPU` is only emitted when the descriptor states a clock value.
pub fn static_defines(board: &BoardConfig) -> Vec<Define> {
    let mut defines = Vec::new();

    if let Some(f_cpu) = board.get_string("build.f_cpu") {
        defines.push(Define::value("F_CPU", f_cpu));
    }
    defines.push(Define::name("USBCON"));
    defines.push(Define::name("ARDUINO_ARCH_SAMD"));

    defines
}
