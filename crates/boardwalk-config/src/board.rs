//! Board Descriptor (board.toml)
//!
//! A board descriptor is sparse metadata for one target board: CPU name,
//! USB identity fields, variant name, linker-script overrides. Values are
//! addressed by dotted keys (`build.cpu`, `build.arduino.ldscript`) that
//! traverse nested TOML tables. Any key may be absent; lookups return
//! `None` rather than failing.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use toml::Value;

/// Board descriptor backed by a TOML table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardConfig {
    table: toml::Table,
}

impl BoardConfig {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a descriptor from a TOML file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|error| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error,
        })
    }

    /// Parse a descriptor from a TOML string
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        toml::from_str(contents).map_err(|error| ConfigError::TomlParseError {
            file: "<string>".into(),
            error,
        })
    }

    /// Look up a value by dotted key, traversing nested tables
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut current = self.table.get(parts.next()?)?;

        for part in parts {
            current = current.as_table()?.get(part)?;
        }

        Some(current)
    }

    /// Look up a string value by dotted key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up a value and render it as a string
    ///
    /// Strings are returned as-is, integers are formatted. Other value
    /// kinds have no textual rendering here and yield `None`.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(id_string)
    }

    /// Whether the descriptor has a value for the given dotted key
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Hardware (vendor-id, product-id) pairs from `build.hwids`
    ///
    /// Entries that are not two-element arrays of strings or integers are
    /// skipped. Order is preserved.
    pub fn hwids(&self) -> Vec<(String, String)> {
        let Some(entries) = self.get("build.hwids").and_then(Value::as_array) else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| {
                let pair = entry.as_array()?;
                let vid = id_string(pair.first()?)?;
                let pid = id_string(pair.get(1)?)?;
                Some((vid, pid))
            })
            .collect()
    }
}

/// Render a hardware id value as the string the preprocessor should see
fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> BoardConfig {
        BoardConfig::from_toml_str(
            r#"
            vendor = "Briki"

            [build]
            cpu = "cortex-m0plus"
            f_cpu = "48000000L"
            usb_product = "MBC-WB"
            hwids = [["0x1209", "0x2137"], ["0x1209", "0x2138"]]
            variant = "briki_mbcwb_samd21"

            [build.arduino]
            ldscript = "flash_with_bootloader.ld"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_dotted_lookup() {
        let board = sample();
        assert_eq!(board.get_str("vendor"), Some("Briki"));
        assert_eq!(board.get_str("build.cpu"), Some("cortex-m0plus"));
        assert_eq!(
            board.get_str("build.arduino.ldscript"),
            Some("flash_with_bootloader.ld")
        );
    }

    #[test]
    fn test_missing_keys_return_none() {
        let board = sample();
        assert_eq!(board.get("build.ldscript"), None);
        assert_eq!(board.get_str("build.mcu"), None);
        assert_eq!(board.get("upload.protocol"), None);
        assert!(!board.contains("build.extra_flags"));
    }

    #[test]
    fn test_lookup_through_non_table_fails() {
        let board = sample();
        // build.cpu is a string, not a table
        assert_eq!(board.get("build.cpu.nested"), None);
    }

    #[test]
    fn test_hwids_preserve_order() {
        let board = sample();
        assert_eq!(
            board.hwids(),
            vec![
                ("0x1209".to_string(), "0x2137".to_string()),
                ("0x1209".to_string(), "0x2138".to_string()),
            ]
        );
    }

    #[test]
    fn test_hwids_absent() {
        let board = BoardConfig::from_toml_str("vendor = \"Briki\"").unwrap();
        assert!(board.hwids().is_empty());
    }

    #[test]
    fn test_hwids_skip_malformed_entries() {
        let board = BoardConfig::from_toml_str(
            r#"
            [build]
            hwids = [["0x1209", "0x2137"], ["0x1209"], [true, false]]
            "#,
        )
        .unwrap();

        assert_eq!(
            board.hwids(),
            vec![("0x1209".to_string(), "0x2137".to_string())]
        );
    }

    #[test]
    fn test_hwids_integer_ids() {
        let board = BoardConfig::from_toml_str(
            r#"
            [build]
            hwids = [[4617, 8503]]
            "#,
        )
        .unwrap();

        assert_eq!(board.hwids(), vec![("4617".to_string(), "8503".to_string())]);
    }

    #[test]
    fn test_empty_descriptor() {
        let board = BoardConfig::new();
        assert_eq!(board.get("build.cpu"), None);
        assert!(board.hwids().is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        let result = BoardConfig::from_toml_str("build = [unclosed");
        assert!(matches!(
            result,
            Err(ConfigError::TomlParseError { .. })
        ));
    }
}
