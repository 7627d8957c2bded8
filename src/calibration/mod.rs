//! Calibration Tables
//!
//! Immutable per-field windows and per-dimension band tables. The embedded
//! tables are built once and shared; a JSON file may override individual
//! field windows for experimentation with other calibrations.

pub mod bands;
pub mod windows;

pub use bands::{find_bin, get_bins, Band, BandBin, NEUTRAL_COLOR, NEUTRAL_LABEL};
pub use windows::{builtin_windows, CalibrationWindow, FieldWindows, DEFAULT_WINDOWS};

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::types::FieldId;

/// Window tables keyed by field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationTables {
    windows: FxHashMap<FieldId, FieldWindows>,
}

/// Partial window override read from JSON
#[derive(Debug, Default, Deserialize)]
struct WindowOverride {
    hue: Option<CalibrationWindow>,
    chroma: Option<CalibrationWindow>,
}

/// Override file layout: `{ "windows": { "cheek": { "hue": {...} } } }`
#[derive(Debug, Default, Deserialize)]
struct CalibrationFile {
    #[serde(default)]
    windows: FxHashMap<FieldId, WindowOverride>,
}

impl Default for CalibrationTables {
    fn default() -> Self {
        Self {
            windows: builtin_windows().iter().copied().collect(),
        }
    }
}

impl CalibrationTables {
    /// Shared embedded tables
    pub fn builtin() -> &'static CalibrationTables {
        static TABLES: OnceLock<CalibrationTables> = OnceLock::new();
        TABLES.get_or_init(CalibrationTables::default)
    }

    /// Load overrides from JSON on top of the embedded tables
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read calibration file: {:?}", path))?;

        let tables = Self::from_json(&contents)
            .with_context(|| format!("Invalid calibration file: {:?}", path))?;

        tracing::debug!(
            "Loaded calibration overrides from {:?} ({} fields)",
            path,
            tables.windows.len()
        );

        Ok(tables)
    }

    /// Parse an override document; fields it omits keep embedded values
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CalibrationFile =
            serde_json::from_str(json).with_context(|| "Failed to parse calibration JSON")?;

        let mut tables = Self::default();
        for (field, overrides) in file.windows {
            let entry = tables.windows.entry(field).or_insert(DEFAULT_WINDOWS);
            if let Some(hue) = overrides.hue {
                validate_hue(field, hue)?;
                entry.hue = hue;
            }
            if let Some(chroma) = overrides.chroma {
                validate_chroma(field, chroma)?;
                entry.chroma = chroma;
            }
        }

        Ok(tables)
    }

    /// Windows for a field (default windows when absent)
    pub fn windows(&self, field: FieldId) -> FieldWindows {
        self.windows.get(&field).copied().unwrap_or(DEFAULT_WINDOWS)
    }

    pub fn hue_window(&self, field: FieldId) -> CalibrationWindow {
        self.windows(field).hue
    }

    pub fn chroma_window(&self, field: FieldId) -> CalibrationWindow {
        self.windows(field).chroma
    }
}

fn validate_hue(field: FieldId, window: CalibrationWindow) -> Result<()> {
    let in_range = |v: f64| (0.0..=360.0).contains(&v);
    if !in_range(window.start) || !in_range(window.end) {
        anyhow::bail!(
            "Hue window for '{}' must lie within 0-360, got {}-{}",
            field,
            window.start,
            window.end
        );
    }
    Ok(())
}

fn validate_chroma(field: FieldId, window: CalibrationWindow) -> Result<()> {
    if !(window.start >= 0.0 && window.start <= window.end) {
        anyhow::bail!(
            "Chroma window for '{}' must satisfy 0 <= start <= end, got {}-{}",
            field,
            window.start,
            window.end
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtin_lookup() {
        let tables = CalibrationTables::builtin();
        let cheek = tables.windows(FieldId::Cheek);
        assert_relative_eq!(cheek.hue.start, 350.0);
        assert_relative_eq!(cheek.hue.end, 35.0);
        assert_relative_eq!(cheek.chroma.end, 45.0);
    }

    #[test]
    fn test_override_keys_accept_alternate_spellings() {
        let json = r#"{ "windows": { "hairRoot": { "chroma": { "start": 2.0, "end": 30.0 } } } }"#;
        let tables = CalibrationTables::from_json(json).unwrap();
        assert_relative_eq!(tables.chroma_window(FieldId::HairRoot).end, 30.0);
    }

    #[test]
    fn test_unknown_override_key_rejected() {
        let json = r#"{ "windows": { "nostril": { "chroma": { "start": 2.0, "end": 30.0 } } } }"#;
        assert!(CalibrationTables::from_json(json).is_err());
    }

    #[test]
    fn test_missing_field_gets_default() {
        let tables: CalibrationTables = serde_json::from_str(r#"{ "windows": {} }"#).unwrap();
        assert_eq!(tables.windows(FieldId::Lip), DEFAULT_WINDOWS);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "windows": {
                "cheek": { "chroma": { "start": 12.0, "end": 50.0 } }
            }
        }"#;
        let tables = CalibrationTables::from_json(json).unwrap();
        let cheek = tables.windows(FieldId::Cheek);
        assert_relative_eq!(cheek.chroma.start, 12.0);
        assert_relative_eq!(cheek.chroma.end, 50.0);
        // Hue untouched
        assert_relative_eq!(cheek.hue.start, 350.0);
        // Other fields untouched
        assert_eq!(tables.windows(FieldId::Iris), CalibrationTables::builtin().windows(FieldId::Iris));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let json = r#"{ "windows": { "lip": { "hue": { "start": 400.0, "end": 20.0 } } } }"#;
        assert!(CalibrationTables::from_json(json).is_err());

        let json = r#"{ "windows": { "lip": { "chroma": { "start": 30.0, "end": 10.0 } } } }"#;
        assert!(CalibrationTables::from_json(json).is_err());

        assert!(CalibrationTables::from_json("not json").is_err());
    }

    #[test]
    fn test_empty_document_keeps_builtin() {
        let tables = CalibrationTables::from_json("{}").unwrap();
        for field in FieldId::ALL {
            assert_eq!(tables.windows(field), CalibrationTables::builtin().windows(field));
        }
    }
}
