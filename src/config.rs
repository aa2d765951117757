//! Palette persistence.
//!
//! The palette is stored as a single JSON file owned by the settings
//! layer; the engine consumes it read-only. A missing file yields the
//! default palette so a fresh install needs no setup step.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::palette::Palette;

/// Load the palette from `path`, falling back to defaults when the file
/// does not exist.
pub fn load_palette(path: &Path) -> Result<Palette> {
    if !path.exists() {
        return Ok(Palette::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read palette {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse palette {}", path.display()))
}

/// Save the palette to `path`, creating parent directories as needed.
pub fn save_palette(path: &Path, palette: &Palette) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create palette dir {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(palette).context("Failed to serialize palette")?;
    fs::write(path, json).with_context(|| format!("Failed to write palette {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let palette = load_palette(&dir.path().join("palette.json")).unwrap();
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings").join("palette.json");

        let mut palette = Palette::default();
        palette.colors[2] = "#ABCDEF".to_string();
        palette.highlights[0].background = "#101010".to_string();

        save_palette(&path, &palette).unwrap();
        let loaded = load_palette(&path).unwrap();
        assert_eq!(loaded, palette);
    }

    #[test]
    fn test_malformed_file_reports_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_palette(&path).is_err());
    }
}
