use crate::persistence::{atomic_write, read_file};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default duration offered by `reset` (15 minutes)
pub const DEFAULT_DURATION_MS: u64 = 15 * 60 * 1000;

/// User settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Load settings from settings.json, falling back to defaults if missing
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let Some(content) = read_file(path)? else {
        return Ok(Settings::default());
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.default_duration_ms, 900_000);
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = Settings {
            default_duration_ms: 25 * 60 * 1000,
        };
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        atomic_write(&path, "{}").unwrap();

        assert_eq!(load_settings(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        atomic_write(&path, "not json").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid settings file"));
    }
}
