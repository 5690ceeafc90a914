use crate::persistence::{atomic_write, read_file};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Picker state kept across runs in state.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    /// Raw six-digit buffer, e.g. "001500"
    pub duration_input: String,
    /// When the state was written
    pub saved_at: DateTime<Local>,
}

impl SavedState {
    pub fn new(duration_input: String) -> Self {
        Self {
            duration_input,
            saved_at: Local::now(),
        }
    }
}

/// Load saved state, or None if nothing was saved yet
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<Option<SavedState>> {
    let path = path.as_ref();
    let Some(content) = read_file(path)? else {
        return Ok(None);
    };

    let state: SavedState = serde_json::from_str(&content)
        .with_context(|| format!("Invalid state file: {}", path.display()))?;
    tracing::debug!(input = %state.duration_input, saved_at = %state.saved_at, "loaded state");
    Ok(Some(state))
}

/// Save state to state.json
pub fn save_state<P: AsRef<Path>>(path: P, state: &SavedState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    atomic_write(path, &json)?;
    tracing::debug!(input = %state.duration_input, "saved state");
    Ok(())
}
