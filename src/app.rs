use crate::input::handle_keys;
use crate::persistence::{
    load_settings, load_state, save_state, settings_file, state_file, SavedState, Settings,
};
use crate::picker::{ChangeListener, DurationPicker, Snapshot};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Source identity reported to change listeners
pub const PICKER_ID: &str = "durpad";

/// Main application state: one picker bound to a data directory
pub struct AppState {
    pub dir: PathBuf,
    pub settings: Settings,
    pub picker: DurationPicker,
    pub needs_save: bool,
}

impl AppState {
    /// Load settings and restore the last saved input from `dir`
    pub fn load(dir: &Path, listener: Option<ChangeListener>) -> Result<Self> {
        let settings = load_settings(settings_file(dir))?;
        let mut picker = DurationPicker::new(PICKER_ID, listener);

        if let Some(saved) = load_state(state_file(dir))? {
            picker
                .restore_state(&saved.duration_input)
                .with_context(|| format!("Saved state is corrupt: {:?}", saved.duration_input))?;
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            settings,
            picker,
            needs_save: false,
        })
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.picker.snapshot()
    }

    /// Apply keypad tokens in order
    pub fn press<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<()> {
        let result = handle_keys(&mut self.picker, keys);
        // Keys applied before a bad token still count
        self.needs_save = true;
        result
    }

    pub fn set(&mut self, millis: i64) -> Result<()> {
        self.picker
            .set_duration(millis)
            .context("Failed to set duration")?;
        self.needs_save = true;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.picker.clear();
        self.needs_save = true;
    }

    /// Set the picker to the configured default duration
    pub fn reset(&mut self) -> Result<()> {
        let millis = i64::try_from(self.settings.default_duration_ms)
            .context("Default duration is out of range")?;
        self.set(millis)
    }

    /// Save the raw input if anything changed
    pub fn save(&mut self) -> Result<()> {
        if self.needs_save {
            let state = SavedState::new(self.picker.saved_state());
            save_state(state_file(&self.dir), &state)?;
            self.needs_save = false;
        }
        Ok(())
    }
}
