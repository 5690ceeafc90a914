use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const DIR_NAME: &str = ".durpad";

/// Get the durpad directory - an explicit override wins, then a local .durpad
/// found by walking up from the current directory, then global ~/.durpad
pub fn get_durpad_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_durpad(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DIR_NAME))
}

/// Find local .durpad directory by walking up the directory tree
fn find_local_durpad(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let durpad_dir = current.join(DIR_NAME);
        if durpad_dir.is_dir() {
            return Some(durpad_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the durpad directory exists
pub fn ensure_durpad_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = get_durpad_dir(override_dir)?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        tracing::info!(dir = %dir.display(), "created durpad directory");
    }
    Ok(dir)
}

/// Initialize a local .durpad directory in `parent`
pub fn init_local_durpad(parent: &Path) -> Result<PathBuf> {
    let durpad_dir = parent.join(DIR_NAME);

    if durpad_dir.exists() {
        anyhow::bail!("Durpad directory already exists: {}", durpad_dir.display());
    }

    fs::create_dir_all(&durpad_dir)
        .with_context(|| format!("Failed to create directory: {}", durpad_dir.display()))?;

    Ok(durpad_dir)
}

/// Path to the saved picker state
pub fn state_file(dir: &Path) -> PathBuf {
    dir.join("state.json")
}

/// Path to the user settings
pub fn settings_file(dir: &Path) -> PathBuf {
    dir.join("settings.json")
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return None if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
