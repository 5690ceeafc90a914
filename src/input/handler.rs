use crate::input::KeypadCommand;
use crate::picker::DurationPicker;
use anyhow::{Context, Result};

/// Handle one keystroke token against the picker
pub fn handle_key(picker: &mut DurationPicker, token: &str) -> Result<()> {
    let command = KeypadCommand::from_token(token).with_context(|| {
        format!("Unknown key '{}'. Use digits, 'bs' (backspace) or 'clear'", token)
    })?;

    picker
        .apply(&command)
        .with_context(|| format!("Failed to apply key '{}'", token))?;
    Ok(())
}

/// Handle keystroke tokens in order, stopping at the first bad one
pub fn handle_keys<S: AsRef<str>>(picker: &mut DurationPicker, tokens: &[S]) -> Result<()> {
    for token in tokens {
        handle_key(picker, token.as_ref())?;
    }
    Ok(())
}
