//! Keypad-style duration entry.
//!
//! A [`DigitBuffer`] takes digits typed one at a time and shifts them into a
//! fixed HHMMSS window; [`DurationPicker`] wraps one buffer with change
//! notification for a front end.

pub mod app;
pub mod domain;
pub mod input;
pub mod persistence;
pub mod picker;

pub use domain::{DigitBuffer, InvalidInputError};
pub use input::KeypadCommand;
pub use picker::{ChangeListener, DurationPicker, Snapshot};
