use crate::domain::{format_hours_minutes_seconds, DigitBuffer, InvalidInputError};
use crate::input::KeypadCommand;
use serde::Serialize;

/// Callback informed after every change: `(picker id, duration in ms)`
pub type ChangeListener = Box<dyn FnMut(&str, u64)>;

/// Read-only view of the picker after a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub duration_ms: u64,
}

impl Snapshot {
    fn of(input: &DigitBuffer) -> Self {
        Self {
            hours: input.hours_string(),
            minutes: input.minutes_string(),
            seconds: input.seconds_string(),
            duration_ms: input.to_duration_millis(),
        }
    }

    /// Keypad display form, e.g. "00h 15m 00s"
    pub fn display(&self) -> String {
        format!("{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }

    /// Human readable duration, e.g. "0:15:00"
    pub fn formatted(&self) -> String {
        format_hours_minutes_seconds(self.duration_ms)
    }
}

/// Owner of one digit buffer: applies keypad commands, keeps the display
/// snapshot current and informs the optional listener.
pub struct DurationPicker {
    id: String,
    input: DigitBuffer,
    snapshot: Snapshot,
    listener: Option<ChangeListener>,
}

impl DurationPicker {
    /// Create a picker at zero. The listener, if any, is informed once with
    /// the initial state.
    pub fn new(id: impl Into<String>, listener: Option<ChangeListener>) -> Self {
        let input = DigitBuffer::new();
        let mut picker = Self {
            id: id.into(),
            snapshot: Snapshot::of(&input),
            input,
            listener,
        };
        picker.update();
        picker
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Current duration in milliseconds
    pub fn duration(&self) -> u64 {
        self.input.to_duration_millis()
    }

    /// Whether a non-zero duration has been entered
    pub fn has_duration(&self) -> bool {
        self.duration() > 0
    }

    pub fn set_duration(&mut self, millis: i64) -> Result<&Snapshot, InvalidInputError> {
        self.input.set_from_duration(millis)?;
        self.update();
        Ok(&self.snapshot)
    }

    /// Apply one keypad command. On error nothing changes and the listener
    /// is not called.
    pub fn apply(&mut self, command: &KeypadCommand) -> Result<&Snapshot, InvalidInputError> {
        match command {
            KeypadCommand::Digits(digits) => self.push_digits(digits),
            KeypadCommand::Backspace => Ok(self.backspace()),
            KeypadCommand::Clear => Ok(self.clear()),
            KeypadCommand::Set(millis) => self.set_duration(*millis),
        }
    }

    /// Number button pressed
    pub fn push_digits(&mut self, digits: &str) -> Result<&Snapshot, InvalidInputError> {
        self.input.push_digits(digits)?;
        self.update();
        Ok(&self.snapshot)
    }

    pub fn backspace(&mut self) -> &Snapshot {
        self.input.pop_digit();
        self.update();
        &self.snapshot
    }

    pub fn clear(&mut self) -> &Snapshot {
        self.input.clear();
        self.update();
        &self.snapshot
    }

    /// Raw digit string to persist across restarts
    pub fn saved_state(&self) -> String {
        self.input.raw_string()
    }

    /// Restore a previously saved digit string
    pub fn restore_state(&mut self, saved: &str) -> Result<&Snapshot, InvalidInputError> {
        self.input = saved.parse()?;
        self.update();
        Ok(&self.snapshot)
    }

    fn update(&mut self) {
        self.snapshot = Snapshot::of(&self.input);
        tracing::debug!(
            picker = %self.id,
            input = %self.input,
            duration_ms = self.snapshot.duration_ms,
            "duration changed"
        );
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.id, self.snapshot.duration_ms);
        }
    }
}
