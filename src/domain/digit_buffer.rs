use super::codec;
use super::error::InvalidInputError;
use std::fmt;
use std::str::FromStr;

/// Width of the HHMMSS buffer
pub const MAX_DIGITS: usize = 6;

/// Buffer content once a duration no longer fits two hour digits
const SATURATED: [u8; MAX_DIGITS] = *b"999999";

/// Fixed-width digit entry buffer for an HHMMSS duration.
///
/// Digits enter from the right and shift left, like a calculator display.
/// The buffer always holds exactly six ASCII digits; leading zeros are
/// padding. Once six significant digits are held, each new digit pushes the
/// most significant one out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitBuffer {
    digits: [u8; MAX_DIGITS],
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitBuffer {
    /// Create an all-zero buffer ("000000")
    pub fn new() -> Self {
        Self {
            digits: [b'0'; MAX_DIGITS],
        }
    }

    /// Push one digit onto the right end of the buffer.
    ///
    /// A `0` typed into an empty buffer is dropped, so the buffer never
    /// accumulates leading zeros as content.
    pub fn push_digit(&mut self, digit: char) -> Result<(), InvalidInputError> {
        let digit = ascii_digit(digit)?;
        let significant = self.significant();
        if significant.is_empty() && digit == b'0' {
            return Ok(());
        }

        let mut extended = [b'0'; MAX_DIGITS + 1];
        extended[..significant.len()].copy_from_slice(significant);
        extended[significant.len()] = digit;
        let len = significant.len() + 1;
        self.digits = normalized(&extended[..len]);
        Ok(())
    }

    /// Push every digit of `digits` in order.
    ///
    /// The whole sequence is validated first; on error the buffer is left
    /// untouched.
    pub fn push_digits(&mut self, digits: &str) -> Result<(), InvalidInputError> {
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(InvalidInputError::NotADigit(bad));
        }
        for digit in digits.chars() {
            self.push_digit(digit)?;
        }
        Ok(())
    }

    /// Remove the least significant digit (backspace)
    pub fn pop_digit(&mut self) {
        let significant = self.significant();
        if let Some((_, rest)) = significant.split_last() {
            self.digits = normalized(rest);
        }
    }

    /// Reset to "000000"
    pub fn clear(&mut self) {
        self.digits = normalized(&[]);
    }

    pub fn hours_string(&self) -> String {
        self.group_string(0)
    }

    pub fn minutes_string(&self) -> String {
        self.group_string(2)
    }

    pub fn seconds_string(&self) -> String {
        self.group_string(4)
    }

    /// The full six-digit buffer, used as the persisted state
    pub fn raw_string(&self) -> String {
        self.digits.iter().map(|&d| char::from(d)).collect()
    }

    /// Whether any significant digit has been entered
    pub fn is_empty(&self) -> bool {
        self.significant().is_empty()
    }

    /// Duration represented by the buffer.
    ///
    /// Minute and second groups are taken as typed (00-99), so "009900"
    /// is 99 minutes.
    pub fn to_duration_millis(&self) -> u64 {
        codec::duration_of(
            self.group_value(0),
            self.group_value(2),
            self.group_value(4),
        )
    }

    /// Replace the buffer with the HHMMSS form of `millis`.
    ///
    /// Sub-second precision is dropped. Durations of 100 hours or more
    /// saturate to "999999".
    pub fn set_from_duration(&mut self, millis: i64) -> Result<(), InvalidInputError> {
        let millis =
            u64::try_from(millis).map_err(|_| InvalidInputError::NegativeDuration(millis))?;

        let hours = codec::hours_of(millis);
        if hours > 99 {
            self.digits = SATURATED;
            return Ok(());
        }

        let minutes = codec::minutes_in_hour_of(millis);
        let seconds = codec::seconds_in_minute_of(millis);
        self.digits = [
            digit_char(hours / 10),
            digit_char(hours % 10),
            digit_char(minutes / 10),
            digit_char(minutes % 10),
            digit_char(seconds / 10),
            digit_char(seconds % 10),
        ];
        Ok(())
    }

    /// Digits after stripping the leading zero padding
    fn significant(&self) -> &[u8] {
        let start = self
            .digits
            .iter()
            .position(|&d| d != b'0')
            .unwrap_or(MAX_DIGITS);
        &self.digits[start..]
    }

    fn group_string(&self, start: usize) -> String {
        self.digits[start..start + 2]
            .iter()
            .map(|&d| char::from(d))
            .collect()
    }

    fn group_value(&self, start: usize) -> u64 {
        u64::from(self.digits[start] - b'0') * 10 + u64::from(self.digits[start + 1] - b'0')
    }
}

/// Right-align `significant` in a zero-padded buffer, keeping only the last
/// `MAX_DIGITS` digits.
fn normalized(significant: &[u8]) -> [u8; MAX_DIGITS] {
    let kept = &significant[significant.len().saturating_sub(MAX_DIGITS)..];
    let mut digits = [b'0'; MAX_DIGITS];
    digits[MAX_DIGITS - kept.len()..].copy_from_slice(kept);
    digits
}

fn ascii_digit(c: char) -> Result<u8, InvalidInputError> {
    if c.is_ascii_digit() {
        Ok(c as u8)
    } else {
        Err(InvalidInputError::NotADigit(c))
    }
}

fn digit_char(value: u64) -> u8 {
    b'0' + (value % 10) as u8
}

impl fmt::Display for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_string())
    }
}

/// Restore a buffer from its persisted string (clear, then push every digit)
impl FromStr for DigitBuffer {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut buffer = Self::new();
        buffer.push_digits(s)?;
        Ok(buffer)
    }
}
