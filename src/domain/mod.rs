pub mod codec;
pub mod digit_buffer;
pub mod error;

pub use codec::{
    duration_of, format_hours_minutes_seconds, hours_of, minutes_in_hour_of, seconds_in_minute_of,
};
pub use digit_buffer::{DigitBuffer, MAX_DIGITS};
pub use error::InvalidInputError;
