pub mod handler;
pub mod keypad;

pub use handler::{handle_key, handle_keys};
pub use keypad::KeypadCommand;
