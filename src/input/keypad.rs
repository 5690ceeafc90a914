/// One keypad action fed into a duration picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypadCommand {
    /// Text of a number button ("7", "00"); pushed digit by digit
    Digits(String),
    /// Remove the last entered digit
    Backspace,
    /// Reset to zero
    Clear,
    /// Overwrite with a duration in milliseconds
    Set(i64),
}

impl KeypadCommand {
    /// Parse a keystroke token like "5", "00", "bs" or "clear"
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            return Some(Self::Digits(token.to_string()));
        }
        match token.to_lowercase().as_str() {
            "<" | "bs" | "backspace" => Some(Self::Backspace),
            "c" | "clear" => Some(Self::Clear),
            _ => None,
        }
    }

    /// The number buttons of the pad, in layout order
    pub fn number_buttons() -> &'static [&'static str] {
        &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "00"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_digits() {
        assert_eq!(
            KeypadCommand::from_token("7"),
            Some(KeypadCommand::Digits("7".to_string()))
        );
        assert_eq!(
            KeypadCommand::from_token("00"),
            Some(KeypadCommand::Digits("00".to_string()))
        );
        assert_eq!(
            KeypadCommand::from_token(" 130 "),
            Some(KeypadCommand::Digits("130".to_string()))
        );
    }

    #[test]
    fn test_from_token_editing_keys() {
        assert_eq!(KeypadCommand::from_token("bs"), Some(KeypadCommand::Backspace));
        assert_eq!(KeypadCommand::from_token("BACKSPACE"), Some(KeypadCommand::Backspace));
        assert_eq!(KeypadCommand::from_token("<"), Some(KeypadCommand::Backspace));
        assert_eq!(KeypadCommand::from_token("c"), Some(KeypadCommand::Clear));
        assert_eq!(KeypadCommand::from_token("Clear"), Some(KeypadCommand::Clear));
    }

    #[test]
    fn test_from_token_rejects_unknown() {
        assert_eq!(KeypadCommand::from_token(""), None);
        assert_eq!(KeypadCommand::from_token("1a"), None);
        assert_eq!(KeypadCommand::from_token("-5"), None);
        assert_eq!(KeypadCommand::from_token("enter"), None);
    }

    #[test]
    fn test_number_buttons_parse_as_digits() {
        for button in KeypadCommand::number_buttons() {
            assert!(matches!(
                KeypadCommand::from_token(button),
                Some(KeypadCommand::Digits(_))
            ));
        }
    }
}
