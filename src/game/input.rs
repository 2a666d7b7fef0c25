//! Keypad answer buffer.

use crate::constants::MAX_ANSWER_DIGITS;

/// Digits typed on the keypad, at most `MAX_ANSWER_DIGITS` long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerInput {
    digits: String,
}

impl AnswerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a digit. Returns false if the digit was out of range or the
    /// buffer is full.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        if digit > 9 || self.digits.len() >= MAX_ANSWER_DIGITS {
            return false;
        }
        self.digits.push(char::from(b'0' + digit));
        true
    }

    /// Removes the last digit. Returns false if the buffer was empty.
    pub fn delete(&mut self) -> bool {
        self.digits.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}
