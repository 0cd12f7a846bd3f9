//! Digits-only entry field for the "other" percentage.

use crate::order::percent::{MAX_PERCENT_DIGITS, PercentPolicy, validate_percent_input};

/// State for a free-text percentage field.
///
/// Only ASCII digits are accepted and at most [`MAX_PERCENT_DIGITS`] of
/// them, so the content always matches what the validator allows.
#[derive(Clone, Debug, Default)]
pub struct PercentInput {
    /// The current digits.
    pub content: String,
    /// Cursor position (character index).
    pub cursor: usize,
}

impl PercentInput {
    /// Creates a new empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a digit at the cursor. Returns whether the content changed.
    pub fn insert(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.content.len() >= MAX_PERCENT_DIGITS {
            return false;
        }
        self.content.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    /// Deletes the digit before the cursor. Returns whether the content changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.content.remove(self.cursor);
        true
    }

    /// Deletes the digit at the cursor. Returns whether the content changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.content.remove(self.cursor);
        true
    }

    /// Moves the cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Shows `value` in the field, or empties it for 0.
    pub fn set_value(&mut self, value: u32) {
        self.content = if value == 0 {
            String::new()
        } else {
            value.to_string()
        };
        self.cursor = self.content.len();
    }

    /// Returns the current content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the percentage the field holds under `policy`.
    pub fn value(&self, policy: PercentPolicy) -> u32 {
        validate_percent_input(&self.content, policy)
    }
}
