//! # Counter State Model
//!
//! The single piece of application state: the counted value and the display
//! mode of the tap area. Only `CounterController` mutates it.

use crate::app::events::DisplayMode;
use crate::config::{DISPLAY_WIDTH, INITIAL_VALUE, MAX_VALUE, MIN_VALUE};

/// Counter value plus tap-area mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    value: i64,
    mode: DisplayMode,
}

impl CounterState {
    /// State at application start: `1234` in Default mode
    pub fn new() -> Self {
        Self {
            value: INITIAL_VALUE,
            mode: DisplayMode::Default,
        }
    }

    /// Same state holding `value`
    pub fn with_value(self, value: i64) -> Self {
        Self { value, ..self }
    }

    /// Same state in `mode`
    pub fn with_mode(self, mode: DisplayMode) -> Self {
        Self { mode, ..self }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_split_mode(&self) -> bool {
        self.mode.is_split()
    }

    /// Whether an increment would move the value.
    /// Values put above the bound by a reset are never pushed further out.
    pub fn can_increment(&self) -> bool {
        self.value < MAX_VALUE
    }

    /// Whether a decrement would move the value
    pub fn can_decrement(&self) -> bool {
        self.value > MIN_VALUE
    }

    /// Zero-padded rendering of the value, built once
    pub fn display(&self) -> DisplayDigits {
        DisplayDigits::new(self.value)
    }

    pub(crate) fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    pub(crate) fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

/// The formatted counter value, addressable by character position
///
/// Padded to `DISPLAY_WIDTH` with zeros (`%04d` semantics: the sign of a
/// negative value counts toward the width). Longer values keep every digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDigits {
    text: String,
}

impl DisplayDigits {
    pub fn new(value: i64) -> Self {
        Self {
            text: format!("{value:0width$}", width = DISPLAY_WIDTH),
        }
    }

    /// Character shown in cell `index`, `None` past the end
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.text.chars().nth(index)
    }

    /// Number of cells needed to show every character
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for DisplayDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
