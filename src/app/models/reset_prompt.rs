//! # Reset Prompt Model
//!
//! Text buffer behind the "Set Value" dialog and the parser that turns its
//! contents into a counter value.

use std::num::ParseIntError;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Dialog title shown in front of the input
pub const PROMPT_TITLE: &str = "Set Value";

/// Placeholder shown while the buffer is empty
pub const PROMPT_PLACEHOLDER: &str = "Set any value between 0~9999";

/// Why a reset input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetError {
    #[error("reset value is empty")]
    Empty,

    #[error("reset value {input:?} is not an integer: {source}")]
    Invalid {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse reset input the way the platform integer parser does:
/// optional `+`/`-`, ASCII digits, no surrounding whitespace, 64-bit range
pub fn parse_reset_value(input: &str) -> Result<i64, ResetError> {
    if input.is_empty() {
        return Err(ResetError::Empty);
    }
    input.parse::<i64>().map_err(|source| ResetError::Invalid {
        input: input.to_string(),
        source,
    })
}

/// Pending input of an open reset dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPrompt {
    input: String,
}

impl ResetPrompt {
    /// A freshly opened dialog starts empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Remove the last character; returns false when already empty
    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Terminal columns taken by the input, for cursor placement
    pub fn display_width(&self) -> usize {
        UnicodeWidthStr::width(self.input.as_str())
    }

    pub fn into_input(self) -> String {
        self.input
    }
}
