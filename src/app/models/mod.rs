//! # Models Module
//!
//! Data models for the counter and its reset dialog.

pub mod counter_state;
pub mod reset_prompt;

pub use counter_state::{CounterState, DisplayDigits};
pub use reset_prompt::{
    parse_reset_value, ResetError, ResetPrompt, PROMPT_PLACEHOLDER, PROMPT_TITLE,
};
