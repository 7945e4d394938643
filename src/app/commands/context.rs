//! # Command Context
//!
//! Read-only view of application state handed to commands.

use crate::app::events::DisplayMode;
use crate::app::view_models::ViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub mode: DisplayMode,
    pub value: i64,
    pub prompt_open: bool,
    pub pending_reset_input: String,
    pub terminal_dimensions: (u16, u16),
}

impl CounterSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            mode: view_model.mode(),
            value: view_model.value(),
            prompt_open: view_model.is_reset_prompt_open(),
            pending_reset_input: view_model
                .reset_input()
                .map(str::to_string)
                .unwrap_or_default(),
            terminal_dimensions: view_model.terminal_size(),
        }
    }

    pub fn is_split_mode(&self) -> bool {
        self.mode.is_split()
    }
}

impl Default for CounterSnapshot {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Default,
            value: crate::config::INITIAL_VALUE,
            prompt_open: false,
            pending_reset_input: String::new(),
            terminal_dimensions: (80, 24),
        }
    }
}

/// Base context available to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub state: CounterSnapshot,
}

impl CommandContext {
    pub fn new(state: CounterSnapshot) -> Self {
        Self { state }
    }

    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self::new(CounterSnapshot::from_view_model(view_model))
    }
}
