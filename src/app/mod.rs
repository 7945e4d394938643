//! # Counter Application
//!
//! MVVM layout of the tap counter. Each component has one concern and the
//! terminal is reached only through the `io` traits.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod geometry;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::{AppController, CounterController};
pub use events::*;
pub use models::{CounterState, ResetError, ResetPrompt};
pub use services::{FeedbackSink, RecordingFeedback, SilentFeedback, TerminalBellFeedback};
pub use view_models::ViewModel;
pub use views::{TerminalRenderer, ViewRenderer};

// Re-export specific items from commands to avoid conflicts
pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, CounterSnapshot};
