//! # Command System
//!
//! Commands inspect a key event and a read-only snapshot of the view model and
//! produce `CommandEvent`s. They never mutate state; the controller applies
//! the events.
//!
//! The registry checks each command's `is_relevant()` in registration order
//! and executes the first match.

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

pub mod app;
pub mod context;
pub mod counter;
pub mod dialog;
pub mod events;
pub mod mouse;

pub use app::{AppTerminateCommand, QuitCommand};
pub use context::{CommandContext, CounterSnapshot};
pub use counter::{
    TapDecrementCommand, TapIncrementCommand, TapResetCommand, TapSplitToggleCommand,
    TapSubtractCommand,
};
pub use dialog::{
    CancelResetCommand, ResetBackspaceCommand, ResetInputCharCommand, SubmitResetCommand,
};
pub use events::CommandEvent;
pub use mouse::tap_for_mouse_event;

/// Trait for all key-driven commands
pub trait Command: Send + Sync {
    /// Whether this command handles `event` in the current state
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events describing what should happen
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Command name for logging
    fn name(&self) -> &'static str;
}

/// Type alias for command collection to reduce complexity
pub type CommandCollection = Vec<Box<dyn Command>>;

/// Registry that holds all available commands
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create new command registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register_default_commands();
        registry
    }

    /// Register all default commands
    fn register_default_commands(&mut self) {
        // Application commands
        self.add_command(Box::new(AppTerminateCommand));

        // Reset dialog commands (only relevant while it is open)
        self.add_command(Box::new(SubmitResetCommand));
        self.add_command(Box::new(CancelResetCommand));
        self.add_command(Box::new(ResetBackspaceCommand));
        self.add_command(Box::new(ResetInputCharCommand));

        self.add_command(Box::new(QuitCommand));

        // Tap shortcuts
        self.add_command(Box::new(TapResetCommand));
        self.add_command(Box::new(TapSubtractCommand));
        self.add_command(Box::new(TapSplitToggleCommand));
        self.add_command(Box::new(TapIncrementCommand));
        self.add_command(Box::new(TapDecrementCommand));
    }

    /// Add a command to the registry
    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Process a key event through all commands.
    /// Key releases and repeats reported by some terminals are ignored.
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        if event.kind != KeyEventKind::Press {
            return Ok(vec![]);
        }

        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("command {} handles {:?}", command.name(), event.code);
                return command.execute(event, context);
            }
        }
        Ok(vec![])
    }

    /// Process a mouse event; only left presses produce taps
    pub fn process_mouse_event(
        &self,
        event: MouseEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        Ok(tap_for_mouse_event(&event, context).into_iter().collect())
    }

    /// Get all commands (for testing/debugging)
    pub fn commands(&self) -> &CommandCollection {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
