//! # Reset Dialog Commands
//!
//! Key handling while the reset prompt owns the bottom line.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Enter: submit the buffer
pub struct SubmitResetCommand;

impl Command for SubmitResetCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.prompt_open && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::submit_reset(
            context.state.pending_reset_input.clone(),
        )])
    }

    fn name(&self) -> &'static str {
        "SubmitReset"
    }
}

/// Esc: dismiss the dialog
pub struct CancelResetCommand;

impl Command for CancelResetCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.prompt_open && event.code == KeyCode::Esc
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CancelResetDialog])
    }

    fn name(&self) -> &'static str {
        "CancelReset"
    }
}

/// Backspace: drop the last buffered character
pub struct ResetBackspaceCommand;

impl Command for ResetBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.prompt_open && event.code == KeyCode::Backspace
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.pending_reset_input.is_empty() {
            return Ok(vec![CommandEvent::NoAction]);
        }
        Ok(vec![CommandEvent::ResetInputBackspace])
    }

    fn name(&self) -> &'static str {
        "ResetBackspace"
    }
}

/// Any printable character goes into the buffer, numeric or not
pub struct ResetInputCharCommand;

impl Command for ResetInputCharCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.prompt_open
            && matches!(event.code, KeyCode::Char(ch) if !ch.is_control())
            && !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match event.code {
            KeyCode::Char(ch) => Ok(vec![CommandEvent::ResetInputChar { ch }]),
            _ => Ok(vec![]),
        }
    }

    fn name(&self) -> &'static str {
        "ResetInputChar"
    }
}
