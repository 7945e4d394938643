//! # Counter Commands
//!
//! Keyboard shortcuts standing in for taps on the counter screen. None of
//! them apply while the reset dialog is open; keys then go to the dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// A key without Ctrl/Alt, dialog closed
fn is_tap_key(context: &CommandContext, event: &KeyEvent) -> bool {
    !context.state.prompt_open
        && !event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// `r`: open the reset dialog
pub struct TapResetCommand;

impl Command for TapResetCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        is_tap_key(context, event) && matches!(event.code, KeyCode::Char('r' | 'R'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::TapReset])
    }

    fn name(&self) -> &'static str {
        "TapReset"
    }
}

/// `s` or `-`: the Subtract button
pub struct TapSubtractCommand;

impl Command for TapSubtractCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        is_tap_key(context, event) && matches!(event.code, KeyCode::Char('s' | 'S' | '-'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::TapSubtract])
    }

    fn name(&self) -> &'static str {
        "TapSubtract"
    }
}

/// `t` or `|`: the Split button
pub struct TapSplitToggleCommand;

impl Command for TapSplitToggleCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        is_tap_key(context, event) && matches!(event.code, KeyCode::Char('t' | 'T' | '|'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::TapSplitToggle])
    }

    fn name(&self) -> &'static str {
        "TapSplitToggle"
    }
}

/// `+`, `=`, Right, Up in any mode; Space and Enter only in Default mode
pub struct TapIncrementCommand;

impl Command for TapIncrementCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        if !is_tap_key(context, event) {
            return false;
        }
        match event.code {
            KeyCode::Char('+' | '=') | KeyCode::Right | KeyCode::Up => true,
            KeyCode::Char(' ') | KeyCode::Enter => !context.state.is_split_mode(),
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::TapIncrementRegion])
    }

    fn name(&self) -> &'static str {
        "TapIncrement"
    }
}

/// Left and Down, Split mode only
pub struct TapDecrementCommand;

impl Command for TapDecrementCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        is_tap_key(context, event)
            && context.state.is_split_mode()
            && matches!(event.code, KeyCode::Left | KeyCode::Down)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::TapDecrementRegion])
    }

    fn name(&self) -> &'static str {
        "TapDecrement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::CounterSnapshot;
    use crate::app::events::DisplayMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn context(mode: DisplayMode, prompt_open: bool) -> CommandContext {
        CommandContext::new(CounterSnapshot {
            mode,
            prompt_open,
            ..CounterSnapshot::default()
        })
    }

    #[test]
    fn reset_key_should_open_dialog() {
        let ctx = context(DisplayMode::Default, false);
        let cmd = TapResetCommand;
        assert!(cmd.is_relevant(&ctx, &key(KeyCode::Char('r'))));
        assert_eq!(
            cmd.execute(key(KeyCode::Char('r')), &ctx).unwrap(),
            vec![CommandEvent::TapReset]
        );
    }

    #[test]
    fn tap_keys_should_not_apply_while_dialog_is_open() {
        let ctx = context(DisplayMode::Default, true);
        assert!(!TapResetCommand.is_relevant(&ctx, &key(KeyCode::Char('r'))));
        assert!(!TapSubtractCommand.is_relevant(&ctx, &key(KeyCode::Char('-'))));
        assert!(!TapSplitToggleCommand.is_relevant(&ctx, &key(KeyCode::Char('t'))));
        assert!(!TapIncrementCommand.is_relevant(&ctx, &key(KeyCode::Enter)));
    }

    #[test]
    fn subtract_should_apply_in_both_modes() {
        for mode in [DisplayMode::Default, DisplayMode::Split] {
            let ctx = context(mode, false);
            assert!(TapSubtractCommand.is_relevant(&ctx, &key(KeyCode::Char('s'))));
            assert!(TapSubtractCommand.is_relevant(&ctx, &key(KeyCode::Char('-'))));
        }
    }

    #[test]
    fn split_toggle_should_accept_pipe_with_shift() {
        let ctx = context(DisplayMode::Default, false);
        let event = KeyEvent::new(KeyCode::Char('|'), KeyModifiers::SHIFT);
        assert!(TapSplitToggleCommand.is_relevant(&ctx, &event));
    }

    #[test]
    fn space_and_enter_should_increment_only_in_default_mode() {
        let default_ctx = context(DisplayMode::Default, false);
        let split_ctx = context(DisplayMode::Split, false);

        for code in [KeyCode::Char(' '), KeyCode::Enter] {
            assert!(TapIncrementCommand.is_relevant(&default_ctx, &key(code)));
            assert!(!TapIncrementCommand.is_relevant(&split_ctx, &key(code)));
        }
    }

    #[test]
    fn arrows_should_map_to_regions_by_mode() {
        let default_ctx = context(DisplayMode::Default, false);
        let split_ctx = context(DisplayMode::Split, false);

        assert!(TapIncrementCommand.is_relevant(&default_ctx, &key(KeyCode::Right)));
        assert!(TapIncrementCommand.is_relevant(&split_ctx, &key(KeyCode::Up)));
        assert!(!TapDecrementCommand.is_relevant(&default_ctx, &key(KeyCode::Left)));
        assert!(TapDecrementCommand.is_relevant(&split_ctx, &key(KeyCode::Left)));
        assert!(TapDecrementCommand.is_relevant(&split_ctx, &key(KeyCode::Down)));
    }

    #[test]
    fn control_chords_should_not_tap() {
        let ctx = context(DisplayMode::Default, false);
        let event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(!TapResetCommand.is_relevant(&ctx, &event));
    }
}
