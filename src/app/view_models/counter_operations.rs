//! # Counter Operations
//!
//! Input events applied to the counter and the reset dialog. While the
//! dialog is open it is modal: taps are ignored.

use crate::app::events::ViewEvent;
use crate::app::models::ResetPrompt;
use crate::app::view_models::core::ViewModel;

impl ViewModel {
    /// Open the reset dialog with an empty buffer
    pub fn tap_reset(&mut self) -> bool {
        if self.tap_blocked_by_dialog("reset") {
            return false;
        }
        self.reset_prompt = Some(ResetPrompt::new());
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
        true
    }

    /// `Subtract` button: decrement in either mode
    pub fn tap_subtract(&mut self) -> bool {
        if self.tap_blocked_by_dialog("subtract") {
            return false;
        }
        let changed = self.counter.decrement();
        self.process_counter_signals();
        changed
    }

    pub fn tap_split_toggle(&mut self) -> bool {
        if self.tap_blocked_by_dialog("split toggle") {
            return false;
        }
        self.counter.toggle_split_mode();
        self.process_counter_signals();
        true
    }

    pub fn tap_increment_region(&mut self) -> bool {
        if self.tap_blocked_by_dialog("increment region") {
            return false;
        }
        let changed = self.counter.increment();
        self.process_counter_signals();
        changed
    }

    /// Left half of the split tap area; there is no such region in Default mode
    pub fn tap_decrement_region(&mut self) -> bool {
        if self.tap_blocked_by_dialog("decrement region") {
            return false;
        }
        if !self.counter.is_split_mode() {
            tracing::debug!("decrement region tap ignored in Default mode");
            return false;
        }
        let changed = self.counter.decrement();
        self.process_counter_signals();
        changed
    }

    /// Apply `text` as the new value, then close the dialog.
    /// Returns whether the text parsed.
    pub fn submit_reset_value(&mut self, text: &str) -> bool {
        let accepted = self.counter.reset(text);
        self.process_counter_signals();
        self.close_reset_prompt();
        accepted
    }

    /// Close the dialog without touching the counter
    pub fn cancel_reset_dialog(&mut self) {
        self.close_reset_prompt();
    }

    pub fn add_reset_input_char(&mut self, ch: char) {
        if let Some(prompt) = &mut self.reset_prompt {
            prompt.push_char(ch);
            self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
        }
    }

    pub fn backspace_reset_input(&mut self) {
        let removed = self
            .reset_prompt
            .as_mut()
            .is_some_and(|prompt| prompt.backspace());
        if removed {
            self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
        }
    }

    fn close_reset_prompt(&mut self) {
        if let Some(prompt) = self.reset_prompt.take() {
            tracing::debug!("reset dialog closed, discarding {:?}", prompt.into_input());
            self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
        }
    }

    fn tap_blocked_by_dialog(&self, tap: &str) -> bool {
        if self.reset_prompt.is_some() {
            tracing::debug!("{} tap ignored: reset dialog open", tap);
            return true;
        }
        false
    }
}
