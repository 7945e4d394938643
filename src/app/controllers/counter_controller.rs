//! # Counter Controller
//!
//! Owns `CounterState` and is the only code that mutates it. Every operation
//! is a single synchronous update; each mutation publishes
//! `CounterSignal::StateChanged`, and successful increments/decrements also
//! play a feedback cue.

use crate::app::events::{CounterSignal, DisplayMode, EventBus, FeedbackKind};
use crate::app::models::{parse_reset_value, CounterState};
use crate::app::services::FeedbackSink;

/// Type alias for event bus option to reduce complexity
type EventBusOption = Option<Box<dyn EventBus>>;

pub struct CounterController {
    state: CounterState,
    feedback: Box<dyn FeedbackSink>,
    event_bus: EventBusOption,
}

impl CounterController {
    /// Controller over the start-up state (`1234`, Default mode)
    pub fn new(feedback: Box<dyn FeedbackSink>) -> Self {
        Self::with_state(CounterState::new(), feedback)
    }

    pub fn with_state(state: CounterState, feedback: Box<dyn FeedbackSink>) -> Self {
        Self {
            state,
            feedback,
            event_bus: None,
        }
    }

    /// Publish signals on `event_bus` from now on
    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = Some(event_bus);
    }

    /// Add one unless the value is at (or above) 9999.
    /// Returns whether the value changed.
    pub fn increment(&mut self) -> bool {
        if !self.state.can_increment() {
            tracing::debug!("increment ignored at {}", self.state.value());
            return false;
        }
        self.state.set_value(self.state.value() + 1);
        self.emit_state_changed();
        self.emit_feedback(FeedbackKind::Increment);
        true
    }

    /// Subtract one unless the value is at (or below) 0.
    /// Returns whether the value changed.
    pub fn decrement(&mut self) -> bool {
        if !self.state.can_decrement() {
            tracing::debug!("decrement ignored at {}", self.state.value());
            return false;
        }
        self.state.set_value(self.state.value() - 1);
        self.emit_state_changed();
        self.emit_feedback(FeedbackKind::Decrement);
        true
    }

    /// Set the value from dialog text.
    ///
    /// Unparsable input leaves the state untouched. A parsed value is stored
    /// verbatim, without clamping to `0..=9999`. No cue is played.
    /// Returns whether the input was accepted.
    pub fn reset(&mut self, new_value: &str) -> bool {
        match parse_reset_value(new_value) {
            Ok(value) => {
                tracing::debug!("reset {} -> {}", self.state.value(), value);
                self.state.set_value(value);
                self.emit_state_changed();
                true
            }
            Err(e) => {
                tracing::debug!("reset ignored: {}", e);
                false
            }
        }
    }

    /// Switch between Default and Split mode
    pub fn toggle_split_mode(&mut self) {
        let mode = self.state.mode().toggled();
        tracing::debug!("display mode -> {:?}", mode);
        self.state.set_mode(mode);
        self.emit_state_changed();
    }

    /// Zero-padded value, at least 4 characters
    pub fn formatted_display(&self) -> String {
        self.state.display().into_string()
    }

    /// Character at `index` of the formatted display
    pub fn display_char(&self, index: usize) -> Option<char> {
        self.state.display().char_at(index)
    }

    pub fn value(&self) -> i64 {
        self.state.value()
    }

    pub fn mode(&self) -> DisplayMode {
        self.state.mode()
    }

    pub fn is_split_mode(&self) -> bool {
        self.state.is_split_mode()
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    fn emit_state_changed(&mut self) {
        let signal = CounterSignal::StateChanged {
            display: self.formatted_display(),
            is_split_mode: self.state.is_split_mode(),
        };
        self.publish(signal);
    }

    fn emit_feedback(&mut self, kind: FeedbackKind) {
        self.feedback.play(kind);
        self.publish(CounterSignal::Feedback { kind });
    }

    fn publish(&mut self, signal: CounterSignal) {
        if let Some(event_bus) = &mut self.event_bus {
            event_bus.publish_counter_signal(signal);
        }
    }
}

impl std::fmt::Debug for CounterController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterController")
            .field("state", &self.state)
            .field("feedback", &self.feedback.name())
            .field("has_event_bus", &self.event_bus.is_some())
            .finish()
    }
}
