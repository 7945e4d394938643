//! # Counter Signals
//!
//! Output signals the counter controller produces for the presentation layer.

use super::types::FeedbackKind;

/// Signals emitted by `CounterController`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterSignal {
    /// Emitted after every operation that mutated the counter state
    StateChanged {
        display: String,
        is_split_mode: bool,
    },

    /// A successful increment or decrement wants a cue played
    Feedback { kind: FeedbackKind },
}
