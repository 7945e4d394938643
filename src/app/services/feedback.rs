//! # Feedback Service
//!
//! Pluggable sinks for the short cue played after each successful increment
//! or decrement. Sinks are fire-and-forget: `play` never fails and never
//! blocks the counter operation that triggered it.

use crate::app::events::FeedbackKind;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// BEL control character understood by terminal emulators
const BELL: &[u8] = b"\x07";

/// Two bells, so a decrement sounds different from an increment
const DOUBLE_BELL: &[u8] = b"\x07\x07";

/// Destination for feedback cues
pub trait FeedbackSink: Send {
    /// Play the cue for `kind`. Failures are logged and swallowed.
    fn play(&self, kind: FeedbackKind);

    /// Sink name for logging
    fn name(&self) -> &'static str;
}

/// Rings the terminal bell: once for an increment, twice for a decrement.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBellFeedback;

impl TerminalBellFeedback {
    pub fn new() -> Self {
        Self
    }

    /// Bytes written for `kind`
    pub fn bell_sequence(kind: FeedbackKind) -> &'static [u8] {
        match kind {
            FeedbackKind::Increment => BELL,
            FeedbackKind::Decrement => DOUBLE_BELL,
        }
    }

    fn ring<W: Write>(out: &mut W, kind: FeedbackKind) -> io::Result<()> {
        out.write_all(Self::bell_sequence(kind))?;
        out.flush()
    }
}

impl FeedbackSink for TerminalBellFeedback {
    fn play(&self, kind: FeedbackKind) {
        if let Err(e) = Self::ring(&mut io::stdout(), kind) {
            tracing::warn!("Failed to ring bell for {:?}: {}", kind, e);
        }
    }

    fn name(&self) -> &'static str {
        "TerminalBell"
    }
}

/// Plays nothing (`--quiet`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentFeedback;

impl FeedbackSink for SilentFeedback {
    fn play(&self, kind: FeedbackKind) {
        tracing::trace!("Silent feedback for {:?}", kind);
    }

    fn name(&self) -> &'static str {
        "Silent"
    }
}

/// Type alias for the shared cue history
type FeedbackHistory = Arc<Mutex<Vec<FeedbackKind>>>;

/// Records every cue; clones share one history.
///
/// Hand one clone to the controller and keep the other to inspect what was
/// played.
#[derive(Debug, Default, Clone)]
pub struct RecordingFeedback {
    played: FeedbackHistory,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// All cues played so far, oldest first
    pub fn played(&self) -> Vec<FeedbackKind> {
        match self.played.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of cues of `kind` played so far
    pub fn count(&self, kind: FeedbackKind) -> usize {
        self.played().into_iter().filter(|k| *k == kind).count()
    }

    /// Forget the recorded history
    pub fn clear(&self) {
        match self.played.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl FeedbackSink for RecordingFeedback {
    fn play(&self, kind: FeedbackKind) {
        match self.played.lock() {
            Ok(mut guard) => guard.push(kind),
            Err(poisoned) => poisoned.into_inner().push(kind),
        }
    }

    fn name(&self) -> &'static str {
        "Recording"
    }
}
