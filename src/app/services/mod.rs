//! # Services
//!
//! Side-effecting collaborators the counter hands work to.

pub mod feedback;

pub use feedback::{FeedbackSink, RecordingFeedback, SilentFeedback, TerminalBellFeedback};
