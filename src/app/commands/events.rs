//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.
//! Commands suggest, the controller decides.

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// `Reset` button: open the reset dialog
    TapReset,

    /// `Subtract` button: decrement regardless of mode
    TapSubtract,

    /// `Split` button: toggle the display mode
    TapSplitToggle,

    /// Tap in the increment region (whole tap area, or right half in Split mode)
    TapIncrementRegion,

    /// Tap in the left half while in Split mode
    TapDecrementRegion,

    /// Confirm the reset dialog with its text
    SubmitResetValue { text: String },

    /// Dismiss the reset dialog without touching the counter
    CancelResetDialog,

    /// Character typed into the open reset dialog
    ResetInputChar { ch: char },

    /// Remove the last character of the reset dialog buffer
    ResetInputBackspace,

    /// Request terminal size update
    TerminalResizeRequested { width: u16, height: u16 },

    /// Request application quit
    QuitRequested,

    /// No action needed (command handled but no state change)
    NoAction,
}

impl CommandEvent {
    /// Create a reset submission event
    pub fn submit_reset(text: impl Into<String>) -> Self {
        Self::SubmitResetValue { text: text.into() }
    }

    /// True for the five tap gestures of the counter screen
    pub fn is_tap(&self) -> bool {
        matches!(
            self,
            Self::TapReset
                | Self::TapSubtract
                | Self::TapSplitToggle
                | Self::TapIncrementRegion
                | Self::TapDecrementRegion
        )
    }
}
