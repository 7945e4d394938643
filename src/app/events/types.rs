//! # Core Event Types
//!
//! Small value types shared by the event system: the display mode of the
//! tap area and the kind of feedback cue an operation produced.

/// How the tap area maps taps onto counter operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// The whole tap area increments
    #[default]
    Default,
    /// Left half decrements, right half increments
    Split,
}

impl DisplayMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Default => Self::Split,
            Self::Split => Self::Default,
        }
    }

    pub fn is_split(self) -> bool {
        self == Self::Split
    }

    /// Label shown in the status bar
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Split => "SPLIT",
        }
    }
}

/// Kind of cue emitted after a successful increment or decrement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    Increment,
    Decrement,
}

impl FeedbackKind {
    /// Platform system sound id associated with this cue.
    /// Terminal sinks do not use it.
    pub fn system_sound_id(self) -> u32 {
        match self {
            Self::Increment => 1105,
            Self::Decrement => 1104,
        }
    }

    /// Glyph flashed in the status bar
    pub fn glyph(self) -> char {
        match self {
            Self::Increment => '▲',
            Self::Decrement => '▼',
        }
    }
}
