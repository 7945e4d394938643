//! # View Events
//!
//! Events telling the renderer which parts of the screen are stale.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Full screen redraw required (terminal resize, first paint)
    FullRedrawRequired,

    /// The tap area changed shape (mode toggle, display width change)
    TapAreaRedrawRequired,

    /// Only the digit cells changed
    DisplayRedrawRequired,

    /// Status bar (mode, feedback glyph, reset prompt) needs updating
    StatusBarUpdateRequired,
}
