//! # Mouse Taps
//!
//! Left-button presses are taps. The screen layout decides which hotspot
//! the press landed on.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{CommandContext, CommandEvent};
use crate::app::geometry::{Button, Hotspot, ScreenLayout};

/// Translate a mouse event into a tap, if it is one.
///
/// Taps are ignored while the reset dialog is open.
pub fn tap_for_mouse_event(event: &MouseEvent, context: &CommandContext) -> Option<CommandEvent> {
    if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
        return None;
    }
    if context.state.prompt_open {
        tracing::debug!("tap at ({}, {}) ignored: dialog open", event.column, event.row);
        return None;
    }

    let (width, height) = context.state.terminal_dimensions;
    let layout = ScreenLayout::new(width, height);
    let hotspot = layout.hotspot_at(event.column, event.row, context.state.mode)?;

    Some(match hotspot {
        Hotspot::Button(Button::Reset) => CommandEvent::TapReset,
        Hotspot::Button(Button::Subtract) => CommandEvent::TapSubtract,
        Hotspot::Button(Button::Split) => CommandEvent::TapSplitToggle,
        Hotspot::IncrementRegion => CommandEvent::TapIncrementRegion,
        Hotspot::DecrementRegion => CommandEvent::TapDecrementRegion,
    })
}
