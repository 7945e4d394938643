//! # Rendering Coordination
//!
//! Turns counter signals into view events and hands them to the controller.

use crate::app::events::{CounterSignal, ViewEvent};
use crate::app::geometry::ScreenLayout;
use crate::app::view_models::core::ViewModel;

impl ViewModel {
    /// Emit a view event (adds to pending events collection)
    pub(super) fn emit_view_event(&mut self, event: ViewEvent) {
        self.pending_view_events.push(event);
        tracing::debug!("View event emitted: {:?}", event);
    }

    /// Collect and clear pending view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    /// Recompute the layout and request a full redraw
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.layout = ScreenLayout::new(width, height);
        tracing::debug!("Terminal size updated: {}x{}", width, height);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    /// Drain the signal inbox.
    ///
    /// A new digit count or mode reshapes the tap area; otherwise only the
    /// digit cells are stale.
    pub(super) fn process_counter_signals(&mut self) {
        let signals = {
            let mut inbox = match self.signal_inbox.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            std::mem::take(&mut *inbox)
        };

        for signal in signals {
            match signal {
                CounterSignal::StateChanged {
                    display,
                    is_split_mode,
                } => {
                    let mode_changed = is_split_mode != self.rendered_mode.is_split();
                    let width_changed =
                        display.chars().count() != self.rendered_display.chars().count();

                    if mode_changed {
                        self.rendered_mode = self.rendered_mode.toggled();
                        self.emit_view_event(ViewEvent::TapAreaRedrawRequired);
                        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
                    } else if width_changed {
                        self.emit_view_event(ViewEvent::TapAreaRedrawRequired);
                    } else if display != self.rendered_display {
                        self.emit_view_event(ViewEvent::DisplayRedrawRequired);
                    }
                    self.rendered_display = display;
                }
                CounterSignal::Feedback { kind } => {
                    self.last_feedback = Some(kind);
                    self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
                }
            }
        }
    }
}
