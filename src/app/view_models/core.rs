//! # Core ViewModel Structure
//!
//! Contains the main ViewModel struct, its construction and the read API the
//! renderer and commands use. Mutating operations live in
//! `counter_operations`, event bookkeeping in `rendering_coordinator`.

use crate::app::controllers::CounterController;
use crate::app::events::{
    CounterSignal, DisplayMode, EventBus, FeedbackKind, SimpleEventBus, ViewEvent,
};
use crate::app::geometry::ScreenLayout;
use crate::app::models::ResetPrompt;
use crate::app::services::SilentFeedback;
use std::sync::{Arc, Mutex};

/// Counter signals received from the controller and not yet processed
pub(super) type SignalInbox = Arc<Mutex<Vec<CounterSignal>>>;

/// Presentation state around the counter
pub struct ViewModel {
    pub(super) counter: CounterController,
    pub(super) reset_prompt: Option<ResetPrompt>,
    pub(super) layout: ScreenLayout,
    pub(super) last_feedback: Option<FeedbackKind>,

    // What the screen currently shows, to tell digit-only updates from
    // changes that reshape the tap area
    pub(super) rendered_display: String,
    pub(super) rendered_mode: DisplayMode,

    // Event management
    pub(super) signal_inbox: SignalInbox,
    pub(super) pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    /// Create a new ViewModel over a silent counter at its start-up state
    pub fn new() -> Self {
        Self::with_controller(CounterController::new(Box::new(SilentFeedback)))
    }

    /// Wrap an existing controller; its signals feed this view model
    pub fn with_controller(counter: CounterController) -> Self {
        let rendered_display = counter.formatted_display();
        let rendered_mode = counter.mode();
        let mut view_model = Self {
            counter,
            reset_prompt: None,
            layout: ScreenLayout::default(),
            last_feedback: None,
            rendered_display,
            rendered_mode,
            signal_inbox: Arc::new(Mutex::new(Vec::new())),
            pending_view_events: Vec::new(),
        };
        view_model.set_event_bus(Box::new(SimpleEventBus::new()));
        view_model
    }

    /// Route the controller's signals through `event_bus`.
    ///
    /// The view model subscribes its own inbox before handing the bus to the
    /// controller, so subscribers added by the caller see the same signals.
    pub fn set_event_bus(&mut self, mut event_bus: Box<dyn EventBus>) {
        let inbox = Arc::clone(&self.signal_inbox);
        event_bus.subscribe_to_counter_signals(Box::new(move |signal| {
            let mut pending = match inbox.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            pending.push(signal.clone());
        }));
        self.counter.set_event_bus(event_bus);
        tracing::debug!("Event bus set for ViewModel");
    }

    pub fn value(&self) -> i64 {
        self.counter.value()
    }

    pub fn mode(&self) -> DisplayMode {
        self.counter.mode()
    }

    pub fn is_split_mode(&self) -> bool {
        self.counter.is_split_mode()
    }

    /// Zero-padded display text
    pub fn formatted_display(&self) -> String {
        self.counter.formatted_display()
    }

    pub fn display_char(&self, index: usize) -> Option<char> {
        self.counter.display_char(index)
    }

    pub fn is_reset_prompt_open(&self) -> bool {
        self.reset_prompt.is_some()
    }

    pub fn reset_prompt(&self) -> Option<&ResetPrompt> {
        self.reset_prompt.as_ref()
    }

    /// Text typed into the open reset dialog
    pub fn reset_input(&self) -> Option<&str> {
        self.reset_prompt.as_ref().map(ResetPrompt::input)
    }

    /// Cue of the most recent successful increment or decrement
    pub fn last_feedback(&self) -> Option<FeedbackKind> {
        self.last_feedback
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        (self.layout.width(), self.layout.height())
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModel")
            .field("counter", &self.counter)
            .field("reset_prompt", &self.reset_prompt)
            .field("layout", &self.layout)
            .field("last_feedback", &self.last_feedback)
            .field("pending_view_events", &self.pending_view_events)
            .finish()
    }
}
