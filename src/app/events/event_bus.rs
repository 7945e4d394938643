//! # Event Bus
//!
//! Central event distribution system for decoupled communication
//! between the counter and its observers using the observer pattern.

use super::counter_signals::CounterSignal;
use super::view_events::ViewEvent;

/// Type alias for counter signal handlers to reduce complexity
pub type CounterSignalHandler = Box<dyn Fn(&CounterSignal) + Send + Sync>;

/// Type alias for view event handlers to reduce complexity
pub type ViewEventHandler = Box<dyn Fn(&ViewEvent) + Send + Sync>;

/// Event bus for decoupled communication between components
pub trait EventBus: Send + Sync {
    /// Publish a counter signal
    fn publish_counter_signal(&mut self, signal: CounterSignal);

    /// Publish a view event
    fn publish_view_event(&mut self, event: ViewEvent);

    /// Subscribe to counter signals
    fn subscribe_to_counter_signals(&mut self, handler: CounterSignalHandler);

    /// Subscribe to view events
    fn subscribe_to_view_events(&mut self, handler: ViewEventHandler);
}

/// Simple in-memory event bus implementation
pub struct SimpleEventBus {
    counter_handlers: Vec<CounterSignalHandler>,
    view_handlers: Vec<ViewEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            counter_handlers: Vec::new(),
            view_handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish_counter_signal(&mut self, signal: CounterSignal) {
        for handler in &self.counter_handlers {
            handler(&signal);
        }
    }

    fn publish_view_event(&mut self, event: ViewEvent) {
        for handler in &self.view_handlers {
            handler(&event);
        }
    }

    fn subscribe_to_counter_signals(&mut self, handler: CounterSignalHandler) {
        self.counter_handlers.push(handler);
    }

    fn subscribe_to_view_events(&mut self, handler: ViewEventHandler) {
        self.view_handlers.push(handler);
    }
}
