//! # Events Module
//!
//! Re-exports all event system components organized by category.

pub mod counter_signals;
pub mod event_bus;
pub mod types;
pub mod view_events;

pub use counter_signals::CounterSignal;
pub use event_bus::{CounterSignalHandler, EventBus, SimpleEventBus, ViewEventHandler};
pub use types::{DisplayMode, FeedbackKind};
pub use view_events::ViewEvent;
