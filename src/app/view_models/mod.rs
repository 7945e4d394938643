//! # ViewModel Module
//!
//! The view model owns the counter controller, the reset dialog and the
//! screen layout, and queues view events for the renderer.

mod core;
mod counter_operations;
mod rendering_coordinator;

pub use core::ViewModel;
