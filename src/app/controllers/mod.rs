//! # Controllers
//!
//! `CounterController` owns the counter state; `AppController` runs the
//! terminal event loop around it.

pub mod app_controller;
pub mod counter_controller;

pub use app_controller::AppController;
pub use counter_controller::CounterController;
