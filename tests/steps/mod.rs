//! Step definitions for Cucumber tests
//!
//! Steps are organized by feature domain:
//! - `application` - launch, quit, terminal lifecycle
//! - `counter` - taps and value/feedback checks
//! - `reset` - the reset dialog
//! - `screen` - rendered output

pub mod application;
pub mod counter;
pub mod reset;
pub mod screen;
