//! # I/O Abstraction Layer
//!
//! Trait abstractions for input/output streams so the controller can be
//! driven by a real terminal or by in-memory doubles.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event::read()
//!                            ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<Event>
//!                            ──▶ MockRenderStream    ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use terminal::{TerminalEventStream, TerminalRenderStream};

pub use mock::{MockEventStream, MockRenderStream, RenderCommand};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Input event stream abstraction
pub trait EventStream: Send {
    /// Check if events are available within `timeout`.
    /// Equivalent to `crossterm::event::poll()`.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next available event.
    /// Only call after `poll()` returned true.
    fn read(&mut self) -> Result<Event>;

    /// True when no more events will ever arrive.
    /// Terminal streams never run dry; scripted streams do.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Output render stream abstraction
pub trait RenderStream: Write + Send {
    /// Clear the entire screen
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to specific position (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Hide the cursor
    fn hide_cursor(&mut self) -> Result<()>;

    /// Show the cursor
    fn show_cursor(&mut self) -> Result<()>;

    /// Get terminal size as (width, height)
    fn get_size(&self) -> Result<TerminalSize>;

    /// Enter alternate screen buffer
    fn enter_alternate_screen(&mut self) -> Result<()>;

    /// Leave alternate screen buffer
    fn leave_alternate_screen(&mut self) -> Result<()>;

    /// Enable terminal raw mode
    fn enable_raw_mode(&mut self) -> Result<()>;

    /// Disable terminal raw mode
    fn disable_raw_mode(&mut self) -> Result<()>;

    /// Start reporting mouse clicks as events
    fn enable_mouse_capture(&mut self) -> Result<()>;

    /// Stop reporting mouse events
    fn disable_mouse_capture(&mut self) -> Result<()>;
}
