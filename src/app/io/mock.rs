//! # Mock I/O Implementations for Testing
//!
//! In-memory EventStream and RenderStream implementations for driving the
//! application without a terminal.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Scripted event stream
///
/// `poll` reports whatever is queued; once the queue is drained the stream
/// is exhausted and the event loop stops.
#[derive(Debug, Clone, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    /// Create a new mock event stream with pre-programmed events
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Create an empty mock event stream
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add an event to the stream
    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Queue a key press
    pub fn push_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.push_event(Event::Key(KeyEvent::new(code, modifiers)));
    }

    /// Queue a left click at (`column`, `row`)
    pub fn push_click(&mut self, column: u16, row: u16) {
        self.push_event(left_click(column, row));
    }

    /// Queue a terminal resize
    pub fn push_resize(&mut self, width: u16, height: u16) {
        self.push_event(Event::Resize(width, height));
    }

    /// Events not yet read
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

/// Left mouse button press at (`column`, `row`)
pub fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    GetSize,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    EnableMouseCapture,
    DisableMouseCapture,
    Write(Vec<u8>),
    Flush,
}

/// Type alias for command history
type CommandHistory = Arc<Mutex<Vec<RenderCommand>>>;

fn lock_history(history: &CommandHistory) -> MutexGuard<'_, Vec<RenderCommand>> {
    match history.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Mock render stream for testing
///
/// Records all rendering commands and the bytes written since the last
/// screen clear.
pub struct MockRenderStream {
    commands: CommandHistory,
    buffer: Vec<u8>,
    terminal_size: TerminalSize,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
    mouse_capture: bool,
}

impl MockRenderStream {
    /// Create a new mock render stream
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    /// Create a mock render stream with specific terminal size
    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            buffer: Vec::new(),
            terminal_size: size,
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
            mouse_capture: false,
        }
    }

    /// Get recorded commands for verification
    pub fn get_commands(&self) -> Vec<RenderCommand> {
        lock_history(&self.commands).clone()
    }

    /// Clear recorded commands
    pub fn clear_commands(&mut self) {
        lock_history(&self.commands).clear();
    }

    /// Check if a specific command was recorded
    pub fn has_command(&self, command: &RenderCommand) -> bool {
        lock_history(&self.commands).contains(command)
    }

    /// Get the current buffer contents as a string
    pub fn get_buffer_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer).to_string()
    }

    /// Buffer contents with ANSI escape sequences removed
    pub fn get_plain_text(&self) -> String {
        strip_ansi(&self.get_buffer_string())
    }

    /// Report a new size from `get_size`
    pub fn set_size(&mut self, size: TerminalSize) {
        self.terminal_size = size;
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    pub fn is_mouse_capture(&self) -> bool {
        self.mouse_capture
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn record(&self, command: RenderCommand) {
        lock_history(&self.commands).push(command);
    }
}

/// Remove CSI (`ESC [ ... final`) and two-byte escape sequences
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            plain.push(ch);
            continue;
        }
        match chars.next() {
            Some('[') => {
                for next in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&next) {
                        break;
                    }
                }
            }
            Some(_) | None => {}
        }
    }

    plain
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        self.record(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::ClearScreen);
        self.buffer.clear();
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::HideCursor);
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::ShowCursor);
        self.cursor_visible = true;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        self.record(RenderCommand::GetSize);
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::EnterAlternateScreen);
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::LeaveAlternateScreen);
        self.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableRawMode);
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableRawMode);
        self.raw_mode = false;
        Ok(())
    }

    fn enable_mouse_capture(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableMouseCapture);
        self.mouse_capture = true;
        Ok(())
    }

    fn disable_mouse_capture(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableMouseCapture);
        self.mouse_capture = false;
        Ok(())
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}
