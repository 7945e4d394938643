use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use cucumber::World;

// Import real application components
use tapcounter::{
    app::geometry::{Button, ScreenLayout},
    app::io::{mock::left_click, MockEventStream, MockRenderStream},
    config::AppConfig,
    AppController, FeedbackKind, RecordingFeedback,
};

pub type TestController = AppController<MockEventStream, MockRenderStream>;

/// Terminal size every scenario starts with
pub const DEFAULT_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// Drives a real `AppController` headlessly: events are handed straight to
/// `process_event` and output is captured by `MockRenderStream`.
#[derive(World)]
#[world(init = Self::new)]
pub struct CounterWorld {
    /// Real controller, created by the "app is running" steps
    pub controller: Option<TestController>,

    /// Shared with the controller's feedback sink
    pub feedback: RecordingFeedback,

    /// Startup configuration for the next launch
    pub config: AppConfig,

    /// Size reported by the mock terminal
    pub terminal_size: (u16, u16),
}

impl std::fmt::Debug for CounterWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterWorld")
            .field("running", &self.controller.is_some())
            .field("feedback", &self.feedback.played())
            .field("config", &self.config)
            .field("terminal_size", &self.terminal_size)
            .finish()
    }
}

impl CounterWorld {
    pub fn new() -> Self {
        Self {
            controller: None,
            feedback: RecordingFeedback::new(),
            config: AppConfig::default(),
            terminal_size: DEFAULT_TERMINAL_SIZE,
        }
    }

    /// Launch the application with the current configuration
    pub fn start(&mut self) -> Result<()> {
        self.feedback = RecordingFeedback::new();
        let mut controller = AppController::with_io_streams(
            &self.config,
            Box::new(self.feedback.clone()),
            MockEventStream::empty(),
            MockRenderStream::with_size(self.terminal_size),
        )?;
        controller.initialize()?;
        self.controller = Some(controller);
        Ok(())
    }

    pub fn controller(&self) -> &TestController {
        self.controller
            .as_ref()
            .expect("application is not running")
    }

    pub fn controller_mut(&mut self) -> &mut TestController {
        self.controller
            .as_mut()
            .expect("application is not running")
    }

    pub fn send_event(&mut self, event: Event) {
        self.controller_mut()
            .process_event(event)
            .expect("event processing failed");
    }

    pub fn press_key(&mut self, code: KeyCode) {
        self.send_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    pub fn press_ctrl(&mut self, ch: char) {
        self.send_event(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )));
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(KeyCode::Char(ch));
        }
    }

    pub fn click(&mut self, column: u16, row: u16) {
        self.send_event(left_click(column, row));
    }

    fn layout(&self) -> ScreenLayout {
        let (width, height) = self.controller().view_model().terminal_size();
        ScreenLayout::new(width, height)
    }

    pub fn click_button(&mut self, button: Button) {
        let rect = self.layout().button_rect(button);
        self.click(rect.x + rect.width / 2, rect.y);
    }

    /// Middle of the tap area's left half
    pub fn tap_left_half(&mut self) {
        let (left, _) = self.layout().split_halves();
        self.click(left.x + left.width / 2, left.y + left.height / 2);
    }

    /// Middle of the tap area's right half
    pub fn tap_right_half(&mut self) {
        let (_, right) = self.layout().split_halves();
        self.click(right.x + right.width / 2, right.y + right.height / 2);
    }

    /// Set the value through the reset dialog, then forget any cues
    pub fn set_value(&mut self, value: i64) {
        self.click_button(Button::Reset);
        self.type_text(&value.to_string());
        self.press_key(KeyCode::Enter);
        self.feedback.clear();
    }

    pub fn value(&self) -> i64 {
        self.controller().view_model().value()
    }

    pub fn display(&self) -> String {
        self.controller().view_model().formatted_display()
    }

    pub fn cues(&self, kind: FeedbackKind) -> usize {
        self.feedback.count(kind)
    }

    /// Force a full redraw and return the visible text
    pub fn screen_text(&mut self) -> String {
        let (width, height) = self.controller().view_model().terminal_size();
        self.send_event(Event::Resize(width, height));
        self.controller().render_stream().get_plain_text()
    }
}

impl Default for CounterWorld {
    fn default() -> Self {
        Self::new()
    }
}
