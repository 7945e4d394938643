//! # Application Controller
//!
//! The controller orchestrates the counter components and manages the event loop.
//! It connects terminal input to commands and coordinates view updates.

use crate::app::{
    commands::{CommandContext, CommandEvent, CommandRegistry},
    controllers::CounterController,
    events::{CounterSignal, EventBus, SimpleEventBus, ViewEvent},
    io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream},
    models::CounterState,
    services::{FeedbackSink, SilentFeedback, TerminalBellFeedback},
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use crate::config::{self, AppConfig};
use anyhow::Result;
use crossterm::event::Event;
use std::io;

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    should_quit: bool,
}

impl AppController<TerminalEventStream, TerminalRenderStream<io::Stdout>> {
    /// Controller over the real terminal, configured from `config`
    pub fn new(config: &AppConfig) -> Result<Self> {
        let feedback: Box<dyn FeedbackSink> = if config.quiet {
            Box::new(SilentFeedback)
        } else {
            Box::new(TerminalBellFeedback::new())
        };
        Self::with_io_streams(
            config,
            feedback,
            TerminalEventStream::new(),
            TerminalRenderStream::new(),
        )
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams (dependency injection)
    pub fn with_io_streams(
        config: &AppConfig,
        feedback: Box<dyn FeedbackSink>,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let mut state = CounterState::new();
        if config.start_in_split_mode {
            state = state.with_mode(state.mode().toggled());
        }
        tracing::info!(
            "starting at {} in {:?} mode, feedback: {}",
            state.value(),
            state.mode(),
            feedback.name()
        );

        let mut view_model = ViewModel::with_controller(CounterController::with_state(
            state, feedback,
        ));
        view_model.set_event_bus(Box::new(Self::logging_event_bus()));

        // Pass RenderStream ownership to the View layer (TerminalRenderer)
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        // Synchronize view model with actual terminal size
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);
        view_model.collect_pending_view_events();

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            should_quit: false,
        })
    }

    /// Event bus that traces every counter signal
    fn logging_event_bus() -> SimpleEventBus {
        let mut event_bus = SimpleEventBus::new();
        event_bus.subscribe_to_counter_signals(Box::new(|signal| match signal {
            CounterSignal::StateChanged {
                display: text,
                is_split_mode,
            } => tracing::debug!("state changed: {} (split: {})", text, is_split_mode),
            CounterSignal::Feedback { kind } => tracing::debug!("feedback: {:?}", kind),
        }));
        event_bus
    }

    /// Set up the terminal and draw the first frame
    pub fn initialize(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.view_renderer.render_full(&self.view_model)
    }

    /// Run the main application loop.
    ///
    /// The terminal is restored even when the loop fails.
    pub fn run(&mut self) -> Result<()> {
        let result = self.initialize().and_then(|()| self.event_loop());
        let cleanup = self.view_renderer.cleanup();
        tracing::info!("event loop finished at {}", self.view_model.value());
        result.and(cleanup)
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            if self.event_stream.poll(config::POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.process_event(event)?;
            } else if self.event_stream.is_exhausted() {
                tracing::debug!("event stream exhausted");
                break;
            }
        }
        Ok(())
    }

    /// Handle one terminal event: map it to command events, apply them, render
    pub fn process_event(&mut self, event: Event) -> Result<()> {
        let context = CommandContext::from_view_model(&self.view_model);
        let events = match event {
            Event::Key(key_event) => {
                tracing::debug!("Received key event: {:?}", key_event);
                self.command_registry.process_event(key_event, &context)?
            }
            Event::Mouse(mouse_event) => self
                .command_registry
                .process_mouse_event(mouse_event, &context)?,
            Event::Resize(width, height) => {
                vec![CommandEvent::TerminalResizeRequested { width, height }]
            }
            _ => Vec::new(),
        };

        if events.is_empty() {
            return Ok(());
        }
        tracing::debug!("Command events generated: {:?}", events);

        for event in events {
            self.apply_command_event(event);
        }

        // Nothing left to draw once quitting
        if !self.should_quit {
            let view_events = self.view_model.collect_pending_view_events();
            self.process_view_events(view_events)?;
        }
        Ok(())
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::TapReset => {
                self.view_model.tap_reset();
            }
            CommandEvent::TapSubtract => {
                self.view_model.tap_subtract();
            }
            CommandEvent::TapSplitToggle => {
                self.view_model.tap_split_toggle();
            }
            CommandEvent::TapIncrementRegion => {
                self.view_model.tap_increment_region();
            }
            CommandEvent::TapDecrementRegion => {
                self.view_model.tap_decrement_region();
            }
            CommandEvent::SubmitResetValue { text } => {
                self.view_model.submit_reset_value(&text);
            }
            CommandEvent::CancelResetDialog => self.view_model.cancel_reset_dialog(),
            CommandEvent::ResetInputChar { ch } => self.view_model.add_reset_input_char(ch),
            CommandEvent::ResetInputBackspace => self.view_model.backspace_reset_input(),
            CommandEvent::TerminalResizeRequested { width, height } => {
                self.view_renderer.update_size(width, height);
                self.view_model.update_terminal_size(width, height);
            }
            CommandEvent::QuitRequested => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
            CommandEvent::NoAction => {}
        }
    }

    /// Process view events for selective rendering instead of always doing full redraws
    fn process_view_events(&mut self, view_events: Vec<ViewEvent>) -> Result<()> {
        // Group events to avoid redundant renders
        let mut needs_full_redraw = false;
        let mut needs_tap_area = false;
        let mut needs_display = false;
        let mut needs_status_bar = false;

        for event in view_events {
            match event {
                ViewEvent::FullRedrawRequired => {
                    needs_full_redraw = true;
                    // Full redraw overrides all other events
                    break;
                }
                ViewEvent::TapAreaRedrawRequired => needs_tap_area = true,
                ViewEvent::DisplayRedrawRequired => needs_display = true,
                ViewEvent::StatusBarUpdateRequired => needs_status_bar = true,
            }
        }

        if needs_full_redraw {
            return self.view_renderer.render_full(&self.view_model);
        }
        if needs_tap_area {
            self.view_renderer.render_tap_area(&self.view_model)?;
        } else if needs_display {
            self.view_renderer.render_display(&self.view_model)?;
        }
        // Last, so an open prompt leaves the cursor on the bottom line
        if needs_status_bar {
            self.view_renderer.render_status_bar(&self.view_model)?;
        }
        Ok(())
    }

    /// Get reference to view model (for testing)
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// Get the render stream (for testing)
    pub fn render_stream(&self) -> &RS {
        self.view_renderer.render_stream()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
