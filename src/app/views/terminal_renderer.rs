//! # Terminal Renderer
//!
//! Draws the counter screen onto a `RenderStream`: button bar, separator,
//! tap area with the digit box, and the status bar or reset prompt.

use crate::app::events::ViewEvent;
use crate::app::geometry::{Button, Rect, ScreenLayout, CELL_WIDTH, DISPLAY_BOX_HEIGHT};
use crate::app::io::RenderStream;
use crate::app::models::{PROMPT_PLACEHOLDER, PROMPT_TITLE};
use crate::app::view_models::ViewModel;
use crate::config;
use anyhow::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! execute_term {
    ($($arg:expr),* $(,)?) => {
        execute!($($arg),*).map_err(anyhow::Error::from)
    };
}

use crossterm::{
    cursor::{Hide, MoveTo, SetCursorStyle, Show},
    execute,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
};

/// Background of the digit cells
const DISPLAY_BACKGROUND: Color = Color::Rgb {
    r: 51,
    g: 87,
    b: 179,
};

/// Background of the decrement half in Split mode
const DECREMENT_SHADE: Color = Color::Rgb {
    r: 38,
    g: 38,
    b: 38,
};

const KEY_HINT: &str = "r reset  s subtract  t split  q quit";

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the terminal: raw mode, alternate screen, mouse capture
    fn initialize(&mut self) -> Result<()>;

    /// Render the full application state
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the tap area, including split shading and the digit box
    fn render_tap_area(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render only the digit box
    fn render_display(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render status bar, or the reset prompt while it is open
    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Handle view events
    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Terminal-based view renderer using crossterm
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer that owns `render_stream`
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    /// Update terminal size
    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Get current terminal size
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    pub fn render_stream_mut(&mut self) -> &mut RS {
        &mut self.render_stream
    }

    fn render_button_bar(&mut self, layout: &ScreenLayout) -> Result<()> {
        if layout.height() == 0 {
            return Ok(());
        }
        for button in Button::ALL {
            let rect = layout.button_rect(button);
            if rect.is_empty() {
                continue;
            }
            let label = center(button.label(), usize::from(rect.width));
            execute_term!(
                self.render_stream,
                MoveTo(rect.x, rect.y),
                SetAttribute(Attribute::Bold),
                Print(label),
                SetAttribute(Attribute::Reset)
            )?;
            if rect.x > 0 {
                execute_term!(
                    self.render_stream,
                    MoveTo(rect.x, rect.y),
                    SetForegroundColor(Color::DarkGrey),
                    Print('│'),
                    ResetColor
                )?;
            }
        }
        Ok(())
    }

    fn render_separator(&mut self, layout: &ScreenLayout) -> Result<()> {
        if layout.height() <= ScreenLayout::SEPARATOR_ROW {
            return Ok(());
        }
        execute_term!(
            self.render_stream,
            MoveTo(0, ScreenLayout::SEPARATOR_ROW),
            SetForegroundColor(Color::DarkGrey),
            Print("─".repeat(usize::from(layout.width()))),
            ResetColor
        )?;
        Ok(())
    }

    /// Paint `rect` with spaces, optionally on a background color
    fn fill(&mut self, rect: Rect, background: Option<Color>) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        let blank = " ".repeat(usize::from(rect.width));
        if let Some(color) = background {
            execute_term!(self.render_stream, SetBackgroundColor(color))?;
        }
        for row in rect.y..=rect.bottom() {
            execute_term!(self.render_stream, MoveTo(rect.x, row), Print(&blank))?;
        }
        execute_term!(self.render_stream, ResetColor)?;
        Ok(())
    }

    fn render_split_markers(&mut self, layout: &ScreenLayout) -> Result<()> {
        let (left, right) = layout.split_halves();
        if !left.is_empty() {
            execute_term!(
                self.render_stream,
                MoveTo(left.right(), left.bottom()),
                SetBackgroundColor(DECREMENT_SHADE),
                SetAttribute(Attribute::Bold),
                Print('−'),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        if !right.is_empty() {
            execute_term!(
                self.render_stream,
                MoveTo(right.x, right.bottom()),
                SetAttribute(Attribute::Bold),
                Print('+'),
                SetAttribute(Attribute::Reset)
            )?;
        }
        Ok(())
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.enable_mouse_capture()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;
        Ok(())
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        // Hide cursor before screen refresh to avoid flickering
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;

        let layout = *view_model.layout();
        self.render_button_bar(&layout)?;
        self.render_separator(&layout)?;
        self.render_tap_area(view_model)?;
        self.render_status_bar(view_model)?;
        Ok(())
    }

    fn render_tap_area(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = *view_model.layout();
        if view_model.is_split_mode() {
            let (left, right) = layout.split_halves();
            self.fill(left, Some(DECREMENT_SHADE))?;
            self.fill(right, None)?;
            self.render_split_markers(&layout)?;
        } else {
            self.fill(layout.tap_area(), None)?;
        }
        self.render_display(view_model)
    }

    fn render_display(&mut self, view_model: &ViewModel) -> Result<()> {
        let digits: Vec<char> = view_model.formatted_display().chars().collect();
        let rect = view_model.layout().display_box(digits.len());
        if rect.is_empty() {
            return Ok(());
        }

        let width = usize::from(rect.width);
        let [top, middle, bottom] = display_box_lines(&digits);
        let rows: Vec<(u16, String)> = if rect.height >= DISPLAY_BOX_HEIGHT {
            vec![(rect.y, top), (rect.y + 1, middle), (rect.y + 2, bottom)]
        } else {
            vec![(rect.y, middle)]
        };

        execute_term!(
            self.render_stream,
            SetBackgroundColor(DISPLAY_BACKGROUND),
            SetForegroundColor(Color::White),
            SetAttribute(Attribute::Bold)
        )?;
        for (row, line) in rows {
            execute_term!(
                self.render_stream,
                MoveTo(rect.x, row),
                Print(fit(&line, width))
            )?;
        }
        execute_term!(
            self.render_stream,
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = *view_model.layout();
        if layout.height() == 0 || layout.width() == 0 {
            return Ok(());
        }
        let status_row = layout.status_row();
        let width = usize::from(layout.width());

        // Clear the status bar first
        execute_term!(
            self.render_stream,
            MoveTo(0, status_row),
            Print(" ".repeat(width))
        )?;

        if let Some(prompt) = view_model.reset_prompt() {
            let prefix = format!(
                "{PROMPT_TITLE} ({}~{}): ",
                config::MIN_VALUE,
                config::MAX_VALUE
            );
            execute_term!(
                self.render_stream,
                MoveTo(0, status_row),
                Print(fit(&prefix, width))
            )?;
            if prompt.is_empty() {
                let room = width.saturating_sub(prefix.width());
                execute_term!(
                    self.render_stream,
                    SetForegroundColor(Color::DarkGrey),
                    Print(fit(PROMPT_PLACEHOLDER, room)),
                    ResetColor
                )?;
            } else {
                let room = width.saturating_sub(prefix.width());
                execute_term!(self.render_stream, Print(fit(prompt.input(), room)))?;
            }

            // Show I-beam cursor at the end of the typed text
            let cursor_col = (prefix.width() + prompt.display_width()).min(width - 1);
            let cursor_col = u16::try_from(cursor_col).unwrap_or(u16::MAX);
            execute_term!(
                self.render_stream,
                MoveTo(cursor_col, status_row),
                SetCursorStyle::BlinkingBar,
                Show
            )?;
        } else {
            let glyph = view_model
                .last_feedback()
                .map(|kind| kind.glyph())
                .unwrap_or(' ');
            let mode_text = format!(" {} ", view_model.mode().label());
            execute_term!(
                self.render_stream,
                Hide,
                MoveTo(0, status_row),
                SetAttribute(Attribute::Reverse),
                Print(fit(&mode_text, width)),
                SetAttribute(Attribute::Reset)
            )?;

            let used = mode_text.width();
            if used + 2 <= width {
                execute_term!(self.render_stream, Print(format!(" {glyph}")))?;
            }

            let hint_width = KEY_HINT.width();
            if used + 2 + hint_width + 1 <= width {
                let hint_col = u16::try_from(width - hint_width - 1).unwrap_or(0);
                execute_term!(
                    self.render_stream,
                    MoveTo(hint_col, status_row),
                    SetForegroundColor(Color::DarkGrey),
                    Print(KEY_HINT),
                    ResetColor
                )?;
            }
        }
        Ok(())
    }

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => self.render_full(view_model),
            ViewEvent::TapAreaRedrawRequired => self.render_tap_area(view_model),
            ViewEvent::DisplayRedrawRequired => self.render_display(view_model),
            ViewEvent::StatusBarUpdateRequired => self.render_status_bar(view_model),
        }
    }

    fn cleanup(&mut self) -> Result<()> {
        // Every step runs even if an earlier one fails; the first error wins
        let steps = [
            self.render_stream.disable_mouse_capture(),
            execute_term!(self.render_stream, SetCursorStyle::DefaultUserShape),
            self.render_stream.show_cursor(),
            self.render_stream.leave_alternate_screen(),
            self.render_stream.disable_raw_mode(),
        ];
        steps.into_iter().collect::<Result<Vec<()>>>()?;
        Ok(())
    }
}

/// Box-drawing rows for `digits`, one cell per character
fn display_box_lines(digits: &[char]) -> [String; 3] {
    let bar = "─".repeat(usize::from(CELL_WIDTH));
    let cells = digits.len().max(1);
    let join = |left: char, middle: char, right: char| {
        let mut line = String::new();
        line.push(left);
        let separator = middle.to_string();
        line.push_str(&vec![bar.as_str(); cells].join(separator.as_str()));
        line.push(right);
        line
    };

    let mut middle = String::from("│");
    for digit in digits {
        middle.push_str(&center(&digit.to_string(), usize::from(CELL_WIDTH)));
        middle.push('│');
    }

    [join('┌', '┬', '┐'), middle, join('└', '┴', '┘')]
}

/// Center `text` in `width` columns, truncating if it does not fit
fn center(text: &str, width: usize) -> String {
    let text = fit(text, width);
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

/// Longest prefix of `text` no wider than `width` columns
fn fit(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::io::{MockRenderStream, RenderCommand};

    fn renderer() -> TerminalRenderer<MockRenderStream> {
        TerminalRenderer::with_render_stream(MockRenderStream::new()).unwrap()
    }

    #[test]
    fn renderer_should_take_size_from_stream() {
        let renderer =
            TerminalRenderer::with_render_stream(MockRenderStream::with_size((100, 30))).unwrap();
        assert_eq!(renderer.terminal_size(), (100, 30));
    }

    #[test]
    fn initialize_and_cleanup_should_set_up_and_restore_terminal() {
        let mut renderer = renderer();

        renderer.initialize().unwrap();
        let stream = renderer.render_stream();
        assert!(stream.is_raw_mode());
        assert!(stream.is_alternate_screen());
        assert!(stream.is_mouse_capture());
        assert!(!stream.is_cursor_visible());

        renderer.cleanup().unwrap();
        let stream = renderer.render_stream();
        assert!(!stream.is_raw_mode());
        assert!(!stream.is_alternate_screen());
        assert!(!stream.is_mouse_capture());
        assert!(stream.is_cursor_visible());
    }

    #[test]
    fn render_full_should_draw_buttons_digits_and_status() {
        let mut renderer = renderer();
        let view_model = ViewModel::new();

        renderer.render_full(&view_model).unwrap();
        let text = renderer.render_stream().get_plain_text();

        assert!(renderer
            .render_stream()
            .has_command(&RenderCommand::ClearScreen));
        for label in ["Reset", "Subtract", "Split"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("│  1  │  2  │  3  │  4  │"));
        assert!(text.contains("┌─────┬─────┬─────┬─────┐"));
        assert!(text.contains(" DEFAULT "));
        assert!(text.contains(KEY_HINT));
    }

    #[test]
    fn split_mode_should_draw_markers_and_mode_label() {
        let mut renderer = renderer();
        let mut view_model = ViewModel::new();
        view_model.tap_split_toggle();

        renderer.render_full(&view_model).unwrap();
        let text = renderer.render_stream().get_plain_text();

        assert!(text.contains('−'));
        assert!(text.contains('+'));
        assert!(text.contains(" SPLIT "));
    }

    #[test]
    fn status_bar_should_show_last_feedback_glyph() {
        let mut renderer = renderer();
        let mut view_model = ViewModel::new();
        view_model.tap_subtract();

        renderer.render_status_bar(&view_model).unwrap();
        assert!(renderer.render_stream().get_plain_text().contains('▼'));
    }

    #[test]
    fn open_prompt_should_replace_status_bar() {
        let mut renderer = renderer();
        let mut view_model = ViewModel::new();
        view_model.tap_reset();

        renderer.render_status_bar(&view_model).unwrap();
        let text = renderer.render_stream().get_plain_text();
        assert!(text.contains("Set Value (0~9999): "));
        assert!(text.contains(PROMPT_PLACEHOLDER));

        view_model.add_reset_input_char('4');
        view_model.add_reset_input_char('2');
        renderer.render_stream_mut().clear_screen().unwrap();
        renderer.render_status_bar(&view_model).unwrap();
        let text = renderer.render_stream().get_plain_text();
        assert!(text.contains("Set Value (0~9999): 42"));
        assert!(!text.contains(PROMPT_PLACEHOLDER));
    }

    #[test]
    fn wide_values_should_get_one_cell_per_character() {
        let lines = display_box_lines(&['-', '0', '0', '5']);
        assert_eq!(lines[1], "│  -  │  0  │  0  │  5  │");

        let lines = display_box_lines(&"123456".chars().collect::<Vec<_>>());
        assert_eq!(lines[0].chars().count(), 6 * 6 + 1);
    }

    #[test]
    fn tiny_terminal_should_render_without_panicking() {
        let mut renderer =
            TerminalRenderer::with_render_stream(MockRenderStream::with_size((3, 2))).unwrap();
        let mut view_model = ViewModel::new();
        view_model.update_terminal_size(3, 2);
        view_model.tap_reset();

        renderer.render_full(&view_model).unwrap();

        let mut empty = ViewModel::new();
        empty.update_terminal_size(0, 0);
        renderer.render_full(&empty).unwrap();
    }

    #[test]
    fn fit_and_center_should_respect_width() {
        assert_eq!(fit("Subtract", 3), "Sub");
        assert_eq!(fit("日本", 3), "日");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
    }
}
