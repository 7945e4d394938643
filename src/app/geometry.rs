//! # Screen Geometry
//!
//! Where everything sits on the terminal, and which hotspot a tap lands on.
//!
//! ```text
//! row 0        │   Reset   │ Subtract  │   Split   │   button bar
//! row 1        ─────────────────────────────────────   separator
//! rows 2..h-1  tap area, digit box centered            (split at width/2)
//! row h-1      status bar / reset prompt
//! ```

use crate::app::events::DisplayMode;

/// Columns per digit cell, excluding the divider
pub const CELL_WIDTH: u16 = 5;

/// Rows of the digit box (top border, digits, bottom border)
pub const DISPLAY_BOX_HEIGHT: u16 = 3;

/// A rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && u32::from(col) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Last column inside the rectangle
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width).saturating_sub(1)
    }

    /// Last row inside the rectangle
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height).saturating_sub(1)
    }
}

/// Buttons in the bar above the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Reset,
    Subtract,
    Split,
}

impl Button {
    /// Left-to-right order in the bar
    pub const ALL: [Button; 3] = [Button::Reset, Button::Subtract, Button::Split];

    pub fn label(self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::Subtract => "Subtract",
            Self::Split => "Split",
        }
    }

    fn slot(self) -> u16 {
        match self {
            Self::Reset => 0,
            Self::Subtract => 1,
            Self::Split => 2,
        }
    }
}

/// What a tap at some cell means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hotspot {
    Button(Button),
    IncrementRegion,
    DecrementRegion,
}

/// Layout for one terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    width: u16,
    height: u16,
}

impl ScreenLayout {
    pub const BUTTON_ROW: u16 = 0;
    pub const SEPARATOR_ROW: u16 = 1;
    const TAP_AREA_TOP: u16 = 2;

    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Slot of `button` in the bar; the last slot takes the remainder
    pub fn button_rect(&self, button: Button) -> Rect {
        let slot_width = self.width / 3;
        let x = slot_width * button.slot();
        let width = match button {
            Button::Split => self.width.saturating_sub(x),
            _ => slot_width,
        };
        Rect::new(x, Self::BUTTON_ROW, width, self.height.min(1))
    }

    /// Everything between the separator and the status bar
    pub fn tap_area(&self) -> Rect {
        let height = self.height.saturating_sub(Self::TAP_AREA_TOP + 1);
        Rect::new(0, Self::TAP_AREA_TOP, self.width, height)
    }

    /// Left (decrement) and right (increment) halves of the tap area
    pub fn split_halves(&self) -> (Rect, Rect) {
        let area = self.tap_area();
        let left_width = area.width / 2;
        (
            Rect::new(area.x, area.y, left_width, area.height),
            Rect::new(
                area.x + left_width,
                area.y,
                area.width - left_width,
                area.height,
            ),
        )
    }

    /// Digit box holding `cells` digit cells, centered in the tap area
    pub fn display_box(&self, cells: usize) -> Rect {
        let cells = u16::try_from(cells).unwrap_or(u16::MAX / (CELL_WIDTH + 1));
        let box_width = cells.saturating_mul(CELL_WIDTH + 1).saturating_add(1);
        let area = self.tap_area();
        let x = area.x + area.width.saturating_sub(box_width) / 2;
        let y = area.y + area.height.saturating_sub(DISPLAY_BOX_HEIGHT) / 2;
        Rect::new(
            x,
            y,
            box_width.min(area.width),
            DISPLAY_BOX_HEIGHT.min(area.height),
        )
    }

    pub fn status_row(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    /// Map a tap at (`col`, `row`) to a hotspot under `mode`
    pub fn hotspot_at(&self, col: u16, row: u16, mode: DisplayMode) -> Option<Hotspot> {
        if let Some(button) = Button::ALL
            .into_iter()
            .find(|button| self.button_rect(*button).contains(col, row))
        {
            return Some(Hotspot::Button(button));
        }

        if !self.tap_area().contains(col, row) {
            return None;
        }

        match mode {
            DisplayMode::Default => Some(Hotspot::IncrementRegion),
            DisplayMode::Split => {
                let (left, _) = self.split_halves();
                if left.contains(col, row) {
                    Some(Hotspot::DecrementRegion)
                } else {
                    Some(Hotspot::IncrementRegion)
                }
            }
        }
    }
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
