//! Size requirements of the gauge.

use std::fmt;

use ratatui::layout::Rect;

use super::options::GaugeOptions;

/// A width and height in cells. Zero in a maximum size means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether an area of this size can hold `min` in both dimensions.
    pub fn fits(&self, min: Size) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}

impl From<Rect> for Size {
    fn from(rect: Rect) -> Self {
        Self::new(rect.width, rect.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What the gauge asks of the layout that hosts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetOptions {
    pub minimum_size: Size,
    pub maximum_size: Size,
    pub wants_keyboard: bool,
    pub wants_mouse: bool,
}

/// Size requirements derived from the border and the fixed height.
pub fn widget_options(options: &GaugeOptions) -> WidgetOptions {
    let border = options.border.thickness() * 2;
    let max_height = match options.height {
        Some(height) => height.saturating_add(border),
        None => 0,
    };

    WidgetOptions {
        minimum_size: Size::new(1 + border, 1 + border),
        maximum_size: Size::new(0, max_height),
        wants_keyboard: false,
        wants_mouse: false,
    }
}
