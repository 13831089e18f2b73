//! Gauge configuration.
//!
//! Options are plain setters over a [`GaugeOptions`] record. A gauge keeps the
//! record resolved from its construction options and every update call patches
//! a copy of that record with its own options, so an update only changes the
//! fields it names.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// Glyph used for the filled region when no usable glyph was configured.
pub const DEFAULT_FILL_CHAR: char = ' ';

/// Background of the filled region.
pub const DEFAULT_FILL_COLOR: Color = Color::Green;

/// Color of text drawn over the filled region.
pub const DEFAULT_FILLED_TEXT_COLOR: Color = Color::Black;

/// Color of text drawn outside the filled region (the terminal default).
pub const DEFAULT_EMPTY_TEXT_COLOR: Color = Color::Reset;

/// Line style of the optional border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Light,
    Double,
    Round,
    Heavy,
}

/// Horizontal placement of text within the gauge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical placement of text within the gauge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Border settings. The border is drawn only when a line style is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderOptions {
    pub line_style: Option<LineStyle>,
    /// Foreground override for the border lines and the title.
    pub color: Option<Color>,
    pub title: Option<String>,
    pub title_align: HorizontalAlign,
}

impl BorderOptions {
    /// Whether a border will be drawn.
    pub fn is_enabled(&self) -> bool {
        self.line_style.is_some()
    }

    /// Number of cells the border takes on each side.
    pub fn thickness(&self) -> u16 {
        if self.is_enabled() {
            1
        } else {
            0
        }
    }
}

/// Fully resolved gauge configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeOptions {
    /// Glyph painted over the filled region
    pub fill_char: char,
    /// Background of the filled region
    pub fill_color: Color,
    pub border: BorderOptions,
    /// Suppresses the `35%` / `20/100` portion of the text
    pub hide_text_progress: bool,
    /// Shown as `(label)` after the progress text
    pub text_label: Option<String>,
    pub horizontal_text_align: HorizontalAlign,
    pub vertical_text_align: VerticalAlign,
    /// Text color outside the filled region
    pub empty_text_color: Color,
    /// Text color inside the filled region
    pub filled_text_color: Color,
    /// Caps the height of the gauge, not counting the border
    pub height: Option<u16>,
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            fill_char: DEFAULT_FILL_CHAR,
            fill_color: DEFAULT_FILL_COLOR,
            border: BorderOptions::default(),
            hide_text_progress: false,
            text_label: None,
            horizontal_text_align: HorizontalAlign::default(),
            vertical_text_align: VerticalAlign::default(),
            empty_text_color: DEFAULT_EMPTY_TEXT_COLOR,
            filled_text_color: DEFAULT_FILLED_TEXT_COLOR,
            height: None,
        }
    }
}

impl GaugeOptions {
    /// Builds a record from the defaults patched with `options`.
    pub fn new<'a>(options: impl IntoIterator<Item = &'a GaugeOption>) -> Self {
        Self::default().resolve(options)
    }

    /// Returns a copy of this record patched with `overrides`.
    ///
    /// Later options win over earlier ones, fields not named by any override
    /// keep their current value.
    pub fn resolve<'a>(&self, overrides: impl IntoIterator<Item = &'a GaugeOption>) -> Self {
        let mut resolved = self.clone();
        for option in overrides {
            option.apply(&mut resolved);
        }
        resolved
    }
}

/// A single gauge setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "option", content = "value", rename_all = "snake_case")]
pub enum GaugeOption {
    /// Glyph used for the filled region. Control and zero or double width
    /// characters fall back to [`DEFAULT_FILL_CHAR`].
    FillChar(char),
    FillColor(Color),
    /// Draws a border around the gauge.
    Border(LineStyle),
    BorderColor(Color),
    BorderTitle(String),
    BorderTitleAlign(HorizontalAlign),
    HideTextProgress,
    ShowTextProgress,
    TextLabel(String),
    HorizontalTextAlign(HorizontalAlign),
    VerticalTextAlign(VerticalAlign),
    EmptyTextColor(Color),
    FilledTextColor(Color),
    /// Fixes the gauge height, not counting the border.
    Height(u16),
}

impl GaugeOption {
    /// Writes this setting into `options`.
    pub fn apply(&self, options: &mut GaugeOptions) {
        match self {
            GaugeOption::FillChar(c) => options.fill_char = fill_char_or_default(*c),
            GaugeOption::FillColor(color) => options.fill_color = *color,
            GaugeOption::Border(style) => options.border.line_style = Some(*style),
            GaugeOption::BorderColor(color) => options.border.color = Some(*color),
            GaugeOption::BorderTitle(title) => options.border.title = Some(title.clone()),
            GaugeOption::BorderTitleAlign(align) => options.border.title_align = *align,
            GaugeOption::HideTextProgress => options.hide_text_progress = true,
            GaugeOption::ShowTextProgress => options.hide_text_progress = false,
            GaugeOption::TextLabel(label) => options.text_label = Some(label.clone()),
            GaugeOption::HorizontalTextAlign(align) => options.horizontal_text_align = *align,
            GaugeOption::VerticalTextAlign(align) => options.vertical_text_align = *align,
            GaugeOption::EmptyTextColor(color) => options.empty_text_color = *color,
            GaugeOption::FilledTextColor(color) => options.filled_text_color = *color,
            GaugeOption::Height(height) => options.height = Some(*height),
        }
    }
}

/// Only glyphs occupying exactly one cell can tile the fill rectangle.
fn fill_char_or_default(c: char) -> char {
    match c.width() {
        Some(1) => c,
        _ => DEFAULT_FILL_CHAR,
    }
}
