//! Layout and drawing of the gauge.
//!
//! Everything that depends on the canvas size is computed up front into a
//! [`RenderPlan`], which is then replayed onto a [`Canvas`]. Keeping the plan
//! free of side effects lets the geometry be tested without a buffer.

use std::borrow::Cow;

use itertools::Itertools;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::canvas::{truncate, Canvas, Overrun};

use super::{
    border,
    error::GaugeError,
    options::{GaugeOptions, HorizontalAlign, VerticalAlign},
    size::{self, Size},
    Progress,
};

/// Everything a single redraw will put on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// The full canvas area
    pub area: Rect,
    /// The area inside the border
    pub interior: Rect,
    /// The filled part of the interior, `None` at 0%
    pub fill: Option<Rect>,
    /// The progress text after placement and truncation
    pub text: Option<PlacedText>,
}

/// Text positioned on a single row of the interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedText {
    pub text: String,
    pub x: u16,
    pub y: u16,
    /// First column right of the filled region
    pub boundary: u16,
}

impl PlacedText {
    /// Splits the text into the runs to draw in `filled` and `empty` color.
    pub fn runs(&self, filled: Color, empty: Color) -> Vec<TextRun<'_>> {
        color_runs(&self.text, self.x, self.boundary, filled, empty)
    }
}

/// A contiguous part of the text drawn in one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun<'a> {
    pub x: u16,
    pub text: &'a str,
    pub color: Color,
}

impl RenderPlan {
    /// Lays out `progress` on a canvas covering `area`.
    pub fn new(progress: Progress, options: &GaugeOptions, area: Rect) -> Result<Self, GaugeError> {
        let min = size::widget_options(options).minimum_size;
        let got = Size::from(area);
        if !got.fits(min) {
            return Err(GaugeError::Size { got, min });
        }

        let interior = border::interior(area, &options.border);
        let filled = fill_width(interior.width, progress.percent());
        let fill = (filled > 0).then(|| Rect { width: filled, ..interior });
        let text = compose_text(progress, options).and_then(|text| {
            place_text(
                &text,
                interior,
                options.horizontal_text_align,
                options.vertical_text_align,
            )
            .map(|(shown, x, y)| PlacedText {
                text: shown,
                x,
                y,
                boundary: interior.x + filled,
            })
        });

        Ok(Self {
            area,
            interior,
            fill,
            text,
        })
    }

    /// Issues the draw requests: border, then fill, then the text runs.
    pub fn draw(&self, canvas: &mut dyn Canvas, options: &GaugeOptions) -> Result<(), GaugeError> {
        border::draw(canvas, self.area, &options.border)?;

        if let Some(fill) = self.fill {
            canvas.fill(fill, options.fill_char, Style::default().bg(options.fill_color))?;
        }

        if let Some(text) = &self.text {
            for run in text.runs(options.filled_text_color, options.empty_text_color) {
                canvas.text(run.x, text.y, run.text, Style::default().fg(run.color))?;
            }
        }
        Ok(())
    }
}

/// Number of interior columns covered at `percent`, rounded down.
pub fn fill_width(interior_width: u16, percent: u8) -> u16 {
    let percent = u32::from(percent.min(100));
    // Never larger than interior_width, so the conversion back cannot fail.
    u16::try_from(u32::from(interior_width) * percent / 100).unwrap_or(interior_width)
}

/// Builds `35%`, `20/100`, `35% (label)` or `(label)`; `None` when there is nothing to show.
pub fn compose_text(progress: Progress, options: &GaugeOptions) -> Option<String> {
    let progress = (!options.hide_text_progress).then(|| match progress {
        Progress::Percent(p) => format!("{p}%"),
        Progress::Absolute { done, total } => format!("{done}/{total}"),
    });
    let label = options
        .text_label
        .as_ref()
        .map(|label| format!("({})", printable(label)));

    let text = [progress, label].into_iter().flatten().join(" ");
    (!text.is_empty()).then_some(text)
}

/// Replaces control characters, which occupy no predictable number of cells, with spaces.
fn printable(label: &str) -> Cow<'_, str> {
    if label.chars().any(char::is_control) {
        Cow::Owned(
            label
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(label)
    }
}

/// Positions `text` inside `interior` and cuts it at the right edge.
///
/// Returns the visible text with its column and row, or `None` if not even
/// the truncation marker fits.
pub fn place_text(
    text: &str,
    interior: Rect,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
) -> Option<(String, u16, u16)> {
    if interior.width == 0 || interior.height == 0 {
        return None;
    }

    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let x = match horizontal {
        HorizontalAlign::Left => interior.left(),
        HorizontalAlign::Center => interior.left() + interior.width.saturating_sub(width) / 2,
        HorizontalAlign::Right => interior.right().saturating_sub(width).max(interior.left()),
    };
    let y = match vertical {
        VerticalAlign::Top => interior.top(),
        VerticalAlign::Middle => interior.top() + (interior.height - 1) / 2,
        VerticalAlign::Bottom => interior.bottom() - 1,
    };

    let room = usize::from(interior.right() - x);
    let shown = truncate(text, room, Overrun::ThreeDot);
    (!shown.is_empty()).then(|| (shown.into_owned(), x, y))
}

/// Splits `text` starting at column `start` where it crosses column `boundary`.
///
/// Cells left of the boundary get `filled`, the rest `empty`. The result holds
/// one run when the text lies entirely on one side, two otherwise.
pub fn color_runs(
    text: &str,
    start: u16,
    boundary: u16,
    filled: Color,
    empty: Color,
) -> Vec<TextRun<'_>> {
    let mut column = start;
    let split = text
        .char_indices()
        .find_map(|(idx, c)| {
            if column >= boundary {
                return Some(idx);
            }
            column = column.saturating_add(c.width().unwrap_or(0) as u16);
            None
        })
        .unwrap_or(text.len());

    let (inside, outside) = text.split_at(split);
    let mut runs = Vec::with_capacity(2);
    if !inside.is_empty() {
        runs.push(TextRun {
            x: start,
            text: inside,
            color: filled,
        });
    }
    if !outside.is_empty() {
        runs.push(TextRun {
            x: start.saturating_add(inside.width() as u16),
            text: outside,
            color: empty,
        });
    }
    runs
}
