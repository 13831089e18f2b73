//! Drawing surface for widgets.
//!
//! Widgets describe their output as a short list of primitive requests: fill a
//! rectangle, draw a border, put a line of text. [`BufferCanvas`] carries those
//! requests out on a region of a ratatui [`Buffer`]. Requests that leave the
//! region are rejected instead of being clipped silently.

use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use thiserror::Error;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::widgets::gauge::{HorizontalAlign, LineStyle};

/// Glyph substituted for text cut off by [`Overrun::ThreeDot`].
pub const ELLIPSIS: char = '…';

/// A draw request the canvas cannot carry out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("{what} at {rect:?} falls outside the canvas area {area:?}")]
    OutOfBounds {
        what: &'static str,
        rect: Rect,
        area: Rect,
    },

    #[error("area {requested:?} is not inside the buffer area {buffer:?}")]
    InvalidArea { requested: Rect, buffer: Rect },
}

/// What happens to text that is wider than the space it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overrun {
    /// Cut at the last cell.
    Trim,
    /// Cut one cell early and end with [`ELLIPSIS`].
    ThreeDot,
}

/// Title shown on the top edge of a border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderTitle {
    pub text: String,
    pub align: HorizontalAlign,
    pub overrun: Overrun,
}

/// A request to draw a border along the edges of a rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderRequest {
    pub line_style: LineStyle,
    /// Foreground of the lines and the title, the cells keep theirs if unset.
    pub color: Option<Color>,
    pub title: Option<BorderTitle>,
}

/// Primitive drawing operations used by the widgets in this crate.
///
/// All coordinates are absolute cell positions and must lie within
/// [`Canvas::area`].
#[cfg_attr(test, mockall::automock)]
pub trait Canvas {
    /// The region this canvas may draw into.
    fn area(&self) -> Rect;

    /// Paints every cell of `rect` with `symbol`, patching the cell style with `style`.
    fn fill(&mut self, rect: Rect, symbol: char, style: Style) -> Result<(), CanvasError>;

    /// Draws a border on the outermost cells of `rect`.
    fn border(&mut self, rect: Rect, request: &BorderRequest) -> Result<(), CanvasError>;

    /// Writes one line of text starting at column `x` of row `y`.
    fn text(&mut self, x: u16, y: u16, text: &str, style: Style) -> Result<(), CanvasError>;
}

/// [`Canvas`] over a region of a ratatui [`Buffer`].
pub struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferCanvas<'a> {
    /// A canvas covering the whole buffer.
    pub fn new(buf: &'a mut Buffer) -> Self {
        let area = buf.area;
        Self { buf, area }
    }

    /// A canvas limited to `area`, which must lie inside the buffer.
    pub fn with_area(buf: &'a mut Buffer, area: Rect) -> Result<Self, CanvasError> {
        if !contains(buf.area, area) {
            return Err(CanvasError::InvalidArea {
                requested: area,
                buffer: buf.area,
            });
        }
        Ok(Self { buf, area })
    }

    fn check(&self, what: &'static str, rect: Rect) -> Result<(), CanvasError> {
        if contains(self.area, rect) {
            Ok(())
        } else {
            Err(CanvasError::OutOfBounds {
                what,
                rect,
                area: self.area,
            })
        }
    }
}

impl Canvas for BufferCanvas<'_> {
    fn area(&self) -> Rect {
        self.area
    }

    fn fill(&mut self, rect: Rect, symbol: char, style: Style) -> Result<(), CanvasError> {
        self.check("rectangle", rect)?;
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                self.buf.get_mut(x, y).set_char(symbol).set_style(style);
            }
        }
        Ok(())
    }

    fn border(&mut self, rect: Rect, request: &BorderRequest) -> Result<(), CanvasError> {
        self.check("border", rect)?;

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type(request.line_style));
        if let Some(color) = request.color {
            block = block
                .border_style(Style::default().fg(color))
                .title_style(Style::default().fg(color));
        }
        if let Some(title) = &request.title {
            // The title sits between the two corners.
            let room = usize::from(rect.width.saturating_sub(2));
            let text = truncate(&title.text, room, title.overrun);
            if !text.is_empty() {
                block = block
                    .title(text.into_owned())
                    .title_alignment(alignment(title.align));
            }
        }
        block.render(rect, self.buf);
        Ok(())
    }

    fn text(&mut self, x: u16, y: u16, text: &str, style: Style) -> Result<(), CanvasError> {
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        self.check("text", Rect::new(x, y, width, 1))?;
        self.buf.set_stringn(x, y, text, usize::from(width), style);
        Ok(())
    }
}

/// Shortens `text` to at most `width` cells according to `overrun`.
pub fn truncate(text: &str, width: usize, overrun: Overrun) -> Cow<'_, str> {
    if text.width() <= width {
        return Cow::Borrowed(text);
    }

    let room = match overrun {
        Overrun::Trim => width,
        Overrun::ThreeDot if width == 0 => return Cow::Borrowed(""),
        Overrun::ThreeDot => width - 1,
    };

    let mut used = 0;
    let mut out: String = text
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= room
        })
        .collect();
    if overrun == Overrun::ThreeDot {
        out.push(ELLIPSIS);
    }
    Cow::Owned(out)
}

fn contains(outer: Rect, inner: Rect) -> bool {
    inner.left() >= outer.left()
        && inner.top() >= outer.top()
        && inner.right() <= outer.right()
        && inner.bottom() <= outer.bottom()
}

fn border_type(style: LineStyle) -> BorderType {
    match style {
        LineStyle::Light => BorderType::Plain,
        LineStyle::Double => BorderType::Double,
        LineStyle::Round => BorderType::Rounded,
        LineStyle::Heavy => BorderType::Thick,
    }
}

fn alignment(align: HorizontalAlign) -> Alignment {
    match align {
        HorizontalAlign::Left => Alignment::Left,
        HorizontalAlign::Center => Alignment::Center,
        HorizontalAlign::Right => Alignment::Right,
    }
}
