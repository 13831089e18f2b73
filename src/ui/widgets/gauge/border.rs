//! Border handling for the gauge.

use ratatui::layout::Rect;

use crate::ui::canvas::{BorderRequest, BorderTitle, Canvas, CanvasError, Overrun};

use super::options::BorderOptions;

/// Translates the border options into a canvas request, `None` when no border is configured.
pub fn request(options: &BorderOptions) -> Option<BorderRequest> {
    let line_style = options.line_style?;
    Some(BorderRequest {
        line_style,
        color: options.color,
        title: options.title.as_ref().map(|text| BorderTitle {
            text: text.clone(),
            align: options.title_align,
            overrun: Overrun::ThreeDot,
        }),
    })
}

/// The part of `area` left for the gauge once the border is accounted for.
pub fn interior(area: Rect, options: &BorderOptions) -> Rect {
    let inset = options.thickness();
    Rect::new(
        area.x.saturating_add(inset),
        area.y.saturating_add(inset),
        area.width.saturating_sub(inset * 2),
        area.height.saturating_sub(inset * 2),
    )
}

/// Draws the border, if any.
pub fn draw(canvas: &mut dyn Canvas, area: Rect, options: &BorderOptions) -> Result<(), CanvasError> {
    match request(options) {
        Some(request) => canvas.border(area, &request),
        None => Ok(()),
    }
}
