//! Help overlay showing keyboard shortcuts.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::Theme;

const SHORTCUTS: [(&str, &str); 4] = [
    ("p", "Pause or resume all jobs"),
    ("r", "Restart all jobs"),
    ("?", "Toggle this help screen"),
    ("q", "Quit"),
];

/// Help overlay showing keyboard shortcuts.
pub struct HelpView;

impl HelpView {
    /// Render the help overlay
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = Self::centered_rect(60, 60, area);

        // Clear the background
        frame.render_widget(Clear, popup_area);

        let help_block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(theme.block_style);

        let mut help_text = vec![
            Line::from(Span::styled("Shortcuts", theme.header_style)),
            Line::from(""),
        ];
        help_text.extend(SHORTCUTS.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(*key, theme.key_style),
                Span::raw(format!(" - {action}")),
            ])
        }));

        let help_widget = Paragraph::new(help_text)
            .block(help_block)
            .style(theme.normal_text)
            .alignment(Alignment::Left);

        frame.render_widget(help_widget, popup_area);
    }

    /// Helper function to create a centered rect using percentages
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_width = r.width * percent_x / 100;
        let popup_height = r.height * percent_y / 100;

        Rect {
            x: r.x + (r.width - popup_width) / 2,
            y: r.y + (r.height - popup_height) / 2,
            width: popup_width,
            height: popup_height,
        }
    }
}
