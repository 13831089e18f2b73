//! UI theme definition.

use ratatui::style::{Color, Modifier, Style};

/// Theme for the dashboard chrome. Gauges carry their own colors.
#[derive(Debug, Clone)]
pub struct Theme {
    // Basic styles
    pub normal_text: Style,
    pub block_style: Style,
    pub header_style: Style,

    // Status styles
    pub status_live: Style,
    pub status_paused: Style,
    pub status_hint: Style,

    // Key styles
    pub key_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Basic styles
            normal_text: Style::default().fg(Color::White),
            block_style: Style::default(),
            header_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),

            // Status styles
            status_live: Style::default().fg(Color::Green),
            status_paused: Style::default().fg(Color::Yellow),
            status_hint: Style::default().fg(Color::Gray),

            // Key styles
            key_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        }
    }
}
