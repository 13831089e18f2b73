//! UI components for the gauge dashboard.
//!
//! The dashboard stacks one gauge per job, sized from the gauge's own size
//! limits, above a status line. A help overlay can be toggled on top.

pub mod canvas;
pub mod help;
pub mod theme;
pub mod widgets;

pub use help::HelpView;
pub use theme::Theme;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Temporality};
use crate::ui::widgets::gauge::{Gauge, Size};

/// Height given to a gauge that does not fix its own.
const DEFAULT_GAUGE_HEIGHT: u16 = 3;

/// Main UI controller.
pub struct Ui {
    /// Whether to show help overlay
    show_help: bool,
    /// UI theme
    theme: Theme,
}

impl Ui {
    /// Create a new UI controller.
    pub fn new() -> Self {
        Self {
            show_help: false,
            theme: Theme::default(),
        }
    }

    /// Toggle help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Whether the help overlay is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Render the UI.
    pub fn render(&self, frame: &mut Frame, app_state: &AppState) {
        let area = frame.size();
        if area.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        self.render_jobs(frame, chunks[0], app_state);
        self.render_status_line(frame, chunks[1], app_state);

        // Render help overlay if active (always on top)
        if self.show_help {
            HelpView::render(frame, area, &self.theme);
        }
    }

    fn render_jobs(&self, frame: &mut Frame, area: Rect, app_state: &AppState) {
        let constraints: Vec<Constraint> = app_state
            .jobs
            .iter()
            .map(|job| Constraint::Length(gauge_height(&job.gauge)))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (job, row) in app_state.jobs.iter().zip(rows.iter()) {
            // Rows squeezed below the minimum are left empty rather than drawn partially.
            if Size::from(*row).fits(job.gauge.options().minimum_size) {
                frame.render_widget(job.gauge.as_ref(), *row);
            }
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, app_state: &AppState) {
        let (status, status_style) = match app_state.temporality() {
            Temporality::Live => ("LIVE", self.theme.status_live),
            Temporality::Paused => ("PAUSED", self.theme.status_paused),
        };

        let line = Line::from(vec![
            Span::styled(status, status_style),
            Span::styled(
                format!(
                    " | {}/{} done | ",
                    app_state.finished_count(),
                    app_state.jobs.len()
                ),
                self.theme.normal_text,
            ),
            Span::styled("?", self.theme.key_style),
            Span::styled(" help", self.theme.status_hint),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows a gauge occupies: its fixed height if any, otherwise a default that
/// still fits the border.
fn gauge_height(gauge: &Gauge) -> u16 {
    let options = gauge.options();
    match options.maximum_size.height {
        0 => DEFAULT_GAUGE_HEIGHT.max(options.minimum_size.height),
        height => height,
    }
}
