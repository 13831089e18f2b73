//! Application configuration and main loop.
//!
//! The loop redraws the dashboard on every event while the job workers
//! update the gauges in the background.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use eyre::WrapErr;
use futures::StreamExt;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::event::{EventHandler, EventResult, DEFAULT_TICK_RATE};
use crate::state::{AppState, JobConfig, ProgressKind};
use crate::ui::widgets::gauge::{GaugeOption, HorizontalAlign, LineStyle, VerticalAlign};
use crate::ui::Ui;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Redraw interval
    pub tick_rate_ms: u64,
    /// Where logs go, the terminal itself is taken by the dashboard
    pub log_file: PathBuf,
    /// Jobs shown on the dashboard, top to bottom
    pub jobs: Vec<JobConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE.as_millis() as u64,
            log_file: PathBuf::from("tui-gauge.log"),
            jobs: default_jobs(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&raw).wrap_err_with(|| format!("invalid config file {}", path.display()))
    }

    /// Parses a JSON configuration.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// A handful of jobs showing off the gauge options.
fn default_jobs() -> Vec<JobConfig> {
    vec![
        JobConfig {
            name: "download".into(),
            kind: ProgressKind::Absolute,
            total: 250,
            max_step: 6,
            interval_ms: 120,
            options: vec![
                GaugeOption::Border(LineStyle::Light),
                GaugeOption::BorderTitle("download".into()),
                GaugeOption::Height(1),
            ],
        },
        JobConfig {
            name: "extract".into(),
            kind: ProgressKind::Percent,
            total: 100,
            max_step: 3,
            interval_ms: 150,
            options: vec![
                GaugeOption::Border(LineStyle::Round),
                GaugeOption::BorderTitle("extract".into()),
                GaugeOption::BorderTitleAlign(HorizontalAlign::Right),
                GaugeOption::FillChar('▒'),
                GaugeOption::Height(3),
            ],
        },
        JobConfig {
            name: "index".into(),
            kind: ProgressKind::Percent,
            total: 100,
            max_step: 2,
            interval_ms: 90,
            options: vec![
                GaugeOption::HorizontalTextAlign(HorizontalAlign::Left),
                GaugeOption::VerticalTextAlign(VerticalAlign::Top),
                GaugeOption::Height(2),
            ],
        },
        JobConfig {
            name: "verify checksums of every downloaded archive".into(),
            kind: ProgressKind::Absolute,
            total: 40,
            max_step: 1,
            interval_ms: 300,
            options: vec![GaugeOption::Height(1)],
        },
    ]
}

/// Main application.
pub struct App {
    /// Application state
    state: AppState,
    /// Application configuration
    config: AppConfig,
    /// View controller
    ui: Ui,
    /// Should the application exit?
    should_quit: bool,
}

impl App {
    /// Creates a new application instance.
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config.jobs.clone()),
            config,
            ui: Ui::new(),
            should_quit: false,
        }
    }

    /// Runs the application main loop on `terminal`.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend>,
        events: &mut EventHandler,
    ) -> Result<()> {
        self.state.start();

        while !self.should_quit {
            terminal.draw(|frame| self.ui.render(frame, &self.state))?;

            match events.next().await {
                Some(event) => {
                    let result = events.handle(&event);
                    self.apply(result);
                }
                None => {
                    debug!("event stream closed");
                    self.should_quit = true;
                }
            }
        }

        self.state.stop();
        Ok(())
    }

    /// Runs the application main loop with Crossterm backend.
    pub async fn run_with_crossterm(&mut self) -> Result<()> {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut events = EventHandler::new(self.config.tick_rate());
        self.run(&mut terminal, &mut events).await
    }

    /// Applies the outcome of an event.
    fn apply(&mut self, result: EventResult) {
        match result {
            EventResult::Exit => {
                info!("quit requested");
                self.should_quit = true;
            }
            EventResult::TogglePause => self.state.toggle_pause(),
            EventResult::Restart => {
                info!("restarting jobs");
                self.state.restart();
            }
            EventResult::ToggleHelp => self.ui.toggle_help(),
            EventResult::Continue | EventResult::Ignored => {}
        }
    }
}
