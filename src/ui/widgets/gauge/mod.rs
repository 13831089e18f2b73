//! Progress gauge widget.
//!
//! A [`Gauge`] fills its area from the left in proportion to the progress and
//! writes the progress as text on top of the fill. Progress is reported either
//! as a percentage or as a done/total pair.
//!
//! The gauge is meant to be shared: application code reports progress through
//! `&self` methods while the dashboard redraws it, possibly from another
//! thread. A single mutex guards the progress and the options of the latest
//! update, and both the updates and [`Gauge::draw`] hold it for their whole
//! duration, so a draw never observes a half-applied update.
//!
//! ```
//! use tui_gauge::ui::widgets::gauge::{Gauge, GaugeOption, LineStyle};
//!
//! let gauge = Gauge::new(&[GaugeOption::Border(LineStyle::Light)]);
//! gauge.set_absolute(3, 10, &[GaugeOption::TextLabel("copying".into())]).unwrap();
//! assert_eq!(gauge.progress().percent(), 30);
//! ```

pub mod border;
pub mod error;
pub mod options;
pub mod render;
pub mod size;

pub use error::GaugeError;
pub use options::{
    BorderOptions, GaugeOption, GaugeOptions, HorizontalAlign, LineStyle, VerticalAlign,
};
pub use render::RenderPlan;
pub use size::{Size, WidgetOptions};

use std::sync::{Mutex, MutexGuard, PoisonError};

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tracing::{debug, trace, warn};

use crate::ui::canvas::{BufferCanvas, Canvas};

/// Current progress of a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A percentage in `0..=100`
    Percent(u8),
    /// `done` out of `total`, with `done <= total` and `total > 0`
    Absolute { done: u64, total: u64 },
}

impl Progress {
    /// The progress as a percentage, rounded down.
    pub fn percent(&self) -> u8 {
        match *self {
            Progress::Percent(p) => p,
            Progress::Absolute { done, total } => {
                let p = u128::from(done) * 100 / u128::from(total.max(1));
                u8::try_from(p.min(100)).unwrap_or(100)
            }
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Progress::Percent(0)
    }
}

/// State guarded by the gauge's lock.
#[derive(Debug)]
struct GaugeState {
    progress: Progress,
    /// Construction options patched with the options of the latest update
    options: GaugeOptions,
}

/// A progress gauge.
#[derive(Debug)]
pub struct Gauge {
    /// Options given at construction, the base every update is resolved against
    base: GaugeOptions,
    state: Mutex<GaugeState>,
}

impl Gauge {
    /// Creates a gauge at 0%.
    pub fn new<'a>(options: impl IntoIterator<Item = &'a GaugeOption>) -> Self {
        let base = GaugeOptions::new(options);
        Self {
            state: Mutex::new(GaugeState {
                progress: Progress::default(),
                options: base.clone(),
            }),
            base,
        }
    }

    /// Reports progress as a percentage.
    ///
    /// `options` override the construction options for this update only. On
    /// error the gauge keeps its previous progress and options.
    pub fn set_percent(&self, percent: i64, options: &[GaugeOption]) -> Result<(), GaugeError> {
        let mut state = self.lock();

        let percent = match u8::try_from(percent) {
            Ok(p) if p <= 100 => p,
            _ => {
                warn!(percent, "rejecting gauge update");
                return Err(GaugeError::Validation(format!(
                    "percent must be in the range 0..=100, got {percent}"
                )));
            }
        };

        state.progress = Progress::Percent(percent);
        state.options = self.base.resolve(options);
        debug!(percent, overrides = options.len(), "gauge updated");
        Ok(())
    }

    /// Reports progress as `done` out of `total`.
    ///
    /// Requires `0 <= done <= total` and `total > 0`. `options` override the
    /// construction options for this update only. On error the gauge keeps its
    /// previous progress and options.
    pub fn set_absolute(
        &self,
        done: i64,
        total: i64,
        options: &[GaugeOption],
    ) -> Result<(), GaugeError> {
        let mut state = self.lock();

        let reason = if total <= 0 {
            Some(format!("total must be positive, got {total}"))
        } else if done < 0 {
            Some(format!("done must not be negative, got {done}"))
        } else if done > total {
            Some(format!("done ({done}) must not exceed total ({total})"))
        } else {
            None
        };
        if let Some(reason) = reason {
            warn!(done, total, "rejecting gauge update");
            return Err(GaugeError::Validation(reason));
        }

        // Both are known to be non-negative here.
        state.progress = Progress::Absolute {
            done: done.unsigned_abs(),
            total: total.unsigned_abs(),
        };
        state.options = self.base.resolve(options);
        debug!(done, total, overrides = options.len(), "gauge updated");
        Ok(())
    }

    /// A snapshot of the current progress.
    pub fn progress(&self) -> Progress {
        self.lock().progress
    }

    /// The options in effect for the next draw.
    pub fn resolved_options(&self) -> GaugeOptions {
        self.lock().options.clone()
    }

    /// Size limits for the layout hosting this gauge.
    ///
    /// Derived from the construction options only, so it never waits on the lock.
    pub fn options(&self) -> WidgetOptions {
        size::widget_options(&self.base)
    }

    /// Draws the gauge on the whole of `canvas`.
    ///
    /// Fails with [`GaugeError::Size`] before drawing anything when the canvas
    /// is smaller than the minimum size.
    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<(), GaugeError> {
        let state = self.lock();
        let plan = RenderPlan::new(state.progress, &state.options, canvas.area())?;
        trace!(
            interior = ?plan.interior,
            fill = ?plan.fill,
            text = plan.text.as_ref().map(|t| t.text.as_str()),
            "drawing gauge"
        );
        plan.draw(canvas, &state.options)
    }

    // Every mutation replaces whole fields after validation, so the state
    // behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, GaugeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl Widget for &Gauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let result = BufferCanvas::with_area(buf, area)
            .map_err(GaugeError::from)
            .and_then(|mut canvas| self.draw(&mut canvas));
        if let Err(err) = result {
            warn!(%err, ?area, "gauge not rendered");
        }
    }
}
