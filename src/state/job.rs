//! Simulated jobs driving the dashboard gauges.
//!
//! Every job owns a gauge and a tokio task that advances it on its own
//! interval. The task reports progress from a runtime worker thread while the
//! UI loop draws the same gauge.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::ui::widgets::gauge::{Gauge, GaugeError, GaugeOption};

use super::Temporality;

/// How a job reports its progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressKind {
    /// As a percentage of `total`
    #[default]
    Percent,
    /// As `done/total`
    Absolute,
}

/// Configuration of a single simulated job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub name: String,
    pub kind: ProgressKind,
    /// Units of work in the job
    pub total: u64,
    /// Largest number of units completed per step
    pub max_step: u64,
    /// Time between steps
    pub interval_ms: u64,
    /// Gauge options applied at construction
    pub options: Vec<GaugeOption>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            name: "job".to_string(),
            kind: ProgressKind::Percent,
            total: 100,
            max_step: 5,
            interval_ms: 200,
            options: Vec::new(),
        }
    }
}

/// A running (or finished) simulated job.
#[derive(Debug)]
pub struct Job {
    pub config: JobConfig,
    pub gauge: Arc<Gauge>,
}

impl Job {
    /// Creates the job and its gauge. The gauge shows the job name as its label.
    pub fn new(config: JobConfig) -> Self {
        let mut options = config.options.clone();
        if !options.iter().any(|opt| matches!(opt, GaugeOption::TextLabel(_))) {
            options.push(GaugeOption::TextLabel(config.name.clone()));
        }
        let gauge = Arc::new(Gauge::new(&options));
        Self { config, gauge }
    }

    /// Starts advancing the job from zero.
    pub fn spawn(
        &self,
        temporality: watch::Receiver<Temporality>,
        cancel: CancellationToken,
    ) -> JoinHandle<()> {
        let config = self.config.clone();
        let gauge = Arc::clone(&self.gauge);
        tokio::spawn(async move { run(config, gauge, temporality, cancel).await })
    }
}

async fn run(
    config: JobConfig,
    gauge: Arc<Gauge>,
    temporality: watch::Receiver<Temporality>,
    cancel: CancellationToken,
) {
    let total = config.total.max(1);
    let mut done = 0;
    if let Err(err) = report(&gauge, config.kind, done, total) {
        warn!(job = %config.name, %err, "failed to reset progress");
        return;
    }

    let mut ticker = time::interval(Duration::from_millis(config.interval_ms.max(1)));
    info!(job = %config.name, total, "job started");

    while done < total {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(job = %config.name, done, "job cancelled");
                return;
            }
            _ = ticker.tick() => {}
        }

        if *temporality.borrow() == Temporality::Paused {
            continue;
        }

        let step = rand::thread_rng().gen_range(0..=config.max_step);
        done = done.saturating_add(step).min(total);
        if let Err(err) = report(&gauge, config.kind, done, total) {
            warn!(job = %config.name, %err, "progress update rejected");
            return;
        }
    }

    info!(job = %config.name, "job finished");
}

/// Pushes `done` out of `total` into the gauge in the job's representation.
pub fn report(
    gauge: &Gauge,
    kind: ProgressKind,
    done: u64,
    total: u64,
) -> Result<(), GaugeError> {
    let done = i64::try_from(done).unwrap_or(i64::MAX);
    let total = i64::try_from(total).unwrap_or(i64::MAX);
    match kind {
        ProgressKind::Percent => gauge.set_percent(done.saturating_mul(100) / total.max(1), &[]),
        ProgressKind::Absolute => gauge.set_absolute(done, total, &[]),
    }
}
