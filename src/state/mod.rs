//! Application state.
//!
//! Holds the simulated jobs and controls their worker tasks: starting,
//! pausing and restarting them all at once.

mod job;

pub use job::{report, Job, JobConfig, ProgressKind};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Whether the workers are advancing their jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporality {
    /// Jobs advance.
    Live,
    /// Jobs hold their progress.
    Paused,
}

/// Application state.
pub struct AppState {
    /// Jobs in display order.
    pub jobs: Vec<Job>,
    /// Broadcasts pause/resume to the workers.
    temporality: watch::Sender<Temporality>,
    /// Cancels the current generation of workers.
    cancel: CancellationToken,
    /// Worker tasks of the current generation.
    workers: Vec<JoinHandle<()>>,
}

impl AppState {
    /// Creates the jobs without starting them.
    pub fn new(configs: impl IntoIterator<Item = JobConfig>) -> Self {
        let (temporality, _) = watch::channel(Temporality::Live);
        Self {
            jobs: configs.into_iter().map(Job::new).collect(),
            temporality,
            cancel: CancellationToken::new(),
            workers: Vec::new(),
        }
    }

    /// Spawns one worker per job. Must be called within a tokio runtime.
    pub fn start(&mut self) {
        self.workers = self
            .jobs
            .iter()
            .map(|job| job.spawn(self.temporality.subscribe(), self.cancel.child_token()))
            .collect();
        info!(jobs = self.jobs.len(), "workers started");
    }

    /// Current pause state.
    pub fn temporality(&self) -> Temporality {
        *self.temporality.borrow()
    }

    /// Switches between live and paused.
    pub fn toggle_pause(&mut self) {
        self.temporality.send_modify(|t| {
            *t = match *t {
                Temporality::Live => Temporality::Paused,
                Temporality::Paused => Temporality::Live,
            }
        });
        info!(temporality = ?self.temporality(), "toggled pause");
    }

    /// Stops all workers and runs every job again from zero.
    pub fn restart(&mut self) {
        self.stop();
        self.cancel = CancellationToken::new();
        self.start();
    }

    /// Stops all workers, leaving the gauges at their last progress.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        // A worker between its select and its report would otherwise still
        // write to the gauge after a restart reset it.
        for worker in self.workers.drain(..) {
            worker.abort();
        }
    }

    /// Number of jobs that have reached their total.
    pub fn finished_count(&self) -> usize {
        self.jobs
            .iter()
            .filter(|job| job.gauge.progress().percent() == 100)
            .count()
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::gauge::Progress;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn quick_jobs() -> Vec<JobConfig> {
        vec![
            JobConfig {
                name: "a".into(),
                total: 4,
                max_step: 2,
                interval_ms: 10,
                ..Default::default()
            },
            JobConfig {
                name: "b".into(),
                kind: ProgressKind::Absolute,
                total: 6,
                max_step: 3,
                interval_ms: 10,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn toggle_pause_flips_temporality() {
        let mut state = AppState::new(quick_jobs());
        assert_eq!(state.temporality(), Temporality::Live);
        state.toggle_pause();
        assert_eq!(state.temporality(), Temporality::Paused);
        state.toggle_pause();
        assert_eq!(state.temporality(), Temporality::Live);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_jobs_no_longer_report() {
        let mut state = AppState::new(vec![JobConfig {
            name: "slow".into(),
            total: 1_000_000,
            max_step: 1,
            interval_ms: 10,
            ..Default::default()
        }]);
        state.start();
        tokio::time::sleep(Duration::from_secs(5)).await;

        state.stop();
        assert!(state.workers.is_empty());
        tokio::task::yield_now().await;
        let stopped_at = state.jobs[0].gauge.progress();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(state.jobs[0].gauge.progress(), stopped_at);
    }

    #[tokio::test(start_paused = true)]
    async fn jobs_finish_and_restart_from_zero() {
        let mut state = AppState::new(quick_jobs());
        state.start();

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert_eq!(state.finished_count(), 2);

        state.toggle_pause();
        state.restart();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(state.jobs[0].gauge.progress(), Progress::Percent(0));
        assert_eq!(
            state.jobs[1].gauge.progress(),
            Progress::Absolute { done: 0, total: 6 }
        );
    }
}
