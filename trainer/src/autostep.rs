use std::sync::Arc;
use std::time::Duration;

use log::info;
use parking_lot::Mutex;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use neuron_core::{CurveData, ModelState, Observation, Sample, TrainingConfig};

use crate::session::TrainerSession;
use crate::view::SessionView;

/// Period between automatic gradient-descent steps.
pub const AUTO_STEP_PERIOD: Duration = Duration::from_millis(500);

/// Shared handle to a [`TrainerSession`] plus its auto-step scheduler.
///
/// The scheduler is a two-state machine (idle or running). Running means one
/// background task ticking at a fixed period and taking a step per tick; the
/// `Option` slot makes a second concurrent task structurally impossible, and
/// redundant transitions are no-ops. Spawning requires a tokio runtime, so
/// toggling must happen inside one.
pub struct SessionHandle {
    inner: Arc<Mutex<TrainerSession>>,
    auto: Option<CancellationToken>,
    period: Duration,
}

impl SessionHandle {
    /// Returns a new idle handle with the default period.
    pub fn new() -> Self {
        Self::with_period(AUTO_STEP_PERIOD)
    }

    /// Returns a new idle handle.
    ///
    /// # Arguments
    /// * `period` - Time between automatic steps while running.
    pub fn with_period(period: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TrainerSession::new())),
            auto: None,
            period,
        }
    }

    pub fn is_running(&self) -> bool {
        self.auto.is_some()
    }

    /// Flips the scheduler between idle and running.
    ///
    /// # Returns
    /// The running flag after the transition.
    pub fn toggle_auto_step(&mut self) -> bool {
        if self.auto.is_some() {
            self.stop();
            false
        } else {
            self.start();
            true
        }
    }

    fn start(&mut self) {
        if self.auto.is_some() {
            return;
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let session = Arc::clone(&self.inner);
        let period = self.period;

        tokio::spawn(async move {
            // Like an interval timer, the first step lands one full period
            // after enabling; skipped (not queued) ticks never burst.
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = ticks.tick() => session.lock().step(),
                }
            }
        });

        self.auto = Some(token);
        info!("auto-step running, period {:?}", self.period);
    }

    fn stop(&mut self) {
        let Some(token) = self.auto.take() else {
            return;
        };

        // No further ticks fire; a tick already holding the lock completes.
        token.cancel();
        info!("auto-step idle after {} steps", self.steps());
    }

    /// Takes a single gradient-descent step.
    pub fn step(&self) {
        self.inner.lock().step();
    }

    /// Stops auto-stepping if running, then resets the parameters.
    pub fn reset(&mut self) {
        self.stop();
        self.inner.lock().reset();
    }

    /// Redraws `w`, `b`, `x` and `y_true`; the scheduler state is untouched.
    pub fn randomize(&self) {
        self.inner.lock().randomize(&mut rand::rng());
    }

    pub fn set_w(&self, w: f64) {
        self.inner.lock().set_w(w);
    }

    pub fn set_b(&self, b: f64) {
        self.inner.lock().set_b(b);
    }

    pub fn set_x(&self, x: f64) {
        self.inner.lock().set_x(x);
    }

    pub fn set_y_true(&self, y_true: f64) {
        self.inner.lock().set_y_true(y_true);
    }

    pub fn set_learning_rate(&self, learning_rate: f64) {
        self.inner.lock().set_learning_rate(learning_rate);
    }

    pub fn state(&self) -> ModelState {
        self.inner.lock().state()
    }

    pub fn sample(&self) -> Sample {
        self.inner.lock().sample()
    }

    pub fn config(&self) -> TrainingConfig {
        self.inner.lock().config()
    }

    pub fn observation(&self) -> Observation {
        self.inner.lock().observation()
    }

    pub fn steps(&self) -> u64 {
        self.inner.lock().steps()
    }

    /// Regenerates the plot datasets from the current state.
    pub fn curves(&self) -> CurveData {
        self.inner.lock().curves()
    }

    /// Captures a renderer-facing snapshot of the whole session.
    pub fn view(&self) -> SessionView {
        SessionView::capture(&self.inner.lock(), self.auto.is_some())
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if let Some(token) = self.auto.take() {
            token.cancel();
        }
    }
}
