//! Playback driver
//!
//! [`Controller`] is the single owner of the visible array and of any sort
//! in flight. It is a two-state machine:
//!
//! ```text
//!            start (records steps)
//!   Idle ───────────────────────────▶ Running
//!    ▲                                  │ tick: publish next step
//!    │   sequence exhausted / stop /    │
//!    └──────────── reset ◀──────────────┘
//! ```
//!
//! Time is supplied by the caller: [`Controller::tick`] takes the current
//! [`Instant`] and does at most one advance per call, so the UI loop (or a
//! test) drives playback at whatever rate it polls.

use crate::array;
use crate::config::{Algorithm, ArrayConfig, SortConfig, Speed};
use crate::errors::Result;
use crate::snapshot::{StepSequence, Value};
use crate::sorting;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
}

/// What a call to [`Controller::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing is playing
    Idle,
    /// Running, next step not due yet
    Waiting,
    /// Published the step with this zero-based index
    Advanced(usize),
    /// Sequence exhausted; now Idle
    Finished,
}

/// A sort in flight
#[derive(Debug)]
struct Run {
    steps: StepSequence,
    next: usize,
    delay: Duration,
    due: Instant,
}

/// Read-only view of controller state for rendering
#[derive(Debug, Clone, Copy)]
pub struct PlaybackView<'a> {
    pub array: &'a [Value],
    pub running: bool,
    /// Number of steps published so far in the current (or last) run
    pub steps_shown: usize,
    /// Steps recorded for the current (or last) run
    pub total_steps: usize,
    pub config: SortConfig,
    /// Upper bound of generated values, for scaling bar heights
    pub max_value: Value,
}

/// Owns the array, sort settings and playback state
#[derive(Debug)]
pub struct Controller {
    array: Vec<Value>,
    array_config: ArrayConfig,
    config: SortConfig,
    rng: StdRng,
    run: Option<Run>,
    steps_shown: usize,
    total_steps: usize,
}

impl Controller {
    /// Create a controller with a freshly generated array
    pub fn new(array_config: ArrayConfig, config: SortConfig, mut rng: StdRng) -> Result<Self> {
        let array = array::generate(&array_config, &mut rng)?;
        tracing::info!(
            len = array_config.len,
            min = array_config.min,
            max = array_config.max,
            algorithm = config.algorithm.name(),
            "controller ready"
        );
        Ok(Controller {
            array,
            array_config,
            config,
            rng,
            run: None,
            steps_shown: 0,
            total_steps: 0,
        })
    }

    pub fn state(&self) -> PlaybackState {
        if self.run.is_some() {
            PlaybackState::Running
        } else {
            PlaybackState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn array(&self) -> &[Value] {
        &self.array
    }

    pub fn config(&self) -> SortConfig {
        self.config
    }

    /// When the next step is due, if running
    pub fn next_due(&self) -> Option<Instant> {
        self.run.as_ref().map(|run| run.due)
    }

    pub fn view(&self) -> PlaybackView<'_> {
        PlaybackView {
            array: &self.array,
            running: self.is_running(),
            steps_shown: self.steps_shown,
            total_steps: self.total_steps,
            config: self.config,
            max_value: self.array_config.max,
        }
    }

    /// Record steps for the current array and begin playback.
    ///
    /// Returns `false` without touching anything if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.run.is_some() {
            tracing::debug!("start ignored: playback already running");
            return false;
        }

        let steps = sorting::record_steps(self.config.algorithm, &self.array, self.config.ascending);
        debug_assert!(steps.preserves_values(&self.array));

        let delay = self.config.speed.delay();
        tracing::info!(
            algorithm = self.config.algorithm.name(),
            ascending = self.config.ascending,
            steps = steps.len(),
            delay_ms = self.config.speed.millis(),
            "playback started"
        );

        self.steps_shown = 0;
        self.total_steps = steps.len();
        self.run = Some(Run {
            steps,
            next: 0,
            delay,
            due: now + delay,
        });
        true
    }

    /// Advance playback if the next step is due
    pub fn tick(&mut self, now: Instant) -> Tick {
        let Some(run) = self.run.as_mut() else {
            return Tick::Idle;
        };
        if now < run.due {
            return Tick::Waiting;
        }

        match run.steps.get(run.next) {
            Some(step) => {
                let index = run.next;
                self.array.clear();
                self.array.extend_from_slice(step.values());
                run.next += 1;
                run.due = now + run.delay;
                self.steps_shown = run.next;
                tracing::trace!(index, "published step");
                Tick::Advanced(index)
            }
            None => {
                self.run = None;
                tracing::info!(steps = self.total_steps, "playback finished");
                Tick::Finished
            }
        }
    }

    /// Cancel playback, keeping the last published step on screen.
    ///
    /// Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        match self.run.take() {
            Some(run) => {
                tracing::info!(at = run.next, of = run.steps.len(), "playback stopped");
                true
            }
            None => false,
        }
    }

    /// Cancel any playback and generate a new array
    pub fn reset(&mut self) {
        if self.stop() {
            tracing::debug!("reset cancelled running playback");
        }
        self.array = array::fill(&self.array_config, &mut self.rng);
        self.steps_shown = 0;
        self.total_steps = 0;
        tracing::info!(len = self.array.len(), "array reset");
    }

    // Settings below take effect on the next start; a running sort keeps
    // the steps and delay it captured.

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
        tracing::debug!(algorithm = algorithm.name(), "algorithm selected");
    }

    pub fn cycle_algorithm(&mut self, forward: bool) {
        let algorithm = if forward {
            self.config.algorithm.next()
        } else {
            self.config.algorithm.prev()
        };
        self.set_algorithm(algorithm);
    }

    pub fn set_ascending(&mut self, ascending: bool) {
        self.config.ascending = ascending;
        tracing::debug!(ascending, "direction changed");
    }

    pub fn toggle_ascending(&mut self) {
        self.set_ascending(!self.config.ascending);
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.config.speed = speed;
        tracing::debug!(delay_ms = speed.millis(), "speed changed");
    }

    /// Move the speed slider by `delta` positions
    pub fn nudge_speed(&mut self, delta: i32) {
        self.set_speed(self.config.speed.nudge(delta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::make_rng;

    fn controller(algorithm: Algorithm, slider: u32) -> Controller {
        let config = SortConfig::new(algorithm, true, Speed::from_slider(slider));
        let array_config = ArrayConfig {
            len: 12,
            min: 0,
            max: 50,
        };
        Controller::new(array_config, config, make_rng(Some(3))).unwrap()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_starts_idle() {
        let c = controller(Algorithm::BubbleSort, 1900);
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.array().len(), 12);
        assert_eq!(c.view().total_steps, 0);
        assert!(c.next_due().is_none());
    }

    #[test]
    fn test_tick_respects_delay() {
        let mut c = controller(Algorithm::InsertionSort, 1900); // 100 ms
        let t0 = Instant::now();
        assert!(c.start(t0));
        assert_eq!(c.view().total_steps, 11);

        assert_eq!(c.tick(t0), Tick::Waiting);
        assert_eq!(c.tick(t0 + ms(99)), Tick::Waiting);
        assert_eq!(c.tick(t0 + ms(100)), Tick::Advanced(0));
        assert_eq!(c.next_due(), Some(t0 + ms(200)));
        assert_eq!(c.tick(t0 + ms(150)), Tick::Waiting);
        assert_eq!(c.tick(t0 + ms(200)), Tick::Advanced(1));
        assert_eq!(c.view().steps_shown, 2);
    }

    #[test]
    fn test_one_advance_per_tick_even_when_late() {
        let mut c = controller(Algorithm::BubbleSort, 1999); // 1 ms
        let t0 = Instant::now();
        c.start(t0);
        assert_eq!(c.tick(t0 + ms(10_000)), Tick::Advanced(0));
        assert_eq!(c.view().steps_shown, 1);
    }

    #[test]
    fn test_runs_to_sorted_and_goes_idle() {
        let mut c = controller(Algorithm::QuickSort, 1999);
        let original = c.array().to_vec();
        let mut now = Instant::now();
        c.start(now);

        let mut advanced = 0;
        loop {
            now += ms(1);
            match c.tick(now) {
                Tick::Advanced(_) => advanced += 1,
                Tick::Finished => break,
                Tick::Waiting => {}
                Tick::Idle => panic!("went idle without finishing"),
            }
        }

        assert_eq!(advanced, c.view().total_steps);
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.tick(now + ms(5)), Tick::Idle);

        let mut expected = original;
        expected.sort_unstable();
        assert_eq!(c.array(), expected.as_slice());
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut c = controller(Algorithm::BubbleSort, 1900);
        let t0 = Instant::now();
        assert!(c.start(t0));
        c.tick(t0 + ms(100));
        let due = c.next_due();
        let shown = c.view().steps_shown;
        let total = c.view().total_steps;

        c.set_algorithm(Algorithm::MergeSort);
        assert!(!c.start(t0 + ms(150)));

        assert_eq!(c.next_due(), due);
        assert_eq!(c.view().steps_shown, shown);
        assert_eq!(c.view().total_steps, total);
        assert_eq!(c.state(), PlaybackState::Running);
    }

    #[test]
    fn test_settings_changes_do_not_affect_running_sort() {
        let mut c = controller(Algorithm::InsertionSort, 1900);
        let t0 = Instant::now();
        c.start(t0);
        c.set_speed(Speed::from_slider(1));
        c.toggle_ascending();
        assert_eq!(c.tick(t0 + ms(100)), Tick::Advanced(0));
        assert_eq!(c.next_due(), Some(t0 + ms(200)));
        assert!(!c.config().ascending);
        assert_eq!(c.config().speed.millis(), 1999);
    }

    #[test]
    fn test_stop_keeps_last_published_array() {
        let mut c = controller(Algorithm::BubbleSort, 1999);
        let t0 = Instant::now();
        c.start(t0);
        c.tick(t0 + ms(1));
        c.tick(t0 + ms(2));
        let shown = c.array().to_vec();

        assert!(c.stop());
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.array(), shown.as_slice());
        assert_eq!(c.tick(t0 + ms(3)), Tick::Idle);
        assert!(!c.stop());
    }

    #[test]
    fn test_reset_cancels_and_regenerates() {
        let mut c = controller(Algorithm::MergeSort, 1999);
        let t0 = Instant::now();
        c.start(t0);
        c.tick(t0 + ms(1));

        c.reset();
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.view().steps_shown, 0);
        assert_eq!(c.view().total_steps, 0);
        assert_eq!(c.array().len(), 12);
        assert!(c.array().iter().all(|&v| v <= 50));
        assert_eq!(c.tick(t0 + ms(2)), Tick::Idle);
    }

    #[test]
    fn test_restart_after_finish_records_again() {
        let mut c = controller(Algorithm::InsertionSort, 1999);
        let mut now = Instant::now();
        c.start(now);
        while c.is_running() {
            now += ms(1);
            c.tick(now);
        }
        // Already sorted: insertion still records n-1 steps
        assert!(c.start(now));
        assert_eq!(c.view().total_steps, 11);
        assert_eq!(c.view().steps_shown, 0);
    }

    #[test]
    fn test_single_element_array_finishes_immediately() {
        let config = SortConfig::default();
        let array_config = ArrayConfig {
            len: 1,
            min: 1,
            max: 9,
        };
        let mut c = Controller::new(array_config, config, make_rng(Some(0))).unwrap();
        let t0 = Instant::now();
        assert!(c.start(t0));
        assert_eq!(c.view().total_steps, 0);
        assert_eq!(c.tick(t0 + config.speed.delay()), Tick::Finished);
        assert!(!c.is_running());
    }

    #[test]
    fn test_cycle_algorithm() {
        let mut c = controller(Algorithm::BubbleSort, 1900);
        c.cycle_algorithm(true);
        assert_eq!(c.config().algorithm, Algorithm::InsertionSort);
        c.cycle_algorithm(false);
        c.cycle_algorithm(false);
        assert_eq!(c.config().algorithm, Algorithm::QuickSort);
    }

    #[test]
    fn test_nudge_speed() {
        let mut c = controller(Algorithm::BubbleSort, 1900);
        c.nudge_speed(-100);
        assert_eq!(c.config().speed.slider(), 1800);
        assert_eq!(c.config().speed.millis(), 200);
    }
}
