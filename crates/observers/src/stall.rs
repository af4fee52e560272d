//! Gap-stall termination.
//!
//! # Algorithm
//!
//! A MIP search usually closes most of its gap early and then spends a long
//! time proving the last fraction of a percent. [`StallMonitor`] watches the
//! relative gap at each checkpoint and interrupts the search once the gap has
//! not moved by more than `gap_epsilon` for longer than `stall_timeout`
//! seconds, trading proven optimality for a bounded runtime.
//!
//! At each checkpoint with at least one incumbent:
//!
//! 1. Compute `gap = |incumbent - bound| / max(|incumbent|, |bound|, 1e-10)`.
//! 2. If `|last_significant_gap - gap| > gap_epsilon`, record `gap` as the
//!    last significant gap and restart the stall clock at the checkpoint's
//!    elapsed time. Movement in either direction restarts the clock.
//! 3. If more than `stall_timeout` seconds have passed since the clock was
//!    last restarted, stop.
//!
//! Checkpoints without an incumbent are ignored. A non-finite gap (no bound
//! yet) never counts as a change; it only runs the stall check once a
//! significant change has been recorded. Once the monitor decides to stop it stays stopped until
//! [`StallMonitor::reset`] is called.
//!
//! # Observer
//!
//! [`StallMonitor`] implements [`Observer`] for any event that carries a
//! [`Progress`] and any action that can interrupt, so it can be handed
//! directly to [`gapwatch_search::run`]. Pass `&mut monitor` to inspect the
//! [`Stall`] after the run.
//!
//! Checkpoints must arrive with non-decreasing elapsed times. The monitor does
//! not check this; [`gapwatch_search::run`] does.

mod config;
mod state;


pub use config::{Config, ConfigError};
pub use state::State;

use std::fmt;

use gapwatch_core::{Observer, Progress};

use crate::traits::{CanInterrupt, HasProgress};

/// Whether the optimizer should keep searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Keep searching.
    Continue,

    /// Terminate the search.
    Stop,
}

/// Details of the stall that stopped a monitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stall {
    /// The configured stall timeout, in seconds.
    pub stall_timeout: f64,

    /// Gap recorded at the last significant change.
    pub gap: f64,

    /// Elapsed time of the last significant change.
    pub last_change_time: f64,

    /// Elapsed time of the checkpoint that triggered the stop.
    pub stopped_at: f64,
}

impl Stall {
    /// Seconds without a significant gap change when the monitor stopped.
    #[must_use]
    pub fn stalled_for(&self) -> f64 {
        self.stopped_at - self.last_change_time
    }
}

impl fmt::Display for Stall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "terminating optimization after {} seconds without significant gap change \
             (gap {:.4}%); the returned solution may be suboptimal",
            self.stall_timeout,
            self.gap * 100.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Monitoring,
    Stopped(Stall),
}

/// Interrupts a search whose relative gap has stalled.
///
/// See the [module docs](self) for the algorithm.
#[derive(Debug, Clone)]
pub struct StallMonitor {
    config: Config,
    state: State,
    phase: Phase,
}

impl StallMonitor {
    /// Creates a monitor for a new run.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: State::default(),
            phase: Phase::Monitoring,
        }
    }

    /// Returns the monitor's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the gap-tracking state.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns `true` once the monitor has decided to stop.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        matches!(self.phase, Phase::Stopped(_))
    }

    /// Returns the stall that stopped the monitor, if it has stopped.
    #[must_use]
    pub fn stall(&self) -> Option<&Stall> {
        match &self.phase {
            Phase::Monitoring => None,
            Phase::Stopped(stall) => Some(stall),
        }
    }

    /// Restores the initial state so the monitor can watch a new run.
    pub fn reset(&mut self) {
        self.state = State::default();
        self.phase = Phase::Monitoring;
    }

    /// Observes a checkpoint and decides whether the search should stop.
    ///
    /// `progress.elapsed_time` must not be earlier than any previously
    /// observed checkpoint of the same run.
    pub fn observe(&mut self, progress: &Progress) -> Decision {
        if self.is_stopped() {
            return Decision::Stop;
        }

        let Some(gap) = progress.gap() else {
            return Decision::Continue;
        };

        let now = progress.elapsed_time;
        if gap.is_finite() {
            if self.state.record(gap, now, self.config.gap_epsilon()) {
                log::debug!("significant gap change to {gap:.6} at {now}s");
            }
        } else if !self.state.has_changed() {
            return Decision::Continue;
        }

        if self.state.stalled_for(now) > self.config.stall_timeout() {
            self.phase = Phase::Stopped(Stall {
                stall_timeout: self.config.stall_timeout(),
                gap: self.state.last_significant_gap(),
                last_change_time: self.state.last_change_time(),
                stopped_at: now,
            });
            return Decision::Stop;
        }

        Decision::Continue
    }

    /// Observes an event and maps a stop decision to an interrupt action.
    ///
    /// Logs the stall once, on the checkpoint that triggers it.
    fn interrupt_if_stalled<A: CanInterrupt>(&mut self, progress: &Progress) -> Option<A> {
        let was_stopped = self.is_stopped();
        match self.observe(progress) {
            Decision::Continue => None,
            Decision::Stop => {
                if !was_stopped {
                    if let Some(stall) = self.stall() {
                        log::info!("{stall}");
                    }
                }
                Some(A::interrupt())
            }
        }
    }
}

impl Default for StallMonitor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<E: HasProgress, A: CanInterrupt> Observer<E, A> for StallMonitor {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.interrupt_if_stalled(event.progress())
    }
}

impl<E: HasProgress, A: CanInterrupt> Observer<E, A> for &mut StallMonitor {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.interrupt_if_stalled(event.progress())
    }
}
