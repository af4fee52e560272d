/// Gap-tracking state of a [`StallMonitor`] for one run.
///
/// `last_change_time` marks the most recent elapsed time at which the gap
/// moved by more than the configured epsilon, and `last_significant_gap` is
/// the gap recorded at that moment. Both are updated together.
///
/// [`StallMonitor`]: super::StallMonitor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    last_significant_gap: f64,
    last_change_time: f64,
}

impl Default for State {
    /// The state before any significant change: worst possible gap, no time.
    fn default() -> Self {
        Self {
            last_significant_gap: f64::INFINITY,
            last_change_time: f64::NEG_INFINITY,
        }
    }
}

impl State {
    /// Returns the gap recorded at the last significant change.
    #[must_use]
    pub fn last_significant_gap(&self) -> f64 {
        self.last_significant_gap
    }

    /// Returns the elapsed time of the last significant change.
    #[must_use]
    pub fn last_change_time(&self) -> f64 {
        self.last_change_time
    }

    /// Returns `true` once a significant change has been recorded.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.last_change_time.is_finite()
    }

    /// Records `gap` at time `now` if it differs from the last significant
    /// gap by more than `epsilon`. Returns `true` if the state changed.
    pub(super) fn record(&mut self, gap: f64, now: f64, epsilon: f64) -> bool {
        if (self.last_significant_gap - gap).abs() > epsilon {
            self.last_significant_gap = gap;
            self.last_change_time = now;
            true
        } else {
            false
        }
    }

    /// Seconds between the last significant change and `now`.
    pub(super) fn stalled_for(&self, now: f64) -> f64 {
        now - self.last_change_time
    }
}
