/// Smallest denominator used when computing a relative gap.
///
/// Keeps the gap finite when both the incumbent and the bound are zero.
pub const GAP_FLOOR: f64 = 1e-10;

/// Computes the relative optimality gap between an incumbent and a bound.
///
/// ```text
/// gap = |incumbent - bound| / max(|incumbent|, |bound|, GAP_FLOOR)
/// ```
///
/// This is the usual MIP gap metric; it is symmetric in its arguments and so
/// works for both minimization and maximization. The result is `NaN` when
/// either value is infinite or `NaN`.
#[must_use]
pub fn relative_gap(incumbent: f64, bound: f64) -> f64 {
    let scale = incumbent.abs().max(bound.abs()).max(GAP_FLOOR);
    (incumbent - bound).abs() / scale
}

/// Progress reported by an optimizer at a checkpoint.
///
/// A snapshot is produced once per checkpoint and consumed immediately by
/// observers. Within a run, `elapsed_time` is expected to be non-decreasing
/// across snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Number of feasible solutions found so far.
    pub incumbent_count: u64,

    /// Objective of the best feasible solution.
    ///
    /// Meaningless when `incumbent_count` is zero.
    pub incumbent_objective: f64,

    /// Best proven bound on the optimal objective.
    ///
    /// May be infinite while no bound is known.
    pub best_bound: f64,

    /// Seconds since the optimizer started.
    pub elapsed_time: f64,
}

impl Progress {
    /// Creates a snapshot from all four reported values.
    ///
    /// With `incumbent_count == 0` the objective is ignored by [`gap`].
    /// Use [`without_incumbent`] to build such a snapshot without inventing
    /// an objective.
    ///
    /// [`gap`]: Progress::gap
    /// [`without_incumbent`]: Progress::without_incumbent
    #[must_use]
    pub fn new(
        incumbent_count: u64,
        incumbent_objective: f64,
        best_bound: f64,
        elapsed_time: f64,
    ) -> Self {
        Self {
            incumbent_count,
            incumbent_objective,
            best_bound,
            elapsed_time,
        }
    }

    /// Creates a snapshot for a run that has not found a feasible solution yet.
    #[must_use]
    pub fn without_incumbent(best_bound: f64, elapsed_time: f64) -> Self {
        Self {
            incumbent_count: 0,
            incumbent_objective: f64::NAN,
            best_bound,
            elapsed_time,
        }
    }

    /// Returns `true` if at least one feasible solution has been found.
    #[must_use]
    pub fn has_incumbent(&self) -> bool {
        self.incumbent_count > 0
    }

    /// Returns the relative gap, or `None` if there is no incumbent yet.
    ///
    /// See [`relative_gap`] for the formula.
    #[must_use]
    pub fn gap(&self) -> Option<f64> {
        self.has_incumbent()
            .then(|| relative_gap(self.incumbent_objective, self.best_bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn gap_is_relative_to_larger_magnitude() {
        assert_relative_eq!(relative_gap(100.0, 50.0), 0.5);
        assert_relative_eq!(relative_gap(100.0, 80.0), 0.2);
        assert_relative_eq!(relative_gap(-40.0, -50.0), 0.2);
    }

    #[test]
    fn gap_is_symmetric() {
        assert_relative_eq!(relative_gap(10.0, 8.0), relative_gap(8.0, 10.0));
    }

    #[test]
    fn zero_incumbent_and_bound_give_zero_gap() {
        let gap = relative_gap(0.0, 0.0);
        assert!(gap.is_finite());
        assert_eq!(gap, 0.0);
    }

    #[test]
    fn floor_guards_tiny_values() {
        // Both values below the floor: the floor is the denominator.
        assert_relative_eq!(relative_gap(1e-12, 0.0), 1e-2, epsilon = 1e-15);
    }

    #[test]
    fn infinite_bound_gives_nan() {
        assert!(relative_gap(10.0, f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn no_gap_without_incumbent() {
        let progress = Progress::without_incumbent(12.0, 3.0);
        assert!(!progress.has_incumbent());
        assert_eq!(progress.gap(), None);
    }

    #[test]
    fn gap_with_incumbent() {
        let progress = Progress::new(2, 100.0, 81.0, 79.0);
        assert_relative_eq!(progress.gap().unwrap(), 0.19);
    }
}
