use std::fmt;

use gapwatch_core::Progress;

/// Indicates how a driven optimizer run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The optimizer proved optimality.
    Optimal,

    /// A checkpoint reached the configured time limit.
    TimeLimitReached,

    /// Stopped early due to an observer decision.
    InterruptedByCallback,

    /// The optimizer finished without a usable solution.
    Other,
}

impl Status {
    /// Returns a human-readable description of the status.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Optimal => "optimal solution found",
            Self::TimeLimitReached => "time limit reached, solution not proven optimal",
            Self::InterruptedByCallback => "optimization interrupted by callback",
            Self::Other => "no solution found or other optimizer state",
        }
    }

    /// Returns `true` if the run stopped before proving optimality.
    #[must_use]
    pub fn is_early(self) -> bool {
        matches!(self, Self::TimeLimitReached | Self::InterruptedByCallback)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The result of a driven optimizer run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// How the run ended.
    pub status: Status,

    /// Progress at the last checkpoint, if any checkpoint was reported.
    pub last: Option<Progress>,

    /// Number of checkpoints reported by the optimizer.
    pub checkpoints: usize,
}

impl Outcome {
    /// Returns the relative gap at the last checkpoint.
    ///
    /// Returns `None` if no checkpoint was reported or the last checkpoint had
    /// no incumbent.
    #[must_use]
    pub fn gap(&self) -> Option<f64> {
        self.last.as_ref().and_then(Progress::gap)
    }
}
