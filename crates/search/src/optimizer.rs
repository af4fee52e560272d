use gapwatch_core::Progress;

/// How an optimizer finished on its own, without being interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// The search proved optimality.
    Optimal,

    /// The search ended without a usable solution (infeasible, unbounded,
    /// or any other terminal state).
    NoSolution,
}

/// The result of advancing an optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// The optimizer reached a checkpoint and reports its progress.
    Checkpoint(Progress),

    /// The optimizer finished its search.
    Finished(Finish),
}

/// An iterative optimizer that reports progress at checkpoints.
///
/// The optimizer owns its search; the driver only asks it to advance to the
/// next checkpoint. Stopping early is done by not calling [`advance`] again.
///
/// [`advance`]: Optimizer::advance
pub trait Optimizer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs the search until the next checkpoint or until it finishes.
    ///
    /// Within one run, checkpoints must report a non-decreasing
    /// `elapsed_time`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the search fails.
    fn advance(&mut self) -> Result<Step, Self::Error>;
}

impl<T: Optimizer + ?Sized> Optimizer for &mut T {
    type Error = T::Error;

    fn advance(&mut self) -> Result<Step, Self::Error> {
        (**self).advance()
    }
}
