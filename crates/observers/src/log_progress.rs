use gapwatch_core::{Observer, Progress};

use crate::traits::HasProgress;

/// An observer that logs optimizer progress, then defers to another observer.
///
/// A line is logged at `info` level every `every` checkpoints:
///
/// ```text
/// Checkpoint: 12 | Incumbents: 3 | Bound: 7.400000e1 | Incumbent: 7.500000e1 | Gap: 1.33% | Time: 4.0s
/// ```
///
/// The wrapped observer sees every event and its action is returned unchanged.
/// Use `()` as the inner observer to only log.
#[derive(Debug, Clone)]
pub struct LogProgress<O> {
    inner: O,
    every: usize,
    seen: usize,
}

impl<O> LogProgress<O> {
    /// Wraps `inner`, logging every checkpoint.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            every: 1,
            seen: 0,
        }
    }

    /// Logs only every `every`-th checkpoint. Zero is treated as one.
    #[must_use]
    pub fn every(mut self, every: usize) -> Self {
        self.every = every.max(1);
        self
    }

    /// Returns a reference to the wrapped observer.
    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Returns `true` if the checkpoint just counted gets a log line.
    fn is_logged_checkpoint(&self) -> bool {
        self.seen % self.every == 0
    }

    /// Consumes the logger and returns the wrapped observer.
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<E, A, O> Observer<E, A> for LogProgress<O>
where
    E: HasProgress,
    O: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;
        if self.is_logged_checkpoint() {
            log::info!("{}", progress_line(self.seen, event.progress()));
        }
        self.inner.observe(event)
    }
}

fn progress_line(checkpoint: usize, progress: &Progress) -> String {
    let bound = progress.best_bound;
    let time = progress.elapsed_time;

    match progress.gap() {
        Some(gap) => format!(
            "Checkpoint: {checkpoint} | Incumbents: {} | Bound: {bound:.6e} | Incumbent: {:.6e} | Gap: {:.2}% | Time: {time:.1}s",
            progress.incumbent_count,
            progress.incumbent_objective,
            gap * 100.0,
        ),
        None => format!(
            "Checkpoint: {checkpoint} | Incumbents: 0 | Bound: {bound:.6e} | Incumbent: - | Gap: - | Time: {time:.1}s"
        ),
    }
}
