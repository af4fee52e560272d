use std::convert::Infallible;

use gapwatch_core::Progress;

use crate::{Finish, Optimizer, Step};

/// An optimizer that replays recorded checkpoints.
///
/// Each call to [`advance`] yields the next recorded [`Progress`]. Once the
/// recording is exhausted, the replay finishes with the configured [`Finish`].
///
/// Useful for testing observers against solver logs and for reproducing a
/// termination decision offline.
///
/// [`advance`]: Optimizer::advance
#[derive(Debug, Clone)]
pub struct Replay {
    checkpoints: std::vec::IntoIter<Progress>,
    finish: Finish,
}

impl Replay {
    /// Creates a replay of `checkpoints` that ends with `finish`.
    pub fn new(checkpoints: impl IntoIterator<Item = Progress>, finish: Finish) -> Self {
        Self {
            checkpoints: checkpoints.into_iter().collect::<Vec<_>>().into_iter(),
            finish,
        }
    }

    /// Returns the number of checkpoints not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.checkpoints.len()
    }
}

impl Optimizer for Replay {
    type Error = Infallible;

    fn advance(&mut self) -> Result<Step, Self::Error> {
        Ok(self
            .checkpoints
            .next()
            .map_or(Step::Finished(self.finish), Step::Checkpoint))
    }
}
