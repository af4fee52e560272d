use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while driving an optimizer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("optimizer error: {0}")]
    Optimizer(#[source] Box<dyn StdError + Send + Sync>),

    #[error("checkpoint {checkpoint} reported invalid elapsed time {elapsed_time}")]
    InvalidTime { checkpoint: usize, elapsed_time: f64 },

    #[error("checkpoint {checkpoint} went back in time: {previous}s then {current}s")]
    NonMonotonicTime {
        checkpoint: usize,
        previous: f64,
        current: f64,
    },
}

impl Error {
    pub(crate) fn optimizer<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Optimizer(Box::new(err))
    }
}
