use gapwatch_core::Progress;

/// Event emitted by the driver at each optimizer checkpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Checkpoint number, starting at 1.
    pub checkpoint: usize,

    /// Progress reported by the optimizer at this checkpoint.
    pub progress: Progress,
}
