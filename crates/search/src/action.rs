/// Control actions an observer can request from the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Terminate the optimizer at the current checkpoint.
    ///
    /// The run ends with [`Status::InterruptedByCallback`] and keeps the
    /// best incumbent found so far, which may be suboptimal.
    ///
    /// [`Status::InterruptedByCallback`]: crate::Status::InterruptedByCallback
    Interrupt,
}
