/// Callback hook an optimizer driver calls at every checkpoint.
///
/// An optimizer reports its progress as an event of type `E`. The observer
/// inspects it and answers with `None` to let the search go on, or with
/// `Some(action)` to ask the driver for an action of type `A`, typically
/// interrupting the search.
///
/// The call happens synchronously between checkpoints, so the optimizer
/// waits until `observe` returns. Keep implementations cheap and free of I/O
/// other than logging. Cancellation is cooperative: the driver honors the
/// returned action at its next opportunity.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, which suits one-off
/// stopping rules. `()` is the observer that never intervenes.
pub trait Observer<E, A> {
    /// Inspects one checkpoint event and returns the requested action, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Closures act as observers, carrying their own captured state.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Never intervenes; used by the `*_unobserved` driver entry points.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
