//! Capability traits for cross-driver observers.
//!
//! These traits abstract over driver-specific event and action types, enabling
//! observers to work generically across different optimizer integrations.
//!
//! # Event traits
//!
//! - [`HasProgress`] — events that carry a [`Progress`] snapshot
//!
//! # Action traits
//!
//! - [`CanInterrupt`] — actions that can request early termination
//!
//! # Example
//!
//! ```rust
//! use gapwatch_core::Observer;
//! use gapwatch_observers::traits::{CanInterrupt, HasProgress};
//!
//! struct GapReached {
//!     target: f64,
//! }
//!
//! impl<E: HasProgress, A: CanInterrupt> Observer<E, A> for GapReached {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         match event.progress().gap() {
//!             Some(gap) if gap <= self.target => Some(A::interrupt()),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use gapwatch_core::Progress;
use gapwatch_search::{Action, Event};

/// An event that carries optimizer progress.
pub trait HasProgress {
    /// Returns the progress snapshot for this event.
    fn progress(&self) -> &Progress;
}

/// An action type that can request early termination.
pub trait CanInterrupt {
    /// Returns the action that interrupts the optimizer.
    fn interrupt() -> Self;
}

impl HasProgress for Progress {
    fn progress(&self) -> &Progress {
        self
    }
}

impl HasProgress for Event {
    fn progress(&self) -> &Progress {
        &self.progress
    }
}

impl CanInterrupt for Action {
    fn interrupt() -> Self {
        Self::Interrupt
    }
}
