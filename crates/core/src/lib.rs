//! Core traits and types for observing iterative optimizers.
//!
//! This crate defines the shared abstractions that optimizer drivers and
//! observers build on:
//!
//! - [`Observer`] — receives optimizer events and optionally returns control actions
//! - [`Progress`] — a progress snapshot emitted at each optimizer checkpoint
//! - [`relative_gap`] — the relative optimality gap between an incumbent and a bound

mod observer;
mod progress;

pub use observer::Observer;
pub use progress::{GAP_FLOOR, Progress, relative_gap};
