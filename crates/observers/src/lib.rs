//! Reusable observers for gapwatch.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across optimizer drivers.
//!
//! # Modules
//!
//! - [`stall`] — [`StallMonitor`], which interrupts a search once the relative
//!   gap has stopped moving for longer than a configured timeout
//! - [`traits`] — Capability traits for cross-driver observers
//!   ([`HasProgress`], [`CanInterrupt`])
//!
//! [`LogProgress`] wraps any observer and logs a progress line per checkpoint
//! through the [`log`] facade.
//!
//! # Features
//!
//! - `serde` — Enables deserializing [`stall::Config`] (with validation) and
//!   [`Progress`] from configuration files or solver logs.
//!
//! [`Observer`]: gapwatch_core::Observer
//! [`Progress`]: gapwatch_core::Progress
//! [`HasProgress`]: traits::HasProgress
//! [`CanInterrupt`]: traits::CanInterrupt

mod log_progress;

pub mod stall;
pub mod traits;

pub use log_progress::LogProgress;
pub use stall::StallMonitor;
