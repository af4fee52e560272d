//! Drives an iterative optimizer through observed checkpoints.
//!
//! An [`Optimizer`] advances its own search and reports a [`Progress`] at each
//! checkpoint. [`run`] forwards every checkpoint to an [`Observer`] as an
//! [`Event`], honors [`Action::Interrupt`] and the configured time limit, and
//! reports how the search ended as a [`Status`].
//!
//! # Observer Events
//!
//! The driver emits one [`Event`] per checkpoint, numbered from 1. The
//! observer runs on the optimizer's critical path: the optimizer does not
//! advance until `observe` returns.
//!
//! Interruption is cooperative. Returning [`Action::Interrupt`] stops the
//! driver before it asks the optimizer for another checkpoint, so the work
//! done after the decision is bounded by one checkpoint interval.
//!
//! [`Progress`]: gapwatch_core::Progress
//! [`Observer`]: gapwatch_core::Observer

mod action;
mod config;
mod error;
mod event;
mod optimizer;
mod outcome;
mod replay;
mod run;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use optimizer::{Finish, Optimizer, Step};
pub use outcome::{Outcome, Status};
pub use replay::Replay;
pub use run::{run, run_unobserved};
