//! Gap-stall termination on a synthetic branch-and-bound run.
//!
//! The synthetic search mimics a maximization MIP: incumbents improve quickly
//! at first, the bound tightens geometrically, and then both plateau well
//! before the gap closes. The stall monitor interrupts the run once the gap
//! has not moved for the configured timeout.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run --example stall
//! RUST_LOG=info cargo run --example stall -- 20
//! ```
//!
//! The optional argument is the stall timeout in seconds (default 50).

use std::{convert::Infallible, error::Error};

use gapwatch_core::Progress;
use gapwatch_observers::{LogProgress, StallMonitor, stall};
use gapwatch_search::{Config, Finish, Optimizer, Step, run};

/// Seconds of search time between checkpoints.
const CHECKPOINT_INTERVAL: f64 = 2.5;

/// A maximization search whose gap stops closing at about 1.6 %.
struct PlateauSearch {
    time: f64,
    incumbent: Option<f64>,
    incumbents: u64,
    bound: f64,
}

impl PlateauSearch {
    const OPTIMUM: f64 = 1_000.0;
    const PLATEAU_BOUND: f64 = 1_008.0;
    const PLATEAU_INCUMBENT: f64 = 992.0;

    fn new() -> Self {
        Self {
            time: 0.0,
            incumbent: None,
            incumbents: 0,
            bound: 1_500.0,
        }
    }
}

impl Optimizer for PlateauSearch {
    type Error = Infallible;

    fn advance(&mut self) -> Result<Step, Self::Error> {
        self.time += CHECKPOINT_INTERVAL;

        if self.time > 3_600.0 {
            return Ok(Step::Finished(Finish::Optimal));
        }

        // The bound tightens by 10 % of the remaining slack per checkpoint.
        let slack = self.bound - Self::OPTIMUM;
        self.bound = (self.bound - 0.1 * slack).max(Self::PLATEAU_BOUND);

        // A first incumbent appears after 10 s; later ones close half the
        // remaining distance to the plateau every 15 s.
        if self.time >= 10.0 {
            let next = match self.incumbent {
                None => Some(600.0),
                Some(value) if self.time % 15.0 < CHECKPOINT_INTERVAL => {
                    Some(value + 0.5 * (Self::PLATEAU_INCUMBENT - value))
                }
                Some(_) => None,
            };
            if next.is_some() {
                self.incumbent = next;
                self.incumbents += 1;
            }
        }

        let progress = match self.incumbent {
            Some(value) => Progress::new(self.incumbents, value, self.bound, self.time),
            None => Progress::without_incumbent(self.bound, self.time),
        };
        Ok(Step::Checkpoint(progress))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stall_timeout = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(50.0);

    let mut monitor = StallMonitor::new(stall::Config::new(stall_timeout, 1e-4)?);
    let observer = LogProgress::new(&mut monitor).every(8);

    let outcome = run(
        PlateauSearch::new(),
        &Config::with_time_limit(1_800.0)?,
        observer,
    )?;

    println!("status: {}", outcome.status);
    println!("checkpoints: {}", outcome.checkpoints);
    if let Some(gap) = outcome.gap() {
        println!("final gap: {:.3}%", gap * 100.0);
    }
    if let Some(stall) = monitor.stall() {
        println!("{stall}");
    }

    Ok(())
}
