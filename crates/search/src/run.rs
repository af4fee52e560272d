use gapwatch_core::{Observer, Progress};

use crate::{Action, Config, Error, Event, Finish, Optimizer, Outcome, Status, Step};

/// Runs an optimizer, forwarding each checkpoint to an observer.
///
/// # Algorithm
///
/// 1. Advance the optimizer to its next checkpoint.
/// 2. Validate the checkpoint's elapsed time (finite, non-negative, and not
///    earlier than the previous checkpoint).
/// 3. If the time limit has been reached, stop with
///    [`Status::TimeLimitReached`] before the observer sees the checkpoint.
/// 4. Emit an [`Event`] to the observer. If it returns
///    [`Action::Interrupt`], stop with [`Status::InterruptedByCallback`].
/// 5. Repeat until the optimizer finishes on its own, which maps
///    [`Finish::Optimal`] to [`Status::Optimal`] and [`Finish::NoSolution`]
///    to [`Status::Other`].
///
/// # Errors
///
/// Returns an error if the optimizer fails or reports an invalid elapsed time.
pub fn run<Opt, Obs>(
    mut optimizer: Opt,
    config: &Config,
    mut observer: Obs,
) -> Result<Outcome, Error>
where
    Opt: Optimizer,
    Obs: Observer<Event, Action>,
{
    let mut last: Option<Progress> = None;
    let mut checkpoints = 0;

    loop {
        let progress = match optimizer.advance().map_err(Error::optimizer)? {
            Step::Checkpoint(progress) => progress,
            Step::Finished(finish) => {
                let status = match finish {
                    Finish::Optimal => Status::Optimal,
                    Finish::NoSolution => Status::Other,
                };
                log::debug!("optimizer finished after {checkpoints} checkpoints: {status}");
                return Ok(Outcome {
                    status,
                    last,
                    checkpoints,
                });
            }
        };

        checkpoints += 1;
        validate_time(checkpoints, last.as_ref(), &progress)?;
        last = Some(progress);

        if config.time_limit_reached(progress.elapsed_time) {
            log::warn!(
                "time limit reached at checkpoint {checkpoints} after {}s",
                progress.elapsed_time
            );
            return Ok(Outcome {
                status: Status::TimeLimitReached,
                last,
                checkpoints,
            });
        }

        let event = Event {
            checkpoint: checkpoints,
            progress,
        };

        if let Some(Action::Interrupt) = observer.observe(&event) {
            log::debug!("observer interrupted the optimizer at checkpoint {checkpoints}");
            return Ok(Outcome {
                status: Status::InterruptedByCallback,
                last,
                checkpoints,
            });
        }
    }
}

/// Runs an optimizer without observation.
///
/// This is a convenience wrapper around [`run`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the optimizer fails or reports an invalid elapsed time.
pub fn run_unobserved<Opt: Optimizer>(optimizer: Opt, config: &Config) -> Result<Outcome, Error> {
    run(optimizer, config, ())
}

/// Checks that a checkpoint's elapsed time is usable and monotonic.
fn validate_time(
    checkpoint: usize,
    previous: Option<&Progress>,
    current: &Progress,
) -> Result<(), Error> {
    let elapsed_time = current.elapsed_time;

    if !elapsed_time.is_finite() || elapsed_time < 0.0 {
        return Err(Error::InvalidTime {
            checkpoint,
            elapsed_time,
        });
    }

    if let Some(previous) = previous {
        if elapsed_time < previous.elapsed_time {
            return Err(Error::NonMonotonicTime {
                checkpoint,
                previous: previous.elapsed_time,
                current: elapsed_time,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use thiserror::Error;

    use crate::Replay;

    fn trace() -> Vec<Progress> {
        vec![
            Progress::without_incumbent(50.0, 0.0),
            Progress::new(1, 100.0, 50.0, 1.0),
            Progress::new(2, 90.0, 60.0, 2.0),
            Progress::new(3, 80.0, 70.0, 3.0),
            Progress::new(4, 75.0, 74.0, 4.0),
        ]
    }

    #[test]
    fn finishes_with_optimizer_status() {
        let outcome =
            run_unobserved(Replay::new(trace(), Finish::Optimal), &Config::default()).unwrap();

        assert_eq!(outcome.status, Status::Optimal);
        assert_eq!(outcome.checkpoints, 5);
        assert_eq!(outcome.last, Some(Progress::new(4, 75.0, 74.0, 4.0)));

        let outcome =
            run_unobserved(Replay::new(trace(), Finish::NoSolution), &Config::default()).unwrap();
        assert_eq!(outcome.status, Status::Other);
    }

    #[test]
    fn observer_can_interrupt() {
        let observer = |event: &Event| {
            if event.progress.incumbent_count >= 2 {
                Some(Action::Interrupt)
            } else {
                None
            }
        };

        let outcome = run(
            Replay::new(trace(), Finish::Optimal),
            &Config::default(),
            observer,
        )
        .unwrap();

        assert_eq!(outcome.status, Status::InterruptedByCallback);
        assert_eq!(outcome.checkpoints, 3);
        assert_eq!(outcome.last.map(|p| p.incumbent_objective), Some(90.0));
    }

    #[test]
    fn interrupt_stops_advancing() {
        let mut replay = Replay::new(trace(), Finish::Optimal);

        let outcome = run(&mut replay, &Config::default(), |_: &Event| {
            Some(Action::Interrupt)
        })
        .unwrap();

        assert_eq!(outcome.checkpoints, 1);
        assert_eq!(replay.remaining(), 4);
    }

    #[test]
    fn checkpoints_start_at_one() {
        let mut seen = Vec::new();
        run(
            Replay::new(trace(), Finish::Optimal),
            &Config::default(),
            |event: &Event| {
                seen.push(event.checkpoint);
                None
            },
        )
        .unwrap();

        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn time_limit_preempts_observer() {
        let config = Config::with_time_limit(3.0).unwrap();

        let mut observed = Vec::new();
        let outcome = run(
            Replay::new(trace(), Finish::Optimal),
            &config,
            |event: &Event| {
                observed.push(event.progress.elapsed_time);
                None
            },
        )
        .unwrap();

        assert_eq!(outcome.status, Status::TimeLimitReached);
        assert_eq!(outcome.checkpoints, 4);
        assert_eq!(observed, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn rejects_time_going_backwards() {
        let checkpoints = vec![
            Progress::new(1, 10.0, 5.0, 2.0),
            Progress::new(1, 10.0, 6.0, 1.5),
        ];

        let error = run_unobserved(Replay::new(checkpoints, Finish::Optimal), &Config::default())
            .unwrap_err();

        assert!(matches!(
            error,
            Error::NonMonotonicTime {
                checkpoint: 2,
                previous,
                current,
            } if previous == 2.0 && current == 1.5
        ));
    }

    #[test]
    fn rejects_non_finite_time() {
        let checkpoints = vec![Progress::new(1, 10.0, 5.0, f64::NAN)];

        let error = run_unobserved(Replay::new(checkpoints, Finish::Optimal), &Config::default())
            .unwrap_err();

        assert!(matches!(error, Error::InvalidTime { checkpoint: 1, .. }));
    }

    #[test]
    fn rejects_negative_time() {
        let checkpoints = vec![Progress::new(1, 10.0, 5.0, -1.0)];

        let error = run_unobserved(Replay::new(checkpoints, Finish::Optimal), &Config::default())
            .unwrap_err();

        assert!(matches!(
            error,
            Error::InvalidTime {
                checkpoint: 1,
                elapsed_time,
            } if elapsed_time == -1.0
        ));
    }

    #[derive(Debug, Error)]
    #[error("solver crashed")]
    struct Crash;

    struct Crashing;

    impl Optimizer for Crashing {
        type Error = Crash;

        fn advance(&mut self) -> Result<Step, Self::Error> {
            Err(Crash)
        }
    }

    #[test]
    fn wraps_optimizer_errors() {
        let error = run_unobserved(Crashing, &Config::default()).unwrap_err();

        assert!(matches!(error, Error::Optimizer(_)));
        assert_eq!(error.to_string(), "optimizer error: solver crashed");
    }
}
