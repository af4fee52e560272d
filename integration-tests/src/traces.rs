//! Recorded-style progress traces for driving observers end to end.

use gapwatch_core::Progress;

/// A minimization trace whose gap drops from 0.5 to 0.1 at `change_at` and
/// then stays flat.
///
/// Checkpoints are emitted every `interval` seconds from `t = 0` up to and
/// including `until`. The incumbent is 100 throughout; the bound is 50 before
/// `change_at` and 90 from then on.
pub fn single_drop(change_at: f64, until: f64, interval: f64) -> Vec<Progress> {
    checkpoint_times(until, interval)
        .map(|time| {
            let bound = if time < change_at { 50.0 } else { 90.0 };
            Progress::new(1, 100.0, bound, time)
        })
        .collect()
}

/// A trace that has no incumbent for its whole duration.
pub fn no_incumbent(until: f64, interval: f64) -> Vec<Progress> {
    checkpoint_times(until, interval)
        .map(|time| Progress::without_incumbent(-1_000.0, time))
        .collect()
}

/// A trace whose bound closes in on the incumbent by a fixed step per
/// checkpoint, reaching a zero gap at the last one.
pub fn steady_close(steps: u32, interval: f64) -> Vec<Progress> {
    (0..=steps)
        .map(|i| {
            let remaining = f64::from(steps - i);
            Progress::new(
                u64::from(i) + 1,
                100.0,
                100.0 - remaining,
                f64::from(i) * interval,
            )
        })
        .collect()
}

fn checkpoint_times(until: f64, interval: f64) -> impl Iterator<Item = f64> {
    (0_u32..)
        .map(move |i| f64::from(i) * interval)
        .take_while(move |&time| time <= until)
}
