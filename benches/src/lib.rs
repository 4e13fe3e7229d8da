// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing helpers shared by the Bramble benchmarks.

use std::time::{Duration, Instant};

/// Run `work` once and return the elapsed wall-clock time.
pub fn time_once<F: FnMut()>(mut work: F) -> Duration {
    let start = Instant::now();
    work();
    start.elapsed()
}

/// Run `work` `trials` times and return the mean elapsed time per trial.
pub fn time_avg<F: FnMut()>(trials: u32, mut work: F) -> Duration {
    assert!(trials > 0, "at least one trial is required");
    let mut total = Duration::ZERO;
    for _ in 0..trials {
        let start = Instant::now();
        work();
        total += start.elapsed();
    }
    total / trials
}

#[cfg(test)]
mod tests {
    use super::{time_avg, time_once};

    #[test]
    fn timers_run_the_workload() {
        let mut runs = 0;
        let _ = time_once(|| runs += 1);
        assert_eq!(runs, 1);
        let _ = time_avg(5, || runs += 1);
        assert_eq!(runs, 6);
    }
}
