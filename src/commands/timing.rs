//! Per-stage wall clock timing for the build command.

use log::debug;
use std::time::{Duration, Instant};

/// Measures the time between successive stages of a run
///
/// Every lap is logged at debug level; laps are also printed to stdout
/// when the timer was created with `print` set.
#[derive(Debug)]
pub struct StageTimer {
    print: bool,
    start: Instant,
    last: Instant,
}

impl StageTimer {
    pub fn new(print: bool) -> Self {
        let now = Instant::now();
        Self {
            print,
            start: now,
            last: now,
        }
    }

    /// Close the current stage and start the next one
    pub fn lap(&mut self, stage: &str) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;

        debug!("{} took {:.6}s", stage, elapsed.as_secs_f64());
        if self.print {
            println!("Time elapsed {}: {:.6}\n", stage, elapsed.as_secs_f64());
        }

        elapsed
    }

    /// Time since the timer was created
    pub fn total(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn print_total(&self) {
        if self.print {
            println!("Total time: {:.6}\n", self.total().as_secs_f64());
        }
    }
}
