use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use jiff::SignedDuration;
use tracing::debug;

/// Times one solver run, labelled with `name` in the debug report.
pub struct Stopwatch<'a> {
    start_time: Instant,
    name: &'a str,
}

impl<'a> Stopwatch<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            start_time: Instant::now(),
            name,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Elapsed time as reported in results, saturating on overflow.
    pub fn signed_elapsed(&self) -> SignedDuration {
        SignedDuration::try_from(self.elapsed()).unwrap_or(SignedDuration::MAX)
    }

    pub fn report(&self) {
        debug!("{}", self);
    }
}

impl Display for Stopwatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] took {}ms", self.name, self.elapsed().as_secs_f64() * 1000.0)
    }
}
