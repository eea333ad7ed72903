//! Scoped timing for the "start a clock, run a block, read the clock" pattern around each puzzle part.

use std::time::{Duration, Instant};

use tracing::{debug, info_span};

/// The value produced by a block passed to [`timed`], with how long it took.
#[derive(Clone, Copy, Debug)]
pub struct Timed<T> {
    /// What the block returned.
    pub value: T,
    /// Wall time spent in the block.
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Transform the value, keeping the measured time.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }

    /// Whole milliseconds elapsed.
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

impl<T, E> Timed<Result<T, E>> {
    /// Lift a fallible block's error out, keeping the measured time on success.
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let elapsed = self.elapsed;
        self.value.map(|value| Timed { value, elapsed })
    }
}

/// Run `block` inside a span named after `label` and measure it.
pub fn timed<T>(label: &str, block: impl FnOnce() -> T) -> Timed<T> {
    let span = info_span!("timed", label);
    let _guard = span.enter();

    let now = Instant::now();
    let value = block();
    let elapsed = now.elapsed();

    debug!(seconds = elapsed.as_secs_f64(), "finished");
    Timed { value, elapsed }
}
