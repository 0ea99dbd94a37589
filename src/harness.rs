use std::time::{Duration, Instant};

use crate::codecs::BuilderStrategy;
use crate::dataset::LargeSource;
use crate::fixture::SmallFixtureMode;
use crate::FormatKind;

/// Large-dataset variants always run a single iteration.
pub const LARGE_ITERATIONS: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    /// Resource-constrained host (the in-app screen): 1,000 iterations.
    Embedded,
    /// Desktop/browser host: 10,000 iterations.
    Web,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Embedded => "embedded",
            Profile::Web => "web",
        }
    }

    pub fn iterations(&self) -> usize {
        match self {
            Profile::Embedded => 1_000,
            Profile::Web => 10_000,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub profile: Profile,
    /// Overrides the profile's iteration count for small-record variants.
    pub iterations: Option<usize>,
    pub seed: u64,
    pub fixture_mode: SmallFixtureMode,
    /// Check every decoded field against its fixture.
    pub validate: bool,
    pub builder: BuilderStrategy,
    /// Handed to the observer between formats; never part of a timed interval.
    pub pause: Duration,
    /// Formats to run, in declared order.
    pub formats: Vec<FormatKind>,
    /// `None` skips the large-dataset variants.
    pub large: Option<LargeSource>,
}

impl BenchConfig {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            iterations: None,
            seed: 0,
            fixture_mode: SmallFixtureMode::Constant,
            validate: true,
            builder: BuilderStrategy::Reuse,
            pause: Duration::ZERO,
            formats: FormatKind::ALL.to_vec(),
            large: None,
        }
    }

    pub fn iters(&self) -> usize {
        self.iterations.unwrap_or_else(|| self.profile.iterations())
    }
}

/// Run `f` once and return its output with the elapsed monotonic time.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Milliseconds with sub-millisecond precision.
pub fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_iteration_counts() {
        assert_eq!(Profile::Embedded.iterations(), 1_000);
        assert_eq!(Profile::Web.iterations(), 10_000);

        let mut cfg = BenchConfig::new(Profile::Web);
        assert_eq!(cfg.iters(), 10_000);
        cfg.iterations = Some(5);
        assert_eq!(cfg.iters(), 5);
    }

    #[test]
    fn measure_returns_output_and_elapsed() {
        let (v, elapsed) = measure(|| {
            std::thread::sleep(Duration::from_millis(2));
            41 + 1
        });
        assert_eq!(v, 42);
        assert!(elapsed >= Duration::from_millis(2));
        assert!(millis(elapsed) >= 2.0);
    }

    #[test]
    fn millis_keeps_fractions() {
        assert_eq!(millis(Duration::from_micros(1_500)), 1.5);
        assert_eq!(millis(Duration::ZERO), 0.0);
    }
}
