//! One "Run Performance Tests" action: every selected format, in declared
//! order, one at a time.

use std::time::Duration;

use crate::benches::{large, small};
use crate::dataset::{LargeDataset, LargeSource};
use crate::error::{BenchError, Result};
use crate::harness::BenchConfig;
use crate::schema::BenchmarkResult;
use crate::FormatKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Small,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub format: FormatKind,
    pub variant: Variant,
}

/// Execution order for a config: small variants in declared format order,
/// then the large variants in the same order.
pub fn plan(cfg: &BenchConfig) -> Vec<Scenario> {
    let formats: Vec<FormatKind> = FormatKind::ALL
        .into_iter()
        .filter(|f| cfg.formats.contains(f))
        .collect();

    let small = formats.iter().map(|&format| Scenario {
        format,
        variant: Variant::Small,
    });
    let large = formats
        .iter()
        .filter(|_| cfg.large.is_some())
        .map(|&format| Scenario {
            format,
            variant: Variant::Large,
        });
    small.chain(large).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    /// The run aborted; no partial results are kept.
    Failed(String),
}

/// The control that starts a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    Enabled,
    Disabled,
}

impl TriggerState {
    pub fn label(&self) -> &'static str {
        match self {
            TriggerState::Enabled => "Run Performance Tests",
            TriggerState::Disabled => "Running Tests...",
        }
    }
}

/// Receives progress from a [`Session`].
pub trait RunObserver {
    fn on_state(&mut self, _state: &RunState, _trigger: TriggerState) {}

    /// Called after each format with every result so far.
    fn on_result(&mut self, _results: &[BenchmarkResult]) {}

    /// Yield point between formats, outside all timed intervals.
    fn repaint(&mut self, pause: Duration) {
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }
}

/// Observer that only honours the repaint pause.
pub struct Silent;

impl RunObserver for Silent {}

pub struct Session {
    config: BenchConfig,
    results: Vec<BenchmarkResult>,
    state: RunState,
    dataset: Option<LargeDataset>,
}

impl Session {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            results: Vec::new(),
            state: RunState::Idle,
            dataset: None,
        }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn trigger(&self) -> TriggerState {
        match self.state {
            RunState::Running => TriggerState::Disabled,
            _ => TriggerState::Enabled,
        }
    }

    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    fn set_state(&mut self, state: RunState, observer: &mut dyn RunObserver) {
        self.state = state;
        observer.on_state(&self.state, self.trigger());
    }

    /// Execute one run. Previous results are discarded first.
    ///
    /// A codec or fixture failure aborts the run: the error is returned, the
    /// partial results are dropped and the state becomes
    /// [`RunState::Failed`].
    pub fn run(&mut self, observer: &mut dyn RunObserver) -> Result<&[BenchmarkResult]> {
        if self.state == RunState::Running {
            return Err(BenchError::RunInProgress);
        }

        self.results.clear();
        self.set_state(RunState::Running, observer);
        tracing::info!(
            profile = self.config.profile.as_str(),
            iterations = self.config.iters(),
            large = self.config.large.is_some(),
            "starting run"
        );

        match self.execute(observer) {
            Ok(()) => {
                tracing::info!(formats = self.results.len(), "run complete");
                self.set_state(RunState::Completed, observer);
                Ok(&self.results)
            }
            Err(e) => {
                tracing::error!(error = %e, "run failed; discarding partial results");
                self.results.clear();
                self.set_state(RunState::Failed(e.to_string()), observer);
                Err(e)
            }
        }
    }

    fn execute(&mut self, observer: &mut dyn RunObserver) -> Result<()> {
        for (idx, scenario) in plan(&self.config).into_iter().enumerate() {
            if idx > 0 {
                observer.repaint(self.config.pause);
            }

            let result = match (scenario.variant, &self.config.large) {
                (Variant::Large, Some(source)) => {
                    let dataset = ensure_dataset(&mut self.dataset, source)?;
                    large::run(&self.config, scenario.format, dataset)?
                }
                _ => small::run(&self.config, scenario.format)?,
            };

            tracing::info!(
                format = %result.format,
                serialize_ms = result.serialize_time_ms,
                deserialize_ms = result.deserialize_time_ms,
                mismatches = result.mismatches,
                "format complete"
            );
            self.results.push(result);
            observer.on_result(&self.results);
        }
        Ok(())
    }
}

/// Load the large dataset on first use; later runs reuse it.
fn ensure_dataset<'a>(
    slot: &'a mut Option<LargeDataset>,
    source: &LargeSource,
) -> Result<&'a LargeDataset> {
    let dataset = match slot.take() {
        Some(ds) => ds,
        None => {
            tracing::info!(?source, "waiting for large dataset");
            source.load()?
        }
    };
    Ok(slot.insert(dataset))
}
