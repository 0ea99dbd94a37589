//! Per-format measurement state machine.
//!
//! ```text
//! Idle --serialize()--> Serializing --deserialize()--> Deserializing --finish()--> Complete
//! ```
//!
//! The serialize pass encodes all N fixtures and keeps every payload; only
//! then does the deserialize pass decode them in order. The two loops are
//! timed separately and never interleaved.

use std::hint::black_box;
use std::marker::PhantomData;
use std::time::Duration;

use crate::codecs::Codec;
use crate::error::{BenchError, Result};
use crate::fixture::FixtureSource;
use crate::harness::{measure, millis};
use crate::schema::BenchmarkResult;

/// Progress of a [`FormatBench`]. Each state names the last pass completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Serializing,
    Deserializing,
    Complete,
}

pub struct FormatBench<'c, T, C> {
    label: String,
    codec: &'c mut C,
    iterations: usize,
    validate: bool,
    phase: Phase,
    payloads: Vec<Vec<u8>>,
    serialize_time: Duration,
    deserialize_time: Duration,
    mismatches: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<'c, T, C> FormatBench<'c, T, C>
where
    T: Clone,
    C: Codec<T>,
{
    pub fn new(label: impl Into<String>, codec: &'c mut C, iterations: usize) -> Self {
        Self {
            label: label.into(),
            codec,
            iterations,
            validate: true,
            phase: Phase::Idle,
            payloads: Vec::new(),
            serialize_time: Duration::ZERO,
            deserialize_time: Duration::ZERO,
            mismatches: 0,
            _marker: PhantomData,
        }
    }

    pub fn validate(mut self, on: bool) -> Self {
        self.validate = on;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Payloads retained by the serialize pass, indexed by iteration.
    pub fn payloads(&self) -> &[Vec<u8>] {
        &self.payloads
    }

    fn expect(&self, expected: Phase) -> Result<()> {
        if self.phase != expected {
            return Err(BenchError::Phase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Time `N × (fixture(i) → encode → store)`.
    pub fn serialize<S: FixtureSource<T>>(&mut self, source: &S) -> Result<()> {
        self.expect(Phase::Idle)?;

        let n = self.iterations;
        let codec = &mut *self.codec;
        let (payloads, elapsed) = measure(|| {
            let mut payloads = Vec::with_capacity(n);
            for i in 0..n {
                let fixture = source.fixture(i);
                payloads.push(codec.encode(&fixture)?);
            }
            Ok::<_, BenchError>(payloads)
        });

        self.payloads = payloads?;
        self.serialize_time = elapsed;
        self.phase = Phase::Serializing;
        Ok(())
    }

    /// Time `N × decode(payload[i])`, checking each value against `source`.
    pub fn deserialize<S: FixtureSource<T>>(&mut self, source: &S) -> Result<()> {
        self.expect(Phase::Serializing)?;

        let label = self.label.as_str();
        let validate = self.validate;
        let payloads = &self.payloads;
        let codec = &mut *self.codec;
        let (mismatches, elapsed) = measure(|| {
            let mut mismatches = 0u64;
            for (i, payload) in payloads.iter().enumerate() {
                let decoded = codec.decode(payload)?;
                if validate {
                    for m in source.check(i, &decoded) {
                        tracing::warn!(
                            format = label,
                            iteration = i,
                            field = %m.field,
                            expected = %m.expected,
                            actual = %m.actual,
                            "decoded value mismatch"
                        );
                        mismatches += 1;
                    }
                }
                black_box(decoded);
            }
            Ok::<_, BenchError>(mismatches)
        });

        self.mismatches = mismatches?;
        self.deserialize_time = elapsed;
        self.phase = Phase::Deserializing;
        Ok(())
    }

    /// Assemble the result and release the payloads.
    pub fn finish(mut self) -> Result<BenchmarkResult> {
        self.expect(Phase::Deserializing)?;
        self.phase = Phase::Complete;

        let mut result = BenchmarkResult::new(
            std::mem::take(&mut self.label),
            millis(self.serialize_time),
            millis(self.deserialize_time),
            self.iterations,
        );
        result.payload_bytes = self.payloads.iter().map(|p| p.len() as u64).sum();
        result.mismatches = self.mismatches;
        Ok(result)
    }

    /// Run all three steps.
    pub fn run<S: FixtureSource<T>>(mut self, source: &S) -> Result<BenchmarkResult> {
        self.serialize(source)?;
        self.deserialize(source)?;
        self.finish()
    }
}
