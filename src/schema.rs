use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub bench_version: String,
    pub profile: String,
    pub iterations: usize,
    pub seed: u64,
    pub timestamp_utc: String,
    pub git_sha: Option<String>,
}

/// Timing for one format in one run.
///
/// `total_time_ms` is always the sum of the two measured phases, never a
/// separate reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub format: String,
    pub serialize_time_ms: f64,
    pub deserialize_time_ms: f64,
    pub total_time_ms: f64,
    pub iterations: usize,

    /// Summed length of every payload from the serialize pass.
    pub payload_bytes: u64,
    /// Advisory validation failures seen during the deserialize pass.
    pub mismatches: u64,
}

impl BenchmarkResult {
    pub fn new(
        format: impl Into<String>,
        serialize_time_ms: f64,
        deserialize_time_ms: f64,
        iterations: usize,
    ) -> Self {
        Self {
            format: format.into(),
            serialize_time_ms,
            deserialize_time_ms,
            total_time_ms: serialize_time_ms + deserialize_time_ms,
            iterations,
            payload_bytes: 0,
            mismatches: 0,
        }
    }

    /// `total / (iterations * 2)`; `None` for single-iteration runs, where a
    /// per-operation figure would be misleading.
    pub fn average_per_op_ms(&self) -> Option<f64> {
        (self.iterations > 1).then(|| self.total_time_ms / (self.iterations as f64 * 2.0))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecBenchReport {
    pub run: RunMeta,
    pub results: Vec<BenchmarkResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_exact_sum() {
        let r = BenchmarkResult::new("JSON", 0.1, 0.2, 10);
        assert_eq!(r.total_time_ms, 0.1 + 0.2);
    }

    #[test]
    fn average_needs_more_than_one_iteration() {
        let r = BenchmarkResult::new("JSON", 3.0, 1.0, 1_000);
        assert_eq!(r.average_per_op_ms(), Some(0.002));

        let single = BenchmarkResult::new("JSON (Large)", 30.0, 20.0, 1);
        assert_eq!(single.average_per_op_ms(), None);

        let none = BenchmarkResult::new("JSON", 0.0, 0.0, 0);
        assert_eq!(none.average_per_op_ms(), None);
    }

    #[test]
    fn report_serializes_snake_case() {
        let report = CodecBenchReport {
            run: RunMeta {
                schema_version: 1,
                bench_version: "0.0.0".to_string(),
                profile: "embedded".to_string(),
                iterations: 1_000,
                seed: 0,
                timestamp_utc: "unix:0".to_string(),
                git_sha: None,
            },
            results: vec![BenchmarkResult::new("MessagePack", 1.0, 2.0, 1_000)],
        };
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["results"][0]["format"], "MessagePack");
        assert_eq!(v["results"][0]["total_time_ms"], 3.0);
        assert_eq!(v["run"]["profile"], "embedded");
    }
}
