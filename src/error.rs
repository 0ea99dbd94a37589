use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::runner::Phase;

/// Structural failures. Any of these aborts the current run.
///
/// Advisory data mismatches are not errors; they are logged and counted on
/// the [`BenchmarkResult`](crate::schema::BenchmarkResult).
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("MessagePack encode error: {0}")]
    MessagePackEncode(#[from] rmp_serde::encode::Error),

    #[error("MessagePack decode error: {0}")]
    MessagePackDecode(#[from] rmp_serde::decode::Error),

    #[error("FlatBuffers verification failed: {0}")]
    FlatBuffers(#[from] flatbuffers::InvalidFlatbuffer),

    #[error("Protobuf decode error: {0}")]
    ProtobufDecode(#[from] prost::DecodeError),

    #[error("{format} payload is missing required field `{field}`")]
    MissingField {
        format: &'static str,
        field: &'static str,
    },

    #[error("large fixture unavailable at {}: {source}", path.display())]
    FixtureUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("benchmark step out of order: expected {expected:?}, found {actual:?}")]
    Phase { expected: Phase, actual: Phase },

    #[error("a benchmark run is already in progress")]
    RunInProgress,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = BenchError> = std::result::Result<T, E>;
