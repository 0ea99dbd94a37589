use clap::ValueEnum;

pub mod benches;
pub mod codecs;
pub mod dataset;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod report;
pub mod runner;
pub mod schema;
pub mod session;

pub use error::{BenchError, Result};

/// Data-interchange format to benchmark.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Textual object notation (serde_json).
    Json,
    /// Compact binary map encoding (rmp-serde).
    #[value(name = "msgpack")]
    MessagePack,
    /// Zero-copy table encoding with a compiled schema (flatbuffers).
    #[value(name = "flatbuffers")]
    FlatBuffers,
    /// Schema-based binary encoding (prost).
    Protobuf,
}

impl FormatKind {
    /// Declared execution order.
    pub const ALL: [FormatKind; 4] = [
        FormatKind::Json,
        FormatKind::MessagePack,
        FormatKind::FlatBuffers,
        FormatKind::Protobuf,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormatKind::Json => "JSON",
            FormatKind::MessagePack => "MessagePack",
            FormatKind::FlatBuffers => "FlatBuffers",
            FormatKind::Protobuf => "Protobuf",
        }
    }
}
