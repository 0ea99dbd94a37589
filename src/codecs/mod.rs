//! Codec adapters, one per format under test.
//!
//! Every adapter decodes into an owned value. For formats with lazy field
//! access this forces each measured field to be read inside the timed loop.

pub mod flatbuf;
pub mod json;
pub mod msgpack;
pub mod protobuf;

mod record_generated;

pub use self::flatbuf::{BuilderStrategy, FlatBuffersCodec};
pub use self::json::JsonCodec;
pub use self::msgpack::MessagePackCodec;
pub use self::protobuf::ProtobufCodec;

use crate::error::Result;

pub trait Codec<T> {
    /// Unique label shown in results.
    fn name(&self) -> &'static str;

    /// Encode into a payload owned by the caller.
    ///
    /// Implementations that reuse an internal buffer must copy it out; the
    /// returned bytes may not alias state touched by later calls.
    fn encode(&mut self, value: &T) -> Result<Vec<u8>>;

    fn decode(&mut self, payload: &[u8]) -> Result<T>;
}
