use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Codec;
use crate::error::Result;

/// Compact binary map encoding via `rmp-serde`.
///
/// Structs are written as maps keyed by field name, the same shape a
/// dynamically-typed MessagePack encoder produces for an object.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessagePackCodec;

impl<T: Serialize + DeserializeOwned> Codec<T> for MessagePackCodec {
    fn name(&self) -> &'static str {
        "MessagePack"
    }

    fn encode(&mut self, value: &T) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(value)?)
    }

    fn decode(&mut self, payload: &[u8]) -> Result<T> {
        Ok(rmp_serde::from_slice(payload)?)
    }
}
