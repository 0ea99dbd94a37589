use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Codec;
use crate::error::Result;

/// Textual object notation via `serde_json`. The payload is UTF-8 text.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl<T: Serialize + DeserializeOwned> Codec<T> for JsonCodec {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn encode(&mut self, value: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(value)?)
    }

    fn decode(&mut self, payload: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::SmallRecord;

    #[test]
    fn payload_is_object_text() {
        let mut codec = JsonCodec;
        let rec = SmallRecord {
            foo: "bar".to_string(),
            foo_number: 3,
        };
        let bytes = codec.encode(&rec).unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"foo":"bar","foo_number":3}"#
        );
        let back: SmallRecord = codec.decode(&bytes).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn truncated_payload_is_an_error() {
        let mut codec = JsonCodec;
        let res: Result<SmallRecord> = codec.decode(br#"{"foo":"ba"#);
        assert!(res.is_err());
    }
}
