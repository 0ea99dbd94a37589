use prost::Message;

use super::Codec;
use crate::dataset::{Friend, LargeDataset, Person};
use crate::error::Result;
use crate::fixture::SmallRecord;

#[derive(Clone, PartialEq, Message)]
pub struct RecordProto {
    #[prost(string, tag = "1")]
    pub foo: String,
    #[prost(int32, tag = "2")]
    pub foo_number: i32,
}

#[derive(Clone, PartialEq, Message)]
pub struct FriendProto {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct PersonProto {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(string, tag = "2")]
    pub guid: String,
    #[prost(bool, tag = "3")]
    pub is_active: bool,
    #[prost(double, tag = "4")]
    pub balance: f64,
    #[prost(uint32, tag = "5")]
    pub age: u32,
    #[prost(string, tag = "6")]
    pub name: String,
    #[prost(string, tag = "7")]
    pub email: String,
    #[prost(string, tag = "8")]
    pub company: String,
    #[prost(double, tag = "9")]
    pub latitude: f64,
    #[prost(double, tag = "10")]
    pub longitude: f64,
    #[prost(string, repeated, tag = "11")]
    pub tags: Vec<String>,
    #[prost(message, repeated, tag = "12")]
    pub friends: Vec<FriendProto>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DatasetProto {
    #[prost(message, repeated, tag = "1")]
    pub people: Vec<PersonProto>,
}

impl From<&SmallRecord> for RecordProto {
    fn from(r: &SmallRecord) -> Self {
        Self {
            foo: r.foo.clone(),
            foo_number: r.foo_number,
        }
    }
}

impl From<RecordProto> for SmallRecord {
    fn from(r: RecordProto) -> Self {
        Self {
            foo: r.foo,
            foo_number: r.foo_number,
        }
    }
}

impl From<&Person> for PersonProto {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id,
            guid: p.guid.clone(),
            is_active: p.is_active,
            balance: p.balance,
            age: p.age,
            name: p.name.clone(),
            email: p.email.clone(),
            company: p.company.clone(),
            latitude: p.latitude,
            longitude: p.longitude,
            tags: p.tags.clone(),
            friends: p
                .friends
                .iter()
                .map(|f| FriendProto {
                    id: f.id,
                    name: f.name.clone(),
                })
                .collect(),
        }
    }
}

impl From<PersonProto> for Person {
    fn from(p: PersonProto) -> Self {
        Self {
            id: p.id,
            guid: p.guid,
            is_active: p.is_active,
            balance: p.balance,
            age: p.age,
            name: p.name,
            email: p.email,
            company: p.company,
            latitude: p.latitude,
            longitude: p.longitude,
            tags: p.tags,
            friends: p
                .friends
                .into_iter()
                .map(|f| Friend {
                    id: f.id,
                    name: f.name,
                })
                .collect(),
        }
    }
}

/// Schema-based row encoding via `prost`-derived messages.
///
/// Conversion to and from the message types is part of the measured work,
/// as it would be for any application holding its own domain types.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProtobufCodec;

impl Codec<SmallRecord> for ProtobufCodec {
    fn name(&self) -> &'static str {
        "Protobuf"
    }

    fn encode(&mut self, value: &SmallRecord) -> Result<Vec<u8>> {
        Ok(RecordProto::from(value).encode_to_vec())
    }

    fn decode(&mut self, payload: &[u8]) -> Result<SmallRecord> {
        Ok(RecordProto::decode(payload)?.into())
    }
}

impl Codec<LargeDataset> for ProtobufCodec {
    fn name(&self) -> &'static str {
        "Protobuf"
    }

    fn encode(&mut self, value: &LargeDataset) -> Result<Vec<u8>> {
        let msg = DatasetProto {
            people: value.people.iter().map(PersonProto::from).collect(),
        };
        Ok(msg.encode_to_vec())
    }

    fn decode(&mut self, payload: &[u8]) -> Result<LargeDataset> {
        let msg = DatasetProto::decode(payload)?;
        Ok(LargeDataset {
            people: msg.people.into_iter().map(Person::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{generate_dataset, GenerateConfig};

    #[test]
    fn small_record_wire_bytes() {
        let mut codec = ProtobufCodec;
        let rec = SmallRecord {
            foo: "bar".to_string(),
            foo_number: 2,
        };
        let bytes = codec.encode(&rec).unwrap();
        assert_eq!(bytes, vec![0x0a, 0x03, b'b', b'a', b'r', 0x10, 0x02]);
        let back: SmallRecord = codec.decode(&bytes).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn large_dataset_round_trips() {
        let ds = generate_dataset(&GenerateConfig { count: 30, seed: 11 });
        let mut codec = ProtobufCodec;
        let bytes = codec.encode(&ds).unwrap();
        let back: LargeDataset = codec.decode(&bytes).unwrap();
        assert_eq!(back, ds);
    }

    #[test]
    fn truncated_payload_is_an_error() {
        let mut codec = ProtobufCodec;
        let res: Result<SmallRecord> = codec.decode(&[0x0a, 0x05, b'b']);
        assert!(res.is_err());
    }
}
