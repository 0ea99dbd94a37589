use clap::ValueEnum;
use flatbuffers::{FlatBufferBuilder, WIPOffset};

use super::record_generated::bench as fb;
use super::Codec;
use crate::dataset::{Friend, LargeDataset, Person};
use crate::error::{BenchError, Result};
use crate::fixture::SmallRecord;

const NAME: &str = "FlatBuffers";
const INITIAL_CAPACITY: usize = 1024;

/// How the FlatBuffers adapter obtains a builder for each encode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BuilderStrategy {
    /// Allocate a new builder per call.
    Fresh,
    /// Keep one builder, `reset()` it before each call and copy the finished
    /// bytes out.
    #[default]
    Reuse,
}

/// Zero-copy table encoding through the `flatc`-generated bindings in
/// `record_generated.rs`.
pub struct FlatBuffersCodec {
    strategy: BuilderStrategy,
    builder: FlatBufferBuilder<'static>,
}

impl FlatBuffersCodec {
    pub fn new(strategy: BuilderStrategy) -> Self {
        Self {
            strategy,
            builder: FlatBufferBuilder::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn strategy(&self) -> BuilderStrategy {
        self.strategy
    }

    /// Run `build` against a finished-ready builder and return an owned copy
    /// of the finished buffer.
    fn finish_with<F>(&mut self, build: F) -> Vec<u8>
    where
        F: FnOnce(&mut FlatBufferBuilder<'static>),
    {
        match self.strategy {
            BuilderStrategy::Fresh => {
                let mut fbb = FlatBufferBuilder::with_capacity(INITIAL_CAPACITY);
                build(&mut fbb);
                fbb.finished_data().to_vec()
            }
            BuilderStrategy::Reuse => {
                self.builder.reset();
                build(&mut self.builder);
                // The next reset() rewrites this region; the payload must not
                // point into it.
                self.builder.finished_data().to_vec()
            }
        }
    }
}

impl Default for FlatBuffersCodec {
    fn default() -> Self {
        Self::new(BuilderStrategy::default())
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    value.ok_or(BenchError::MissingField {
        format: NAME,
        field,
    })
}

impl Codec<SmallRecord> for FlatBuffersCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encode(&mut self, value: &SmallRecord) -> Result<Vec<u8>> {
        Ok(self.finish_with(|fbb| {
            let foo = fbb.create_string(&value.foo);
            let root = fb::Record::create(
                fbb,
                &fb::RecordArgs {
                    foo: Some(foo),
                    foo_number: value.foo_number,
                },
            );
            fb::finish_record_buffer(fbb, root);
        }))
    }

    fn decode(&mut self, payload: &[u8]) -> Result<SmallRecord> {
        let rec = fb::root_as_record(payload)?;
        Ok(SmallRecord {
            foo: required(rec.foo(), "foo")?.to_string(),
            foo_number: rec.foo_number(),
        })
    }
}

fn build_person<'fbb>(fbb: &mut FlatBufferBuilder<'fbb>, p: &Person) -> WIPOffset<fb::Person<'fbb>> {
    let friends: Vec<_> = p
        .friends
        .iter()
        .map(|f| {
            let name = fbb.create_string(&f.name);
            fb::Friend::create(
                fbb,
                &fb::FriendArgs {
                    id: f.id,
                    name: Some(name),
                },
            )
        })
        .collect();
    let friends = fbb.create_vector(&friends);

    let tags: Vec<_> = p.tags.iter().map(|t| fbb.create_string(t)).collect();
    let tags = fbb.create_vector(&tags);

    let guid = fbb.create_string(&p.guid);
    let name = fbb.create_string(&p.name);
    let email = fbb.create_string(&p.email);
    let company = fbb.create_string(&p.company);

    fb::Person::create(
        fbb,
        &fb::PersonArgs {
            id: p.id,
            guid: Some(guid),
            is_active: p.is_active,
            balance: p.balance,
            age: p.age,
            name: Some(name),
            email: Some(email),
            company: Some(company),
            latitude: p.latitude,
            longitude: p.longitude,
            tags: Some(tags),
            friends: Some(friends),
        },
    )
}

fn read_person(p: fb::Person<'_>) -> Result<Person> {
    let tags = p
        .tags()
        .map(|v| v.iter().map(str::to_string).collect())
        .unwrap_or_default();

    let friends = match p.friends() {
        Some(v) => v
            .iter()
            .map(|f| {
                Ok(Friend {
                    id: f.id(),
                    name: required(f.name(), "friends.name")?.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(Person {
        id: p.id(),
        guid: required(p.guid(), "guid")?.to_string(),
        is_active: p.is_active(),
        balance: p.balance(),
        age: p.age(),
        name: required(p.name(), "name")?.to_string(),
        email: required(p.email(), "email")?.to_string(),
        company: required(p.company(), "company")?.to_string(),
        latitude: p.latitude(),
        longitude: p.longitude(),
        tags,
        friends,
    })
}

impl Codec<LargeDataset> for FlatBuffersCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encode(&mut self, value: &LargeDataset) -> Result<Vec<u8>> {
        Ok(self.finish_with(|fbb| {
            let people: Vec<_> = value.people.iter().map(|p| build_person(fbb, p)).collect();
            let people = fbb.create_vector(&people);
            let root = fb::Dataset::create(
                fbb,
                &fb::DatasetArgs {
                    people: Some(people),
                },
            );
            fbb.finish(root, None);
        }))
    }

    fn decode(&mut self, payload: &[u8]) -> Result<LargeDataset> {
        let root = flatbuffers::root::<fb::Dataset>(payload)?;
        let people = match root.people() {
            Some(v) => v.iter().map(read_person).collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };
        Ok(LargeDataset { people })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{generate_dataset, GenerateConfig};
    use crate::fixture::{SmallFixtureMode, SmallFixtures};

    fn encode_all(codec: &mut FlatBuffersCodec, n: usize) -> Vec<Vec<u8>> {
        let fixtures = SmallFixtures::new(SmallFixtureMode::Varying);
        (0..n)
            .map(|i| codec.encode(&fixtures.record(i)).unwrap())
            .collect()
    }

    #[test]
    fn reused_builder_payloads_are_independent() {
        let mut codec = FlatBuffersCodec::new(BuilderStrategy::Reuse);
        let payloads = encode_all(&mut codec, 100);

        // Decode only after every encode has finished; aliased buffers would
        // all read back as the last record.
        for (i, payload) in payloads.iter().enumerate() {
            let rec: SmallRecord = codec.decode(payload).unwrap();
            assert_eq!(rec.foo_number, i as i32);
            assert_eq!(rec.foo, format!("bar{i}"));
        }
    }

    #[test]
    fn fresh_and_reused_builders_emit_identical_bytes() {
        let mut fresh = FlatBuffersCodec::new(BuilderStrategy::Fresh);
        let mut reuse = FlatBuffersCodec::new(BuilderStrategy::Reuse);
        assert_eq!(encode_all(&mut fresh, 20), encode_all(&mut reuse, 20));
    }

    #[test]
    fn zero_number_uses_default_slot() {
        let mut codec = FlatBuffersCodec::default();
        let rec = SmallRecord {
            foo: String::new(),
            foo_number: 0,
        };
        let bytes = codec.encode(&rec).unwrap();
        let back: SmallRecord = codec.decode(&bytes).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn missing_string_is_reported() {
        let mut fbb = FlatBufferBuilder::new();
        let root = fb::Record::create(
            &mut fbb,
            &fb::RecordArgs {
                foo: None,
                foo_number: 9,
            },
        );
        fb::finish_record_buffer(&mut fbb, root);

        let mut codec = FlatBuffersCodec::default();
        let err = Codec::<SmallRecord>::decode(&mut codec, fbb.finished_data()).unwrap_err();
        assert!(matches!(
            err,
            BenchError::MissingField {
                format: "FlatBuffers",
                field: "foo"
            }
        ));
    }

    #[test]
    fn corrupt_buffer_fails_verification() {
        let mut codec = FlatBuffersCodec::default();
        let res: Result<SmallRecord> = codec.decode(&[0xff, 0xff, 0xff, 0x7f]);
        assert!(matches!(res, Err(BenchError::FlatBuffers(_))));
    }

    #[test]
    fn large_dataset_round_trips() {
        let ds = generate_dataset(&GenerateConfig { count: 40, seed: 5 });
        for strategy in [BuilderStrategy::Fresh, BuilderStrategy::Reuse] {
            let mut codec = FlatBuffersCodec::new(strategy);
            let bytes = codec.encode(&ds).unwrap();
            let back: LargeDataset = codec.decode(&bytes).unwrap();
            assert_eq!(back, ds);
        }
    }
}
