use crate::codecs::{Codec, FlatBuffersCodec, JsonCodec, MessagePackCodec, ProtobufCodec};
use crate::error::Result;
use crate::fixture::{SmallFixtures, SmallRecord};
use crate::harness::BenchConfig;
use crate::runner::FormatBench;
use crate::schema::BenchmarkResult;
use crate::FormatKind;

fn bench<C: Codec<SmallRecord>>(
    cfg: &BenchConfig,
    fixtures: &SmallFixtures,
    codec: &mut C,
) -> Result<BenchmarkResult> {
    let label = codec.name();
    FormatBench::<SmallRecord, C>::new(label, codec, cfg.iters())
        .validate(cfg.validate)
        .run(fixtures)
}

/// Small-record variant of `format`: `cfg.iters()` records, one at a time.
pub fn run(cfg: &BenchConfig, format: FormatKind) -> Result<BenchmarkResult> {
    let fixtures = SmallFixtures::new(cfg.fixture_mode);
    match format {
        FormatKind::Json => bench(cfg, &fixtures, &mut JsonCodec),
        FormatKind::MessagePack => bench(cfg, &fixtures, &mut MessagePackCodec),
        FormatKind::FlatBuffers => bench(cfg, &fixtures, &mut FlatBuffersCodec::new(cfg.builder)),
        FormatKind::Protobuf => bench(cfg, &fixtures, &mut ProtobufCodec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::BuilderStrategy;
    use crate::fixture::SmallFixtureMode;
    use crate::harness::Profile;

    fn cfg(n: usize) -> BenchConfig {
        let mut cfg = BenchConfig::new(Profile::Embedded);
        cfg.iterations = Some(n);
        cfg
    }

    #[test]
    fn every_format_round_trips_cleanly() {
        for mode in [SmallFixtureMode::Constant, SmallFixtureMode::Varying] {
            for builder in [BuilderStrategy::Fresh, BuilderStrategy::Reuse] {
                let mut cfg = cfg(64);
                cfg.fixture_mode = mode;
                cfg.builder = builder;
                for format in FormatKind::ALL {
                    let r = run(&cfg, format).unwrap();
                    assert_eq!(r.format, format.label());
                    assert_eq!(r.iterations, 64);
                    assert_eq!(r.mismatches, 0, "{format:?} {mode:?} {builder:?}");
                    assert_eq!(r.total_time_ms, r.serialize_time_ms + r.deserialize_time_ms);
                }
            }
        }
    }

    #[test]
    fn profile_sets_iteration_count() {
        let cfg = BenchConfig::new(Profile::Embedded);
        let r = run(&cfg, FormatKind::Protobuf).unwrap();
        assert_eq!(r.iterations, 1_000);
    }

    #[test]
    fn payload_sizes_rank_as_expected() {
        let cfg = cfg(10);
        let json = run(&cfg, FormatKind::Json).unwrap();
        let msgpack = run(&cfg, FormatKind::MessagePack).unwrap();
        let proto = run(&cfg, FormatKind::Protobuf).unwrap();
        assert!(proto.payload_bytes < msgpack.payload_bytes);
        assert!(msgpack.payload_bytes < json.payload_bytes);
    }
}
