use crate::codecs::{Codec, FlatBuffersCodec, JsonCodec, MessagePackCodec, ProtobufCodec};
use crate::dataset::LargeDataset;
use crate::error::Result;
use crate::harness::{BenchConfig, LARGE_ITERATIONS};
use crate::runner::FormatBench;
use crate::schema::BenchmarkResult;
use crate::FormatKind;

pub const LABEL_SUFFIX: &str = " (Large)";

fn bench<C: Codec<LargeDataset>>(
    cfg: &BenchConfig,
    dataset: &LargeDataset,
    codec: &mut C,
) -> Result<BenchmarkResult> {
    let label = format!("{}{LABEL_SUFFIX}", codec.name());
    FormatBench::<LargeDataset, C>::new(label, codec, LARGE_ITERATIONS)
        .validate(cfg.validate)
        .run(dataset)
}

/// Large-dataset variant of `format`: one encode and one decode of the whole
/// dataset, whatever the profile's iteration count.
pub fn run(cfg: &BenchConfig, format: FormatKind, dataset: &LargeDataset) -> Result<BenchmarkResult> {
    match format {
        FormatKind::Json => bench(cfg, dataset, &mut JsonCodec),
        FormatKind::MessagePack => bench(cfg, dataset, &mut MessagePackCodec),
        FormatKind::FlatBuffers => bench(cfg, dataset, &mut FlatBuffersCodec::new(cfg.builder)),
        FormatKind::Protobuf => bench(cfg, dataset, &mut ProtobufCodec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{generate_dataset, GenerateConfig};
    use crate::harness::Profile;

    #[test]
    fn large_variants_force_one_iteration() {
        let dataset = generate_dataset(&GenerateConfig { count: 120, seed: 3 });
        let mut cfg = BenchConfig::new(Profile::Web);
        cfg.iterations = Some(500);

        for format in FormatKind::ALL {
            let r = run(&cfg, format, &dataset).unwrap();
            assert_eq!(r.format, format!("{}{LABEL_SUFFIX}", format.label()));
            assert_eq!(r.iterations, 1);
            assert_eq!(r.mismatches, 0, "{format:?}");
            assert_eq!(r.average_per_op_ms(), None);
        }
    }
}
