//! Small-record codec benchmarks
//!
//! Criterion counterpart of the `run` protocol for the `{foo, foo_number}`
//! record: encode and decode per format, plus the FlatBuffers builder
//! allocation strategies side by side.

use codec_latency_bench::codecs::{
    BuilderStrategy, Codec, FlatBuffersCodec, JsonCodec, MessagePackCodec, ProtobufCodec,
};
use codec_latency_bench::fixture::SmallRecord;
use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion,
};

fn record() -> SmallRecord {
    SmallRecord {
        foo: "bar".to_string(),
        foo_number: 4_242,
    }
}

fn bench_one<C: Codec<SmallRecord>>(group: &mut BenchmarkGroup<'_, WallTime>, mut codec: C) {
    let rec = record();
    let name = codec.name();
    let payload = codec.encode(&rec).expect("encode fixture");

    group.bench_function(BenchmarkId::new("encode", name), |bencher| {
        bencher.iter(|| codec.encode(black_box(&rec)).expect("encode"))
    });

    group.bench_function(BenchmarkId::new("decode", name), |bencher| {
        bencher.iter(|| codec.decode(black_box(&payload)).expect("decode"))
    });
}

fn bench_small_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_record");
    bench_one(&mut group, JsonCodec);
    bench_one(&mut group, MessagePackCodec);
    bench_one(&mut group, FlatBuffersCodec::new(BuilderStrategy::Reuse));
    bench_one(&mut group, ProtobufCodec);
    group.finish();
}

/// Fresh builder per record vs one builder reset between records.
fn bench_flatbuffers_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatbuffers_builder");
    let rec = record();

    for strategy in [BuilderStrategy::Fresh, BuilderStrategy::Reuse] {
        let mut codec = FlatBuffersCodec::new(strategy);
        group.bench_with_input(
            BenchmarkId::new("encode", format!("{strategy:?}").to_lowercase()),
            &rec,
            |bencher, rec| {
                bencher.iter(|| {
                    Codec::<SmallRecord>::encode(&mut codec, black_box(rec)).expect("encode")
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_small_record, bench_flatbuffers_builder);
criterion_main!(benches);
