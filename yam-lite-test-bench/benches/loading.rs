use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use yam_lite::{decode_str, emit};

const CONFIG_YAML: &str = include_str!("config.yaml");

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("loading");
    group
        .sample_size(10)
        .throughput(Throughput::Bytes(CONFIG_YAML.len() as u64));
    group.bench_function("noop", |b| b.iter(noop));
    group.bench_function("decode-config", |b| {
        b.iter(|| {
            let value = decode_str(black_box(CONFIG_YAML)).unwrap();
            assert!(!value.is_null());
        })
    });

    let value = decode_str(CONFIG_YAML).unwrap();
    group.bench_function("emit-config", |b| {
        b.iter(|| {
            let text = emit(black_box(&value)).unwrap();
            assert!(!text.is_empty());
        })
    });

    group.finish();
}

fn noop() {}

criterion_group!(benches, bench);
criterion_main!(benches);
