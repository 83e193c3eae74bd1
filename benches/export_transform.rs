use std::hint::black_box;

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mock_inbox::config::{ExportLayout, GenerationConfig, PlatformCounts};
use mock_inbox::export::render_json;
use mock_inbox::models::SourcePlatform;
use mock_inbox::{generate, group_by_display, to_structured_document};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn snapshot_config(per_platform: u32) -> GenerationConfig {
    let counts: PlatformCounts = SourcePlatform::ALL.into_iter().map(|p| (p, per_platform)).collect();
    GenerationConfig { counts, ..GenerationConfig::default() }
}

fn bench_export_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_transform");
    let layout = ExportLayout::default();

    for per_platform in [30u32, 1_000, 10_000].iter() {
        let mut rng = StdRng::seed_from_u64(7);
        let snapshot = generate(&snapshot_config(*per_platform), &mut rng, Utc::now());
        let size = snapshot.len();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("group_by_display", size), &size, |b, _| {
            b.iter(|| group_by_display(black_box(&snapshot)).total());
        });
        group.bench_with_input(BenchmarkId::new("structured_document", size), &size, |b, _| {
            b.iter(|| to_structured_document(black_box(&snapshot), black_box(&layout)));
        });

        let document = to_structured_document(&snapshot, &layout);
        group.bench_with_input(BenchmarkId::new("render_json", size), &size, |b, _| {
            b.iter(|| render_json(black_box(&document)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_export_transform);
criterion_main!(benches);
