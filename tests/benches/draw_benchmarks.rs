//! # Draw Benchmarks
//!
//! Cost of a full draw as the roster grows, for open rosters and for rosters
//! of couples who exclude each other.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use santa_tests::fixtures::{couples_roster, open_roster};
use ss_01_participant_registry::ParticipantRegistry;
use ss_02_assignment_engine::{
    AssignmentApi, AssignmentService, DrawMode, EngineConfig, SeededRandomSource,
};

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("ss-02-assignment-engine");

    for size in [10usize, 50, 200] {
        for (label, records) in [("open", open_roster(size)), ("couples", couples_roster(size))] {
            let registry = ParticipantRegistry::load(records).expect("valid roster");

            for mode in [DrawMode::WithoutReplacement, DrawMode::WithReplacement] {
                let service =
                    AssignmentService::with_config(EngineConfig::default().with_draw_mode(mode));
                let mut rng = SeededRandomSource::new(42);

                group.throughput(Throughput::Elements(size as u64));
                group.bench_with_input(
                    BenchmarkId::new(format!("{}_{:?}", label, mode), size),
                    &registry,
                    |b, registry| {
                        b.iter(|| black_box(service.draw(registry, &mut rng).expect("feasible")))
                    },
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
