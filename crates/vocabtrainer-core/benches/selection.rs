use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vocabtrainer_core::selection::{RandomSelection, SelectionPolicy, UsedSet};
use vocabtrainer_core::session::{NoopObserver, PerfectRecall, TrainingSession};

fn bench_pick_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick_next");

    for n in [3, 100, 10_000] {
        let mut policy = RandomSelection::seeded(7);
        group.bench_function(format!("drain/n={n}"), |b| {
            b.iter(|| {
                let mut used = UsedSet::new(black_box(n));
                let mut drawn = 0;
                while policy.pick_next(&mut used).is_some() {
                    drawn += 1;
                }
                drawn
            })
        });
    }

    group.finish();
}

fn bench_cycle(c: &mut Criterion) {
    let pairs: Vec<(String, String)> = (0..200)
        .map(|i| (format!("word{i}"), format!("translation{i}")))
        .collect();
    let mut session = TrainingSession::new(pairs, RandomSelection::seeded(3));

    c.bench_function("run_cycle/len=50,pool=200", |b| {
        b.iter(|| {
            session
                .run_cycle(black_box(50), &mut PerfectRecall, &NoopObserver)
                .map(|summary| summary.correct)
        })
    });
}

criterion_group!(benches, bench_pick_next, bench_cycle);
criterion_main!(benches);
