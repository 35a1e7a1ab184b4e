use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use chess_action_space::action_space::action_catalogue::{
    counted_action_space_size, enumerate_actions, ActionCatalogue,
};
use chess_action_space::moves::geometric_table::GeometricAttackTable;

fn bench_action_space(c: &mut Criterion) {
    let table = GeometricAttackTable::standard();

    // Correctness guard before benchmarking.
    assert_eq!(enumerate_actions(table).len(), 1924);
    assert_eq!(counted_action_space_size(table), 1924);

    let mut group = c.benchmark_group("action_space");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    group.bench_function("enumerate_actions", |b| {
        b.iter(|| black_box(enumerate_actions(black_box(table)).len()));
    });
    group.bench_function("counted_action_space_size", |b| {
        b.iter(|| black_box(counted_action_space_size(black_box(table))));
    });

    let catalogue = ActionCatalogue::standard();
    group.bench_function("index_round_trip", |b| {
        b.iter(|| {
            let mut checksum = 0usize;
            for index in 0..catalogue.action_space_size() {
                let action = catalogue.move_at_index(black_box(index));
                checksum += action
                    .and_then(|mv| catalogue.action_index_of(&mv))
                    .unwrap_or(usize::MAX);
            }
            black_box(checksum)
        });
    });

    group.finish();
}

criterion_group!(action_space_benches, bench_action_space);
criterion_main!(action_space_benches);
