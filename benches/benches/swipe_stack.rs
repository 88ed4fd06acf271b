// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Vec2;
use understory_swipe_stack::drag::DragTracker;
use understory_swipe_stack::projector::project;
use understory_swipe_stack::{SwipeConfig, SwipeStack};

fn bench_drag_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_stack/drag_samples");
    let config = SwipeConfig::default();

    // One input frame per sample: a drag sweeping back and forth across the threshold.
    let samples: Vec<Vec2> = (0..1_000)
        .map(|i| Vec2::new(300.0 * (f64::from(i) * 0.05).sin(), f64::from(i % 40)))
        .collect();
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("tracker", |b| {
        b.iter(|| {
            let mut drag = DragTracker::new();
            for &raw in &samples {
                black_box(drag.sample(&config, raw));
            }
        });
    });

    group.bench_function("stack", |b| {
        b.iter_batched(
            || SwipeStack::new(0..64_u32),
            |mut stack| {
                for &raw in &samples {
                    black_box(stack.drag_changed(raw));
                }
                black_box(stack);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_stack/project");

    // Hypothesis: projection cost is linear in visible slots and independent of list length.
    for visible in [1_usize, 4, 16, 64] {
        let config = SwipeConfig::default().with_visible_count(visible);
        group.throughput(Throughput::Elements(visible as u64));
        group.bench_with_input(BenchmarkId::new("slots", visible), &config, |b, config| {
            b.iter(|| black_box(project(config, 10_000, black_box(Vec2::new(87.5, 12.0)))));
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut stack = SwipeStack::new(0..1_000_u32);
    stack.drag_changed(Vec2::new(120.0, 0.0));

    c.bench_function("swipe_stack/frame", |b| {
        b.iter(|| black_box(stack.frame()));
    });
}

criterion_group!(benches, bench_drag_samples, bench_projection, bench_frame);
criterion_main!(benches);
