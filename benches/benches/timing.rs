// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_timing::TimerQueue;

fn bench_schedule_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/schedule_drain");

    for len in [16_usize, 256, 4_096] {
        // Deadlines interleave so inserts land throughout the queue.
        let deadlines: Vec<u64> = (0..len as u64).map(|i| (i * 7_919) % 10_007).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("queue", len), &deadlines, |b, deadlines| {
            b.iter_batched(
                TimerQueue::<u64>::new,
                |mut queue| {
                    for &deadline in deadlines {
                        queue.schedule(deadline, deadline);
                    }
                    while let Some(expired) = queue.pop_expired(u64::MAX) {
                        black_box(expired);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_schedule_and_drain);
criterion_main!(benches);
