// Rust guideline compliant 2026-02-06

use chrono::{Local, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use laptime_core::{format_duration, ConsoleTimer, FixedWidth, ManualClock, TimerConfig};
use termcolor::Buffer;

fn bench_format_duration(c: &mut Criterion) {
    let samples: [u64; 4] = [42, 1_500, 65_000, 90_061_000];
    c.bench_function("format_duration_mixed", |b| {
        b.iter(|| {
            for ms in samples {
                black_box(format_duration(black_box(ms)));
            }
        })
    });
}

fn bench_measure(c: &mut Criterion) {
    let start = Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let clock = ManualClock::new(start);
    c.bench_function("measure_1000", |b| {
        b.iter(|| {
            let mut timer = ConsoleTimer::with_parts(
                Buffer::no_color(),
                clock.clone(),
                FixedWidth(120),
                TimerConfig::default(),
            );
            for _ in 0..1000 {
                timer.measure("Step", || clock.advance_millis(3));
            }
            black_box(timer.into_output().len())
        })
    });
}

criterion_group!(benches, bench_format_duration, bench_measure);
criterion_main!(benches);
