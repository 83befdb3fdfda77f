// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use zoompan_gesture::{GestureRecognizer, PointerEvent, PointerId};
use zoompan_motion::{BallisticScroll, Easing, FlingConfig};

fn bench_motion(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoompan_motion");

    for &speed in &[500.0_f64, 8_000.0_f64] {
        group.bench_function(format!("ballistic_frames(v={speed})"), |b| {
            b.iter(|| {
                let mut fling = BallisticScroll::new(
                    Vec2::new(1000.0, 1000.0),
                    Vec2::new(speed, -speed * 0.5),
                    Vec2::ZERO,
                    Vec2::new(20_000.0, 20_000.0),
                    0,
                    FlingConfig::DEFAULT,
                );
                let mut now = 0;
                while fling.update(now) {
                    now += 16;
                }
                black_box(fling.final_position());
            });
        });
    }

    group.bench_function("easing(n=1024)", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..1024_u32 {
                sum += Easing::Decelerate.apply(f64::from(i) / 1024.0);
            }
            black_box(sum);
        });
    });

    group.bench_function("recognizer_drag(moves=256)", |b| {
        b.iter(|| {
            let id = PointerId(0);
            let mut recognizer = GestureRecognizer::default();
            let mut count = 0;
            count += recognizer
                .on_pointer(&PointerEvent::down(id, Point::new(0.0, 0.0), 0))
                .len();
            for i in 1..=256_u32 {
                let at = Point::new(f64::from(i) * 2.0, f64::from(i));
                count += recognizer
                    .on_pointer(&PointerEvent::moved(id, at, u64::from(i) * 8))
                    .len();
            }
            black_box(count);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_motion);
criterion_main!(benches);
