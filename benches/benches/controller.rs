// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use zoompan::{PointerEvent, PointerId, ScaleEvent, ZoomPanConfig, ZoomPanController};

const FINGER: PointerId = PointerId(0);
const THUMB: PointerId = PointerId(1);

fn controller() -> ZoomPanController {
    let config = ZoomPanConfig::DEFAULT
        .with_scale_to_fit(false)
        .with_scale_limits(1.0, 8.0);
    let mut controller = ZoomPanController::new(config);
    controller.set_viewport_size(Size::new(1280.0, 800.0));
    controller.set_size(Size::new(4096.0, 4096.0));
    controller
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoompan_gestures");

    for &moves in &[16_u32, 256_u32] {
        group.bench_function(format!("drag(moves={moves})"), |b| {
            b.iter_batched(
                controller,
                |mut controller| {
                    controller.handle_pointer(&PointerEvent::down(
                        FINGER,
                        Point::new(1000.0, 400.0),
                        0,
                    ));
                    for i in 1..=moves {
                        let x = 1000.0 - f64::from(i) * 3.0;
                        let event =
                            PointerEvent::moved(FINGER, Point::new(x, 400.0), u64::from(i) * 8);
                        controller.handle_pointer(&event);
                    }
                    controller.handle_pointer(&PointerEvent::up(
                        FINGER,
                        Point::new(1000.0 - f64::from(moves) * 3.0, 400.0),
                        u64::from(moves) * 8 + 500,
                    ));
                    black_box(controller.scroll());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("pinch(steps=128)", |b| {
        b.iter_batched(
            controller,
            |mut controller| {
                let focus = Point::new(640.0, 400.0);
                controller.handle_scale(&ScaleEvent::begin(focus));
                for _ in 0..64 {
                    controller.handle_scale(&ScaleEvent::update(focus, 1.03));
                }
                for _ in 0..64 {
                    controller.handle_scale(&ScaleEvent::update(focus, 0.97));
                }
                controller.handle_scale(&ScaleEvent::end(focus));
                black_box(controller.scale());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("derived_pinch(moves=64)", |b| {
        b.iter_batched(
            || {
                let mut controller = controller();
                controller.enable_pinch_detection(16.0);
                controller
            },
            |mut controller| {
                controller.handle_pointer(&PointerEvent::down(FINGER, Point::new(600.0, 400.0), 0));
                controller.handle_pointer(&PointerEvent::down(THUMB, Point::new(680.0, 400.0), 4));
                for i in 1..=64_u32 {
                    let spread = f64::from(i) * 2.0;
                    let t = u64::from(i) * 8;
                    let left = Point::new(600.0 - spread, 400.0);
                    let right = Point::new(680.0 + spread, 400.0);
                    controller.handle_pointer(&PointerEvent::moved(FINGER, left, t));
                    controller.handle_pointer(&PointerEvent::moved(THUMB, right, t));
                }
                controller.handle_pointer(&PointerEvent::up(THUMB, Point::new(808.0, 400.0), 600));
                controller.handle_pointer(&PointerEvent::up(FINGER, Point::new(472.0, 400.0), 600));
                black_box(controller.scale());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoompan_frames");

    group.bench_function("fling_to_rest", |b| {
        b.iter_batched(
            || {
                let mut controller = controller();
                controller.handle_pointer(&PointerEvent::down(FINGER, Point::new(1200.0, 400.0), 0));
                for (i, x) in [1100.0, 900.0, 700.0].into_iter().enumerate() {
                    let t = 10 * (i as u64 + 1);
                    controller.handle_pointer(&PointerEvent::moved(FINGER, Point::new(x, 400.0), t));
                }
                controller.handle_pointer(&PointerEvent::up(FINGER, Point::new(700.0, 400.0), 40));
                controller
            },
            |mut controller| {
                let mut now = 40;
                while controller.tick(now) {
                    now += 16;
                }
                black_box(controller.scroll());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("transition_to_rest", |b| {
        b.iter_batched(
            || {
                let mut controller = controller();
                controller.slide_to_and_center_with_scale(Point::new(4000.0, 3000.0), 4.0);
                controller
            },
            |mut controller| {
                let mut now = 0;
                while controller.tick(now) {
                    now += 16;
                }
                black_box((controller.scroll(), controller.scale()));
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("scroll_to(n=1024)", |b| {
        let mut controller = controller();
        b.iter(|| {
            for i in 0..1024_u32 {
                let offset = f64::from(i % 512) * 5.0;
                controller.scroll_to(Vec2::new(offset, offset * 0.5));
            }
            black_box(controller.scroll());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_gestures, bench_frames);
criterion_main!(benches);
