// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use zoomframe_gesture::GestureInterpreter;
use zoomframe_gesture::pointer::{PointerEvent, PointerPhase};
use zoomframe_transform::{AnimationStatus, TransformController, Viewport, ZoomConfig};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * (f64::from(self.next_u32()) / f64::from(u32::MAX))
    }
}

/// A mix of one-finger drags and two-finger pinches, `moves` moves each.
fn build_stream(sequences: usize, moves: usize, seed: u64) -> Vec<PointerEvent> {
    let mut rng = Lcg::new(seed);
    let mut events = Vec::with_capacity(sequences * (moves + 4));
    let mut t = 0_u64;

    for i in 0..sequences {
        let mut a = (rng.gen_f64(0.0, 800.0), rng.gen_f64(0.0, 600.0));
        events.push(PointerEvent::new(PointerPhase::Down, t).with_pointer(0, a));
        t += 16;

        if i % 2 == 0 {
            for _ in 0..moves {
                a.0 += rng.gen_f64(-20.0, 20.0);
                a.1 += rng.gen_f64(-20.0, 20.0);
                events.push(PointerEvent::new(PointerPhase::Move, t).with_pointer(0, a));
                t += 16;
            }
        } else {
            let mut b = (a.0 + 100.0, a.1);
            let two = |phase: PointerPhase, t: u64, a: (f64, f64), b: (f64, f64)| {
                PointerEvent::new(phase, t)
                    .with_pointer(0, a)
                    .with_pointer(1, b)
            };
            events.push(two(PointerPhase::PointerDown(1), t, a, b));
            t += 16;
            for _ in 0..moves {
                let spread = rng.gen_f64(-15.0, 15.0);
                a.0 -= spread;
                b.0 += spread;
                events.push(two(PointerPhase::Move, t, a, b));
                t += 16;
            }
            events.push(two(PointerPhase::PointerUp(1), t, a, b));
            t += 16;
        }

        events.push(PointerEvent::new(PointerPhase::Up, t).with_pointer(0, a));
        t += 500;
    }
    events
}

fn setup() -> (GestureInterpreter, TransformController) {
    (
        GestureInterpreter::default(),
        TransformController::new(ZoomConfig::default(), Viewport::new(800, 600)),
    )
}

fn bench_gesture_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomframe_gesture");
    group.sample_size(50);

    for &(sequences, moves) in &[(64_usize, 16_usize), (64, 128), (1_024, 16)] {
        let stream = build_stream(sequences, moves, 0x200F_0000_0000_0001);

        group.bench_function(format!("handle(seq={sequences},moves={moves})"), |b| {
            b.iter_batched(
                GestureInterpreter::default,
                |mut g| {
                    for event in &stream {
                        black_box(g.handle(event));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("dispatch(seq={sequences},moves={moves})"), |b| {
            b.iter_batched(
                setup,
                |(mut g, mut controller)| {
                    for event in &stream {
                        black_box(g.dispatch(event, &mut controller));
                    }
                    black_box(controller.transform());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_auto_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomframe_transform");

    for &target in &[2.0_f64, 3.0] {
        group.bench_function(format!("auto_scale_to({target})"), |b| {
            b.iter_batched(
                || TransformController::new(ZoomConfig::default(), Viewport::new(800, 600)),
                |mut controller| {
                    controller.start_auto_scale(target, 0);
                    while controller.step_animation() == AnimationStatus::Running {}
                    black_box(controller.scale());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gesture_stream, bench_auto_scale);
criterion_main!(benches);
