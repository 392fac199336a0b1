// Copyright 2026 the Zoomframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use zoomframe_transform::bounds::{EdgeOffsets, clamp_pan, scale_correction};
use zoomframe_transform::{TransformController, Viewport, ZoomConfig};

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

fn build_cases(n: usize, seed: u64) -> Vec<(EdgeOffsets, f64, Vec2)> {
    let viewport = Viewport::new(800, 600);
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let scale = rng.gen_f64(1.0, 3.0);
            let origin = Vec2::new(rng.gen_f64(-1_700.0, 50.0), rng.gen_f64(-1_300.0, 50.0));
            let delta = Vec2::new(rng.gen_f64(-200.0, 200.0), rng.gen_f64(-200.0, 200.0));
            (EdgeOffsets::new(viewport, scale, origin), scale, delta)
        })
        .collect()
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomframe_bounds");
    let viewport = Viewport::new(800, 600);
    let cases = build_cases(4_096, 0xB0_0000_0000_0001);

    group.bench_function("clamp_pan(n=4096)", |b| {
        b.iter(|| {
            for &(edges, scale, delta) in &cases {
                black_box(clamp_pan(viewport, edges, scale, 0.0, delta));
            }
        });
    });

    group.bench_function("scale_correction(n=4096)", |b| {
        b.iter(|| {
            for &(edges, _, _) in &cases {
                black_box(scale_correction(viewport, edges, 0.0));
            }
        });
    });

    group.bench_function("pinch_and_pan(n=4096)", |b| {
        let mut rng = Lcg::new(42);
        let steps: Vec<(f64, Point, Vec2)> = (0..4_096)
            .map(|_| {
                (
                    rng.gen_f64(0.9, 1.1),
                    Point::new(rng.gen_f64(0.0, 800.0), rng.gen_f64(0.0, 600.0)),
                    Vec2::new(rng.gen_f64(-30.0, 30.0), rng.gen_f64(-30.0, 30.0)),
                )
            })
            .collect();
        b.iter(|| {
            let mut controller = TransformController::new(ZoomConfig::default(), viewport);
            for &(factor, focus, delta) in &steps {
                controller.apply_scale_factor(factor, focus);
                black_box(controller.apply_pan(delta));
            }
            black_box(controller.transform());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_bounds);
criterion_main!(benches);
