// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use sway_motion::{Easing, RangeMap};
use sway_scroll::{ScrollAxis, ScrollWindow};

fn bench_range_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_map");
    let linear = RangeMap::linear(150.0, -150.0).unclamped();
    let banded = RangeMap::new(&[0.0, 0.3, 0.7, 1.0], &[0.0, 1.0, 1.0, 0.0])
        .expect("valid stops")
        .with_easing(Easing::STANDARD);
    let inputs: Vec<f64> = (0..256).map(|i| f64::from(i) / 200.0 - 0.1).collect();

    group.bench_function("linear_unclamped", |b| {
        b.iter(|| inputs.iter().map(|x| linear.map(black_box(*x))).sum::<f64>());
    });
    group.bench_function("banded_cubic_bezier", |b| {
        b.iter(|| inputs.iter().map(|x| banded.map(black_box(*x))).sum::<f64>());
    });
    group.finish();
}

fn bench_progress(c: &mut Criterion) {
    let viewport = Size::new(1280.0, 800.0);
    let rects: Vec<Rect> = (0..256)
        .map(|i| {
            let top = 900.0 - f64::from(i) * 10.0;
            Rect::new(0.0, top, 1280.0, top + 900.0)
        })
        .collect();
    c.bench_function("scroll_window_progress", |b| {
        b.iter(|| {
            rects
                .iter()
                .filter_map(|r| {
                    ScrollWindow::ENTER_EXIT.progress(black_box(*r), viewport, ScrollAxis::Vertical)
                })
                .count()
        });
    });
}

criterion_group!(benches, bench_range_map, bench_progress);
criterion_main!(benches);
