// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use sway_page::{ListenerRegistry, MountedSection, Section, SectionConfig, presets};
use sway_spring::{Spring, SpringConfig};

const VIEWPORT: Size = Size::new(1280.0, 800.0);
const FRAME: f64 = 1.0 / 60.0;

fn mounted(config: SectionConfig) -> (ListenerRegistry, MountedSection) {
    let mut host = ListenerRegistry::new();
    let section = Section::new(config).mount(&mut host);
    (host, section)
}

fn bench_spring(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring");
    group.bench_function("step_smooth_scroll", |b| {
        b.iter_batched(
            || {
                let mut s = Spring::new(SpringConfig::SMOOTH_SCROLL, 0.0);
                s.set_target(1.0);
                s
            },
            |mut s| {
                for _ in 0..30 {
                    black_box(s.step(FRAME));
                }
                s
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_section_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_tick");

    group.bench_function("hero_scroll_and_pointer", |b| {
        let (_host, mut hero) = mounted(presets::hero());
        let mut y = 0.0;
        b.iter(|| {
            y = (y + 7.0) % 800.0;
            hero.on_scroll(Rect::new(0.0, -y, 1280.0, 800.0 - y), VIEWPORT);
            hero.on_pointer_move(Point::new(y, 400.0), VIEWPORT);
            black_box(hero.tick(FRAME))
        });
    });

    group.bench_function("projects_12_cards", |b| {
        let (_host, mut projects) = mounted(presets::projects(12));
        let mut y = 0.0;
        b.iter(|| {
            y = (y + 11.0) % 2400.0;
            projects.on_scroll(Rect::new(0.0, 800.0 - y, 1280.0, 2000.0 - y), VIEWPORT);
            black_box(projects.tick(FRAME))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_spring, bench_section_tick);
criterion_main!(benches);
