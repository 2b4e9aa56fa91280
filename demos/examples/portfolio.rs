// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless portfolio page.
//!
//! Scrolls a seven-section page from top to bottom over four seconds at 60 Hz
//! and prints one JSON object per section per frame on stdout. Lifecycle logs
//! go to stderr.
//!
//! Run:
//! - `cargo run -p sway_demos --example portfolio`
//! - `RUST_LOG=sway_page=trace cargo run -p sway_demos --example portfolio`

use std::error::Error;

use kurbo::{Point, Size};
use serde::Serialize;
use sway_demos::{PageLayout, init_tracing};
use sway_page::{Frame, Header, HeaderFrame, ListenerRegistry, PageBackdrop, Section, presets};

const FRAME: f64 = 1.0 / 60.0;
const SCROLL_SECONDS: f64 = 4.0;

#[derive(Serialize)]
struct SectionLine<'a> {
    t: f64,
    scroll: f64,
    section: &'a str,
    frame: &'a Frame,
}

#[derive(Serialize)]
struct PageLine {
    t: f64,
    scroll: f64,
    glow: (f64, f64),
    header: HeaderFrame,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let viewport = Size::new(1280.0, 800.0);
    let page = PageLayout::stacked(
        viewport.width,
        &[800.0, 900.0, 1600.0, 1100.0, 1400.0, 1200.0, 1000.0],
    );
    let mut host = ListenerRegistry::new();

    let configs = [
        presets::hero(),
        presets::about(),
        presets::journey(6),
        presets::skills(4),
        presets::experience(3),
        presets::projects(4),
        presets::contact(),
    ];
    let mut sections: Vec<_> = configs
        .into_iter()
        .map(|c| Section::new(c).mount(&mut host))
        .collect();
    let mut backdrop = PageBackdrop::mount(&mut host);
    let mut header = Header::mount(&mut host);
    tracing::info!(listeners = host.live_count(), "page mounted");

    let frames = (SCROLL_SECONDS / FRAME).round() as usize;
    let max_scroll = page.max_scroll(viewport);
    for i in 0..=frames {
        let t = i as f64 * FRAME;
        let scroll = max_scroll * (t / SCROLL_SECONDS).min(1.0);
        // The pointer sweeps left to right while the page scrolls.
        let pointer = Point::new(viewport.width * (t / SCROLL_SECONDS).min(1.0), viewport.height / 2.0);

        header.on_scroll(scroll);
        backdrop.on_pointer_move(pointer, viewport);
        for (index, section) in sections.iter_mut().enumerate() {
            if let Some(rect) = page.rect(index, scroll) {
                section.on_scroll(rect, viewport);
            }
            section.on_pointer_move(pointer, viewport);
        }

        for section in &mut sections {
            let frame = section.tick(FRAME);
            let line = SectionLine {
                t,
                scroll,
                section: section.config().name(),
                frame: &frame,
            };
            println!("{}", serde_json::to_string(&line)?);
        }
        let glow = backdrop.glow_center();
        let line = PageLine {
            t,
            scroll,
            glow: (glow.x, glow.y),
            header: header.tick(FRAME),
        };
        println!("{}", serde_json::to_string(&line)?);
    }

    header.unmount(&mut host)?;
    backdrop.unmount(&mut host)?;
    for section in sections {
        section.unmount(&mut host)?;
    }
    tracing::info!(listeners = host.live_count(), "page unmounted");
    Ok(())
}
