// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Sway demos.
//!
//! The demos run without a window: a [`PageLayout`] stands in for the
//! browser's layout engine and a scripted scroll offset stands in for the
//! user.

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to
/// lifecycle logs from `sway_page`.
pub fn init_tracing() {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new("warn,sway_page=debug") {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("warn"),
        },
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Sections stacked top to bottom in document coordinates.
#[derive(Clone, Debug)]
pub struct PageLayout {
    width: f64,
    sections: Vec<(f64, f64)>,
}

impl PageLayout {
    /// Stacks sections of the given heights on a page `width` pixels wide.
    #[must_use]
    pub fn stacked(width: f64, heights: &[f64]) -> Self {
        let mut top = 0.0;
        let sections = heights
            .iter()
            .map(|h| {
                let s = (top, *h);
                top += h;
                s
            })
            .collect();
        Self { width, sections }
    }

    /// Total document height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.sections.last().map_or(0.0, |(top, h)| top + h)
    }

    /// Bounds of section `index` in viewport coordinates at `scroll`.
    #[must_use]
    pub fn rect(&self, index: usize, scroll: f64) -> Option<Rect> {
        let (top, h) = *self.sections.get(index)?;
        Some(Rect::new(0.0, top - scroll, self.width, top - scroll + h))
    }

    /// Largest scroll offset for a viewport.
    #[must_use]
    pub fn max_scroll(&self, viewport: Size) -> f64 {
        (self.height() - viewport.height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::PageLayout;

    #[test]
    fn stacked_sections_move_up_with_scroll() {
        let page = PageLayout::stacked(1280.0, &[800.0, 600.0]);
        assert_eq!(page.height(), 1400.0);
        assert_eq!(page.rect(1, 100.0), Some(Rect::new(0.0, 700.0, 1280.0, 1300.0)));
        assert_eq!(page.rect(2, 0.0), None);
        assert_eq!(page.max_scroll(Size::new(1280.0, 800.0)), 600.0);
    }
}
