// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::offset::ScrollOffset;

/// Scroll direction along which progress is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAxis {
    /// Vertical page scrolling (the common case).
    #[default]
    Vertical,
    /// Horizontal scrolling.
    Horizontal,
}

impl ScrollAxis {
    fn target_span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Vertical => (rect.y0, rect.height()),
            Self::Horizontal => (rect.x0, rect.width()),
        }
    }

    fn viewport_len(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }
}

/// Normalized position of a target within a [`ScrollWindow`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollProgress {
    /// Unclamped progress: below `0.0` before the window, above `1.0` after it.
    pub raw: f64,
    /// Progress clamped into `[0, 1]`.
    pub clamped: f64,
}

impl ScrollProgress {
    /// Builds a progress value from an unclamped ratio.
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        Self {
            raw,
            clamped: raw.clamp(0.0, 1.0),
        }
    }
}

/// The entry/exit pair over which progress runs from `0` to `1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollWindow {
    /// Offset at which progress is `0`.
    pub enter: ScrollOffset,
    /// Offset at which progress is `1`.
    pub exit: ScrollOffset,
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::ENTER_EXIT
    }
}

impl ScrollWindow {
    /// From the first pixel entering at the bottom to the last pixel leaving at the top.
    pub const ENTER_EXIT: Self = Self::new(ScrollOffset::START_END, ScrollOffset::END_START);
    /// From the target's top pinned at the viewport top until it has scrolled fully out.
    ///
    /// Used for full-height sections that start on screen.
    pub const PIN_TOP: Self = Self::new(ScrollOffset::START_START, ScrollOffset::END_START);

    /// Creates a window from entry and exit offsets.
    #[must_use]
    pub const fn new(enter: ScrollOffset, exit: ScrollOffset) -> Self {
        Self { enter, exit }
    }

    /// Computes progress for a target at `target` (viewport-relative) in a viewport of `viewport`.
    ///
    /// Returns `None` when the measurement cannot produce a meaningful value:
    /// a viewport with no extent along `axis`, a window whose entry and exit
    /// coincide, or any non-finite input.
    ///
    /// ```
    /// use kurbo::{Rect, Size};
    /// use sway_scroll::{ScrollAxis, ScrollWindow};
    ///
    /// let viewport = Size::new(1000.0, 800.0);
    /// // A 400px tall section whose top sits exactly at the viewport bottom.
    /// let target = Rect::new(0.0, 800.0, 1000.0, 1200.0);
    /// let p = ScrollWindow::ENTER_EXIT
    ///     .progress(target, viewport, ScrollAxis::Vertical)
    ///     .unwrap();
    /// assert_eq!(p.clamped, 0.0);
    /// ```
    #[must_use]
    pub fn progress(
        &self,
        target: Rect,
        viewport: Size,
        axis: ScrollAxis,
    ) -> Option<ScrollProgress> {
        let (pos, len) = axis.target_span(target);
        let view_len = axis.viewport_len(viewport);
        if !(pos.is_finite() && len.is_finite() && view_len.is_finite()) || view_len <= 0.0 {
            return None;
        }

        // Scroll distance still needed until each offset's edges meet.
        let meet = |offset: ScrollOffset| {
            pos + offset.target.resolve(len) - offset.viewport.resolve(view_len)
        };
        let enter = meet(self.enter);
        let exit = meet(self.exit);
        let span = exit - enter;
        if !span.is_finite() || span.abs() < f64::EPSILON {
            return None;
        }

        let raw = -enter / span;
        raw.is_finite().then(|| ScrollProgress::from_raw(raw))
    }
}
