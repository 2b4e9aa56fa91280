// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::window::{ScrollAxis, ScrollProgress, ScrollWindow};

/// Tracks one target's progress through a [`ScrollWindow`].
///
/// Call [`ScrollTracker::measure`] from every scroll and resize callback with
/// the target's current viewport-relative bounds. The tracker only stores the
/// most recent result; it never holds on to layout objects.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    window: ScrollWindow,
    axis: ScrollAxis,
    last: Option<ScrollProgress>,
}

impl ScrollTracker {
    /// Creates a vertical tracker over `window`.
    #[must_use]
    pub fn new(window: ScrollWindow) -> Self {
        Self {
            window,
            axis: ScrollAxis::Vertical,
            last: None,
        }
    }

    /// Sets the axis along which progress is measured.
    #[must_use]
    pub fn with_axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Returns the tracked window.
    #[must_use]
    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    /// Returns the axis progress is measured along.
    #[must_use]
    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    /// Records a new measurement and returns the resulting progress.
    ///
    /// An unusable measurement clears the stored progress, so consumers fall
    /// back to their neutral state instead of holding a stale value.
    pub fn measure(&mut self, target: Rect, viewport: Size) -> Option<ScrollProgress> {
        self.last = self.window.progress(target, viewport, self.axis);
        self.last
    }

    /// Latest progress, clamped into `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.last.map(|p| p.clamped)
    }

    /// Latest unclamped progress.
    #[must_use]
    pub fn raw_progress(&self) -> Option<f64> {
        self.last.map(|p| p.raw)
    }

    /// Latest full progress value.
    #[must_use]
    pub fn last(&self) -> Option<ScrollProgress> {
        self.last
    }

    /// Returns `true` if the last measurement produced a value.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.last.is_some()
    }

    /// Forgets the last measurement, e.g. when the target is detached.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
