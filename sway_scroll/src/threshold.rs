// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A boolean flag that is set while the page scroll offset is past a threshold.
///
/// Unlike a reveal trigger this flag follows the scroll position in both
/// directions. [`ScrollThreshold::update`] reports only transitions, so callers
/// can restyle on change instead of on every scroll event.
///
/// ```
/// use sway_scroll::ScrollThreshold;
///
/// let mut scrolled = ScrollThreshold::new(50.0);
/// assert_eq!(scrolled.update(10.0), None);
/// assert_eq!(scrolled.update(51.0), Some(true));
/// assert_eq!(scrolled.update(80.0), None);
/// assert_eq!(scrolled.update(0.0), Some(false));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThreshold {
    threshold: f64,
    past: bool,
}

impl ScrollThreshold {
    /// Creates a flag that turns on strictly above `threshold` pixels of scroll.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            past: false,
        }
    }

    /// Feeds the current scroll offset; returns the new flag value if it changed.
    ///
    /// Non-finite offsets are ignored.
    pub fn update(&mut self, scroll_offset: f64) -> Option<bool> {
        if !scroll_offset.is_finite() {
            return None;
        }
        let past = scroll_offset > self.threshold;
        if past == self.past {
            return None;
        }
        self.past = past;
        Some(past)
    }

    /// Returns the current flag value.
    #[must_use]
    pub fn is_past(&self) -> bool {
        self.past
    }

    /// Returns the configured threshold in pixels.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollThreshold;

    #[test]
    fn threshold_is_exclusive() {
        let mut t = ScrollThreshold::new(50.0);
        assert_eq!(t.update(50.0), None);
        assert!(!t.is_past());
        assert_eq!(t.update(50.5), Some(true));
    }

    #[test]
    fn non_finite_offsets_are_ignored() {
        let mut t = ScrollThreshold::new(50.0);
        t.update(100.0);
        assert_eq!(t.update(f64::NAN), None);
        assert!(t.is_past());
    }
}
