// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Fraction of `target`'s area that lies inside `viewport`.
///
/// Returns `None` if either rectangle has no area or a coordinate is not
/// finite; such measurements must not reveal anything.
#[must_use]
pub fn intersection_ratio(target: Rect, viewport: Rect) -> Option<f64> {
    if !target.is_finite() || !viewport.is_finite() {
        return None;
    }
    let target = target.abs();
    let viewport = viewport.abs();
    let area = target.area();
    if area <= 0.0 || viewport.area() <= 0.0 {
        return None;
    }
    let visible = target.intersect(viewport).area();
    Some((visible / area).clamp(0.0, 1.0))
}

/// Visibility state of a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealState {
    /// The section has not been sufficiently visible yet.
    #[default]
    Unseen,
    /// The section crossed the threshold once. Terminal.
    Revealed,
}

/// A one-shot trigger that fires the first time an intersection ratio reaches a threshold.
///
/// Once revealed it stays revealed for the lifetime of the trigger, no matter
/// how often the element scrolls out and back in.
///
/// ```
/// use sway_reveal::{RevealState, RevealTrigger};
///
/// let mut trigger = RevealTrigger::new(0.2);
/// assert!(!trigger.observe(0.0));
/// assert!(trigger.observe(0.25));
/// assert!(!trigger.observe(0.0));
/// assert_eq!(trigger.state(), RevealState::Revealed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    state: RevealState,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl RevealTrigger {
    /// Threshold used by most sections: a tenth of the element visible.
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    /// Creates an unseen trigger. `threshold` is clamped into `[0, 1]`;
    /// a non-finite threshold falls back to [`Self::DEFAULT_THRESHOLD`].
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            Self::DEFAULT_THRESHOLD
        };
        Self {
            threshold,
            state: RevealState::Unseen,
        }
    }

    /// Configured threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Returns `true` once revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds a new intersection ratio.
    ///
    /// Returns `true` only for the observation that causes the
    /// `Unseen → Revealed` transition. Non-finite ratios are ignored.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.is_revealed() || !ratio.is_finite() {
            return false;
        }
        if ratio >= self.threshold {
            self.state = RevealState::Revealed;
            return true;
        }
        false
    }

    /// Measures `target` against `viewport` and feeds the resulting ratio.
    ///
    /// Unusable measurements are ignored.
    pub fn observe_rects(&mut self, target: Rect, viewport: Rect) -> bool {
        intersection_ratio(target, viewport).is_some_and(|ratio| self.observe(ratio))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{RevealState, RevealTrigger, intersection_ratio};

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[test]
    fn ratio_of_partially_visible_target() {
        let target = Rect::new(0.0, 700.0, 1000.0, 1100.0);
        assert_eq!(intersection_ratio(target, VIEWPORT), Some(0.25));
        let off = Rect::new(0.0, 900.0, 1000.0, 1000.0);
        assert_eq!(intersection_ratio(off, VIEWPORT), Some(0.0));
        let inside = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(intersection_ratio(inside, VIEWPORT), Some(1.0));
    }

    #[test]
    fn ratio_is_none_for_unusable_measurements() {
        let target = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(intersection_ratio(target, Rect::ZERO), None);
        assert_eq!(intersection_ratio(Rect::ZERO, VIEWPORT), None);
        assert_eq!(
            intersection_ratio(Rect::new(0.0, f64::NAN, 1.0, 1.0), VIEWPORT),
            None
        );
    }

    #[test]
    fn fires_exactly_once_under_oscillation() {
        let mut t = RevealTrigger::new(0.2);
        let mut fired = 0;
        for ratio in [0.0, 0.1, 0.19, 0.25, 0.0, 0.5, 0.0, 0.3, 1.0, 0.0] {
            if t.observe(ratio) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(t.is_revealed());
    }

    #[test]
    fn threshold_is_inclusive_and_clamped() {
        let mut t = RevealTrigger::new(0.1);
        assert!(t.observe(0.1));

        assert_eq!(RevealTrigger::new(3.0).threshold(), 1.0);
        assert_eq!(RevealTrigger::new(-1.0).threshold(), 0.0);
        assert_eq!(
            RevealTrigger::new(f64::NAN).threshold(),
            RevealTrigger::DEFAULT_THRESHOLD
        );
    }

    #[test]
    fn nan_ratios_do_not_reveal() {
        let mut t = RevealTrigger::new(0.0);
        assert!(!t.observe(f64::NAN));
        assert_eq!(t.state(), RevealState::Unseen);
    }

    #[test]
    fn observe_rects_measures_then_observes() {
        let mut t = RevealTrigger::new(0.2);
        assert!(!t.observe_rects(Rect::new(0.0, 790.0, 1000.0, 1190.0), VIEWPORT));
        assert!(t.observe_rects(Rect::new(0.0, 600.0, 1000.0, 1000.0), VIEWPORT));
        assert!(!t.observe_rects(Rect::new(0.0, 600.0, 1000.0, 1000.0), Rect::ZERO));
    }
}
