// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use sway_motion::{Easing, LayerTransform};

/// A one-shot entry animation played once a section has been revealed.
///
/// The element rests at `from` until revealed, then eases to
/// [`LayerTransform::IDENTITY`] over `duration` seconds after `delay`.
///
/// ```
/// use sway_reveal::EntryAnimation;
///
/// let fade = EntryAnimation::fade_up(30.0);
/// assert_eq!(fade.sample(None).opacity, 0.0);
/// assert_eq!(fade.sample(None).translate.y, 30.0);
/// assert!(fade.sample(Some(10.0)).is_identity());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryAnimation {
    /// Transform before the animation starts.
    pub from: LayerTransform,
    /// Seconds from start to rest.
    pub duration: f64,
    /// Seconds between the reveal and the start.
    pub delay: f64,
    /// Progress curve.
    pub easing: Easing,
}

impl Default for EntryAnimation {
    fn default() -> Self {
        Self::fade_up(Self::DEFAULT_DISTANCE)
    }
}

impl EntryAnimation {
    /// Default duration in seconds.
    pub const DEFAULT_DURATION: f64 = 0.8;
    /// Default travel in pixels for slide-in presets.
    pub const DEFAULT_DISTANCE: f64 = 30.0;

    /// Animation from `from` to identity with the default duration and [`Easing::STANDARD`].
    #[must_use]
    pub fn new(from: LayerTransform) -> Self {
        Self {
            from,
            duration: Self::DEFAULT_DURATION,
            delay: 0.0,
            easing: Easing::STANDARD,
        }
    }

    /// Fades in while rising `distance` pixels.
    #[must_use]
    pub fn fade_up(distance: f64) -> Self {
        Self::new(LayerTransform {
            translate: Vec2::new(0.0, distance),
            opacity: 0.0,
            ..LayerTransform::IDENTITY
        })
    }

    /// Fades in while sliding horizontally from `dx` pixels.
    #[must_use]
    pub fn fade_from_side(dx: f64) -> Self {
        Self::new(LayerTransform {
            translate: Vec2::new(dx, 0.0),
            opacity: 0.0,
            ..LayerTransform::IDENTITY
        })
    }

    /// Fades in while growing from `scale`.
    #[must_use]
    pub fn pop(scale: f64) -> Self {
        Self::new(LayerTransform {
            scale,
            opacity: 0.0,
            ..LayerTransform::IDENTITY
        })
    }

    /// Sets the duration. Non-positive or non-finite values make the animation instant.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the delay after the reveal.
    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the easing.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Returns a copy delayed for the `index`-th item of a list.
    ///
    /// The delay becomes `base + index * step`.
    #[must_use]
    pub fn stagger(self, base: f64, step: f64, index: usize) -> Self {
        self.with_delay(base + index as f64 * step)
    }

    fn delay(&self) -> f64 {
        if self.delay.is_finite() {
            self.delay.max(0.0)
        } else {
            0.0
        }
    }

    /// Returns `true` once the animation has reached rest.
    #[must_use]
    pub fn is_finished(&self, since_reveal: Option<f64>) -> bool {
        since_reveal.is_some_and(|t| self.progress(t) >= 1.0)
    }

    fn progress(&self, since_reveal: f64) -> f64 {
        if !since_reveal.is_finite() {
            return 0.0;
        }
        let local = since_reveal - self.delay();
        if local <= 0.0 {
            return 0.0;
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return 1.0;
        }
        (local / self.duration).min(1.0)
    }

    /// Transform `since_reveal` seconds after the reveal; `None` means not revealed yet.
    #[must_use]
    pub fn sample(&self, since_reveal: Option<f64>) -> LayerTransform {
        let Some(t) = since_reveal else {
            return self.from.sanitized();
        };
        let p = self.progress(t);
        if p >= 1.0 {
            return LayerTransform::IDENTITY;
        }
        self.from
            .lerp(LayerTransform::IDENTITY, self.easing.apply(p))
            .sanitized()
    }
}
