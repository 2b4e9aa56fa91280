// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

use kurbo::{Affine, Point, Vec2};

/// A visual property a layer can animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Horizontal offset in pixels.
    TranslateX,
    /// Vertical offset in pixels.
    TranslateY,
    /// Rotation in degrees, clockwise.
    Rotate,
    /// Uniform scale factor.
    Scale,
    /// Opacity in `[0, 1]`.
    Opacity,
}

impl Channel {
    /// Every channel, in composition order.
    pub const ALL: [Self; 5] = [
        Self::TranslateX,
        Self::TranslateY,
        Self::Rotate,
        Self::Scale,
        Self::Opacity,
    ];

    /// The value of this channel in [`LayerTransform::IDENTITY`].
    #[must_use]
    pub const fn identity(self) -> f64 {
        match self {
            Self::TranslateX | Self::TranslateY | Self::Rotate => 0.0,
            Self::Scale | Self::Opacity => 1.0,
        }
    }

    /// Returns `true` if contributions to this channel multiply rather than add.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Scale | Self::Opacity)
    }
}

/// The composed visual state of one layer for one frame.
///
/// Contributions combine per channel: translation and rotation add, scale and
/// opacity multiply. [`LayerTransform::IDENTITY`] is the neutral element and
/// the value every layer falls back to when its inputs are unavailable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerTransform {
    /// Offset in pixels.
    pub translate: Vec2,
    /// Rotation in degrees.
    pub rotate: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LayerTransform {
    /// No offset, no rotation, unit scale, fully opaque.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        rotate: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Returns the current value of `channel`.
    #[must_use]
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::TranslateX => self.translate.x,
            Channel::TranslateY => self.translate.y,
            Channel::Rotate => self.rotate,
            Channel::Scale => self.scale,
            Channel::Opacity => self.opacity,
        }
    }

    /// Combines `value` into `channel` (add or multiply, per channel).
    #[must_use]
    pub fn with(mut self, channel: Channel, value: f64) -> Self {
        match channel {
            Channel::TranslateX => self.translate.x += value,
            Channel::TranslateY => self.translate.y += value,
            Channel::Rotate => self.rotate += value,
            Channel::Scale => self.scale *= value,
            Channel::Opacity => self.opacity *= value,
        }
        self
    }

    /// Overwrites `channel` with `value`.
    #[must_use]
    pub fn with_set(mut self, channel: Channel, value: f64) -> Self {
        match channel {
            Channel::TranslateX => self.translate.x = value,
            Channel::TranslateY => self.translate.y = value,
            Channel::Rotate => self.rotate = value,
            Channel::Scale => self.scale = value,
            Channel::Opacity => self.opacity = value,
        }
        self
    }

    /// Combines every channel of `other` into `self`.
    #[must_use]
    pub fn then(self, other: Self) -> Self {
        Channel::ALL
            .into_iter()
            .fold(self, |acc, ch| acc.with(ch, other.get(ch)))
    }

    /// Channel-wise linear interpolation from `self` (`t = 0`) to `other` (`t = 1`).
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Channel::ALL.into_iter().fold(self, |acc, ch| {
            let a = self.get(ch);
            acc.with_set(ch, a + (other.get(ch) - a) * t)
        })
    }

    /// Replaces any non-finite channel with its identity value and clamps opacity into `[0, 1]`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let mut out = Channel::ALL.into_iter().fold(self, |acc, ch| {
            if acc.get(ch).is_finite() {
                acc
            } else {
                acc.with_set(ch, ch.identity())
            }
        });
        out.opacity = out.opacity.clamp(0.0, 1.0);
        out
    }

    /// Returns `true` if every channel is at its identity value.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Builds the affine transform that offsets, then rotates and scales about `origin`.
    ///
    /// Opacity is not part of the affine and must be applied separately.
    #[must_use]
    pub fn to_affine(&self, origin: Point) -> Affine {
        let pivot = origin.to_vec2();
        Affine::translate(pivot + self.translate)
            * Affine::rotate(self.rotate * PI / 180.0)
            * Affine::scale(self.scale)
            * Affine::translate(-pivot)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Channel, LayerTransform};

    #[test]
    fn channels_compose_additively_or_multiplicatively() {
        let t = LayerTransform::IDENTITY
            .with(Channel::TranslateY, 10.0)
            .with(Channel::TranslateY, -4.0)
            .with(Channel::Scale, 1.2)
            .with(Channel::Scale, 0.5)
            .with(Channel::Opacity, 0.5);
        assert_eq!(t.translate, Vec2::new(0.0, 6.0));
        assert!((t.scale - 0.6).abs() < 1e-12);
        assert_eq!(t.opacity, 0.5);
    }

    #[test]
    fn identity_is_neutral_for_then() {
        let t = LayerTransform::IDENTITY
            .with(Channel::Rotate, 15.0)
            .with(Channel::TranslateX, 3.0);
        assert_eq!(t.then(LayerTransform::IDENTITY), t);
        assert_eq!(LayerTransform::IDENTITY.then(t), t);
    }

    #[test]
    fn sanitized_removes_nan_and_clamps_opacity() {
        let t = LayerTransform {
            translate: Vec2::new(f64::NAN, 4.0),
            rotate: f64::INFINITY,
            scale: f64::NAN,
            opacity: 1.7,
        }
        .sanitized();
        assert_eq!(t.translate, Vec2::new(0.0, 4.0));
        assert_eq!(t.rotate, 0.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.opacity, 1.0);
    }

    #[test]
    fn lerp_hits_endpoints() {
        let a = LayerTransform::IDENTITY.with_set(Channel::Opacity, 0.0);
        let b = LayerTransform::IDENTITY.with(Channel::TranslateY, 50.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5).translate.y, 25.0);
    }

    #[test]
    fn affine_rotates_about_origin() {
        let t = LayerTransform::IDENTITY
            .with(Channel::Rotate, 90.0)
            .with(Channel::TranslateX, 5.0);
        let origin = Point::new(10.0, 10.0);
        let a = t.to_affine(origin);
        // The pivot only moves by the translation.
        let moved = a * origin;
        assert!((moved.x - 15.0).abs() < 1e-9);
        assert!((moved.y - 10.0).abs() < 1e-9);
        assert!(LayerTransform::IDENTITY.to_affine(origin) == kurbo::Affine::IDENTITY);
    }
}
