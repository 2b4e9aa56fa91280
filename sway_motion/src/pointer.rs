// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Cursor position normalized to the viewport centre and scaled.
///
/// A pointer at the viewport centre yields a zero offset; at the corners the
/// offset is `±strength / 2` on each axis. The offset is independent of
/// scroll and is meant to be added to a layer's translation.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use sway_motion::PointerOffset;
///
/// let mut pointer = PointerOffset::new(30.0);
/// pointer.update(Point::new(1000.0, 0.0), Size::new(1000.0, 800.0));
/// assert_eq!(pointer.offset(), Vec2::new(15.0, -15.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerOffset {
    strength: f64,
    offset: Vec2,
}

impl PointerOffset {
    /// Creates a tracker whose full-viewport sweep spans `strength` pixels.
    #[must_use]
    pub fn new(strength: f64) -> Self {
        Self {
            strength,
            offset: Vec2::ZERO,
        }
    }

    /// Computes the offset for a pointer at `pointer` in a viewport of `viewport`.
    ///
    /// Returns [`Vec2::ZERO`] when the viewport has no area or any input is
    /// non-finite.
    #[must_use]
    pub fn from_client(pointer: Point, viewport: Size, strength: f64) -> Vec2 {
        let usable = viewport.width > 0.0
            && viewport.height > 0.0
            && viewport.is_finite()
            && pointer.is_finite()
            && strength.is_finite();
        if !usable {
            return Vec2::ZERO;
        }
        Vec2::new(
            (pointer.x / viewport.width - 0.5) * strength,
            (pointer.y / viewport.height - 0.5) * strength,
        )
    }

    /// Records a pointer move.
    pub fn update(&mut self, pointer: Point, viewport: Size) -> Vec2 {
        self.offset = Self::from_client(pointer, viewport, self.strength);
        self.offset
    }

    /// Returns to the centred state, e.g. when the pointer leaves the window.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Latest offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Configured strength.
    #[must_use]
    pub fn strength(&self) -> f64 {
        self.strength
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::PointerOffset;

    #[test]
    fn centre_is_zero() {
        let v = PointerOffset::from_client(Point::new(400.0, 300.0), Size::new(800.0, 600.0), 30.0);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn zero_viewport_is_neutral() {
        let mut p = PointerOffset::new(20.0);
        assert_eq!(p.update(Point::new(5.0, 5.0), Size::ZERO), Vec2::ZERO);
        assert_eq!(
            PointerOffset::from_client(Point::new(f64::NAN, 0.0), Size::new(10.0, 10.0), 20.0),
            Vec2::ZERO
        );
    }

    #[test]
    fn reset_recentres() {
        let mut p = PointerOffset::new(20.0);
        p.update(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        assert_eq!(p.offset(), Vec2::new(-10.0, -10.0));
        p.reset();
        assert_eq!(p.offset(), Vec2::ZERO);
    }
}
