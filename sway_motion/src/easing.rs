// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves mapping normalized time in `[0, 1]` to normalized progress.

/// An easing curve.
///
/// Every curve maps `0.0` to `0.0` and `1.0` to `1.0` exactly. Inputs are
/// clamped into `[0, 1]`; non-finite inputs map to `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Slow start, `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// Slow end, `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// Slow start and end, `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// A CSS-style cubic Bézier with control points `(x1, y1)` and `(x2, y2)`.
    ///
    /// `x1` and `x2` are clamped into `[0, 1]` so the curve stays a function of time.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Material-style "standard" curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    pub const STANDARD: Self = Self::CubicBezier(0.4, 0.0, 0.2, 1.0);

    /// Applies the curve to `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if !t.is_finite() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// Evaluates the Bézier through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)` at `x = u`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, u: f64) -> f64 {
    let x1 = if x1.is_finite() { x1.clamp(0.0, 1.0) } else { 0.0 };
    let x2 = if x2.is_finite() { x2.clamp(0.0, 1.0) } else { 1.0 };
    let y1 = if y1.is_finite() { y1 } else { 0.0 };
    let y2 = if y2.is_finite() { y2 } else { 1.0 };

    // Polynomial coefficients with the endpoints fixed at (0, 0) and (1, 1).
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;

    // Newton-Raphson on x(t) = u, falling back to bisection.
    let mut t = u;
    let mut solved = false;
    for _ in 0..8 {
        let err = sample(ax, bx, cx, t) - u;
        if err.abs() < 1e-9 {
            solved = true;
            break;
        }
        let slope = (3.0 * ax * t + 2.0 * bx) * t + cx;
        if slope.abs() < 1e-9 {
            break;
        }
        t -= err / slope;
        if !(0.0..=1.0).contains(&t) {
            break;
        }
    }

    if !solved {
        let (mut lo, mut hi) = (0.0, 1.0);
        t = u;
        for _ in 0..48 {
            let x = sample(ax, bx, cx, t);
            if (x - u).abs() < 1e-9 {
                break;
            }
            if x < u {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

#[cfg(test)]
mod tests {
    use super::Easing;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::STANDARD,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn endpoints_are_exact() {
        for e in ALL {
            assert_eq!(e.apply(0.0), 0.0, "{e:?} at 0");
            assert_eq!(e.apply(1.0), 1.0, "{e:?} at 1");
            assert_eq!(e.apply(-3.0), 0.0, "{e:?} below 0");
            assert_eq!(e.apply(7.0), 1.0, "{e:?} above 1");
            assert_eq!(e.apply(f64::NAN), 0.0, "{e:?} at NaN");
        }
    }

    #[test]
    fn monotonic_curves_are_monotonic() {
        for e in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = e.apply(f64::from(i) / 100.0);
                assert!(v + 1e-9 >= prev, "{e:?} decreased at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let e = Easing::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ease_out_leads_ease_in() {
        assert!(Easing::EaseOut.apply(0.3) > 0.3);
        assert!(Easing::EaseIn.apply(0.3) < 0.3);
        assert!(Easing::STANDARD.apply(0.5) > 0.5);
    }
}
