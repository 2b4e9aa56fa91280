// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`

/// Physical parameters of a damped spring.
///
/// The spring pulls its value toward the target with force `stiffness * x`,
/// resisted by `damping * v`, acting on a body of `mass`. Rest thresholds
/// decide when the motion is considered finished.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    /// Restoring force per unit of displacement.
    pub stiffness: f64,
    /// Resisting force per unit of velocity.
    pub damping: f64,
    /// Mass of the simulated body.
    pub mass: f64,
    /// Displacement below which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::SMOOTH_SCROLL
    }
}

impl SpringConfig {
    /// Default rest displacement, sized for signals in `[0, 1]`.
    pub const DEFAULT_REST_DELTA: f64 = 1e-4;
    /// Default rest speed, sized for signals in `[0, 1]`.
    pub const DEFAULT_REST_SPEED: f64 = 1e-3;

    /// Heavy smoothing for scroll progress: lags the input, no ringing.
    pub const SMOOTH_SCROLL: Self = Self::new(100.0, 30.0, 0.5);
    /// Quick, lightly bouncy response for hover feedback.
    pub const SNAPPY: Self = Self::new(400.0, 17.0, 1.0);
    /// Springy pop used for icons that appear on reveal.
    pub const POP: Self = Self::new(200.0, 10.0, 1.0);

    /// Creates a config with the default rest thresholds.
    #[must_use]
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: Self::DEFAULT_REST_DELTA,
            rest_speed: Self::DEFAULT_REST_SPEED,
        }
    }

    /// Sets the rest thresholds.
    #[must_use]
    pub const fn with_rest(mut self, rest_delta: f64, rest_speed: f64) -> Self {
        self.rest_delta = rest_delta;
        self.rest_speed = rest_speed;
        self
    }

    /// Natural angular frequency `sqrt(k / m)` in radians per second.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `c / (2 * sqrt(k * m))`; `1.0` is critical damping.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Returns a config that is safe to integrate.
    ///
    /// Non-positive or non-finite stiffness/mass fall back to
    /// [`SpringConfig::SMOOTH_SCROLL`]; damping is kept non-negative and rest
    /// thresholds strictly positive.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.stiffness) || !positive(self.mass) {
            return Self::SMOOTH_SCROLL;
        }
        Self {
            stiffness: self.stiffness,
            damping: if self.damping.is_finite() {
                self.damping.max(0.0)
            } else {
                Self::SMOOTH_SCROLL.damping
            },
            mass: self.mass,
            rest_delta: if positive(self.rest_delta) {
                self.rest_delta
            } else {
                Self::DEFAULT_REST_DELTA
            },
            rest_speed: if positive(self.rest_speed) {
                self.rest_speed
            } else {
                Self::DEFAULT_REST_SPEED
            },
        }
    }
}
