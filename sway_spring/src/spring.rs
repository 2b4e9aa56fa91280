// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::config::SpringConfig;

/// Longest frame time integrated in one [`Spring::step`], in seconds.
///
/// Longer gaps (a backgrounded tab, a debugger pause) are truncated so the
/// animation resumes from where it was instead of jumping.
pub const MAX_FRAME_DT: f64 = 0.1;

/// Upper bound for a single integration sub-step, in seconds.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Whether a spring still needs frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpringStatus {
    /// The value is still moving toward the target.
    Animating,
    /// The value sits exactly on the target with zero velocity.
    Settled,
}

/// A scalar smoothed by a damped spring.
///
/// The value lags behind [`Spring::set_target`] and converges onto it. Once
/// displacement and velocity both drop under the config's rest thresholds the
/// value snaps onto the target and [`Spring::step`] stops doing work until the
/// target changes again.
///
/// ```
/// use sway_spring::{Spring, SpringConfig, SpringStatus};
///
/// let mut spring = Spring::new(SpringConfig::SMOOTH_SCROLL, 0.0);
/// spring.set_target(1.0);
///
/// spring.step(1.0 / 60.0);
/// assert!(spring.value() > 0.0 && spring.value() < 1.0);
///
/// let mut frames = 0;
/// while spring.step(1.0 / 60.0) == SpringStatus::Animating {
///     frames += 1;
/// }
/// assert_eq!(spring.value(), 1.0);
/// assert!(frames < 600);
/// ```
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
    settled: bool,
    substep: f64,
}

impl Spring {
    /// Creates a spring at rest on `initial`.
    ///
    /// A non-finite `initial` is replaced by `0.0`.
    #[must_use]
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        let config = config.sanitized();
        let initial = if initial.is_finite() { initial } else { 0.0 };
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            settled: true,
            substep: substep_for(&config),
        }
    }

    /// Returns the (sanitized) config.
    #[must_use]
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Replaces the config, keeping the current value and velocity.
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config.sanitized();
        self.substep = substep_for(&self.config);
    }

    /// Current smoothed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Value the spring is moving toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns `true` when no further frames are needed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Moves the target. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() || target == self.target {
            return;
        }
        self.target = target;
        self.settled = false;
    }

    /// Places the spring at rest on `value`, skipping any animation.
    pub fn jump(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.settled = true;
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Non-positive or non-finite `dt` leaves the state untouched; `dt` larger
    /// than [`MAX_FRAME_DT`] is truncated.
    pub fn step(&mut self, dt: f64) -> SpringStatus {
        if self.settled {
            return SpringStatus::Settled;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return SpringStatus::Animating;
        }

        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.config;

        let mut remaining = dt.min(MAX_FRAME_DT);
        while remaining > 0.0 {
            let h = remaining.min(self.substep);
            let displacement = self.value - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            // Semi-implicit Euler: velocity first, then position with the new velocity.
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if !self.value.is_finite() || !self.velocity.is_finite() {
            self.jump(self.target);
            return SpringStatus::Settled;
        }

        if (self.value - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
            return SpringStatus::Settled;
        }
        SpringStatus::Animating
    }
}

/// Picks a sub-step short enough to keep semi-implicit Euler stable and accurate.
fn substep_for(config: &SpringConfig) -> f64 {
    let omega = config.natural_frequency();
    let decay = config.damping / config.mass;
    let mut h = MAX_SUBSTEP;
    if omega > 0.0 {
        h = h.min(0.5 / omega);
    }
    if decay > 0.0 {
        h = h.min(0.5 / decay);
    }
    h
}
