// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use smallvec::SmallVec;

use crate::easing::Easing;

type Stops = SmallVec<[f64; 4]>;

/// A piecewise mapping from an input domain (usually progress) to output values.
///
/// Inputs are strictly increasing stops; each consecutive pair of stops forms
/// a segment that is interpolated with the map's [`Easing`] (linear by
/// default). At a stop the map returns that stop's output exactly.
///
/// Outside the domain the output clamps to the first/last output. An
/// [`unclamped`](RangeMap::unclamped) map instead extrapolates the boundary
/// segment linearly, which lets decorative layers keep drifting when the
/// input overshoots.
///
/// ```
/// use sway_motion::RangeMap;
///
/// let y = RangeMap::linear(150.0, -150.0);
/// assert_eq!(y.map(0.0), 150.0);
/// assert_eq!(y.map(0.5), 0.0);
/// assert_eq!(y.map(1.0), -150.0);
/// assert_eq!(y.map(2.0), -150.0);
///
/// let fade = RangeMap::new(&[0.0, 0.3, 0.7, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap();
/// assert_eq!(fade.map(0.5), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RangeMap {
    inputs: Stops,
    outputs: Stops,
    easing: Easing,
    clamp: bool,
}

impl RangeMap {
    /// Creates a map from matching input and output stops.
    pub fn new(inputs: &[f64], outputs: &[f64]) -> Result<Self, RangeMapError> {
        if inputs.len() != outputs.len() {
            return Err(RangeMapError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(RangeMapError::TooFewStops);
        }
        if inputs.iter().chain(outputs).any(|v| !v.is_finite()) {
            return Err(RangeMapError::NonFinite);
        }
        if inputs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(RangeMapError::NotIncreasing);
        }
        Ok(Self {
            inputs: inputs.iter().copied().collect(),
            outputs: outputs.iter().copied().collect(),
            easing: Easing::Linear,
            clamp: true,
        })
    }

    /// Maps `[0, 1]` linearly onto `[from, to]`.
    #[must_use]
    pub fn linear(from: f64, to: f64) -> Self {
        Self {
            inputs: [0.0, 1.0].into_iter().collect(),
            outputs: [from, to].into_iter().collect(),
            easing: Easing::Linear,
            clamp: true,
        }
    }

    /// Disables clamping so inputs outside the domain extrapolate.
    #[must_use]
    pub fn unclamped(mut self) -> Self {
        self.clamp = false;
        self
    }

    /// Sets the easing applied within each segment.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Returns the easing applied within each segment.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Returns `true` if inputs outside the domain clamp.
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        self.clamp
    }

    /// Returns the input domain as `(first, last)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.inputs[0], self.inputs[self.inputs.len() - 1])
    }

    /// Returns the output stops.
    #[must_use]
    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    /// Evaluates the map at `x`.
    ///
    /// A non-finite `x` returns the first output.
    #[must_use]
    pub fn map(&self, x: f64) -> f64 {
        let last = self.inputs.len() - 1;
        if !x.is_finite() {
            return self.outputs[0];
        }
        if x <= self.inputs[0] {
            return if self.clamp || x == self.inputs[0] {
                self.outputs[0]
            } else {
                self.extrapolate(0, x)
            };
        }
        if x >= self.inputs[last] {
            return if self.clamp || x == self.inputs[last] {
                self.outputs[last]
            } else {
                self.extrapolate(last - 1, x)
            };
        }

        // `x` is strictly inside the domain, so some segment contains it.
        let i = self
            .inputs
            .windows(2)
            .position(|w| x < w[1])
            .unwrap_or(last - 1);
        let (x0, x1) = (self.inputs[i], self.inputs[i + 1]);
        let (y0, y1) = (self.outputs[i], self.outputs[i + 1]);
        let t = self.easing.apply((x - x0) / (x1 - x0));
        y0 + (y1 - y0) * t
    }

    fn extrapolate(&self, segment: usize, x: f64) -> f64 {
        let (x0, x1) = (self.inputs[segment], self.inputs[segment + 1]);
        let (y0, y1) = (self.outputs[segment], self.outputs[segment + 1]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

/// Reasons a [`RangeMap`] could not be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeMapError {
    /// Input and output stop counts differ.
    LengthMismatch {
        /// Number of input stops.
        inputs: usize,
        /// Number of output stops.
        outputs: usize,
    },
    /// Fewer than two stops were given.
    TooFewStops,
    /// Input stops are not strictly increasing.
    NotIncreasing,
    /// A stop is NaN or infinite.
    NonFinite,
}

impl fmt::Display for RangeMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { inputs, outputs } => write!(
                f,
                "range map has {inputs} input stops but {outputs} output stops"
            ),
            Self::TooFewStops => f.write_str("range map needs at least two stops"),
            Self::NotIncreasing => f.write_str("range map input stops must strictly increase"),
            Self::NonFinite => f.write_str("range map stops must be finite"),
        }
    }
}

impl core::error::Error for RangeMapError {}

#[cfg(test)]
mod tests {
    use super::{RangeMap, RangeMapError};
    use crate::easing::Easing;

    #[test]
    fn boundaries_are_exact() {
        let m = RangeMap::new(&[0.0, 0.5], &[1.0, 0.92]).unwrap();
        assert_eq!(m.map(0.0), 1.0);
        assert_eq!(m.map(0.5), 0.92);
        assert_eq!(m.map(0.9), 0.92);
        assert_eq!(m.map(-0.2), 1.0);
    }

    #[test]
    fn unclamped_extrapolates_boundary_segments() {
        let m = RangeMap::linear(0.0, 400.0).unclamped();
        assert_eq!(m.map(1.5), 600.0);
        assert_eq!(m.map(-0.25), -100.0);
        // Boundaries stay exact.
        assert_eq!(m.map(1.0), 400.0);
        assert!(!m.is_clamped());
    }

    #[test]
    fn interior_stops_are_hit_exactly() {
        let m = RangeMap::new(&[0.0, 0.3, 0.7, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(m.map(0.3), 1.0);
        assert_eq!(m.map(0.7), 1.0);
        assert!((m.map(0.15) - 0.5).abs() < 1e-12);
        assert!((m.map(0.85) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn monotonic_outputs_give_monotonic_map() {
        let m = RangeMap::new(&[0.0, 0.2, 1.0], &[0.0, 50.0, 60.0])
            .unwrap()
            .with_easing(Easing::EaseInOut);
        let mut prev = m.map(-1.0);
        for i in -10..=110 {
            let v = m.map(f64::from(i) / 100.0);
            assert!(v >= prev - 1e-9, "map decreased at {i}");
            prev = v;
        }
    }

    #[test]
    fn non_finite_input_returns_first_output() {
        let m = RangeMap::linear(150.0, -150.0).unclamped();
        assert_eq!(m.map(f64::NAN), 150.0);
        assert_eq!(m.map(f64::INFINITY), 150.0);
    }

    #[test]
    fn rejects_invalid_stops() {
        assert_eq!(
            RangeMap::new(&[0.0, 1.0], &[0.0]),
            Err(RangeMapError::LengthMismatch {
                inputs: 2,
                outputs: 1
            })
        );
        assert_eq!(
            RangeMap::new(&[0.0], &[0.0]),
            Err(RangeMapError::TooFewStops)
        );
        assert_eq!(
            RangeMap::new(&[0.0, 0.0], &[0.0, 1.0]),
            Err(RangeMapError::NotIncreasing)
        );
        assert_eq!(
            RangeMap::new(&[0.0, 1.0], &[0.0, f64::NAN]),
            Err(RangeMapError::NonFinite)
        );
    }

    #[test]
    fn domain_reports_first_and_last_stop() {
        let m = RangeMap::new(&[0.1, 0.4, 0.9], &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(m.domain(), (0.1, 0.9));
        assert_eq!(m.outputs(), &[0.0, 1.0, 2.0]);
    }
}
