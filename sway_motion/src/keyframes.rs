// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based keyframe tracks for ambient loops.

use core::fmt;

use smallvec::SmallVec;

use crate::easing::Easing;
use crate::range_map::RangeMap;

/// How many times a keyframe track plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Repeat {
    /// Play once and hold the last value.
    #[default]
    Once,
    /// Play once, then repeat this many more times, then hold the last value.
    Times(u32),
    /// Loop for as long as the owner lives.
    Forever,
}

/// A track of values played over a fixed duration.
///
/// Values are spread evenly over the duration unless explicit offsets are
/// given; each segment between consecutive values is shaped by the track's
/// easing. Before the delay has elapsed the track reports its first value.
///
/// ```
/// use sway_motion::{Easing, Keyframes, Repeat};
///
/// // Drift out to 150px and back every 25 seconds.
/// let drift = Keyframes::new(&[0.0, 150.0, 0.0], 25.0)
///     .unwrap()
///     .with_easing(Easing::EaseInOut)
///     .with_repeat(Repeat::Forever);
///
/// assert_eq!(drift.sample(0.0), 0.0);
/// assert_eq!(drift.sample(12.5), 150.0);
/// assert_eq!(drift.sample(25.0), 0.0);
/// assert_eq!(drift.sample(37.5), 150.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Keyframes {
    track: RangeMap,
    duration: f64,
    delay: f64,
    repeat: Repeat,
}

impl Keyframes {
    /// Creates a track that plays `values` evenly over `duration` seconds.
    pub fn new(values: &[f64], duration: f64) -> Result<Self, KeyframesError> {
        if values.is_empty() {
            return Err(KeyframesError::NoValues);
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(KeyframesError::InvalidDuration);
        }
        let values: SmallVec<[f64; 4]> = if values.len() == 1 {
            [values[0], values[0]].into_iter().collect()
        } else {
            values.iter().copied().collect()
        };
        let last = values.len() - 1;
        let offsets: SmallVec<[f64; 4]> = (0..values.len())
            .map(|i| offset_of(i, last))
            .collect();
        let track = RangeMap::new(&offsets, &values).map_err(|_| KeyframesError::NonFinite)?;
        Ok(Self {
            track,
            duration,
            delay: 0.0,
            repeat: Repeat::Once,
        })
    }

    /// A track that holds `value` for one second and never loops.
    #[must_use]
    pub fn hold(value: f64) -> Self {
        Self {
            track: RangeMap::linear(value, value),
            duration: 1.0,
            delay: 0.0,
            repeat: Repeat::Once,
        }
    }

    /// Replaces the even spacing with explicit offsets in `[0, 1]`.
    ///
    /// Offsets must match the value count, start at `0`, end at `1` and
    /// strictly increase.
    pub fn with_offsets(self, offsets: &[f64]) -> Result<Self, KeyframesError> {
        let values = self.track.outputs();
        if offsets.len() != values.len() {
            return Err(KeyframesError::OffsetMismatch);
        }
        if offsets.first() != Some(&0.0) || offsets.last() != Some(&1.0) {
            return Err(KeyframesError::OffsetMismatch);
        }
        let track = RangeMap::new(offsets, values)
            .map_err(|_| KeyframesError::OffsetMismatch)?
            .with_easing(self.easing());
        Ok(Self { track, ..self })
    }

    /// Sets the easing applied between consecutive values.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.track = self.track.with_easing(easing);
        self
    }

    /// Delays the start of the track by `delay` seconds (negative values are treated as zero).
    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = if delay.is_finite() { delay.max(0.0) } else { 0.0 };
        self
    }

    /// Sets the repeat mode.
    #[must_use]
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Duration of one pass in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Start delay in seconds.
    #[must_use]
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Repeat mode.
    #[must_use]
    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Easing applied between consecutive values.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.track.easing()
    }

    /// Total play time including repeats, or `None` for [`Repeat::Forever`].
    #[must_use]
    pub fn total_duration(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Once => Some(self.delay + self.duration),
            Repeat::Times(n) => Some(self.delay + self.duration * (f64::from(n) + 1.0)),
            Repeat::Forever => None,
        }
    }

    /// Returns `true` once the track holds its final value for good.
    #[must_use]
    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.total_duration().is_some_and(|total| elapsed >= total)
    }

    /// Samples the track `elapsed` seconds after it was created.
    ///
    /// Non-finite or negative times return the first value.
    #[must_use]
    pub fn sample(&self, elapsed: f64) -> f64 {
        let values = self.track.outputs();
        if !elapsed.is_finite() || elapsed < self.delay {
            return values[0];
        }
        if self.is_finished(elapsed) {
            return values[values.len() - 1];
        }
        let local = elapsed - self.delay;
        let phase = (local % self.duration) / self.duration;
        self.track.map(phase)
    }
}

fn offset_of(i: usize, last: usize) -> f64 {
    // Pin the last offset so the final value is reached exactly.
    if i == last { 1.0 } else { i as f64 / last as f64 }
}

/// Reasons a [`Keyframes`] track could not be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyframesError {
    /// No values were given.
    NoValues,
    /// The duration was zero, negative or non-finite.
    InvalidDuration,
    /// A value was NaN or infinite.
    NonFinite,
    /// Explicit offsets did not match the values or were not an increasing `0..=1` run.
    OffsetMismatch,
}

impl fmt::Display for KeyframesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NoValues => "keyframes need at least one value",
            Self::InvalidDuration => "keyframe duration must be positive and finite",
            Self::NonFinite => "keyframe values must be finite",
            Self::OffsetMismatch => {
                "keyframe offsets must match the values and increase from 0 to 1"
            }
        };
        f.write_str(msg)
    }
}

impl core::error::Error for KeyframesError {}

#[cfg(test)]
mod tests {
    use super::{Keyframes, KeyframesError, Repeat};
    use crate::easing::Easing;

    #[test]
    fn once_holds_the_last_value() {
        let k = Keyframes::new(&[0.0, 12.0], 2.0).unwrap();
        assert_eq!(k.sample(1.0), 6.0);
        assert_eq!(k.sample(2.0), 12.0);
        assert_eq!(k.sample(100.0), 12.0);
        assert!(k.is_finished(2.0));
        assert!(!k.is_finished(1.99));
    }

    #[test]
    fn forever_wraps_and_never_finishes() {
        let k = Keyframes::new(&[0.0, 10.0], 4.0)
            .unwrap()
            .with_repeat(Repeat::Forever);
        assert_eq!(k.sample(1.0), 2.5);
        assert_eq!(k.sample(5.0), 2.5);
        assert!(!k.is_finished(1e9));
        assert_eq!(k.total_duration(), None);
    }

    #[test]
    fn counted_repeats_stop_after_last_pass() {
        let k = Keyframes::new(&[1.0, 1.2, 1.0], 1.5)
            .unwrap()
            .with_repeat(Repeat::Times(2));
        assert_eq!(k.total_duration(), Some(4.5));
        assert_eq!(k.sample(0.75 + 1.5), 1.2);
        assert_eq!(k.sample(10.0), 1.0);
    }

    #[test]
    fn delay_holds_the_first_value() {
        let k = Keyframes::new(&[0.2, 0.9, 0.2], 4.0)
            .unwrap()
            .with_delay(3.0)
            .with_repeat(Repeat::Forever);
        assert_eq!(k.sample(0.0), 0.2);
        assert_eq!(k.sample(2.9), 0.2);
        assert_eq!(k.sample(5.0), 0.9);
        assert_eq!(k.sample(f64::NAN), 0.2);
        assert_eq!(k.with_delay(-4.0).delay(), 0.0);
    }

    #[test]
    fn single_value_is_constant() {
        let k = Keyframes::new(&[360.0], 20.0).unwrap();
        assert_eq!(k.sample(0.0), 360.0);
        assert_eq!(k.sample(7.0), 360.0);
    }

    #[test]
    fn explicit_offsets_reshape_timing() {
        let k = Keyframes::new(&[0.0, -10.0, 10.0, 0.0], 1.0)
            .unwrap()
            .with_easing(Easing::EaseOut)
            .with_offsets(&[0.0, 0.1, 0.9, 1.0])
            .unwrap();
        assert_eq!(k.sample(0.1), -10.0);
        assert_eq!(k.sample(0.9), 10.0);
        assert_eq!(k.easing(), Easing::EaseOut);
    }

    #[test]
    fn rejects_invalid_tracks() {
        assert_eq!(Keyframes::new(&[], 1.0), Err(KeyframesError::NoValues));
        assert_eq!(
            Keyframes::new(&[0.0, 1.0], 0.0),
            Err(KeyframesError::InvalidDuration)
        );
        assert_eq!(
            Keyframes::new(&[0.0, f64::INFINITY], 1.0),
            Err(KeyframesError::NonFinite)
        );
        let k = Keyframes::new(&[0.0, 1.0, 0.0], 1.0).unwrap();
        assert_eq!(
            k.clone().with_offsets(&[0.0, 1.0]),
            Err(KeyframesError::OffsetMismatch)
        );
        assert_eq!(
            k.with_offsets(&[0.0, 0.8, 0.5]),
            Err(KeyframesError::OffsetMismatch)
        );
    }
}
