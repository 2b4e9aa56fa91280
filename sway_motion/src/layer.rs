// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::gesture::{GestureOverride, blend_channel};
use crate::keyframes::Keyframes;
use crate::range_map::RangeMap;
use crate::transform::{Channel, LayerTransform};

/// Which progress signal a scroll binding reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressSource {
    /// Spring-smoothed progress (the usual choice).
    #[default]
    Smoothed,
    /// Unsmoothed progress, tracking scroll 1:1.
    Direct,
}

/// Drives one channel from scroll progress.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScrollBinding {
    /// Channel written.
    pub channel: Channel,
    /// Mapping from progress to the channel value.
    pub map: RangeMap,
    /// Progress signal read.
    pub source: ProgressSource,
}

/// Drives one channel from elapsed time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AmbientTrack {
    /// Channel written.
    pub channel: Channel,
    /// Values over time.
    pub keyframes: Keyframes,
}

/// Everything a layer may read for one frame.
///
/// Progress values are unclamped; each binding's [`RangeMap`] decides whether
/// to clamp. `None` progress means layout is not measured yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerInputs {
    /// Spring-smoothed progress.
    pub smoothed: Option<f64>,
    /// Unsmoothed progress.
    pub direct: Option<f64>,
    /// Seconds since the owning section was mounted.
    pub elapsed: f64,
    /// Latest pointer offset.
    pub pointer: Vec2,
    /// Hover weight in roughly `[0, 1]`.
    pub hover: f64,
    /// Press weight in roughly `[0, 1]`.
    pub press: f64,
}

impl Default for LayerInputs {
    fn default() -> Self {
        Self {
            smoothed: None,
            direct: None,
            elapsed: 0.0,
            pointer: Vec2::ZERO,
            hover: 0.0,
            press: 0.0,
        }
    }
}

/// A visual layer: a bundle of independent channel drivers.
///
/// Each driver contributes to one channel of the layer's
/// [`LayerTransform`]; drivers never see each other's output and layers never
/// see other layers.
///
/// ```
/// use sway_motion::{Channel, Layer, LayerInputs, RangeMap};
///
/// let layer = Layer::new()
///     .scroll(Channel::TranslateY, RangeMap::linear(150.0, -150.0).unclamped())
///     .scroll(Channel::Rotate, RangeMap::linear(0.0, 10.0));
///
/// let at = |p: f64| layer.evaluate(&LayerInputs { smoothed: Some(p), ..Default::default() });
/// assert_eq!(at(0.0).translate.y, 150.0);
/// assert_eq!(at(1.0).translate.y, -150.0);
/// assert_eq!(at(0.5).rotate, 5.0);
///
/// // Before layout is measured the layer rests at identity.
/// assert!(layer.evaluate(&LayerInputs::default()).is_identity());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layer {
    scroll: Vec<ScrollBinding>,
    ambient: Vec<AmbientTrack>,
    pointer: Option<Vec2>,
    hover: Option<GestureOverride>,
    press: Option<GestureOverride>,
}

impl Layer {
    /// Creates a layer with no drivers; it always evaluates to identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drives `channel` from smoothed progress.
    #[must_use]
    pub fn scroll(self, channel: Channel, map: RangeMap) -> Self {
        self.scroll_from(channel, map, ProgressSource::Smoothed)
    }

    /// Drives `channel` from progress read from `source`.
    #[must_use]
    pub fn scroll_from(mut self, channel: Channel, map: RangeMap, source: ProgressSource) -> Self {
        self.scroll.push(ScrollBinding {
            channel,
            map,
            source,
        });
        self
    }

    /// Drives `channel` from a time-based keyframe track.
    #[must_use]
    pub fn ambient(mut self, channel: Channel, keyframes: Keyframes) -> Self {
        self.ambient.push(AmbientTrack { channel, keyframes });
        self
    }

    /// Adds the pointer offset, scaled per axis by `factor`, to the translation.
    #[must_use]
    pub fn pointer(mut self, factor: Vec2) -> Self {
        self.pointer = Some(factor);
        self
    }

    /// Applies `overrides` while hovered.
    #[must_use]
    pub fn on_hover(mut self, overrides: GestureOverride) -> Self {
        self.hover = Some(overrides);
        self
    }

    /// Applies `overrides` while pressed; wins over hover for shared channels.
    #[must_use]
    pub fn on_press(mut self, overrides: GestureOverride) -> Self {
        self.press = Some(overrides);
        self
    }

    /// Scroll drivers.
    #[must_use]
    pub fn scroll_bindings(&self) -> &[ScrollBinding] {
        &self.scroll
    }

    /// Time drivers.
    #[must_use]
    pub fn ambient_tracks(&self) -> &[AmbientTrack] {
        &self.ambient
    }

    /// Returns `true` if the layer reacts to pointer movement.
    #[must_use]
    pub fn follows_pointer(&self) -> bool {
        self.pointer.is_some()
    }

    /// Returns `true` if the layer has hover or press overrides.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.hover.is_some() || self.press.is_some()
    }

    /// Returns `true` while some ambient track is still playing at `elapsed`.
    #[must_use]
    pub fn is_ambient_running(&self, elapsed: f64) -> bool {
        self.ambient
            .iter()
            .any(|track| !track.keyframes.is_finished(elapsed))
    }

    /// Composes every driver into this frame's transform.
    ///
    /// Scroll drivers without progress contribute nothing, so an unmeasured
    /// layer rests at its ambient/pointer state (identity if it has none).
    /// The result never contains NaN or infinities.
    #[must_use]
    pub fn evaluate(&self, inputs: &LayerInputs) -> LayerTransform {
        let mut out = LayerTransform::IDENTITY;

        for binding in &self.scroll {
            let progress = match binding.source {
                ProgressSource::Smoothed => inputs.smoothed,
                ProgressSource::Direct => inputs.direct,
            };
            if let Some(p) = progress.filter(|p| p.is_finite()) {
                out = out.with(binding.channel, binding.map.map(p));
            }
        }

        for track in &self.ambient {
            out = out.with(track.channel, track.keyframes.sample(inputs.elapsed));
        }

        if let Some(factor) = self.pointer {
            out.translate += Vec2::new(
                inputs.pointer.x * factor.x,
                inputs.pointer.y * factor.y,
            );
        }

        if self.is_interactive() {
            for channel in Channel::ALL {
                if let Some(v) = blend_channel(
                    channel,
                    self.hover.as_ref(),
                    inputs.hover,
                    self.press.as_ref(),
                    inputs.press,
                ) {
                    out = out.with(channel, v);
                }
            }
        }

        out.sanitized()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{Layer, LayerInputs, ProgressSource};
    use crate::gesture::GestureOverride;
    use crate::keyframes::{Keyframes, Repeat};
    use crate::range_map::RangeMap;
    use crate::transform::Channel;

    fn at(progress: f64) -> LayerInputs {
        LayerInputs {
            smoothed: Some(progress),
            direct: Some(progress),
            ..LayerInputs::default()
        }
    }

    #[test]
    fn declared_start_middle_and_end() {
        let layer = Layer::new().scroll(
            Channel::TranslateY,
            RangeMap::linear(150.0, -150.0).unclamped(),
        );
        assert_eq!(layer.evaluate(&at(0.0)).translate.y, 150.0);
        assert_eq!(layer.evaluate(&at(0.5)).translate.y, 0.0);
        assert_eq!(layer.evaluate(&at(1.0)).translate.y, -150.0);
    }

    #[test]
    fn clamped_and_unclamped_bindings_differ_past_the_window() {
        let layer = Layer::new()
            .scroll(Channel::TranslateY, RangeMap::linear(0.0, 400.0).unclamped())
            .scroll(Channel::Rotate, RangeMap::linear(0.0, 5.0));
        let t = layer.evaluate(&at(1.5));
        assert_eq!(t.translate.y, 600.0);
        assert_eq!(t.rotate, 5.0);
    }

    #[test]
    fn sources_are_independent() {
        let layer = Layer::new()
            .scroll(Channel::TranslateY, RangeMap::linear(0.0, 100.0))
            .scroll_from(
                Channel::TranslateX,
                RangeMap::linear(0.0, 100.0),
                ProgressSource::Direct,
            );
        let t = layer.evaluate(&LayerInputs {
            smoothed: Some(0.25),
            direct: Some(0.75),
            ..LayerInputs::default()
        });
        assert_eq!(t.translate, Vec2::new(75.0, 25.0));
    }

    #[test]
    fn unmeasured_progress_rests_at_identity() {
        let layer = Layer::new()
            .scroll(Channel::Scale, RangeMap::linear(1.0, 1.2))
            .scroll(Channel::Opacity, RangeMap::linear(1.0, 0.0));
        assert!(layer.evaluate(&LayerInputs::default()).is_identity());
        let nan = LayerInputs {
            smoothed: Some(f64::NAN),
            ..LayerInputs::default()
        };
        assert!(layer.evaluate(&nan).is_identity());
    }

    #[test]
    fn ambient_and_pointer_add_on_top_of_scroll() {
        let layer = Layer::new()
            .scroll(Channel::TranslateX, RangeMap::linear(0.0, 10.0))
            .ambient(
                Channel::TranslateX,
                Keyframes::new(&[0.0, 150.0, 0.0], 25.0)
                    .unwrap()
                    .with_repeat(Repeat::Forever),
            )
            .pointer(Vec2::new(0.5, 0.0));
        let t = layer.evaluate(&LayerInputs {
            smoothed: Some(1.0),
            elapsed: 12.5,
            pointer: Vec2::new(8.0, 8.0),
            ..LayerInputs::default()
        });
        assert_eq!(t.translate, Vec2::new(10.0 + 150.0 + 4.0, 0.0));
        assert!(layer.is_ambient_running(1e6));
        assert!(layer.follows_pointer());
    }

    #[test]
    fn gesture_overrides_revert_with_their_weight() {
        let layer = Layer::new()
            .scroll(Channel::TranslateY, RangeMap::linear(0.0, 100.0))
            .on_hover(GestureOverride::new().set(Channel::Scale, 1.05).set(Channel::TranslateY, -3.0))
            .on_press(GestureOverride::new().set(Channel::Scale, 0.95));
        assert!(layer.is_interactive());

        let base = at(0.5);
        let idle = layer.evaluate(&base);
        assert_eq!(idle.scale, 1.0);
        assert_eq!(idle.translate.y, 50.0);

        let hovered = layer.evaluate(&LayerInputs { hover: 1.0, ..base });
        assert_eq!(hovered.scale, 1.05);
        assert_eq!(hovered.translate.y, 47.0);

        let pressed = layer.evaluate(&LayerInputs {
            hover: 1.0,
            press: 1.0,
            ..base
        });
        assert_eq!(pressed.scale, 0.95);

        // Interaction over: back to the baseline.
        assert_eq!(layer.evaluate(&base), idle);
    }

    #[test]
    fn finished_ambient_tracks_stop_running() {
        let layer = Layer::new().ambient(
            Channel::Opacity,
            Keyframes::new(&[0.0, 1.0], 1.0).unwrap(),
        );
        assert!(layer.is_ambient_running(0.5));
        assert!(!layer.is_ambient_running(1.0));
        assert_eq!(layer.evaluate(&LayerInputs { elapsed: 2.0, ..LayerInputs::default() }).opacity, 1.0);
    }
}
