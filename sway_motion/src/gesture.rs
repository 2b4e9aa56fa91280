// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover and press overrides layered over a scroll-driven baseline.
//!
//! A [`GestureOverride`] names target values for some channels (for example
//! "scale to 1.05 and lift 3px while hovered"). [`GestureState`] smooths the
//! hover and press flags into weights with springs; the layer composer blends
//! each override in proportion to its weight, so the override eases in when
//! the interaction starts and eases back out to nothing when it ends.

use sway_spring::{Spring, SpringConfig, SpringStatus};

use crate::transform::Channel;

/// Per-channel target values applied while a gesture is active.
///
/// Unset channels are left to the baseline. Values are expressed like the
/// channel itself: pixels, degrees, a scale factor or an opacity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureOverride {
    /// Horizontal offset while active.
    pub translate_x: Option<f64>,
    /// Vertical offset while active.
    pub translate_y: Option<f64>,
    /// Rotation while active.
    pub rotate: Option<f64>,
    /// Scale while active.
    pub scale: Option<f64>,
    /// Opacity while active.
    pub opacity: Option<f64>,
}

impl GestureOverride {
    /// An override that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `channel` to `value` while active.
    #[must_use]
    pub fn set(mut self, channel: Channel, value: f64) -> Self {
        *self.slot(channel) = Some(value);
        self
    }

    /// Returns the override for `channel`, if any.
    #[must_use]
    pub fn get(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::TranslateX => self.translate_x,
            Channel::TranslateY => self.translate_y,
            Channel::Rotate => self.rotate,
            Channel::Scale => self.scale,
            Channel::Opacity => self.opacity,
        }
    }

    fn slot(&mut self, channel: Channel) -> &mut Option<f64> {
        match channel {
            Channel::TranslateX => &mut self.translate_x,
            Channel::TranslateY => &mut self.translate_y,
            Channel::Rotate => &mut self.rotate,
            Channel::Scale => &mut self.scale,
            Channel::Opacity => &mut self.opacity,
        }
    }
}

/// Blends `hover` and `press` overrides for one channel.
///
/// Starts from the channel identity, moves toward the hover value by
/// `hover_weight`, then toward the press value by `press_weight`, so a press
/// wins over a hover for channels both set. Returns `None` if neither sets the
/// channel.
#[must_use]
pub fn blend_channel(
    channel: Channel,
    hover: Option<&GestureOverride>,
    hover_weight: f64,
    press: Option<&GestureOverride>,
    press_weight: f64,
) -> Option<f64> {
    let h = hover.and_then(|o| o.get(channel));
    let p = press.and_then(|o| o.get(channel));
    if h.is_none() && p.is_none() {
        return None;
    }
    let id = channel.identity();
    let mut v = id;
    if let Some(h) = h {
        v += (h - id) * hover_weight;
    }
    if let Some(p) = p {
        v += (p - v) * press_weight;
    }
    Some(v)
}

/// Spring-smoothed hover and press weights for one interactive element.
#[derive(Clone, Debug)]
pub struct GestureState {
    hover: Spring,
    press: Spring,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new(SpringConfig::SNAPPY)
    }
}

impl GestureState {
    /// Creates an idle state whose weights move with `config`.
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self {
            hover: Spring::new(config, 0.0),
            press: Spring::new(config, 0.0),
        }
    }

    /// Marks the pointer as over (or no longer over) the element.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hover.set_target(if hovered { 1.0 } else { 0.0 });
    }

    /// Marks the element as pressed (or released).
    pub fn set_pressed(&mut self, pressed: bool) {
        self.press.set_target(if pressed { 1.0 } else { 0.0 });
    }

    /// Returns `true` while the pointer is over the element.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hover.target() > 0.5
    }

    /// Returns `true` while the element is pressed.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.target() > 0.5
    }

    /// Current hover weight (may briefly overshoot `1.0`).
    #[must_use]
    pub fn hover_weight(&self) -> f64 {
        self.hover.value()
    }

    /// Current press weight (may briefly overshoot `1.0`).
    #[must_use]
    pub fn press_weight(&self) -> f64 {
        self.press.value()
    }

    /// Advances both weights by `dt` seconds; returns `true` while either still moves.
    pub fn step(&mut self, dt: f64) -> bool {
        let hover = self.hover.step(dt);
        let press = self.press.step(dt);
        hover == SpringStatus::Animating || press == SpringStatus::Animating
    }

    /// Returns `true` while either weight is still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.hover.is_settled() || !self.press.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::{GestureOverride, GestureState, blend_channel};
    use crate::transform::Channel;

    fn settle(state: &mut GestureState) {
        for _ in 0..600 {
            if !state.step(1.0 / 60.0) {
                return;
            }
        }
        panic!("gesture weights did not settle");
    }

    #[test]
    fn press_wins_over_hover_for_shared_channels() {
        let hover = GestureOverride::new()
            .set(Channel::Scale, 1.05)
            .set(Channel::TranslateY, -3.0);
        let press = GestureOverride::new().set(Channel::Scale, 0.95);

        let scale = blend_channel(Channel::Scale, Some(&hover), 1.0, Some(&press), 1.0);
        assert_eq!(scale, Some(0.95));
        let lift = blend_channel(Channel::TranslateY, Some(&hover), 1.0, Some(&press), 1.0);
        assert_eq!(lift, Some(-3.0));
        let rotate = blend_channel(Channel::Rotate, Some(&hover), 1.0, Some(&press), 1.0);
        assert_eq!(rotate, None);
    }

    #[test]
    fn zero_weights_give_identity() {
        let hover = GestureOverride::new().set(Channel::Scale, 1.1);
        assert_eq!(
            blend_channel(Channel::Scale, Some(&hover), 0.0, None, 0.0),
            Some(1.0)
        );
    }

    #[test]
    fn hover_eases_in_and_reverts() {
        let mut g = GestureState::default();
        assert!(!g.is_animating());

        g.set_hovered(true);
        assert!(g.is_hovered());
        g.step(1.0 / 60.0);
        assert!(g.hover_weight() > 0.0 && g.hover_weight() < 1.0);
        settle(&mut g);
        assert_eq!(g.hover_weight(), 1.0);

        g.set_hovered(false);
        settle(&mut g);
        assert_eq!(g.hover_weight(), 0.0);
        assert!(!g.is_hovered());
    }

    #[test]
    fn press_is_tracked_separately() {
        let mut g = GestureState::default();
        g.set_pressed(true);
        settle(&mut g);
        assert!(g.is_pressed());
        assert_eq!(g.press_weight(), 1.0);
        assert_eq!(g.hover_weight(), 0.0);
    }
}
