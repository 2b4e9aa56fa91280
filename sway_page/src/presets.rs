// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made sections for a single-page portfolio.
//!
//! Each function returns a [`SectionConfig`] whose layers are, in order, the
//! section's foreground content followed by its background blobs (and cards,
//! for list sections). Callers can append their own layers.

use kurbo::Vec2;
use sway_motion::{
    Channel, Easing, GestureOverride, Keyframes, Layer, LayerTransform, ProgressSource, RangeMap,
    Repeat,
};
use sway_reveal::EntryAnimation;
use sway_scroll::ScrollWindow;

use crate::section::SectionConfig;

/// Pointer strength of the hero, in pixels across a full sweep.
pub const HERO_POINTER_STRENGTH: f64 = 30.0;

/// Delay step between consecutive list items.
pub const STAGGER_STEP: f64 = 0.1;

fn blob(y: (f64, f64), x: f64, rotate: f64) -> Layer {
    Layer::new()
        .scroll(Channel::TranslateY, RangeMap::linear(y.0, y.1))
        .scroll(Channel::TranslateX, RangeMap::linear(0.0, x))
        .scroll(Channel::Rotate, RangeMap::linear(0.0, rotate))
}

fn drift(values: &[f64], duration: f64, easing: Easing) -> Keyframes {
    match Keyframes::new(values, duration) {
        Ok(k) => k.with_easing(easing).with_repeat(Repeat::Forever),
        Err(_) => Keyframes::hold(values.first().copied().unwrap_or_default()),
    }
}

fn growing_blob(y: (f64, f64), x: f64, rotate: f64, scale: f64) -> Layer {
    blob(y, x, rotate).scroll(Channel::Scale, RangeMap::linear(1.0, scale))
}

// Falls back to a constant 1, the identity of the scale and opacity channels.
fn banded(inputs: &[f64], outputs: &[f64]) -> RangeMap {
    RangeMap::new(inputs, outputs).unwrap_or_else(|_| RangeMap::linear(1.0, 1.0))
}

// Card that swings from one side to the other; `side` is 1 for even cards.
fn swinging_card(side: f64, y: f64, x: f64, rotate: f64) -> Layer {
    Layer::new()
        .scroll(
            Channel::TranslateY,
            RangeMap::linear(y * side, -y * side).unclamped(),
        )
        .scroll(Channel::TranslateX, RangeMap::linear(x * side, -x * side))
        .scroll(Channel::Rotate, RangeMap::linear(rotate * side, -rotate * side))
}

fn parity(index: usize) -> f64 {
    if index % 2 == 0 { 1.0 } else { -1.0 }
}

// Rises 50 px while growing from 90% and fading in.
fn rise_and_grow() -> EntryAnimation {
    EntryAnimation::new(LayerTransform {
        translate: Vec2::new(0.0, 50.0),
        scale: 0.9,
        opacity: 0.0,
        ..LayerTransform::IDENTITY
    })
}

fn heading() -> EntryAnimation {
    EntryAnimation::fade_up(50.0).with_duration(1.0)
}

/// The pinned hero: content drifts down and fades while five blobs move at
/// different speeds, loop on their own and follow the pointer.
#[must_use]
pub fn hero() -> SectionConfig {
    let content = Layer::new()
        .scroll(Channel::TranslateY, RangeMap::linear(0.0, 400.0).unclamped())
        .scroll(Channel::Opacity, banded(&[0.0, 0.5], &[1.0, 0.0]))
        .scroll(Channel::Scale, banded(&[0.0, 0.5], &[1.0, 0.92]))
        .scroll(Channel::Rotate, RangeMap::linear(0.0, 5.0));

    let slow = blob((0.0, 200.0), 0.0, 10.0)
        .ambient(Channel::TranslateX, drift(&[0.0, 150.0, 0.0], 25.0, Easing::EaseInOut))
        .ambient(Channel::TranslateY, drift(&[0.0, 100.0, 0.0], 25.0, Easing::EaseInOut))
        .ambient(Channel::Scale, drift(&[1.0, 1.4, 1.0], 25.0, Easing::EaseInOut))
        .pointer(Vec2::new(0.3, 0.0));
    let medium = blob((0.0, -250.0), 0.0, -15.0)
        .ambient(Channel::TranslateX, drift(&[0.0, -150.0, 0.0], 30.0, Easing::EaseInOut))
        .ambient(Channel::TranslateY, drift(&[0.0, -100.0, 0.0], 30.0, Easing::EaseInOut))
        .ambient(Channel::Scale, drift(&[1.0, 1.5, 1.0], 30.0, Easing::EaseInOut))
        .pointer(Vec2::new(-0.4, 0.0));
    let fast = blob((0.0, 300.0), 0.0, 360.0)
        .ambient(Channel::Scale, drift(&[1.0, 1.3, 1.0], 40.0, Easing::Linear))
        .ambient(Channel::Rotate, drift(&[0.0, 180.0, 360.0], 40.0, Easing::Linear))
        .pointer(Vec2::new(0.5, 0.0));
    let near = growing_blob((0.0, 500.0), 0.0, -20.0, 1.2)
        .pointer(Vec2::new(0.6, 0.0));
    let reverse = growing_blob((0.0, -250.0), 0.0, 25.0, 1.15)
        .pointer(Vec2::new(-0.5, 0.0));

    SectionConfig::new("hero")
        .with_window(ScrollWindow::PIN_TOP)
        .with_pointer(HERO_POINTER_STRENGTH)
        .layer_with_entry(content, EntryAnimation::fade_up(EntryAnimation::DEFAULT_DISTANCE))
        .layer(slow)
        .layer(medium)
        .layer(fast)
        .layer(near)
        .layer(reverse)
}

/// The biography: content rises through the viewport and fades at both ends;
/// the portrait card tilts with raw progress and grows on hover.
#[must_use]
pub fn about() -> SectionConfig {
    let content = Layer::new()
        .scroll(Channel::TranslateY, RangeMap::linear(150.0, -150.0).unclamped())
        .scroll(
            Channel::Opacity,
            banded(&[0.0, 0.3, 0.7, 1.0], &[0.0, 1.0, 1.0, 0.0]),
        );
    let portrait = Layer::new()
        .scroll_from(Channel::TranslateY, RangeMap::linear(0.0, -80.0), ProgressSource::Direct)
        .scroll_from(Channel::Rotate, RangeMap::linear(0.0, 8.0), ProgressSource::Direct)
        .on_hover(GestureOverride::new().set(Channel::Scale, 1.05));

    SectionConfig::new("about")
        .with_reveal_threshold(0.2)
        .layer_with_entry(content, EntryAnimation::fade_up(50.0).with_duration(1.0))
        .layer_with_entry(portrait, EntryAnimation::pop(0.9).with_delay(STAGGER_STEP))
        .layer(blob((0.0, -120.0), -50.0, 10.0))
        .layer(blob((0.0, 180.0), 60.0, -15.0))
        .layer(
            Layer::new()
                .scroll(Channel::TranslateY, RangeMap::linear(0.0, -250.0))
                .scroll(Channel::TranslateX, RangeMap::linear(0.0, 80.0))
                .scroll(Channel::Scale, RangeMap::linear(1.0, 1.2)),
        )
}

/// The timeline of schools and jobs.
///
/// Layers: 0 heading, 1 spinning badge icon, 2 timeline line, 3 its progress
/// fill, then one layer per item, the end marker and two blobs. Item `i` is
/// layer `i + 4`.
///
/// The fill follows raw progress on the scale channel, standing in for its
/// height growing from 0% to 100% of the line.
#[must_use]
pub fn journey(items: usize) -> SectionConfig {
    let badge = Layer::new().ambient(Channel::Rotate, drift(&[0.0, 360.0], 3.0, Easing::Linear));
    let line = EntryAnimation::new(LayerTransform {
        scale: 0.0,
        ..LayerTransform::IDENTITY
    })
    .with_duration(1.5)
    .with_delay(0.5);
    let fill = Layer::new().scroll_from(
        Channel::Scale,
        RangeMap::linear(0.0, 1.0),
        ProgressSource::Direct,
    );

    let mut config = SectionConfig::new("journey")
        .layer_with_entry(Layer::new(), EntryAnimation::fade_up(40.0).with_duration(1.0))
        .layer_with_entry(badge, EntryAnimation::pop(0.8).with_delay(0.2))
        .layer_with_entry(Layer::new(), line)
        .layer(fill);
    for i in 0..items {
        let item = Layer::new().on_hover(GestureOverride::new().set(Channel::TranslateY, -4.0));
        let entry = EntryAnimation::fade_up(40.0)
            .with_duration(0.7)
            .stagger(0.6, 0.12, i);
        config = config.layer_with_entry(item, entry);
    }
    let marker =
        Layer::new().ambient(Channel::Scale, drift(&[1.0, 1.06, 1.0], 2.5, Easing::EaseInOut));
    config
        .layer_with_entry(marker, EntryAnimation::pop(0.0).stagger(1.2, 0.12, items))
        .layer(
            growing_blob((0.0, -250.0), -120.0, 35.0, 1.25)
                .ambient(Channel::Scale, drift(&[1.0, 1.1, 1.0], 8.0, Easing::EaseInOut))
                .ambient(Channel::Opacity, drift(&[0.25, 0.35, 0.25], 8.0, Easing::EaseInOut)),
        )
        .layer(
            growing_blob((0.0, 250.0), 140.0, -40.0, 1.3)
                .ambient(Channel::Scale, drift(&[1.0, 1.15, 1.0], 10.0, Easing::EaseInOut))
                .ambient(Channel::Opacity, drift(&[0.25, 0.35, 0.25], 10.0, Easing::EaseInOut)),
        )
}

/// The skills grid: category cards drift with raw progress in alternating
/// directions; the hovered card's glow grows.
///
/// Layers: 0 heading, then one layer per card, then three blobs. Card `i` is
/// layer `i + 1`; drive hovers with
/// [`MountedSection::set_hovered_index`](crate::MountedSection::set_hovered_index).
#[must_use]
pub fn skills(cards: usize) -> SectionConfig {
    let content =
        Layer::new().scroll(Channel::TranslateY, RangeMap::linear(200.0, -200.0).unclamped());
    let mut config = SectionConfig::new("skills").layer_with_entry(content, heading());
    for i in 0..cards {
        let side = parity(i);
        let card = Layer::new()
            .scroll_from(
                Channel::TranslateY,
                RangeMap::linear(100.0 * side, -100.0 * side),
                ProgressSource::Direct,
            )
            .on_hover(GestureOverride::new().set(Channel::Scale, 1.1));
        config = config.layer_with_entry(card, rise_and_grow().stagger(0.0, 0.15, i));
    }
    config
        .layer(blob((0.0, -150.0), -90.0, 25.0))
        .layer(growing_blob((0.0, 220.0), 110.0, -30.0, 1.2))
        .layer(blob((0.0, -280.0), 70.0, 40.0))
}

/// Timeline of roles: one card per entry, alternating sides.
///
/// Card `i` is layer `i + 1`; layer 0 is the heading.
#[must_use]
pub fn experience(cards: usize) -> SectionConfig {
    let mut config = SectionConfig::new("experience").layer_with_entry(Layer::new(), heading());
    for i in 0..cards {
        let side = parity(i);
        let entry = EntryAnimation::fade_from_side(-50.0 * side).stagger(0.0, 0.2, i);
        config = config.layer_with_entry(swinging_card(side, 80.0, 30.0, 1.0), entry);
    }
    config
        .layer(growing_blob((150.0, -150.0), -80.0, 20.0, 1.15))
        .layer(blob((-120.0, 120.0), 100.0, -25.0))
}

/// Project grid: cards swing in alternating directions and rise in a
/// staggered cascade.
///
/// Card `i` is layer `i + 1`; layer 0 is the heading.
#[must_use]
pub fn projects(cards: usize) -> SectionConfig {
    let mut config = SectionConfig::new("projects").layer_with_entry(Layer::new(), heading());
    for i in 0..cards {
        let card = swinging_card(parity(i), 150.0, 40.0, 1.5);
        config = config.layer_with_entry(card, rise_and_grow().stagger(0.0, 0.2, i));
    }
    config
        .layer(growing_blob((200.0, -200.0), -100.0, 30.0, 1.2))
        .layer(growing_blob((-200.0, 200.0), 120.0, -35.0, 1.25))
        .layer(blob((100.0, -100.0), 80.0, 45.0))
}

/// Contact: info column and form slide in from opposite sides; the submit
/// button lifts on hover and sinks when pressed.
///
/// Layers: 0 info column, 1 form, 2 submit button, then three blobs.
#[must_use]
pub fn contact() -> SectionConfig {
    let info = Layer::new().scroll(Channel::TranslateY, RangeMap::linear(50.0, -50.0));
    let form = Layer::new().scroll(Channel::TranslateY, RangeMap::linear(-50.0, 50.0));
    let submit = Layer::new()
        .on_hover(
            GestureOverride::new()
                .set(Channel::Scale, 1.02)
                .set(Channel::TranslateY, -3.0),
        )
        .on_press(GestureOverride::new().set(Channel::Scale, 0.98));

    SectionConfig::new("contact")
        .with_reveal_threshold(0.2)
        .layer_with_entry(info, EntryAnimation::fade_from_side(-50.0))
        .layer_with_entry(form, EntryAnimation::fade_from_side(50.0))
        .layer(submit)
        .layer(growing_blob((180.0, -180.0), -110.0, 28.0, 1.18))
        .layer(growing_blob((-180.0, 180.0), 130.0, -32.0, 1.22))
        .layer(blob((120.0, -120.0), 90.0, 50.0))
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use sway_motion::{Layer, LayerInputs, LayerTransform};
    use sway_scroll::ScrollWindow;

    use super::{about, contact, experience, hero, journey, projects, skills};
    use crate::listener::ListenerKind;
    use crate::section::SectionConfig;

    fn at(layer: &Layer, progress: f64) -> LayerTransform {
        layer.evaluate(&LayerInputs {
            smoothed: Some(progress),
            direct: Some(progress),
            ..LayerInputs::default()
        })
    }

    fn layer(config: &SectionConfig, index: usize) -> &Layer {
        &config.layers()[index].layer
    }

    #[test]
    fn presets_use_portfolio_windows_and_thresholds() {
        let h = hero();
        assert_eq!(h.window(), ScrollWindow::PIN_TOP);
        assert!(h.listener_kinds().contains(ListenerKind::POINTER_MOVE));
        assert_eq!(h.layers().len(), 6);

        let a = about();
        assert_eq!(a.window(), ScrollWindow::ENTER_EXIT);
        assert_eq!(a.reveal_threshold(), 0.2);
        assert_eq!(contact().reveal_threshold(), 0.2);
        assert_eq!(experience(3).reveal_threshold(), 0.1);
        assert_eq!(skills(4).reveal_threshold(), 0.1);
        assert_eq!(journey(6).reveal_threshold(), 0.1);
        assert!(contact().pointer_strength().is_none());
    }

    #[test]
    fn list_presets_add_one_layer_per_card() {
        assert_eq!(experience(0).layers().len(), 3);
        assert_eq!(experience(4).layers().len(), 7);
        assert_eq!(projects(6).layers().len(), 10);
        assert_eq!(skills(4).layers().len(), 8);
        assert_eq!(journey(0).layers().len(), 7);
        assert_eq!(journey(6).layers().len(), 13);
    }

    #[test]
    fn experience_cards_alternate_and_stagger() {
        let config = experience(2);
        let first = config.layers()[1].entry.unwrap();
        let second = config.layers()[2].entry.unwrap();
        assert_eq!(first.from.translate.x, -50.0);
        assert_eq!(second.from.translate.x, 50.0);
        assert_eq!(first.delay, 0.0);
        assert_eq!(second.delay, 0.2);

        let card = layer(&config, 1);
        assert_eq!(at(card, 0.0).translate, Vec2::new(30.0, 80.0));
        assert_eq!(at(card, 1.0).translate, Vec2::new(-30.0, -80.0));
        assert_eq!(at(layer(&config, 2), 0.0).rotate, -1.0);

        let blob = layer(&config, 3);
        assert_eq!(at(blob, 0.0).translate.y, 150.0);
        assert_eq!(at(blob, 1.0).translate.y, -150.0);
        assert_eq!(at(layer(&config, 4), 1.0).translate.y, 120.0);
    }

    #[test]
    fn project_cards_swing_by_parity() {
        let config = projects(2);
        let even = layer(&config, 1);
        let start = at(even, 0.0);
        assert_eq!(start.translate, Vec2::new(40.0, 150.0));
        assert_eq!(start.rotate, 1.5);
        let end = at(even, 1.0);
        assert_eq!(end.translate, Vec2::new(-40.0, -150.0));
        assert_eq!(end.rotate, -1.5);
        // Only the vertical swing keeps going past the window.
        let past = at(even, 1.5);
        assert!(past.translate.y < -150.0);
        assert_eq!(past.translate.x, -40.0);

        let odd = at(layer(&config, 2), 0.0);
        assert_eq!(odd.translate, Vec2::new(-40.0, -150.0));
        assert_eq!(odd.rotate, -1.5);

        let entry = config.layers()[2].entry.unwrap();
        assert_eq!(entry.from.scale, 0.9);
        assert_eq!(entry.from.translate.y, 50.0);
        assert_eq!(entry.delay, 0.2);
    }

    #[test]
    fn project_blobs_cross_the_section() {
        let config = projects(1);
        let first = layer(&config, 2);
        assert_eq!(at(first, 0.0).translate.y, 200.0);
        let end = at(first, 1.0);
        assert_eq!(end.translate, Vec2::new(-100.0, -200.0));
        assert_eq!(end.rotate, 30.0);
        assert_eq!(end.scale, 1.2);
        assert_eq!(at(layer(&config, 3), 0.0).translate.y, -200.0);
        assert_eq!(at(layer(&config, 4), 1.0).translate.y, -100.0);
    }

    #[test]
    fn contact_blobs_cross_the_section() {
        let config = contact();
        assert_eq!(at(layer(&config, 3), 0.0).translate.y, 180.0);
        assert_eq!(at(layer(&config, 3), 1.0).translate.y, -180.0);
        assert_eq!(at(layer(&config, 4), 0.0).translate.y, -180.0);
        assert_eq!(at(layer(&config, 5), 1.0).translate, Vec2::new(90.0, -120.0));
        assert_eq!(config.layers()[1].entry.unwrap().delay, 0.0);
    }

    #[test]
    fn skills_cards_follow_raw_progress_and_glow_on_hover() {
        let config = skills(2);
        let content = layer(&config, 0);
        assert_eq!(at(content, 0.0).translate.y, 200.0);
        assert_eq!(at(content, 1.0).translate.y, -200.0);

        let even = layer(&config, 1);
        let raw_only = LayerInputs {
            direct: Some(0.0),
            ..LayerInputs::default()
        };
        assert_eq!(even.evaluate(&raw_only).translate.y, 100.0);
        assert_eq!(layer(&config, 2).evaluate(&raw_only).translate.y, -100.0);
        let hovered = even.evaluate(&LayerInputs {
            hover: 1.0,
            ..raw_only
        });
        assert_eq!(hovered.scale, 1.1);

        assert_eq!(config.layers()[2].entry.unwrap().delay, 0.15);
        assert_eq!(at(layer(&config, 3), 1.0).translate.y, -150.0);
        assert_eq!(at(layer(&config, 4), 1.0).scale, 1.2);
        assert_eq!(at(layer(&config, 5), 1.0).translate, Vec2::new(70.0, -280.0));
    }

    #[test]
    fn journey_fill_tracks_raw_progress() {
        let config = journey(3);
        let fill = layer(&config, 3);
        assert_eq!(at(fill, 0.0).scale, 0.0);
        assert_eq!(at(fill, 0.5).scale, 0.5);
        assert_eq!(at(fill, 1.0).scale, 1.0);

        let badge = layer(&config, 1);
        let spin = |elapsed| {
            badge
                .evaluate(&LayerInputs {
                    elapsed,
                    ..LayerInputs::default()
                })
                .rotate
        };
        assert_eq!(spin(1.5), 180.0);
        assert!(badge.is_ambient_running(100.0));

        let first_item = config.layers()[4].entry.unwrap();
        assert_eq!(first_item.delay, 0.6);
        assert_eq!(first_item.duration, 0.7);
        let third_item = config.layers()[6].entry.unwrap();
        assert!((third_item.delay - 0.84).abs() < 1e-12);
        let marker = config.layers()[7].entry.unwrap();
        assert!((marker.delay - 1.56).abs() < 1e-12);

        let blob = at(layer(&config, 8), 1.0);
        assert_eq!(blob.translate, Vec2::new(-120.0, -250.0));
        assert_eq!(blob.rotate, 35.0);
        assert_eq!(at(layer(&config, 9), 1.0).translate, Vec2::new(140.0, 250.0));
    }
}
