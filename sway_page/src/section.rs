// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sections: one scroll tracker, one spring, one reveal trigger, many layers.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use sway_motion::{GestureState, Layer, LayerInputs, LayerTransform, PointerOffset};
use sway_reveal::{EntryAnimation, RevealTrigger};
use sway_scroll::{ScrollAxis, ScrollTracker, ScrollWindow};
use sway_spring::{Spring, SpringConfig, SpringStatus};
use tracing::{debug, trace, warn};

use crate::listener::{EventHost, ListenerId, ListenerKind, UnmountError, detach_all};

/// A layer together with the entry animation it plays once its section is revealed.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionLayer {
    /// Scroll, ambient, pointer and gesture drivers.
    pub layer: Layer,
    /// Optional one-shot entry animation.
    pub entry: Option<EntryAnimation>,
}

/// Declarative description of a section.
///
/// ```
/// use sway_motion::{Channel, Layer, RangeMap};
/// use sway_page::SectionConfig;
/// use sway_scroll::ScrollWindow;
///
/// let config = SectionConfig::new("about")
///     .with_window(ScrollWindow::ENTER_EXIT)
///     .with_reveal_threshold(0.2)
///     .layer(Layer::new().scroll(Channel::TranslateY, RangeMap::linear(150.0, -150.0).unclamped()));
/// assert_eq!(config.layers().len(), 1);
/// assert!(config.pointer_strength().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SectionConfig {
    name: String,
    window: ScrollWindow,
    axis: ScrollAxis,
    spring: SpringConfig,
    gesture_spring: SpringConfig,
    reveal_threshold: f64,
    pointer_strength: Option<f64>,
    layers: Vec<SectionLayer>,
}

impl SectionConfig {
    /// A section tracking [`ScrollWindow::ENTER_EXIT`] with [`SpringConfig::SMOOTH_SCROLL`]
    /// smoothing and the default reveal threshold.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            window: ScrollWindow::ENTER_EXIT,
            axis: ScrollAxis::Vertical,
            spring: SpringConfig::SMOOTH_SCROLL,
            gesture_spring: SpringConfig::SNAPPY,
            reveal_threshold: RevealTrigger::DEFAULT_THRESHOLD,
            pointer_strength: None,
            layers: Vec::new(),
        }
    }

    /// Sets the scroll window.
    #[must_use]
    pub fn with_window(mut self, window: ScrollWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets the scroll axis.
    #[must_use]
    pub fn with_axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the progress smoothing spring.
    #[must_use]
    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Sets the spring that eases hover and press overrides.
    #[must_use]
    pub fn with_gesture_spring(mut self, spring: SpringConfig) -> Self {
        self.gesture_spring = spring;
        self
    }

    /// Sets the fraction of the section that must be visible to reveal it.
    #[must_use]
    pub fn with_reveal_threshold(mut self, threshold: f64) -> Self {
        self.reveal_threshold = threshold;
        self
    }

    /// Makes the section follow the pointer; `strength` is the offset in
    /// pixels across a full viewport sweep.
    #[must_use]
    pub fn with_pointer(mut self, strength: f64) -> Self {
        self.pointer_strength = Some(strength);
        self
    }

    /// Appends a layer.
    #[must_use]
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(SectionLayer { layer, entry: None });
        self
    }

    /// Appends a layer that plays `entry` once the section is revealed.
    #[must_use]
    pub fn layer_with_entry(mut self, layer: Layer, entry: EntryAnimation) -> Self {
        self.layers.push(SectionLayer {
            layer,
            entry: Some(entry),
        });
        self
    }

    /// Section name, used in logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scroll window.
    #[must_use]
    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    /// Smoothing spring.
    #[must_use]
    pub fn spring(&self) -> SpringConfig {
        self.spring
    }

    /// Reveal threshold.
    #[must_use]
    pub fn reveal_threshold(&self) -> f64 {
        self.reveal_threshold
    }

    /// Pointer strength, if the section follows the pointer.
    #[must_use]
    pub fn pointer_strength(&self) -> Option<f64> {
        self.pointer_strength
    }

    /// Layers in paint order.
    #[must_use]
    pub fn layers(&self) -> &[SectionLayer] {
        &self.layers
    }

    /// Listener kinds a mounted section needs.
    #[must_use]
    pub fn listener_kinds(&self) -> ListenerKind {
        let mut kinds = ListenerKind::SCROLL | ListenerKind::RESIZE;
        if self.pointer_strength.is_some() {
            kinds |= ListenerKind::POINTER_MOVE;
        }
        kinds
    }
}

/// An unmounted section.
///
/// Mounting attaches its listeners and creates fresh per-mount state;
/// unmounting detaches them and gives the section back.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    config: SectionConfig,
}

impl From<SectionConfig> for Section {
    fn from(config: SectionConfig) -> Self {
        Self::new(config)
    }
}

impl Section {
    /// Wraps a configuration.
    #[must_use]
    pub fn new(config: SectionConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    /// Attaches the section's listeners to `host` and starts its clock.
    pub fn mount<H: EventHost + ?Sized>(self, host: &mut H) -> MountedSection {
        let config = self.config;
        let listeners: Vec<ListenerId> = config
            .listener_kinds()
            .iter()
            .map(|kind| host.subscribe(kind))
            .collect();
        debug!(
            section = %config.name,
            listeners = listeners.len(),
            "mounted section"
        );
        let gestures = config
            .layers
            .iter()
            .map(|_| GestureState::new(config.gesture_spring))
            .collect();
        MountedSection {
            tracker: ScrollTracker::new(config.window).with_axis(config.axis),
            spring: Spring::new(config.spring, 0.0),
            primed: false,
            trigger: RevealTrigger::new(config.reveal_threshold),
            since_reveal: None,
            pointer: config.pointer_strength.map(PointerOffset::new),
            gestures,
            elapsed: 0.0,
            listeners,
            config,
        }
    }
}

/// Output of one [`MountedSection::tick`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    /// One transform per layer, in paint order.
    pub layers: Vec<LayerTransform>,
    /// Smoothed progress clamped into `[0, 1]`; `None` until measured.
    pub progress: Option<f64>,
    /// Whether the section has been revealed.
    pub revealed: bool,
    /// Whether another frame should be scheduled.
    pub animating: bool,
}

/// A section attached to an [`EventHost`].
///
/// Event callbacks only record input; [`MountedSection::tick`] does the
/// per-frame work. Consumed by [`MountedSection::unmount`], so a detached
/// section cannot be ticked.
#[derive(Debug)]
pub struct MountedSection {
    config: SectionConfig,
    listeners: Vec<ListenerId>,
    tracker: ScrollTracker,
    spring: Spring,
    primed: bool,
    trigger: RevealTrigger,
    since_reveal: Option<f64>,
    pointer: Option<PointerOffset>,
    gestures: Vec<GestureState>,
    elapsed: f64,
}

impl MountedSection {
    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    /// Listener ids attached at mount.
    #[must_use]
    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Detaches exactly the listeners attached at mount.
    ///
    /// If `host` did not know some of them, the section stays mounted with
    /// just those listeners and comes back in the error, ready to be
    /// unmounted from the host that owns them.
    pub fn unmount<H: EventHost + ?Sized>(
        mut self,
        host: &mut H,
    ) -> Result<Section, UnmountError<Self>> {
        let stray = detach_all(host, &self.listeners);
        if !stray.is_empty() {
            warn!(
                section = %self.config.name,
                stray = stray.len(),
                "listeners were not attached to this host"
            );
            self.listeners.clone_from(&stray);
            return Err(UnmountError::new(self, stray));
        }
        debug!(
            section = %self.config.name,
            listeners = self.listeners.len(),
            "unmounted section"
        );
        Ok(Section {
            config: self.config,
        })
    }

    /// Scroll callback: `target` is the section's bounds in viewport coordinates.
    pub fn on_scroll(&mut self, target: Rect, viewport: Size) {
        self.measure(target, viewport);
    }

    /// Resize callback; same inputs as [`Self::on_scroll`].
    pub fn on_resize(&mut self, target: Rect, viewport: Size) {
        self.measure(target, viewport);
    }

    fn measure(&mut self, target: Rect, viewport: Size) {
        if let Some(p) = self.tracker.measure(target, viewport) {
            if self.primed {
                self.spring.set_target(p.raw);
            } else {
                // Start at the first measured position instead of sweeping up from zero.
                self.spring.jump(p.raw);
                self.primed = true;
            }
        }
        let visible = Rect::from_origin_size(Point::ORIGIN, viewport);
        if self.trigger.observe_rects(target, visible) {
            self.revealed();
        }
    }

    /// Feeds an intersection ratio computed by the host.
    pub fn on_intersection(&mut self, ratio: f64) {
        if self.trigger.observe(ratio) {
            self.revealed();
        }
    }

    fn revealed(&mut self) {
        self.since_reveal = Some(0.0);
        debug!(
            section = %self.config.name,
            elapsed = self.elapsed,
            "section revealed"
        );
    }

    /// Pointer callback. Ignored by sections that do not follow the pointer.
    pub fn on_pointer_move(&mut self, pointer: Point, viewport: Size) {
        if let Some(offset) = &mut self.pointer {
            offset.update(pointer, viewport);
        }
    }

    /// Pointer left the window.
    pub fn on_pointer_leave(&mut self) {
        if let Some(offset) = &mut self.pointer {
            offset.reset();
        }
    }

    /// Marks layer `index` as hovered. Returns `false` for an unknown layer.
    pub fn set_hovered(&mut self, index: usize, hovered: bool) -> bool {
        match self.gestures.get_mut(index) {
            Some(g) => {
                g.set_hovered(hovered);
                true
            }
            None => false,
        }
    }

    /// Hovers layer `index` and un-hovers every other layer; `None` clears hover.
    pub fn set_hovered_index(&mut self, index: Option<usize>) {
        for (i, g) in self.gestures.iter_mut().enumerate() {
            g.set_hovered(Some(i) == index);
        }
    }

    /// Marks layer `index` as pressed. Returns `false` for an unknown layer.
    pub fn set_pressed(&mut self, index: usize, pressed: bool) -> bool {
        match self.gestures.get_mut(index) {
            Some(g) => {
                g.set_pressed(pressed);
                true
            }
            None => false,
        }
    }

    /// Smoothed progress clamped into `[0, 1]`; `None` until measured.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.smoothed().map(|p| p.clamp(0.0, 1.0))
    }

    fn smoothed(&self) -> Option<f64> {
        self.tracker.is_measured().then(|| self.spring.value())
    }

    /// Returns `true` once the section has been revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.trigger.is_revealed()
    }

    /// Seconds since mount.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Returns `false` once nothing in the section can change without new input.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        if !self.spring.is_settled() || self.gestures.iter().any(GestureState::is_animating) {
            return true;
        }
        self.config.layers.iter().any(|l| {
            l.layer.is_ambient_running(self.elapsed)
                || l
                    .entry
                    .is_some_and(|e| self.since_reveal.is_some() && !e.is_finished(self.since_reveal))
        })
    }

    /// Advances time by `dt` seconds and composes every layer.
    pub fn tick(&mut self, dt: f64) -> Frame {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.elapsed += dt;
        if let Some(t) = &mut self.since_reveal {
            *t += dt;
        }

        let was_settled = self.spring.is_settled();
        if self.spring.step(dt) == SpringStatus::Settled && !was_settled {
            debug!(
                section = %self.config.name,
                value = self.spring.value(),
                "progress spring settled"
            );
        }
        for g in &mut self.gestures {
            g.step(dt);
        }

        let smoothed = self.smoothed();
        let direct = self.tracker.raw_progress();
        let pointer = self.pointer.map_or(Vec2::ZERO, |p| p.offset());
        let layers = self
            .config
            .layers
            .iter()
            .zip(&self.gestures)
            .map(|(l, g)| {
                let base = l.layer.evaluate(&LayerInputs {
                    smoothed,
                    direct,
                    elapsed: self.elapsed,
                    pointer,
                    hover: g.hover_weight(),
                    press: g.press_weight(),
                });
                match l.entry {
                    Some(entry) => base.then(entry.sample(self.since_reveal)).sanitized(),
                    None => base,
                }
            })
            .collect();

        let frame = Frame {
            layers,
            progress: self.progress(),
            revealed: self.is_revealed(),
            animating: self.needs_frame(),
        };
        trace!(
            section = %self.config.name,
            dt,
            progress = ?frame.progress,
            animating = frame.animating,
            "tick"
        );
        frame
    }
}
