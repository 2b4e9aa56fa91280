// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-level state outside any section: the pointer glow and the header.

use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use sway_motion::{Channel, GestureOverride, GestureState, Layer, LayerInputs, LayerTransform, PointerOffset};
use sway_reveal::EntryAnimation;
use sway_scroll::ScrollThreshold;
use tracing::{debug, warn};

use crate::listener::{EventHost, ListenerId, ListenerKind, UnmountError, detach_all};

// Detaches `ids`, leaving only the stray ones behind in it.
fn detach<H: EventHost + ?Sized>(
    owner: &str,
    ids: &mut Vec<ListenerId>,
    host: &mut H,
) -> Result<(), Vec<ListenerId>> {
    let stray = detach_all(host, ids);
    ids.clone_from(&stray);
    if stray.is_empty() {
        debug!(owner, "detached listeners");
        Ok(())
    } else {
        warn!(owner, stray = stray.len(), "listeners were not attached to this host");
        Err(stray)
    }
}

/// Pointer-tracked radial glow behind the whole page.
///
/// ```
/// use kurbo::{Point, Size};
/// use sway_page::{ListenerRegistry, PageBackdrop};
///
/// let mut host = ListenerRegistry::new();
/// let mut backdrop = PageBackdrop::mount(&mut host);
/// backdrop.on_pointer_move(Point::new(1000.0, 0.0), Size::new(1000.0, 800.0));
/// assert_eq!(backdrop.glow_center(), Point::new(60.0, 40.0));
/// backdrop.unmount(&mut host).unwrap();
/// assert!(host.is_empty());
/// ```
#[derive(Debug)]
pub struct PageBackdrop {
    pointer: PointerOffset,
    listeners: Vec<ListenerId>,
}

impl PageBackdrop {
    /// Pointer offset, in percent of the viewport, across a full sweep.
    pub const STRENGTH: f64 = 20.0;

    /// Attaches a pointer-move listener.
    pub fn mount<H: EventHost + ?Sized>(host: &mut H) -> Self {
        let listeners = alloc::vec![host.subscribe(ListenerKind::POINTER_MOVE)];
        debug!("mounted page backdrop");
        Self {
            pointer: PointerOffset::new(Self::STRENGTH),
            listeners,
        }
    }

    /// Pointer callback.
    pub fn on_pointer_move(&mut self, pointer: Point, viewport: Size) {
        self.pointer.update(pointer, viewport);
    }

    /// Current offset from the centre, in percent.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.pointer.offset()
    }

    /// Glow centre in percent of the viewport (`50 + offset` on each axis).
    #[must_use]
    pub fn glow_center(&self) -> Point {
        Point::new(50.0, 50.0) + self.pointer.offset()
    }

    /// Detaches the pointer listener.
    ///
    /// Fails, keeping the backdrop mounted, if `host` did not know it.
    pub fn unmount<H: EventHost + ?Sized>(
        mut self,
        host: &mut H,
    ) -> Result<(), UnmountError<Self>> {
        detach("page backdrop", &mut self.listeners, host)
            .map_err(|stray| UnmountError::new(self, stray))
    }
}

/// What the header should render this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeaderFrame {
    /// The bar itself (slides down and fades in once).
    pub bar: LayerTransform,
    /// The logo (hover and press feedback).
    pub logo: LayerTransform,
    /// Whether the page is scrolled past [`Header::SCROLLED_AT`].
    pub scrolled: bool,
    /// Whether another frame should be scheduled.
    pub animating: bool,
}

/// The fixed page header: a scrolled flag, an intro slide and a springy logo.
#[derive(Debug)]
pub struct Header {
    threshold: ScrollThreshold,
    intro: EntryAnimation,
    logo: Layer,
    logo_gesture: GestureState,
    elapsed: f64,
    listeners: Vec<ListenerId>,
}

impl Header {
    /// Scroll offset in pixels past which the header switches to its solid style.
    pub const SCROLLED_AT: f64 = 50.0;

    /// Attaches a scroll listener and starts the intro animation.
    pub fn mount<H: EventHost + ?Sized>(host: &mut H) -> Self {
        let listeners = alloc::vec![host.subscribe(ListenerKind::SCROLL)];
        debug!("mounted header");
        Self {
            threshold: ScrollThreshold::new(Self::SCROLLED_AT),
            intro: EntryAnimation::fade_up(-100.0),
            logo: Layer::new()
                .on_hover(
                    GestureOverride::new()
                        .set(Channel::Scale, 1.05)
                        .set(Channel::TranslateY, -2.0),
                )
                .on_press(GestureOverride::new().set(Channel::Scale, 0.95)),
            logo_gesture: GestureState::default(),
            elapsed: 0.0,
            listeners,
        }
    }

    /// Scroll callback with the page's scroll offset.
    ///
    /// Returns the new flag when it changes.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> Option<bool> {
        let changed = self.threshold.update(scroll_offset);
        if let Some(scrolled) = changed {
            debug!(scrolled, "header style changed");
        }
        changed
    }

    /// Whether the page is scrolled past [`Self::SCROLLED_AT`].
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.threshold.is_past()
    }

    /// Pointer entered or left the logo.
    pub fn set_logo_hovered(&mut self, hovered: bool) {
        self.logo_gesture.set_hovered(hovered);
    }

    /// Logo pressed or released.
    pub fn set_logo_pressed(&mut self, pressed: bool) {
        self.logo_gesture.set_pressed(pressed);
    }

    /// Advances time by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> HeaderFrame {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.elapsed += dt;
        self.logo_gesture.step(dt);
        let logo = self.logo.evaluate(&LayerInputs {
            hover: self.logo_gesture.hover_weight(),
            press: self.logo_gesture.press_weight(),
            ..LayerInputs::default()
        });
        HeaderFrame {
            bar: self.intro.sample(Some(self.elapsed)),
            logo,
            scrolled: self.is_scrolled(),
            animating: self.logo_gesture.is_animating()
                || !self.intro.is_finished(Some(self.elapsed)),
        }
    }

    /// Detaches the scroll listener.
    ///
    /// Fails, keeping the header mounted, if `host` did not know it.
    pub fn unmount<H: EventHost + ?Sized>(
        mut self,
        host: &mut H,
    ) -> Result<(), UnmountError<Self>> {
        detach("header", &mut self.listeners, host).map_err(|stray| UnmountError::new(self, stray))
    }
}
