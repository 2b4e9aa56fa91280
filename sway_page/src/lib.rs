// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sway Page: scroll-parallax sections and the page around them.
//!
//! A [`Section`] owns everything one page section animates with: a scroll
//! tracker, a spring that smooths its progress, a one-shot reveal trigger and
//! a list of layers. Nothing is shared between sections.
//!
//! The lifecycle is explicit:
//!
//! - [`Section::mount`] subscribes to scroll and resize (and pointer moves,
//!   for sections that follow the pointer) on an [`EventHost`].
//! - Event callbacks ([`MountedSection::on_scroll`],
//!   [`MountedSection::on_resize`], [`MountedSection::on_pointer_move`]) only
//!   record input.
//! - [`MountedSection::tick`] advances springs and loops and returns a
//!   [`Frame`] with one transform per layer. Once
//!   [`MountedSection::needs_frame`] is `false` the host can stop scheduling
//!   frames until new input arrives.
//! - [`MountedSection::unmount`] releases exactly the listeners it took and
//!   consumes the mounted state. If the host did not know some of them, the
//!   section comes back mounted inside an [`UnmountError`] so the listeners
//!   are never orphaned.
//!
//! Until a section has been measured its scroll drivers stay out of the
//! frame, so layers rest at their neutral transform instead of jumping.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use sway_motion::{Channel, Layer, RangeMap};
//! use sway_page::{ListenerRegistry, Section, SectionConfig};
//!
//! let mut host = ListenerRegistry::new();
//! let config = SectionConfig::new("about")
//!     .layer(Layer::new().scroll(Channel::TranslateY, RangeMap::linear(150.0, -150.0).unclamped()));
//! let mut about = Section::new(config).mount(&mut host);
//! assert_eq!(host.live_count(), 2);
//!
//! // Not measured yet: neutral.
//! assert!(about.tick(1.0 / 60.0).layers[0].is_identity());
//!
//! // Section top exactly at the viewport bottom: progress 0.
//! about.on_scroll(Rect::new(0.0, 800.0, 1280.0, 1600.0), Size::new(1280.0, 800.0));
//! assert_eq!(about.tick(1.0 / 60.0).layers[0].translate.y, 150.0);
//!
//! about.unmount(&mut host).unwrap();
//! assert!(host.is_empty());
//! ```
//!
//! Page-level pieces live alongside: [`PageBackdrop`] (pointer glow),
//! [`Header`] (scrolled flag and intro), [`ContactForm`] and the section
//! [`presets`] of a portfolio page.
//!
//! ## Logging
//!
//! Lifecycle transitions are logged with [`tracing`] at `debug` level and each
//! tick at `trace` level. No subscriber is installed by this crate.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo and the other Sway crates.
//! - `serde`: `Serialize` for frames and submissions.
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod chrome;
mod contact;
mod listener;
pub mod presets;
mod section;

pub use chrome::{Header, HeaderFrame, PageBackdrop};
pub use contact::{ContactForm, Field, LogSink, Submission, SubmissionSink, SubmitError};
pub use listener::{EventHost, ListenerId, ListenerKind, ListenerRegistry, UnmountError};
pub use section::{Frame, MountedSection, Section, SectionConfig, SectionLayer};
