// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sway Reveal: one-shot viewport-entry detection.
//!
//! A [`RevealTrigger`] watches the fraction of an element's area inside the
//! viewport ([`intersection_ratio`]) and flips from [`RevealState::Unseen`] to
//! [`RevealState::Revealed`] the first time that fraction reaches its
//! threshold. It never flips back. Sections use the flag to start their
//! [`EntryAnimation`]s, which ease elements from an offset, faded state to
//! rest.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use sway_reveal::{EntryAnimation, RevealTrigger};
//!
//! let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
//! let mut trigger = RevealTrigger::new(0.2);
//! let card = EntryAnimation::fade_up(30.0).stagger(0.0, 0.1, 1);
//!
//! // Below the fold.
//! assert!(!trigger.observe_rects(Rect::new(0.0, 900.0, 1280.0, 1300.0), viewport));
//! assert_eq!(card.sample(None).opacity, 0.0);
//!
//! // A quarter visible: reveal fires once.
//! assert!(trigger.observe_rects(Rect::new(0.0, 700.0, 1280.0, 1100.0), viewport));
//! assert!(!trigger.observe_rects(Rect::new(0.0, 900.0, 1280.0, 1300.0), viewport));
//! assert!(trigger.is_revealed());
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: serialization of triggers' state and entry animations.
//!
//! This crate is `no_std`.

#![no_std]

mod entry;
mod trigger;

pub use entry::EntryAnimation;
pub use trigger::{RevealState, RevealTrigger, intersection_ratio};
