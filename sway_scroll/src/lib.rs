// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sway Scroll: scroll-linked progress for headless animation.
//!
//! This crate turns layout measurements into a normalized progress value that
//! describes how far an element has travelled through a scroll window. A
//! window is a pair of [`ScrollOffset`]s, each of which names an edge of the
//! tracked element and an edge of the viewport; progress is `0` when the entry
//! edges meet and `1` when the exit edges meet.
//!
//! It does **not** read layout itself. Callers are expected to:
//! - Measure the target's bounding box relative to the viewport (for example
//!   from a box tree or the host toolkit) on every scroll and resize.
//! - Feed that rectangle and the viewport size into [`ScrollTracker::measure`].
//! - Hand the resulting progress to a smoother and transform mappers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use sway_scroll::{ScrollTracker, ScrollWindow};
//!
//! let mut tracker = ScrollTracker::new(ScrollWindow::ENTER_EXIT);
//! let viewport = Size::new(1280.0, 800.0);
//!
//! // The section is 400px tall and its top is 200px below the viewport top.
//! let progress = tracker.measure(Rect::new(0.0, 200.0, 1280.0, 600.0), viewport);
//! assert_eq!(progress.map(|p| p.clamped), Some(0.5));
//! ```
//!
//! ## Measurement failures
//!
//! A zero-size viewport, a degenerate window, or non-finite coordinates yield
//! `None` rather than a NaN. Consumers treat `None` as "render the neutral
//! transform".
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: `Serialize`/`Deserialize` for offsets, windows and progress.
//!
//! This crate is `no_std`.

#![no_std]

mod offset;
mod threshold;
mod tracker;
mod window;

pub use offset::{Edge, OffsetParseError, ScrollOffset};
pub use threshold::ScrollThreshold;
pub use tracker::ScrollTracker;
pub use window::{ScrollAxis, ScrollProgress, ScrollWindow};
