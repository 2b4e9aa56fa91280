// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sway Spring: damped-spring smoothing for animation signals.
//!
//! A [`Spring`] consumes a raw signal (scroll progress, a hover weight) via
//! [`Spring::set_target`] and emits a smoothed value that lags and, for
//! underdamped configs, overshoots slightly before coming to rest.
//!
//! - Integration is frame-rate independent: frames are split into short
//!   sub-steps derived from the config's natural frequency and damping rate,
//!   so any finite config stays bounded.
//! - A settled spring snaps exactly onto its target and stops computing until
//!   the target moves. Callers can use [`Spring::is_settled`] to stop
//!   requesting animation frames.
//!
//! ## Example
//!
//! ```rust
//! use sway_spring::{Spring, SpringConfig};
//!
//! let mut smooth = Spring::new(SpringConfig::SMOOTH_SCROLL, 0.0);
//! smooth.set_target(0.5);
//! for _ in 0..600 {
//!     smooth.step(1.0 / 60.0);
//! }
//! assert!(smooth.is_settled());
//! assert_eq!(smooth.value(), 0.5);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select where float math comes from.
//! - `serde`: `Serialize`/`Deserialize` for [`SpringConfig`].
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod config;
mod spring;

pub use config::SpringConfig;
pub use spring::{MAX_FRAME_DT, Spring, SpringStatus};
