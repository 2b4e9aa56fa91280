// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sway Motion: per-layer transform composition for parallax effects.
//!
//! A visual element is described as a [`Layer`]: a bundle of independent
//! drivers, each writing one [`Channel`] (translate X/Y, rotate, scale,
//! opacity) of the layer's [`LayerTransform`]:
//!
//! - **Scroll drivers** map scroll progress through a [`RangeMap`], a
//!   piecewise function with optional per-segment [`Easing`] that clamps at its
//!   domain boundaries unless marked unclamped.
//! - **Ambient drivers** sample a [`Keyframes`] track against elapsed time,
//!   typically looping forever.
//! - **Pointer drivers** add a scaled [`PointerOffset`].
//! - **Gesture overrides** ([`GestureOverride`]) are blended in by the
//!   spring-smoothed weights of a [`GestureState`] while hovered or pressed.
//!
//! Contributions combine per channel (translation and rotation add, scale and
//! opacity multiply). No driver reads another's output and no layer reads
//! another layer.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Vec2;
//! use sway_motion::{Channel, Easing, Keyframes, Layer, LayerInputs, RangeMap, Repeat};
//!
//! let blob = Layer::new()
//!     .scroll(Channel::TranslateY, RangeMap::linear(0.0, 200.0))
//!     .scroll(Channel::Rotate, RangeMap::linear(0.0, 10.0))
//!     .ambient(
//!         Channel::Scale,
//!         Keyframes::new(&[1.0, 1.4, 1.0], 25.0)
//!             .unwrap()
//!             .with_easing(Easing::EaseInOut)
//!             .with_repeat(Repeat::Forever),
//!     )
//!     .pointer(Vec2::new(0.3, 0.0));
//!
//! let frame = blob.evaluate(&LayerInputs {
//!     smoothed: Some(0.5),
//!     elapsed: 0.0,
//!     pointer: Vec2::new(10.0, 0.0),
//!     ..LayerInputs::default()
//! });
//! assert_eq!(frame.translate, Vec2::new(3.0, 100.0));
//! assert_eq!(frame.rotate, 5.0);
//! assert_eq!(frame.scale, 1.0);
//! ```
//!
//! ## Failure handling
//!
//! Missing or non-finite progress leaves scroll drivers out of the frame and
//! every output passes through [`LayerTransform::sanitized`], so callers never
//! see NaN in a visual property.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: serialization of layer descriptions and transforms.
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod easing;
mod gesture;
mod keyframes;
mod layer;
mod pointer;
mod range_map;
mod transform;

pub use easing::Easing;
pub use gesture::{GestureOverride, GestureState, blend_channel};
pub use keyframes::{Keyframes, KeyframesError, Repeat};
pub use layer::{AmbientTrack, Layer, LayerInputs, ProgressSource, ScrollBinding};
pub use pointer::PointerOffset;
pub use range_map::{RangeMap, RangeMapError};
pub use transform::{Channel, LayerTransform};
