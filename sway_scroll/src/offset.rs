// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// A position along one axis of either the tracked target or the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    /// The leading edge (top for vertical scrolling).
    #[default]
    Start,
    /// The midpoint.
    Center,
    /// The trailing edge (bottom for vertical scrolling).
    End,
    /// A fraction of the extent, where `0.0` is [`Edge::Start`] and `1.0` is [`Edge::End`].
    Fraction(f64),
    /// A fixed distance in pixels from the leading edge.
    Pixels(f64),
}

impl Edge {
    /// Resolves this edge to a distance from the leading edge of an extent of `len` pixels.
    #[must_use]
    pub fn resolve(self, len: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => len * 0.5,
            Self::End => len,
            Self::Fraction(f) => len * f,
            Self::Pixels(px) => px,
        }
    }

    fn parse_token(token: &str) -> Result<Self, OffsetParseError> {
        match token {
            "start" => return Ok(Self::Start),
            "center" => return Ok(Self::Center),
            "end" => return Ok(Self::End),
            _ => {}
        }
        if let Some(n) = token.strip_suffix("px") {
            Ok(Self::Pixels(parse_number(n)?))
        } else if let Some(n) = token.strip_suffix('%') {
            Ok(Self::Fraction(parse_number(n)? / 100.0))
        } else {
            Ok(Self::Fraction(parse_number(token)?))
        }
    }
}

fn parse_number(text: &str) -> Result<f64, OffsetParseError> {
    let value: f64 = text.parse().map_err(|_| OffsetParseError::UnknownEdge)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OffsetParseError::NonFinite)
    }
}

/// A meeting point between an edge of the tracked target and an edge of the viewport.
///
/// The textual form is `"<target> <viewport>"`, so `"start end"` is reached
/// when the target's leading edge meets the viewport's trailing edge, which for
/// vertical scrolling is the moment the element first peeks in from below.
///
/// ```
/// use sway_scroll::{Edge, ScrollOffset};
///
/// let offset: ScrollOffset = "start end".parse().unwrap();
/// assert_eq!(offset, ScrollOffset::new(Edge::Start, Edge::End));
///
/// // A single token applies to both sides.
/// let centered: ScrollOffset = "center".parse().unwrap();
/// assert_eq!(centered, ScrollOffset::new(Edge::Center, Edge::Center));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    /// Edge of the tracked target.
    pub target: Edge,
    /// Edge of the viewport.
    pub viewport: Edge,
}

impl ScrollOffset {
    /// Target start meets viewport end: the element starts entering.
    pub const START_END: Self = Self::new(Edge::Start, Edge::End);
    /// Target start meets viewport start: the element reaches the top.
    pub const START_START: Self = Self::new(Edge::Start, Edge::Start);
    /// Target end meets viewport start: the element has fully left.
    pub const END_START: Self = Self::new(Edge::End, Edge::Start);
    /// Target end meets viewport end: the element is fully inside from below.
    pub const END_END: Self = Self::new(Edge::End, Edge::End);

    /// Creates an offset from a target edge and a viewport edge.
    #[must_use]
    pub const fn new(target: Edge, viewport: Edge) -> Self {
        Self { target, viewport }
    }

    /// Parses the textual `"<target> <viewport>"` form.
    pub fn parse(text: &str) -> Result<Self, OffsetParseError> {
        let mut tokens = text.split_whitespace();
        let first = tokens.next().ok_or(OffsetParseError::Empty)?;
        let target = Edge::parse_token(first)?;
        let viewport = match tokens.next() {
            Some(second) => Edge::parse_token(second)?,
            None => target,
        };
        if tokens.next().is_some() {
            return Err(OffsetParseError::TooManyParts);
        }
        Ok(Self { target, viewport })
    }
}

impl FromStr for ScrollOffset {
    type Err = OffsetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reasons a textual scroll offset could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetParseError {
    /// The input had no tokens.
    Empty,
    /// A token was neither a named edge nor a number.
    UnknownEdge,
    /// More than two tokens were given.
    TooManyParts,
    /// A numeric token was NaN or infinite.
    NonFinite,
}

impl fmt::Display for OffsetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "scroll offset is empty",
            Self::UnknownEdge => "unknown edge (expected start, center, end, a number, N% or Npx)",
            Self::TooManyParts => "scroll offset has more than two parts",
            Self::NonFinite => "scroll offset edge is not finite",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for OffsetParseError {}
