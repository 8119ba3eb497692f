// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-sided integer values.
//!
//! [`Edges`] is the value type flowing through the whole engine: inset
//! amounts, padding, margin, and translation deltas are all four
//! per-side pixel values. Components are `i32` to match host pixel units;
//! inset amounts are never negative in practice, and the operations that
//! could produce negative intermediates ([`inset_delta`](Edges::inset_delta))
//! clamp at zero.

use crate::sides::Side;

/// Four per-side integer values (left, top, right, bottom).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edges {
    /// The left component.
    pub left: i32,
    /// The top component.
    pub top: i32,
    /// The right component.
    pub right: i32,
    /// The bottom component.
    pub bottom: i32,
}

impl Edges {
    /// All four components zero.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates edges from the four components.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates edges with the same value on all four sides.
    #[must_use]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the component for `side`.
    #[must_use]
    pub const fn get(self, side: Side) -> i32 {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    /// Returns a copy with the component for `side` replaced by `value`.
    #[must_use]
    pub const fn with(self, side: Side, value: i32) -> Self {
        let mut out = self;
        match side {
            Side::Left => out.left = value,
            Side::Top => out.top = value,
            Side::Right => out.right = value,
            Side::Bottom => out.bottom = value,
        }
        out
    }

    /// Componentwise maximum.
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        Self::new(
            if self.left >= other.left {
                self.left
            } else {
                other.left
            },
            if self.top >= other.top {
                self.top
            } else {
                other.top
            },
            if self.right >= other.right {
                self.right
            } else {
                other.right
            },
            if self.bottom >= other.bottom {
                self.bottom
            } else {
                other.bottom
            },
        )
    }

    /// Componentwise `self − other`, clamped so no component goes below zero.
    ///
    /// This is the delta used by the animation coordinator: during some
    /// transition phases the raw subtraction transiently goes negative, and a
    /// negative visual offset would be incorrect.
    #[must_use]
    pub const fn inset_delta(self, other: Self) -> Self {
        const fn clamped(a: i32, b: i32) -> i32 {
            let d = a - b;
            if d > 0 { d } else { 0 }
        }
        Self::new(
            clamped(self.left, other.left),
            clamped(self.top, other.top),
            clamped(self.right, other.right),
            clamped(self.bottom, other.bottom),
        )
    }

    /// Whether all four components are zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}
