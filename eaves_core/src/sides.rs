// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-side identity and side sets.

use bitflags::bitflags;

/// One edge of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left edge.
    Left,
    /// The top edge.
    Top,
    /// The right edge.
    Right,
    /// The bottom edge.
    Bottom,
}

impl Side {
    /// All four sides, in left/top/right/bottom order.
    ///
    /// Per-side iteration throughout the engine uses this order, so it is
    /// also the order in which side-level trace events are emitted.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// Returns the single-side [`SideSet`] for this side.
    #[must_use]
    pub const fn set(self) -> SideSet {
        match self {
            Self::Left => SideSet::LEFT,
            Self::Top => SideSet::TOP,
            Self::Right => SideSet::RIGHT,
            Self::Bottom => SideSet::BOTTOM,
        }
    }
}

bitflags! {
    /// A set of box sides.
    ///
    /// Side bits are distinct powers of two, so set operations are plain
    /// bitwise algebra. The empty set is a valid input everywhere and means
    /// "no sides."
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SideSet: u8 {
        /// The left edge.
        const LEFT = 1 << 0;
        /// The top edge.
        const TOP = 1 << 1;
        /// The right edge.
        const RIGHT = 1 << 2;
        /// The bottom edge.
        const BOTTOM = 1 << 3;
        /// All four edges.
        const ALL = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
        /// Left and right.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Top and bottom.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl SideSet {
    /// Builds a side set from four booleans, one per side.
    #[must_use]
    pub const fn from_booleans(left: bool, top: bool, right: bool, bottom: bool) -> Self {
        let mut bits = 0;
        if left {
            bits |= Self::LEFT.bits();
        }
        if top {
            bits |= Self::TOP.bits();
        }
        if right {
            bits |= Self::RIGHT.bits();
        }
        if bottom {
            bits |= Self::BOTTOM.bits();
        }
        Self::from_bits_retain(bits)
    }

    /// Returns whether `side` is a member of this set.
    #[must_use]
    pub const fn has(self, side: Side) -> bool {
        self.contains(side.set())
    }
}
