// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side-application tables.
//!
//! A [`SideTable`] maps each box side to the set of inset categories whose
//! amounts are summed into that side. An [`Applier`](crate::applier::Applier)
//! holds four of them: padding and margin, each split into a persistent and
//! a deferred-during-animation table.
//!
//! Building a table is purely additive — configuration only ever ORs
//! categories onto a side. The *derived* effective table used at resolution
//! time is produced by [`subtract`](SideTable::subtract)ing whatever
//! categories are currently suppressed by a live animation.

use crate::category::InsetCategorySet;
use crate::sides::{Side, SideSet};

/// Per-side inset category sets.
///
/// Empty by default: every side maps to the empty category set, and an empty
/// table leaves a box entirely alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SideTable {
    sides: [InsetCategorySet; 4],
}

impl SideTable {
    /// The empty table.
    pub const EMPTY: Self = Self {
        sides: [InsetCategorySet::empty(); 4],
    };

    /// ORs `categories` into every side present in `sides`.
    pub fn add(&mut self, categories: InsetCategorySet, sides: SideSet) {
        for side in Side::ALL {
            if sides.has(side) {
                self.sides[Self::slot(side)] |= categories;
            }
        }
    }

    /// Returns the category set applied to `side`.
    #[must_use]
    pub const fn on(&self, side: Side) -> InsetCategorySet {
        self.sides[Self::slot(side)]
    }

    /// Whether `side` maps to the empty category set.
    #[must_use]
    pub const fn is_empty_on(&self, side: Side) -> bool {
        self.on(side).is_empty()
    }

    /// Whether all four sides map to the empty category set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sides.iter().all(|set| set.is_empty())
    }

    /// Per-side union of two tables.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        for (slot, set) in other.sides.iter().enumerate() {
            out.sides[slot] |= *set;
        }
        out
    }

    /// Per-side removal of `categories` (AND-NOT).
    #[must_use]
    pub fn subtract(&self, categories: InsetCategorySet) -> Self {
        let mut out = *self;
        for set in &mut out.sides {
            *set &= !categories;
        }
        out
    }

    /// The union of all four sides' category sets.
    #[must_use]
    pub fn all(&self) -> InsetCategorySet {
        self.sides
            .iter()
            .fold(InsetCategorySet::empty(), |acc, set| acc | *set)
    }

    /// The set of sides on which `category` appears.
    #[must_use]
    pub fn sides_of(&self, category: InsetCategorySet) -> SideSet {
        let mut out = SideSet::empty();
        for side in Side::ALL {
            if self.on(side).intersects(category) {
                out |= side.set();
            }
        }
        out
    }

    const fn slot(side: Side) -> usize {
        match side {
            Side::Left => 0,
            Side::Top => 1,
            Side::Right => 2,
            Side::Bottom => 3,
        }
    }
}
