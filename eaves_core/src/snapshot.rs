// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-provided inset snapshot.
//!
//! [`WindowInsets`] is the value dispatched with every inset-change and
//! animation-progress callback. It holds, per category, the current inset
//! amount, the resting amount (the value the category would occupy while
//! hidden, e.g. the keyboard's resting height), and a visibility bit.
//!
//! A category the platform does not support simply reports zero on every
//! side. Zero is a valid, expected value and never an error.
//!
//! Snapshots are plain values: consumption (see [`consume`](crate::consume))
//! produces a rewritten copy rather than mutating the inbound snapshot, so
//! the engine can hand descendants an adjusted view while keeping the
//! original for its own animation bookkeeping.

use crate::category::{CATEGORY_COUNT, InsetCategorySet};
use crate::edges::Edges;
use crate::sides::{Side, SideSet};

/// A full per-category inset snapshot, as dispatched by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WindowInsets {
    /// Current inset amount per category slot.
    amounts: [Edges; CATEGORY_COUNT],
    /// Resting amount per category slot (reported even while hidden).
    resting: [Edges; CATEGORY_COUNT],
    /// Visibility bit per category slot.
    visible: u8,
}

impl WindowInsets {
    /// Creates an empty snapshot: every category zero and hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            amounts: [Edges::ZERO; CATEGORY_COUNT],
            resting: [Edges::ZERO; CATEGORY_COUNT],
            visible: 0,
        }
    }

    /// Sets a single category's current amount, marks it visible, and makes
    /// its resting amount match.
    ///
    /// This is the common host path for categories whose resting and visible
    /// extents coincide (bars, cutouts). Use
    /// [`set_category_hidden`](Self::set_category_hidden) afterwards for a
    /// category that currently reports zero but has a non-zero resting value.
    ///
    /// # Panics
    ///
    /// Panics if `category` is not a single category bit.
    pub fn set_category(&mut self, category: InsetCategorySet, amount: Edges) {
        let slot = Self::single_slot(category);
        self.amounts[slot] = amount;
        self.resting[slot] = amount;
        self.visible |= 1 << slot;
    }

    /// Marks a category hidden: its current amount drops to zero while the
    /// given resting amount remains queryable with `ignore_visibility`.
    ///
    /// # Panics
    ///
    /// Panics if `category` is not a single category bit.
    pub fn set_category_hidden(&mut self, category: InsetCategorySet, resting: Edges) {
        let slot = Self::single_slot(category);
        self.amounts[slot] = Edges::ZERO;
        self.resting[slot] = resting;
        self.visible &= !(1 << slot);
    }

    /// Returns whether `category` is currently reported visible.
    ///
    /// # Panics
    ///
    /// Panics if `category` is not a single category bit.
    #[must_use]
    pub fn is_visible(&self, category: InsetCategorySet) -> bool {
        self.visible & (1 << Self::single_slot(category)) != 0
    }

    /// Queries the inset amount for a category set.
    ///
    /// The result is the componentwise maximum over the member categories:
    /// obstruction regions overlap rather than stack, so the union of two
    /// regions on the same edge extends as far as the deeper one, not their
    /// sum. An empty set yields [`Edges::ZERO`].
    ///
    /// With `ignore_visibility` set, a hidden category contributes its
    /// resting amount; otherwise it contributes zero.
    #[must_use]
    pub fn amount(&self, categories: InsetCategorySet, ignore_visibility: bool) -> Edges {
        let mut out = Edges::ZERO;
        for category in categories.iter() {
            let slot = category.slot();
            let contribution = if ignore_visibility {
                self.resting[slot]
            } else {
                self.amounts[slot]
            };
            out = out.max(contribution);
        }
        out
    }

    /// Returns a copy with every category's amounts zeroed.
    ///
    /// Visibility bits are preserved: consumption hides *values* from
    /// descendants, it does not claim the obstruction disappeared.
    #[must_use]
    pub const fn consumed_all(&self) -> Self {
        Self {
            amounts: [Edges::ZERO; CATEGORY_COUNT],
            resting: [Edges::ZERO; CATEGORY_COUNT],
            visible: self.visible,
        }
    }

    /// Returns a copy with `category`'s amounts zeroed on exactly the sides
    /// in `sides`, both current and resting. Other categories and untouched
    /// sides pass through intact.
    ///
    /// # Panics
    ///
    /// Panics if `category` is not a single category bit.
    #[must_use]
    pub fn consumed_on(&self, category: InsetCategorySet, sides: SideSet) -> Self {
        let slot = Self::single_slot(category);
        let mut out = *self;
        for side in Side::ALL {
            if sides.has(side) {
                out.amounts[slot] = out.amounts[slot].with(side, 0);
                out.resting[slot] = out.resting[slot].with(side, 0);
            }
        }
        out
    }

    fn single_slot(category: InsetCategorySet) -> usize {
        assert_eq!(
            category.bits().count_ones(),
            1,
            "expected a single category bit"
        );
        category.slot()
    }
}

/// A single running host animation, as delivered with progress ticks.
///
/// The host may run several animations concurrently (e.g. the keyboard and
/// the navigation bar during a mode switch); each carries the category set
/// it animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunningAnimation {
    /// The categories this animation is transitioning.
    pub categories: InsetCategorySet,
}

impl RunningAnimation {
    /// Creates a descriptor for an animation over `categories`.
    #[must_use]
    pub const fn new(categories: InsetCategorySet) -> Self {
        Self { categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_of_empty_set_is_zero() {
        let mut insets = WindowInsets::new();
        insets.set_category(InsetCategorySet::IME, Edges::new(0, 0, 0, 300));
        assert_eq!(
            insets.amount(InsetCategorySet::empty(), false),
            Edges::ZERO
        );
    }

    #[test]
    fn amount_unions_by_componentwise_max() {
        let mut insets = WindowInsets::new();
        insets.set_category(InsetCategorySet::NAVIGATION_BARS, Edges::new(0, 0, 0, 48));
        insets.set_category(InsetCategorySet::IME, Edges::new(0, 0, 0, 300));
        insets.set_category(InsetCategorySet::STATUS_BARS, Edges::new(0, 24, 0, 0));

        let bottom = insets.amount(
            InsetCategorySet::NAVIGATION_BARS | InsetCategorySet::IME,
            false,
        );
        assert_eq!(bottom, Edges::new(0, 0, 0, 300));

        let all = insets.amount(
            InsetCategorySet::NAVIGATION_BARS
                | InsetCategorySet::IME
                | InsetCategorySet::STATUS_BARS,
            false,
        );
        assert_eq!(all, Edges::new(0, 24, 0, 300));
    }

    #[test]
    fn hidden_category_contributes_zero_unless_ignored() {
        let mut insets = WindowInsets::new();
        insets.set_category_hidden(InsetCategorySet::IME, Edges::new(0, 0, 0, 300));

        assert!(!insets.is_visible(InsetCategorySet::IME));
        assert_eq!(insets.amount(InsetCategorySet::IME, false), Edges::ZERO);
        assert_eq!(
            insets.amount(InsetCategorySet::IME, true),
            Edges::new(0, 0, 0, 300)
        );
    }

    #[test]
    fn unsupported_category_reports_zero() {
        let insets = WindowInsets::new();
        assert_eq!(
            insets.amount(InsetCategorySet::DISPLAY_CUTOUT, false),
            Edges::ZERO
        );
        assert_eq!(
            insets.amount(InsetCategorySet::DISPLAY_CUTOUT, true),
            Edges::ZERO
        );
    }

    #[test]
    fn consumed_on_zeroes_only_named_sides() {
        let mut insets = WindowInsets::new();
        insets.set_category(InsetCategorySet::SYSTEM_GESTURES, Edges::new(5, 6, 7, 8));
        insets.set_category(InsetCategorySet::STATUS_BARS, Edges::new(0, 24, 0, 0));

        let out = insets.consumed_on(InsetCategorySet::SYSTEM_GESTURES, SideSet::LEFT);
        assert_eq!(
            out.amount(InsetCategorySet::SYSTEM_GESTURES, false),
            Edges::new(0, 6, 7, 8)
        );
        // The other category is untouched.
        assert_eq!(
            out.amount(InsetCategorySet::STATUS_BARS, false),
            Edges::new(0, 24, 0, 0)
        );
    }

    #[test]
    fn consumed_all_preserves_visibility() {
        let mut insets = WindowInsets::new();
        insets.set_category(InsetCategorySet::IME, Edges::new(0, 0, 0, 300));
        let out = insets.consumed_all();
        assert_eq!(out.amount(InsetCategorySet::IME, false), Edges::ZERO);
        assert!(out.is_visible(InsetCategorySet::IME));
    }
}
