// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inset categories — the classes of screen obstruction the host reports.
//!
//! Categories combine via bitwise OR into an [`InsetCategorySet`]. The empty
//! set is a safe no-op input everywhere: querying it yields zero insets and
//! adding it to a table changes nothing.
//!
//! # Kinds
//!
//! Categories fall into two kinds that the resolution algorithm treats
//! differently when both are configured on the same side (see
//! [`resolve`](crate::resolve)):
//!
//! - **Window-kind** — regions occupied by system UI ([`STATUS_BARS`],
//!   [`NAVIGATION_BARS`], [`CAPTION_BAR`], [`IME`], [`DISPLAY_CUTOUT`]).
//! - **Gesture-kind** — regions reserved for system gesture recognition
//!   ([`SYSTEM_GESTURES`], [`MANDATORY_SYSTEM_GESTURES`],
//!   [`TAPPABLE_ELEMENT`]).
//!
//! [`STATUS_BARS`]: InsetCategorySet::STATUS_BARS
//! [`NAVIGATION_BARS`]: InsetCategorySet::NAVIGATION_BARS
//! [`CAPTION_BAR`]: InsetCategorySet::CAPTION_BAR
//! [`IME`]: InsetCategorySet::IME
//! [`DISPLAY_CUTOUT`]: InsetCategorySet::DISPLAY_CUTOUT
//! [`SYSTEM_GESTURES`]: InsetCategorySet::SYSTEM_GESTURES
//! [`MANDATORY_SYSTEM_GESTURES`]: InsetCategorySet::MANDATORY_SYSTEM_GESTURES
//! [`TAPPABLE_ELEMENT`]: InsetCategorySet::TAPPABLE_ELEMENT

use bitflags::bitflags;

bitflags! {
    /// A set of inset categories.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InsetCategorySet: u16 {
        /// The status bar region.
        const STATUS_BARS = 1 << 0;
        /// The navigation bar region.
        const NAVIGATION_BARS = 1 << 1;
        /// The caption (window title) bar region.
        const CAPTION_BAR = 1 << 2;
        /// The on-screen keyboard region.
        const IME = 1 << 3;
        /// The optional system-gesture exclusion region.
        const SYSTEM_GESTURES = 1 << 4;
        /// The mandatory system-gesture exclusion region.
        const MANDATORY_SYSTEM_GESTURES = 1 << 5;
        /// The region where taps are intercepted by system elements.
        const TAPPABLE_ELEMENT = 1 << 6;
        /// The display cutout (notch / camera hole) region.
        const DISPLAY_CUTOUT = 1 << 7;

        /// All window-kind categories.
        const WINDOW_KINDS = Self::STATUS_BARS.bits()
            | Self::NAVIGATION_BARS.bits()
            | Self::CAPTION_BAR.bits()
            | Self::IME.bits()
            | Self::DISPLAY_CUTOUT.bits();
        /// All gesture-kind categories.
        const GESTURE_KINDS = Self::SYSTEM_GESTURES.bits()
            | Self::MANDATORY_SYSTEM_GESTURES.bits()
            | Self::TAPPABLE_ELEMENT.bits();
    }
}

/// Number of distinct single-bit categories.
pub(crate) const CATEGORY_COUNT: usize = 8;

impl InsetCategorySet {
    /// All system-bar categories (status, navigation, caption).
    pub const SYSTEM_BARS: Self = Self::STATUS_BARS
        .union(Self::NAVIGATION_BARS)
        .union(Self::CAPTION_BAR);

    /// Returns the gesture-kind members of this set.
    #[must_use]
    pub const fn gesture_kinds(self) -> Self {
        self.intersection(Self::GESTURE_KINDS)
    }

    /// Returns the window-kind members of this set.
    #[must_use]
    pub const fn window_kinds(self) -> Self {
        self.intersection(Self::WINDOW_KINDS)
    }

    /// Returns the slot index of a single-bit category.
    ///
    /// Used to index the per-category arrays in
    /// [`WindowInsets`](crate::snapshot::WindowInsets).
    pub(crate) const fn slot(self) -> usize {
        self.bits().trailing_zeros() as usize
    }
}
