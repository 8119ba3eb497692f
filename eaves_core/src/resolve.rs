// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inset resolution algorithm.
//!
//! [`resolve`] computes a box's final padding and margin from three inputs:
//! the side-application tables, the captured [`BoxState`] baseline, and the
//! current [`WindowInsets`] snapshot. Each side is resolved independently:
//!
//! - A side whose category set is empty keeps the box's *current* live
//!   value — not the captured baseline — so externally-driven padding or
//!   margin changes on unclaimed sides survive a resolution pass.
//! - A claimed side becomes `baseline + amount`, where the amount is read
//!   from the snapshot for that side's category set.
//!
//! Resolution is idempotent: running it twice against the same inputs
//! produces identical values and no further side effects, which is what
//! keeps repeated host dispatches from accumulating.
//!
//! # Gesture-over-window override
//!
//! When a side's category set mixes window-kind and gesture-kind categories
//! (see [`category`](crate::category)), the gesture-kind amount *replaces*
//! the window-kind amount rather than combining with it. This preserves the
//! long-observed "gesture insets win" behavior of sequential appliers, where
//! the gesture pass wrote last. Whether that override is intentional design
//! or an artifact of apply ordering is ambiguous; it is kept as observed
//! rather than switched to additive semantics.

use crate::boxes::{BoxState, InsetBox};
use crate::category::InsetCategorySet;
use crate::edges::Edges;
use crate::sides::Side;
use crate::snapshot::WindowInsets;
use crate::table::SideTable;

/// The outcome of one [`resolve`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolved {
    /// The padding after resolution.
    pub padding: Edges,
    /// The margin after resolution (current margin when no side is claimed).
    pub margin: Edges,
    /// Whether the margin was actually written.
    pub margin_written: bool,
}

/// Resolves and applies `bx`'s padding and margin for one inset snapshot.
///
/// Padding is written unconditionally — the box's setter is expected to
/// no-op on an unchanged value. Margin is written only when at least one
/// side differs from the current margin, to avoid forcing an unnecessary
/// layout pass.
///
/// # Panics
///
/// Panics if `margin_table` claims any side while `bx` does not support
/// margins. Margin insets without margin-capable layout parameters is a
/// configuration mistake that must surface immediately.
pub fn resolve(
    bx: &mut dyn InsetBox,
    insets: &WindowInsets,
    padding_table: &SideTable,
    margin_table: &SideTable,
    baseline: &BoxState,
    ignore_visibility: bool,
) -> Resolved {
    let padding = resolve_edges(
        bx.padding(),
        baseline.padding,
        insets,
        padding_table,
        ignore_visibility,
    );
    bx.set_padding(padding);

    let mut margin = bx.margin();
    let mut margin_written = false;
    if !margin_table.is_empty() {
        assert!(
            bx.supports_margin(),
            "margin insets configured on a box without margin-capable layout parameters"
        );
        let resolved = resolve_edges(
            margin,
            baseline.margin,
            insets,
            margin_table,
            ignore_visibility,
        );
        if resolved != margin {
            bx.set_margin(resolved);
            margin_written = true;
            // TODO: drop this parent-layout shim once hosts with unreliable
            // margin change detection age out of support.
            if bx.legacy_margin_layout() {
                bx.request_parent_layout();
            }
        }
        margin = resolved;
    }

    Resolved {
        padding,
        margin,
        margin_written,
    }
}

fn resolve_edges(
    current: Edges,
    baseline: Edges,
    insets: &WindowInsets,
    table: &SideTable,
    ignore_visibility: bool,
) -> Edges {
    let mut out = current;
    for side in Side::ALL {
        let categories = table.on(side);
        if categories.is_empty() {
            continue;
        }
        let amount = side_amount(insets, categories, ignore_visibility, side);
        out = out.with(side, baseline.get(side) + amount);
    }
    out
}

/// Reads the snapshot amount for one side's category set, applying the
/// gesture-over-window override.
fn side_amount(
    insets: &WindowInsets,
    categories: InsetCategorySet,
    ignore_visibility: bool,
    side: Side,
) -> i32 {
    let mut amount = insets
        .amount(categories.window_kinds(), ignore_visibility)
        .get(side);
    let gestures = categories.gesture_kinds();
    if !gestures.is_empty() {
        amount = insets.amount(gestures, ignore_visibility).get(side);
    }
    amount
}
