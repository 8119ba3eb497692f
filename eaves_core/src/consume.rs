// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Consumption of inset values before they propagate to descendants.
//!
//! After a box resolves its padding/margin, the host hands the (possibly
//! rewritten) snapshot on to descendant boxes. Consumption decides what they
//! still get to see.

use crate::snapshot::WindowInsets;
use crate::table::SideTable;

/// How much of the inbound snapshot is consumed after resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Consume {
    /// Pass the snapshot through unchanged.
    #[default]
    None,
    /// Zero every category before propagation.
    All,
    /// Zero, per category and per side, exactly what this box applied.
    ///
    /// Other categories — and the sides of an applied category that this box
    /// did not claim — remain visible to descendants.
    Auto,
}

/// Applies `policy` to `insets`, returning the snapshot descendants receive.
///
/// `union_table` must be the per-side union of everything this box applies:
/// padding and margin tables, persistent and deferred alike. `Auto` is
/// computed against that union rather than any single application table,
/// since a category may feed padding on some sides and margin on others.
#[must_use]
pub fn apply_consumption(
    insets: &WindowInsets,
    policy: Consume,
    union_table: &SideTable,
) -> WindowInsets {
    match policy {
        Consume::None => *insets,
        Consume::All => insets.consumed_all(),
        Consume::Auto => {
            let mut out = *insets;
            for category in union_table.all().iter() {
                out = out.consumed_on(category, union_table.sides_of(category));
            }
            out
        }
    }
}
