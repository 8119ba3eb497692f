// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The box contract and captured box state.
//!
//! The engine never owns rendering widgets. It manipulates them through
//! [`InsetBox`] — "a box with four-sided padding and margin and an optional
//! layout-pass trigger" — and identifies them by host-assigned [`BoxId`]s.
//!
//! [`BoxState`] is the padding/margin baseline captured when insets handling
//! is attached. Every later resolution adds inset amounts to this *original*
//! authored state, never to a previously augmented value; otherwise repeated
//! dispatches would accumulate without bound. [`BaselineCache`] guards the
//! capture with create-on-first-access semantics so the baseline is taken
//! exactly once per box.

use alloc::collections::BTreeMap;
use core::fmt;

use kurbo::Vec2;

use crate::edges::Edges;

/// Identifies a box within the host.
///
/// Hosts assign box IDs to their widgets; core code passes them through
/// without interpreting the value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BoxId(pub u64);

impl fmt::Debug for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxId({})", self.0)
    }
}

/// A UI element with four-sided padding, optional four-sided margin, and a
/// visual translation.
///
/// Implemented by the host for whatever widget type owns the box model. The
/// engine calls setters from within host-dispatched callbacks only, on the
/// host UI thread.
pub trait InsetBox {
    /// Returns the current padding.
    fn padding(&self) -> Edges;

    /// Sets the padding.
    ///
    /// Expected to be a cheap no-op when `padding` equals the current value;
    /// the engine writes padding unconditionally on every resolution.
    fn set_padding(&mut self, padding: Edges);

    /// Whether this box's layout parameters support per-side margins.
    fn supports_margin(&self) -> bool;

    /// Returns the current margin, or [`Edges::ZERO`] when margins are
    /// unsupported.
    fn margin(&self) -> Edges;

    /// Sets the margin. Only called when [`supports_margin`] returns true,
    /// and only when at least one side actually changed.
    ///
    /// [`supports_margin`]: Self::supports_margin
    fn set_margin(&mut self, margin: Edges);

    /// Sets the visual translation applied on top of the laid-out position.
    fn set_translation(&mut self, translation: Vec2);

    /// Requests a layout pass on the parent element.
    ///
    /// Only used by the legacy margin workaround (see
    /// [`legacy_margin_layout`](Self::legacy_margin_layout)).
    fn request_parent_layout(&mut self) {}

    /// Whether the host platform's margin change detection is unreliable,
    /// requiring an explicit parent layout pass after each margin write.
    ///
    /// Compatibility shim for older host platform versions; defaults to
    /// `false`.
    fn legacy_margin_layout(&self) -> bool {
        false
    }
}

/// A box's padding and margin at the moment insets handling was attached.
///
/// Immutable once captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoxState {
    /// The authored padding.
    pub padding: Edges,
    /// The authored margin, or [`Edges::ZERO`] when margins are unsupported.
    pub margin: Edges,
}

impl BoxState {
    /// Reads the box's current padding and margin.
    ///
    /// No side effects beyond the read. Margins default to zero when the
    /// box's layout parameters do not support them.
    #[must_use]
    pub fn capture(bx: &dyn InsetBox) -> Self {
        Self {
            padding: bx.padding(),
            margin: if bx.supports_margin() {
                bx.margin()
            } else {
                Edges::ZERO
            },
        }
    }
}

/// Identity-keyed lazy store of captured [`BoxState`]s.
///
/// Entries are created on first access and never mutated afterwards, so a
/// second attach of the same box — or any number of later inset dispatches —
/// keeps adding to the originally authored values.
#[derive(Clone, Debug, Default)]
pub struct BaselineCache {
    states: BTreeMap<BoxId, BoxState>,
}

impl BaselineCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            states: BTreeMap::new(),
        }
    }

    /// Returns the baseline for `id`, capturing it from `bx` on first access.
    pub fn get_or_capture(&mut self, id: BoxId, bx: &dyn InsetBox) -> BoxState {
        *self
            .states
            .entry(id)
            .or_insert_with(|| BoxState::capture(bx))
    }

    /// Returns the baseline for `id`, if one was captured.
    #[must_use]
    pub fn get(&self, id: BoxId) -> Option<&BoxState> {
        self.states.get(&id)
    }
}
