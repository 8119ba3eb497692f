// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation coordination for deferred inset categories.
//!
//! While the host animates an obstruction (the keyboard sliding in, bars
//! fading), the padding/margin contribution of the animating categories is
//! suppressed and visually substituted by a translation offset, so the box
//! tracks the obstruction frame-by-frame instead of jumping to the final
//! state.
//!
//! [`AnimationState`] is a small state machine over the category-set domain:
//!
//! - **Idle** — [`animating`](AnimationState::animating) is empty.
//! - **Preparing** — the host signals a category is about to animate;
//!   categories this box configured as deferred are ORed in.
//! - **Progressing** — each progress tick computes a translation delta
//!   against the persistent baseline, clamped at zero per side.
//! - **Ending** — each finished animation removes its categories; once the
//!   set empties, the last full snapshot is re-dispatched through the normal
//!   resolution path and the translation is reset. Waiting for the host's
//!   next organic pass instead would lag a frame and cause a visible jump.
//!
//! A host-cancelled animation still delivers its end signal and is handled
//! exactly like a natural completion.

use kurbo::Vec2;

use crate::category::InsetCategorySet;
use crate::edges::Edges;
use crate::snapshot::{RunningAnimation, WindowInsets};

/// Per-attachment animation bookkeeping.
#[derive(Clone, Debug)]
pub struct AnimationState {
    /// Categories configured for deferred application on this box.
    deferred: InsetCategorySet,
    /// Union of persistently-applied categories (padding ∪ margin), the
    /// baseline that translation deltas are computed against.
    persistent: InsetCategorySet,
    /// Categories with a live transition right now.
    animating: InsetCategorySet,
    /// The most recent full snapshot, kept for the end-of-animation
    /// re-dispatch.
    last: Option<WindowInsets>,
}

/// What an [`AnimationState::end`] signal amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndOutcome {
    /// None of the ended categories were animating here; nothing to do.
    Ignored,
    /// Other categories are still animating; a later end will settle them.
    StillAnimating,
    /// The transition is fully idle: re-dispatch the last snapshot and zero
    /// the translation.
    Idle,
}

impl AnimationState {
    /// Creates an idle state for a box with the given deferred and
    /// persistent category configuration.
    #[must_use]
    pub const fn new(deferred: InsetCategorySet, persistent: InsetCategorySet) -> Self {
        Self {
            deferred,
            persistent,
            animating: InsetCategorySet::empty(),
            last: None,
        }
    }

    /// The categories currently under animation suppression.
    #[must_use]
    pub const fn animating(&self) -> InsetCategorySet {
        self.animating
    }

    /// Records the most recent full snapshot seen by steady-state dispatch.
    pub fn record_snapshot(&mut self, insets: &WindowInsets) {
        self.last = Some(*insets);
    }

    /// The last recorded full snapshot, if any.
    #[must_use]
    pub fn last_snapshot(&self) -> Option<&WindowInsets> {
        self.last.as_ref()
    }

    /// Host signal: `categories` are about to animate.
    ///
    /// Only the deferred-configured subset starts suppression; an animation
    /// of a category this box applies persistently (or not at all) has no
    /// effect here.
    pub fn prepare(&mut self, categories: InsetCategorySet) {
        self.animating |= categories & self.deferred;
    }

    /// Computes the translation for one progress tick, or `None` when none
    /// of the running animations involve categories suppressed on this box.
    ///
    /// The delta per side is `max(animated − persistent, 0)`: the animated
    /// amount for the running suppressed categories, minus the persistent
    /// baseline already applied as padding/margin, clamped because transient
    /// phases can drive the raw difference negative and a negative visual
    /// offset would be incorrect.
    #[must_use]
    pub fn progress(
        &self,
        insets: &WindowInsets,
        running: &[RunningAnimation],
    ) -> Option<Vec2> {
        let running_union = running
            .iter()
            .fold(InsetCategorySet::empty(), |acc, a| acc | a.categories);
        let running_set = running_union & self.animating;
        if running_set.is_empty() {
            return None;
        }

        let animated = insets.amount(running_set, false);
        let persistent = insets.amount(self.persistent & !running_set, false);
        let delta = animated.inset_delta(persistent);
        Some(translation_of(delta))
    }

    /// Host signal: the animation over `categories` ended (or was cancelled).
    #[must_use]
    pub fn end(&mut self, categories: InsetCategorySet) -> EndOutcome {
        if (self.animating & categories).is_empty() {
            return EndOutcome::Ignored;
        }
        self.animating &= !categories;
        if self.animating.is_empty() {
            EndOutcome::Idle
        } else {
            EndOutcome::StillAnimating
        }
    }
}

/// Converts a per-side delta into the visual translation vector.
fn translation_of(delta: Edges) -> Vec2 {
    Vec2::new(
        f64::from(delta.left - delta.right),
        f64::from(delta.top - delta.bottom),
    )
}
