// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration and per-box attachment.
//!
//! An [`Applier`] is the immutable configuration assembled by [`Builder`]:
//! which categories feed which sides, as padding or margin, persistently or
//! deferred during animation, plus the consumption policy and the synced-box
//! list. One applier can be attached to any number of boxes.
//!
//! [`Applier::attach`] captures the box's baseline (through the host-owned
//! [`BaselineCache`]), requests an initial insets pass, and returns the
//! [`Attachment`] that the host routes all later callbacks through.

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::animation::{AnimationState, EndOutcome};
use crate::backend::Host;
use crate::boxes::{BaselineCache, BoxId, BoxState};
use crate::category::InsetCategorySet;
use crate::consume::{Consume, apply_consumption};
use crate::resolve::resolve;
use crate::sides::{Side, SideSet};
use crate::snapshot::{RunningAnimation, WindowInsets};
use crate::table::SideTable;

/// Whether a configuration call feeds padding or margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApplyKind {
    /// Sum inset amounts into the box's padding.
    Padding,
    /// Sum inset amounts into the box's margin.
    Margin,
}

/// Immutable engine configuration for one class of boxes.
#[derive(Clone, Debug)]
pub struct Applier {
    padding: SideTable,
    margin: SideTable,
    deferred_padding: SideTable,
    deferred_margin: SideTable,
    consume: Consume,
    ignore_visibility: bool,
    synced: Vec<BoxId>,
}

impl Applier {
    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The full padding table: persistent and deferred categories together.
    #[must_use]
    pub fn full_padding(&self) -> SideTable {
        self.padding.union(&self.deferred_padding)
    }

    /// The full margin table: persistent and deferred categories together.
    #[must_use]
    pub fn full_margin(&self) -> SideTable {
        self.margin.union(&self.deferred_margin)
    }

    /// The per-side union of everything this applier touches, across both
    /// application kinds. Drives `Auto` consumption.
    #[must_use]
    pub fn union_table(&self) -> SideTable {
        self.full_padding().union(&self.full_margin())
    }

    /// All categories configured for deferred application.
    #[must_use]
    pub fn deferred_categories(&self) -> InsetCategorySet {
        self.deferred_padding.all() | self.deferred_margin.all()
    }

    /// All categories configured for persistent application.
    #[must_use]
    pub fn persistent_categories(&self) -> InsetCategorySet {
        self.padding.all() | self.margin.all()
    }

    /// Attaches this configuration to the box identified by `target`.
    ///
    /// Captures the baseline through `cache` (first attach reads the box;
    /// later attaches of the same box reuse the original capture) and
    /// requests an initial insets pass so resolution does not wait for the
    /// platform's next organic dispatch.
    pub fn attach<H: Host + ?Sized>(
        &self,
        host: &mut H,
        cache: &mut BaselineCache,
        target: BoxId,
    ) -> Attachment {
        let baseline = cache.get_or_capture(target, host.box_mut(target));
        host.request_insets_pass(target);
        let animation = AnimationState::new(
            self.deferred_categories(),
            self.persistent_categories(),
        );
        Attachment {
            applier: self.clone(),
            target,
            baseline,
            animation,
        }
    }
}

/// Assembles an [`Applier`] from additive, order-independent calls.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    padding: SideTable,
    margin: SideTable,
    deferred_padding: SideTable,
    deferred_margin: SideTable,
    consume: Consume,
    ignore_visibility: bool,
    synced: Vec<BoxId>,
}

impl Builder {
    /// ORs `categories` onto `sides` of the chosen table.
    ///
    /// The `animated` flag selects deferred application: the categories'
    /// contribution is suppressed while they animate and substituted by a
    /// translation offset instead.
    #[must_use]
    pub fn apply(
        mut self,
        categories: InsetCategorySet,
        sides: SideSet,
        kind: ApplyKind,
        animated: bool,
    ) -> Self {
        let table = match (kind, animated) {
            (ApplyKind::Padding, false) => &mut self.padding,
            (ApplyKind::Padding, true) => &mut self.deferred_padding,
            (ApplyKind::Margin, false) => &mut self.margin,
            (ApplyKind::Margin, true) => &mut self.deferred_margin,
        };
        table.add(categories, sides);
        self
    }

    /// Persistent padding application.
    #[must_use]
    pub fn padding(self, categories: InsetCategorySet, sides: SideSet) -> Self {
        self.apply(categories, sides, ApplyKind::Padding, false)
    }

    /// Persistent margin application.
    #[must_use]
    pub fn margin(self, categories: InsetCategorySet, sides: SideSet) -> Self {
        self.apply(categories, sides, ApplyKind::Margin, false)
    }

    /// Deferred (animated) padding application.
    #[must_use]
    pub fn deferred_padding(self, categories: InsetCategorySet, sides: SideSet) -> Self {
        self.apply(categories, sides, ApplyKind::Padding, true)
    }

    /// Deferred (animated) margin application.
    #[must_use]
    pub fn deferred_margin(self, categories: InsetCategorySet, sides: SideSet) -> Self {
        self.apply(categories, sides, ApplyKind::Margin, true)
    }

    /// Sets the consumption policy (default [`Consume::None`]).
    #[must_use]
    pub fn consume(mut self, policy: Consume) -> Self {
        self.consume = policy;
        self
    }

    /// Queries resting inset amounts even for currently-hidden categories
    /// (default off).
    #[must_use]
    pub fn ignore_visibility(mut self, ignore: bool) -> Self {
        self.ignore_visibility = ignore;
        self
    }

    /// Registers a box that receives the identical animation translation.
    #[must_use]
    pub fn sync_translation_to(mut self, id: BoxId) -> Self {
        self.synced.push(id);
        self
    }

    /// Finishes the configuration.
    ///
    /// # Panics
    ///
    /// Panics if any category is configured both persistently and deferred
    /// on the same side. The resolution math assumes the two sets are
    /// disjoint per side, so the overlap is rejected eagerly rather than
    /// producing double-applied insets later.
    #[must_use]
    pub fn build(self) -> Applier {
        let persistent = self.padding.union(&self.margin);
        let deferred = self.deferred_padding.union(&self.deferred_margin);
        for side in Side::ALL {
            assert!(
                (persistent.on(side) & deferred.on(side)).is_empty(),
                "persistent and deferred inset categories overlap on {side:?}"
            );
        }
        Applier {
            padding: self.padding,
            margin: self.margin,
            deferred_padding: self.deferred_padding,
            deferred_margin: self.deferred_margin,
            consume: self.consume,
            ignore_visibility: self.ignore_visibility,
            synced: self.synced,
        }
    }
}

/// Per-box runtime state: the captured baseline plus animation bookkeeping.
///
/// Created by [`Applier::attach`]; the host routes its inset-change and
/// animation lifecycle callbacks here.
#[derive(Clone, Debug)]
pub struct Attachment {
    applier: Applier,
    target: BoxId,
    baseline: BoxState,
    animation: AnimationState,
}

impl Attachment {
    /// The box this attachment manages.
    #[must_use]
    pub const fn target(&self) -> BoxId {
        self.target
    }

    /// The baseline captured at attach time.
    #[must_use]
    pub const fn baseline(&self) -> BoxState {
        self.baseline
    }

    /// The categories currently under animation suppression.
    #[must_use]
    pub const fn animating(&self) -> InsetCategorySet {
        self.animation.animating()
    }

    /// Steady-state entry point: one inset-change dispatch.
    ///
    /// Resolves padding/margin with the effective tables (full tables minus
    /// currently-animating categories), records the snapshot for the
    /// end-of-animation re-dispatch, and returns the consumption-adjusted
    /// snapshot the host should propagate to descendants.
    pub fn on_insets<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        insets: &WindowInsets,
    ) -> WindowInsets {
        self.animation.record_snapshot(insets);
        self.resolve_steady(host, insets);
        apply_consumption(insets, self.applier.consume, &self.applier.union_table())
    }

    /// Host signal: an animation over `categories` is about to start.
    pub fn on_animation_prepare(&mut self, categories: InsetCategorySet) {
        self.animation.prepare(categories);
    }

    /// Host signal: one animation-progress tick.
    ///
    /// Applies the computed translation to the target box and every synced
    /// box; when none of the running animations involve categories deferred
    /// here, the tick has no visual effect. The snapshot is always returned
    /// unchanged.
    pub fn on_animation_progress<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        insets: &WindowInsets,
        running: &[RunningAnimation],
    ) -> WindowInsets {
        if let Some(translation) = self.animation.progress(insets, running) {
            self.set_translation(host, translation);
        }
        *insets
    }

    /// Host signal: the animation over `categories` ended (or was
    /// cancelled; the two are handled identically).
    ///
    /// On the last end signal of a transition, re-dispatches the last full
    /// snapshot through the normal resolution path — guaranteeing the exact
    /// resting state without waiting a frame for an organic pass — and
    /// resets the translation on the target and all synced boxes.
    pub fn on_animation_end<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        categories: InsetCategorySet,
    ) -> EndOutcome {
        let outcome = self.animation.end(categories);
        if outcome == EndOutcome::Idle {
            if let Some(last) = self.animation.last_snapshot().copied() {
                self.resolve_steady(host, &last);
            }
            self.set_translation(host, Vec2::ZERO);
        }
        outcome
    }

    /// Host signal: the box (re)entered the visible tree.
    pub fn on_reattached_to_window<H: Host + ?Sized>(&mut self, host: &mut H) {
        host.request_insets_pass(self.target);
    }

    fn resolve_steady<H: Host + ?Sized>(&mut self, host: &mut H, insets: &WindowInsets) {
        let animating = self.animation.animating();
        let padding = self.applier.full_padding().subtract(animating);
        let margin = self.applier.full_margin().subtract(animating);
        resolve(
            host.box_mut(self.target),
            insets,
            &padding,
            &margin,
            &self.baseline,
            self.applier.ignore_visibility,
        );
    }

    fn set_translation<H: Host + ?Sized>(&mut self, host: &mut H, translation: Vec2) {
        host.box_mut(self.target).set_translation(translation);
        for &id in &self.applier.synced {
            host.box_mut(id).set_translation(translation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::Edges;
    use crate::test_fixtures::{TestBox, TestHost};

    const TARGET: BoxId = BoxId(1);
    const SYNCED: BoxId = BoxId(2);

    fn keyboard_snapshot(ime_bottom: i32, nav_bottom: i32) -> WindowInsets {
        let mut insets = WindowInsets::new();
        insets.set_category(InsetCategorySet::IME, Edges::new(0, 0, 0, ime_bottom));
        insets.set_category(
            InsetCategorySet::NAVIGATION_BARS,
            Edges::new(0, 0, 0, nav_bottom),
        );
        insets
    }

    fn input_bar_applier() -> Applier {
        Applier::builder()
            .padding(InsetCategorySet::NAVIGATION_BARS, SideSet::BOTTOM)
            .deferred_padding(InsetCategorySet::IME, SideSet::BOTTOM)
            .sync_translation_to(SYNCED)
            .build()
    }

    fn attach(applier: &Applier, host: &mut TestHost) -> Attachment {
        let mut cache = BaselineCache::new();
        applier.attach(host, &mut cache, TARGET)
    }

    #[test]
    fn attach_captures_baseline_and_requests_pass() {
        let mut host = TestHost::with_box(TARGET, TestBox::with_padding(Edges::new(0, 0, 0, 16)));
        host.insert(SYNCED, TestBox::with_padding(Edges::ZERO));
        let applier = input_bar_applier();
        let attachment = attach(&applier, &mut host);

        assert_eq!(attachment.baseline().padding, Edges::new(0, 0, 0, 16));
        assert_eq!(host.requested_passes, [TARGET]);
    }

    #[test]
    #[should_panic(expected = "persistent and deferred inset categories overlap")]
    fn build_rejects_persistent_deferred_overlap() {
        let _ = Applier::builder()
            .padding(InsetCategorySet::IME, SideSet::BOTTOM)
            .deferred_padding(InsetCategorySet::IME, SideSet::BOTTOM)
            .build();
    }

    #[test]
    fn overlap_on_distinct_sides_is_legal() {
        // The same category may be persistent on one side and deferred on
        // another; disjointness is per side.
        let applier = Applier::builder()
            .padding(InsetCategorySet::IME, SideSet::TOP)
            .deferred_padding(InsetCategorySet::IME, SideSet::BOTTOM)
            .build();
        assert_eq!(applier.deferred_categories(), InsetCategorySet::IME);
    }

    #[test]
    fn builder_is_order_independent() {
        let a = Applier::builder()
            .padding(InsetCategorySet::STATUS_BARS, SideSet::TOP)
            .deferred_padding(InsetCategorySet::IME, SideSet::BOTTOM)
            .build();
        let b = Applier::builder()
            .deferred_padding(InsetCategorySet::IME, SideSet::BOTTOM)
            .padding(InsetCategorySet::STATUS_BARS, SideSet::TOP)
            .build();
        assert_eq!(a.full_padding(), b.full_padding());
        assert_eq!(a.union_table(), b.union_table());
    }

    #[test]
    fn steady_state_applies_full_tables() {
        let mut host = TestHost::with_box(TARGET, TestBox::with_padding(Edges::new(0, 0, 0, 16)));
        host.insert(SYNCED, TestBox::with_padding(Edges::ZERO));
        let applier = input_bar_applier();
        let mut attachment = attach(&applier, &mut host);

        attachment.on_insets(&mut host, &keyboard_snapshot(300, 48));
        // Deferred IME counts while idle; max(300, 48) on the bottom.
        assert_eq!(host.bx(TARGET).padding_value, Edges::new(0, 0, 0, 316));
    }

    #[test]
    fn animating_categories_are_suppressed_from_resolution() {
        let mut host = TestHost::with_box(TARGET, TestBox::with_padding(Edges::new(0, 0, 0, 16)));
        host.insert(SYNCED, TestBox::with_padding(Edges::ZERO));
        let applier = input_bar_applier();
        let mut attachment = attach(&applier, &mut host);

        attachment.on_animation_prepare(InsetCategorySet::IME);
        attachment.on_insets(&mut host, &keyboard_snapshot(300, 48));
        // Only the persistent navigation bar applies while the IME animates.
        assert_eq!(host.bx(TARGET).padding_value, Edges::new(0, 0, 0, 64));
    }

    #[test]
    fn progress_translates_target_and_synced_boxes() {
        let mut host = TestHost::with_box(TARGET, TestBox::with_padding(Edges::ZERO));
        host.insert(SYNCED, TestBox::with_padding(Edges::ZERO));
        let applier = input_bar_applier();
        let mut attachment = attach(&applier, &mut host);

        attachment.on_animation_prepare(InsetCategorySet::IME);
        let snapshot = keyboard_snapshot(200, 48);
        let out = attachment.on_animation_progress(
            &mut host,
            &snapshot,
            &[RunningAnimation::new(InsetCategorySet::IME)],
        );
        assert_eq!(out, snapshot, "progress passes the snapshot through");

        let expected = Vec2::new(0.0, -152.0);
        assert_eq!(host.bx(TARGET).translation, expected);
        assert_eq!(host.bx(SYNCED).translation, expected);
    }

    #[test]
    fn end_of_animation_snaps_to_direct_resolution() {
        let mut host = TestHost::with_box(TARGET, TestBox::with_padding(Edges::new(0, 0, 0, 16)));
        host.insert(SYNCED, TestBox::with_padding(Edges::ZERO));
        let applier = input_bar_applier();
        let mut attachment = attach(&applier, &mut host);

        // Steady dispatch with the keyboard up records the snapshot.
        let snapshot = keyboard_snapshot(300, 48);
        attachment.on_insets(&mut host, &snapshot);

        attachment.on_animation_prepare(InsetCategorySet::IME);
        attachment.on_animation_progress(
            &mut host,
            &keyboard_snapshot(150, 48),
            &[RunningAnimation::new(InsetCategorySet::IME)],
        );
        assert_ne!(host.bx(TARGET).translation, Vec2::ZERO);

        let outcome = attachment.on_animation_end(&mut host, InsetCategorySet::IME);
        assert_eq!(outcome, EndOutcome::Idle);

        // Resting state equals a direct, non-animated resolution of the last
        // recorded snapshot; translation is exactly zero everywhere.
        let mut direct = TestBox::with_padding(Edges::new(0, 0, 0, 16));
        let baseline = BoxState::capture(&direct);
        resolve(
            &mut direct,
            &snapshot,
            &applier.full_padding(),
            &applier.full_margin(),
            &baseline,
            false,
        );
        assert_eq!(host.bx(TARGET).padding_value, direct.padding_value);
        assert_eq!(host.bx(TARGET).translation, Vec2::ZERO);
        assert_eq!(host.bx(SYNCED).translation, Vec2::ZERO);
    }

    #[test]
    fn partial_end_keeps_other_categories_animating() {
        let applier = Applier::builder()
            .deferred_padding(
                InsetCategorySet::IME | InsetCategorySet::STATUS_BARS,
                SideSet::VERTICAL,
            )
            .build();
        let mut host = TestHost::with_box(TARGET, TestBox::with_padding(Edges::ZERO));
        let mut attachment = attach(&applier, &mut host);

        attachment
            .on_animation_prepare(InsetCategorySet::IME | InsetCategorySet::STATUS_BARS);
        let outcome = attachment.on_animation_end(&mut host, InsetCategorySet::STATUS_BARS);
        assert_eq!(outcome, EndOutcome::StillAnimating);
        assert_eq!(attachment.animating(), InsetCategorySet::IME);
    }

    #[test]
    fn on_insets_returns_consumed_snapshot() {
        let applier = Applier::builder()
            .padding(InsetCategorySet::NAVIGATION_BARS, SideSet::BOTTOM)
            .consume(Consume::Auto)
            .build();
        let mut host = TestHost::with_box(TARGET, TestBox::with_padding(Edges::ZERO));
        let mut attachment = attach(&applier, &mut host);

        let out = attachment.on_insets(&mut host, &keyboard_snapshot(300, 48));
        assert_eq!(
            out.amount(InsetCategorySet::NAVIGATION_BARS, false),
            Edges::ZERO
        );
        // The IME was not applied by this box and stays visible below.
        assert_eq!(
            out.amount(InsetCategorySet::IME, false),
            Edges::new(0, 0, 0, 300)
        );
    }

    #[test]
    fn reattach_requests_another_pass() {
        let mut host = TestHost::with_box(TARGET, TestBox::with_padding(Edges::ZERO));
        let applier = Applier::builder()
            .padding(InsetCategorySet::STATUS_BARS, SideSet::TOP)
            .build();
        let mut attachment = attach(&applier, &mut host);
        attachment.on_reattached_to_window(&mut host);
        assert_eq!(host.requested_passes, [TARGET, TARGET]);
    }
}
