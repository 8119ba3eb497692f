// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable test doubles for eaves host integrations.
//!
//! Host platforms own real widgets; tests and demos need something cheaper.
//! This crate provides a [`FakeBox`] that records every mutation the engine
//! makes, a [`FakeHost`] over a map of fake boxes, snapshot construction
//! helpers, and a [`RecordingSink`] that collects trace events.
//!
//! The integration tests at the bottom of this crate double as executable
//! documentation of the full dispatch flow: attach, steady-state resolution,
//! a keyboard animation with deferred insets, and consumption hand-off to a
//! descendant box.

#![no_std]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Vec2;

use eaves_core::backend::Host;
use eaves_core::boxes::{BoxId, InsetBox};
use eaves_core::category::InsetCategorySet;
use eaves_core::edges::Edges;
use eaves_core::snapshot::WindowInsets;
use eaves_core::trace::{
    AnimationEndEvent, AnimationPrepareEvent, AnimationProgressEvent, AttachEvent, ConsumeEvent,
    ResolveEvent, TraceSink,
};

/// An [`InsetBox`] that records every mutation the engine makes.
#[derive(Clone, Debug)]
pub struct FakeBox {
    padding: Edges,
    margin: Edges,
    /// The current visual translation.
    pub translation: Vec2,
    /// Whether the box advertises margin-capable layout parameters.
    pub margin_support: bool,
    /// Whether margin writes must be followed by a parent layout pass.
    pub legacy_margin: bool,
    /// Every padding value ever written, in order.
    pub padding_writes: Vec<Edges>,
    /// Every margin value ever written, in order.
    pub margin_writes: Vec<Edges>,
    /// Number of parent layout passes requested.
    pub parent_layout_requests: u32,
}

impl FakeBox {
    /// Creates a fake box with the given authored padding and no margin.
    #[must_use]
    pub fn new(padding: Edges) -> Self {
        Self::with_margin(padding, Edges::ZERO)
    }

    /// Creates a fake box with the given authored padding and margin.
    #[must_use]
    pub fn with_margin(padding: Edges, margin: Edges) -> Self {
        Self {
            padding,
            margin,
            translation: Vec2::ZERO,
            margin_support: true,
            legacy_margin: false,
            padding_writes: Vec::new(),
            margin_writes: Vec::new(),
            parent_layout_requests: 0,
        }
    }

    /// Creates a fake box without margin-capable layout parameters.
    #[must_use]
    pub fn without_margin_support(padding: Edges) -> Self {
        let mut bx = Self::new(padding);
        bx.margin_support = false;
        bx
    }
}

impl InsetBox for FakeBox {
    fn padding(&self) -> Edges {
        self.padding
    }

    fn set_padding(&mut self, padding: Edges) {
        self.padding = padding;
        self.padding_writes.push(padding);
    }

    fn supports_margin(&self) -> bool {
        self.margin_support
    }

    fn margin(&self) -> Edges {
        if self.margin_support {
            self.margin
        } else {
            Edges::ZERO
        }
    }

    fn set_margin(&mut self, margin: Edges) {
        self.margin = margin;
        self.margin_writes.push(margin);
    }

    fn set_translation(&mut self, translation: Vec2) {
        self.translation = translation;
    }

    fn request_parent_layout(&mut self) {
        self.parent_layout_requests += 1;
    }

    fn legacy_margin_layout(&self) -> bool {
        self.legacy_margin
    }
}

/// A [`Host`] over a map of [`FakeBox`]es.
#[derive(Clone, Debug, Default)]
pub struct FakeHost {
    boxes: BTreeMap<BoxId, FakeBox>,
    /// Every insets pass the engine requested, in order.
    pub requested_passes: Vec<BoxId>,
}

impl FakeHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a box under `id`, replacing any previous one.
    pub fn insert(&mut self, id: BoxId, bx: FakeBox) {
        self.boxes.insert(id, bx);
    }

    /// Immutable access to a registered box.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never registered.
    #[must_use]
    pub fn get(&self, id: BoxId) -> &FakeBox {
        self.boxes.get(&id).expect("unknown box id")
    }
}

impl Host for FakeHost {
    fn box_mut(&mut self, id: BoxId) -> &mut dyn InsetBox {
        self.boxes.get_mut(&id).expect("unknown box id")
    }

    fn request_insets_pass(&mut self, id: BoxId) {
        self.requested_passes.push(id);
    }
}

/// Builds a snapshot from `(category, amount)` pairs, each visible.
#[must_use]
pub fn snapshot(entries: &[(InsetCategorySet, Edges)]) -> WindowInsets {
    let mut insets = WindowInsets::new();
    for &(category, amount) in entries {
        insets.set_category(category, amount);
    }
    insets
}

/// A recorded trace event, in dispatch order.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// An attach.
    Attach(AttachEvent),
    /// A steady-state resolution.
    Resolve(ResolveEvent),
    /// An animation-prepare signal.
    AnimationPrepare(AnimationPrepareEvent),
    /// An effective progress tick.
    AnimationProgress(AnimationProgressEvent),
    /// An animation-end signal.
    AnimationEnd(AnimationEndEvent),
    /// A consumption rewrite.
    Consume(ConsumeEvent),
}

/// A [`TraceSink`] that stores every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// The recorded events, in dispatch order.
    pub events: Vec<RecordedEvent>,
}

impl TraceSink for RecordingSink {
    fn on_attach(&mut self, e: &AttachEvent) {
        self.events.push(RecordedEvent::Attach(*e));
    }

    fn on_resolve(&mut self, e: &ResolveEvent) {
        self.events.push(RecordedEvent::Resolve(*e));
    }

    fn on_animation_prepare(&mut self, e: &AnimationPrepareEvent) {
        self.events.push(RecordedEvent::AnimationPrepare(*e));
    }

    fn on_animation_progress(&mut self, e: &AnimationProgressEvent) {
        self.events.push(RecordedEvent::AnimationProgress(*e));
    }

    fn on_animation_end(&mut self, e: &AnimationEndEvent) {
        self.events.push(RecordedEvent::AnimationEnd(*e));
    }

    fn on_consume(&mut self, e: &ConsumeEvent) {
        self.events.push(RecordedEvent::Consume(*e));
    }
}
