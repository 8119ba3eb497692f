// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for inset dispatch.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! integration code calls around each engine entry point. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! The engine itself stays trace-free; hosts and harnesses drive the tracer
//! around the [`Attachment`](crate::applier::Attachment) callbacks:
//!
//! ```rust,ignore
//! let mut sink = RecordingSink::default();
//! let mut tracer = Tracer::new(&mut sink);
//!
//! let outgoing = attachment.on_insets(&mut host, &snapshot);
//! tracer.on_resolve(&ResolveEvent {
//!     target: box_id,
//!     padding: host.box_mut(box_id).padding(),
//!     animating: attachment.animating(),
//! });
//! ```

use kurbo::Vec2;

use crate::animation::EndOutcome;
use crate::boxes::BoxId;
use crate::category::InsetCategorySet;
use crate::consume::Consume;
use crate::edges::Edges;

/// Emitted when insets handling is attached to a box.
#[derive(Clone, Copy, Debug)]
pub struct AttachEvent {
    /// The box that was attached.
    pub target: BoxId,
    /// The captured baseline padding.
    pub baseline_padding: Edges,
    /// The captured baseline margin.
    pub baseline_margin: Edges,
}

/// Emitted after a steady-state resolution.
#[derive(Clone, Copy, Debug)]
pub struct ResolveEvent {
    /// The box that was resolved.
    pub target: BoxId,
    /// The padding after resolution.
    pub padding: Edges,
    /// Categories suppressed by a live animation during this resolution.
    pub animating: InsetCategorySet,
}

/// Emitted when an animation-prepare signal arrives.
#[derive(Clone, Copy, Debug)]
pub struct AnimationPrepareEvent {
    /// The box whose attachment received the signal.
    pub target: BoxId,
    /// The categories the host announced.
    pub categories: InsetCategorySet,
}

/// Emitted on each animation-progress tick that had a visual effect.
#[derive(Clone, Copy, Debug)]
pub struct AnimationProgressEvent {
    /// The box being translated.
    pub target: BoxId,
    /// The translation applied to the box (and any synced boxes).
    pub translation: Vec2,
}

/// Emitted when an animation-end signal arrives.
#[derive(Clone, Copy, Debug)]
pub struct AnimationEndEvent {
    /// The box whose attachment received the signal.
    pub target: BoxId,
    /// The categories the host announced.
    pub categories: InsetCategorySet,
    /// What the signal amounted to.
    pub outcome: EndOutcome,
}

/// Emitted after consumption rewrites the outgoing snapshot.
#[derive(Clone, Copy, Debug)]
pub struct ConsumeEvent {
    /// The box whose policy was applied.
    pub target: BoxId,
    /// The policy that was applied.
    pub policy: Consume,
}

/// Receives trace events from inset dispatch.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when insets handling is attached to a box.
    fn on_attach(&mut self, e: &AttachEvent) {
        _ = e;
    }

    /// Called after a steady-state resolution.
    fn on_resolve(&mut self, e: &ResolveEvent) {
        _ = e;
    }

    /// Called when an animation-prepare signal arrives.
    fn on_animation_prepare(&mut self, e: &AnimationPrepareEvent) {
        _ = e;
    }

    /// Called on each effective animation-progress tick.
    fn on_animation_progress(&mut self, e: &AnimationProgressEvent) {
        _ = e;
    }

    /// Called when an animation-end signal arrives.
    fn on_animation_end(&mut self, e: &AnimationEndEvent) {
        _ = e;
    }

    /// Called after consumption rewrites the outgoing snapshot.
    fn on_consume(&mut self, e: &ConsumeEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

macro_rules! tracer_method {
    ($(#[$meta:meta])* $name:ident, $event:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(&mut self, e: &$event) {
            #[cfg(feature = "trace")]
            if let Some(sink) = self.sink.as_deref_mut() {
                sink.$name(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn disabled() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    tracer_method!(
        /// Traces an attach.
        on_attach,
        AttachEvent
    );
    tracer_method!(
        /// Traces a steady-state resolution.
        on_resolve,
        ResolveEvent
    );
    tracer_method!(
        /// Traces an animation-prepare signal.
        on_animation_prepare,
        AnimationPrepareEvent
    );
    tracer_method!(
        /// Traces an effective progress tick.
        on_animation_progress,
        AnimationProgressEvent
    );
    tracer_method!(
        /// Traces an animation-end signal.
        on_animation_end,
        AnimationEndEvent
    );
    tracer_method!(
        /// Traces a consumption rewrite.
        on_consume,
        ConsumeEvent
    );
}
