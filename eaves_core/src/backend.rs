// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! Eaves splits platform-specific work into *host* integrations. A host
//! provides the following pieces:
//!
//! - **Box access** — Implements [`InsetBox`](crate::boxes::InsetBox) for its
//!   widget type and hands the engine mutable access by [`BoxId`] through
//!   the [`Host`] trait. The engine touches boxes only from within
//!   host-dispatched callbacks, on the host UI thread.
//!
//! - **Event dispatch** — Routes the platform's inset-change event to
//!   [`Attachment::on_insets`] and the three animation lifecycle events to
//!   [`Attachment::on_animation_prepare`],
//!   [`Attachment::on_animation_progress`], and
//!   [`Attachment::on_animation_end`]. A host-cancelled animation still
//!   delivers its end event; the engine treats cancellation and natural
//!   completion identically.
//!
//! - **Snapshot construction** — Fills a
//!   [`WindowInsets`](crate::snapshot::WindowInsets) from platform inset
//!   state on every dispatch. A category the platform cannot report is
//!   simply left at zero.
//!
//! - **Pass scheduling** — Implements [`Host::request_insets_pass`] so the
//!   engine can force an initial dispatch at attach time instead of waiting
//!   for the platform's next organic pass.
//!
//! # Crate boundaries
//!
//! `eaves_core` owns the data model, resolution, animation coordination,
//! consumption, and this contract module. Host crates depend on `eaves_core`
//! and provide platform glue. Application code depends on both and wires the
//! callbacks together.
//!
//! # Event flow pseudocode
//!
//! ```rust,ignore
//! // Attach once; captures the baseline and requests an initial pass.
//! let mut attachment = applier.attach(&mut host, box_id);
//!
//! // Steady state: every inset-change dispatch.
//! fn on_insets_changed(snapshot: WindowInsets) -> WindowInsets {
//!     attachment.on_insets(&mut host, &snapshot)
//! }
//!
//! // Animation lifecycle.
//! attachment.on_animation_prepare(animation.categories());
//! let passthrough = attachment.on_animation_progress(&mut host, &snapshot, &running);
//! attachment.on_animation_end(&mut host, animation.categories());
//! ```
//!
//! [`Attachment::on_insets`]: crate::applier::Attachment::on_insets
//! [`Attachment::on_animation_prepare`]: crate::applier::Attachment::on_animation_prepare
//! [`Attachment::on_animation_progress`]: crate::applier::Attachment::on_animation_progress
//! [`Attachment::on_animation_end`]: crate::applier::Attachment::on_animation_end
//! [`BoxId`]: crate::boxes::BoxId

use crate::boxes::{BoxId, InsetBox};

/// Host-side access to boxes and pass scheduling.
///
/// The engine resolves synced translations through the same trait, so a host
/// must be able to return any box it registered an [`BoxId`] for.
pub trait Host {
    /// Returns mutable access to the box identified by `id`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `id` is unknown; handing the engine an
    /// unregistered id is a host bug.
    fn box_mut(&mut self, id: BoxId) -> &mut dyn InsetBox;

    /// Schedules a fresh inset dispatch for the box identified by `id`.
    ///
    /// Called once when handling is attached and again whenever the box
    /// re-enters the visible tree.
    fn request_insets_pass(&mut self, id: BoxId);
}
