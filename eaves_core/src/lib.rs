// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inset-application engine for obstruction-aware padding and margin.
//!
//! `eaves_core` adjusts a box's padding or margin in response to
//! platform-reported screen obstructions (system bars, on-screen keyboard,
//! gesture-exclusion areas, display cutouts), including during interactive
//! animations of those regions. It is `no_std` compatible (with `alloc`) and
//! owns no widgets: hosts expose their boxes through traits and route
//! platform callbacks in.
//!
//! # Architecture
//!
//! The crate is organized around an event flow that turns host inset
//! dispatches into box-model updates:
//!
//! ```text
//!   Host (inset + animation callbacks)
//!       │
//!       ▼
//!   WindowInsets ──► Attachment::on_insets ──► resolve() ──► padding/margin
//!                         │                                      │
//!                         │                                      ▼
//!                         │                        apply_consumption() ──► WindowInsets'
//!                         ▼
//!   AnimationState (prepare ► progress ► end) ──► translation offset
//! ```
//!
//! **[`sides`] / [`category`]** — Bit-set value types for "which box sides"
//! and "which obstruction categories."
//!
//! **[`edges`]** — Four-sided integer values; the currency of the whole
//! engine.
//!
//! **[`snapshot`]** — The per-category [`WindowInsets`](snapshot::WindowInsets)
//! snapshot the host dispatches, with the category-set amount query.
//!
//! **[`boxes`]** — The [`InsetBox`](boxes::InsetBox) contract, the captured
//! [`BoxState`](boxes::BoxState) baseline, and the identity-keyed
//! [`BaselineCache`](boxes::BaselineCache) (capture once, add to the
//! authored values forever after).
//!
//! **[`table`]** — Side-application tables mapping each side to the category
//! set summed into it.
//!
//! **[`resolve`]** — The resolution algorithm: baseline + amount per claimed
//! side, current value preserved elsewhere.
//!
//! **[`animation`]** — Deferred-category coordination: suppression during a
//! live transition, translation-offset substitution, end-of-animation snap.
//!
//! **[`consume`]** — What descendants get to see after this box applied its
//! share.
//!
//! **[`applier`]** — The configuration builder and the per-box
//! [`Attachment`](applier::Attachment) that hosts route callbacks through.
//!
//! **[`backend`]** — The [`Host`](backend::Host) trait platform integrations
//! implement.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! dispatch instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Concurrency
//!
//! Single-threaded, cooperative, event-driven: every operation runs
//! synchronously on the host UI thread inside a host-dispatched callback.
//! Resolution is idempotent — a second pass with unchanged inputs produces
//! identical values and no further side effects — so a host that re-enters
//! dispatch after a padding write converges instead of recursing.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables the `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animation;
pub mod applier;
pub mod backend;
pub mod boxes;
pub mod category;
pub mod consume;
pub mod edges;
pub mod resolve;
pub mod sides;
pub mod snapshot;
pub mod table;
pub mod trace;

#[cfg(test)]
mod test_fixtures;
