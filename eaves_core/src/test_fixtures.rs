// Copyright 2026 the Eaves Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared in-crate test doubles.
//!
//! External consumers get richer fakes from `eaves_harness`; these stay
//! minimal on purpose.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Vec2;

use crate::backend::Host;
use crate::boxes::{BoxId, InsetBox};
use crate::edges::Edges;

/// An [`InsetBox`] that records every mutation.
#[derive(Clone, Debug)]
pub(crate) struct TestBox {
    pub(crate) padding_value: Edges,
    pub(crate) margin_value: Edges,
    pub(crate) translation: Vec2,
    pub(crate) margin_support: bool,
    pub(crate) legacy_margin: bool,
    pub(crate) set_margin_calls: u32,
    pub(crate) parent_layout_requests: u32,
}

impl TestBox {
    pub(crate) fn with_padding(padding: Edges) -> Self {
        Self::with_padding_and_margin(padding, Edges::ZERO)
    }

    pub(crate) fn with_padding_and_margin(padding: Edges, margin: Edges) -> Self {
        Self {
            padding_value: padding,
            margin_value: margin,
            translation: Vec2::ZERO,
            margin_support: true,
            legacy_margin: false,
            set_margin_calls: 0,
            parent_layout_requests: 0,
        }
    }
}

impl InsetBox for TestBox {
    fn padding(&self) -> Edges {
        self.padding_value
    }

    fn set_padding(&mut self, padding: Edges) {
        self.padding_value = padding;
    }

    fn supports_margin(&self) -> bool {
        self.margin_support
    }

    fn margin(&self) -> Edges {
        if self.margin_support {
            self.margin_value
        } else {
            Edges::ZERO
        }
    }

    fn set_margin(&mut self, margin: Edges) {
        self.margin_value = margin;
        self.set_margin_calls += 1;
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

/// A [`Host`] over a map of [`TestBox`]es.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestHost {
    pub(crate) boxes: BTreeMap<BoxId, TestBox>,
    pub(crate) requested_passes: Vec<BoxId>,
}

impl TestHost {
    pub(crate) fn with_box(id: BoxId, bx: TestBox) -> Self {
        let mut host = Self::default();
        host.boxes.insert(id, bx);
        host
    }

    pub(crate) fn insert(&mut self, id: BoxId, bx: TestBox) {
        self.boxes.insert(id, bx);
    }

    pub(crate) fn bx(&self, id: BoxId) -> &TestBox {
        self.boxes.get(&id).expect("unknown test box")
    }
}

impl Host for TestHost {
    fn box_mut(&mut self, id: BoxId) -> &mut dyn InsetBox {
        self.boxes.get_mut(&id).expect("unknown test box")
    }

    fn request_insets_pass(&mut self, id: BoxId) {
        self.requested_passes.push(id);
    }
}
