// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plans and hit testing for carousel cards.
//!
//! This crate sits between [`carousel_core`]'s card store evaluation and a
//! renderer that draws cards itself instead of handing them to a native
//! compositor. It defines:
//!
//! - [`RenderItem`]: a single card draw command
//! - [`RenderPlan`]: card draw commands ordered back to front, plus pointer
//!   hit testing against the projected card quads

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod plan;

pub use plan::{RenderItem, RenderPlan};
