// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card storage: one presentation node per carousel item.
//!
//! Every card is a child of a single *stage* node that carries the
//! carousel-wide transform (typically the perspective). Each card has:
//!
//! - An identity ([`CardId`]), a generational handle that goes stale when
//!   the card is destroyed.
//! - A position in the carousel order, matching the item sequence.
//! - **Local properties** set by the caller: transform, interactive flag,
//!   and surface content.
//! - A **computed** world transform (`stage * local`) produced by
//!   [`evaluate`](CardStore::evaluate).
//!
//! Mutations mark dirty channels (see [`dirty`](crate::dirty)); evaluation
//! drains them into [`FrameChanges`] for a
//! [`Presenter`](crate::backend::Presenter).

mod evaluate;
mod id;
mod store;

pub use evaluate::FrameChanges;
pub use id::{CardId, SurfaceId};
pub use store::CardStore;
