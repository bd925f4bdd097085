// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and interaction engine for a rotating 3D card carousel.
//!
//! `carousel_core` arranges N cards evenly around a vertical cylinder, rotates
//! them in response to horizontal drags, and snaps to the nearest card when a
//! gesture ends. Only the card facing the viewer head-on accepts input. It is
//! `no_std` compatible (with `alloc`) and keeps cards in array-based
//! struct-of-arrays storage behind generational handles.
//!
//! # Architecture
//!
//! ```text
//!   drag / items ──► Carousel ──► CarouselEngine ──► Motion
//!                       │               │
//!                       │         layout_cylinder()
//!                       ▼               │
//!                   CardStore ◄─────────┘ (Placement::transform)
//!                       │
//!                       ▼
//!   CardStore::evaluate() ──► FrameChanges ──► Presenter::apply()
//! ```
//!
//! **[`engine`]**: The rotation state machine. Drags move the offset; drag
//! end and count changes snap it to a whole slot.
//!
//! **[`slot`]** and **[`layout`]**: Pure slot geometry and per-card
//! [`Placement`](layout::Placement)s.
//!
//! **[`card`]**: Struct-of-arrays card store with a stage node that carries
//! the perspective shared by every card. Mutations mark the channels in
//! [`dirty`]; evaluation drains them into [`FrameChanges`](card::FrameChanges).
//!
//! **[`carousel`]**: [`Carousel`] keeps one card per
//! [`CarouselItem`](item::CarouselItem), reconciling by identity.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait.
//!
//! **[`motion`]**: Ease-in-out sampling of settle animations.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//!
//! # Example
//!
//! ```
//! use carousel_core::config::CarouselConfig;
//! use carousel_core::engine::CarouselEngine;
//!
//! let mut engine = CarouselEngine::new(&CarouselConfig::standard());
//! engine.drag_changed(100.0);
//! engine.drag_ended(100.0, 6);
//! assert_eq!(engine.offset(), 60.0);
//! assert_eq!(engine.front_index(6), Some(5));
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod card;
pub mod carousel;
pub mod config;
pub mod dirty;
pub mod engine;
pub mod item;
pub mod layout;
pub mod motion;
pub mod slot;
pub mod trace;
pub mod transform;

pub use carousel::Carousel;
