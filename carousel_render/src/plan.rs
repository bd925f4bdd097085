// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plan: card draw items for one frame, ordered back to front.
//!
//! Coordinates are stage coordinates: the origin is the carousel centre and
//! each card is a quad centred on its own origin before its world transform
//! is applied.

use alloc::vec::Vec;

use carousel_core::card::{CardId, CardStore, SurfaceId};
use carousel_core::config::CarouselConfig;
use kurbo::{Point, Rect, RoundedRect, Vec2};

/// A single card draw command.
#[derive(Clone, Debug)]
pub struct RenderItem {
    /// The card this item originates from.
    pub card: CardId,
    /// The surface to draw, if the card has content.
    pub surface: Option<SurfaceId>,
    /// World-space transform (column-major 4x4), perspective included.
    pub world_transform: [f32; 16],
    /// Depth of the card centre before projection; larger is nearer.
    pub depth: f64,
    /// Whether the card accepts pointer input.
    pub interactive: bool,
    /// Card clip in local coordinates.
    pub clip: RoundedRect,
}

/// Card draw commands for a single frame.
#[derive(Clone, Debug, Default)]
pub struct RenderPlan {
    /// Draw items in back-to-front order.
    pub items: Vec<RenderItem>,
    // Projected corners per item, parallel to `items`. `None` when any
    // corner lands behind the eye.
    quads: Vec<Option<[Point; 4]>>,
}

impl RenderPlan {
    /// Creates an empty render plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a plan from an evaluated store.
    ///
    /// The store must have been evaluated since its last mutation, otherwise
    /// world transforms are stale.
    #[must_use]
    pub fn build(store: &CardStore, config: &CarouselConfig) -> Self {
        let mut plan = Self::new();
        plan.rebuild(store, config);
        plan
    }

    /// Like [`build`](Self::build), but reuses this plan's buffers.
    pub fn rebuild(&mut self, store: &CardStore, config: &CarouselConfig) {
        self.clear();
        let size = config.card_size;
        let local = Rect::from_center_size(Point::ORIGIN, size);
        let clip = RoundedRect::from_rect(local, config.corner_radius);

        let mut staged: Vec<(RenderItem, Option<[Point; 4]>)> = store
            .order()
            .iter()
            .map(|&idx| {
                let world = store.world_transform_at(idx);
                let depth = world.transform_point3(0.0, 0.0, 0.0)[2];
                let corners = [
                    Point::new(local.x0, local.y0),
                    Point::new(local.x1, local.y0),
                    Point::new(local.x1, local.y1),
                    Point::new(local.x0, local.y1),
                ];
                let projected = corners.map(|c| world.project(c));
                let quad = match projected {
                    [Some(a), Some(b), Some(c), Some(d)] => Some([a, b, c, d]),
                    _ => None,
                };
                let item = RenderItem {
                    card: store.handle(idx),
                    surface: store.content_at(idx),
                    world_transform: world.to_cols_f32(),
                    depth,
                    interactive: store.interactive_at(idx),
                    clip,
                };
                (item, quad)
            })
            .collect();

        // Stable, so equal depths keep carousel order.
        staged.sort_by(|a, b| a.0.depth.total_cmp(&b.0.depth));
        for (item, quad) in staged {
            self.items.push(item);
            self.quads.push(quad);
        }
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
        self.quads.clear();
    }

    /// Returns the interactive card whose projected quad contains `point`.
    ///
    /// Cards are tested front to back. Non-interactive cards never hit, even
    /// when they are drawn in front.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<CardId> {
        self.items
            .iter()
            .zip(&self.quads)
            .rev()
            .filter(|(item, _)| item.interactive)
            .find_map(|(item, quad)| {
                let quad = (*quad)?;
                quad_contains(&quad, point).then_some(item.card)
            })
    }
}

/// Whether a convex quad contains `p`, for either winding.
fn quad_contains(quad: &[Point; 4], p: Point) -> bool {
    let mut sign = 0.0_f64;
    for i in 0..4 {
        let a = quad[i];
        let b = quad[(i + 1) % 4];
        let cross = Vec2::cross(b - a, p - a);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross;
        } else if (sign > 0.0) != (cross > 0.0) {
            return false;
        }
    }
    true
}
