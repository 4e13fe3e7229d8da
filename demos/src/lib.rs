// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Bramble demo examples.

use bramble_geom::Rect;
use bramble_quadtree::Entity;
use rand::Rng;

/// Scatter `count` entities uniformly over `bounds`.
///
/// Samples over the half-open `[origin, origin + size)` ranges, so an entity
/// can land exactly on the left/top world edge and be rejected by the index;
/// the demos report such drops rather than hiding them.
pub fn scatter<R: Rng>(rng: &mut R, count: usize, bounds: Rect) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            Entity::new(
                rng.random_range(bounds.x..bounds.x + bounds.w),
                rng.random_range(bounds.y..bounds.y + bounds.h),
            )
        })
        .collect()
}

/// Count unordered entity pairs closer than `radius`, by scanning all pairs.
pub fn close_pairs_brute_force(entities: &[Entity], radius: f32) -> usize {
    let r2 = radius * radius;
    let mut pairs = 0;
    for (i, a) in entities.iter().enumerate() {
        for b in &entities[i + 1..] {
            if a.position.distance_squared(b.position) <= r2 {
                pairs += 1;
            }
        }
    }
    pairs
}
