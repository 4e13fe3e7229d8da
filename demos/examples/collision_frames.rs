// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame collision neighborhoods: quadtree queries vs an all-pairs scan.
//!
//! Mirrors a typical game loop: an external caller owns the entity set,
//! rebuilds the index once per frame, and issues one small rectangle query
//! per entity to find collision candidates. The same close-pair count is
//! computed by brute force so the two passes can be compared.
//!
//! Run:
//! - `cargo run -p bramble_demos --example collision_frames --release`

use std::time::Instant;

use bramble_demos::{close_pairs_brute_force, scatter};
use bramble_geom::Rect;
use bramble_quadtree::{Entity, QuadTree};
use rand::SeedableRng;
use rand::rngs::StdRng;

const WORLD: Rect = Rect::new(0.0, 0.0, 500.0, 500.0);
const POINT_COUNT: usize = 3_000;
const COLLISION_RADIUS: f32 = 3.0;
const FRAMES: usize = 10;

/// Count unordered close pairs by querying a small rectangle around each
/// entity and range-checking the candidates.
fn close_pairs_quadtree(tree: &QuadTree<&Entity>, entities: &[Entity]) -> usize {
    let r2 = COLLISION_RADIUS * COLLISION_RADIUS;
    let mut ordered = 0;
    for entity in entities {
        let range = Rect::new(
            entity.position.x - 5.0,
            entity.position.y - 5.0,
            10.0,
            10.0,
        );
        tree.visit_rect(&range, &mut |candidate: &&Entity| {
            let d2 = entity.position.distance_squared(candidate.position);
            if d2 > 0.0 && d2 <= r2 {
                ordered += 1;
            }
        });
    }
    // Each pair was seen from both endpoints.
    ordered / 2
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let entities = scatter(&mut rng, POINT_COUNT, WORLD);

    for frame in 0..FRAMES {
        // A reset root keeps its stale children, so a per-frame rebuild
        // starts from a fresh root instead.
        let mut tree: QuadTree<&Entity> =
            QuadTree::new(WORLD.x, WORLD.y, WORLD.w, WORLD.h).expect("world boundary is valid");

        let t0 = Instant::now();
        let all_inserted = tree.insert_all(entities.iter());
        let build = t0.elapsed();

        let t0 = Instant::now();
        let qt_pairs = close_pairs_quadtree(&tree, &entities);
        let qt_time = t0.elapsed();

        let t0 = Instant::now();
        let brute_pairs = close_pairs_brute_force(&entities, COLLISION_RADIUS);
        let brute_time = t0.elapsed();

        println!(
            "frame {frame}: build {build:?} ({} entities in {} nodes), \
             quadtree {qt_pairs} pairs in {qt_time:?}, \
             brute force {brute_pairs} pairs in {brute_time:?}",
            tree.len(),
            tree.node_count(),
        );
        if !all_inserted {
            println!(
                "  note: {} entities landed exactly on the world edge or a quadrant seam and were dropped",
                entities.len() - tree.len()
            );
        }
    }
}
