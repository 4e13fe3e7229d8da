// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock benchmark: quadtree build and range queries vs a linear scan.
//!
//! Scatters `POINT_COUNT` points over a 1000x1000 world, then times rectangle
//! queries at several size categories (10%, 1%, 0.1% of the world edge) and a
//! circle query sweep, each against a brute-force baseline over the same
//! point set.
//!
//! Run:
//! - `cargo bench -p bramble_benches --bench insert_query`

use bramble_benches::{time_avg, time_once};
use bramble_geom::{Circle, Rect, Vec2};
use bramble_quadtree::QuadTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORLD: f32 = 1000.0;
const POINT_COUNT: usize = 100_000;
const QUERY_COUNT: usize = 1_000;
const TRIALS: u32 = 5;

fn random_points<R: Rng>(rng: &mut R, count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|_| {
            Vec2::new(
                rng.random_range(0.0..WORLD),
                rng.random_range(0.0..WORLD),
            )
        })
        .collect()
}

fn random_rects<R: Rng>(rng: &mut R, count: usize, size: f32) -> Vec<Rect> {
    (0..count)
        .map(|_| {
            Rect::new(
                rng.random_range(0.0..WORLD - size),
                rng.random_range(0.0..WORLD - size),
                size,
                size,
            )
        })
        .collect()
}

fn bench_rect_queries(tree: &QuadTree<Vec2>, points: &[Vec2], queries: &[Rect], label: &str) {
    let mut hits = 0_usize;
    let tree_time = time_avg(TRIALS, || {
        hits = 0;
        for range in queries {
            hits += tree.query_rect(range).len();
        }
    });

    let mut brute_hits = 0_usize;
    let brute_time = time_avg(TRIALS, || {
        brute_hits = 0;
        for range in queries {
            brute_hits += points.iter().filter(|p| range.contains(**p)).count();
        }
    });

    assert_eq!(hits, brute_hits, "quadtree and scan disagree on {label}");
    println!(
        "{} rect queries at {label}: quadtree {}ms ({hits} hits), scan {}ms",
        queries.len(),
        tree_time.as_millis(),
        brute_time.as_millis(),
    );
}

fn bench_circle_queries(tree: &QuadTree<Vec2>, points: &[Vec2], centers: &[Vec2], radius: f32) {
    let mut hits = 0_usize;
    let tree_time = time_avg(TRIALS, || {
        hits = 0;
        for center in centers {
            let range = Circle::new(center.x, center.y, radius);
            hits += tree.query_circle(&range).len();
        }
    });

    let mut brute_hits = 0_usize;
    let brute_time = time_avg(TRIALS, || {
        brute_hits = 0;
        for center in centers {
            let range = Circle::new(center.x, center.y, radius);
            brute_hits += points.iter().filter(|p| range.contains(**p)).count();
        }
    });

    assert_eq!(hits, brute_hits, "quadtree and scan disagree on circles");
    println!(
        "{} circle queries (r = {radius}): quadtree {}ms ({hits} hits), scan {}ms",
        centers.len(),
        tree_time.as_millis(),
        brute_time.as_millis(),
    );
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0xb1a2);
    let points = random_points(&mut rng, POINT_COUNT);

    let mut tree: QuadTree<Vec2> =
        QuadTree::new(0.0, 0.0, WORLD, WORLD).expect("world boundary is valid");
    // The scan baseline only covers the points the tree accepted: a point
    // exactly on the world edge or an internal seam is dropped by `insert`.
    let mut indexed = Vec::with_capacity(points.len());
    let build = time_once(|| {
        for p in &points {
            if tree.insert(*p) {
                indexed.push(*p);
            }
        }
    });
    println!(
        "build: {} points in {}ms ({} nodes, {} indexed)",
        points.len(),
        build.as_millis(),
        tree.node_count(),
        tree.len(),
    );

    for (label, size) in [("10%", WORLD * 0.1), ("1%", WORLD * 0.01), ("0.1%", WORLD * 0.001)] {
        let queries = random_rects(&mut rng, QUERY_COUNT, size);
        bench_rect_queries(&tree, &indexed, &queries, label);
    }

    let centers = random_points(&mut rng, QUERY_COUNT);
    bench_circle_queries(&tree, &indexed, &centers, WORLD * 0.02);
}
