// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ASCII view of the leaf cells a moving query rectangle touches.
//!
//! The scene is described with `kurbo` geometry and converted through the
//! `bramble_geom` interop, the way a rendering layer would hand world-space
//! rectangles to the index. Each frame slides the query window across the
//! world and renders which leaves it touches (`#`), the remaining leaves
//! (`.`), and the entities the query actually returns (`o`).
//!
//! Run:
//! - `cargo run -p bramble_demos --example leaf_view`

use bramble_demos::scatter;
use bramble_geom::{Circle, Rect};
use bramble_quadtree::{Entity, QuadTree};
use rand::SeedableRng;
use rand::rngs::StdRng;

const COLS: usize = 64;
const ROWS: usize = 32;
const FRAMES: usize = 4;

fn render(tree: &QuadTree<&Entity>, query: &Rect) {
    let world = tree.boundary();
    let leaves = tree.touched_leaves(query);
    let hits = tree.query_rect(query);

    let mut grid = [[b'.'; COLS]; ROWS];
    for (row, line) in grid.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            // Sample the world position at the center of this character cell.
            let wx = world.x + (col as f32 + 0.5) / COLS as f32 * world.w;
            let wy = world.y + (row as f32 + 0.5) / ROWS as f32 * world.h;
            if leaves.iter().any(|leaf| leaf.boundary().contains_point(wx, wy)) {
                *cell = b'#';
            }
        }
    }
    for entity in &hits {
        let col = ((entity.position.x - world.x) / world.w * COLS as f32) as usize;
        let row = ((entity.position.y - world.y) / world.h * ROWS as f32) as usize;
        grid[row.min(ROWS - 1)][col.min(COLS - 1)] = b'o';
    }

    for line in &grid {
        println!("{}", std::str::from_utf8(line).expect("grid is ASCII"));
    }
    println!(
        "query {query:?}: {} entities, {} of {} leaves touched, {} nodes total",
        hits.len(),
        leaves.len(),
        tree.touched_leaves(&world).len(),
        tree.node_count(),
    );
}

fn main() {
    // World and query window described in kurbo terms, then narrowed.
    let world: Rect = kurbo::Rect::new(0.0, 0.0, 512.0, 256.0).into();
    let window: Rect = kurbo::Rect::from_origin_size((0.0, 64.0), (128.0, 128.0)).into();

    let mut rng = StdRng::seed_from_u64(7);
    let entities = scatter(&mut rng, 300, world);

    let mut tree: QuadTree<&Entity> =
        QuadTree::with_config(world, 8, bramble_quadtree::DEFAULT_MAX_DEPTH)
            .expect("world boundary is valid");
    tree.insert_all(entities.iter());

    for frame in 0..FRAMES {
        let query = Rect::new(
            window.x + frame as f32 * 96.0,
            window.y,
            window.w,
            window.h,
        );
        println!("--- frame {frame} ---");
        render(&tree, &query);
    }

    // A circular probe around the world center, for comparison.
    let probe: Circle = kurbo::Circle::new((256.0, 128.0), 64.0).into();
    println!(
        "circle probe {probe:?}: {} entities",
        tree.query_circle(&probe).len()
    );
}
