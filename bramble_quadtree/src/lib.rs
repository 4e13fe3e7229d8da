// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bramble Quadtree: a recursive point quadtree for 2D proximity queries.
//!
//! The tree indexes a dynamic set of point-located values over a bounded
//! region so that rectangle and circle range queries beat an all-pairs scan:
//!
//! - Generic over the [`Position`] capability — index your own types, bare
//!   [`Vec2`] points, or `&T` references into a caller-owned entity set.
//! - Capacity-triggered subdivision into four equal quadrants; entities a
//!   node already holds stay at that node when it splits.
//! - Queries by [`Rect`] or [`Circle`], with a documented result order and
//!   non-allocating `visit_*` variants.
//!
//! Boundary semantics are inherited from [`bramble_geom`]: point containment
//! is open (a point exactly on an edge — including the world edge — is
//! rejected), shape intersection is closed (touching ranges still descend).
//!
//! # Example
//!
//! ```rust
//! use bramble_quadtree::{Circle, Entity, QuadTree, Rect};
//!
//! let mut tree: QuadTree<Entity> = QuadTree::new(0.0, 0.0, 200.0, 200.0)?;
//! tree.insert_all((0..8).map(|i| Entity::new(20.0 * i as f32 + 10.0, 60.0)));
//!
//! // x = 10, 30, 50, 70, 90 fall strictly inside the left half.
//! let in_rect = tree.query_rect(&Rect::new(0.0, 0.0, 100.0, 100.0));
//! assert_eq!(in_rect.len(), 5);
//!
//! // x = 70, 90, 110, 130 lie within 35 units of the center.
//! let near = tree.query_circle(&Circle::new(100.0, 60.0, 35.0));
//! assert_eq!(near.len(), 4);
//! # Ok::<(), bramble_quadtree::ConfigError>(())
//! ```
//!
//! The structure is single-threaded by construction: mutation needs
//! `&mut self`, so the borrow checker excludes concurrent insert/query.
//! Recursion depth is bounded (see [`DEFAULT_MAX_DEPTH`]), which keeps
//! pathological coincident-point workloads from recursing without limit.

#![no_std]

extern crate alloc;

mod entity;
mod tree;

pub use bramble_geom::{Circle, Rect, Vec2};
pub use entity::{Entity, Position};
pub use tree::{ConfigError, DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH, QuadTree};
