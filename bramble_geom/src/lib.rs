// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bramble Geom: 2D vector and bounding-shape primitives.
//!
//! This crate provides the value types shared by the Bramble crates:
//!
//! - [`Vec2`]: a plain `f32` 2D vector with arithmetic and distance helpers.
//! - [`Rect`]: an axis-aligned rectangle given as origin plus size.
//! - [`Circle`]: a circle given as center plus radius.
//!
//! The shape predicates carry deliberate edge semantics that
//! [`bramble_quadtree`](https://docs.rs/bramble_quadtree) relies on:
//! point containment is **open** (a point exactly on an edge is outside),
//! while shape-vs-rectangle intersection is **closed** (touching edges count).
//! The asymmetry is what lets adjacent quadrants of a spatial partition never
//! both claim a boundary-touching point, while a query range that merely
//! touches a partition cell still descends into it. See [`Rect::contains_point`]
//! and [`Rect::intersects`] for the exact inequalities.
//!
//! # Example
//!
//! ```rust
//! use bramble_geom::{Rect, Vec2};
//!
//! let r = Rect::new(0.0, 0.0, 100.0, 100.0);
//! assert!(r.contains(Vec2::new(50.0, 50.0)));
//! // Edges are excluded from containment...
//! assert!(!r.contains(Vec2::new(0.0, 50.0)));
//! // ...but count for intersection.
//! assert!(r.intersects(&Rect::new(100.0, 0.0, 10.0, 10.0)));
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: enables the [`Vec2`] helpers that need sqrt/trig
//!   (`length`, `distance`, `normalize`, `from_angle`, ...). The squared
//!   variants and all shape predicates are available without it.
//! - `kurbo`: conversions between these types and the `kurbo` geometry types
//!   (implies `std`).

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod circle;
#[cfg(feature = "kurbo")]
mod interop;
mod rect;
mod vec2;

pub use circle::Circle;
pub use rect::Rect;
pub use vec2::Vec2;
