// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangle with open containment and closed intersection.

use crate::Vec2;

/// An axis-aligned rectangle given as origin (top-left corner in a y-down
/// frame) plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Origin x.
    pub x: f32,
    /// Origin y.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Create a rectangle from origin and size.
    #[inline(always)]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Maximum x (right edge).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Maximum y (bottom edge).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Whether the point at `(px, py)` lies strictly inside the rectangle.
    ///
    /// The test is **open** on all four sides: a point exactly on an edge or
    /// corner is *not* contained. Together with the closed
    /// [`intersects`][Self::intersects] test this guarantees that of two
    /// rectangles sharing an edge, neither contains a point on that edge, so
    /// adjacent cells of a spatial partition never both claim it.
    ///
    /// ```
    /// use bramble_geom::Rect;
    ///
    /// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(r.contains_point(5.0, 5.0));
    /// assert!(!r.contains_point(0.0, 5.0));
    /// assert!(!r.contains_point(10.0, 5.0));
    /// ```
    #[inline]
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        self.x < px && px < self.x + self.w && self.y < py && py < self.y + self.h
    }

    /// Whether `point` lies strictly inside the rectangle.
    ///
    /// See [`contains_point`][Self::contains_point] for the edge semantics.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.contains_point(point.x, point.y)
    }

    /// Whether the two rectangles overlap.
    ///
    /// The test is **closed**: rectangles that merely touch along an edge or
    /// at a corner are considered intersecting. This is deliberately the
    /// opposite edge convention from [`contains_point`][Self::contains_point]:
    /// a query range touching a partition cell must still visit that cell,
    /// even though a point on the shared edge belongs to neither side.
    ///
    /// ```
    /// use bramble_geom::Rect;
    ///
    /// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(r.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    /// assert!(r.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    /// assert!(!r.intersects(&Rect::new(10.5, 0.0, 10.0, 10.0)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x + self.w >= other.x
            && other.x + other.w >= self.x
            && self.y + self.h >= other.y
            && other.y + other.h >= self.y
    }
}
