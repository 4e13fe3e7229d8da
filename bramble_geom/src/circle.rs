// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circle range with squared-distance predicates.

use crate::{Rect, Vec2};

/// A circle given as center plus radius.
///
/// Both predicates work on squared distances, so no square root is taken and
/// the type stays usable without `std`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Circle {
    /// Center x.
    pub x: f32,
    /// Center y.
    pub y: f32,
    /// Radius.
    pub radius: f32,
}

impl Circle {
    /// Create a circle from center and radius.
    #[inline(always)]
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Whether the point at `(px, py)` lies strictly inside the circle
    /// (`(px-cx)² + (py-cy)² < r²`). A point exactly on the perimeter is not
    /// contained, matching the open edge convention of
    /// [`Rect::contains_point`].
    #[inline]
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        let dx = self.x - px;
        let dy = self.y - py;
        dx * dx + dy * dy < self.radius * self.radius
    }

    /// Whether `point` lies strictly inside the circle.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.contains_point(point.x, point.y)
    }

    /// Whether the circle's interior overlaps the rectangle.
    ///
    /// Closest-point test: the center is clamped into the rectangle and the
    /// squared distance to the clamped point is compared against the squared
    /// radius. A circle whose perimeter only touches the rectangle does not
    /// intersect it.
    #[inline]
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let dx = self.x - self.x.clamp(rect.x, rect.x + rect.w);
        let dy = self.y - self.y.clamp(rect.y, rect.y + rect.h);
        dx * dx + dy * dy < self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::Circle;
    use crate::{Rect, Vec2};

    #[test]
    fn containment_is_open_at_the_perimeter() {
        let c = Circle::new(0.0, 0.0, 5.0);
        assert!(c.contains(Vec2::new(0.0, 0.0)));
        assert!(c.contains(Vec2::new(3.0, 3.0)));
        // Exactly on the perimeter: excluded.
        assert!(!c.contains(Vec2::new(5.0, 0.0)));
        assert!(!c.contains(Vec2::new(0.0, -5.0)));
        assert!(!c.contains(Vec2::new(6.0, 0.0)));
    }

    #[test]
    fn containment_is_quadratic_not_quartic() {
        // (1.2² + 1.2²) = 2.88 < 4, so the point is inside a radius-2
        // circle. Squaring the per-axis deltas twice would put it outside
        // (1.2⁴ + 1.2⁴ ≈ 4.15 > 4).
        let c = Circle::new(0.0, 0.0, 2.0);
        assert!(c.contains(Vec2::new(1.2, 1.2)));
    }

    #[test]
    fn rect_intersection_uses_closest_point() {
        let c = Circle::new(0.0, 0.0, 5.0);

        // Center inside the rect.
        assert!(c.intersects_rect(&Rect::new(-10.0, -10.0, 20.0, 20.0)));
        // Rect corner inside the circle.
        assert!(c.intersects_rect(&Rect::new(3.0, 0.0, 10.0, 10.0)));
        // Closest point exactly on the perimeter: excluded.
        assert!(!c.intersects_rect(&Rect::new(5.0, -1.0, 10.0, 2.0)));
        // Clearly disjoint.
        assert!(!c.intersects_rect(&Rect::new(10.0, 10.0, 5.0, 5.0)));
    }
}
