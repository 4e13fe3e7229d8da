// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from the `kurbo` geometry types.
//!
//! Bramble stores `f32` coordinates while kurbo works in `f64`; conversions
//! in the narrowing direction round to the nearest representable `f32`.

#![allow(
    clippy::cast_possible_truncation,
    reason = "f64 -> f32 narrowing is the documented contract of this module."
)]

use crate::{Circle, Rect, Vec2};

impl From<kurbo::Point> for Vec2 {
    #[inline]
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

impl From<Vec2> for kurbo::Point {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y))
    }
}

impl From<kurbo::Vec2> for Vec2 {
    #[inline]
    fn from(v: kurbo::Vec2) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl From<Vec2> for kurbo::Vec2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y))
    }
}

impl From<kurbo::Rect> for Rect {
    #[inline]
    fn from(r: kurbo::Rect) -> Self {
        Self::new(
            r.x0 as f32,
            r.y0 as f32,
            r.width() as f32,
            r.height() as f32,
        )
    }
}

impl From<Rect> for kurbo::Rect {
    #[inline]
    fn from(r: Rect) -> Self {
        Self::new(
            f64::from(r.x),
            f64::from(r.y),
            f64::from(r.x + r.w),
            f64::from(r.y + r.h),
        )
    }
}

impl From<kurbo::Circle> for Circle {
    #[inline]
    fn from(c: kurbo::Circle) -> Self {
        Self::new(c.center.x as f32, c.center.y as f32, c.radius as f32)
    }
}

impl From<Circle> for kurbo::Circle {
    #[inline]
    fn from(c: Circle) -> Self {
        Self::new(
            kurbo::Point::new(f64::from(c.x), f64::from(c.y)),
            f64::from(c.radius),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Circle, Rect, Vec2};

    #[test]
    fn rect_round_trip() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let k: kurbo::Rect = r.into();
        assert_eq!(k, kurbo::Rect::new(1.0, 2.0, 4.0, 6.0));
        assert_eq!(Rect::from(k), r);
    }

    #[test]
    fn point_and_circle_round_trip() {
        let v = Vec2::new(-1.5, 2.5);
        let p: kurbo::Point = v.into();
        assert_eq!(Vec2::from(p), v);

        let c = Circle::new(10.0, 20.0, 5.0);
        let k: kurbo::Circle = c.into();
        assert_eq!(Circle::from(k), c);
    }
}
