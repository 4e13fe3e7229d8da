// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The position capability and a minimal positioned object.

use bramble_geom::Vec2;

/// Capability trait for anything that has a 2D position.
///
/// The quadtree is generic over this trait rather than over a concrete
/// entity type, so callers can index their own types directly (or index
/// `&T` to keep ownership of the entity set — see the blanket impl below).
///
/// The tree caches the position reported at insertion time. If the value
/// later reports a different position, the cached placement goes stale;
/// there is no automatic re-indexing.
pub trait Position {
    /// The current 2D position of this value.
    fn position(&self) -> Vec2;
}

/// Bare points are indexable as-is.
impl Position for Vec2 {
    #[inline]
    fn position(&self) -> Vec2 {
        *self
    }
}

impl<T: Position + ?Sized> Position for &T {
    #[inline]
    fn position(&self) -> Vec2 {
        (**self).position()
    }
}

/// A minimal positioned object.
///
/// Equality is defined by position equality: two distinct entities at the
/// same coordinates compare equal. Callers deduplicating query results must
/// not rely on an identity-vs-equality distinction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Entity {
    /// Where the entity is.
    pub position: Vec2,
}

impl Entity {
    /// Create an entity at `(x, y)`.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }
}

impl Position for Entity {
    #[inline]
    fn position(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::{Entity, Position};
    use bramble_geom::Vec2;

    #[test]
    fn equality_is_by_position() {
        let a = Entity::new(1.0, 2.0);
        let b = Entity::new(1.0, 2.0);
        let c = Entity::new(1.0, 3.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn references_report_the_referent_position() {
        let e = Entity::new(4.0, 5.0);
        let r = &e;
        assert_eq!(r.position(), Vec2::new(4.0, 5.0));
        assert_eq!((&r).position(), e.position());
    }
}
