// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree itself: subdivision, insertion, range queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use bramble_geom::{Circle, Rect};
use smallvec::SmallVec;

use crate::entity::Position;

/// Default number of entities a leaf holds before it subdivides.
pub const DEFAULT_CAPACITY: usize = 4;

/// Default number of subdivision levels allowed below the root.
///
/// Thirty-two halvings shrink a quadrant by a factor of 2³², far below any
/// sensible world size in `f32`; the limit only ever matters for clusters of
/// (near-)coincident points, where it stops the subdivision cascade. See
/// [`QuadTree::insert`].
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Rejected quadtree configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The boundary rectangle has no interior (non-positive or non-finite
    /// width/height, or a non-finite origin). A quadtree over such a
    /// boundary could never accept a point and would subdivide degenerately.
    EmptyBoundary,
    /// The leaf capacity is zero.
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoundary => {
                f.write_str("boundary must have finite origin and positive, finite size")
            }
            Self::ZeroCapacity => f.write_str("leaf capacity must be at least 1"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// A point quadtree over a bounded region of the 2D plane.
///
/// Each node owns a boundary rectangle and up to `capacity` entities. When a
/// leaf overflows it splits into four equal child quadrants (northwest,
/// northeast, southwest, southeast) and further insertions are routed into
/// them; the entities the node already held **stay where they are**. A
/// divided node therefore still carries up to `capacity` entities of its
/// own, on top of whatever its subtree holds. Subdivision is one-way: there
/// is no merge or collapse operation.
///
/// Containment against node boundaries is open (points exactly on an edge
/// are outside) while range/boundary intersection is closed; see
/// [`bramble_geom::Rect`] for why the asymmetry matters.
///
/// The tree is a plain single-threaded structure: mutation requires
/// `&mut self`, queries take `&self`, and there is no interior mutability.
///
/// # Example
///
/// ```rust
/// use bramble_quadtree::{Entity, QuadTree, Rect};
///
/// let mut tree: QuadTree<Entity> = QuadTree::new(0.0, 0.0, 100.0, 100.0)?;
/// assert!(tree.insert(Entity::new(25.0, 25.0)));
/// assert!(tree.insert(Entity::new(75.0, 75.0)));
///
/// // A point exactly on the world edge is rejected.
/// assert!(!tree.insert(Entity::new(0.0, 50.0)));
///
/// let hits = tree.query_rect(&Rect::new(0.0, 0.0, 50.0, 50.0));
/// assert_eq!(hits, [&Entity::new(25.0, 25.0)]);
/// # Ok::<(), bramble_quadtree::ConfigError>(())
/// ```
pub struct QuadTree<E: Position> {
    boundary: Rect,
    entities: SmallVec<[E; DEFAULT_CAPACITY]>,
    /// Child quadrants in NW, NE, SW, SE order. Either all four exist or
    /// none does.
    children: Option<Box<[Self; 4]>>,
    capacity: usize,
    levels_left: u32,
}

impl<E: Position> QuadTree<E> {
    /// Create a leaf root over the rectangle at `(x, y)` with size
    /// `w` × `h`, using [`DEFAULT_CAPACITY`] and [`DEFAULT_MAX_DEPTH`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBoundary`] if the rectangle has no
    /// interior.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Result<Self, ConfigError> {
        Self::with_config(Rect::new(x, y, w, h), DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH)
    }

    /// Create a leaf root with an explicit leaf capacity and subdivision
    /// budget.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBoundary`] for a degenerate boundary and
    /// [`ConfigError::ZeroCapacity`] for a zero capacity.
    pub fn with_config(
        boundary: Rect,
        capacity: usize,
        max_depth: u32,
    ) -> Result<Self, ConfigError> {
        let finite = boundary.x.is_finite()
            && boundary.y.is_finite()
            && boundary.w.is_finite()
            && boundary.h.is_finite();
        if !finite || boundary.w <= 0.0 || boundary.h <= 0.0 {
            return Err(ConfigError::EmptyBoundary);
        }
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            boundary,
            entities: SmallVec::new(),
            children: None,
            capacity,
            levels_left: max_depth,
        })
    }

    /// The region this node covers. Fixed at construction.
    #[inline]
    pub fn boundary(&self) -> Rect {
        self.boundary
    }

    /// The leaf capacity this tree was built with.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether this node has been split into four child quadrants.
    #[inline]
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// The entities held directly by this node, in insertion order.
    ///
    /// Does not include entities held by the subtree.
    #[inline]
    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    /// The four child quadrants in NW, NE, SW, SE order, if divided.
    #[inline]
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// Total number of entities in this node and its subtree.
    pub fn len(&self) -> usize {
        self.entities.len()
            + self
                .children
                .as_deref()
                .map_or(0, |c| c.iter().map(Self::len).sum())
    }

    /// Whether the node and its subtree hold no entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map_or(0, |c| c.iter().map(Self::node_count).sum::<usize>())
    }

    /// Insert an entity, returning whether it was accepted.
    ///
    /// An entity is rejected (`false`, no mutation) when its position is not
    /// strictly inside this node's boundary — note that because containment
    /// is open, a point exactly on the world edge is rejected even at the
    /// root. A point that lands exactly on an internal dividing line of an
    /// already-divided region is likewise rejected: no quadrant strictly
    /// contains it.
    ///
    /// A full leaf subdivides before routing the new entity to a child
    /// quadrant; the entities the leaf already held are not redistributed.
    /// Once a node has exhausted its subdivision budget (see
    /// [`DEFAULT_MAX_DEPTH`]) it stops splitting and grows past its capacity
    /// instead, so a cluster of coincident points cannot recurse without
    /// bound.
    pub fn insert(&mut self, entity: E) -> bool {
        let p = entity.position();
        if !self.boundary.contains(p) {
            return false;
        }
        if self.children.is_none() {
            if self.entities.len() < self.capacity || self.levels_left == 0 {
                self.entities.push(entity);
                return true;
            }
            self.subdivide();
        }
        if let Some(children) = self.children.as_deref_mut() {
            // Open containment makes the quadrants disjoint: at most one
            // child can take the point.
            for child in children.iter_mut() {
                if child.boundary.contains(p) {
                    return child.insert(entity);
                }
            }
        }
        // The point sits exactly on an internal dividing line.
        false
    }

    /// Insert every entity, returning whether all were accepted.
    ///
    /// Every element is attempted even after a failure; the result is the
    /// conjunction over all of them, not a short-circuit.
    pub fn insert_all<I>(&mut self, entities: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let mut all = true;
        for entity in entities {
            all &= self.insert(entity);
        }
        all
    }

    /// Collect references to every entity whose position lies strictly
    /// inside `range`.
    ///
    /// Result order is a contract: a node's own entities come first in
    /// insertion order, followed by the NW, NE, SW and SE subtrees in that
    /// order.
    pub fn query_rect(&self, range: &Rect) -> Vec<&E> {
        let mut out = Vec::new();
        self.visit_rect(range, &mut |e| out.push(e));
        out
    }

    /// Visit every entity whose position lies strictly inside `range`,
    /// without allocating result storage.
    ///
    /// Visit order matches [`query_rect`][Self::query_rect].
    pub fn visit_rect<'a, F>(&'a self, range: &Rect, f: &mut F)
    where
        F: FnMut(&'a E),
    {
        // Closed test: a range that merely touches this node's boundary
        // still descends into it.
        if !self.boundary.intersects(range) {
            return;
        }
        for entity in &self.entities {
            if range.contains(entity.position()) {
                f(entity);
            }
        }
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.visit_rect(range, f);
            }
        }
    }

    /// Collect references to every entity whose position lies strictly
    /// inside the circle.
    ///
    /// Result order matches [`query_rect`][Self::query_rect].
    pub fn query_circle(&self, range: &Circle) -> Vec<&E> {
        let mut out = Vec::new();
        self.visit_circle(range, &mut |e| out.push(e));
        out
    }

    /// Visit every entity whose position lies strictly inside the circle,
    /// without allocating result storage.
    pub fn visit_circle<'a, F>(&'a self, range: &Circle, f: &mut F)
    where
        F: FnMut(&'a E),
    {
        if !range.intersects_rect(&self.boundary) {
            return;
        }
        for entity in &self.entities {
            if range.contains(entity.position()) {
                f(entity);
            }
        }
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.visit_circle(range, f);
            }
        }
    }

    /// Collect the leaf nodes whose boundary intersects `range` (closed
    /// test), in NW, NE, SW, SE traversal order.
    ///
    /// Intended for diagnostics and visualization: it shows exactly which
    /// leaf cells a range query would touch.
    pub fn touched_leaves(&self, range: &Rect) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect_touched_leaves(range, &mut out);
        out
    }

    fn collect_touched_leaves<'a>(&'a self, range: &Rect, out: &mut Vec<&'a Self>) {
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.collect_touched_leaves(range, out);
            }
        } else if self.boundary.intersects(range) {
            out.push(self);
        }
    }

    /// Clear this node's **own** entity list. Nothing else.
    ///
    /// Children are not cleared and a divided node stays divided, so after
    /// `reset` a divided tree still answers queries from its (un-cleared)
    /// subtree. To empty a divided tree completely, discard the root and
    /// build a new one.
    pub fn reset(&mut self) {
        self.entities.clear();
    }

    /// Split this leaf into four equal child quadrants.
    ///
    /// Caller guarantees the node is an undivided leaf with `levels_left > 0`.
    fn subdivide(&mut self) {
        let Rect { x, y, w, h } = self.boundary;
        let (hw, hh) = (w / 2.0, h / 2.0);
        let capacity = self.capacity;
        let levels_left = self.levels_left - 1;
        let quadrant = |qx: f32, qy: f32| Self {
            boundary: Rect::new(qx, qy, hw, hh),
            entities: SmallVec::new(),
            children: None,
            capacity,
            levels_left,
        };
        self.children = Some(Box::new([
            quadrant(x, y),
            quadrant(x + hw, y),
            quadrant(x, y + hh),
            quadrant(x + hw, y + hh),
        ]));
    }
}

impl<E: Position> fmt::Debug for QuadTree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("boundary", &self.boundary)
            .field("own_entities", &self.entities.len())
            .field("divided", &self.is_divided())
            .field("nodes", &self.node_count())
            .finish_non_exhaustive()
    }
}
