// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, insertion, queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::{Line, Point, Rect};

use crate::draw::{Draw, Split};
use crate::types::Axis;
use crate::util::{
    contains, distance_squared, distance_squared_to, intersects, is_nan_free, lower_half,
    upper_half,
};

/// The region an empty [`KdTree::new`] partitions.
pub const UNIT_SQUARE: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

type Link = Option<Box<Node>>;

struct Node {
    point: Point,
    // Region this subtree is confined to, fixed at creation.
    rect: Rect,
    // Strictly less than `point` on this level's axis (left/bottom).
    lo: Link,
    // Greater than or equal (right/top).
    hi: Link,
}

impl Node {
    fn new(point: Point, rect: Rect) -> Self {
        Self {
            point,
            rect,
            lo: None,
            hi: None,
        }
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.lo.as_deref().into_iter().chain(self.hi.as_deref())
    }
}

/// A set of points organized as a 2D-tree.
///
/// Levels split alternately on x and y, starting with x at the root. A point
/// strictly less than a node's point on that level's coordinate lives in the
/// node's left/bottom subtree; greater or equal lives in the right/top subtree.
/// Every node records the rectangle its subtree is confined to, derived once
/// from the parent's rectangle and splitting coordinate, and queries use those
/// rectangles to skip subtrees.
///
/// The shape is fixed by insertion order. There is no rebalancing, so a sorted
/// insertion order degrades queries to linear time.
///
/// Points are expected to lie inside [`bounds`](Self::bounds); this is not
/// checked. Coordinates are assumed to be non-NaN; debug builds assert.
pub struct KdTree {
    root: Link,
    len: usize,
    bounds: Rect,
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for KdTree {
    fn clone(&self) -> Self {
        // Pre-order reinsertion reproduces the same shape.
        let mut tree = Self::with_bounds(self.bounds);
        tree.extend(self.iter());
        tree
    }
}

impl Drop for KdTree {
    fn drop(&mut self) {
        // Unlink iteratively; a chain from sorted input would otherwise recurse
        // once per level.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.lo.take());
            stack.extend(node.hi.take());
        }
    }
}

impl core::fmt::Debug for KdTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl KdTree {
    /// Create an empty tree over the unit square.
    pub const fn new() -> Self {
        Self::with_bounds(UNIT_SQUARE)
    }

    /// Create an empty tree whose root region is `bounds`.
    pub const fn with_bounds(bounds: Rect) -> Self {
        Self {
            root: None,
            len: 0,
            bounds,
        }
    }

    /// The region the root node partitions.
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of distinct points.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if no points have been inserted.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = self
            .root
            .as_deref()
            .map(|n| (n, 1))
            .into_iter()
            .collect();
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(node.children().map(|c| (c, level + 1)));
        }
        height
    }

    /// Insert a point. Returns `false` (and leaves the tree unchanged) if an
    /// equal point is already present.
    pub fn insert(&mut self, point: Point) -> bool {
        debug_assert!(is_nan_free(point), "points must not contain NaN");
        let mut slot = &mut self.root;
        let mut rect = self.bounds;
        let mut axis = Axis::X;
        while let Some(node) = slot {
            if node.point == point {
                return false;
            }
            let at = axis.coord(node.point);
            if axis.coord(point) < at {
                rect = lower_half(node.rect, axis, at);
                slot = &mut node.lo;
            } else {
                rect = upper_half(node.rect, axis, at);
                slot = &mut node.hi;
            }
            axis = axis.flip();
        }
        *slot = Some(Box::new(Node::new(point, rect)));
        self.len += 1;
        true
    }

    /// True if a point equal to `point` is stored.
    ///
    /// Follows the same path [`insert`](Self::insert) would, so a stored point
    /// is always found.
    pub fn contains(&self, point: Point) -> bool {
        debug_assert!(is_nan_free(point), "points must not contain NaN");
        let mut cur = self.root.as_deref();
        let mut axis = Axis::X;
        while let Some(node) = cur {
            if node.point == point {
                return true;
            }
            cur = if axis.coord(point) < axis.coord(node.point) {
                node.lo.as_deref()
            } else {
                node.hi.as_deref()
            };
            axis = axis.flip();
        }
        false
    }

    /// All stored points inside `query` or on its boundary, in no particular order.
    pub fn range(&self, query: Rect) -> impl Iterator<Item = Point> + '_ {
        debug_assert!(
            !query.x0.is_nan() && !query.y0.is_nan() && !query.x1.is_nan() && !query.y1.is_nan(),
            "query rectangle must not contain NaN"
        );
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            // Every point below `node` lies in `node.rect`.
            if !intersects(node.rect, query) {
                continue;
            }
            if contains(query, node.point) {
                out.push(node.point);
            }
            stack.extend(node.children());
        }
        out.into_iter()
    }

    /// The stored point closest to `target`, or `None` if the tree is empty.
    ///
    /// When several points are equally close, any one of them may be returned.
    pub fn nearest(&self, target: Point) -> Option<Point> {
        debug_assert!(is_nan_free(target), "points must not contain NaN");
        let root = self.root.as_deref()?;
        let mut best = root.point;
        let mut best_d2 = distance_squared(best, target);
        // Nearer child is pushed last so its whole subtree is searched, and the
        // bound tightened, before the farther child is popped and re-tested.
        let mut stack: Vec<&Node> = Vec::new();
        stack.push(root);
        while let Some(node) = stack.pop() {
            if !core::ptr::eq(node, root) && distance_squared_to(node.rect, target) >= best_d2 {
                continue;
            }
            let d2 = distance_squared(node.point, target);
            if d2 < best_d2 {
                best = node.point;
                best_d2 = d2;
            }
            let (first, second) = match (node.lo.as_deref(), node.hi.as_deref()) {
                (Some(lo), Some(hi)) => {
                    if distance_squared_to(hi.rect, target) < distance_squared_to(lo.rect, target) {
                        (Some(hi), Some(lo))
                    } else {
                        (Some(lo), Some(hi))
                    }
                }
                (lo, hi) => (lo.or(hi), None),
            };
            stack.extend(second);
            stack.extend(first);
        }
        Some(best)
    }

    /// Emit every node to `sink`: its point, then its splitting segment clipped
    /// to the node's region. Nodes are visited in pre-order.
    pub fn draw(&self, sink: &mut impl Draw) {
        let mut stack: Vec<(&Node, usize)> = self
            .root
            .as_deref()
            .map(|n| (n, 0))
            .into_iter()
            .collect();
        while let Some((node, depth)) = stack.pop() {
            let axis = Axis::for_depth(depth);
            let Point { x, y } = node.point;
            let r = node.rect;
            let line = match axis {
                Axis::X => Line::new((x, r.y0), (x, r.y1)),
                Axis::Y => Line::new((r.x0, y), (r.x1, y)),
            };
            sink.point(node.point);
            sink.split(Split { line, axis, depth });
            stack.extend(node.hi.as_deref().map(|c| (c, depth + 1)));
            stack.extend(node.lo.as_deref().map(|c| (c, depth + 1)));
        }
    }

    /// Iterate over the stored points in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len,
        }
    }
}

impl Extend<Point> for KdTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl FromIterator<Point> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a KdTree {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Pre-order iterator over the points of a [`KdTree`], see [`KdTree::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl core::fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let node = self.stack.pop()?;
        self.stack.extend(node.hi.as_deref());
        self.stack.extend(node.lo.as_deref());
        self.remaining -= 1;
        Some(node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
