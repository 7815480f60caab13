// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kdtree --heading-base-level=0

//! Understory KdTree: a Kurbo-native 2D-tree point set.
//!
//! Understory KdTree stores distinct points and answers spatial questions about them.
//!
//! - Insert points one at a time; exact duplicates are ignored.
//! - Test membership, collect every point inside a rectangle, or find the nearest point.
//! - Emit the partition (points and splitting segments) to any renderer through [`Draw`].
//!
//! Levels split alternately on x and y. Each node remembers the rectangle its subtree
//! is confined to, so range and nearest queries skip whole subtrees that cannot match.
//! The shape is decided by insertion order alone: there is no rebalancing, so a sorted
//! insertion order yields a chain and linear-time queries.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_kdtree::KdTree;
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.1, 0.1));
//! tree.insert(Point::new(0.9, 0.9));
//! tree.insert(Point::new(0.1, 0.9));
//! tree.insert(Point::new(0.9, 0.1));
//! assert!(!tree.insert(Point::new(0.1, 0.1)), "duplicates are ignored");
//! assert_eq!(tree.len(), 4);
//!
//! // Rectangles include their boundary.
//! let hits: Vec<_> = tree.range(Rect::new(0.0, 0.0, 0.5, 0.5)).collect();
//! assert_eq!(hits, [Point::new(0.1, 0.1)]);
//!
//! assert_eq!(tree.nearest(Point::new(0.2, 0.2)), Some(Point::new(0.1, 0.1)));
//! assert_eq!(KdTree::new().nearest(Point::new(0.2, 0.2)), None);
//! ```
//!
//! ## Drawing
//!
//! The tree holds no rendering state. [`KdTree::draw`] hands each node's point and its
//! clipped splitting segment to a [`Draw`] sink; `Vec<DrawEvent>` records them.
//!
//! ```rust
//! use kurbo::Point;
//! use understory_kdtree::{Axis, DrawEvent, KdTree};
//!
//! let tree: KdTree = [Point::new(0.5, 0.5), Point::new(0.25, 0.75)].into_iter().collect();
//! let mut events: Vec<DrawEvent> = Vec::new();
//! tree.draw(&mut events);
//! assert_eq!(events.len(), 4);
//! let DrawEvent::Split(split) = events[3] else { unreachable!() };
//! assert_eq!(split.axis, Axis::Y);
//! assert_eq!(split.line.p0, Point::new(0.0, 0.75));
//! assert_eq!(split.line.p1, Point::new(0.5, 0.75));
//! ```
//!
//! ## Bounds
//!
//! [`KdTree::new`] partitions the unit square. Use [`KdTree::with_bounds`] for any
//! other region. Points are expected to lie within the bounds; this is not checked.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for coordinates. Debug builds assert.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod draw;
pub mod tree;
pub mod types;
mod util;

pub use draw::{Draw, DrawEvent, Split};
pub use tree::{Iter, KdTree, UNIT_SQUARE};
pub use types::Axis;
