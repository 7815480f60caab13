// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering side-channel for [`KdTree::draw`](crate::KdTree::draw).
//!
//! The tree holds no rendering state. It walks its nodes and hands each one to a
//! [`Draw`] sink as a point plus the node's splitting segment, clipped to the
//! node's region. What the sink does with them (SVG, a canvas, a debug log) is
//! up to the caller.

use alloc::vec::Vec;
use kurbo::{Line, Point};

use crate::types::Axis;

/// Receiver of drawing primitives emitted by [`KdTree::draw`](crate::KdTree::draw).
pub trait Draw {
    /// A stored point.
    fn point(&mut self, point: Point);

    /// The splitting segment of the node whose point was just emitted.
    fn split(&mut self, split: Split);
}

/// A node's splitting line, clipped to the node's region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Split {
    /// The clipped segment. Vertical for [`Axis::X`], horizontal for [`Axis::Y`].
    pub line: Line,
    /// The axis the node splits on.
    pub axis: Axis,
    /// Depth of the node (root is 0).
    pub depth: usize,
}

/// A recorded drawing primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawEvent {
    /// See [`Draw::point`].
    Point(Point),
    /// See [`Draw::split`].
    Split(Split),
}

/// Records events in emission order.
impl Draw for Vec<DrawEvent> {
    fn point(&mut self, point: Point) {
        self.push(DrawEvent::Point(point));
    }

    fn split(&mut self, split: Split) {
        self.push(DrawEvent::Split(split));
    }
}
