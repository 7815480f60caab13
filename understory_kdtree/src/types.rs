// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting axes and the coordinate selection they imply.

use kurbo::Point;

/// The coordinate a tree level splits on.
///
/// Levels alternate starting with [`Axis::X`] at the root. The axis is never
/// stored in a node; it is derived from the depth at which the node is visited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Split on x; the splitting line is vertical.
    X,
    /// Split on y; the splitting line is horizontal.
    Y,
}

impl Axis {
    /// The axis used at `depth` (root is depth 0).
    pub const fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::X } else { Self::Y }
    }

    /// The axis of the next level down.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// The coordinate of `p` on this axis.
    #[inline]
    pub const fn coord(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }
}
