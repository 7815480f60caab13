// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-boundary rectangle predicates over Kurbo types.
//!
//! Kurbo's `Rect::contains` is half-open, which would drop points lying on the
//! max edge of a query. Everything here treats rectangle boundaries as inside.

use kurbo::{Point, Rect};

use crate::types::Axis;

#[inline]
pub(crate) fn distance_squared(a: Point, b: Point) -> f64 {
    (a - b).hypot2()
}

/// True if `p` lies inside `rect` or on its boundary.
#[inline]
pub(crate) fn contains(rect: Rect, p: Point) -> bool {
    rect.x0 <= p.x && p.x <= rect.x1 && rect.y0 <= p.y && p.y <= rect.y1
}

/// True if the rectangles share at least one point, boundaries included.
#[inline]
pub(crate) fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Squared distance from `p` to the nearest point of `rect`; zero inside.
#[inline]
pub(crate) fn distance_squared_to(rect: Rect, p: Point) -> f64 {
    let dx = if p.x < rect.x0 {
        rect.x0 - p.x
    } else if p.x > rect.x1 {
        p.x - rect.x1
    } else {
        0.0
    };
    let dy = if p.y < rect.y0 {
        rect.y0 - p.y
    } else if p.y > rect.y1 {
        p.y - rect.y1
    } else {
        0.0
    };
    dx * dx + dy * dy
}

/// The part of `rect` below `at` on `axis` (the left/bottom child region).
#[inline]
pub(crate) fn lower_half(rect: Rect, axis: Axis, at: f64) -> Rect {
    match axis {
        Axis::X => Rect::new(rect.x0, rect.y0, at, rect.y1),
        Axis::Y => Rect::new(rect.x0, rect.y0, rect.x1, at),
    }
}

/// The part of `rect` at or above `at` on `axis` (the right/top child region).
#[inline]
pub(crate) fn upper_half(rect: Rect, axis: Axis, at: f64) -> Rect {
    match axis {
        Axis::X => Rect::new(at, rect.y0, rect.x1, rect.y1),
        Axis::Y => Rect::new(rect.x0, at, rect.x1, rect.y1),
    }
}

pub(crate) fn is_nan_free(p: Point) -> bool {
    !p.x.is_nan() && !p.y.is_nan()
}
