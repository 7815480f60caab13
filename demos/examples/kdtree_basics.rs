// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! KdTree basics.
//!
//! Insert a handful of points, then run membership, range, and nearest queries.
//!
//! Run:
//! - `cargo run -p understory_demos --example kdtree_basics`

use kurbo::{Point, Rect};
use understory_kdtree::KdTree;

fn main() {
    let mut tree = KdTree::new();
    for (x, y) in [(0.7, 0.2), (0.5, 0.4), (0.2, 0.3), (0.4, 0.7), (0.9, 0.6)] {
        tree.insert(Point::new(x, y));
    }
    // Duplicates are ignored.
    let added = tree.insert(Point::new(0.5, 0.4));
    assert!(!added, "duplicate insert must be a no-op");
    println!("tree: {:?} (height {})", tree, tree.height());

    println!("contains (0.2, 0.3): {}", tree.contains(Point::new(0.2, 0.3)));
    println!("contains (0.3, 0.2): {}", tree.contains(Point::new(0.3, 0.2)));

    let query = Rect::new(0.3, 0.3, 0.8, 0.8);
    let hits: Vec<_> = tree.range(query).collect();
    println!("range {:?}: {:?}", query, hits);

    let target = Point::new(0.7, 0.95);
    let nearest = tree.nearest(target);
    println!("nearest to {:?}: {:?}", target, nearest);
    assert_eq!(nearest, Some(Point::new(0.4, 0.7)));
}
