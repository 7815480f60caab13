// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a tree's partition as SVG.
//!
//! Implements [`Draw`] for a small SVG writer: points in black, x-splits
//! (vertical) in red, y-splits (horizontal) in blue. Writes the document to
//! stdout.
//!
//! Run:
//! - `cargo run -p understory_demos --example kdtree_draw_svg > kdtree.svg`

use std::fmt::Write as _;

use kurbo::Point;
use understory_kdtree::{Axis, Draw, KdTree, Split};

const SIZE: f64 = 512.0;

struct Svg {
    body: String,
}

impl Svg {
    // SVG y grows downward; flip so the unit square reads bottom-up.
    fn map(p: Point) -> (f64, f64) {
        (p.x * SIZE, (1.0 - p.y) * SIZE)
    }
}

impl Draw for Svg {
    fn point(&mut self, point: Point) {
        let (x, y) = Self::map(point);
        let _ = writeln!(self.body, r#"  <circle cx="{x:.2}" cy="{y:.2}" r="3" fill="black"/>"#);
    }

    fn split(&mut self, split: Split) {
        let (x1, y1) = Self::map(split.line.p0);
        let (x2, y2) = Self::map(split.line.p1);
        let color = match split.axis {
            Axis::X => "red",
            Axis::Y => "blue",
        };
        let _ = writeln!(
            self.body,
            r#"  <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{color}"/>"#
        );
    }
}

fn main() {
    // A fixed, unsorted sequence so the picture is reproducible.
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1_u64 << 53) as f64
    };
    let tree: KdTree = (0..64).map(|_| Point::new(next(), next())).collect();

    let mut svg = Svg {
        body: String::new(),
    };
    tree.draw(&mut svg);

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SIZE}" height="{SIZE}" viewBox="0 0 {SIZE} {SIZE}">"#
    );
    println!(r#"  <rect width="{SIZE}" height="{SIZE}" fill="white" stroke="black"/>"#);
    print!("{}", svg.body);
    println!("</svg>");
    eprintln!("drew {} points, height {}", tree.len(), tree.height());
}
