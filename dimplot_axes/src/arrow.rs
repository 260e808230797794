// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow head geometry.
//!
//! Heads are sized in device units, so this runs after an [`ArrowMark`](crate::ArrowMark) has been
//! mapped into pixels.

use kurbo::{BezPath, Line, Point, Vec2};
use smallvec::SmallVec;

use crate::style::ArrowHead;

/// Resolved arrow geometry in device units.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowGeometry {
    /// The stroked shaft. For filled heads it stops at the head base.
    pub shaft: Line,
    /// Head vertices: `[left, tip, right]`, or empty when there is no head.
    pub head: SmallVec<[Point; 3]>,
    /// Whether the head is a closed, filled triangle.
    pub head_filled: bool,
}

impl ArrowGeometry {
    /// The head as a path: closed for filled heads, open otherwise.
    pub fn head_path(&self) -> Option<BezPath> {
        let (first, rest) = self.head.split_first()?;
        let mut p = BezPath::new();
        p.move_to(*first);
        for pt in rest {
            p.line_to(*pt);
        }
        if self.head_filled {
            p.close_path();
        }
        Some(p)
    }
}

/// Computes an arrow from `start` to `end` with its head at `end`.
///
/// `length` and `half_width` size the head. A head longer than the arrow itself is shortened to
/// fit. Zero-length arrows get no head.
pub fn arrow_geometry(
    start: Point,
    end: Point,
    head: ArrowHead,
    length: f64,
    half_width: f64,
) -> ArrowGeometry {
    let d = end - start;
    let total = d.hypot();
    if head == ArrowHead::None || total == 0.0 {
        return ArrowGeometry {
            shaft: Line::new(start, end),
            head: SmallVec::new(),
            head_filled: false,
        };
    }

    let u = d / total;
    let n = Vec2::new(-u.y, u.x);
    let shrink = if length > total { total / length } else { 1.0 };
    let length = length * shrink;
    let half_width = half_width * shrink;
    let base = end - u * length;
    let left = base + n * half_width;
    let right = base - n * half_width;

    let mut vertices = SmallVec::new();
    vertices.push(left);
    vertices.push(end);
    vertices.push(right);

    let filled = head == ArrowHead::Filled;
    ArrowGeometry {
        shaft: Line::new(start, if filled { base } else { end }),
        head: vertices,
        head_filled: filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_head_shortens_shaft() {
        let g = arrow_geometry(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            ArrowHead::Filled,
            4.0,
            2.0,
        );
        assert_eq!(g.shaft, Line::new((0.0, 0.0), (6.0, 0.0)));
        assert_eq!(
            g.head.as_slice(),
            &[Point::new(6.0, 2.0), Point::new(10.0, 0.0), Point::new(6.0, -2.0)]
        );
        assert!(g.head_path().is_some(), "filled head should produce a path");
    }

    #[test]
    fn open_head_keeps_full_shaft() {
        let g = arrow_geometry(
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            ArrowHead::Open,
            3.0,
            1.0,
        );
        assert_eq!(g.shaft.p1, Point::new(0.0, 10.0));
        assert!(!g.head_filled, "open head is not filled");
        assert_eq!(g.head[1], Point::new(0.0, 10.0));
    }

    #[test]
    fn degenerate_and_headless_arrows() {
        let p = Point::new(1.0, 1.0);
        assert!(
            arrow_geometry(p, p, ArrowHead::Filled, 4.0, 2.0).head.is_empty(),
            "zero-length arrow should have no head"
        );
        let g = arrow_geometry(p, Point::new(2.0, 1.0), ArrowHead::None, 4.0, 2.0);
        assert!(g.head_path().is_none(), "no head expected");
    }

    #[test]
    fn long_head_is_clamped() {
        let g = arrow_geometry(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            ArrowHead::Filled,
            8.0,
            2.0,
        );
        assert_eq!(g.head[0].x, 0.0);
        assert_eq!(g.shaft.p1, Point::new(0.0, 0.0));
    }
}
