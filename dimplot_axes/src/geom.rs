// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small 2D geometry values consumed by the plot helpers.
//!
//! These are borrowed inputs: the helpers only read them to produce marks.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect, Vec2};

/// A point paired with a unit direction.
///
/// Used as an oriented line: `point` is on the line and `normal` is its direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint2 {
    /// Position.
    pub point: Point,
    /// Unit direction.
    pub normal: Vec2,
}

impl SurfacePoint2 {
    /// Creates a surface point, normalizing `normal`.
    pub fn new_normalize(point: Point, normal: Vec2) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// The point at signed `distance` along the normal.
    pub fn at_distance(&self, distance: f64) -> Point {
        self.point + self.normal * distance
    }

    /// Signed distance of `other` along the normal, measured from `point`.
    pub fn scalar_projection(&self, other: Point) -> f64 {
        (other - self.point).dot(self.normal)
    }

    /// Projects `other` onto the line through `point` along `normal`.
    pub fn projection(&self, other: Point) -> Point {
        self.at_distance(self.scalar_projection(other))
    }

    /// The normal rotated a quarter turn counter-clockwise.
    pub fn orthogonal(&self) -> Vec2 {
        Vec2::new(-self.normal.y, self.normal.x)
    }

    /// Moves the point sideways (along [`Self::orthogonal`]) by `distance`, keeping the normal.
    pub fn shift_orthogonal(&self, distance: f64) -> Self {
        Self {
            point: self.point + self.orthogonal() * distance,
            normal: self.normal,
        }
    }

    /// The same point with the normal flipped.
    pub fn reversed(&self) -> Self {
        Self {
            point: self.point,
            normal: -self.normal,
        }
    }
}

/// A length measured between two points along a direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length2 {
    /// First endpoint.
    pub a: Point,
    /// Second endpoint.
    pub b: Point,
    /// Midpoint of `a` and `b`, oriented along the measurement direction.
    pub center: SurfacePoint2,
    /// The measured value.
    pub value: f64,
}

impl Length2 {
    /// Measures from `a` to `b`.
    ///
    /// With no explicit `direction`, the direction is `b - a` and the value is the Euclidean
    /// distance. With a direction, the value is the distance along that direction. A zero
    /// direction, including `a == b` with none given, yields a zero direction and a zero value.
    pub fn new(a: Point, b: Point, direction: Option<Vec2>) -> Self {
        let direction = normalize_or_zero(direction.unwrap_or(b - a));
        let center = SurfacePoint2 {
            point: a.midpoint(b),
            normal: direction,
        };
        Self {
            a,
            b,
            center,
            value: (b - a).dot(direction),
        }
    }

    /// The unit measurement direction.
    pub fn direction(&self) -> Vec2 {
        self.center.normal
    }
}

fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len.is_finite() && len > 0.0 {
        v / len
    } else {
        Vec2::ZERO
    }
}

/// A circle given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle2 {
    /// Center point.
    pub center: Point,
    /// Radius.
    pub r: f64,
}

impl Circle2 {
    /// Creates a circle.
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self {
            center: Point::new(x, y),
            r,
        }
    }
}

impl From<(f64, f64, f64)> for Circle2 {
    fn from((x, y, r): (f64, f64, f64)) -> Self {
        Self::new(x, y, r)
    }
}

impl From<Circle2> for Circle {
    fn from(c: Circle2) -> Self {
        Self::new(c.center, c.r)
    }
}

/// An axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
    /// Lower-left corner.
    pub min: Point,
    /// Upper-right corner.
    pub max: Point,
}

impl Aabb2 {
    /// Creates a box from two corners, in any order.
    pub fn new(p0: Point, p1: Point) -> Self {
        Self {
            min: Point::new(p0.x.min(p1.x), p0.y.min(p1.y)),
            max: Point::new(p0.x.max(p1.x), p0.y.max(p1.y)),
        }
    }

    /// The smallest box containing all `points`, or `None` if empty.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut out = Self::new(*first, *first);
        for p in rest {
            out.min.x = out.min.x.min(p.x);
            out.min.y = out.min.y.min(p.y);
            out.max.x = out.max.x.max(p.x);
            out.max.y = out.max.y.max(p.y);
        }
        Some(out)
    }

    /// Returns a copy grown by `amount` on every side.
    pub fn expanded(&self, amount: f64) -> Self {
        Self {
            min: Point::new(self.min.x - amount, self.min.y - amount),
            max: Point::new(self.max.x + amount, self.max.y + amount),
        }
    }
}

impl From<Aabb2> for Rect {
    fn from(b: Aabb2) -> Self {
        Self::from_points(b.min, b.max)
    }
}

/// An open polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve2 {
    points: Vec<Point>,
}

impl Curve2 {
    /// Creates a curve through `points` in order.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// The curve vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).hypot()).sum()
    }

    /// Bounding box of the vertices.
    pub fn aabb(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.points)
    }

    /// The vertices as an open path.
    pub fn to_path(&self) -> BezPath {
        let mut p = BezPath::new();
        for (i, pt) in self.points.iter().enumerate() {
            if i == 0 {
                p.move_to(*pt);
            } else {
                p.line_to(*pt);
            }
        }
        p
    }

    /// The vertices as a closed path, for filling.
    pub fn to_closed_path(&self) -> BezPath {
        let mut p = self.to_path();
        if self.points.len() > 2 {
            p.close_path();
        }
        p
    }
}
