// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D geometry accepted by the plotter helpers.

use glam::{DAffine3, DVec3};

use crate::error::MeshError;

/// A rigid placement in 3D.
pub type Iso3 = DAffine3;

/// An open polyline in 3D.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve3 {
    points: Vec<DVec3>,
}

impl Curve3 {
    /// Creates a curve through `points` in order.
    pub fn new(points: impl Into<Vec<DVec3>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// The curve vertices.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Consecutive vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// A copy with every vertex moved by `iso`.
    pub fn transformed(&self, iso: &Iso3) -> Self {
        Self {
            points: self.points.iter().map(|p| iso.transform_point3(*p)).collect(),
        }
    }
}

/// A triangle mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates a mesh, checking that every face names three distinct, existing vertices.
    pub fn new(vertices: Vec<DVec3>, faces: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        for (face, indices) in faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
                return Err(MeshError::FaceIndexOutOfRange {
                    face,
                    index,
                    vertex_count: vertices.len(),
                });
            }
            let [a, b, c] = *indices;
            if a == b || b == c || a == c {
                return Err(MeshError::DegenerateFace {
                    face,
                    indices: *indices,
                });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Vertex positions.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Triangle vertex indices.
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Faces in VTK cell-array layout: `[3, a, b, c, 3, d, e, f, ...]`.
    pub fn vtk_cells(&self) -> Vec<u32> {
        let mut cells = Vec::with_capacity(self.faces.len() * 4);
        for face in &self.faces {
            cells.push(3);
            cells.extend_from_slice(face);
        }
        cells
    }

    /// Bounding box of the vertices.
    pub fn aabb(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.vertices)
    }

    /// Total surface area.
    pub fn area(&self) -> f64 {
        self.faces
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (
                    self.vertices[a as usize],
                    self.vertices[b as usize],
                    self.vertices[c as usize],
                );
                0.5 * (b - a).cross(c - a).length()
            })
            .sum()
    }

    /// A copy with every vertex moved by `iso`. Faces are shared as-is.
    pub fn transformed(&self, iso: &Iso3) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|p| iso.transform_point3(*p))
                .collect(),
            faces: self.faces.clone(),
        }
    }
}

/// An axis-aligned bounding box in 3D.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb3 {
    /// Creates a box from two corners, in any order.
    pub fn new(p0: DVec3, p1: DVec3) -> Self {
        Self {
            min: p0.min(p1),
            max: p0.max(p1),
        }
    }

    /// The smallest box containing all `points`, or `None` if empty.
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(*first, *first), |b, p| Self {
            min: b.min.min(*p),
            max: b.max.max(*p),
        }))
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Box center.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Side lengths.
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// The eight corners. Bit 0 of the index picks max x, bit 1 max y, bit 2 max z.
    pub fn corners(&self) -> [DVec3; 8] {
        core::array::from_fn(|i| {
            DVec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// The twelve edges as segments.
    pub fn edges(&self) -> [(DVec3, DVec3); 12] {
        const EDGES: [(usize, usize); 12] = [
            (0, 1),
            (2, 3),
            (4, 5),
            (6, 7),
            (0, 2),
            (1, 3),
            (4, 6),
            (5, 7),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        let c = self.corners();
        EDGES.map(|(a, b)| (c[a], c[b]))
    }
}

/// A measured distance between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length3 {
    /// First endpoint.
    pub a: DVec3,
    /// Second endpoint.
    pub b: DVec3,
    /// Midpoint of `a` and `b`.
    pub center: DVec3,
    /// Unit measurement direction.
    pub direction: DVec3,
    /// Distance from `a` to `b` along `direction`.
    pub value: f64,
}

impl Length3 {
    /// Measures from `a` to `b`, optionally along an explicit direction.
    ///
    /// A missing direction falls back to `b - a`. A zero direction, including `a == b` with none
    /// given, yields a zero direction and a zero value.
    pub fn new(a: DVec3, b: DVec3, direction: Option<DVec3>) -> Self {
        let direction = direction.unwrap_or(b - a).normalize_or_zero();
        Self {
            a,
            b,
            center: (a + b) * 0.5,
            direction,
            value: (b - a).dot(direction),
        }
    }

    /// A copy moved by `iso`.
    pub fn transformed(&self, iso: &Iso3) -> Self {
        Self {
            a: iso.transform_point3(self.a),
            b: iso.transform_point3(self.b),
            center: iso.transform_point3(self.center),
            direction: iso.transform_vector3(self.direction).normalize_or_zero(),
            value: self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetra() -> (Vec<DVec3>, Vec<[u32; 3]>) {
        (
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
    }

    #[test]
    fn mesh_rejects_bad_faces() {
        let (v, _) = tetra();
        assert_eq!(
            Mesh::new(v.clone(), vec![[0, 1, 4]]),
            Err(MeshError::FaceIndexOutOfRange {
                face: 0,
                index: 4,
                vertex_count: 4
            })
        );
        assert_eq!(
            Mesh::new(v, vec![[0, 1, 2], [2, 2, 3]]),
            Err(MeshError::DegenerateFace {
                face: 1,
                indices: [2, 2, 3]
            })
        );
    }

    #[test]
    fn vtk_cells_prefix_each_face_with_its_size() {
        let (v, f) = tetra();
        let mesh = Mesh::new(v, f).expect("tetrahedron is valid");
        let cells = mesh.vtk_cells();
        assert_eq!(cells.len(), 4 * mesh.faces().len());
        assert_eq!(&cells[..8], &[3, 0, 2, 1, 3, 0, 1, 3]);
    }

    #[test]
    fn mesh_area_and_bounds() {
        let (v, f) = tetra();
        let mesh = Mesh::new(v, f).expect("tetrahedron is valid");
        let expected = 1.5 + 3.0_f64.sqrt() / 2.0;
        assert!((mesh.area() - expected).abs() < 1e-12, "{}", mesh.area());
        let b = mesh.aabb().expect("non-empty mesh");
        assert_eq!((b.min, b.max), (DVec3::ZERO, DVec3::ONE));
    }

    #[test]
    fn aabb_edges_are_axis_aligned() {
        let b = Aabb3::new(DVec3::new(1.0, 2.0, 3.0), DVec3::ZERO);
        let edges = b.edges();
        let mut per_axis = [0; 3];
        for (p, q) in edges {
            let d = (q - p).abs();
            let axis = (0..3)
                .find(|&i| d[i] > 0.0)
                .expect("edges have nonzero length");
            assert_eq!(d.to_array().iter().filter(|&&x| x > 0.0).count(), 1);
            per_axis[axis] += 1;
        }
        assert_eq!(per_axis, [4, 4, 4], "four edges run along each axis");
        let total: f64 = edges.iter().map(|(p, q)| p.distance(*q)).sum();
        assert!((total - 24.0).abs() < 1e-12, "perimeter sum {total}");
    }

    #[test]
    fn length_along_direction() {
        let l = Length3::new(
            DVec3::ZERO,
            DVec3::new(3.0, 4.0, 0.0),
            Some(DVec3::new(2.0, 0.0, 0.0)),
        );
        assert_eq!(l.value, 3.0);
        assert_eq!(l.direction, DVec3::X);
        assert_eq!(l.center, DVec3::new(1.5, 2.0, 0.0));
        assert_eq!(Length3::new(DVec3::ZERO, DVec3::Z * 2.0, None).value, 2.0);
    }

    #[test]
    fn transforms_move_points_not_values() {
        let iso = Iso3::from_translation(DVec3::new(0.0, 0.0, 5.0));
        let c = Curve3::new([DVec3::ZERO, DVec3::X]).transformed(&iso);
        assert_eq!(c.points()[1], DVec3::new(1.0, 0.0, 5.0));
        assert_eq!(c.length(), 1.0);
        let l = Length3::new(DVec3::ZERO, DVec3::Y, None).transformed(&iso);
        assert_eq!(l.value, 1.0);
        assert_eq!(l.a.z, 5.0);
    }

    #[test]
    fn coincident_endpoints_measure_zero() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        let l = Length3::new(p, p, None);
        assert_eq!(l.direction, DVec3::ZERO);
        assert_eq!(l.value, 0.0);
        assert_eq!(l.center, p);
    }
}
