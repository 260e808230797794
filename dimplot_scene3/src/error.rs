// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors from validating a [`Mesh`](crate::Mesh).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// A face refers to a vertex that does not exist.
    #[error("face {face} refers to vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        /// Face position in the face list.
        face: usize,
        /// The offending vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A face repeats a vertex index.
    #[error("face {face} repeats a vertex: {indices:?}")]
    DegenerateFace {
        /// Face position in the face list.
        face: usize,
        /// The face's vertex indices.
        indices: [u32; 3],
    },
}
