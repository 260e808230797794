// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D plotting helpers for engineering geometry.
//!
//! [`PlotterHelper`] turns curves, meshes, boxes, measured lengths, and coordinate frames into
//! actors on any [`Plotter3`]. [`Scene3`] is a recording plotter; a viewer backend reads its
//! [`actors`](Scene3::actors) and draws them.

mod error;
mod geom;
mod helper;
mod plotter;
mod scene;
mod style;

pub use error::MeshError;
pub use geom::{Aabb3, Curve3, Iso3, Length3, Mesh};
pub use helper::PlotterHelper;
pub use plotter::{ActorId, ActorTag, Plotter3};
pub use scene::{Actor, ActorKind, Scene3};
pub use style::{ArrowStyle3, DimensionStyle, LabelStyle, LineStyle, MeshStyle};

pub use glam::{DAffine3, DQuat, DVec3};
