// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 3D plotter interface the helpers draw into.

use glam::DVec3;

use crate::geom::Mesh;
use crate::style::{ArrowStyle3, LabelStyle, LineStyle, MeshStyle};

/// Identity of an actor within one plotter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

/// Optional name and legend entry attached to an added actor.
///
/// A `name` is unique within a plotter: adding another actor under the same name replaces the
/// first. A `label` is the text shown for the actor in a legend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActorTag<'a> {
    /// Unique actor name.
    pub name: Option<&'a str>,
    /// Legend text.
    pub label: Option<&'a str>,
}

impl<'a> ActorTag<'a> {
    /// A tag with only a name.
    pub fn named(name: &'a str) -> Self {
        Self {
            name: Some(name),
            label: None,
        }
    }

    /// Sets the legend text.
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }
}

/// A 3D scene sink.
///
/// Every method adds one actor and returns its id. When the tag carries a name, an existing
/// actor with that name is replaced instead of duplicated.
pub trait Plotter3 {
    /// Adds a triangle mesh.
    fn add_mesh(&mut self, mesh: &Mesh, style: &MeshStyle, tag: ActorTag<'_>) -> ActorId;

    /// Adds disconnected line segments. `points` holds segment endpoints in pairs.
    fn add_lines(&mut self, points: &[DVec3], style: &LineStyle, tag: ActorTag<'_>) -> ActorId;

    /// Adds text labels anchored at `points`, one label per point.
    fn add_point_labels(
        &mut self,
        points: &[DVec3],
        labels: &[String],
        style: &LabelStyle,
        tag: ActorTag<'_>,
    ) -> ActorId;

    /// Adds an arrow from `start` along `direction`; its length is the direction's length.
    fn add_arrow(
        &mut self,
        start: DVec3,
        direction: DVec3,
        style: &ArrowStyle3,
        tag: ActorTag<'_>,
    ) -> ActorId;
}
