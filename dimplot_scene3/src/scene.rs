// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording [`Plotter3`].
//!
//! `Scene3` keeps actors in insertion order. A named actor added a second time takes the slot of
//! the first one, with a fresh id, so repeated calls from an interactive session update a scene
//! instead of growing it.

use glam::DVec3;
use hashbrown::HashMap;

use crate::geom::{Aabb3, Mesh};
use crate::plotter::{ActorId, ActorTag, Plotter3};
use crate::style::{ArrowStyle3, LabelStyle, LineStyle, MeshStyle};

/// What an actor draws.
#[derive(Clone, Debug, PartialEq)]
pub enum ActorKind {
    /// A triangle mesh.
    Mesh {
        /// The mesh geometry.
        mesh: Mesh,
        /// Surface style.
        style: MeshStyle,
    },
    /// Disconnected segments, endpoints in pairs.
    Lines {
        /// Segment endpoints.
        points: Vec<DVec3>,
        /// Line style.
        style: LineStyle,
    },
    /// Text anchored at points.
    PointLabels {
        /// Anchor points.
        points: Vec<DVec3>,
        /// One label per point.
        labels: Vec<String>,
        /// Label style.
        style: LabelStyle,
    },
    /// An arrow.
    Arrow {
        /// Tail position.
        start: DVec3,
        /// Tail-to-tip vector.
        direction: DVec3,
        /// Arrow style.
        style: ArrowStyle3,
    },
}

impl ActorKind {
    /// A short name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Mesh { .. } => "mesh",
            Self::Lines { .. } => "lines",
            Self::PointLabels { .. } => "labels",
            Self::Arrow { .. } => "arrow",
        }
    }

    /// Bounding box of the actor's geometry.
    pub fn aabb(&self) -> Option<Aabb3> {
        match self {
            Self::Mesh { mesh, .. } => mesh.aabb(),
            Self::Lines { points, .. } | Self::PointLabels { points, .. } => {
                Aabb3::from_points(points)
            }
            Self::Arrow {
                start, direction, ..
            } => Some(Aabb3::new(*start, *start + *direction)),
        }
    }
}

/// One recorded actor.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    /// Actor id.
    pub id: ActorId,
    /// Optional unique name.
    pub name: Option<String>,
    /// Optional legend text.
    pub label: Option<String>,
    /// What the actor draws.
    pub kind: ActorKind,
}

/// A plotter that records actors.
#[derive(Clone, Debug, Default)]
pub struct Scene3 {
    actors: Vec<Actor>,
    names: HashMap<String, usize>,
    next_id: u64,
}

impl Scene3 {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded actors, in insertion order.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Number of actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the scene has no actors.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Looks up an actor by id.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// Looks up an actor by name.
    pub fn named(&self, name: &str) -> Option<&Actor> {
        self.names.get(name).map(|&i| &self.actors[i])
    }

    /// Removes the actor with the given name.
    pub fn remove_named(&mut self, name: &str) -> Option<Actor> {
        let index = self.names.remove(name)?;
        let actor = self.actors.remove(index);
        for i in self.names.values_mut() {
            if *i > index {
                *i -= 1;
            }
        }
        Some(actor)
    }

    /// Union of all actor bounds.
    pub fn bounds(&self) -> Option<Aabb3> {
        self.actors
            .iter()
            .filter_map(|a| a.kind.aabb())
            .reduce(|a, b| a.union(&b))
    }

    fn insert(&mut self, kind: ActorKind, tag: ActorTag<'_>) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        log::trace!(target: "dimplot", "actor {id:?} {} name={:?}", kind.kind_name(), tag.name);

        let actor = Actor {
            id,
            name: tag.name.map(String::from),
            label: tag.label.map(String::from),
            kind,
        };
        match tag.name {
            Some(name) => {
                if let Some(&index) = self.names.get(name) {
                    log::debug!(target: "dimplot", "replacing actor named {name:?}");
                    self.actors[index] = actor;
                } else {
                    self.names.insert(name.to_owned(), self.actors.len());
                    self.actors.push(actor);
                }
            }
            None => self.actors.push(actor),
        }
        id
    }
}

impl Plotter3 for Scene3 {
    fn add_mesh(&mut self, mesh: &Mesh, style: &MeshStyle, tag: ActorTag<'_>) -> ActorId {
        self.insert(
            ActorKind::Mesh {
                mesh: mesh.clone(),
                style: *style,
            },
            tag,
        )
    }

    fn add_lines(&mut self, points: &[DVec3], style: &LineStyle, tag: ActorTag<'_>) -> ActorId {
        debug_assert!(
            points.len() % 2 == 0,
            "line endpoints come in pairs, got {}",
            points.len()
        );
        self.insert(
            ActorKind::Lines {
                points: points.to_vec(),
                style: *style,
            },
            tag,
        )
    }

    fn add_point_labels(
        &mut self,
        points: &[DVec3],
        labels: &[String],
        style: &LabelStyle,
        tag: ActorTag<'_>,
    ) -> ActorId {
        debug_assert_eq!(
            points.len(),
            labels.len(),
            "each label needs one anchor point"
        );
        self.insert(
            ActorKind::PointLabels {
                points: points.to_vec(),
                labels: labels.to_vec(),
                style: *style,
            },
            tag,
        )
    }

    fn add_arrow(
        &mut self,
        start: DVec3,
        direction: DVec3,
        style: &ArrowStyle3,
        tag: ActorTag<'_>,
    ) -> ActorId {
        self.insert(
            ActorKind::Arrow {
                start,
                direction,
                style: *style,
            },
            tag,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(scene: &mut Scene3, name: Option<&str>, x: f64) -> ActorId {
        scene.add_lines(
            &[DVec3::ZERO, DVec3::new(x, 0.0, 0.0)],
            &LineStyle::default(),
            ActorTag {
                name,
                label: None,
            },
        )
    }

    #[test]
    fn unnamed_actors_accumulate() {
        let mut scene = Scene3::new();
        let a = segment(&mut scene, None, 1.0);
        let b = segment(&mut scene, None, 2.0);
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.actors()[0].id, a);
    }

    #[test]
    fn named_actor_is_replaced_in_place() {
        let mut scene = Scene3::new();
        segment(&mut scene, Some("edge"), 1.0);
        segment(&mut scene, None, 5.0);
        let second = segment(&mut scene, Some("edge"), 3.0);
        assert_eq!(scene.len(), 2, "replacement should not add an actor");
        let actor = scene.named("edge").expect("named actor exists");
        assert_eq!(actor.id, second);
        assert_eq!(scene.actors()[0].id, second, "replacement keeps its slot");
        let bounds = scene.bounds().expect("scene has geometry");
        assert_eq!(bounds.max.x, 5.0);
    }

    #[test]
    fn remove_named_reindexes() {
        let mut scene = Scene3::new();
        segment(&mut scene, Some("a"), 1.0);
        segment(&mut scene, Some("b"), 2.0);
        segment(&mut scene, Some("c"), 3.0);
        let removed = scene.remove_named("a").expect("a exists");
        assert_eq!(removed.name.as_deref(), Some("a"));
        assert!(scene.named("a").is_none(), "a was removed");
        let c = scene.named("c").expect("c still exists");
        assert_eq!(c.kind.aabb().map(|b| b.max.x), Some(3.0));
        assert!(scene.remove_named("missing").is_none(), "nothing to remove");
    }

    #[test]
    fn arrow_bounds_cover_tip() {
        let mut scene = Scene3::new();
        let id = scene.add_arrow(
            DVec3::ONE,
            DVec3::new(0.0, -2.0, 0.0),
            &ArrowStyle3::default(),
            ActorTag::default(),
        );
        let b = scene
            .actor(id)
            .and_then(|a| a.kind.aabb())
            .expect("arrow has bounds");
        assert_eq!(b.min, DVec3::new(1.0, -1.0, 1.0));
        assert_eq!(b.max, DVec3::ONE);
    }

    #[test]
    fn legend_label_is_recorded() {
        let mut scene = Scene3::new();
        let id = scene.add_lines(
            &[DVec3::ZERO, DVec3::X],
            &LineStyle::default(),
            ActorTag::named("datum").with_label("Datum A"),
        );
        let actor = scene.actor(id).expect("actor exists");
        assert_eq!(actor.name.as_deref(), Some("datum"));
        assert_eq!(actor.label.as_deref(), Some("Datum A"));
    }
}
