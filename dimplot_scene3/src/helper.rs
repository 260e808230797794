// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-to-actor helpers for a [`Plotter3`].
//!
//! Helpers that add several actors derive a name per part from the tag's name, `name.part`, so
//! repeating the call with the same tag replaces every part.

use core::fmt::Display;

use glam::DVec3;
use peniko::color::palette::css;

use crate::geom::{Aabb3, Curve3, Iso3, Length3, Mesh};
use crate::plotter::{ActorId, ActorTag, Plotter3};
use crate::style::{ArrowStyle3, DimensionStyle, LabelStyle, LineStyle, MeshStyle};

/// Draws geometry onto a borrowed [`Plotter3`].
#[derive(Debug)]
pub struct PlotterHelper<'a, P: Plotter3 + ?Sized> {
    plotter: &'a mut P,
}

impl<'a, P: Plotter3 + ?Sized> PlotterHelper<'a, P> {
    /// Attaches to `plotter`.
    pub fn new(plotter: &'a mut P) -> Self {
        Self { plotter }
    }

    /// The underlying plotter.
    pub fn plotter(&mut self) -> &mut P {
        self.plotter
    }

    /// Adds each curve as its own connected line actor.
    ///
    /// A single curve takes the tag's name as is; with several, curve `i` is named `name.i`.
    /// Every curve shares the legend label.
    pub fn add_curves(
        &mut self,
        curves: &[Curve3],
        style: &LineStyle,
        tag: ActorTag<'_>,
    ) -> Vec<ActorId> {
        let single = curves.len() == 1;
        curves
            .iter()
            .enumerate()
            .map(|(i, curve)| {
                let points: Vec<DVec3> = curve.segments().flat_map(|(a, b)| [a, b]).collect();
                let name = if single {
                    tag.name.map(String::from)
                } else {
                    part_name(tag.name, i)
                };
                self.plotter.add_lines(
                    &points,
                    style,
                    ActorTag {
                        name: name.as_deref(),
                        label: tag.label,
                    },
                )
            })
            .collect()
    }

    /// Adds a triangle mesh.
    pub fn add_mesh(&mut self, mesh: &Mesh, style: &MeshStyle, tag: ActorTag<'_>) -> ActorId {
        self.plotter.add_mesh(mesh, style, tag)
    }

    /// Adds the twelve edges of a box.
    pub fn add_aabb(&mut self, aabb: &Aabb3, style: &LineStyle, tag: ActorTag<'_>) -> ActorId {
        let points: Vec<DVec3> = aabb.edges().into_iter().flat_map(|(a, b)| [a, b]).collect();
        self.plotter.add_lines(&points, style, tag)
    }

    /// Adds a measurement line from `a` to `b` with its value labelled at the center.
    ///
    /// The line takes the tag; the value label is named `name.value`.
    pub fn dimension(
        &mut self,
        length: &Length3,
        style: &DimensionStyle,
        tag: ActorTag<'_>,
    ) -> [ActorId; 2] {
        let line = self
            .plotter
            .add_lines(&[length.a, length.b], &style.line, tag);
        let value_name = part_name(tag.name, "value");
        let label = self.plotter.add_point_labels(
            &[length.center],
            &[style.format(length.value)],
            &style.label,
            ActorTag {
                name: value_name.as_deref(),
                label: None,
            },
        );
        [line, label]
    }

    /// Adds red, green, and blue arrows along the x, y, and z axes of `iso`.
    ///
    /// The arrows are named `name.x`, `name.y` and `name.z`.
    pub fn coordinate_frame(&mut self, iso: &Iso3, size: f64, tag: ActorTag<'_>) -> [ActorId; 3] {
        let origin = iso.transform_point3(DVec3::ZERO);
        let axes = [
            (DVec3::X, css::RED, "x"),
            (DVec3::Y, css::GREEN, "y"),
            (DVec3::Z, css::BLUE, "z"),
        ];
        axes.map(|(axis, color, part)| {
            let direction = iso.transform_vector3(axis) * size;
            let name = part_name(tag.name, part);
            self.plotter.add_arrow(
                origin,
                direction,
                &ArrowStyle3::colored(color),
                ActorTag {
                    name: name.as_deref(),
                    label: tag.label,
                },
            )
        })
    }

    /// Adds a single text label.
    pub fn label(
        &mut self,
        point: DVec3,
        text: impl Into<String>,
        style: &LabelStyle,
        tag: ActorTag<'_>,
    ) -> ActorId {
        self.plotter
            .add_point_labels(&[point], &[text.into()], style, tag)
    }

    /// Adds an arrow from `start` along `direction`.
    pub fn arrow(
        &mut self,
        start: DVec3,
        direction: DVec3,
        style: &ArrowStyle3,
        tag: ActorTag<'_>,
    ) -> ActorId {
        self.plotter.add_arrow(start, direction, style, tag)
    }
}

fn part_name(name: Option<&str>, part: impl Display) -> Option<String> {
    name.map(|n| format!("{n}.{part}"))
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::scene::{ActorKind, Scene3};

    fn close(a: DVec3, b: DVec3) -> bool {
        a.distance(b) < 1e-12
    }

    fn two_curves() -> [Curve3; 2] {
        [
            Curve3::new([DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)]),
            Curve3::new([DVec3::Z, DVec3::new(0.0, 0.0, 2.0)]),
        ]
    }

    #[test]
    fn each_curve_is_one_actor() {
        let mut scene = Scene3::new();
        let ids = PlotterHelper::new(&mut scene).add_curves(
            &two_curves(),
            &LineStyle::default(),
            ActorTag::default(),
        );
        assert_eq!(ids.len(), 2);
        assert_eq!(scene.len(), 2);
        let Some(ActorKind::Lines { points, .. }) = scene.actor(ids[0]).map(|a| &a.kind) else {
            panic!("expected a line set");
        };
        assert_eq!(points.len(), 4, "two segments");
        assert_eq!(points[1], points[2], "consecutive segments share a vertex");
    }

    #[test]
    fn named_curves_replace_on_repeat() {
        let mut scene = Scene3::new();
        let mut helper = PlotterHelper::new(&mut scene);
        let tag = ActorTag::named("edges").with_label("Edges");
        helper.add_curves(&two_curves(), &LineStyle::default(), tag);
        let second = helper.add_curves(&two_curves(), &LineStyle::default(), tag);
        assert_eq!(scene.len(), 2, "repeat should not grow the scene");
        let names: Vec<_> = scene.actors().iter().map(|a| a.name.as_deref()).collect();
        assert_eq!(names, [Some("edges.0"), Some("edges.1")]);
        assert_eq!(scene.actors()[0].id, second[0]);
        assert!(
            scene
                .actors()
                .iter()
                .all(|a| a.label.as_deref() == Some("Edges")),
            "label is forwarded to every curve"
        );
    }

    #[test]
    fn single_named_curve_keeps_its_name() {
        let mut scene = Scene3::new();
        let [curve, _] = two_curves();
        PlotterHelper::new(&mut scene).add_curves(
            &[curve],
            &LineStyle::default(),
            ActorTag::named("profile"),
        );
        assert!(scene.named("profile").is_some(), "name is used as given");
    }

    #[test]
    fn aabb_draws_twelve_edges() {
        let mut scene = Scene3::new();
        let id = PlotterHelper::new(&mut scene).add_aabb(
            &Aabb3::new(DVec3::ZERO, DVec3::ONE),
            &LineStyle::default(),
            ActorTag::default(),
        );
        let Some(ActorKind::Lines { points, .. }) = scene.actor(id).map(|a| &a.kind) else {
            panic!("expected a line set");
        };
        assert_eq!(points.len(), 24);
    }

    #[test]
    fn dimension_labels_the_center() {
        let mut scene = Scene3::new();
        let length = Length3::new(DVec3::ZERO, DVec3::new(0.0, 4.0, 0.0), None);
        let style = DimensionStyle::default()
            .with_decimals(1)
            .with_template("{value} mm");
        let [line, label] =
            PlotterHelper::new(&mut scene).dimension(&length, &style, ActorTag::named("height"));
        assert!(
            matches!(scene.actor(line).map(|a| &a.kind), Some(ActorKind::Lines { .. })),
            "first actor is the measurement line"
        );
        let Some(ActorKind::PointLabels { points, labels, .. }) =
            scene.actor(label).map(|a| &a.kind)
        else {
            panic!("expected labels");
        };
        assert_eq!(points.as_slice(), &[DVec3::new(0.0, 2.0, 0.0)]);
        assert_eq!(labels.as_slice(), &[String::from("4.0 mm")]);
        assert_eq!(scene.named("height").map(|a| a.id), Some(line));
        assert_eq!(scene.named("height.value").map(|a| a.id), Some(label));
    }

    #[test]
    fn coordinate_frame_follows_iso() {
        let mut scene = Scene3::new();
        let iso = Iso3::from_rotation_translation(
            glam::DQuat::from_rotation_z(FRAC_PI_2),
            DVec3::new(1.0, 2.0, 3.0),
        );
        let ids = PlotterHelper::new(&mut scene).coordinate_frame(&iso, 2.0, ActorTag::default());
        let arrows: Vec<_> = ids
            .iter()
            .filter_map(|id| match scene.actor(*id).map(|a| &a.kind) {
                Some(ActorKind::Arrow {
                    start,
                    direction,
                    style,
                }) => Some((*start, *direction, style.color)),
                _ => None,
            })
            .collect();
        assert_eq!(arrows.len(), 3);
        for (start, _, _) in &arrows {
            assert!(close(*start, DVec3::new(1.0, 2.0, 3.0)), "{start:?}");
        }
        // A quarter turn about z sends x to y and y to -x.
        assert!(close(arrows[0].1, DVec3::new(0.0, 2.0, 0.0)), "{:?}", arrows[0].1);
        assert!(close(arrows[1].1, DVec3::new(-2.0, 0.0, 0.0)), "{:?}", arrows[1].1);
        assert!(close(arrows[2].1, DVec3::new(0.0, 0.0, 2.0)), "{:?}", arrows[2].1);
        assert_eq!(arrows[0].2, css::RED);
        assert_eq!(arrows[1].2, css::GREEN);
        assert_eq!(arrows[2].2, css::BLUE);
    }

    #[test]
    fn named_frame_replaces_its_arrows() {
        let mut scene = Scene3::new();
        let mut helper = PlotterHelper::new(&mut scene);
        helper.coordinate_frame(&Iso3::IDENTITY, 1.0, ActorTag::named("part"));
        helper.coordinate_frame(&Iso3::IDENTITY, 2.0, ActorTag::named("part"));
        assert_eq!(scene.len(), 3);
        assert!(scene.named("part.z").is_some(), "z arrow is named");
    }

    #[test]
    fn label_and_arrow_pass_through() {
        let mut scene = Scene3::new();
        let mut helper = PlotterHelper::new(&mut scene);
        helper.label(
            DVec3::ONE,
            "datum A",
            &LabelStyle::default(),
            ActorTag::default(),
        );
        helper.arrow(
            DVec3::ZERO,
            DVec3::Z,
            &ArrowStyle3::default(),
            ActorTag::named("normal"),
        );
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.actors()[1].kind.kind_name(), "arrow");
        assert_eq!(scene.actors()[1].name.as_deref(), Some("normal"));
    }
}
