// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo for `dimplot`: a dimensioned 2D plate drawing written to SVG, and a recorded 3D scene.
mod svg;

use std::error::Error;

use dimplot::plot2d::{
    Aabb2, ArrowStyle, AxesHelper, AxesOptions, Canvas, CanvasConfig, Circle2, Colormap, Curve2,
    FillStyle, LabelFormat, LabelPlace, Length2, LengthAnnotation, StrokeStyle, TextStyle,
};
use dimplot::plot3d::{
    Aabb3, ActorTag, Curve3, DQuat, DVec3, DimensionStyle, Iso3, LabelStyle, Length3, LineStyle,
    Mesh, MeshStyle, PlotterHelper, Scene3,
};
use kurbo::{Point, Vec2};
use peniko::color::palette::css;

const SVG_PATH: &str = "dimplot_demo.svg";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let canvas = plate_drawing();
    let svg = svg::render(&canvas);
    std::fs::write(SVG_PATH, svg)?;
    log::info!("wrote {SVG_PATH} ({} marks)", canvas.marks().len());

    let scene = bracket_scene()?;
    for actor in scene.actors() {
        log::info!(
            "actor {:?} {}{}",
            actor.id,
            actor.kind.kind_name(),
            actor
                .name
                .as_deref()
                .map(|n| format!(" \"{n}\""))
                .unwrap_or_default()
        );
    }
    if let Some(bounds) = scene.bounds() {
        log::info!("scene bounds {} .. {}", bounds.min, bounds.max);
    }
    Ok(())
}

/// A 100 x 60 plate with four holes and a slot, dimensioned like a shop drawing.
fn plate_drawing() -> Canvas {
    let mut canvas = Canvas::new(CanvasConfig::new(800.0, 560.0));
    let mut ax = AxesHelper::new(&mut canvas, AxesOptions::default());

    let outline = Curve2::new([
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 60.0),
        Point::new(0.0, 60.0),
        Point::new(0.0, 0.0),
    ]);
    ax.fill_curve(
        &outline,
        &FillStyle::filled(css::ALICE_BLUE).with_edge(StrokeStyle::solid(css::NAVY, 1.5)),
    );

    let holes = [
        (12.0, 12.0, 4.0),
        (88.0, 12.0, 4.0),
        (88.0, 48.0, 4.0),
        (12.0, 48.0, 4.0),
    ];
    ax.plot_circle(
        holes,
        &FillStyle::filled(css::WHITE).with_edge(StrokeStyle::solid(css::NAVY, 1.0)),
    );

    let slot = Curve2::new([
        Point::new(40.0, 24.0),
        Point::new(60.0, 24.0),
        Point::new(60.0, 36.0),
        Point::new(40.0, 36.0),
        Point::new(40.0, 24.0),
    ]);
    ax.plot_curve(&slot, &StrokeStyle::solid(css::NAVY, 1.0));

    // Deviation samples along the top edge, colored by normalized error.
    let deviation = Colormap::deviation();
    for (i, t) in [-0.2, 0.1, 0.5, 0.8, 1.3].into_iter().enumerate() {
        let x = 20.0 + 15.0 * i as f64;
        ax.plot_circle(
            [Circle2::new(x, 60.0, 1.2)],
            &FillStyle::filled(deviation.sample(t)),
        );
    }

    ax.set_bounds(&Aabb2::new(Point::new(-15.0, -20.0), Point::new(115.0, 75.0)));
    let fill = ax.set_aspect_fill();
    log::debug!("aspect fill rescaled {:?}", fill.axis);

    let mm = LabelFormat::decimals(1).with_template("{value} mm");
    ax.annotate_length(
        &Length2::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), None),
        &LengthAnnotation::default()
            .with_side_shift(-10.0)
            .with_format(mm.clone()),
    );
    ax.annotate_length(
        &Length2::new(Point::new(100.0, 0.0), Point::new(100.0, 60.0), None),
        &LengthAnnotation::default()
            .with_side_shift(-8.0)
            .with_format(mm.clone()),
    );
    ax.annotate_length(
        &Length2::new(
            Point::new(12.0, 48.0),
            Point::new(88.0, 12.0),
            Some(Vec2::new(1.0, 0.0)),
        ),
        &LengthAnnotation::default()
            .with_side_shift(-30.0)
            .with_place(LabelPlace::Inside)
            .with_format(mm.with_template("{value} c/c")),
    );

    ax.arrow(
        Point::new(30.0, 68.0),
        Point::new(41.0, 61.5),
        &ArrowStyle::default(),
    );
    ax.annotate_text_only(
        "inspection points",
        Point::new(29.0, 69.0),
        &TextStyle::default().with_font_size(9.0),
    );

    canvas
}

/// A bracket-like tetrahedron with its bounding box, an edge curve, a dimension, and frames.
fn bracket_scene() -> Result<Scene3, Box<dyn Error>> {
    let mesh = Mesh::new(
        vec![
            DVec3::ZERO,
            DVec3::new(40.0, 0.0, 0.0),
            DVec3::new(0.0, 30.0, 0.0),
            DVec3::new(0.0, 0.0, 20.0),
        ],
        vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
    )?;
    let placement = Iso3::from_rotation_translation(
        DQuat::from_rotation_z(0.3),
        DVec3::new(10.0, 5.0, 0.0),
    );
    let mesh = mesh.transformed(&placement);

    let mut scene = Scene3::new();
    let mut plot = PlotterHelper::new(&mut scene);
    plot.add_mesh(
        &mesh,
        &MeshStyle::default()
            .with_opacity(0.6)
            .with_extremes(Colormap::deviation().extremes())
            .with_edges(Some(LineStyle::new(css::GRAY, 1.0))),
        ActorTag::named("bracket").with_label("Bracket"),
    );
    if let Some(aabb) = mesh.aabb() {
        plot.add_aabb(&aabb, &LineStyle::new(css::GRAY, 1.0), ActorTag::default());
    }

    let edge = Curve3::new(mesh.vertices()[1..].to_vec());
    plot.add_curves(
        &[edge],
        &LineStyle::new(css::ORANGE, 3.0),
        ActorTag::named("top edge").with_label("Top edge"),
    );

    let [a, b] = [mesh.vertices()[0], mesh.vertices()[1]];
    plot.dimension(
        &Length3::new(a, b, None),
        &DimensionStyle::default()
            .with_decimals(1)
            .with_template("{value} mm"),
        ActorTag::named("base length"),
    );

    plot.coordinate_frame(&Iso3::IDENTITY, 10.0, ActorTag::named("world"));
    plot.coordinate_frame(&placement, 10.0, ActorTag::named("part"));
    plot.label(
        placement.transform_point3(DVec3::ZERO),
        "part origin",
        &LabelStyle::default().with_fill(None),
        ActorTag::default(),
    );

    // Named actors replace each other, so re-adding the outline box keeps one copy.
    let outline = Aabb3::new(DVec3::splat(-5.0), DVec3::new(50.0, 45.0, 25.0));
    for _ in 0..2 {
        plot.add_aabb(
            &outline,
            &LineStyle::new(css::SILVER, 0.5),
            ActorTag::named("work envelope"),
        );
    }

    Ok(scene)
}
