// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-to-mark helpers for a 2D plot surface.

extern crate alloc;

use alloc::string::String;

use kurbo::{Circle, Point, Shape};
use smallvec::SmallVec;

use crate::annotate::{LengthAnnotation, PAD_FACTOR, PAD_FONT_SIZE, length_layout};
use crate::aspect::{AspectFill, RescaledAxis, aspect_fill};
use crate::font::font_height;
use crate::geom::{Aabb2, Circle2, Curve2, Length2};
use crate::limits::{DataScale, data_scale};
use crate::mark::{ArrowMark, MarkId, MarkPayload, PathMark, TextMark};
use crate::style::{ArrowStyle, FillStyle, StrokeStyle, TextBox, TextStyle};
use crate::surface::{Aspect, PlotSurface};
use crate::z_order;

// Circle flattening tolerance in data units. Renderers re-flatten in pixel space if needed.
const CIRCLE_TOLERANCE: f64 = 1e-3;

/// Options applied when an [`AxesHelper`] is attached to a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxesOptions {
    /// Leave the surface's aspect mode alone instead of switching to equal data-limit aspect.
    pub skip_aspect: bool,
    /// Hide axis decorations.
    pub hide_axes: bool,
}

impl AxesOptions {
    /// Sets `skip_aspect`.
    pub fn with_skip_aspect(mut self, skip_aspect: bool) -> Self {
        self.skip_aspect = skip_aspect;
        self
    }

    /// Sets `hide_axes`.
    pub fn with_hide_axes(mut self, hide_axes: bool) -> Self {
        self.hide_axes = hide_axes;
        self
    }
}

/// Mark ids emitted by one [`AxesHelper::annotate_length`] call.
pub type AnnotationMarks = SmallVec<[MarkId; 5]>;

/// Draws geometry onto a borrowed [`PlotSurface`].
///
/// The helper holds no state beyond the borrow; every method reads the surface as it is at the
/// time of the call.
#[derive(Debug)]
pub struct AxesHelper<'a, S: PlotSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: PlotSurface + ?Sized> AxesHelper<'a, S> {
    /// Attaches to `surface`, applying `options`.
    pub fn new(surface: &'a mut S, options: AxesOptions) -> Self {
        if !options.skip_aspect {
            surface.set_aspect(Aspect::EqualDataLim);
        }
        if options.hide_axes {
            surface.set_axis_visible(false);
        }
        Self { surface }
    }

    /// The underlying surface.
    pub fn surface(&mut self) -> &mut S {
        self.surface
    }

    /// Sets both axis limits from a bounding box.
    pub fn set_bounds(&mut self, aabb: &Aabb2) {
        self.surface.set_xlim(aabb.min.x, aabb.max.x);
        self.surface.set_ylim(aabb.min.y, aabb.max.y);
    }

    /// Adds one circle patch per circle.
    pub fn plot_circle<C: Into<Circle2>>(
        &mut self,
        circles: impl IntoIterator<Item = C>,
        style: &FillStyle,
    ) -> SmallVec<[MarkId; 4]> {
        circles
            .into_iter()
            .map(|c| {
                let circle: Circle2 = c.into();
                let circle = Circle::from(circle);
                self.surface.add_mark(
                    MarkPayload::Path(PathMark {
                        path: circle.to_path(CIRCLE_TOLERANCE),
                        fill: style.fill.clone(),
                        stroke: style.edge.clone(),
                    }),
                    z_order::PATCHES,
                )
            })
            .collect()
    }

    /// Adds a curve as a stroked polyline.
    pub fn plot_curve(&mut self, curve: &Curve2, stroke: &StrokeStyle) -> MarkId {
        self.surface.add_mark(
            MarkPayload::Path(PathMark {
                path: curve.to_path(),
                fill: None,
                stroke: Some(stroke.clone()),
            }),
            z_order::LINES,
        )
    }

    /// Adds each curve as its own stroked polyline.
    pub fn plot_curves(
        &mut self,
        curves: &[Curve2],
        stroke: &StrokeStyle,
    ) -> SmallVec<[MarkId; 4]> {
        curves.iter().map(|c| self.plot_curve(c, stroke)).collect()
    }

    /// Adds a curve as a filled, closed polygon.
    pub fn fill_curve(&mut self, curve: &Curve2, style: &FillStyle) -> MarkId {
        self.surface.add_mark(
            MarkPayload::Path(PathMark {
                path: curve.to_closed_path(),
                fill: style.fill.clone(),
                stroke: style.edge.clone(),
            }),
            z_order::PATCHES,
        )
    }

    /// Rescales one axis so both axes have the same pixels per data unit.
    ///
    /// Only the rescaled axis is written back. Call this after all limits have settled.
    pub fn set_aspect_fill(&mut self) -> AspectFill {
        let fill = aspect_fill(&self.surface.limits(), self.surface.pixel_extent());
        let (lo, hi) = fill.rescaled_range();
        match fill.axis {
            RescaledAxis::X => self.surface.set_xlim(lo, hi),
            RescaledAxis::Y => self.surface.set_ylim(lo, hi),
        }
        fill
    }

    /// Pixels per data unit on each axis.
    pub fn data_scale(&self) -> DataScale {
        data_scale(&self.surface.limits(), self.surface.pixel_extent())
    }

    /// The effective (smaller) pixels per data unit.
    pub fn get_scale(&self) -> f64 {
        self.data_scale().effective()
    }

    /// Height in data units of a font of `points` size.
    pub fn font_height(&self, points: f64) -> f64 {
        font_height(
            points,
            self.surface.dpi(),
            &self.surface.limits(),
            self.surface.pixel_extent(),
        )
    }

    /// Adds an arrow from `start` to `end` (head at `end`).
    pub fn arrow(&mut self, start: Point, end: Point, style: &ArrowStyle) -> MarkId {
        self.surface.add_mark(
            MarkPayload::Arrow(ArrowMark {
                start,
                end,
                style: style.clone(),
            }),
            z_order::ARROWS,
        )
    }

    /// Adds a text label with no arrow.
    pub fn annotate_text_only(
        &mut self,
        text: impl Into<String>,
        pos: Point,
        style: &TextStyle,
    ) -> MarkId {
        self.surface.add_mark(
            MarkPayload::Text(TextMark {
                pos,
                text: text.into(),
                font_size: style.font_size,
                color: style.color,
                anchor: style.anchor,
                baseline: style.baseline,
                text_box: style.text_box.clone(),
            }),
            z_order::LABELS,
        )
    }

    /// Annotates a length with inward arrows and a boxed value label.
    ///
    /// Arrow length is one and a half times the data-unit height of a 12 point font, so the
    /// annotation keeps its printed size as the limits change. Limits should be final before this
    /// is called.
    pub fn annotate_length(
        &mut self,
        length: &Length2,
        options: &LengthAnnotation,
    ) -> AnnotationMarks {
        let pad = self.font_height(PAD_FONT_SIZE) * PAD_FACTOR;
        let layout = length_layout(length, options.side_shift, pad, options.place);
        log::debug!(
            target: "dimplot",
            "annotate length {} (pad {pad}, shift {}, {:?})",
            length.value,
            options.side_shift,
            options.place
        );

        let mut ids = AnnotationMarks::new();
        if let Some(extensions) = layout.extensions {
            for line in extensions {
                ids.push(self.line(line.p0, line.p1, &options.extension));
            }
        }

        ids.push(self.arrow(layout.arrow_a.p0, layout.arrow_a.p1, &options.arrow));
        ids.push(self.arrow(layout.arrow_b.p0, layout.arrow_b.p1, &options.arrow));

        let text_box = TextBox::default()
            .with_pad(options.box_pad)
            .with_fill(options.fill.clone());
        let style = TextStyle::centered(options.font_size)
            .with_color(options.text_color)
            .with_text_box(Some(text_box));
        ids.push(self.annotate_text_only(
            options.format.format(length.value),
            layout.label,
            &style,
        ));
        ids
    }

    fn line(&mut self, p0: Point, p1: Point, stroke: &StrokeStyle) -> MarkId {
        self.plot_curve(&Curve2::new([p0, p1]), stroke)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use peniko::color::palette::css;

    use super::*;
    use crate::annotate::LabelPlace;
    use crate::canvas::{Canvas, CanvasConfig};
    use crate::mark::Mark;

    fn canvas() -> Canvas {
        Canvas::new(CanvasConfig::new(1000.0, 1000.0).with_dpi(72.0))
    }

    fn arrows(marks: &[Mark]) -> alloc::vec::Vec<&ArrowMark> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Arrow(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn new_applies_options() {
        let mut c = canvas();
        AxesHelper::new(&mut c, AxesOptions::default());
        assert_eq!(c.aspect(), Aspect::EqualDataLim);
        assert!(c.axis_visible(), "axes stay visible by default");

        let mut c = canvas();
        AxesHelper::new(
            &mut c,
            AxesOptions::default()
                .with_skip_aspect(true)
                .with_hide_axes(true),
        );
        assert_eq!(c.aspect(), Aspect::Auto);
        assert!(!c.axis_visible(), "hide_axes should hide decorations");
    }

    #[test]
    fn set_aspect_fill_writes_only_the_rescaled_axis() {
        let mut c = canvas();
        let mut h = AxesHelper::new(&mut c, AxesOptions::default());
        h.set_bounds(&Aabb2::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0)));
        let fill = h.set_aspect_fill();
        assert_eq!(fill.axis, RescaledAxis::Y);
        assert_eq!(c.xlim(), (0.0, 10.0));
        assert_eq!(c.ylim(), (-2.5, 7.5));
    }

    #[test]
    fn font_height_reads_surface_dpi_and_limits() {
        let mut c = canvas();
        let mut h = AxesHelper::new(&mut c, AxesOptions::default());
        h.set_bounds(&Aabb2::new(Point::new(0.0, 0.0), Point::new(20.0, 10.0)));
        // 50 px/unit on x, 100 on y: effective 50. 12pt at 72 dpi is 12 px.
        assert_eq!(h.get_scale(), 50.0);
        assert!((h.font_height(12.0) - 0.24).abs() < 1e-12, "{}", h.font_height(12.0));
    }

    #[test]
    fn circles_accept_tuples_and_circles() {
        let mut c = canvas();
        let mut h = AxesHelper::new(&mut c, AxesOptions::default());
        let ids = h.plot_circle([(0.0, 0.0, 1.0), (5.0, 5.0, 2.0)], &FillStyle::default());
        assert_eq!(ids.len(), 2);
        h.plot_circle([Circle2::new(1.0, 1.0, 0.5)], &FillStyle::filled(css::RED));
        assert_eq!(c.marks().len(), 3);
        let b = c.data_bounds().expect("circles have bounds");
        assert!((b.x0 + 1.0).abs() < 1e-2 && (b.x1 - 7.0).abs() < 1e-2, "{b:?}");
    }

    #[test]
    fn curves_and_fills() {
        let mut c = canvas();
        let mut h = AxesHelper::new(&mut c, AxesOptions::default());
        let curve = Curve2::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        h.plot_curve(&curve, &StrokeStyle::default());
        h.fill_curve(&curve, &FillStyle::filled(css::SILVER));
        let ids = h.plot_curves(&[curve.clone(), curve], &StrokeStyle::default());
        assert_eq!(ids.len(), 2);
        let MarkPayload::Path(stroked) = &c.marks()[0].payload else {
            panic!("expected a path");
        };
        assert!(stroked.fill.is_none(), "plot_curve does not fill");
        let MarkPayload::Path(filled) = &c.marks()[1].payload else {
            panic!("expected a path");
        };
        assert!(filled.fill.is_some(), "fill_curve fills");
        assert!(c.marks()[1].z_index < c.marks()[0].z_index, "fills sit under lines");
    }

    #[test]
    fn annotate_length_places_arrows_and_label() {
        let mut c = canvas();
        let mut h = AxesHelper::new(&mut c, AxesOptions::default().with_skip_aspect(true));
        h.set_bounds(&Aabb2::new(Point::new(0.0, 0.0), Point::new(20.0, 20.0)));
        // 50 px/unit; 12pt at 72 dpi = 12 px = 0.24 units; pad = 0.36.
        let pad = h.font_height(PAD_FONT_SIZE) * PAD_FACTOR;
        assert!((pad - 0.36).abs() < 1e-12, "pad {pad}");

        let length = Length2::new(Point::new(2.0, 2.0), Point::new(8.0, 2.0), None);
        let ids = h.annotate_length(&length, &LengthAnnotation::default());
        assert_eq!(ids.len(), 3, "two arrows and a label");

        let a = arrows(c.marks());
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].end, Point::new(2.0, 2.0));
        assert!((a[0].start.x - (2.0 - pad)).abs() < 1e-12, "{:?}", a[0]);
        assert_eq!(a[1].end, Point::new(8.0, 2.0));
        assert!((a[1].start.x - (8.0 + pad)).abs() < 1e-12, "{:?}", a[1]);

        let MarkPayload::Text(t) = &c.marks()[2].payload else {
            panic!("expected the label last");
        };
        assert_eq!(t.text, "6.000");
        assert_eq!(t.pos, a[1].start);
        assert!(t.text_box.is_some(), "label is boxed");
    }

    #[test]
    fn inside_annotation_centers_the_label() {
        let mut c = canvas();
        let mut h = AxesHelper::new(&mut c, AxesOptions::default().with_skip_aspect(true));
        h.set_bounds(&Aabb2::new(Point::new(0.0, 0.0), Point::new(20.0, 20.0)));
        let length = Length2::new(Point::new(2.0, 2.0), Point::new(8.0, 2.0), None);
        h.annotate_length(
            &length,
            &LengthAnnotation::default().with_place(LabelPlace::Inside),
        );
        let a = arrows(c.marks());
        assert_eq!(a[0].start, Point::new(5.0, 2.0));
        assert_eq!(a[1].start, Point::new(5.0, 2.0));
        assert_eq!(a[0].end, Point::new(2.0, 2.0));
        assert_eq!(a[1].end, Point::new(8.0, 2.0));
        let MarkPayload::Text(t) = &c.marks()[2].payload else {
            panic!("expected the label last");
        };
        assert_eq!(t.pos, Point::new(5.0, 2.0));
    }

    #[test]
    fn shifted_annotation_adds_extension_lines() {
        let mut c = canvas();
        let mut h = AxesHelper::new(&mut c, AxesOptions::default().with_skip_aspect(true));
        h.set_bounds(&Aabb2::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
        let length = Length2::new(
            Point::new(1.0, 1.0),
            Point::new(4.0, 3.0),
            Some(Vec2::new(1.0, 0.0)),
        );
        let ids = h.annotate_length(&length, &LengthAnnotation::default().with_side_shift(-2.0));
        assert_eq!(ids.len(), 5);
        let a = arrows(c.marks());
        // Centerline through (2.5, 2) shifted to y = 0; leaders project onto it.
        assert_eq!(a[0].end, Point::new(1.0, 0.0));
        assert_eq!(a[1].end, Point::new(4.0, 0.0));
    }
}
