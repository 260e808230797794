// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording [`PlotSurface`].
//!
//! `Canvas` behaves like a single set of plot axes: it has a pixel size and dpi, optional
//! explicit limits (autoscaled from its marks otherwise), an aspect mode, and a list of marks in
//! data units. It does no rendering itself; a renderer reads [`Canvas::marks`] and maps them
//! through [`Canvas::data_to_pixel`].

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, Rect};

use crate::aspect::aspect_fill;
use crate::font::points_to_pixels;
use crate::limits::{AxisLimits, PixelExtent};
use crate::mark::{Mark, MarkId, MarkPayload};
use crate::scale::ScaleLinear;
use crate::surface::{Aspect, PlotSurface};

/// Fraction of the data span added on each side when autoscaling.
const AUTOSCALE_MARGIN: f64 = 0.05;

/// Pixel geometry of a [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Drawing-area width in pixels.
    pub width: f64,
    /// Drawing-area height in pixels.
    pub height: f64,
    /// Dots per inch used to convert points into pixels.
    pub dpi: f64,
}

impl CanvasConfig {
    /// Creates a config of the given pixel size at the default dpi.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the dpi.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            dpi: 100.0,
        }
    }
}

/// A plot surface that records marks.
#[derive(Clone, Debug)]
pub struct Canvas {
    config: CanvasConfig,
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
    aspect: Aspect,
    axis_visible: bool,
    marks: Vec<Mark>,
    next_id: u64,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            xlim: None,
            ylim: None,
            aspect: Aspect::Auto,
            axis_visible: true,
            marks: Vec::new(),
            next_id: 0,
        }
    }

    /// The pixel geometry.
    pub fn config(&self) -> CanvasConfig {
        self.config
    }

    /// Recorded marks, in insertion order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// The current aspect mode.
    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    /// Whether axis decorations should be drawn.
    pub fn axis_visible(&self) -> bool {
        self.axis_visible
    }

    /// Union of the autoscale bounds of all marks.
    pub fn data_bounds(&self) -> Option<Rect> {
        self.marks
            .iter()
            .filter_map(|m| m.payload.bounds())
            .reduce(|a, b| a.union(b))
    }

    /// Limits the renderer should use.
    ///
    /// These are the surface limits, widened by aspect fill when the aspect mode is
    /// [`Aspect::EqualDataLim`].
    pub fn view_limits(&self) -> AxisLimits {
        let limits = self.limits();
        match self.aspect {
            Aspect::Auto => limits,
            Aspect::EqualDataLim => aspect_fill(&limits, self.pixel_extent()).limits,
        }
    }

    /// The x mapping from data units to pixel columns.
    pub fn x_scale(&self) -> ScaleLinear {
        ScaleLinear::new(self.view_limits().x, (0.0, self.config.width))
    }

    /// The y mapping from data units to pixel rows (y up).
    pub fn y_scale(&self) -> ScaleLinear {
        ScaleLinear::new(self.view_limits().y, (self.config.height, 0.0))
    }

    /// The affine map from data units to pixels, with y pointing up.
    pub fn data_to_pixel(&self) -> Affine {
        let xs = self.x_scale();
        let ys = self.y_scale();
        Affine::new([xs.slope(), 0.0, 0.0, ys.slope(), xs.map(0.0), ys.map(0.0)])
    }

    /// Converts a size in points into pixels at this canvas' dpi.
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points_to_pixels(points, self.config.dpi)
    }

    fn autoscale(&self, pick: impl Fn(Rect) -> (f64, f64)) -> (f64, f64) {
        let Some((lo, hi)) = self.data_bounds().map(pick) else {
            return (0.0, 1.0);
        };
        let span = hi - lo;
        if span == 0.0 {
            return (lo - 0.5, hi + 0.5);
        }
        (lo - span * AUTOSCALE_MARGIN, hi + span * AUTOSCALE_MARGIN)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl PlotSurface for Canvas {
    fn xlim(&self) -> (f64, f64) {
        self.xlim
            .unwrap_or_else(|| self.autoscale(|r| (r.x0, r.x1)))
    }

    fn ylim(&self) -> (f64, f64) {
        self.ylim
            .unwrap_or_else(|| self.autoscale(|r| (r.y0, r.y1)))
    }

    fn set_xlim(&mut self, x0: f64, x1: f64) {
        self.xlim = Some((x0, x1));
    }

    fn set_ylim(&mut self, y0: f64, y1: f64) {
        self.ylim = Some((y0, y1));
    }

    fn pixel_extent(&self) -> PixelExtent {
        PixelExtent::new(self.config.width, self.config.height)
    }

    fn dpi(&self) -> f64 {
        self.config.dpi
    }

    fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = aspect;
    }

    fn set_axis_visible(&mut self, visible: bool) {
        self.axis_visible = visible;
    }

    fn add_mark(&mut self, payload: MarkPayload, z_index: i32) -> MarkId {
        let id = MarkId(self.next_id);
        self.next_id += 1;
        log::trace!(target: "dimplot", "canvas: add {} mark {:?}", payload.kind_name(), id);
        self.marks.push(Mark {
            id,
            z_index,
            payload,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{BezPath, Point};

    use super::*;
    use crate::mark::PathMark;

    fn line(p0: (f64, f64), p1: (f64, f64)) -> MarkPayload {
        let mut path = BezPath::new();
        path.move_to(p0);
        path.line_to(p1);
        MarkPayload::Path(PathMark {
            path,
            fill: None,
            stroke: None,
        })
    }

    #[test]
    fn empty_canvas_has_unit_limits() {
        let c = Canvas::default();
        assert_eq!(c.limits(), AxisLimits::new((0.0, 1.0), (0.0, 1.0)));
    }

    #[test]
    fn autoscale_adds_margins_until_limits_are_set() {
        let mut c = Canvas::default();
        c.add_mark(line((0.0, 0.0), (10.0, 20.0)), 0);
        assert_eq!(c.xlim(), (-0.5, 10.5));
        assert_eq!(c.ylim(), (-1.0, 21.0));

        c.set_xlim(2.0, 3.0);
        assert_eq!(c.xlim(), (2.0, 3.0));
        assert_eq!(c.ylim(), (-1.0, 21.0));
    }

    #[test]
    fn ids_are_sequential() {
        let mut c = Canvas::default();
        let a = c.add_mark(line((0.0, 0.0), (1.0, 1.0)), 5);
        let b = c.add_mark(line((0.0, 0.0), (1.0, 1.0)), 0);
        assert_eq!((a, b), (MarkId(0), MarkId(1)));
        assert_eq!(c.marks()[0].z_index, 5);
    }

    #[test]
    fn data_to_pixel_flips_y() {
        let mut c = Canvas::new(CanvasConfig::new(200.0, 100.0));
        c.set_xlim(0.0, 10.0);
        c.set_ylim(0.0, 5.0);
        let t = c.data_to_pixel();
        assert_eq!(t * Point::new(0.0, 0.0), Point::new(0.0, 100.0));
        assert_eq!(t * Point::new(10.0, 5.0), Point::new(200.0, 0.0));
    }

    #[test]
    fn equal_aspect_widens_view_but_not_limits() {
        let mut c = Canvas::new(CanvasConfig::new(1000.0, 1000.0));
        c.set_xlim(0.0, 10.0);
        c.set_ylim(0.0, 5.0);
        c.set_aspect(Aspect::EqualDataLim);
        assert_eq!(c.ylim(), (0.0, 5.0));
        assert_eq!(c.view_limits().x, (0.0, 10.0));
        assert_eq!(c.view_limits().y, (-2.5, 7.5));
        assert_eq!(c.x_scale().slope(), -c.y_scale().slope());
    }
}
