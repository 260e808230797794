// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D plotting helpers for engineering geometry.
//!
//! This crate turns geometric entities (points, circles, curves, measured lengths) into marks on
//! a [`PlotSurface`]:
//! - **Aspect fill** rescales one axis so a data unit spans the same number of pixels on both.
//! - **Font height** converts a point size into data units, so annotations keep their printed
//!   size at any zoom.
//! - **Length annotations** draw dimension-style arrows and a boxed value label.
//!
//! [`Canvas`] is a recording surface; it stores marks in data units and leaves rendering to the
//! caller. Text is stored unshaped.

#![no_std]

extern crate alloc;

mod annotate;
mod arrow;
mod aspect;
mod canvas;
mod colormap;
#[cfg(not(feature = "std"))]
mod float;
mod font;
mod geom;
mod helper;
mod limits;
mod mark;
mod measure;
mod scale;
mod style;
mod surface;
pub mod z_order;

pub use annotate::{
    LabelFormat, LabelPlace, LengthAnnotation, LengthLayout, PAD_FACTOR, PAD_FONT_SIZE,
    length_layout,
};
pub use arrow::{ArrowGeometry, arrow_geometry};
pub use aspect::{AspectFill, RescaledAxis, aspect_fill};
pub use canvas::{Canvas, CanvasConfig};
pub use colormap::{Colormap, ColormapError};
pub use font::{POINTS_PER_INCH, font_height, points_to_pixels};
pub use geom::{Aabb2, Circle2, Curve2, Length2, SurfacePoint2};
pub use helper::{AnnotationMarks, AxesHelper, AxesOptions};
pub use limits::{AxisLimits, DataScale, PixelExtent, data_scale};
pub use mark::{ArrowMark, Mark, MarkId, MarkPayload, PathMark, TextMark};
pub use measure::{HeuristicTextMeasurer, TextMeasurer, text_bounds};
pub use scale::ScaleLinear;
pub use style::{
    ArrowHead, ArrowStyle, BoxStyle, FillStyle, StrokeStyle, TextAnchor, TextBaseline, TextBox,
    TextStyle,
};
pub use surface::{Aspect, PlotSurface};
