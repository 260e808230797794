// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimension-style length annotations.
//!
//! A length is annotated with two arrows at its endpoints, projected onto an optionally
//! side-shifted centerline, and a boxed value label. [`LabelPlace`] picks whether the label sits
//! beyond the second endpoint or between the endpoints.

extern crate alloc;

use alloc::string::String;

use kurbo::{Line, Point};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::geom::Length2;
use crate::style::{ArrowStyle, StrokeStyle};

/// Font size, in points, whose data-unit height sets the arrow padding.
pub const PAD_FONT_SIZE: f64 = 12.0;

/// Multiplier applied to the [`PAD_FONT_SIZE`] height to get the arrow padding.
pub const PAD_FACTOR: f64 = 1.5;

/// Where the value label of a length annotation goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPlace {
    /// Beyond the second endpoint. Both arrows point inward from outside the span, the second one
    /// starting at the label.
    #[default]
    Outside,
    /// Midway between the endpoints, with both arrows running from the label out to the
    /// endpoints.
    Inside,
    /// Midway between the endpoints, with both arrows pointing inward from outside the span.
    InsideRev,
}

/// How a measured value is printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelFormat {
    /// Digits after the decimal point.
    pub decimals: usize,
    /// Text with a `{value}` placeholder.
    pub template: String,
}

impl LabelFormat {
    /// Plain value with the given number of decimals.
    pub fn decimals(decimals: usize) -> Self {
        Self {
            decimals,
            template: String::from("{value}"),
        }
    }

    /// Sets the template; `{value}` is replaced with the formatted number.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Formats `value`.
    pub fn format(&self, value: f64) -> String {
        let number = alloc::format!("{value:.prec$}", prec = self.decimals);
        if self.template.contains("{value}") {
            self.template.replace("{value}", &number)
        } else {
            self.template.clone()
        }
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::decimals(3)
    }
}

/// Options for [`AxesHelper::annotate_length`](crate::AxesHelper::annotate_length).
#[derive(Clone, Debug, PartialEq)]
pub struct LengthAnnotation {
    /// Offset of the annotation centerline, to the left of the measurement direction.
    pub side_shift: f64,
    /// Label placement.
    pub place: LabelPlace,
    /// Label format.
    pub format: LabelFormat,
    /// Label font size in points.
    pub font_size: f64,
    /// Label text color.
    pub text_color: Color,
    /// Label box fill.
    pub fill: Brush,
    /// Label box padding as a fraction of the font size.
    pub box_pad: f64,
    /// Arrow appearance.
    pub arrow: ArrowStyle,
    /// Extension lines from the endpoints to a shifted centerline.
    pub extension: StrokeStyle,
}

impl LengthAnnotation {
    /// Sets the side shift.
    pub fn with_side_shift(mut self, side_shift: f64) -> Self {
        self.side_shift = side_shift;
        self
    }

    /// Sets the label placement.
    pub fn with_place(mut self, place: LabelPlace) -> Self {
        self.place = place;
        self
    }

    /// Sets the label format.
    pub fn with_format(mut self, format: LabelFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the label font size in points.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the label text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the label box fill.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the label box padding.
    pub fn with_box_pad(mut self, pad: f64) -> Self {
        self.box_pad = pad;
        self
    }

    /// Sets the arrow style.
    pub fn with_arrow(mut self, arrow: ArrowStyle) -> Self {
        self.arrow = arrow;
        self
    }

    /// Sets the extension line stroke.
    pub fn with_extension(mut self, extension: StrokeStyle) -> Self {
        self.extension = extension;
        self
    }
}

impl Default for LengthAnnotation {
    fn default() -> Self {
        Self {
            side_shift: 0.0,
            place: LabelPlace::Outside,
            format: LabelFormat::default(),
            font_size: 10.0,
            text_color: css::BLACK,
            fill: Brush::Solid(css::WHITE),
            box_pad: 0.3,
            arrow: ArrowStyle::default(),
            extension: StrokeStyle::solid(css::BLACK, 0.5),
        }
    }
}

/// Where the pieces of a length annotation go, in data units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthLayout {
    /// Projection of `a` onto the centerline.
    pub leader_a: Point,
    /// Projection of `b` onto the centerline.
    pub leader_b: Point,
    /// Arrow ending at `leader_a`.
    pub arrow_a: Line,
    /// Arrow ending at `leader_b`.
    pub arrow_b: Line,
    /// Label anchor (centered).
    pub label: Point,
    /// Lines from the endpoints to their leaders, present when the centerline is shifted.
    pub extensions: Option<[Line; 2]>,
}

/// Lays out a length annotation. Arrows from outside the span are `pad` data units long.
pub fn length_layout(
    length: &Length2,
    side_shift: f64,
    pad: f64,
    place: LabelPlace,
) -> LengthLayout {
    let center = length.center.shift_orthogonal(side_shift);
    let dir = length.direction();
    let leader_a = center.projection(length.a);
    let leader_b = center.projection(length.b);
    let outer_a = leader_a - dir * pad;
    let outer_b = leader_b + dir * pad;
    let middle = leader_a.midpoint(leader_b);

    let (label, arrow_a, arrow_b) = match place {
        LabelPlace::Outside => (
            outer_b,
            Line::new(outer_a, leader_a),
            Line::new(outer_b, leader_b),
        ),
        LabelPlace::Inside => (
            middle,
            Line::new(middle, leader_a),
            Line::new(middle, leader_b),
        ),
        LabelPlace::InsideRev => (
            middle,
            Line::new(outer_a, leader_a),
            Line::new(outer_b, leader_b),
        ),
    };

    let extensions = (side_shift != 0.0)
        .then(|| [Line::new(length.a, leader_a), Line::new(length.b, leader_b)]);

    LengthLayout {
        leader_a,
        leader_b,
        arrow_a,
        arrow_b,
        label,
        extensions,
    }
}
