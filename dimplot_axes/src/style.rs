// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling options passed through to marks.
//!
//! Sizes that describe ink (stroke widths, font sizes, arrow heads, text-box padding) are in
//! typographic points so they stay constant when the axis limits change. Positions are always in
//! data units.

use peniko::color::palette::css;
use peniko::{Brush, Color};

/// Stroke paint and width.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in points.
    pub width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, width: f64) -> Self {
        Self {
            brush: brush.into(),
            width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Fill and optional outline for closed shapes (circles, filled curves).
#[derive(Clone, Debug, PartialEq)]
pub struct FillStyle {
    /// Interior paint. `None` leaves the shape unfilled.
    pub fill: Option<Brush>,
    /// Outline. `None` draws no edge.
    pub edge: Option<StrokeStyle>,
}

impl FillStyle {
    /// A filled shape with no edge.
    pub fn filled(fill: impl Into<Brush>) -> Self {
        Self {
            fill: Some(fill.into()),
            edge: None,
        }
    }

    /// An unfilled shape with an edge.
    pub fn outline(edge: StrokeStyle) -> Self {
        Self {
            fill: None,
            edge: Some(edge),
        }
    }

    /// Sets the interior paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the edge stroke.
    pub fn with_edge(mut self, edge: StrokeStyle) -> Self {
        self.edge = Some(edge);
        self
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        Self::outline(StrokeStyle::default())
    }
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    #[default]
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Vertical text alignment relative to the anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Anchor at the top of the text.
    Top,
    /// Anchor at the vertical middle.
    #[default]
    Middle,
    /// Anchor at the alphabetic baseline.
    Alphabetic,
    /// Anchor at the bottom of the text.
    Bottom,
}

/// Corner treatment of a text box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxStyle {
    /// Sharp corners.
    Square,
    /// Rounded corners.
    #[default]
    Round,
}

/// A box drawn behind text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBox {
    /// Corner style.
    pub style: BoxStyle,
    /// Padding around the text as a fraction of the font size.
    pub pad: f64,
    /// Box fill.
    pub fill: Brush,
    /// Box edge.
    pub edge: Option<StrokeStyle>,
}

impl TextBox {
    /// Sets the corner style.
    pub fn with_style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the padding, as a fraction of the font size.
    pub fn with_pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets or clears the edge stroke.
    pub fn with_edge(mut self, edge: Option<StrokeStyle>) -> Self {
        self.edge = edge;
        self
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self {
            style: BoxStyle::Round,
            pad: 0.3,
            fill: Brush::Solid(css::WHITE),
            edge: Some(StrokeStyle::solid(css::BLACK, 1.0)),
        }
    }
}

/// Text appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub font_size: f64,
    /// Text color.
    pub color: Color,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Optional box behind the text.
    pub text_box: Option<TextBox>,
}

impl TextStyle {
    /// Centered text of the given size with no box.
    pub fn centered(font_size: f64) -> Self {
        Self {
            font_size,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
            ..Self::default()
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical alignment.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets or clears the text box.
    pub fn with_text_box(mut self, text_box: Option<TextBox>) -> Self {
        self.text_box = text_box;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            color: css::BLACK,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            text_box: None,
        }
    }
}

/// Arrow head shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArrowHead {
    /// A plain line with no head (`-`).
    None,
    /// Two open strokes at the tip (`->`).
    Open,
    /// A filled triangle at the tip (`-|>`).
    #[default]
    Filled,
}

/// Arrow appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowStyle {
    /// Head shape at the end point.
    pub head: ArrowHead,
    /// Head length in points.
    pub head_length: f64,
    /// Head half-width in points.
    pub head_width: f64,
    /// Shaft stroke (the head is filled with the same paint).
    pub stroke: StrokeStyle,
}

impl ArrowStyle {
    /// Sets the head shape.
    pub fn with_head(mut self, head: ArrowHead) -> Self {
        self.head = head;
        self
    }

    /// Sets the head length and half-width in points.
    pub fn with_head_size(mut self, length: f64, half_width: f64) -> Self {
        self.head_length = length;
        self.head_width = half_width;
        self
    }

    /// Sets the shaft stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            head: ArrowHead::Filled,
            head_length: 4.0,
            head_width: 2.0,
            stroke: StrokeStyle::solid(css::BLACK, 0.75),
        }
    }
}
