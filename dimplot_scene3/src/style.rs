// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling options for 3D actors.

use peniko::Color;
use peniko::color::palette::css;

/// Line color and width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// Line color.
    pub color: Color,
    /// Line width in pixels.
    pub width: f64,
}

impl LineStyle {
    /// A line of the given color and width.
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(css::BLACK, 1.0)
    }
}

/// Surface appearance of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshStyle {
    /// Surface color.
    pub color: Color,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Triangle edges, if drawn.
    pub edges: Option<LineStyle>,
    /// Smooth shading across faces.
    pub smooth_shading: bool,
    /// Color for scalars below the color range.
    pub below_color: Option<Color>,
    /// Color for scalars above the color range.
    pub above_color: Option<Color>,
}

impl MeshStyle {
    /// Sets the surface color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets or clears the edge style.
    pub fn with_edges(mut self, edges: Option<LineStyle>) -> Self {
        self.edges = edges;
        self
    }

    /// Turns smooth shading on or off.
    pub fn with_smooth_shading(mut self, smooth: bool) -> Self {
        self.smooth_shading = smooth;
        self
    }

    /// Sets the out-of-range colors from a colormap's `(under, over)` pair.
    ///
    /// An unset extreme leaves the mesh without that color.
    pub fn with_extremes(mut self, (below, above): (Option<Color>, Option<Color>)) -> Self {
        self.below_color = below;
        self.above_color = above;
        self
    }
}

impl Default for MeshStyle {
    fn default() -> Self {
        Self {
            color: css::SILVER,
            opacity: 1.0,
            edges: None,
            smooth_shading: false,
            below_color: None,
            above_color: None,
        }
    }
}

/// Point label appearance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size in points.
    pub font_size: f64,
    /// Text color.
    pub text_color: Color,
    /// Label box fill. `None` draws no box.
    pub fill: Option<Color>,
    /// Size of the anchor point marker. Zero hides it.
    pub point_size: f64,
    /// Keep the label visible through geometry.
    pub always_visible: bool,
}

impl LabelStyle {
    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets or clears the box fill.
    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the point marker size.
    pub fn with_point_size(mut self, size: f64) -> Self {
        self.point_size = size;
        self
    }

    /// Sets whether the label shows through geometry.
    pub fn with_always_visible(mut self, always_visible: bool) -> Self {
        self.always_visible = always_visible;
        self
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            text_color: css::BLACK,
            fill: Some(css::WHITE),
            point_size: 0.0,
            always_visible: true,
        }
    }
}

/// A dimension: a line between the endpoints and a value label at its center.
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionStyle {
    /// The measurement line.
    pub line: LineStyle,
    /// The value label.
    pub label: LabelStyle,
    /// Digits after the decimal point.
    pub decimals: usize,
    /// Label text with a `{value}` placeholder.
    pub template: String,
}

impl DimensionStyle {
    /// Sets the line style.
    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// Sets the label style.
    pub fn with_label(mut self, label: LabelStyle) -> Self {
        self.label = label;
        self
    }

    /// Sets the number of decimals.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets the label template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Formats `value` through the template.
    pub fn format(&self, value: f64) -> String {
        let number = format!("{value:.prec$}", prec = self.decimals);
        self.template.replace("{value}", &number)
    }
}

impl Default for DimensionStyle {
    fn default() -> Self {
        Self {
            line: LineStyle::new(css::BLACK, 2.0),
            label: LabelStyle::default(),
            decimals: 3,
            template: String::from("{value}"),
        }
    }
}

/// Arrow appearance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle3 {
    /// Arrow color.
    pub color: Color,
    /// Shaft radius as a fraction of the arrow length.
    pub shaft_radius: f64,
    /// Tip length as a fraction of the arrow length.
    pub tip_length: f64,
    /// Tip radius as a fraction of the arrow length.
    pub tip_radius: f64,
}

impl ArrowStyle3 {
    /// Default proportions in the given color.
    pub fn colored(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the shaft radius.
    pub fn with_shaft_radius(mut self, radius: f64) -> Self {
        self.shaft_radius = radius;
        self
    }

    /// Sets the tip length and radius.
    pub fn with_tip(mut self, length: f64, radius: f64) -> Self {
        self.tip_length = length;
        self.tip_radius = radius;
        self
    }
}

impl Default for ArrowStyle3 {
    fn default() -> Self {
        Self {
            color: css::BLACK,
            shaft_radius: 0.05,
            tip_length: 0.25,
            tip_radius: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_pass_through_unset_colors() {
        let style = MeshStyle::default().with_extremes((None, Some(css::DARK_RED)));
        assert_eq!(style.below_color, None);
        assert_eq!(style.above_color, Some(css::DARK_RED));

        let cleared = style.with_extremes((Some(css::MAGENTA), None));
        assert_eq!(cleared.below_color, Some(css::MAGENTA));
        assert_eq!(cleared.above_color, None, "an unset extreme clears the color");
    }

    #[test]
    fn dimension_template_formats_value() {
        let style = DimensionStyle::default()
            .with_decimals(2)
            .with_template("L = {value}");
        assert_eq!(style.format(12.345_6), "L = 12.35");
    }
}
