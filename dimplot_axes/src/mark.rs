// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The marks a plot surface records.
//!
//! Mark geometry is in data units. Renderers map it into pixels using the surface's view limits
//! (see [`Canvas::data_to_pixel`](crate::Canvas::data_to_pixel)).

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

use crate::style::{ArrowStyle, StrokeStyle, TextAnchor, TextBaseline, TextBox};

/// Identity of a mark within one surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

/// A filled and/or stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Path in data units.
    pub path: BezPath,
    /// Interior paint, if filled.
    pub fill: Option<Brush>,
    /// Outline, if stroked.
    pub stroke: Option<StrokeStyle>,
}

/// A text label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in data units.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in points.
    pub font_size: f64,
    /// Text color.
    pub color: Color,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Optional box drawn behind the text.
    pub text_box: Option<TextBox>,
}

/// A straight arrow from `start` to `end`, with its head at `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowMark {
    /// Tail position in data units.
    pub start: Point,
    /// Tip position in data units.
    pub end: Point,
    /// Arrow appearance.
    pub style: ArrowStyle,
}

/// Mark contents.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A path.
    Path(PathMark),
    /// A text label.
    Text(TextMark),
    /// An arrow.
    Arrow(ArrowMark),
}

impl MarkPayload {
    /// Data-space bounds used for autoscaling.
    ///
    /// Text does not participate in autoscaling, since its extent depends on the final scale.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
            Self::Arrow(a) => Some(Rect::from_points(a.start, a.end)),
            Self::Text(_) => None,
        }
    }

    /// A short name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Path(_) => "path",
            Self::Text(_) => "text",
            Self::Arrow(_) => "arrow",
        }
    }
}

/// A recorded mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id assigned by the surface.
    pub id: MarkId,
    /// Render order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Contents.
    pub payload: MarkPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_has_no_autoscale_bounds() {
        let t = MarkPayload::Text(TextMark {
            pos: Point::new(3.0, 4.0),
            text: String::from("x"),
            font_size: 10.0,
            color: peniko::color::palette::css::BLACK,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            text_box: None,
        });
        assert!(t.bounds().is_none(), "text should not affect autoscale");
    }

    #[test]
    fn arrow_bounds_cover_both_ends() {
        let a = MarkPayload::Arrow(ArrowMark {
            start: Point::new(4.0, -1.0),
            end: Point::new(1.0, 2.0),
            style: ArrowStyle::default(),
        });
        assert_eq!(a.bounds(), Some(Rect::new(1.0, -1.0, 4.0, 2.0)));
    }

    #[test]
    fn empty_path_has_no_bounds() {
        let p = MarkPayload::Path(PathMark {
            path: BezPath::new(),
            fill: None,
            stroke: None,
        });
        assert!(p.bounds().is_none(), "empty path should be skipped");
    }
}
