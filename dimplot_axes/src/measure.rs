// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for sizing text boxes.
//!
//! Shaping is left to the renderer. Text boxes only need rough bounds, so renderers pass a
//! measurer here and get back a rectangle around anchored text.

use kurbo::{Point, Rect};

use crate::style::{TextAnchor, TextBaseline};

/// A minimal text measurement interface.
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same units as `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

/// Bounds of a single line of text anchored at `pos`, in a y-down device space.
pub fn text_bounds(
    measurer: &dyn TextMeasurer,
    text: &str,
    pos: Point,
    font_size: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
) -> Rect {
    let (width, height) = measurer.measure(text, font_size);
    let (x0, x1) = match anchor {
        TextAnchor::Start => (pos.x, pos.x + width),
        TextAnchor::Middle => (pos.x - width / 2.0, pos.x + width / 2.0),
        TextAnchor::End => (pos.x - width, pos.x),
    };
    let (y0, y1) = match baseline {
        TextBaseline::Top => (pos.y, pos.y + height),
        TextBaseline::Middle => (pos.y - height / 2.0, pos.y + height / 2.0),
        // Roughly 0.8em above the baseline and 0.2em below it.
        TextBaseline::Alphabetic => (pos.y - 0.8 * height, pos.y + 0.2 * height),
        TextBaseline::Bottom => (pos.y - height, pos.y),
    };
    Rect::new(x0, y0, x1, y1)
}
