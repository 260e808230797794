// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colormaps with explicit under, over, and bad colors.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;
use thiserror::Error;

/// Errors from building a [`Colormap`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ColormapError {
    /// No color stops were given.
    #[error("colormap needs at least one color stop")]
    Empty,
}

/// A linear colormap over evenly spaced stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    stops: Vec<Color>,
    under: Option<Color>,
    over: Option<Color>,
    bad: Option<Color>,
}

impl Colormap {
    /// Creates a colormap from stops spread evenly over `[0, 1]`.
    pub fn new(stops: impl Into<Vec<Color>>) -> Result<Self, ColormapError> {
        let stops = stops.into();
        if stops.is_empty() {
            return Err(ColormapError::Empty);
        }
        Ok(Self {
            stops,
            under: None,
            over: None,
            bad: None,
        })
    }

    /// The eight-band inspection map: dark blue through cyan, green, and yellow to red.
    ///
    /// Values below the tolerance band show magenta and values above it show dark red, so
    /// out-of-tolerance regions stand apart from the in-band ends of the scale.
    pub fn deviation() -> Self {
        const BANDS: [[u8; 3]; 8] = [
            [1, 0, 160],
            [1, 0, 255],
            [0, 254, 255],
            [0, 160, 0],
            [0, 254, 0],
            [255, 255, 0],
            [255, 128, 0],
            [255, 1, 0],
        ];
        Self {
            stops: BANDS
                .iter()
                .map(|[r, g, b]| {
                    Color::new([
                        f32::from(*r) / 256.0,
                        f32::from(*g) / 256.0,
                        f32::from(*b) / 256.0,
                        1.0,
                    ])
                })
                .collect(),
            under: Some(css::MAGENTA),
            over: Some(css::DARK_RED),
            bad: None,
        }
    }

    /// Black to white.
    pub fn gray() -> Self {
        Self {
            stops: alloc::vec![css::BLACK, css::WHITE],
            under: None,
            over: None,
            bad: None,
        }
    }

    /// Sets the color for values below 0.
    pub fn with_under(mut self, color: Color) -> Self {
        self.under = Some(color);
        self
    }

    /// Sets the color for values above 1.
    pub fn with_over(mut self, color: Color) -> Self {
        self.over = Some(color);
        self
    }

    /// Sets the color for NaN.
    pub fn with_bad(mut self, color: Color) -> Self {
        self.bad = Some(color);
        self
    }

    /// The color stops.
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// The explicitly set `(under, over)` colors.
    ///
    /// Unset extremes are `None`; [`sample`](Self::sample) still clamps to the end stops for them.
    pub fn extremes(&self) -> (Option<Color>, Option<Color>) {
        (self.under, self.over)
    }

    /// The color used for NaN. Transparent unless set.
    pub fn bad_color(&self) -> Color {
        self.bad.unwrap_or(css::TRANSPARENT)
    }

    /// Samples the map at normalized value `t`.
    pub fn sample(&self, t: f64) -> Color {
        if t.is_nan() {
            return self.bad_color();
        }
        if t < 0.0 {
            return self.under_color();
        }
        if t > 1.0 {
            return self.over_color();
        }
        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }
        let pos = t * last as f64;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "pos is in [0, last] and the fraction only needs f32 precision"
        )]
        let (i, frac) = {
            let i = (pos as usize).min(last - 1);
            (i, (pos - i as f64) as f32)
        };
        lerp(self.stops[i], self.stops[i + 1], frac)
    }

    fn under_color(&self) -> Color {
        self.under.unwrap_or(self.stops[0])
    }

    fn over_color(&self) -> Color {
        self.over.unwrap_or(self.stops[self.stops.len() - 1])
    }
}

fn lerp(a: Color, b: Color, t: f32) -> Color {
    let mut out = [0.0_f32; 4];
    for (o, (x, y)) in out.iter_mut().zip(a.components.into_iter().zip(b.components)) {
        *o = x + (y - x) * t;
    }
    Color::new(out)
}
