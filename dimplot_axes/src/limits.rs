// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis limits, pixel extents, and the pixels-per-data-unit scale derived from them.

/// The `(min, max)` data limits of both plot axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    /// X limits `(x0, x1)` in data units.
    pub x: (f64, f64),
    /// Y limits `(y0, y1)` in data units.
    pub y: (f64, f64),
}

impl AxisLimits {
    /// Creates limits from x and y ranges.
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    /// Width of the x range (`x1 - x0`).
    pub fn x_span(&self) -> f64 {
        self.x.1 - self.x.0
    }

    /// Height of the y range (`y1 - y0`).
    pub fn y_span(&self) -> f64 {
        self.y.1 - self.y.0
    }

    /// Midpoint of the x range.
    pub fn x_mid(&self) -> f64 {
        (self.x.0 + self.x.1) / 2.0
    }

    /// Midpoint of the y range.
    pub fn y_mid(&self) -> f64 {
        (self.y.0 + self.y.1) / 2.0
    }
}

/// The size of a rendered drawing area in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelExtent {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl PixelExtent {
    /// Creates a new extent.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixels per data unit, computed independently for each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataScale {
    /// Pixels per data unit along x.
    pub x: f64,
    /// Pixels per data unit along y.
    pub y: f64,
}

impl DataScale {
    /// The smaller of the two axis scales.
    ///
    /// Sizing things by this scale keeps them from being oversized on the more compressed axis.
    pub fn effective(&self) -> f64 {
        self.x.min(self.y)
    }
}

/// Computes pixels per data unit for both axes.
///
/// Degenerate (zero-width) limits are not rejected; they produce infinite scales.
pub fn data_scale(limits: &AxisLimits, extent: PixelExtent) -> DataScale {
    DataScale {
        x: extent.width / limits.x_span(),
        y: extent.height / limits.y_span(),
    }
}
