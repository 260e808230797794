// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converting typographic sizes into data units.

use crate::limits::{AxisLimits, PixelExtent, data_scale};

/// Typographic points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Converts a size in points to device pixels at `dpi`.
pub fn points_to_pixels(points: f64, dpi: f64) -> f64 {
    points / POINTS_PER_INCH * dpi
}

/// Returns the height of a `points`-sized font expressed in data units.
///
/// The conversion uses the smaller of the two axis scales, so text sized this way is never larger
/// than intended along the more compressed axis.
pub fn font_height(points: f64, dpi: f64, limits: &AxisLimits, extent: PixelExtent) -> f64 {
    points_to_pixels(points, dpi) / data_scale(limits, extent).effective()
}
