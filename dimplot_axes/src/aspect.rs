// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect-fill axis rescaling.
//!
//! "Aspect fill" makes one data unit span the same number of pixels on both axes while using as
//! much of the drawing area as possible. The axis with more pixels per data unit is widened
//! around its own midpoint until its scale drops to match the other one; the other axis keeps its
//! limits. Nothing that was visible before the rescale is cropped.

use crate::limits::{AxisLimits, PixelExtent, data_scale};

/// Which axis an aspect-fill pass rewrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RescaledAxis {
    /// The x limits were recomputed; y limits are unchanged.
    X,
    /// The y limits were recomputed; x limits are unchanged.
    Y,
}

/// Result of [`aspect_fill`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectFill {
    /// The axis whose limits were recomputed.
    pub axis: RescaledAxis,
    /// The full set of limits after rescaling.
    ///
    /// Only the component named by `axis` differs from the input.
    pub limits: AxisLimits,
}

impl AspectFill {
    /// The recomputed `(min, max)` of the rescaled axis.
    pub fn rescaled_range(&self) -> (f64, f64) {
        match self.axis {
            RescaledAxis::X => self.limits.x,
            RescaledAxis::Y => self.limits.y,
        }
    }
}

/// Computes aspect-fill limits for the given limits and pixel extent.
///
/// Preconditions (not validated): `x1 > x0`, `y1 > y0`, and a positive extent. Limits must have
/// stabilized before this is called, since any later autoscaling undoes the result.
///
/// When the scales are exactly equal the y axis is the one recomputed, with a ratio of one.
pub fn aspect_fill(limits: &AxisLimits, extent: PixelExtent) -> AspectFill {
    let scale = data_scale(limits, extent);

    if scale.x > scale.y {
        let x_range = scale.x / scale.y * limits.x_span();
        let x_mid = limits.x_mid();
        log::debug!(
            target: "dimplot",
            "aspect fill: x rescaled (scale x={}, y={}), range {} -> {}",
            scale.x,
            scale.y,
            limits.x_span(),
            x_range
        );
        AspectFill {
            axis: RescaledAxis::X,
            limits: AxisLimits::new((x_mid - x_range / 2.0, x_mid + x_range / 2.0), limits.y),
        }
    } else {
        let y_range = scale.y / scale.x * limits.y_span();
        let y_mid = limits.y_mid();
        log::debug!(
            target: "dimplot",
            "aspect fill: y rescaled (scale x={}, y={}), range {} -> {}",
            scale.x,
            scale.y,
            limits.y_span(),
            y_range
        );
        AspectFill {
            axis: RescaledAxis::Y,
            limits: AxisLimits::new(limits.x, (y_mid - y_range / 2.0, y_mid + y_range / 2.0)),
        }
    }
}
