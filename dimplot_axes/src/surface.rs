// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 2D plotting surface the helpers draw into.

use crate::limits::{AxisLimits, PixelExtent};
use crate::mark::{MarkId, MarkPayload};

/// How a surface reconciles its limits with its pixel aspect ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Aspect {
    /// Limits are used as given; one data unit may span different pixel lengths per axis.
    #[default]
    Auto,
    /// One data unit spans the same pixel length on both axes; the data limits are widened
    /// to make that hold.
    EqualDataLim,
}

/// A mutable 2D plotting surface: limits, pixel geometry, and a mark sink.
///
/// Helpers borrow a surface mutably for the duration of a call and keep no state of their own.
pub trait PlotSurface {
    /// Current x limits in data units.
    fn xlim(&self) -> (f64, f64);

    /// Current y limits in data units.
    fn ylim(&self) -> (f64, f64);

    /// Sets the x limits.
    fn set_xlim(&mut self, x0: f64, x1: f64);

    /// Sets the y limits.
    fn set_ylim(&mut self, y0: f64, y1: f64);

    /// Size of the drawing area in device pixels.
    fn pixel_extent(&self) -> PixelExtent;

    /// Device dots per inch.
    fn dpi(&self) -> f64;

    /// Sets the aspect mode.
    fn set_aspect(&mut self, aspect: Aspect);

    /// Shows or hides axis decorations (spines, ticks, labels).
    fn set_axis_visible(&mut self, visible: bool);

    /// Records a mark and returns its id.
    fn add_mark(&mut self, payload: MarkPayload, z_index: i32) -> MarkId;

    /// Current limits of both axes.
    fn limits(&self) -> AxisLimits {
        AxisLimits::new(self.xlim(), self.ylim())
    }
}
