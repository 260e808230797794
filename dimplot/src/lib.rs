// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotting helpers for engineering geometry.
//!
//! The 2D and 3D halves are separate crates behind cargo features:
//! - `plot2d` (default): [`plot2d`], re-exporting `dimplot_axes`.
//! - `plot3d` (default): [`plot3d`], re-exporting `dimplot_scene3`.
//!
//! Code that must adapt to either half being absent can check [`HAS_PLOT2D`] and
//! [`HAS_PLOT3D`].

/// Whether the 2D helpers were compiled in.
pub const HAS_PLOT2D: bool = cfg!(feature = "plot2d");

/// Whether the 3D helpers were compiled in.
pub const HAS_PLOT3D: bool = cfg!(feature = "plot3d");

#[cfg(feature = "plot2d")]
pub use dimplot_axes as plot2d;

#[cfg(feature = "plot3d")]
pub use dimplot_scene3 as plot3d;

#[cfg(feature = "plot2d")]
pub use dimplot_axes::{AxesHelper, AxesOptions, Canvas, CanvasConfig, PlotSurface};

#[cfg(feature = "plot3d")]
pub use dimplot_scene3::{Plotter3, PlotterHelper, Scene3};

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "plot2d")]
    #[test]
    fn plot2d_helpers_are_reachable() {
        let mut canvas = Canvas::new(CanvasConfig::default());
        AxesHelper::new(&mut canvas, AxesOptions::default());
        assert_eq!(canvas.aspect(), plot2d::Aspect::EqualDataLim);
    }

    #[cfg(feature = "plot3d")]
    #[test]
    fn plot3d_helpers_are_reachable() {
        let mut scene = Scene3::new();
        PlotterHelper::new(&mut scene).coordinate_frame(
            &plot3d::Iso3::IDENTITY,
            1.0,
            plot3d::ActorTag::default(),
        );
        assert_eq!(scene.len(), 3);
    }
}
