// Copyright 2025 the Dimplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default z-order for helper-generated marks.
//!
//! Renderers sort by `(z_index, MarkId)`, so marks sharing a layer keep insertion order.

/// Filled patches (circles, filled curves).
pub const PATCHES: i32 = 0;
/// Stroked curves and extension lines.
pub const LINES: i32 = 10;
/// Arrows and leaders.
pub const ARROWS: i32 = 20;
/// Text labels and their boxes.
pub const LABELS: i32 = 30;
