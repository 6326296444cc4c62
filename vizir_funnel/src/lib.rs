// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funnel chart geometry.
//!
//! This crate turns funnel values into the point sequences that outline a funnel chart:
//! - a [`Dataset`] is either simple (one value per step) or segmented (a row of stacked
//!   sub-values per step), classified once when it is built,
//! - [`FunnelLayout::compute`] derives evenly spaced main-axis points, one cross-axis point
//!   sequence per boundary, and per-step label percentages,
//! - [`Direction`] maps the logical main/cross axes onto `x`/`y`, and [`FunnelLayout`] can emit
//!   `kurbo` paths for boundaries and the bands between them.
//!
//! Everything is pure and allocation-only; rendering, colors and label text live downstream
//! (see `vizir_funnel_svg`).

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod dataset;
mod direction;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod layout;
#[cfg(test)]
mod layout_tests;
mod path;
mod round;
mod spec;

pub use dataset::{Dataset, DatasetShape, Segments, Values, classify};
pub use direction::{Direction, Size};
pub use error::InvalidInput;
pub use geometry::{
    cross_axis_point_sets, intra_row_percentages, main_axis_points, row_percentages,
};
pub use layout::FunnelLayout;
pub use round::round1;
pub use spec::{FunnelData, FunnelSpec, Step};
