// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG rendering for `vizir_funnel` layouts.
//!
//! `vizir_funnel` produces orientation-free point sequences; this crate turns them into an SVG
//! document: one filled path per band, optional gradient definitions, and per-step labels
//! (title, formatted value and percentage of the largest step).

mod error;
mod fill;
mod label;
mod svg;

pub use error::RenderError;
pub use fill::{DEFAULT_FUNNEL_COLOR, FunnelFill, GradientDirection};
pub use label::{StepLabel, format_number, percentage_label, step_labels};
pub use svg::FunnelChart;
