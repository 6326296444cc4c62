// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The complete geometry of one funnel.

extern crate alloc;

use alloc::vec::Vec;

use crate::dataset::Dataset;
use crate::error::InvalidInput;
use crate::geometry::{cross_axis_point_sets, main_axis_points, row_percentages};

/// Computed funnel geometry, in logical (orientation-free) axis coordinates.
///
/// This is the hand-off to a renderer: pair `main_axis_points[k]` with
/// `cross_axis_point_sets[b][k]` to get the `k`-th vertex of boundary `b`.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelLayout {
    /// `N + 1` evenly spaced main-axis coordinates.
    pub main_axis_points: Vec<f64>,
    /// Boundaries in stacking order (outer, stacked, mirror), each with `N + 1` entries.
    pub cross_axis_point_sets: Vec<Vec<f64>>,
    /// Per-step label percentages (`N` entries), the largest step being `100`.
    pub row_percentages: Vec<f64>,
    /// Main-axis length the layout was computed for.
    pub main_axis_length: f64,
    /// Cross-axis length the layout was computed for.
    pub cross_axis_length: f64,
}

impl FunnelLayout {
    /// Computes the layout of `dataset` for the given axis lengths.
    ///
    /// Either every sequence is computed or an error is returned.
    pub fn compute(
        dataset: &Dataset,
        main_axis_length: f64,
        cross_axis_length: f64,
    ) -> Result<Self, InvalidInput> {
        let shape = dataset.shape();
        tracing::debug!(
            steps = shape.steps(),
            segments = ?shape.segments(),
            main_axis_length,
            cross_axis_length,
            "computing funnel layout"
        );

        let main_axis_points = main_axis_points(main_axis_length, shape.steps())?;
        let row_percentages = row_percentages(dataset)?;
        let cross_axis_point_sets = cross_axis_point_sets(dataset, cross_axis_length)?;

        tracing::debug!(
            boundaries = cross_axis_point_sets.len(),
            "funnel layout computed"
        );
        Ok(Self {
            main_axis_points,
            cross_axis_point_sets,
            row_percentages,
            main_axis_length,
            cross_axis_length,
        })
    }

    /// Number of funnel steps (`N`).
    pub fn step_count(&self) -> usize {
        self.row_percentages.len()
    }

    /// Number of boundaries (2 for simple funnels, `M + 1` for segmented ones).
    pub fn boundary_count(&self) -> usize {
        self.cross_axis_point_sets.len()
    }

    /// Number of filled bands between consecutive boundaries.
    pub fn band_count(&self) -> usize {
        self.boundary_count().saturating_sub(1)
    }

    /// Cross-axis coordinates of boundary `i`.
    pub fn boundary(&self, i: usize) -> Option<&[f64]> {
        self.cross_axis_point_sets.get(i).map(Vec::as_slice)
    }

    /// Main-axis midpoint of step `i`, where a label for that step is centered.
    pub fn step_center(&self, i: usize) -> Option<f64> {
        let start = *self.main_axis_points.get(i)?;
        let end = *self.main_axis_points.get(i + 1)?;
        Some((start + end) / 2.0)
    }
}
