// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funnel point generation.
//!
//! A funnel with `N` steps is drawn between `N + 1` main-axis points. Each boundary of the
//! funnel is a sequence of `N + 1` cross-axis coordinates, one per main-axis point:
//!
//! ```text
//! #0......
//!         ...#1.......
//!                     ...#2.............#3   boundary 0 (outer)
//! #0*********#1*******   #2*************#3   boundary 1 (stack)
//!                     ...#2.............#3   boundary 2 (mirror)
//!         ...#1.......
//! #0......
//! ```
//!
//! The last step has no taper: its trailing edge (`#3`) repeats the cross-axis coordinate of
//! its leading edge (`#2`).
//!
//! All functions here are pure. Outputs are rounded with [`round1`], so repeated calls with the
//! same input are bit-identical.

extern crate alloc;

use alloc::vec::Vec;

use crate::dataset::{Dataset, Segments};
use crate::error::InvalidInput;
use crate::round::round1;

/// Evenly spaced main-axis points: `round1(axis_length * i / steps)` for `i` in `0..=steps`.
///
/// The first point is `0` and the last is `axis_length` (up to rounding).
pub fn main_axis_points(axis_length: f64, steps: usize) -> Result<Vec<f64>, InvalidInput> {
    if steps == 0 {
        return Err(InvalidInput::EmptyDataset);
    }
    let n = steps as f64;
    Ok((0..=steps)
        .map(|i| round1(axis_length * i as f64 / n))
        .collect())
}

/// Per-step percentages relative to the largest step, for labels.
///
/// Segmented datasets use row totals. The largest step maps to `100`.
pub fn row_percentages(dataset: &Dataset) -> Result<Vec<f64>, InvalidInput> {
    let totals = dataset.step_totals();
    let max = positive_max(&totals)?;
    Ok(totals.iter().map(|&v| round1(v * 100.0 / max)).collect())
}

/// Share of each sub-value within its row, as a percentage.
///
/// These drive the stacking offsets of segmented funnels; they are not the label percentages.
pub fn intra_row_percentages(segments: &Segments) -> Result<Vec<Vec<f64>>, InvalidInput> {
    segments
        .rows()
        .enumerate()
        .map(|(row, values)| {
            let total: f64 = values.iter().sum();
            if total <= 0.0 {
                return Err(InvalidInput::ZeroRowTotal { row });
            }
            Ok(values
                .iter()
                .map(|&v| round1(v * 100.0 / total))
                .collect::<Vec<_>>())
        })
        .collect()
}

/// Cross-axis coordinates of every funnel boundary.
///
/// Boundaries are returned in a fixed order: the outer boundary first, then (for segmented
/// datasets) the `M - 1` stacked boundaries in increasing stack order, then the mirror of the
/// outer boundary. Band `i` lies between boundary `i` and boundary `i + 1`.
///
/// Simple datasets yield 2 boundaries, segmented datasets with `M` sub-segments yield `M + 1`.
/// Every boundary has `N + 1` entries.
pub fn cross_axis_point_sets(
    dataset: &Dataset,
    cross_axis_length: f64,
) -> Result<Vec<Vec<f64>>, InvalidInput> {
    let totals = dataset.step_totals();
    let steps = totals.len();
    if steps == 0 {
        return Err(InvalidInput::EmptyDataset);
    }
    let max = positive_max(&totals)?;
    let half = cross_axis_length / 2.0;

    let outer = boundary(steps, |k| round1((max - totals[k]) / max * half));
    let mirror: Vec<f64> = outer.iter().map(|&p| cross_axis_length - p).collect();

    let mut sets = match dataset {
        Dataset::Simple(_) => Vec::with_capacity(2),
        Dataset::Segmented(segments) => Vec::with_capacity(segments.segment_count() + 1),
    };
    sets.push(outer);

    if let Dataset::Segmented(segments) = dataset {
        let shares = intra_row_percentages(segments)?;
        for s in 1..segments.segment_count() {
            let outer = &sets[0];
            let prev = &sets[s - 1];
            let next = boundary(steps, |k| {
                let span = cross_axis_length - 2.0 * outer[k];
                round1(prev[k] + span * (shares[k][s - 1] / 100.0))
            });
            sets.push(next);
        }
    }

    sets.push(mirror);
    Ok(sets)
}

/// Builds an `N + 1` point boundary from a per-step coordinate, repeating the last step's
/// coordinate at the trailing edge.
fn boundary(steps: usize, point: impl Fn(usize) -> f64) -> Vec<f64> {
    (0..=steps).map(|k| point(k.min(steps - 1))).collect()
}

fn positive_max(values: &[f64]) -> Result<f64, InvalidInput> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        Ok(max)
    } else {
        Err(InvalidInput::ZeroMaximum)
    }
}
