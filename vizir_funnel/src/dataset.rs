// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funnel datasets.
//!
//! A funnel is either *simple* (one value per step) or *segmented* (a row of sub-values per
//! step, stacked across the cross axis). The shape is decided once, when a [`Dataset`] is built
//! from raw [`Values`], and every geometry operation matches on the resulting variant.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::InvalidInput;

/// Raw funnel values as supplied by a caller, before validation.
#[derive(Clone, Debug, PartialEq)]
pub enum Values {
    /// One number per step.
    Flat(Vec<f64>),
    /// One row of sub-values per step.
    Nested(Vec<Vec<f64>>),
}

impl From<Vec<f64>> for Values {
    fn from(values: Vec<f64>) -> Self {
        Self::Flat(values)
    }
}

impl From<Vec<Vec<f64>>> for Values {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::Nested(rows)
    }
}

impl<const N: usize> From<[f64; N]> for Values {
    fn from(values: [f64; N]) -> Self {
        Self::Flat(values.into())
    }
}

impl<const N: usize, const M: usize> From<[[f64; M]; N]> for Values {
    fn from(rows: [[f64; M]; N]) -> Self {
        Self::Nested(rows.iter().map(|row| row.to_vec()).collect())
    }
}

/// The classified shape of a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetShape {
    /// One value per step.
    Simple {
        /// Number of steps (`N`).
        steps: usize,
    },
    /// A row of `segments` sub-values per step.
    Segmented {
        /// Number of steps (`N`).
        steps: usize,
        /// Number of sub-segments per step (`M`).
        segments: usize,
    },
}

impl DatasetShape {
    /// Number of steps (`N`).
    pub fn steps(self) -> usize {
        match self {
            Self::Simple { steps } | Self::Segmented { steps, .. } => steps,
        }
    }

    /// Number of sub-segments per step, or `None` for simple datasets.
    pub fn segments(self) -> Option<usize> {
        match self {
            Self::Simple { .. } => None,
            Self::Segmented { segments, .. } => Some(segments),
        }
    }
}

/// Classifies raw values as simple or segmented.
///
/// `N` is the number of steps; for nested values `M` is taken from the first row. Rows are not
/// compared against each other here (see [`Dataset::new`] for full validation).
pub fn classify(values: &Values) -> Result<DatasetShape, InvalidInput> {
    match values {
        Values::Flat(v) => classify_flat(v),
        Values::Nested(rows) => classify_rows(rows),
    }
}

fn classify_flat(values: &[f64]) -> Result<DatasetShape, InvalidInput> {
    if values.is_empty() {
        return Err(InvalidInput::EmptyDataset);
    }
    Ok(DatasetShape::Simple {
        steps: values.len(),
    })
}

fn classify_rows(rows: &[Vec<f64>]) -> Result<DatasetShape, InvalidInput> {
    let Some(first) = rows.first() else {
        return Err(InvalidInput::EmptyDataset);
    };
    if first.is_empty() {
        return Err(InvalidInput::EmptyRow);
    }
    Ok(DatasetShape::Segmented {
        steps: rows.len(),
        segments: first.len(),
    })
}

/// A validated row-major matrix of sub-values (`N` rows of `M` columns).
#[derive(Clone, Debug, PartialEq)]
pub struct Segments {
    data: Vec<f64>,
    segments: usize,
}

impl Segments {
    /// Builds a matrix from rows, which must be non-empty and of equal length.
    pub fn new(rows: &[Vec<f64>]) -> Result<Self, InvalidInput> {
        let shape = classify_rows(rows)?;
        let segments = shape.segments().unwrap_or(1);

        let mut data = Vec::with_capacity(rows.len() * segments);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != segments {
                return Err(InvalidInput::RaggedRow {
                    row,
                    expected: segments,
                    found: values.len(),
                });
            }
            for (segment, &v) in values.iter().enumerate() {
                check_value(v, row, segment)?;
            }
            data.extend_from_slice(values);
        }

        Ok(Self { data, segments })
    }

    /// Number of rows (`N`).
    pub fn step_count(&self) -> usize {
        self.data.len() / self.segments
    }

    /// Number of sub-segments per row (`M`).
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// Returns row `i`, if present.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows().nth(i)
    }

    /// Iterates over the rows in step order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.segments)
    }

    /// Sum of each row's sub-values.
    pub fn row_totals(&self) -> Vec<f64> {
        self.rows().map(|row| row.iter().sum()).collect()
    }
}

/// A validated funnel dataset.
#[derive(Clone, Debug, PartialEq)]
pub enum Dataset {
    /// One value per step.
    Simple(Vec<f64>),
    /// A row of sub-values per step.
    Segmented(Segments),
}

impl Dataset {
    /// Classifies and validates raw values.
    ///
    /// Rejects empty datasets, empty or ragged rows, and values that are negative or not finite.
    pub fn new(values: impl Into<Values>) -> Result<Self, InvalidInput> {
        match values.into() {
            Values::Flat(v) => Self::simple(v),
            Values::Nested(rows) => Self::segmented(&rows),
        }
    }

    /// Builds a simple dataset.
    pub fn simple(values: Vec<f64>) -> Result<Self, InvalidInput> {
        classify_flat(&values)?;
        for (row, &v) in values.iter().enumerate() {
            check_value(v, row, 0)?;
        }
        Ok(Self::Simple(values))
    }

    /// Builds a segmented dataset.
    pub fn segmented(rows: &[Vec<f64>]) -> Result<Self, InvalidInput> {
        Segments::new(rows).map(Self::Segmented)
    }

    /// Returns the classified shape.
    pub fn shape(&self) -> DatasetShape {
        match self {
            Self::Simple(values) => DatasetShape::Simple {
                steps: values.len(),
            },
            Self::Segmented(segments) => DatasetShape::Segmented {
                steps: segments.step_count(),
                segments: segments.segment_count(),
            },
        }
    }

    /// Number of steps (`N`).
    pub fn step_count(&self) -> usize {
        self.shape().steps()
    }

    /// Returns `true` for segmented (two-dimensional) datasets.
    pub fn is_segmented(&self) -> bool {
        matches!(self, Self::Segmented(_))
    }

    /// The per-step magnitudes: the values themselves, or the row totals when segmented.
    pub fn step_totals(&self) -> Vec<f64> {
        match self {
            Self::Simple(values) => values.clone(),
            Self::Segmented(segments) => segments.row_totals(),
        }
    }
}

fn check_value(v: f64, row: usize, segment: usize) -> Result<(), InvalidInput> {
    if !v.is_finite() {
        return Err(InvalidInput::NonFiniteValue { row, segment });
    }
    if v < 0.0 {
        return Err(InvalidInput::NegativeValue { row, segment });
    }
    Ok(())
}
