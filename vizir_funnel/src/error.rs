// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for funnel datasets and geometry.

/// Input that cannot be turned into a funnel layout.
///
/// Every geometry operation either returns a complete result or one of these; there are no
/// partial layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// The dataset has no steps, so the main axis cannot be divided.
    #[error("funnel dataset has no steps")]
    EmptyDataset,
    /// The first row of a segmented dataset has no sub-segments.
    #[error("segmented funnel dataset has an empty first row")]
    EmptyRow,
    /// A segmented row does not have the same length as the first row.
    #[error("segmented row {row} has {found} sub-values, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A value is NaN or infinite.
    #[error("value at step {row}, segment {segment} is not finite")]
    NonFiniteValue {
        /// Step index.
        row: usize,
        /// Sub-segment index (0 for simple datasets).
        segment: usize,
    },
    /// A value is negative.
    #[error("value at step {row}, segment {segment} is negative")]
    NegativeValue {
        /// Step index.
        row: usize,
        /// Sub-segment index (0 for simple datasets).
        segment: usize,
    },
    /// Every step value (or row total) is zero.
    #[error("all funnel values are zero")]
    ZeroMaximum,
    /// A segmented row sums to zero, so it cannot be split into sub-segments.
    #[error("segmented row {row} sums to zero")]
    ZeroRowTotal {
        /// Index of the offending row.
        row: usize,
    },
}
