// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funnel chart descriptions: labelled data plus surface size and direction.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::dataset::{Dataset, Values};
use crate::direction::{Direction, Size};
use crate::error::InvalidInput;
use crate::layout::FunnelLayout;

/// One labelled step of a simple funnel.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Step title.
    pub label: String,
    /// Step magnitude.
    pub value: f64,
}

impl Step {
    /// Creates a step.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Funnel values with their step and sub-segment labels.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelData {
    /// Raw values, one number or one row per step.
    pub values: Values,
    /// Step titles. Missing titles render as empty strings.
    pub labels: Vec<String>,
    /// Sub-segment titles for segmented funnels (one per segment).
    pub sub_labels: Vec<String>,
}

impl FunnelData {
    /// Creates unlabelled funnel data.
    pub fn new(values: impl Into<Values>) -> Self {
        Self {
            values: values.into(),
            labels: Vec::new(),
            sub_labels: Vec::new(),
        }
    }

    /// Creates a simple funnel from labelled steps.
    pub fn from_steps(steps: impl IntoIterator<Item = Step>) -> Self {
        let (labels, values): (Vec<_>, Vec<_>) =
            steps.into_iter().map(|s| (s.label, s.value)).unzip();
        Self {
            values: Values::Flat(values),
            labels,
            sub_labels: Vec::new(),
        }
    }

    /// Sets the step titles.
    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the sub-segment titles.
    pub fn with_sub_labels<S: Into<String>>(
        mut self,
        sub_labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.sub_labels = sub_labels.into_iter().map(Into::into).collect();
        self
    }

    /// Title of step `i`, or `""` when none was given.
    pub fn label(&self, i: usize) -> &str {
        self.labels.get(i).map_or("", String::as_str)
    }

    /// Validates the values.
    pub fn dataset(&self) -> Result<Dataset, InvalidInput> {
        Dataset::new(self.values.clone())
    }
}

/// A funnel chart: data, drawing surface size and step direction.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelSpec {
    /// Labelled values.
    pub data: FunnelData,
    /// Drawing surface size.
    pub size: Size,
    /// Axis the steps progress along.
    pub direction: Direction,
}

impl FunnelSpec {
    /// Creates a horizontal funnel.
    pub fn new(data: FunnelData, size: Size) -> Self {
        Self {
            data,
            size,
            direction: Direction::Horizontal,
        }
    }

    /// Sets the step direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the drawing surface size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Computes the funnel layout for this chart's size and direction.
    pub fn layout(&self) -> Result<FunnelLayout, InvalidInput> {
        self.layout_dataset(&self.data.dataset()?)
    }

    /// Computes the layout of an already validated dataset for this chart's size and direction.
    ///
    /// Use this when the caller also needs the [`Dataset`], so the values are validated once.
    pub fn layout_dataset(&self, dataset: &Dataset) -> Result<FunnelLayout, InvalidInput> {
        let (main, cross) = self.direction.axis_lengths(self.size);
        FunnelLayout::compute(dataset, main, cross)
    }
}
