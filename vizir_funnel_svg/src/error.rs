// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vizir_funnel::InvalidInput;

/// Errors returned when rendering a funnel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The funnel data cannot be laid out.
    #[error("cannot lay out funnel: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// A gradient fill was configured without any colors.
    #[error("gradient fill has no colors")]
    EmptyGradient,
}
