// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Band fills: a solid color or a linear gradient.

use peniko::Color;

use crate::error::RenderError;

/// The default funnel color (`#FFB178`).
pub const DEFAULT_FUNNEL_COLOR: Color = Color::from_rgba8(0xFF, 0xB1, 0x78, 0xFF);

/// Axis a gradient fill runs along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientDirection {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// How a funnel band is painted.
#[derive(Clone, Debug, PartialEq)]
pub enum FunnelFill {
    /// One color for fill and stroke.
    Solid(Color),
    /// Evenly spaced color stops.
    Gradient {
        /// Stop colors, first to last.
        colors: Vec<Color>,
        /// Axis the gradient runs along.
        direction: GradientDirection,
    },
}

impl Default for FunnelFill {
    fn default() -> Self {
        Self::Solid(DEFAULT_FUNNEL_COLOR)
    }
}

impl FunnelFill {
    /// A horizontal gradient through `colors`.
    pub fn gradient(colors: impl IntoIterator<Item = Color>) -> Self {
        Self::Gradient {
            colors: colors.into_iter().collect(),
            direction: GradientDirection::Horizontal,
        }
    }

    /// Sets the gradient direction. Solid fills are returned unchanged.
    pub fn with_gradient_direction(self, direction: GradientDirection) -> Self {
        match self {
            Self::Gradient { colors, .. } => Self::Gradient { colors, direction },
            solid @ Self::Solid(_) => solid,
        }
    }

    /// Collapses single-color gradients to solid fills and rejects empty gradients.
    pub(crate) fn resolve(&self) -> Result<Self, RenderError> {
        match self {
            Self::Gradient { colors, .. } if colors.is_empty() => Err(RenderError::EmptyGradient),
            Self::Gradient { colors, .. } if colors.len() == 1 => Ok(Self::Solid(colors[0])),
            other => Ok(other.clone()),
        }
    }
}

/// Gradient stop offsets in percent: `round(100 * i / (n - 1))`.
pub(crate) fn stop_offsets(n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![0.0; n];
    }
    let last = (n - 1) as f64;
    (0..n).map(|i| (100.0 * i as f64 / last).round()).collect()
}

/// SVG paint value and optional opacity for a color.
pub(crate) fn svg_color(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}
