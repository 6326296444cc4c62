// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping logical funnel axes onto scene coordinates.

use kurbo::Point;

/// A width/height pair for the funnel's drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene coordinate units.
    pub width: f64,
    /// Height in scene coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which scene axis the funnel steps progress along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Steps progress left to right: main axis is `x`, cross axis is `y`.
    #[default]
    Horizontal,
    /// Steps progress top to bottom: main axis is `y`, cross axis is `x`.
    Vertical,
}

impl Direction {
    /// Returns `(main_axis_length, cross_axis_length)` for a surface of the given size.
    pub fn axis_lengths(self, size: Size) -> (f64, f64) {
        match self {
            Self::Horizontal => (size.width, size.height),
            Self::Vertical => (size.height, size.width),
        }
    }

    /// Maps a `(main, cross)` coordinate pair to a scene point.
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Inverse of [`Direction::axis_lengths`].
    pub fn size(self, main_axis_length: f64, cross_axis_length: f64) -> Size {
        let p = self.point(main_axis_length, cross_axis_length);
        Size::new(p.x, p.y)
    }
}
