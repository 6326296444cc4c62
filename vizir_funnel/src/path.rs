// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `kurbo` paths for funnel boundaries and bands.

use kurbo::{BezPath, Rect};

use crate::direction::Direction;
use crate::layout::FunnelLayout;

impl FunnelLayout {
    /// An open polyline through boundary `i`.
    ///
    /// Returns `None` if `i` is out of range.
    pub fn boundary_path(&self, i: usize, direction: Direction) -> Option<BezPath> {
        let cross = self.boundary(i)?;
        let mut p = BezPath::new();
        for (k, (&main, &cross)) in self.main_axis_points.iter().zip(cross).enumerate() {
            let pt = direction.point(main, cross);
            if k == 0 {
                p.move_to(pt);
            } else {
                p.line_to(pt);
            }
        }
        Some(p)
    }

    /// A closed polygon covering band `i`, the area between boundary `i` and boundary `i + 1`.
    ///
    /// The outline runs forward along boundary `i` and back along boundary `i + 1`.
    /// Returns `None` if `i` is not a band index.
    pub fn band_path(&self, i: usize, direction: Direction) -> Option<BezPath> {
        let near = self.boundary(i)?;
        let far = self.boundary(i + 1)?;
        let main = &self.main_axis_points;

        let mut p = BezPath::new();
        let mut forward = main.iter().zip(near);
        let (&m0, &c0) = forward.next()?;
        p.move_to(direction.point(m0, c0));
        for (&m, &c) in forward {
            p.line_to(direction.point(m, c));
        }
        for (&m, &c) in main.iter().zip(far).rev() {
            p.line_to(direction.point(m, c));
        }
        p.close_path();
        Some(p)
    }

    /// All band outlines, in stacking order.
    pub fn band_paths(&self, direction: Direction) -> impl Iterator<Item = BezPath> + '_ {
        (0..self.band_count()).filter_map(move |i| self.band_path(i, direction))
    }

    /// The drawing surface the layout was computed for.
    pub fn bounds(&self, direction: Direction) -> Rect {
        let size = direction.size(self.main_axis_length, self.cross_axis_length);
        Rect::new(0.0, 0.0, size.width, size.height)
    }
}
