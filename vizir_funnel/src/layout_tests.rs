// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use crate::{Dataset, FunnelLayout, InvalidInput};

const EPS: f64 = 0.1 + 1e-9;

fn datasets() -> Vec<Dataset> {
    vec![
        Dataset::new([100.0, 60.0, 30.0]).unwrap(),
        Dataset::new([7.0]).unwrap(),
        Dataset::new([3.0, 9.0, 4.5, 0.0, 12.25]).unwrap(),
        Dataset::new([1200.0, 830.0, 830.0, 112.0]).unwrap(),
        Dataset::new([[50.0, 50.0], [30.0, 30.0]]).unwrap(),
        Dataset::new([[20.0, 30.0, 50.0], [10.0, 10.0, 20.0]]).unwrap(),
        Dataset::new([
            [1.0, 2.0, 3.0, 4.0],
            [4.0, 3.0, 2.0, 1.0],
            [0.5, 0.0, 0.0, 0.25],
        ])
        .unwrap(),
    ]
}

fn layouts() -> Vec<(Dataset, FunnelLayout)> {
    let sizes = [(300.0, 100.0), (640.0, 333.0), (17.0, 1.0)];
    let mut out = Vec::new();
    for dataset in datasets() {
        for (main, cross) in sizes {
            let layout = FunnelLayout::compute(&dataset, main, cross)
                .expect("sample datasets have a positive maximum");
            out.push((dataset.clone(), layout));
        }
    }
    out
}

#[test]
fn main_axis_spans_the_axis_monotonically() {
    for (dataset, layout) in layouts() {
        let points = &layout.main_axis_points;
        assert_eq!(points.len(), dataset.step_count() + 1);
        assert_eq!(points[0], 0.0);
        let last = points[points.len() - 1];
        assert!(
            (last - layout.main_axis_length).abs() <= EPS,
            "last point {last} vs axis {}",
            layout.main_axis_length
        );
        assert!(
            points.windows(2).all(|w| w[0] <= w[1]),
            "points not sorted: {points:?}"
        );
    }
}

#[test]
fn boundary_counts_and_lengths() {
    for (dataset, layout) in layouts() {
        let expected = dataset.shape().segments().map_or(2, |m| m + 1);
        assert_eq!(layout.boundary_count(), expected);
        for set in &layout.cross_axis_point_sets {
            assert_eq!(set.len(), dataset.step_count() + 1);
        }
        assert_eq!(layout.row_percentages.len(), dataset.step_count());
    }
}

#[test]
fn last_boundary_mirrors_the_first() {
    for (_, layout) in layouts() {
        let first = &layout.cross_axis_point_sets[0];
        let last = &layout.cross_axis_point_sets[layout.boundary_count() - 1];
        for (k, (&a, &b)) in first.iter().zip(last).enumerate() {
            assert_eq!(b, layout.cross_axis_length - a, "point {k}");
        }
    }
}

#[test]
fn boundaries_stay_on_the_cross_axis() {
    for (_, layout) in layouts() {
        for set in &layout.cross_axis_point_sets {
            for &p in set {
                assert!(
                    p >= -EPS && p <= layout.cross_axis_length + EPS,
                    "{p} outside 0..={}",
                    layout.cross_axis_length
                );
            }
        }
    }
}

#[test]
fn largest_step_is_one_hundred_percent() {
    for (dataset, layout) in layouts() {
        let totals = dataset.step_totals();
        let (max_idx, _) = totals
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, &v)| if v > acc.1 { (i, v) } else { acc });
        assert!(
            (layout.row_percentages[max_idx] - 100.0).abs() <= EPS,
            "{:?}",
            layout.row_percentages
        );
        assert!(layout.row_percentages.iter().all(|&p| (0.0..=100.0).contains(&p)));
    }
}

#[test]
fn layouts_are_bit_identical_across_calls() {
    for (dataset, layout) in layouts() {
        let again =
            FunnelLayout::compute(&dataset, layout.main_axis_length, layout.cross_axis_length)
                .unwrap();
        let bits = |l: &FunnelLayout| -> Vec<u64> {
            l.main_axis_points
                .iter()
                .chain(l.cross_axis_point_sets.iter().flatten())
                .chain(&l.row_percentages)
                .map(|v| v.to_bits())
                .collect()
        };
        assert_eq!(bits(&layout), bits(&again));
    }
}

#[test]
fn single_step_funnel() {
    let dataset = Dataset::new([42.0]).unwrap();
    let layout = FunnelLayout::compute(&dataset, 250.0, 80.0).unwrap();
    assert_eq!(layout.main_axis_points, vec![0.0, 250.0]);
    assert_eq!(
        layout.cross_axis_point_sets,
        vec![vec![0.0, 0.0], vec![80.0, 80.0]]
    );
    assert_eq!(layout.row_percentages, vec![100.0]);
}

#[test]
fn simple_scenario() {
    let dataset = Dataset::new([100.0, 60.0, 30.0]).unwrap();
    let layout = FunnelLayout::compute(&dataset, 300.0, 100.0).unwrap();
    assert_eq!(layout.main_axis_points, vec![0.0, 100.0, 200.0, 300.0]);
    assert_eq!(layout.row_percentages, vec![100.0, 60.0, 30.0]);
    assert_eq!(layout.cross_axis_point_sets[0], vec![0.0, 20.0, 35.0, 35.0]);
    assert_eq!(layout.cross_axis_point_sets[1], vec![100.0, 80.0, 65.0, 65.0]);
    assert_eq!(layout.step_center(1), Some(150.0));
    assert_eq!(layout.step_center(3), None);
}

#[test]
fn segmented_scenario() {
    let dataset = Dataset::new([[50.0, 50.0], [30.0, 30.0]]).unwrap();
    let layout = FunnelLayout::compute(&dataset, 200.0, 100.0).unwrap();
    assert_eq!(layout.row_percentages, vec![100.0, 60.0]);

    let simple = Dataset::new([100.0, 60.0]).unwrap();
    let simple = FunnelLayout::compute(&simple, 200.0, 100.0).unwrap();
    assert_eq!(layout.cross_axis_point_sets[0], simple.cross_axis_point_sets[0]);
    assert_eq!(layout.cross_axis_point_sets[2], simple.cross_axis_point_sets[1]);
    assert_eq!(layout.cross_axis_point_sets[1], vec![50.0, 50.0, 50.0]);
}

#[test]
fn all_zero_dataset_is_invalid() {
    let dataset = Dataset::new([0.0, 0.0, 0.0]).unwrap();
    assert_eq!(
        FunnelLayout::compute(&dataset, 300.0, 100.0),
        Err(InvalidInput::ZeroMaximum)
    );
}
