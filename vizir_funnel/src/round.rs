// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Rounds `x` to one decimal place, ties away from zero.
///
/// Every coordinate and percentage produced by this crate goes through this function, so
/// two layouts computed from the same input compare bit-identical.
#[inline]
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::round1;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round1(33.333_333), 33.3);
        assert_eq!(round1(66.666_666), 66.7);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(300.0), 300.0);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(12.5), 12.5);
    }
}
