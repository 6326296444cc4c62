// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step label text.

use vizir_funnel::{Dataset, FunnelData, FunnelLayout};

/// The text shown for one funnel step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepLabel {
    /// Step title (may be empty).
    pub title: String,
    /// Step magnitude, see [`format_number`].
    pub value: String,
    /// Percentage of the largest step, omitted for the largest step itself.
    pub percentage: Option<String>,
}

/// Formats a value as a whole number with `,` thousands separators.
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a step percentage, or `None` for the `100%` step.
pub fn percentage_label(percentage: f64) -> Option<String> {
    (percentage != 100.0).then(|| format!("{percentage}%"))
}

/// Labels for every step of a computed funnel.
///
/// Segmented steps show their row total.
pub fn step_labels(data: &FunnelData, dataset: &Dataset, layout: &FunnelLayout) -> Vec<StepLabel> {
    dataset
        .step_totals()
        .into_iter()
        .zip(&layout.row_percentages)
        .enumerate()
        .map(|(i, (total, &percentage))| StepLabel {
            title: data.label(i).to_string(),
            value: format_number(total),
            percentage: percentage_label(percentage),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_get_thousands_separators() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(12_345.6), "12,346");
        assert_eq!(format_number(-4_500.0), "-4,500");
        assert_eq!(format_number(-0.2), "0");
    }

    #[test]
    fn full_percentage_is_hidden() {
        assert_eq!(percentage_label(100.0), None);
        assert_eq!(percentage_label(60.0).as_deref(), Some("60%"));
        assert_eq!(percentage_label(33.3).as_deref(), Some("33.3%"));
    }

    #[test]
    fn segmented_labels_use_row_totals() {
        let data = FunnelData::new([[1500.0, 500.0], [600.0, 400.0]])
            .with_labels(["Visits", "Carts"]);
        let dataset = data.dataset().unwrap();
        let layout = FunnelLayout::compute(&dataset, 200.0, 100.0).unwrap();
        let labels = step_labels(&data, &dataset, &layout);
        assert_eq!(
            labels,
            vec![
                StepLabel {
                    title: "Visits".into(),
                    value: "2,000".into(),
                    percentage: None,
                },
                StepLabel {
                    title: "Carts".into(),
                    value: "1,000".into(),
                    percentage: Some("50%".into()),
                },
            ]
        );
    }
}
