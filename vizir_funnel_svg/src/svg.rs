// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output for funnel charts.

use vizir_funnel::{Direction, FunnelLayout, FunnelSpec};

use crate::error::RenderError;
use crate::fill::{FunnelFill, GradientDirection, stop_offsets, svg_color};
use crate::label::{StepLabel, step_labels};

/// A funnel chart ready to be rendered to SVG.
#[derive(Clone, Debug)]
pub struct FunnelChart {
    /// Chart data, size and direction.
    pub spec: FunnelSpec,
    /// Band fills, cycled when there are more bands than fills.
    pub fills: Vec<FunnelFill>,
    /// Whether step labels are drawn.
    pub labels: bool,
    /// Font size of the step titles; values and percentages use the same size.
    pub font_size: f64,
    /// Label text color.
    pub label_color: peniko::Color,
}

impl FunnelChart {
    /// Creates a chart with the default solid fill and labels enabled.
    pub fn new(spec: FunnelSpec) -> Self {
        Self {
            spec,
            fills: vec![FunnelFill::default()],
            labels: true,
            font_size: 12.0,
            label_color: peniko::Color::BLACK,
        }
    }

    /// Uses one fill for every band.
    pub fn with_fill(mut self, fill: FunnelFill) -> Self {
        self.fills = vec![fill];
        self
    }

    /// Uses one fill per band, in stacking order.
    pub fn with_band_fills(mut self, fills: impl IntoIterator<Item = FunnelFill>) -> Self {
        self.fills = fills.into_iter().collect();
        if self.fills.is_empty() {
            self.fills.push(FunnelFill::default());
        }
        self
    }

    /// Enables or disables step labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Renders the chart as a standalone SVG document.
    pub fn to_svg_string(&self) -> Result<String, RenderError> {
        let dataset = self.spec.data.dataset()?;
        let layout = self.spec.layout_dataset(&dataset)?;
        let direction = self.spec.direction;
        let mut fills = self
            .fills
            .iter()
            .map(FunnelFill::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        if fills.is_empty() {
            fills.push(FunnelFill::default());
        }

        tracing::debug!(
            bands = layout.band_count(),
            steps = layout.step_count(),
            ?direction,
            "rendering funnel svg"
        );

        let size = self.spec.size;
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"class="vizir-funnel" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            size.width, size.height, size.width, size.height
        ));
        out.push('\n');

        if fills.iter().any(|f| matches!(f, FunnelFill::Gradient { .. })) {
            out.push_str("<defs>\n");
            for (i, fill) in fills.iter().enumerate() {
                if let FunnelFill::Gradient { colors, direction } = fill {
                    write_gradient(&mut out, i, colors, *direction);
                }
            }
            out.push_str("</defs>\n");
        }

        for (i, path) in layout.band_paths(direction).enumerate() {
            let fill_index = i % fills.len();
            out.push_str(&format!(
                r#"<path class="vizir-funnel__band band-{}" d="{}""#,
                i + 1,
                path.to_svg()
            ));
            match &fills[fill_index] {
                FunnelFill::Solid(color) => {
                    write_color_attr(&mut out, "fill", *color);
                    write_color_attr(&mut out, "stroke", *color);
                }
                FunnelFill::Gradient { .. } => {
                    let id = gradient_id(fill_index);
                    out.push_str(&format!(r#" fill="url(#{id})" stroke="url(#{id})""#));
                }
            }
            out.push_str("/>\n");
        }

        if self.labels {
            let labels = step_labels(&self.spec.data, &dataset, &layout);
            self.write_labels(&mut out, &layout, direction, &labels);
            if dataset.is_segmented() {
                self.write_legend(&mut out, &fills, layout.band_count());
            }
        }

        out.push_str("</svg>\n");
        Ok(out)
    }

    fn write_labels(
        &self,
        out: &mut String,
        layout: &FunnelLayout,
        direction: Direction,
        labels: &[StepLabel],
    ) {
        let line = self.font_size * 1.25;
        let cross = layout.cross_axis_length / 2.0;
        out.push_str(r#"<g class="vizir-funnel__labels">"#);
        out.push('\n');
        for (i, label) in labels.iter().enumerate() {
            let Some(main) = layout.step_center(i) else {
                continue;
            };
            let lines = [
                ("label__title", Some(label.title.as_str())),
                ("label__value", Some(label.value.as_str())),
                ("label__percentage", label.percentage.as_deref()),
            ];
            for (row, (class, text)) in lines.into_iter().enumerate() {
                let Some(text) = text.filter(|t| !t.is_empty()) else {
                    continue;
                };
                let pos = direction.point(main, cross);
                let y = pos.y + (row as f64 - 1.0) * line;
                out.push_str(&format!(
                    r#"<text class="{class} label-{}" x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle""#,
                    i + 1,
                    pos.x,
                    y,
                    self.font_size,
                ));
                write_color_attr(out, "fill", self.label_color);
                out.push('>');
                out.push_str(&escape_xml(text));
                out.push_str("</text>\n");
            }
        }
        out.push_str("</g>\n");
    }

    /// Swatches naming each sub-segment, stacked in the top-left corner.
    fn write_legend(&self, out: &mut String, fills: &[FunnelFill], bands: usize) {
        let sub_labels = &self.spec.data.sub_labels;
        if sub_labels.is_empty() {
            return;
        }
        let swatch = self.font_size;
        let pitch = self.font_size * 1.5;
        out.push_str(r#"<g class="vizir-funnel__legend">"#);
        out.push('\n');
        for (i, text) in sub_labels.iter().take(bands).enumerate() {
            let y = 4.0 + i as f64 * pitch;
            let color = match &fills[i % fills.len()] {
                FunnelFill::Solid(color) => *color,
                FunnelFill::Gradient { colors, .. } => colors[0],
            };
            out.push_str(&format!(
                r#"<rect x="4" y="{y}" width="{swatch}" height="{swatch}""#
            ));
            write_color_attr(out, "fill", color);
            out.push_str("/>\n");
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle""#,
                8.0 + swatch,
                y + swatch / 2.0,
                self.font_size,
            ));
            write_color_attr(out, "fill", self.label_color);
            out.push('>');
            out.push_str(&escape_xml(text));
            out.push_str("</text>\n");
        }
        out.push_str("</g>\n");
    }
}

fn gradient_id(index: usize) -> String {
    format!("funnelGradient-{}", index + 1)
}

fn write_gradient(
    out: &mut String,
    index: usize,
    colors: &[peniko::Color],
    direction: GradientDirection,
) {
    out.push_str(&format!(r#"<linearGradient id="{}""#, gradient_id(index)));
    if direction == GradientDirection::Vertical {
        out.push_str(r#" x1="0" x2="0" y1="0" y2="1""#);
    }
    out.push_str(">\n");
    for (&color, offset) in colors.iter().zip(stop_offsets(colors.len())) {
        let (value, opacity) = svg_color(color);
        out.push_str(&format!(r#"<stop offset="{offset}%" stop-color="{value}""#));
        if let Some(o) = opacity {
            out.push_str(&format!(r#" stop-opacity="{o}""#));
        }
        out.push_str("/>\n");
    }
    out.push_str("</linearGradient>\n");
}

fn write_color_attr(out: &mut String, name: &str, color: peniko::Color) {
    let (value, opacity) = svg_color(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use vizir_funnel::{FunnelData, InvalidInput, Size};

    use super::*;

    fn simple_chart() -> FunnelChart {
        let data = FunnelData::new([1200.0, 600.0, 300.0])
            .with_labels(["Visits", "Carts & checkouts", "Orders"]);
        FunnelChart::new(FunnelSpec::new(data, Size::new(300.0, 100.0)))
    }

    #[test]
    fn simple_funnel_has_one_band_and_labels() {
        let svg = simple_chart().to_svg_string().unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path ").count(), 1);
        assert!(svg.contains(r##"fill="#ffb178""##));
        assert!(svg.contains("Carts &amp; checkouts"));
        assert!(svg.contains("1,200"));
        assert!(svg.contains(">50%<"));
        assert!(!svg.contains(">100%<"), "largest step shows no percentage");
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn segmented_funnel_has_a_band_per_segment() {
        let data = FunnelData::new([[30.0, 20.0, 50.0], [10.0, 10.0, 20.0]]);
        let chart = FunnelChart::new(FunnelSpec::new(data, Size::new(200.0, 200.0)))
            .with_band_fills([
                FunnelFill::Solid(css::TOMATO),
                FunnelFill::Solid(css::GOLD),
                FunnelFill::Solid(css::TEAL),
            ])
            .with_labels(false);
        let svg = chart.to_svg_string().unwrap();
        assert_eq!(svg.matches("<path ").count(), 3);
        assert!(svg.contains("band-3"));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn cleared_fills_use_the_default_fill() {
        let data = FunnelData::new([[30.0, 70.0], [10.0, 30.0]]).with_sub_labels(["Direct", "Ads"]);
        let mut chart = FunnelChart::new(FunnelSpec::new(data, Size::new(200.0, 100.0)));
        chart.fills.clear();
        let svg = chart.to_svg_string().unwrap();
        assert_eq!(svg.matches("<path ").count(), 2);
        assert_eq!(svg.matches(r##"fill="#ffb178""##).count(), 4, "2 bands and 2 swatches");
    }

    #[test]
    fn sub_labels_render_a_legend() {
        let data = FunnelData::new([[30.0, 70.0], [10.0, 30.0]]).with_sub_labels(["Direct", "Ads"]);
        let chart = FunnelChart::new(FunnelSpec::new(data, Size::new(200.0, 100.0)))
            .with_band_fills([FunnelFill::Solid(css::TOMATO), FunnelFill::Solid(css::TEAL)]);
        let svg = chart.to_svg_string().unwrap();
        assert!(svg.contains("vizir-funnel__legend"));
        assert_eq!(svg.matches("<rect ").count(), 2);
        assert!(svg.contains(">Ads</text>"));
    }

    #[test]
    fn gradient_fill_emits_defs() {
        let chart = simple_chart().with_fill(
            FunnelFill::gradient([css::RED, css::BLUE])
                .with_gradient_direction(GradientDirection::Vertical),
        );
        let svg = chart.to_svg_string().unwrap();
        assert!(svg.contains(
            r#"<linearGradient id="funnelGradient-1" x1="0" x2="0" y1="0" y2="1">"#
        ));
        assert!(svg.contains(r##"<stop offset="100%" stop-color="#0000ff"/>"##));
        assert!(svg.contains(r#"fill="url(#funnelGradient-1)""#));
    }

    #[test]
    fn invalid_data_is_reported() {
        let data = FunnelData::new([0.0, 0.0]);
        let chart = FunnelChart::new(FunnelSpec::new(data, Size::new(100.0, 100.0)));
        assert_eq!(
            chart.to_svg_string(),
            Err(RenderError::InvalidInput(InvalidInput::ZeroMaximum))
        );
    }
}
