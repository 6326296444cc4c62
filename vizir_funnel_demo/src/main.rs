// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funnel chart demos for `vizir_funnel`.

mod html;

use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;
use vizir_funnel::{Direction, FunnelData, FunnelSpec, Size, Step};
use vizir_funnel_svg::{FunnelChart, FunnelFill, GradientDirection};

const OUTPUT: &str = "vizir_funnel_demo.html";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let demos = [simple_demo(), vertical_gradient_demo(), segmented_demo()];

    let mut sections = Vec::with_capacity(demos.len());
    for (title, description, chart) in demos {
        match chart.to_svg_string() {
            Ok(svg) => {
                tracing::info!(demo = title, bytes = svg.len(), "rendered funnel");
                sections.push(html::HtmlSection {
                    title,
                    description,
                    svg,
                });
            }
            Err(err) => {
                tracing::error!(demo = title, %err, "cannot draw funnel");
                std::process::exit(1);
            }
        }
    }

    let html = html::render_report("VizIR funnel demo", &sections);
    if let Err(err) = std::fs::write(OUTPUT, html) {
        tracing::error!(path = OUTPUT, %err, "cannot write report");
        std::process::exit(1);
    }
    println!("wrote {OUTPUT}");
}

fn simple_demo() -> (&'static str, &'static str, FunnelChart) {
    let data = FunnelData::from_steps([
        Step::new("Impressions", 12_000.0),
        Step::new("Add To Cart", 5_700.0),
        Step::new("Buy", 360.0),
    ]);
    let chart = FunnelChart::new(FunnelSpec::new(data, Size::new(600.0, 300.0)));
    (
        "Simple funnel",
        "One value per step, solid fill, horizontal.",
        chart,
    )
}

fn vertical_gradient_demo() -> (&'static str, &'static str, FunnelChart) {
    let data = FunnelData::new([2_400.0, 1_800.0, 950.0, 400.0])
        .with_labels(["Visitors", "Leads", "Trials", "Customers"]);
    let spec = FunnelSpec::new(data, Size::new(320.0, 560.0)).with_direction(Direction::Vertical);
    let chart = FunnelChart::new(spec).with_fill(
        FunnelFill::gradient([css::ORANGE, css::ORANGE_RED, css::CRIMSON])
            .with_gradient_direction(GradientDirection::Vertical),
    );
    (
        "Vertical gradient funnel",
        "Steps progress top to bottom; the gradient runs along the main axis.",
        chart,
    )
}

fn segmented_demo() -> (&'static str, &'static str, FunnelChart) {
    let data = FunnelData::new([
        [3_500.0, 2_500.0, 6_500.0],
        [3_300.0, 1_400.0, 1_000.0],
        [600.0, 200.0, 130.0],
    ])
    .with_labels(["Impressions", "Add To Cart", "Buy"])
    .with_sub_labels(["Direct", "Social Media", "Ads"]);
    let chart = FunnelChart::new(FunnelSpec::new(data, Size::new(600.0, 300.0))).with_band_fills([
        FunnelFill::Solid(css::TOMATO),
        FunnelFill::Solid(css::GOLD),
        FunnelFill::gradient([css::TEAL, css::STEEL_BLUE]),
    ]);
    (
        "Segmented funnel",
        "Each step is split into three stacked sub-segments.",
        chart,
    )
}
