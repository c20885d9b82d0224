//! Inline SVG charts for the dashboard
//!
//! Geometry comes from `spendboard_core::chart`; these components only turn
//! it into markup. Hovering a mark shows its exact amount via `<title>`.

use leptos::prelude::*;
use spendboard_core::chart::{self, Frame};
use spendboard_core::format::{format_axis, format_money};
use spendboard_core::palette::{category_color, SERIES_COLOR};

const Y_TICKS: usize = 4;
const PIE_SIZE: f64 = 300.0;
const PIE_RADIUS: f64 = 100.0;

/// Horizontal gridlines with y-axis labels, shared by bar and line charts
fn axis_view(frame: Frame, max: f64) -> impl IntoView {
    chart::ticks(max, Y_TICKS)
        .into_iter()
        .map(|value| {
            let y = frame.y_for(value, max);
            view! {
                <line
                    x1=frame.margin_left.to_string()
                    y1=y.to_string()
                    x2=frame.right().to_string()
                    y2=y.to_string()
                    class="chart-grid"
                    stroke-dasharray="3 3"
                />
                <text
                    x=(frame.margin_left - 8.0).to_string()
                    y=(y + 4.0).to_string()
                    text-anchor="end"
                    class="chart-axis-label"
                >
                    {format_axis(value)}
                </text>
            }
        })
        .collect_view()
}

#[component]
pub fn BarChart(labels: Vec<String>, values: Vec<f64>, currency: String) -> impl IntoView {
    let frame = Frame::DEFAULT;
    let max = chart::axis_max(&values);
    let bars = chart::bar_layout(&frame, &values, max);

    let marks = bars
        .into_iter()
        .zip(labels)
        .zip(values)
        .map(|((bar, label), value)| {
            let tooltip = format!("{}: {}", label, format_money(value, &currency));
            view! {
                <rect
                    x=bar.x.to_string()
                    y=bar.y.to_string()
                    width=bar.width.to_string()
                    height=bar.height.to_string()
                    fill=SERIES_COLOR
                >
                    <title>{tooltip}</title>
                </rect>
                <text
                    x=bar.center_x().to_string()
                    y=(frame.baseline() + 18.0).to_string()
                    text-anchor="middle"
                    class="chart-axis-label capitalize"
                >
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox=frame.view_box() class="chart bar-chart" style="width: 100%; height: auto;">
            {axis_view(frame, max)}
            {marks}
            <text x=frame.right().to_string() y="14" text-anchor="end" class="chart-legend">
                {format!("Total ({})", currency)}
            </text>
        </svg>
    }
}

/// Category shares; each slice is labelled `name: amount`
#[component]
pub fn PieChart(labels: Vec<String>, values: Vec<f64>, currency: String) -> impl IntoView {
    let center = PIE_SIZE / 2.0;
    let slices = chart::pie_slices(&values, center, center, PIE_RADIUS);

    let marks = slices
        .into_iter()
        .map(|slice| {
            let label = labels.get(slice.index).cloned().unwrap_or_default();
            let value = values.get(slice.index).copied().unwrap_or_default();
            let anchor = if slice.label_x < center { "end" } else { "start" };
            view! {
                <path d=slice.path fill=category_color(&label) stroke="#fff" stroke-width="1">
                    <title>{format!("{}: {}", label, format_money(value, &currency))}</title>
                </path>
                <text
                    x=slice.label_x.to_string()
                    y=slice.label_y.to_string()
                    text-anchor=anchor
                    class="chart-slice-label"
                >
                    {format!("{}: {}", label, format_axis(value))}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg
            viewBox=format!("-60 0 {} {}", PIE_SIZE + 120.0, PIE_SIZE)
            class="chart pie-chart"
            style="width: 100%; height: auto;"
        >
            {marks}
        </svg>
    }
}

/// Monthly totals as a polyline with a dot per month
#[component]
pub fn LineChart(labels: Vec<String>, values: Vec<f64>, currency: String) -> impl IntoView {
    let frame = Frame::DEFAULT;
    let max = chart::axis_max(&values);
    let points = chart::line_points(&frame, &values, max);
    let path = chart::line_path(&points);

    let marks = points
        .into_iter()
        .zip(labels)
        .zip(values)
        .map(|(((x, y), label), value)| {
            view! {
                <circle cx=x.to_string() cy=y.to_string() r="4" fill=SERIES_COLOR>
                    <title>{format!("{}: {}", label, format_money(value, &currency))}</title>
                </circle>
                <text
                    x=x.to_string()
                    y=(frame.baseline() + 18.0).to_string()
                    text-anchor="middle"
                    class="chart-axis-label"
                >
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox=frame.view_box() class="chart line-chart" style="width: 100%; height: auto;">
            {axis_view(frame, max)}
            <path d=path fill="none" stroke=SERIES_COLOR stroke-width="2" />
            {marks}
            <text x=frame.right().to_string() y="14" text-anchor="end" class="chart-legend">
                {format!("Total ({})", currency)}
            </text>
        </svg>
    }
}
