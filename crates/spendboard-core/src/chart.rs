//! SVG chart geometry shared by the dashboard widgets
//!
//! All coordinates are in the SVG viewBox of a [`Frame`]. Spend values are
//! never negative; negative inputs are drawn as zero.

use std::f64::consts::PI;

/// Chart viewBox and plot margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Frame {
    pub const DEFAULT: Frame = Frame {
        width: 560.0,
        height: 300.0,
        margin_top: 20.0,
        margin_right: 20.0,
        margin_bottom: 40.0,
        margin_left: 70.0,
    };

    pub fn inner_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// y of the x-axis
    pub fn baseline(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin_right
    }

    /// y for `value` on an axis running from 0 to `max`
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        self.baseline() - (value.max(0.0) / max).min(1.0) * self.inner_height()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Round an axis maximum up to 1, 2, 2.5 or 5 times a power of ten
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s)
        .unwrap_or(10.0);
    step * magnitude
}

/// `count + 1` evenly spaced tick values from 0 to `max`
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

/// Axis maximum for a series
pub fn axis_max(values: &[f64]) -> f64 {
    nice_max(values.iter().copied().fold(0.0_f64, f64::max))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// One bar per value, each centred in an equal slot
pub fn bar_layout(frame: &Frame, values: &[f64], max: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = frame.inner_width() / values.len() as f64;
    let width = slot * 0.6;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let y = frame.y_for(value, max);
            BarRect {
                x: frame.margin_left + i as f64 * slot + (slot - width) / 2.0,
                y,
                width,
                height: frame.baseline() - y,
            }
        })
        .collect()
}

/// Point positions for a line chart; a single value sits mid-axis
pub fn line_points(frame: &Frame, values: &[f64], max: f64) -> Vec<(f64, f64)> {
    match values.len() {
        0 => Vec::new(),
        1 => vec![(
            frame.margin_left + frame.inner_width() / 2.0,
            frame.y_for(values[0], max),
        )],
        n => {
            let step = frame.inner_width() / (n - 1) as f64;
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| (frame.margin_left + i as f64 * step, frame.y_for(v, max)))
                .collect()
        }
    }
}

/// `M x y L x y ...`
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        path.push_str(&format!("{} {:.2} {:.2}", command, x, y));
    }
    path
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Index of the value this slice represents
    pub index: usize,
    pub fraction: f64,
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
}

/// Slices clockwise from 12 o'clock. Zero values get no slice; a value
/// holding the whole pie is drawn as a full circle.
pub fn pie_slices(values: &[f64], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -PI / 2.0;
    let mut slices = Vec::new();

    for (index, &value) in values.iter().enumerate() {
        if value <= 0.0 {
            continue;
        }
        let fraction = value / total;
        let sweep = fraction * 2.0 * PI;
        let start = angle;
        let end = angle + sweep;
        angle = end;

        let path = if fraction >= 0.9999 {
            format!(
                "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z",
                cx = cx,
                top = cy - radius,
                bottom = cy + radius,
                r = radius
            )
        } else {
            let large_arc = if sweep > PI { 1 } else { 0 };
            format!(
                "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {} 1 {:.2} {:.2} Z",
                cx,
                cy,
                cx + radius * start.cos(),
                cy + radius * start.sin(),
                large_arc,
                cx + radius * end.cos(),
                cy + radius * end.sin(),
                r = radius
            )
        };

        let mid = start + sweep / 2.0;
        let label_radius = radius * 1.2;
        slices.push(PieSlice {
            index,
            fraction,
            path,
            label_x: cx + label_radius * mid.cos(),
            label_y: cy + label_radius * mid.sin(),
        });
    }

    slices
}
