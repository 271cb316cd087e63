//! Report charts. Line charts are plotly figures; the speedup bars are a small
//! standalone SVG so the two bars can carry gradient fills.

use std::fmt::Write;

use fibbench_core::BenchmarkSample;
use plotly::{
    common::{DashType, Line, Mode, Title},
    layout::{Axis, AxisType, Layout},
    Plot, Scatter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YScale {
    #[default]
    Linear,
    Log,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub color: &'static str,
    pub dashed: bool,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>, color: &'static str) -> Self {
        Self {
            label: label.into(),
            values,
            color,
            dashed: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

/// A line chart over a shared x axis, rendered with plotly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub x: Vec<f64>,
    pub series: Vec<Series>,
    pub y_scale: YScale,
    /// Fixed `(min, max)` of the y axis.
    pub y_range: Option<(f64, f64)>,
}

impl LineChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn axes(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_title = x_title.into();
        self.y_title = y_title.into();
        self
    }

    pub fn x(mut self, x: Vec<f64>) -> Self {
        self.x = x;
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn log_y(mut self) -> Self {
        self.y_scale = YScale::Log;
        self
    }

    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    pub fn to_plot(&self) -> Plot {
        let mut plot = Plot::new();
        for series in &self.series {
            let mut line = Line::new().color(series.color);
            if series.dashed {
                line = line.dash(DashType::Dash);
            }
            let trace = Scatter::new(self.x.clone(), series.values.clone())
                .name(series.label.as_str())
                .mode(Mode::LinesMarkers)
                .line(line);
            plot.add_trace(trace);
        }

        let mut y_axis = Axis::new().title(Title::new(&self.y_title));
        if self.y_scale == YScale::Log {
            y_axis = y_axis.type_(AxisType::Log);
        }
        if let Some((min, max)) = self.y_range {
            y_axis = y_axis.range(vec![min, max]);
        }
        let layout = Layout::new()
            .title(Title::new(&self.title))
            .x_axis(Axis::new().title(Title::new(&self.x_title)))
            .y_axis(y_axis);
        plot.set_layout(layout);
        plot
    }

    /// A `<div>` with the given id plus the script drawing into it. The page
    /// must load plotly.js.
    pub fn to_inline_html(&self, div_id: &str) -> String {
        self.to_plot().to_inline_html(Some(div_id))
    }
}

/// Two-bar chart of the SIMD and scalar mean times, scaled to the slower one.
pub fn speedup_bar_chart(sample: &BenchmarkSample, width: u32) -> String {
    const HEIGHT: f64 = 210.0;
    const BAR_WIDTH: f64 = 80.0;
    const GAP: f64 = 60.0;
    const MAX_BAR_HEIGHT: f64 = 150.0;
    const BASE_Y: f64 = 180.0;

    let width = f64::from(width).max(2.0 * BAR_WIDTH + GAP);
    let start_x = (width - (BAR_WIDTH * 2.0 + GAP)) / 2.0;
    let max_time = sample.variant_a_ms.max(sample.variant_b_ms);
    let bar_height = |time: f64| {
        if max_time > 0.0 && time.is_finite() {
            time / max_time * MAX_BAR_HEIGHT
        } else {
            0.0
        }
    };

    let bars = [
        ("SIMD", "simd", sample.variant_a_ms, start_x),
        ("Scalar", "scalar", sample.variant_b_ms, start_x + BAR_WIDTH + GAP),
    ];
    let mut body = String::new();
    for (label, gradient, time, x) in bars {
        let h = bar_height(time);
        let _ = write!(
            body,
            r##"<rect x="{x:.1}" y="{y:.1}" width="{BAR_WIDTH}" height="{h:.1}" fill="url(#{gradient})"/><text x="{cx:.1}" y="{ly}" text-anchor="middle" font-size="14" fill="#f1f5f9">{label}</text><text x="{cx:.1}" y="{ty:.1}" text-anchor="middle" font-size="14" fill="#f1f5f9">{time:.2}ms</text>"##,
            y = BASE_Y - h,
            cx = x + BAR_WIDTH / 2.0,
            ly = BASE_Y + 20.0,
            ty = BASE_Y - h - 10.0,
        );
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{HEIGHT}" viewBox="0 0 {width} {HEIGHT}" style="background:#1e293b; border-radius:8px">
  <defs>
    <linearGradient id="simd" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="#667eea"/><stop offset="1" stop-color="#764ba2"/></linearGradient>
    <linearGradient id="scalar" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="#10b981"/><stop offset="1" stop-color="#059669"/></linearGradient>
  </defs>
  {body}
</svg>"##
    )
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> LineChart {
        LineChart::new("Execution Time vs Input Size")
            .axes("n", "Time (ns)")
            .x(vec![10.0, 20.0, 30.0])
            .series(Series::new("Iterative (ns)", vec![100.0, 200.0, 300.0], "#f59e0b"))
            .series(Series::new("Matrix (ns)", vec![150.0, 160.0, 170.0], "#10b981"))
    }

    #[test]
    fn test_one_trace_per_series() {
        let json = chart().to_plot().to_json();
        assert_eq!(json.matches(r#""type":"scatter""#).count(), 2);
        assert!(json.contains(r#""name":"Iterative (ns)""#));
        assert!(json.contains(r#""name":"Matrix (ns)""#));
        assert!(json.contains("Execution Time vs Input Size"));
        assert!(json.contains("Time (ns)"));
        assert!(!json.contains(r#""type":"log""#));
    }

    #[test]
    fn test_log_axis() {
        let json = LineChart::new("Relative Error")
            .x(vec![0.0, 1.0, 2.0])
            .series(Series::new("err", vec![0.0, 1e-16, 1e-12], "#ef4444"))
            .log_y()
            .to_plot()
            .to_json();
        assert!(json.contains(r#""type":"log""#));
    }

    #[test]
    fn test_fixed_range_and_dashed_series() {
        let json = LineChart::new("Ratio")
            .x(vec![1.0, 2.0])
            .series(Series::new("ratio", vec![1.0, 2.0], "#6366f1"))
            .series(Series::new("φ", vec![1.618, 1.618], "#10b981").dashed())
            .y_range(1.5, 2.0)
            .to_plot()
            .to_json();
        assert!(json.contains(r#""range":[1.5,2.0]"#));
        assert_eq!(json.matches(r#""dash":"dash""#).count(), 1);
        assert!(json.contains("#10b981"));
    }

    #[test]
    fn test_inline_html_uses_div_id() {
        let html = chart().to_inline_html("complexity-chart");
        assert!(html.contains(r#"id="complexity-chart""#));
        assert!(html.contains("Iterative (ns)"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_bar_chart_scales_to_slower_variant() {
        let svg = speedup_bar_chart(&BenchmarkSample::new(1.0, 2.0), 400);
        assert!(svg.contains("1.00ms"));
        assert!(svg.contains("2.00ms"));
        assert!(svg.contains(r#"height="150.0""#));
        assert!(svg.contains(r#"height="75.0""#));
        assert!(svg.contains("SIMD") && svg.contains("Scalar"));
    }

    #[test]
    fn test_bar_chart_zero_times() {
        let svg = speedup_bar_chart(&BenchmarkSample::new(0.0, 0.0), 100);
        assert!(!svg.contains("NaN"));
        assert_eq!(svg.matches(r#"height="0.0""#).count(), 2);
    }
}
