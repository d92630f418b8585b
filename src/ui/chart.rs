//! Trend chart widget
//!
//! Draws the interest timeline as a line with point markers over a shaded
//! area, on dashed gridlines, without a surrounding border. Layers are drawn
//! bottom to top: gridlines, fill, line, markers.

use chrono::DateTime;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};

use super::theme::Theme;
use crate::trends::TrendSeries;

/// Interest is normalized by the provider to 0-100
const Y_BOUNDS: [f64; 2] = [0.0, 100.0];
const GRID_LEVELS: [f64; 4] = [25.0, 50.0, 75.0, 100.0];
/// Dash slots per gridline; every other slot is drawn
const GRID_SLOTS: usize = 64;
/// Padding for a single-point series so the x axis has width
const SINGLE_POINT_PAD: f64 = 86_400.0;

/// Chart widget for one trend series
pub struct TrendChart<'a> {
    series: &'a TrendSeries,
    /// (unix seconds, value), one per series point
    points: Vec<(f64, f64)>,
    theme: &'a Theme,
}

impl<'a> TrendChart<'a> {
    pub fn new(series: &'a TrendSeries, theme: &'a Theme) -> Self {
        debug_assert!(!series.is_empty(), "empty series is shown as no data, not charted");
        Self {
            series,
            points: series.chart_points(),
            theme,
        }
    }

    pub fn title(&self) -> String {
        format!("Search interest for '{}'", self.series.keyword())
    }
}

impl Widget for TrendChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let points = &self.points;
        let x_bounds = x_bounds(points);
        let grid = gridlines(x_bounds);

        let axis_style = Style::default().fg(self.theme.dimmed);
        let datasets = vec![
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(self.theme.grid))
                .data(&grid),
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(self.theme.fill))
                .data(points),
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.accent))
                .data(points),
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
                .data(points),
        ];

        let title = Span::styled(
            format!(" {} ", self.title()),
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        );

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(title)
                    .style(Style::default().bg(self.theme.background)),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled("Date", axis_style))
                    .style(axis_style)
                    .bounds(x_bounds)
                    .labels(x_labels(x_bounds)),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled("Search volume", axis_style))
                    .style(axis_style)
                    .bounds(Y_BOUNDS)
                    .labels(["0", "50", "100"]),
            )
            .legend_position(None);

        chart.render(area, buf);
    }
}

/// X range covering all points
fn x_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let min = points.iter().map(|(x, _)| *x).reduce(f64::min).unwrap_or(0.0);
    let max = points.iter().map(|(x, _)| *x).reduce(f64::max).unwrap_or(0.0);
    if max > min {
        [min, max]
    } else {
        [min - SINGLE_POINT_PAD, max + SINGLE_POINT_PAD]
    }
}

/// First, middle, and last dates of the range
fn x_labels(bounds: [f64; 2]) -> Vec<String> {
    let [min, max] = bounds;
    [min, (min + max) / 2.0, max]
        .iter()
        .map(|x| {
            DateTime::from_timestamp(*x as i64, 0)
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Dashed horizontal gridlines as scatter points
fn gridlines(bounds: [f64; 2]) -> Vec<(f64, f64)> {
    let [min, max] = bounds;
    let step = (max - min) / GRID_SLOTS as f64;
    GRID_LEVELS
        .iter()
        .flat_map(|&y| {
            (0..=GRID_SLOTS)
                .step_by(2)
                .map(move |i| (min + step * i as f64, y))
        })
        .collect()
}
