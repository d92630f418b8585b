//! Data table for a trend series.
//!
//! One row per point, values with two decimals, and every row holding the
//! series maximum highlighted.

use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};

use super::theme::Theme;
use crate::trends::TrendSeries;

/// Formatted row, independent of styling
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub date: String,
    pub value: String,
    pub partial: bool,
    pub is_max: bool,
}

/// Format every point of a series
pub fn table_rows(series: &TrendSeries) -> Vec<TableRow> {
    let max = series.max_value();
    series
        .points()
        .iter()
        .map(|p| TableRow {
            date: p.timestamp.format("%Y-%m-%d").to_string(),
            value: format!("{:.2}", p.value),
            partial: p.partial,
            is_max: Some(p.value) == max,
        })
        .collect()
}

/// Build the table widget; render it with the app's `TableState`
pub fn trend_table<'a>(keyword: &'a str, rows: &[TableRow], theme: &Theme) -> Table<'a> {
    let header = Row::new(vec!["Date", keyword, "Partial"]).style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let style = if row.is_max {
                Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg)
            } else {
                Style::default().fg(theme.foreground)
            };
            let partial = if row.partial { "yes" } else { "" };
            Row::new(vec![row.date.clone(), row.value.clone(), partial.to_string()]).style(style)
        })
        .collect();

    Table::new(
        body,
        [
            Constraint::Length(12),
            Constraint::Min(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dimmed))
            .title(" Search volume data ")
            .style(Style::default().bg(theme.background)),
    )
    // Selection only adds emphasis so the maximum keeps its colors
    .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
    .highlight_symbol("▶ ")
}
