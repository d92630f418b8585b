//! Main panel drawing
//!
//! Shows one of: the welcome text, a loading notice, a warning, a trend
//! fetch error, or the report (header, chart, suggestions, data table).

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::analysis::Report;
use crate::app::{App, View};
use crate::suggest::suggestion_line;
use crate::ui::chart::TrendChart;
use crate::ui::data_table::{table_rows, trend_table};
use crate::ui::theme::Theme;

pub(crate) fn draw_main(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    if let Some((report, table_state)) = app.report_with_table_state() {
        draw_report(f, report, table_state, area, theme);
        return;
    }

    let lines = match app.view() {
        View::Welcome => welcome_lines(theme),
        View::Loading(query) => vec![Line::from(Span::styled(
            format!("⟳ Loading trend data for '{}'...", query.keyword()),
            Style::default().fg(theme.accent),
        ))],
        View::Warning(message) => vec![warning_line(message, theme)],
        View::NoData(query) => vec![warning_line(
            &format!(
                "No trend data for '{}'. Try another keyword.",
                query.keyword()
            ),
            theme,
        )],
        View::Failed { query, error } => vec![
            Line::from(Span::styled(
                format!("⚠ Could not fetch trend data for '{}'.", query.keyword()),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Error detail: {}", error),
                Style::default().fg(theme.foreground),
            )),
        ],
        View::Report(_) => Vec::new(),
    };

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.background))
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(panel, padded(area));
}

fn warning_line<'a>(message: &str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("⚠ {}", message),
        Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
    ))
}

fn welcome_lines(theme: &Theme) -> Vec<Line<'static>> {
    let title = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(theme.foreground);
    vec![
        Line::from(Span::styled("📊 Keyword Trend Analysis for SEO", title)),
        Line::from(""),
        Line::from(Span::styled(
            "Spot the latest keyword trends and see how search volume moves over a chosen period.",
            text,
        )),
        Line::from(Span::styled("Use this data to sharpen your SEO strategy.", text)),
        Line::from(""),
        Line::from(Span::styled("How to use:", text.add_modifier(Modifier::BOLD))),
        Line::from(Span::styled("  1. Enter the keyword to analyze in the sidebar.", text)),
        Line::from(Span::styled("  2. Pick the relevant time period.", text)),
        Line::from(Span::styled("  3. Press \"Show trends\" to see the results.", text)),
    ]
}

fn draw_report(
    f: &mut Frame,
    report: &Report,
    table_state: &mut ratatui::widgets::TableState,
    area: Rect,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Percentage(50),     // Chart
            Constraint::Length(4),          // Suggestions
            Constraint::Min(5),             // Table
        ])
        .split(padded(area));

    let query = &report.query;
    let accent = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
    let header = Paragraph::new(vec![
        Line::from(Span::styled("📈 Keyword Trend Analysis", accent)),
        Line::from(vec![
            Span::styled("Keyword: ", Style::default().fg(theme.dimmed)),
            Span::styled(query.keyword().to_string(), Style::default().fg(theme.foreground)),
        ]),
        Line::from(vec![
            Span::styled("Time period: ", Style::default().fg(theme.dimmed)),
            Span::styled(
                query.timeframe().token().to_string(),
                Style::default().fg(theme.foreground),
            ),
        ]),
    ])
    .style(Style::default().bg(theme.background));
    f.render_widget(header, chunks[0]);

    f.render_widget(TrendChart::new(&report.series, theme), chunks[1]);

    draw_suggestions(f, report, chunks[2], theme);

    let rows = table_rows(&report.series);
    let table = trend_table(report.series.keyword(), &rows, theme);
    f.render_stateful_widget(table, chunks[3], table_state);
}

fn draw_suggestions(f: &mut Frame, report: &Report, area: Rect, theme: &Theme) {
    let lines = match report.suggestions {
        Ok(ref list) if !list.is_empty() => vec![Line::from(Span::styled(
            suggestion_line(list),
            Style::default().fg(theme.foreground),
        ))],
        Ok(_) => vec![warning_line("No related keywords found.", theme)],
        Err(ref e) => vec![
            warning_line("Something went wrong while fetching related keywords.", theme),
            Line::from(Span::styled(
                format!("Error detail: {}", e),
                Style::default().fg(theme.dimmed),
            )),
        ],
    };

    let suggestions = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.dimmed))
            .title(" 🔍 Related keywords ")
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(suggestions, area);
}

/// Leave a one-column gap from the sidebar
fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use reqwest::StatusCode;

    use crate::analysis::{Analysis, Report};
    use crate::app::{App, EMPTY_KEYWORD_WARNING};
    use crate::config::Config;
    use crate::error::{SuggestError, TrendsError};
    use crate::query::Query;
    use crate::timeframe::Timeframe;
    use crate::trends::{TrendPoint, TrendSeries};
    use crate::ui::draw::{render_to_buffer, render_to_text};
    use ratatui::buffer::Buffer;

    fn query() -> Query {
        Query::new("digital marketing", Timeframe::PastThreeMonths).unwrap()
    }

    fn series_of(values: &[f64]) -> TrendSeries {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| TrendPoint {
                timestamp: DateTime::from_timestamp(1_700_000_000 + i as i64 * 604_800, 0).unwrap(),
                value: *v,
                partial: false,
            })
            .collect();
        TrendSeries::new("digital marketing", points)
    }

    fn report_app(suggestions: Result<Vec<String>, SuggestError>) -> App {
        let mut app = App::new(Config::default());
        app.show(Analysis::Ready(Report {
            query: query(),
            series: series_of(&[0.0, 10.0, 20.0, 30.0]),
            suggestions,
        }));
        app
    }

    /// Position of the first cell where `needle` starts
    fn find(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let area = buf.area;
        let len = needle.chars().count() as u16;
        for y in 0..area.height {
            for x in 0..area.width.saturating_sub(len) {
                let found: String = (x..x + len).map(|cx| buf[(cx, y)].symbol()).collect();
                if found == needle {
                    return Some((x, y));
                }
            }
        }
        None
    }

    #[test]
    fn test_welcome() {
        let mut app = App::new(Config::default());
        let text = render_to_text(&mut app, 160, 30);
        assert!(text.contains("How to use:"));
    }

    #[test]
    fn test_report_with_suggestions() {
        let mut app = report_app(Ok(vec![
            "digital marketing agency".to_string(),
            "digital marketing course".to_string(),
        ]));
        let text = render_to_text(&mut app, 160, 50);

        assert!(text.contains("Keyword: digital marketing"));
        assert!(text.contains("Time period: today 3-m"));
        assert!(text.contains("Search interest for 'digital marketing'"));
        assert!(text.contains("digital marketing agency, digital marketing course"));
        // Max value row of the table
        assert!(text.contains("30.00"));
    }

    #[test]
    fn test_suggestion_error_keeps_chart_and_table() {
        let mut app = report_app(Err(SuggestError::Status(StatusCode::BAD_GATEWAY)));
        let text = render_to_text(&mut app, 160, 50);

        assert!(text.contains("Something went wrong while fetching related keywords."));
        assert!(text.contains("502"));
        assert!(text.contains("Search interest for 'digital marketing'"));
        assert!(text.contains("Search volume data"));
        assert!(text.contains("20.00"));
    }

    #[test]
    fn test_no_suggestions() {
        let mut app = report_app(Ok(Vec::new()));
        let text = render_to_text(&mut app, 160, 50);
        assert!(text.contains("No related keywords found."));
    }

    #[test]
    fn test_max_on_first_row_stays_highlighted() {
        let mut app = App::new(Config::default());
        app.show(Analysis::Ready(Report {
            query: query(),
            series: series_of(&[100.0, 40.0, 20.0]),
            suggestions: Ok(Vec::new()),
        }));
        let theme = app.theme().clone();

        let buf = render_to_buffer(&mut app, 160, 50);
        let (x, y) = find(&buf, "100.00").unwrap();
        assert_eq!(buf[(x, y)].bg, theme.highlight_bg);
        assert_eq!(buf[(x, y)].fg, theme.highlight_fg);
        let (x, y) = find(&buf, "40.00").unwrap();
        assert_ne!(buf[(x, y)].bg, theme.highlight_bg);

        // Scrolling onto the maximum keeps its colors
        app.scroll_table(1);
        let buf = render_to_buffer(&mut app, 160, 50);
        assert!(find(&buf, "▶").is_some());
        let (x, y) = find(&buf, "100.00").unwrap();
        assert_eq!(buf[(x, y)].bg, theme.highlight_bg);
        assert_eq!(buf[(x, y)].fg, theme.highlight_fg);
    }

    #[test]
    fn test_no_data_shows_only_warning() {
        let mut app = App::new(Config::default());
        app.show(Analysis::NoData { query: query() });
        let text = render_to_text(&mut app, 160, 30);

        assert!(text.contains("No trend data for 'digital marketing'. Try another keyword."));
        assert!(!text.contains("Search interest for"));
        assert!(!text.contains("Related keywords"));
        assert!(!text.contains("Search volume data"));
    }

    #[test]
    fn test_trend_failure_shows_error() {
        let mut app = App::new(Config::default());
        app.show(Analysis::Failed {
            query: query(),
            error: TrendsError::MissingWidget,
        });
        let text = render_to_text(&mut app, 160, 30);

        assert!(text.contains("Could not fetch trend data for 'digital marketing'."));
        assert!(text.contains("no TIMESERIES widget"));
        // Form still rendered and usable
        assert!(text.contains("Show trends"));
    }

    #[test]
    fn test_empty_keyword_warning() {
        let mut app = App::new(Config::default());
        app.clear_keyword();
        app.submit();
        let text = render_to_text(&mut app, 160, 30);
        assert!(text.contains(EMPTY_KEYWORD_WARNING));
    }
}
