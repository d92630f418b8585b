//! Sidebar form drawing
//!
//! Keyword input, the five timeframe options, and the submit button, with a
//! key-hint footer. The focused control gets an accent border.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::timeframe::Timeframe;
use crate::ui::theme::Theme;

pub(crate) fn draw_sidebar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                // Heading
            Constraint::Length(3),                                // Keyword
            Constraint::Length(Timeframe::ALL.len() as u16 + 2),  // Timeframe
            Constraint::Length(3),                                // Submit
            Constraint::Min(0),                                   // Spacer
            Constraint::Length(4),                                // Hints
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "🔍 Keyword Trend Analysis",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Find trending keywords for your SEO strategy.",
            Style::default().fg(theme.dimmed),
        )),
    ])
    .wrap(Wrap { trim: true })
    .style(Style::default().bg(theme.background));
    f.render_widget(heading, chunks[0]);

    draw_keyword_input(f, app, chunks[1], theme);
    draw_timeframe_list(f, app, chunks[2], theme);
    draw_submit_button(f, app, chunks[3], theme);
    draw_hints(f, chunks[5], theme);
}

fn border_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.dimmed)
    }
}

fn draw_keyword_input(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.focus() == Focus::Keyword;
    let prompt = &app.config().appearance.prompt;

    let text = if app.keyword().is_empty() && !focused {
        Span::styled(format!("{}Type a keyword...", prompt), Style::default().fg(theme.dimmed))
    } else {
        Span::styled(
            format!("{}{}", prompt, app.keyword()),
            Style::default().fg(theme.foreground),
        )
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused, theme))
            .title(" Main keyword ")
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(input, area);

    if focused {
        // Display width, not byte length; +1 for the left border
        let cursor_x = area.x + 1 + prompt.width() as u16 + app.keyword().width() as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        f.set_cursor_position((cursor_x.min(max_x), area.y + 1));
    }
}

fn draw_timeframe_list(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.focus() == Focus::Timeframe;
    let selected = app.timeframe();

    let items: Vec<ListItem> = Timeframe::ALL
        .iter()
        .map(|tf| {
            let is_selected = *tf == selected;
            let (marker, style) = if is_selected {
                (
                    "● ",
                    Style::default()
                        .fg(theme.accent)
                        .bg(if focused { theme.selection_bg } else { theme.background })
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(theme.foreground))
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(tf.label(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused, theme))
            .title(" Time period ")
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(list, area);
}

fn draw_submit_button(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.focus() == Focus::Submit;
    let style = if focused {
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent).bg(theme.background)
    };

    let button = Paragraph::new("Show trends")
        .style(style)
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused, theme)),
        );
    f.render_widget(button, area);
}

fn draw_hints(f: &mut Frame, area: Rect, theme: &Theme) {
    let hints = Paragraph::new(vec![
        Line::from(" Tab: next field | ↑↓: period"),
        Line::from(" Enter: show trends | PgUp/PgDn: scroll"),
        Line::from(" Esc: quit"),
        Line::from(Span::styled(
            " Powered by Google Trends & Suggest",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ])
    .style(Style::default().fg(theme.dimmed).bg(theme.background));
    f.render_widget(hints, area);
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::Config;
    use crate::ui::draw::render_to_text;

    #[test]
    fn test_sidebar_lists_all_timeframes() {
        let mut app = App::new(Config::default());
        let text = render_to_text(&mut app, 120, 30);

        assert!(text.contains("digital marketing"));
        assert!(text.contains("today 1-m: Past month"));
        assert!(text.contains("all: All available trend data"));
        assert!(text.contains("Show trends"));
    }

    #[test]
    fn test_selected_timeframe_marked() {
        let mut app = App::new(Config::default());
        app.next_timeframe();
        let text = render_to_text(&mut app, 120, 30);

        assert!(text.contains("● today 3-m: Past three months"));
        assert!(!text.contains("● today 1-m"));
    }
}
