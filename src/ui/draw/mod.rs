//! Drawing functions for the TUI
//!
//! The screen is split in two:
//! - `form` - Sidebar with keyword input, timeframe selector, and submit button
//! - `report` - Main panel: welcome text, warnings, errors, or the report

mod form;
mod report;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;

use form::draw_sidebar;
use report::draw_main;

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 48;

/// Main draw function
pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = app.theme().clone();

    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Form
            Constraint::Min(1),                // Main panel
        ])
        .split(area);

    draw_sidebar(f, app, chunks[0], &theme);
    draw_main(f, app, chunks[1], &theme);
}

#[cfg(test)]
pub(crate) fn render_to_buffer(app: &mut App, width: u16, height: u16) -> ratatui::buffer::Buffer {
    use ratatui::{backend::TestBackend, Terminal};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

#[cfg(test)]
pub(crate) fn render_to_text(app: &mut App, width: u16, height: u16) -> String {
    let buf = render_to_buffer(app, width, height);
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
