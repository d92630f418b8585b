use ratatui::widgets::TableState;

use crate::analysis::{self, Analysis, Providers, Report};
use crate::config::Config;
use crate::error::TrendsError;
use crate::query::Query;
use crate::timeframe::Timeframe;
use crate::ui::Theme;

pub const EMPTY_KEYWORD_WARNING: &str = "Please enter a keyword first.";

/// Which form control receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Keyword,
    Timeframe,
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Keyword => Focus::Timeframe,
            Focus::Timeframe => Focus::Submit,
            Focus::Submit => Focus::Keyword,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Keyword => Focus::Submit,
            Focus::Timeframe => Focus::Keyword,
            Focus::Submit => Focus::Timeframe,
        }
    }
}

/// What the main panel shows
#[derive(Debug)]
pub enum View {
    /// Before the first submit
    Welcome,
    /// A query is being fetched
    Loading(Query),
    /// Submit refused before any fetch
    Warning(&'static str),
    /// Provider had nothing for this query
    NoData(Query),
    Failed { query: Query, error: TrendsError },
    Report(Report),
}

/// Application state
pub struct App {
    /// Keyword input buffer
    keyword: String,
    /// Selected timeframe
    timeframe: Timeframe,
    focus: Focus,
    view: View,
    /// Scroll state of the report table
    table_state: TableState,
    config: Config,
    /// Resolved once at startup
    theme: Theme,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            keyword: config.defaults.keyword.clone(),
            timeframe: config.defaults.timeframe,
            focus: Focus::Keyword,
            view: View::Welcome,
            table_state: TableState::default(),
            theme: config.resolve_theme(),
            config,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The shown report together with its table scroll state
    pub fn report_with_table_state(&mut self) -> Option<(&Report, &mut TableState)> {
        match self.view {
            View::Report(ref report) => Some((report, &mut self.table_state)),
            _ => None,
        }
    }

    /// Whether typed characters go into the keyword
    pub fn is_editing(&self) -> bool {
        self.focus == Focus::Keyword
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn push_keyword_char(&mut self, c: char) {
        self.keyword.push(c);
    }

    pub fn pop_keyword_char(&mut self) {
        self.keyword.pop();
    }

    pub fn clear_keyword(&mut self) {
        self.keyword.clear();
    }

    /// Move the timeframe selection up
    pub fn previous_timeframe(&mut self) {
        if let Some(tf) = self.timeframe.index().checked_sub(1).and_then(Timeframe::from_index) {
            self.timeframe = tf;
        }
    }

    /// Move the timeframe selection down
    pub fn next_timeframe(&mut self) {
        if let Some(tf) = Timeframe::from_index(self.timeframe.index() + 1) {
            self.timeframe = tf;
        }
    }

    /// Scroll the report table by `delta` rows
    pub fn scroll_table(&mut self, delta: isize) {
        let View::Report(ref report) = self.view else {
            return;
        };
        let last = report.series.len().saturating_sub(1);
        let next = match self.table_state.selected() {
            Some(current) => current.saturating_add_signed(delta),
            // First scroll lands on the first row, or `delta` rows in for a page
            None => delta.max(1).unsigned_abs() - 1,
        }
        .min(last);
        self.table_state.select(Some(next));
    }

    /// Validate the form and enter the loading view.
    ///
    /// Returns the query to run, or `None` (with a warning shown) when the
    /// keyword is blank.
    pub fn submit(&mut self) -> Option<Query> {
        match Query::new(&self.keyword, self.timeframe) {
            Some(query) => {
                self.view = View::Loading(query.clone());
                Some(query)
            }
            None => {
                tracing::debug!("Submit with empty keyword");
                self.view = View::Warning(EMPTY_KEYWORD_WARNING);
                None
            }
        }
    }

    /// Run a submitted query to completion and show the outcome
    pub async fn run_query(&mut self, query: Query, providers: &Providers) {
        let analysis = analysis::analyze(providers, query).await;
        self.show(analysis);
    }

    pub(crate) fn show(&mut self, analysis: Analysis) {
        self.table_state = TableState::default();
        // No row is selected until the user scrolls
        self.view = match analysis {
            Analysis::Ready(report) => View::Report(report),
            Analysis::NoData { query } => View::NoData(query),
            Analysis::Failed { query, error } => View::Failed { query, error },
        };
    }
}
