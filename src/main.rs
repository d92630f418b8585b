mod analysis;
mod app;
mod config;
mod error;
mod query;
mod suggest;
mod timeframe;
mod trends;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use analysis::Providers;
use app::{App, Focus};
use config::Config;
use timeframe::Timeframe;

#[derive(Parser, Debug)]
#[command(name = "keyword-trends")]
#[command(about = "Search interest over time and related keywords, in the terminal")]
#[command(version)]
struct Cli {
    /// Config file path (default: ~/.config/keyword-trends/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Keyword to pre-fill
    #[arg(long, short)]
    keyword: Option<String>,

    /// Time period to pre-select: "today 1-m", "today 3-m", "today 12-m", "today 5-y" or "all"
    #[arg(long, short)]
    timeframe: Option<Timeframe>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.log_file.as_deref())?;

    // Load config
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path().display().to_string());
    let mut config = Config::load(&config_path)?;
    if let Some(keyword) = cli.keyword {
        config.defaults.keyword = keyword;
    }
    if let Some(timeframe) = cli.timeframe {
        config.defaults.timeframe = timeframe;
    }

    let providers = Providers::from_config(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Run main loop
    let result = run_app(&mut terminal, &mut app, &providers).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "keyword_trends=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    providers: &Providers,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if ctrl => return Ok(()),
                    KeyCode::Char('u') if ctrl && app.is_editing() => app.clear_keyword(),
                    KeyCode::Enter => {
                        if let Some(query) = app.submit() {
                            // Show the loading view; the fetch blocks this loop until done
                            terminal.draw(|f| ui::draw(f, app))?;
                            app.run_query(query, providers).await;
                        }
                    }
                    KeyCode::Tab => app.focus_next(),
                    KeyCode::BackTab => app.focus_previous(),
                    KeyCode::Up if app.focus() == Focus::Timeframe => app.previous_timeframe(),
                    KeyCode::Down if app.focus() == Focus::Timeframe => app.next_timeframe(),
                    KeyCode::Up => app.scroll_table(-1),
                    KeyCode::Down => app.scroll_table(1),
                    KeyCode::PageUp => app.scroll_table(-10),
                    KeyCode::PageDown => app.scroll_table(10),
                    KeyCode::Backspace if app.is_editing() => app.pop_keyword_char(),
                    KeyCode::Char(c) if app.is_editing() && !ctrl => app.push_keyword_char(c),
                    _ => {}
                }
            }
        }
    }
}
