// sortty: step-by-step sorting algorithm visualizer

mod cli;

use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use sortty::playback::{Session, Ticker};
use sortty::ui::App;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing_to_file(&cli.log_path())?;

    let source = cli.data_source()?;
    let data = source.load().context("load data")?;
    tracing::info!(len = data.len(), fps = cli.fps, "starting");

    let mut session = Session::new(data)?;
    if let Some(name) = &cli.algorithm {
        session.select_algorithm(name)?;
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session, source, Ticker::from_fps(cli.fps));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("ui loop")
}

fn init_tracing_to_file(log_path: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_init_reports_second_install() {
        let path = std::env::temp_dir().join(format!("sortty-test-{}.log", std::process::id()));
        assert!(init_tracing_to_file(&path).is_ok());
        assert!(path.exists());

        // A global subscriber is already installed, so this must fail loudly
        let err = init_tracing_to_file(&path).unwrap_err();
        assert!(err.to_string().contains("install log subscriber"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_log_init_rejects_unwritable_path() {
        let err = init_tracing_to_file(Path::new("/definitely/not/here/sortty.log")).unwrap_err();
        assert!(err.to_string().contains("open log file"));
    }
}
