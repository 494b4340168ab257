//! Main TUI application state and logic

use crate::data::DataSource;
use crate::playback::{PlaybackState, Session, TickOutcome, Ticker};
use crate::stepper::Algorithm;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest the loop blocks on input, so the elapsed timer keeps redrawing
const MAX_POLL: Duration = Duration::from_millis(50);

/// Minimum gap between two accepted space presses
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// The main application state
pub struct App {
    /// Data set, selection and playback
    pub session: Session,

    /// Where `g` draws a fresh data set from
    pub source: DataSource,

    /// Paces playback ticks
    pub ticker: Ticker,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether `status_message` reports a failure
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a session
    pub fn new(session: Session, source: DataSource, ticker: Ticker) -> Self {
        let status_message = match session.algorithm() {
            Some(algorithm) => format!("{} selected, press space to play", algorithm),
            None => String::from("Pick an algorithm with 1-6"),
        };
        App {
            session,
            source,
            ticker,
            should_quit: false,
            status_message,
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.session.wants_tick() && self.ticker.due(Instant::now()) {
                let outcome = self.session.tick();
                self.after_tick(outcome);
            }

            // Wake up in time for the next tick, but never sleep past MAX_POLL
            let timeout = if self.session.wants_tick() {
                self.ticker.until_due(Instant::now()).min(MAX_POLL)
            } else {
                MAX_POLL
            };

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Chart (left) | sidebar (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(30)])
            .split(pane_area);

        // Sidebar: algorithm list (top) | metrics (bottom)
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Algorithm::ALL.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        let state = self.session.state();
        let title = match self.session.algorithm() {
            Some(algorithm) => algorithm.label(),
            None => "sortty",
        };

        super::panes::render_chart_pane(frame, columns[0], &self.session.frame(), title);

        super::panes::render_algorithms_pane(frame, sidebar[0], self.session.algorithm());

        super::panes::render_metrics_pane(
            frame,
            sidebar[1],
            super::panes::MetricsRenderData {
                algorithm: self.session.algorithm(),
                state,
                metrics: self.session.metrics().snapshot(),
                steps: self.session.steps(),
                elements: self.session.data().len(),
            },
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            super::panes::StatusRenderData {
                message: &self.status_message,
                state,
                is_error: self.status_is_error,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys pick an algorithm directly
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(&algorithm) = Algorithm::ALL.get(index) {
                    self.select(algorithm);
                }
            }
            KeyCode::Up => {
                let algorithm = self
                    .session
                    .algorithm()
                    .map_or(Algorithm::ALL[Algorithm::ALL.len() - 1], Algorithm::prev);
                self.select(algorithm);
            }
            KeyCode::Down => {
                let algorithm = self
                    .session
                    .algorithm()
                    .map_or(Algorithm::ALL[0], Algorithm::next);
                self.select(algorithm);
            }
            KeyCode::Char(' ') => {
                // Toggle playback (with debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= SPACE_DEBOUNCE {
                    self.last_space_press = Instant::now();
                    self.toggle();
                }
            }
            KeyCode::Right => self.step(),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.reset();
                self.set_status("Reset");
            }
            KeyCode::Char('g') | KeyCode::Char('G') => self.regenerate(),
            _ => {}
        }
    }

    fn select(&mut self, algorithm: Algorithm) {
        self.session.select(algorithm);
        self.set_status(format!("{} selected", algorithm));
    }

    fn toggle(&mut self) {
        if self.session.algorithm().is_none() {
            self.set_error("Pick an algorithm first (1-6)");
            return;
        }
        let was = self.session.state();
        match self.session.toggle() {
            Ok(()) => match self.session.state() {
                PlaybackState::Running => {
                    if was != PlaybackState::Paused {
                        self.ticker.reset();
                    }
                    self.set_status("Playing...");
                }
                PlaybackState::Paused => self.set_status("Paused, → steps"),
                _ => {}
            },
            Err(e) => self.set_error(format!("Cannot play: {}", e)),
        }
    }

    fn step(&mut self) {
        if self.session.state() != PlaybackState::Paused {
            self.set_status("Pause first to step");
            return;
        }
        let outcome = self.session.step();
        match outcome {
            TickOutcome::Stepped => {
                let steps = self.session.steps();
                self.set_status(format!("Step {}", steps));
            }
            _ => self.after_tick(outcome),
        }
    }

    fn regenerate(&mut self) {
        match self.source.load() {
            Ok(values) => match self.session.load(values) {
                Ok(()) => {
                    let message = if self.source.is_random() {
                        "New data"
                    } else {
                        "Data reloaded"
                    };
                    self.set_status(message);
                }
                Err(e) => self.set_error(e.to_string()),
            },
            Err(e) => {
                tracing::warn!(error = %e, "could not reload data");
                self.set_error(e.to_string());
            }
        }
    }

    fn after_tick(&mut self, outcome: TickOutcome) {
        if outcome == TickOutcome::Completed {
            let metrics = self.session.metrics().snapshot();
            self.set_status(format!(
                "Sorted: {} comparisons, {} swaps in {:.2}s",
                metrics.comparisons,
                metrics.swaps,
                metrics.elapsed.as_secs_f64()
            ));
        } else if self.session.state() == PlaybackState::Idle && !self.session.is_finished() {
            // The controller gave up on its stepper
            self.set_error("Playback stopped unexpectedly, see the log");
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }
}
