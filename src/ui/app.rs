//! Main TUI application state and logic

use crate::playback::{Controller, Tick};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Longest the loop waits for input before re-checking playback
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Slider movement for ←/→ and ↓/↑
const FINE_STEP: i32 = 10;
const COARSE_STEP: i32 = 100;

/// The main application state
pub struct App {
    /// Owner of the array and playback
    pub controller: Controller,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        App {
            controller,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.advance(Instant::now());

            // Wake for input or for the next step, whichever is sooner
            let timeout = self
                .controller
                .next_due()
                .map(|due| due.saturating_duration_since(Instant::now()))
                .unwrap_or(POLL_INTERVAL)
                .min(POLL_INTERVAL);

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

    /// Drive playback one tick and reflect the outcome in the status line
    fn advance(&mut self, now: Instant) {
        match self.controller.tick(now) {
            Tick::Advanced(_) => {
                self.status_message = "Sorting...".to_string();
            }
            Tick::Finished => {
                self.status_message = format!(
                    "Sorted in {} step(s)",
                    self.controller.view().total_steps
                );
            }
            Tick::Idle | Tick::Waiting => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Bars on top, controls row, then status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let view = self.controller.view();
        super::panes::render_bars_pane(frame, chunks[0], &view);
        super::panes::render_controls_pane(frame, chunks[1], &view);
        super::panes::render_status_bar(frame, chunks[2], &self.status_message, &view);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                // Reset is disabled while sorting; stop first
                if self.controller.is_running() {
                    self.status_message = "Sorting in progress (x to stop)".to_string();
                } else {
                    self.controller.reset();
                    self.status_message = "New array".to_string();
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
                if self.controller.start(Instant::now()) {
                    self.status_message = format!(
                        "Sorting with {}...",
                        self.controller.config().algorithm.name()
                    );
                } else {
                    self.status_message = "Already sorting".to_string();
                }
            }
            KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Esc => {
                if self.controller.stop() {
                    self.status_message = "Stopped".to_string();
                }
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Tab => {
                self.controller.cycle_algorithm(true);
                self.status_message = self.pending_note();
            }
            KeyCode::BackTab => {
                self.controller.cycle_algorithm(false);
                self.status_message = self.pending_note();
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.controller.toggle_ascending();
                self.status_message = self.pending_note();
            }
            KeyCode::Left => self.nudge_speed(-FINE_STEP),
            KeyCode::Right => self.nudge_speed(FINE_STEP),
            KeyCode::Down => self.nudge_speed(-COARSE_STEP),
            KeyCode::Up => self.nudge_speed(COARSE_STEP),
            _ => {}
        }
    }

    fn nudge_speed(&mut self, delta: i32) {
        self.controller.nudge_speed(delta);
        self.status_message = self.pending_note();
    }

    /// Settings apply to the next run, so say so while one is in flight
    fn pending_note(&self) -> String {
        let config = self.controller.config();
        let summary = format!(
            "{}, {}, {} ms",
            config.algorithm.name(),
            if config.ascending { "ascending" } else { "descending" },
            config.speed.millis()
        );
        if self.controller.is_running() {
            format!("{} (applies to next sort)", summary)
        } else {
            summary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::make_rng;
    use crate::config::{Algorithm, ArrayConfig, SortConfig, Speed};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let config = SortConfig::new(Algorithm::BubbleSort, true, Speed::from_slider(1999));
        let controller =
            Controller::new(ArrayConfig::default(), config, make_rng(Some(11))).unwrap();
        App::new(controller)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_renders_into_test_backend() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        press(&mut app, KeyCode::Char('s'));
        app.advance(Instant::now() + Duration::from_millis(5));
        terminal.draw(|f| app.render(f)).unwrap();

        // Tiny terminals must not panic either
        let mut tiny = Terminal::new(TestBackend::new(4, 3)).unwrap();
        tiny.draw(|f| app.render(f)).unwrap();
    }

    #[test]
    fn test_reset_ignored_while_sorting() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert!(app.controller.is_running());
        let before = app.controller.view().total_steps;

        press(&mut app, KeyCode::Char('r'));
        assert!(app.controller.is_running());
        assert_eq!(app.controller.view().total_steps, before);

        press(&mut app, KeyCode::Esc);
        assert!(!app.controller.is_running());
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.status_message, "New array");
    }

    #[test]
    fn test_second_start_reports_already_sorting() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.status_message, "Already sorting");
    }

    #[test]
    fn test_settings_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.controller.config().algorithm, Algorithm::InsertionSort);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.controller.config().algorithm, Algorithm::QuickSort);

        press(&mut app, KeyCode::Char('d'));
        assert!(!app.controller.config().ascending);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.controller.config().speed.slider(), 1889);
        assert_eq!(app.status_message, "Quick Sort, descending, 111 ms");
    }

    #[test]
    fn test_finish_message() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        let mut now = Instant::now();
        while app.controller.is_running() {
            now += Duration::from_millis(1);
            app.advance(now);
        }
        assert_eq!(app.status_message, "Sorted in 4950 step(s)");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
