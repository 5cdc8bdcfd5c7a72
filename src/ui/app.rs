//! Main TUI application state and logic

use crate::config::{snap_delay, DELAY_STEP_MS, MAX_DELAY_MS, MIN_DELAY_MS};
use crate::engine::algorithm::Algorithm;
use crate::engine::controller::RunController;
use crate::input::{generate, GeneratorConfig};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// The main application state
pub struct App {
    /// The run controller instance
    pub controller: RunController,

    /// Algorithm used for the next restart
    pub algorithm: Algorithm,

    /// Array every restart sorts
    pub input: Vec<i64>,

    /// Settings for the `r` key
    pub generator: GeneratorConfig,
    rng: StdRng,

    /// Scroll offset of the step log
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub is_error: bool,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Interval between auto-play steps, in milliseconds
    pub delay_ms: u64,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app and start `algorithm` on `input`
    pub fn new(
        algorithm: Algorithm,
        input: Vec<i64>,
        generator: GeneratorConfig,
        rng: StdRng,
        delay: Duration,
        autoplay: bool,
    ) -> Self {
        let mut app = App {
            controller: RunController::new(),
            algorithm,
            input,
            generator,
            rng,
            log_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_error: false,
            is_playing: false,
            delay_ms: snap_delay(u64::try_from(delay.as_millis()).unwrap_or(MAX_DELAY_MS)),
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };
        app.restart();
        app.is_playing = autoplay && !app.controller.is_finished() && !app.is_error;
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.delay() {
                if !self.step_forward() {
                    self.is_playing = false;
                }
                if self.controller.is_finished() && self.controller.is_at_head() {
                    self.is_playing = false;
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(20))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above a one-line status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(pane_area);

        // Left column: Bars (top) | Log (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        let current = self.controller.current_frame();
        let title = format!("{} | {} elements", self.algorithm.name(), self.input.len());

        super::panes::render_bars_pane(frame, left_rows[0], current, &title, self.is_playing);

        super::panes::render_log_pane(
            frame,
            left_rows[1],
            self.controller.frames(),
            self.controller.position(),
            &mut self.log_scroll,
        );

        super::panes::render_legend_pane(
            frame,
            columns[1],
            self.algorithm,
            current.map(|f| &f.render),
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &super::panes::StatusRenderData {
                message: &self.status_message,
                position: self.controller.position(),
                total_frames: self.controller.frame_count(),
                memory_bytes: self.controller.frames().memory_usage(),
                delay_ms: self.delay_ms,
                is_playing: self.is_playing,
                is_finished: self.controller.is_finished(),
                is_error: self.is_error,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n).take_while(|_| self.step_forward()).count();
                if !self.is_error {
                    self.status_message = format!("Stepped forward {stepped} step(s)");
                }
            }
            KeyCode::Tab => self.select_algorithm(self.algorithm.next()),
            KeyCode::BackTab => self.select_algorithm(self.algorithm.prev()),
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => {
                self.log_scroll = self.log_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.log_scroll = self.log_scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter | KeyCode::End => {
                self.is_playing = false;
                match self.controller.jump_to_latest() {
                    Ok(_) => self.set_status("Jumped to latest step"),
                    Err(e) => self.set_error(format!("Cannot jump: {e}")),
                }
                self.log_scroll = usize::MAX;
            }
            KeyCode::Backspace | KeyCode::Home => {
                self.is_playing = false;
                match self.controller.rewind_to_start() {
                    Ok(_) => self.set_status("Jumped to start"),
                    Err(e) => self.set_error(format!("Cannot jump: {e}")),
                }
                self.log_scroll = 0;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.input = generate(&self.generator, &mut self.rng);
                info!(len = self.input.len(), distribution = %self.generator.distribution, "generated input");
                self.restart();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.restart(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.delay_ms = self.delay_ms.saturating_sub(DELAY_STEP_MS).max(MIN_DELAY_MS);
                self.set_status(format!("Delay {}ms", self.delay_ms));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.delay_ms = (self.delay_ms + DELAY_STEP_MS).min(MAX_DELAY_MS);
                self.set_status(format!("Delay {}ms", self.delay_ms));
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            self.set_status("Paused");
        } else if self.controller.is_finished() && self.controller.is_at_head() {
            self.set_status("Sort complete. Press s to restart");
        } else {
            self.is_playing = true;
            self.last_play_time = Instant::now()
                .checked_sub(self.delay())
                .unwrap_or(Instant::now());
            self.set_status("Playing...");
        }
    }

    /// Switch algorithm and restart on the same input
    fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.restart();
    }

    /// Start a fresh run of the selected algorithm on the current input
    pub fn restart(&mut self) {
        self.is_playing = false;
        self.log_scroll = 0;
        match self.controller.start(self.algorithm, &self.input) {
            Ok(()) => self.set_status(format!("{} ready", self.algorithm.name())),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Step forward in execution, returning whether a frame was shown
    pub fn step_forward(&mut self) -> bool {
        if self.controller.is_finished() && self.controller.is_at_head() {
            self.set_status("Sort complete");
            return false;
        }
        match self.controller.step_forward() {
            Ok(outcome) => {
                self.set_status(outcome.message);
                // Auto-scroll log to bottom
                self.log_scroll = usize::MAX;
                true
            }
            Err(e) => {
                self.set_error(format!("Cannot step forward: {e}"));
                false
            }
        }
    }

    /// Step backward in execution
    pub fn step_backward(&mut self) {
        match self.controller.step_backward() {
            Ok(frame) => {
                let message = format!("Viewing step {}", frame.step);
                self.set_status(message);
                self.log_scroll = usize::MAX;
            }
            Err(e) => self.set_error(format!("Cannot step backward: {e}")),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = true;
    }
}
