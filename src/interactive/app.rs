//! TUI application state and logic

use super::input::{EndScreenKey, decode_end_screen_key, decode_key};
use crate::game::{Game, GameConfig, GameState, Settings, Step};
use crate::wordlists::WordStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the loop waits for a key before redrawing
const TICK: Duration = Duration::from_millis(50);

/// How long an error toast stays up (and blocks input)
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub toast: Option<Toast>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// A message that disappears on its own
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: Message,
    shown_at: Instant,
}

impl Toast {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_DURATION
    }
}

/// Results for this session only; nothing is written to disk
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts wins on guess `n + 1`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, state: GameState, attempts: usize) {
        self.total_games += 1;
        if state == GameState::Win {
            self.games_won += 1;
            if self.guess_distribution.len() < attempts {
                self.guess_distribution.resize(attempts, 0);
            }
            self.guess_distribution[attempts - 1] += 1;
        }
    }

    /// Win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(store: &'a WordStore, config: GameConfig, settings: Settings, mut rng: StdRng) -> Self {
        let game = Game::new(store, config, settings, &mut rng);
        Self {
            game,
            toast: None,
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    /// Whether an error toast is still on screen at `now`
    #[must_use]
    pub fn is_blocked(&self, now: Instant) -> bool {
        self.toast
            .as_ref()
            .is_some_and(|toast| toast.message.style == MessageStyle::Error && !toast.is_expired(now))
    }

    /// Drop the toast once its time is up
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn show_toast(&mut self, text: &str, style: MessageStyle) {
        self.toast = Some(Toast {
            message: Message {
                text: text.to_string(),
                style,
            },
            shown_at: Instant::now(),
        });
    }

    /// React to one key press
    pub fn on_key(&mut self, key: KeyEvent) {
        if self.game.state().is_terminal() {
            match decode_end_screen_key(key) {
                EndScreenKey::Restart => self.new_game(),
                EndScreenKey::Exit => self.should_quit = true,
                EndScreenKey::Nothing => {}
            }
            return;
        }

        match self.game.handle(decode_key(key)) {
            Step::Rejected(err) => {
                debug!("guess rejected: {err}");
                self.show_toast(&err.to_string(), MessageStyle::Error);
            }
            Step::Finished(state) => self.finish(state),
            Step::Quit => {
                // Quitting a round in progress shows the result screen first
                if let Step::Finished(state) = self.game.forfeit() {
                    self.finish(state);
                }
            }
            Step::Continue | Step::Ignored => {}
        }
    }

    fn finish(&mut self, state: GameState) {
        let attempts = self.game.snapshot().attempt;
        self.stats.record(state, attempts);
        self.toast = None;
        if state == GameState::Win {
            self.show_toast(celebration(attempts), MessageStyle::Success);
        }
    }

    pub fn new_game(&mut self) {
        self.game = self.game.restart(&mut self.rng);
        self.toast = None;
        self.show_toast("New game started!", MessageStyle::Info);
        info!("restarted; {} games played this session", self.stats.total_games);
    }
}

fn celebration(attempts: usize) -> &'static str {
    match attempts {
        1 => "HOLE IN ONE! Extraordinary!",
        2 => "MAGNIFICENT! Two guesses!",
        3 => "SPLENDID! Three guesses!",
        4 => "GREAT JOB! Four guesses!",
        5 => "NICE WORK! Five guesses!",
        6 => "PHEW! Got it in six!",
        _ => "SOLVED!",
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.expire_toast(now);
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Keys typed while an error is showing are dropped
            if app.is_blocked(Instant::now()) {
                continue;
            }

            app.on_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
