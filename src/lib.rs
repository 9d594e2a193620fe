//! # learn-easy
//!
//! A terminal multiple-choice quiz player. Quizzes are plain JSON files:
//! an ordered array of questions, each with options and the 0-based index
//! of the correct one. A quiz can come from the bundled file, a path given
//! on the command line, or a previously imported file held in a local
//! single-slot store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use learn_easy::{App, ImportStore, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let store = ImportStore::at_default_location();
//!     let app = App::new(None, &store);
//!     learn_easy::run(app, &store)
//! }
//! ```

mod app;
mod data;
mod models;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{AdvanceOutcome, App, Session};
pub use data::{resolve, ImportStore, ImportedQuiz, LoadError, QuizSource, DEFAULT_QUIZ_PATH};
pub use models::{DocumentError, Page, QuizDocument, QuizQuestion};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading a quiz document.
    Load(LoadError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load quiz: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// Run the quiz player in the terminal.
///
/// Takes over the terminal, drives the UI until the user quits, then
/// restores the terminal.
pub fn run(mut app: App, store: &ImportStore) -> Result<(), QuizError> {
    let mut term = terminal::init()?;
    let result = run_event_loop(&mut term, &mut app, store);
    terminal::restore()?;
    result
}

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    store: &ImportStore,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // One resolve at a time, performed after the loading page has been
        // drawn so it stays on screen for the duration of the read.
        if let Some(source) = app.take_pending() {
            app.finish_load(resolve(&source, store));
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.page() {
        Page::Home => handle_home_input(app, key),
        Page::Loading => matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')),
        Page::Quiz => handle_quiz_input(app, key),
        Page::Result => handle_result_input(app, key),
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_source();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_source();
            false
        }
        KeyCode::Enter => {
            app.start_selected();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor_previous();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor_next();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.choose();
            false
        }
        KeyCode::Right | KeyCode::Char('n') => {
            app.advance();
            false
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.back();
            false
        }
        KeyCode::Esc => {
            app.go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.retry();
            false
        }
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Esc => {
            app.go_home();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
