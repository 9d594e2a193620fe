//! The quiz session controller: a state machine over the four pages.
//!
//! All mutation happens through the transition methods here, in response to
//! a key event or the completion of the single outstanding resolve.

use crate::data::{ImportStore, LoadError, QuizSource};
use crate::models::{Page, QuizDocument, QuizQuestion};

/// What happened when the user asked to move to the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next question.
    Moved,
    /// The last question was answered; the result page is now showing.
    Finished,
    /// The current question has no selection yet. Nothing changed.
    MustAnswerFirst,
}

/// One attempt at a quiz document.
pub struct Session {
    document: QuizDocument,
    current_index: usize,
    selections: Vec<Option<usize>>,
    score: usize,
}

impl Session {
    fn new(document: QuizDocument) -> Self {
        let total = document.len();
        Self {
            document,
            current_index: 0,
            selections: vec![None; total],
            score: 0,
        }
    }

    pub fn document(&self) -> &QuizDocument {
        &self.document
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.document.questions()[self.current_index]
    }

    pub fn selections(&self) -> &[Option<usize>] {
        &self.selections
    }

    /// Selection for the question currently on screen.
    pub fn current_selection(&self) -> Option<usize> {
        self.selections[self.current_index]
    }

    pub fn total(&self) -> usize {
        self.document.len()
    }

    /// Only meaningful once the result page is reached.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Recompute the score from scratch. Back-navigation can overwrite
    /// earlier selections, so the score is never accumulated incrementally.
    fn compute_score(&self) -> usize {
        self.selections
            .iter()
            .zip(self.document.questions())
            .filter(|(selection, question)| **selection == Some(question.answer))
            .count()
    }

    fn reset(&mut self) {
        self.current_index = 0;
        self.selections = vec![None; self.document.len()];
    }
}

/// Application state: the current page, the source list shown on the home
/// page, and the session while one is running.
pub struct App {
    page: Page,
    sources: Vec<QuizSource>,
    selected_source: usize,
    pending: Option<QuizSource>,
    session: Option<Session>,
    error: Option<String>,
    notice: Option<String>,
    cursor: usize,
}

impl App {
    /// Build the initial state.
    ///
    /// `initial_quiz` is the startup override: when present it is placed at
    /// the head of the source list and resolved immediately, without waiting
    /// for a start action from the home page.
    pub fn new(initial_quiz: Option<std::path::PathBuf>, store: &ImportStore) -> Self {
        let mut sources = Vec::new();

        if let Some(path) = &initial_quiz {
            sources.push(QuizSource::Path(path.clone()));
        }
        sources.push(QuizSource::Bundled);
        if let Ok(Some(record)) = store.get() {
            sources.push(QuizSource::Imported { name: record.name });
        }

        let mut app = Self {
            page: Page::Home,
            sources,
            selected_source: 0,
            pending: None,
            session: None,
            error: None,
            notice: None,
            cursor: 0,
        };

        if let Some(path) = initial_quiz {
            app.start(QuizSource::Path(path));
        }

        app
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn sources(&self) -> &[QuizSource] {
        &self.sources
    }

    pub fn selected_source(&self) -> usize {
        self.selected_source
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Option the cursor is resting on in the quiz page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn select_next_source(&mut self) {
        if !self.sources.is_empty() {
            self.selected_source = (self.selected_source + 1) % self.sources.len();
        }
    }

    pub fn select_previous_source(&mut self) {
        if !self.sources.is_empty() {
            self.selected_source =
                (self.selected_source + self.sources.len() - 1) % self.sources.len();
        }
    }

    /// Start the source highlighted on the home page.
    pub fn start_selected(&mut self) {
        if let Some(source) = self.sources.get(self.selected_source).cloned() {
            self.start(source);
        }
    }

    /// Begin resolving a source. Rejected unless the home page is showing,
    /// so a second start cannot race an outstanding resolve.
    pub fn start(&mut self, source: QuizSource) {
        if self.page != Page::Home {
            return;
        }
        self.page = Page::Loading;
        self.pending = Some(source);
    }

    /// The source awaiting resolution, handed to the event loop exactly once.
    pub fn take_pending(&mut self) -> Option<QuizSource> {
        self.pending.take()
    }

    /// Complete the outstanding resolve.
    pub fn finish_load(&mut self, result: Result<QuizDocument, LoadError>) {
        if self.page != Page::Loading {
            return;
        }
        match result {
            Ok(document) => {
                self.session = Some(Session::new(document));
                self.page = Page::Quiz;
                self.error = None;
                self.notice = None;
                self.cursor = 0;
            }
            Err(err) => {
                self.session = None;
                self.page = Page::Home;
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn cursor_next(&mut self) {
        if let Some(session) = &self.session {
            let count = session.current_question().options.len();
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn cursor_previous(&mut self) {
        if let Some(session) = &self.session {
            let count = session.current_question().options.len();
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Record the option under the cursor as the answer for the current
    /// question. Does not advance.
    pub fn choose(&mut self) {
        self.select_option(self.cursor);
    }

    /// Record an answer for the current question. Re-selecting overwrites
    /// the prior choice; an out-of-range index is ignored.
    pub fn select_option(&mut self, option: usize) {
        if self.page != Page::Quiz {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if option >= session.current_question().options.len() {
            return;
        }
        let index = session.current_index;
        session.selections[index] = Some(option);
        self.notice = None;
    }

    /// Move to the next question, or finish from the last one. Requires a
    /// selection for the current question.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.page != Page::Quiz {
            return AdvanceOutcome::MustAnswerFirst;
        }
        let Some(session) = self.session.as_mut() else {
            return AdvanceOutcome::MustAnswerFirst;
        };

        if session.current_selection().is_none() {
            self.notice = Some("Please choose an option.".to_string());
            return AdvanceOutcome::MustAnswerFirst;
        }

        self.notice = None;

        if session.current_index + 1 < session.total() {
            session.current_index += 1;
            self.cursor = session.current_selection().unwrap_or(0);
            AdvanceOutcome::Moved
        } else {
            session.score = session.compute_score();
            self.page = Page::Result;
            AdvanceOutcome::Finished
        }
    }

    /// Move back one question. Never rejected; selections stay untouched.
    pub fn back(&mut self) {
        if self.page != Page::Quiz {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.current_index > 0 {
            session.current_index -= 1;
            self.cursor = session.current_selection().unwrap_or(0);
            self.notice = None;
        }
    }

    /// From the result page: same document, fresh attempt.
    pub fn retry(&mut self) {
        if self.page != Page::Result {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.reset();
            self.page = Page::Quiz;
            self.cursor = 0;
        }
    }

    /// Discard the document and session and return to the home page.
    pub fn go_home(&mut self) {
        self.session = None;
        self.pending = None;
        self.error = None;
        self.notice = None;
        self.page = Page::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, options: &[&str], answer: usize) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            answer,
            lang: None,
        }
    }

    fn two_question_document() -> QuizDocument {
        QuizDocument::new(vec![
            question("first", &["a", "b", "c"], 0),
            question("second", &["x", "y"], 1),
        ])
    }

    /// App already on the quiz page with the given document loaded.
    fn app_with(document: QuizDocument) -> App {
        let mut app = App {
            page: Page::Home,
            sources: vec![QuizSource::Bundled],
            selected_source: 0,
            pending: None,
            session: None,
            error: None,
            notice: None,
            cursor: 0,
        };
        app.start(QuizSource::Bundled);
        app.take_pending();
        app.finish_load(Ok(document));
        app
    }

    #[test]
    fn test_start_enters_loading() {
        let mut app = app_with(two_question_document());
        app.go_home();
        app.start(QuizSource::Bundled);
        assert_eq!(app.page(), Page::Loading);
        assert_eq!(app.take_pending(), Some(QuizSource::Bundled));
    }

    #[test]
    fn test_second_start_while_loading_is_rejected() {
        let mut app = app_with(two_question_document());
        app.go_home();
        app.start(QuizSource::Bundled);
        app.start(QuizSource::Path("other.json".into()));
        // the original start's source is untouched
        assert_eq!(app.take_pending(), Some(QuizSource::Bundled));
        assert_eq!(app.take_pending(), None);
    }

    #[test]
    fn test_load_failure_returns_home_with_message() {
        let mut app = app_with(two_question_document());
        app.go_home();
        app.start(QuizSource::Bundled);
        app.take_pending();
        app.finish_load(Err(LoadError::NotFound {
            source: "quizzes/sample.json".to_string(),
        }));

        assert_eq!(app.page(), Page::Home);
        assert!(!app.error().unwrap().is_empty());
        assert!(app.session().is_none());
    }

    #[test]
    fn test_load_success_initializes_session() {
        let app = app_with(two_question_document());
        assert_eq!(app.page(), Page::Quiz);

        let session = app.session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selections(), &[None, None]);
        assert_eq!(session.total(), 2);
    }

    #[test]
    fn test_advance_without_selection_is_rejected() {
        let mut app = app_with(two_question_document());
        assert_eq!(app.advance(), AdvanceOutcome::MustAnswerFirst);
        assert_eq!(app.session().unwrap().current_index(), 0);
        assert!(!app.notice().unwrap().is_empty());
    }

    #[test]
    fn test_select_then_advance() {
        let mut app = app_with(two_question_document());
        app.select_option(0);
        assert_eq!(app.advance(), AdvanceOutcome::Moved);
        assert_eq!(app.session().unwrap().current_index(), 1);
        assert_eq!(app.page(), Page::Quiz);
    }

    #[test]
    fn test_reselect_overwrites() {
        let mut app = app_with(two_question_document());
        app.select_option(0);
        app.select_option(2);
        assert_eq!(app.session().unwrap().current_selection(), Some(2));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut app = app_with(two_question_document());
        app.select_option(1);
        app.select_option(7);
        assert_eq!(app.session().unwrap().current_selection(), Some(1));
    }

    #[test]
    fn test_back_preserves_selections() {
        let mut app = app_with(two_question_document());
        app.select_option(0);
        app.advance();
        app.select_option(1);
        app.back();

        let session = app.session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selections(), &[Some(0), Some(1)]);

        app.advance();
        assert_eq!(app.session().unwrap().selections(), &[Some(0), Some(1)]);
    }

    #[test]
    fn test_back_at_first_question_is_a_no_op() {
        let mut app = app_with(two_question_document());
        app.select_option(0);
        app.back();
        let session = app.session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_selection(), Some(0));
    }

    #[test]
    fn test_single_question_quiz() {
        // [{"question":"2+2=?","options":["3","4","5"],"answer":1}]
        let doc = QuizDocument::new(vec![question("2+2=?", &["3", "4", "5"], 1)]);
        let mut app = app_with(doc);

        app.select_option(1);
        assert_eq!(app.advance(), AdvanceOutcome::Finished);
        assert_eq!(app.page(), Page::Result);

        let session = app.session().unwrap();
        assert_eq!(session.score(), 1);
        assert_eq!(session.total(), 1);
    }

    #[test]
    fn test_one_of_two_correct() {
        let mut app = app_with(two_question_document());
        app.select_option(0); // correct
        app.advance();
        app.select_option(0); // wrong, answer is 1
        assert_eq!(app.advance(), AdvanceOutcome::Finished);

        let session = app.session().unwrap();
        assert_eq!(session.score(), 1);
        assert_eq!(session.total(), 2);
    }

    #[test]
    fn test_score_recomputed_after_back_navigation() {
        let mut app = app_with(two_question_document());
        app.select_option(1); // wrong
        app.advance();
        app.back();
        app.select_option(0); // corrected
        app.advance();
        app.select_option(1); // correct
        app.advance();

        assert_eq!(app.session().unwrap().score(), 2);
    }

    #[test]
    fn test_score_is_bounded() {
        let mut app = app_with(two_question_document());
        app.select_option(2);
        app.advance();
        app.select_option(0);
        app.advance();

        let session = app.session().unwrap();
        assert!(session.score() <= session.total());
    }

    #[test]
    fn test_retry_resets_but_keeps_document() {
        let mut app = app_with(two_question_document());
        app.select_option(0);
        app.advance();
        app.select_option(1);
        app.advance();
        assert_eq!(app.page(), Page::Result);

        let before = app.session().unwrap().document().clone();
        app.retry();

        assert_eq!(app.page(), Page::Quiz);
        let session = app.session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selections(), &[None, None]);
        assert_eq!(session.document(), &before);
    }

    #[test]
    fn test_retry_only_from_result_page() {
        let mut app = app_with(two_question_document());
        app.select_option(0);
        app.advance();
        app.retry();
        // still mid-quiz, nothing reset
        assert_eq!(app.page(), Page::Quiz);
        assert_eq!(app.session().unwrap().current_index(), 1);
    }

    #[test]
    fn test_home_discards_session() {
        let mut app = app_with(two_question_document());
        app.select_option(0);
        app.go_home();

        assert_eq!(app.page(), Page::Home);
        assert!(app.session().is_none());
        assert_eq!(app.take_pending(), None);
    }

    #[test]
    fn test_cursor_wraps_over_current_options() {
        let mut app = app_with(two_question_document());
        // first question has 3 options
        app.cursor_previous();
        assert_eq!(app.cursor(), 2);
        app.cursor_next();
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_cursor_follows_selection_when_navigating() {
        let mut app = app_with(two_question_document());
        app.select_option(2);
        app.advance();
        app.select_option(1);
        app.back();
        assert_eq!(app.cursor(), 2);
    }
}
