//! App Core.
//!
//! Central struct wiring the database, storage, bookmark store, quiz engine,
//! and date helpers behind one page-level surface.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::bookmark_store::BookmarkStore;
use crate::services::date_service::{DateService, DateServiceTrait};
use crate::services::quiz_api::{QuizApiTrait, DEFAULT_QUESTION_COUNT};
use crate::services::quiz_engine::{QuizEngine, QuizEngineTrait};
use crate::storage::SqliteStorage;
use crate::types::page::FormState;
use crate::types::quiz::QuizStatus;

/// Selector of the page's date input.
pub const DATE_INPUT_SELECTOR: &str = "#quiz-date";

/// Central application struct holding all components of the quiz page.
pub struct App {
    pub db: Arc<Database>,
    pub bookmark_store: BookmarkStore,
    pub quiz_engine: QuizEngine,
    pub date_service: DateService,
    pub form: FormState,
}

impl App {
    /// Creates a new App over the SQLite database at `db_path`, with quiz
    /// fetching delegated to the injected API port.
    pub fn new(
        db_path: &str,
        api: Box<dyn QuizApiTrait>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let storage = SqliteStorage::new(db.clone());

        Ok(Self {
            db,
            bookmark_store: BookmarkStore::new(Box::new(storage)),
            quiz_engine: QuizEngine::new(api),
            date_service: DateService::new(),
            form: FormState::new(),
        })
    }

    /// Creates a new App fetching quizzes over HTTP from `base_url`.
    #[cfg(feature = "network")]
    pub fn with_http_api(
        db_path: &str,
        base_url: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let api = crate::services::quiz_api::HttpQuizApi::new(base_url);
        Self::new(db_path, Box::new(api))
    }

    /// Startup sequence: register the date input and set it to today.
    pub fn startup(&mut self) {
        self.form.register(DATE_INPUT_SELECTOR);
        self.date_service
            .apply_today(&mut self.form, DATE_INPUT_SELECTOR);
    }

    /// Loads the quiz for the day currently shown in the date input.
    ///
    /// Falls back to an unscoped quiz when the input holds no usable date.
    pub fn load_today_quiz(&mut self, count: Option<u32>) -> QuizStatus {
        let day_key = self
            .form
            .value(DATE_INPUT_SELECTOR)
            .and_then(|value| self.date_service.to_compact_day_key(value));
        self.quiz_engine
            .load_quiz(day_key.as_deref(), count.unwrap_or(DEFAULT_QUESTION_COUNT))
    }
}
