//! histoday — headless engine for a this-day-in-history quiz page.
//!
//! Entry point: runs an interactive console demo walking every component.

use histoday::services::quiz_api::{QuizApiTrait, QuizParams};
use histoday::types::errors::QuizError;
use histoday::types::quiz::{QuizQuestion, QuizResponse};

/// Canned in-process quiz API so the demo needs no network.
struct DemoQuizApi;

impl QuizApiTrait for DemoQuizApi {
    fn fetch_quiz(&self, params: &QuizParams) -> Result<QuizResponse, QuizError> {
        let questions = vec![
            QuizQuestion {
                id: "q1".to_string(),
                question: "In which year did this happen? — First transatlantic radio signal"
                    .to_string(),
                description: Some("Received by Marconi in St. John's.".to_string()),
                options: vec![
                    "1895".to_string(),
                    "1901".to_string(),
                    "1910".to_string(),
                    "1923".to_string(),
                ],
                correct: 1901,
            },
            QuizQuestion {
                id: "q2".to_string(),
                question: "In which year did this happen? — Voyager 1 launch".to_string(),
                description: None,
                options: vec![
                    "1969".to_string(),
                    "1972".to_string(),
                    "1977".to_string(),
                    "1981".to_string(),
                ],
                correct: 1977,
            },
        ];
        let count = questions.len().min(params.count as usize);
        let questions: Vec<_> = questions.into_iter().take(count).collect();
        Ok(QuizResponse {
            count: questions.len(),
            questions,
        })
    }
}

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                 histoday v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║      This-day-in-history quiz and bookmark engine          ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_storage();
    demo_date_service();
    demo_bookmarks();
    demo_quiz_engine();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use histoday::database::connection::Database;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_storage() {
    use std::sync::Arc;
    use histoday::database::connection::Database;
    use histoday::storage::{SqliteStorage, StoragePort};
    section("Storage Port (SQLite)");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut storage = SqliteStorage::new(db);

    storage.set("demo_key", "demo value").unwrap();
    println!("  Stored demo_key = {:?}", storage.get("demo_key").unwrap());

    storage.set("demo_key", "replaced").unwrap();
    println!("  Replaced demo_key = {:?}", storage.get("demo_key").unwrap());

    storage.remove("demo_key").unwrap();
    println!("  Removed demo_key -> {:?}", storage.get("demo_key").unwrap());
    println!("  ✓ SqliteStorage OK");
    println!();
}

fn demo_date_service() {
    use histoday::services::date_service::{DateService, DateServiceTrait};
    use histoday::types::page::FormState;
    section("Date Service");

    let service = DateService::new();
    println!("  Today: {}", service.today_value());
    println!("  Day key for 2024-03-07: {:?}", service.to_compact_day_key("2024-03-07"));
    println!("  Day key for 2024-3-7:   {:?}", service.to_compact_day_key("2024-3-7"));
    println!("  Day key for \"\":         {:?}", service.to_compact_day_key(""));

    let mut form = FormState::new();
    form.register("#quiz-date");
    service.apply_today(&mut form, "#quiz-date");
    println!("  #quiz-date set to: {}", form.value("#quiz-date").unwrap());

    let missing = service.apply_today(&mut form, "#missing-input");
    println!("  Missing selector updated: {}", missing);
    println!("  ✓ DateService OK");
    println!();
}

fn demo_bookmarks() {
    use histoday::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
    use histoday::storage::MemoryStorage;
    use histoday::types::bookmark::BookmarkRecord;
    section("Bookmark Store");

    let mut store = BookmarkStore::new(Box::new(MemoryStorage::new()));

    let added = store
        .add(BookmarkRecord::new("Moon landing", "1969-07-20"))
        .unwrap();
    println!("  Added 'Moon landing': {}", added);

    let added = store
        .add(BookmarkRecord::new("Voyager 1 launch", "1977-09-05"))
        .unwrap();
    println!("  Added 'Voyager 1 launch': {} (newest first)", added);

    let duplicate = store
        .add(BookmarkRecord::new("Moon landing", "1969-07-20"))
        .unwrap();
    println!("  Duplicate add rejected: {}", !duplicate);

    let list = store.list();
    println!("  List ({} records), first = {}", list.len(), list[0].title);

    let export = store.export_all().unwrap();
    println!("  Export: {} ({}, {} bytes)", export.filename, export.mime_type, export.body.len());

    store.clear().unwrap();
    println!("  Cleared: {} records remain", store.list().len());
    println!("  ✓ BookmarkStore OK");
    println!();
}

fn demo_quiz_engine() {
    use histoday::services::quiz_engine::{QuizEngine, QuizEngineTrait};
    section("Quiz Engine");

    let mut engine = QuizEngine::new(Box::new(DemoQuizApi));
    println!("  Status: {:?}", engine.status());

    let status = engine.load_quiz(Some("12-12"), 5);
    println!("  Loaded day 12-12: {:?}, {} questions", status, engine.questions().len());

    engine.select("q1", "1901");
    engine.select("q2", "1972");
    println!("  Selected q1=1901 (right), q2=1972 (wrong)");

    let card = engine.submit().unwrap();
    println!("  Graded: {} / {}", card.score, card.total);

    let card = engine.submit().unwrap();
    println!("  Submitted again, another card appended: {} / {}", card.score, card.total);
    println!("  View nodes: {}", engine.view().len());

    let html = engine.format_for_display();
    println!("  Formatted quiz area: {} bytes of HTML", html.len());
    println!("  ✓ QuizEngine OK");
    println!();
}

fn demo_app_core() {
    use histoday::app::App;
    section("App Core (full lifecycle)");

    let mut app = App::new(":memory:", Box::new(DemoQuizApi)).unwrap();
    println!("  Initialized App");

    app.startup();
    println!(
        "  Startup: date input seeded to {}",
        app.form.value(histoday::app::DATE_INPUT_SELECTOR).unwrap()
    );

    let status = app.load_today_quiz(None);
    println!("  Loaded today's quiz: {:?}", status);
    println!("  ✓ App Core OK");
}
