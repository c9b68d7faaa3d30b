// Services
// Services provide the page's core behaviors: date helpers, the quiz API
// port, and the quiz engine.

pub mod date_service;
pub mod quiz_api;
pub mod quiz_engine;
