//! Quiz API port.
//!
//! The quiz content lives behind an external HTTP API; this module defines
//! the request/response port the engine consumes, and the blocking HTTP
//! implementation used in production builds.

use crate::types::errors::QuizError;
use crate::types::quiz::QuizResponse;

/// Fixed path of the quiz endpoint on the API host.
pub const QUIZ_ENDPOINT: &str = "/api/quiz";
/// Number of questions requested when the caller does not specify one.
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

/// Query parameters for one quiz request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParams {
    /// "MM-DD" day key scoping the quiz to one day of year.
    pub day_key: Option<String>,
    pub count: u32,
}

impl QuizParams {
    pub fn new(day_key: Option<&str>, count: u32) -> Self {
        Self {
            day_key: day_key.map(str::to_string),
            count,
        }
    }

    /// (name, value) pairs in the order they appear on the request.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(mmdd) = &self.day_key {
            pairs.push(("mmdd", mmdd.clone()));
        }
        pairs.push(("count", self.count.to_string()));
        pairs
    }
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            day_key: None,
            count: DEFAULT_QUESTION_COUNT,
        }
    }
}

/// Trait defining the outbound quiz fetch. This is the engine's only
/// suspension point; implementations block until a response or failure.
pub trait QuizApiTrait {
    fn fetch_quiz(&self, params: &QuizParams) -> Result<QuizResponse, QuizError>;
}

#[cfg(feature = "network")]
pub use http::HttpQuizApi;

#[cfg(feature = "network")]
mod http {
    use super::{QuizApiTrait, QuizParams, QUIZ_ENDPOINT};
    use crate::types::errors::QuizError;
    use crate::types::quiz::QuizResponse;

    /// Blocking HTTP implementation of the quiz API port.
    pub struct HttpQuizApi {
        base_url: String,
        client: reqwest::blocking::Client,
    }

    impl HttpQuizApi {
        /// Creates a client for the API at `base_url` (scheme and host,
        /// with or without a trailing slash).
        pub fn new(base_url: &str) -> Self {
            Self {
                base_url: base_url.trim_end_matches('/').to_string(),
                client: reqwest::blocking::Client::new(),
            }
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }
    }

    impl QuizApiTrait for HttpQuizApi {
        /// Single attempt, no timeout, no retry. Any transport error or
        /// non-success status is returned as-is for the caller to report.
        fn fetch_quiz(&self, params: &QuizParams) -> Result<QuizResponse, QuizError> {
            let url = format!("{}{}", self.base_url, QUIZ_ENDPOINT);
            let response = self
                .client
                .get(&url)
                .query(&params.to_query())
                .send()
                .map_err(|e| QuizError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(QuizError::Status(status.as_u16()));
            }

            response
                .json::<QuizResponse>()
                .map_err(|e| QuizError::Parse(e.to_string()))
        }
    }
}
