//! src/supabase/error.rs
use reqwest::StatusCode;
use serde_json::{json, Value};

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("Supabase rejected the query with status {status}")]
    Rejected { status: StatusCode, payload: Value },
    #[error("Failed to reach Supabase")]
    Transport(#[from] reqwest::Error),
    #[error("Supabase answered with something other than a list of rows")]
    Decode(#[source] serde_json::Error),
}

impl QueryError {
    pub(crate) fn rejected(status: StatusCode, body: &[u8]) -> Self {
        let payload = serde_json::from_slice(body)
            .unwrap_or_else(|_| json!({ "message": String::from_utf8_lossy(body) }));

        Self::Rejected { status, payload }
    }

    /// The error value callers get to see, untouched when Supabase sent one.
    pub fn payload(&self) -> Value {
        match self {
            QueryError::Rejected { payload, .. } => payload.clone(),
            QueryError::Transport(e) => fetch_failure(self, e),
            QueryError::Decode(e) => fetch_failure(self, e),
        }
    }
}

// Same shape the hosted client libraries report when the request never
// produced a PostgREST error.
fn fetch_failure(e: &QueryError, cause: &dyn std::error::Error) -> Value {
    let mut details = vec![cause.to_string()];
    let mut current = cause.source();
    while let Some(next) = current {
        details.push(next.to_string());
        current = next.source();
    }

    json!({
        "message": e.to_string(),
        "details": details.join(": "),
        "hint": "",
        "code": "",
    })
}
