//! Append-only request log.
//!
//! Every request produces one line
//! `<ISO-8601 timestamp> - Método: <method> - Ruta: <path and query>` in a
//! plain text file. Write failures are reported through `tracing` and never
//! affect the response.

use std::path::{Path, PathBuf};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, SecondsFormat, Utc};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::state::AppState;

/// File sink for request lines.
#[derive(Debug)]
pub struct RequestLog {
    path: PathBuf,
    /// Serializes appends so concurrent lines never interleave.
    write_lock: Mutex<()>,
}

impl RequestLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line for a request, creating the file if needed.
    pub async fn append(&self, method: &str, target: &str) -> std::io::Result<()> {
        let line = format_line(Utc::now(), method, target);

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }
}

/// Format a log line, newline included.
///
/// Timestamps are UTC with millisecond precision and a `Z` suffix.
pub fn format_line(at: DateTime<Utc>, method: &str, target: &str) -> String {
    format!(
        "{} - Método: {method} - Ruta: {target}\n",
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Middleware writing the request line before the request is routed.
pub async fn log_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let target = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_owned(), |pq| pq.as_str().to_owned());

    if let Err(err) = state.request_log.append(method.as_str(), &target).await {
        tracing::error!(
            error = %err,
            path = %state.request_log.path().display(),
            "Failed to write request log"
        );
    }

    next.run(request).await
}
