// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP boundary.
//!
//! `GET /search?q=<query>&offset=<n>` answers with a JSON array of preview
//! strings and an `X-Has-More` header. Everything else is served from a static
//! directory. The searcher is shared read-only through axum state; handlers
//! never lock.
//!
//! | Condition                      | Status | Body                                  |
//! |--------------------------------|--------|---------------------------------------|
//! | `q` missing or empty           | 400    | `missing search query in URL params`  |
//! | `offset` not an integer        | 400    | `invalid offset in URL params`        |
//! | query fails to compile         | 400    | error message                         |
//! | success                        | 200    | `["preview", ...]`                    |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::SearchError;
use crate::search::Searcher;

/// Response header carrying the has-more flag.
pub const HAS_MORE_HEADER: &str = "x-has-more";

/// Response header carrying the total match count.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

const MISSING_QUERY: &str = "missing search query in URL params";
const INVALID_OFFSET: &str = "invalid offset in URL params";

/// Raw query parameters. Parsed by hand so bad input maps to the exact
/// client-error bodies above.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    offset: Option<String>,
}

/// Build the application router.
pub fn router(searcher: Arc<Searcher>, static_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .fallback_service(ServeDir::new(static_dir.into()))
        .layer(TraceLayer::new_for_http())
        .with_state(searcher)
}

async fn handle_search(
    State(searcher): State<Arc<Searcher>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match params.q {
        Some(q) if !q.is_empty() => q,
        _ => return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response(),
    };

    let offset = match params.offset.as_deref() {
        None => 0,
        Some(raw) => match raw.parse::<i64>() {
            Ok(offset) => offset,
            Err(_) => return (StatusCode::BAD_REQUEST, INVALID_OFFSET).into_response(),
        },
    };

    // Regex scans over a multi-megabyte corpus are CPU-bound
    let task = tokio::task::spawn_blocking(move || searcher.search(&query, offset));
    let page = match task.await {
        Ok(Ok(page)) => page,
        Ok(Err(err @ SearchError::InvalidQuery { .. })) => {
            tracing::debug!(error = %err, "rejected query");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
        Err(err) => {
            tracing::error!(error = %err, "search task failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "search failure").into_response();
        }
    };

    let body = match serde_json::to_vec(&page.results) {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(error = %err, "encoding failure");
            return (StatusCode::INTERNAL_SERVER_ERROR, "encoding failure").into_response();
        }
    };

    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                HeaderName::from_static(HAS_MORE_HEADER),
                page.has_more.to_string(),
            ),
            (
                HeaderName::from_static(TOTAL_COUNT_HEADER),
                page.total.to_string(),
            ),
        ],
        body,
    )
        .into_response()
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(
    searcher: Arc<Searcher>,
    addr: SocketAddr,
    static_dir: PathBuf,
) -> std::io::Result<()> {
    let app = router(searcher, static_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("shakesearch available at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
