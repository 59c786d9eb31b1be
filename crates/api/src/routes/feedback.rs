//! Route definitions for the `/feedback` resource (public).

use axum::routing::get;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// GET  /        -> list_feedback
/// POST /        -> submit_feedback
/// GET  /recent  -> list_recent_feedback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(feedback::list_feedback).post(feedback::submit_feedback))
        .route("/recent", get(feedback::list_recent_feedback))
}
