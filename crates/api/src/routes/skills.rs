//! Route definitions for the dashboard, roadmaps, assessments, and activities.
//!
//! Every route here requires authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{activity, assessment, dashboard, roadmap};
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
pub fn dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::get_dashboard))
}

/// Routes mounted at `/roadmap`.
///
/// ```text
/// GET /technical -> get_technical
/// GET /soft      -> get_soft
/// ```
pub fn roadmap_router() -> Router<AppState> {
    Router::new()
        .route("/technical", get(roadmap::get_technical))
        .route("/soft", get(roadmap::get_soft))
}

/// Routes mounted at `/assessments`.
pub fn assessment_router() -> Router<AppState> {
    Router::new().route("/", post(assessment::submit_assessment))
}

/// Routes mounted at `/activities`.
pub fn activity_router() -> Router<AppState> {
    Router::new().route("/complete", post(activity::complete_activity))
}
