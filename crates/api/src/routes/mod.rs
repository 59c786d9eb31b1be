pub mod auth;
pub mod chat;
pub mod feedback;
pub mod health;
pub mod skills;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 create account (public)
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
/// /auth/me                       current identity (requires auth)
///
/// /dashboard                     per-category gap summary (requires auth)
/// /roadmap/technical             technical roadmap view (requires auth)
/// /roadmap/soft                  soft-skill view (requires auth)
/// /assessments                   submit self-assessment (requires auth)
/// /activities/complete           record a completed activity (requires auth)
///
/// /feedback                      list, submit (public)
/// /feedback/recent               newest entries (public)
///
/// /chat                          chat relay (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes.
        .nest("/auth", auth::router())
        // Skill progress.
        .nest("/dashboard", skills::dashboard_router())
        .nest("/roadmap", skills::roadmap_router())
        .nest("/assessments", skills::assessment_router())
        .nest("/activities", skills::activity_router())
        // Public feedback log.
        .nest("/feedback", feedback::router())
        // Chat relay.
        .nest("/chat", chat::router())
}
