//! Handlers for the public feedback log.
//!
//! Feedback is not tied to an account, so none of these endpoints require
//! authentication.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use skillsync_db::models::feedback::{CreateFeedback, Feedback};
use skillsync_db::repositories::feedback_repo::RECENT_FEEDBACK_LIMIT;
use skillsync_db::repositories::FeedbackRepo;
use validator::Validate;

use super::{require_text, validate_body};
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /feedback`.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitFeedbackRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub author_name: String,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub message: String,
}

/// GET /api/v1/feedback
///
/// All entries, newest first.
pub async fn list_feedback(State(state): State<AppState>) -> Json<DataResponse<Vec<Feedback>>> {
    Json(DataResponse {
        data: load_newest(&state, None).await,
    })
}

/// GET /api/v1/feedback/recent
///
/// The newest few entries, for the landing page.
pub async fn list_recent_feedback(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<Feedback>>> {
    Json(DataResponse {
        data: load_newest(&state, Some(RECENT_FEEDBACK_LIMIT)).await,
    })
}

/// POST /api/v1/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(input): Json<SubmitFeedbackRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Feedback>>)> {
    validate_body(&input)?;
    require_text("author_name", &input.author_name)?;
    require_text("message", &input.message)?;

    let feedback = FeedbackRepo::create(
        &state.pool,
        &CreateFeedback {
            author_name: input.author_name.trim().to_string(),
            rating: input.rating,
            message: input.message.trim().to_string(),
        },
    )
    .await?;

    tracing::info!(feedback_id = feedback.id, rating = feedback.rating, "Feedback submitted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: feedback })))
}

/// Read feedback, degrading to an empty list when the store is unavailable.
async fn load_newest(state: &AppState, limit: Option<i64>) -> Vec<Feedback> {
    match FeedbackRepo::list_newest_first(&state.pool, limit).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load feedback, returning empty list");
            Vec::new()
        }
    }
}
