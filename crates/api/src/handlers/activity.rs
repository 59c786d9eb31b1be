//! Handler for recording completed learning activities.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use skillsync_db::repositories::{ProgressRepo, SkillRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Request body for `POST /activities/complete`.
#[derive(Debug, Deserialize)]
pub struct CompleteActivityRequest {
    pub skill_name: String,
}

/// Outcome reported to the client.
#[derive(Debug, Serialize)]
pub struct ActivityOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /api/v1/activities/complete
///
/// Record one completion for the named skill. Every third completion
/// promotes the level (cap 5). The name must match a catalog entry exactly;
/// anything else, the empty string included, returns 404 with
/// `{ success: false, message }` and changes nothing.
pub async fn complete_activity(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CompleteActivityRequest>,
) -> AppResult<Response> {
    let name = input.skill_name.as_str();

    let Some(skill) = SkillRepo::find_by_name(&state.pool, name).await? else {
        tracing::debug!(user_id = user.user_id, skill = %name, "Activity for unknown skill");
        let outcome = ActivityOutcome {
            success: false,
            new_level: None,
            count: None,
            message: Some("Skill not found".into()),
        };
        return Ok((StatusCode::NOT_FOUND, Json(outcome)).into_response());
    };

    let progress = ProgressRepo::record_completion(&state.pool, user.user_id, skill.id).await?;

    tracing::info!(
        user_id = user.user_id,
        skill = %skill.name,
        level = progress.current_level,
        count = progress.completed_activities_count,
        "Activity completed",
    );

    let outcome = ActivityOutcome {
        success: true,
        new_level: Some(progress.current_level),
        count: Some(progress.completed_activities_count),
        message: None,
    };
    Ok(Json(outcome).into_response())
}
