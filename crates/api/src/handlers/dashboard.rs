//! Handler for the per-user progress dashboard.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use skillsync_core::error::CoreError;
use skillsync_core::progress::{status_message, summarize, AssessedSkill, ProgressSummary};
use skillsync_db::repositories::ProgressRepo;

use super::auth::find_user;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Dashboard view-model: one gap summary per category plus a greeting.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub summary: ProgressSummary,
    pub status_message: String,
    pub username: String,
    pub email: String,
}

/// GET /api/v1/dashboard
///
/// Aggregate the caller's assessed skills into per-category gap summaries.
pub async fn get_dashboard(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardResponse>>> {
    let account = find_user(&state, user.user_id).await?;

    let assessed = ProgressRepo::list_assessed(&state.pool, user.user_id)
        .await?
        .iter()
        .map(|row| row.to_assessed())
        .collect::<Result<Vec<AssessedSkill>, String>>()
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Corrupt skill row: {e}"))))?;

    let summary = summarize(&assessed);
    tracing::debug!(
        user_id = user.user_id,
        assessed = assessed.len(),
        technical_level = summary.technical.level,
        soft_level = summary.soft.level,
        "Dashboard computed",
    );

    Ok(Json(DataResponse {
        data: DashboardResponse {
            status_message: status_message(&account.username, &summary),
            summary,
            username: account.username,
            email: account.email,
        },
    }))
}
