//! Handler for self-assessment submissions.

use std::collections::HashSet;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use skillsync_core::assessment::{parse_batch, RawAssessmentEntry};
use skillsync_db::repositories::{ProgressRepo, SkillRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /assessments`.
#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub entries: Vec<RawAssessmentEntry>,
}

/// How much of a batch was persisted.
#[derive(Debug, Serialize)]
pub struct AssessmentResult {
    pub saved: usize,
    pub skipped: usize,
}

/// POST /api/v1/assessments
///
/// Upsert the caller's self-assessed levels. Malformed entries are skipped
/// one by one; the valid remainder commits as a single transaction.
pub async fn submit_assessment(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<SubmitAssessmentRequest>,
) -> AppResult<Json<DataResponse<AssessmentResult>>> {
    let known: HashSet<_> = SkillRepo::list_ids(&state.pool).await?.into_iter().collect();
    let parsed = parse_batch(&input.entries, &known);

    for skipped in &parsed.skipped {
        tracing::debug!(
            user_id = user.user_id,
            index = skipped.index,
            reason = %skipped.reason,
            "Assessment entry skipped",
        );
    }

    if !parsed.entries.is_empty() {
        ProgressRepo::save_assessment(&state.pool, user.user_id, &parsed.entries).await?;
    }

    tracing::info!(
        user_id = user.user_id,
        saved = parsed.entries.len(),
        skipped = parsed.skipped.len(),
        "Assessment saved",
    );

    Ok(Json(DataResponse {
        data: AssessmentResult {
            saved: parsed.entries.len(),
            skipped: parsed.skipped.len(),
        },
    }))
}
