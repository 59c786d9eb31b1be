//! Handlers for the technical roadmap and soft-skill views.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use skillsync_core::skill::SkillCategory;
use skillsync_core::types::DbId;
use skillsync_db::models::skill::SkillWithProgress;
use skillsync_db::repositories::SkillRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View-models
// ---------------------------------------------------------------------------

/// Technical roadmap: group names in catalog order plus every technical skill.
#[derive(Debug, Serialize)]
pub struct TechnicalRoadmap {
    pub roadmap_groups: Vec<String>,
    pub skills: Vec<SkillWithProgress>,
}

/// One soft skill with the caller's progress.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkillView {
    pub id: DbId,
    pub name: String,
    pub industry_need: i32,
    pub current_level: i32,
    pub completed_count: i32,
}

impl From<SkillWithProgress> for SoftSkillView {
    fn from(skill: SkillWithProgress) -> Self {
        Self {
            id: skill.id,
            name: skill.name,
            industry_need: skill.industry_need_level,
            current_level: skill.current_level,
            completed_count: skill.completed_count,
        }
    }
}

/// Soft skills with suggested activities and icons keyed by skill name.
#[derive(Debug, Serialize)]
pub struct SoftSkillsView {
    pub skills: Vec<SoftSkillView>,
    pub activities: BTreeMap<String, Vec<String>>,
    pub icons: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/roadmap/technical
pub async fn get_technical(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TechnicalRoadmap>>> {
    let skills =
        SkillRepo::list_with_progress(&state.pool, user.user_id, SkillCategory::Technical).await?;

    Ok(Json(DataResponse {
        data: TechnicalRoadmap {
            roadmap_groups: state.catalog.roadmap_groups(),
            skills,
        },
    }))
}

/// GET /api/v1/roadmap/soft
pub async fn get_soft(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SoftSkillsView>>> {
    let skills = SkillRepo::list_with_progress(&state.pool, user.user_id, SkillCategory::Soft)
        .await?
        .into_iter()
        .map(SoftSkillView::from)
        .collect();

    Ok(Json(DataResponse {
        data: SoftSkillsView {
            skills,
            activities: state.catalog.activities(),
            icons: state.catalog.icons(),
        },
    }))
}
