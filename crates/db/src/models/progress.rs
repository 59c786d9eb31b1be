//! Per-user skill progress rows.

use serde::Serialize;
use skillsync_core::activity::ProgressState;
use skillsync_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `user_skill_progress` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSkillProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub skill_id: DbId,
    pub current_level: i32,
    pub completed_activities_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserSkillProgress {
    pub fn state(&self) -> ProgressState {
        ProgressState {
            current_level: self.current_level,
            completed_count: self.completed_activities_count,
        }
    }
}
