//! Skill catalog rows and progress-joined views.

use serde::Serialize;
use skillsync_core::progress::AssessedSkill;
use skillsync_core::skill::SkillCategory;
use skillsync_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub industry_need_level: i32,
    pub roadmap_group: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A skill joined with one user's progress.
///
/// Skills the user never touched report level 1 and zero completions.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillWithProgress {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "industryNeed")]
    pub industry_need_level: i32,
    pub current_level: i32,
    pub completed_count: i32,
    pub roadmap_group: Option<String>,
}

/// Category, need, and level of one skill the user has assessed.
#[derive(Debug, Clone, FromRow)]
pub struct AssessedSkillRow {
    pub category: String,
    pub industry_need_level: i32,
    pub current_level: i32,
}

impl AssessedSkillRow {
    /// Convert to the core aggregation input.
    pub fn to_assessed(&self) -> Result<AssessedSkill, String> {
        Ok(AssessedSkill {
            category: SkillCategory::from_str_value(&self.category)?,
            industry_need: self.industry_need_level,
            current_level: self.current_level,
        })
    }
}
