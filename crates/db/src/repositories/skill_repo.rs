//! Repository for the `skills` table (the skill catalog).

use skillsync_core::catalog::SeedSkill;
use skillsync_core::skill::SkillCategory;
use skillsync_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{Skill, SkillWithProgress};

/// Column list for the `skills` table.
const COLUMNS: &str =
    "id, name, category, industry_need_level, roadmap_group, created_at, updated_at";

/// Provides catalog seeding and lookups.
pub struct SkillRepo;

impl SkillRepo {
    /// Ensure every seed row exists, keyed by name.
    ///
    /// Existing names are left untouched (no update-in-place), so running
    /// this on every start is a no-op once the catalog is populated. All
    /// inserts commit together. Returns the number of rows inserted.
    pub async fn seed(pool: &PgPool, rows: &[SeedSkill]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for row in rows {
            let result = sqlx::query(
                "INSERT INTO skills (name, category, industry_need_level, roadmap_group) \
                 VALUES ($1, $2, $3, $4) \
                 ON CONFLICT ON CONSTRAINT uq_skills_name DO NOTHING",
            )
            .bind(&row.name)
            .bind(row.category.as_str())
            .bind(row.industry_need)
            .bind(&row.roadmap_group)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;

        if inserted > 0 {
            tracing::info!(inserted, total = rows.len(), "Skill catalog seeded");
        } else {
            tracing::debug!(total = rows.len(), "Skill catalog already populated");
        }
        Ok(inserted)
    }

    /// Find a skill by its unique name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE name = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all skills of a category in seed order.
    pub async fn list_by_category(
        pool: &PgPool,
        category: SkillCategory,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, Skill>(&query)
            .bind(category.as_str())
            .fetch_all(pool)
            .await
    }

    /// IDs of every skill in the catalog.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM skills ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Total number of catalog rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM skills")
            .fetch_one(pool)
            .await
    }

    /// List all skills of a category joined with one user's progress.
    ///
    /// Missing progress rows are reported as level 1 with zero completions.
    pub async fn list_with_progress(
        pool: &PgPool,
        user_id: DbId,
        category: SkillCategory,
    ) -> Result<Vec<SkillWithProgress>, sqlx::Error> {
        sqlx::query_as::<_, SkillWithProgress>(
            "SELECT s.id, s.name, s.industry_need_level, s.roadmap_group, \
                    COALESCE(p.current_level, 1) AS current_level, \
                    COALESCE(p.completed_activities_count, 0) AS completed_count \
             FROM skills s \
             LEFT JOIN user_skill_progress p ON p.skill_id = s.id AND p.user_id = $1 \
             WHERE s.category = $2 \
             ORDER BY s.id",
        )
        .bind(user_id)
        .bind(category.as_str())
        .fetch_all(pool)
        .await
    }
}
