//! Repository for the `user_skill_progress` table.

use skillsync_core::activity::{complete_activity, ProgressState};
use skillsync_core::assessment::AssessmentEntry;
use skillsync_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::progress::UserSkillProgress;
use crate::models::skill::AssessedSkillRow;

/// Column list for the `user_skill_progress` table.
const COLUMNS: &str = "id, user_id, skill_id, current_level, completed_activities_count, \
                       created_at, updated_at";

/// Provides assessment upserts, activity completion, and progress reads.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Find the progress row of a (user, skill) pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        skill_id: DbId,
    ) -> Result<Option<UserSkillProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_skill_progress WHERE user_id = $1 AND skill_id = $2"
        );
        sqlx::query_as::<_, UserSkillProgress>(&query)
            .bind(user_id)
            .bind(skill_id)
            .fetch_optional(pool)
            .await
    }

    /// List every assessed skill of a user with its category and need level.
    pub async fn list_assessed(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<AssessedSkillRow>, sqlx::Error> {
        sqlx::query_as::<_, AssessedSkillRow>(
            "SELECT s.category, s.industry_need_level, p.current_level \
             FROM user_skill_progress p \
             JOIN skills s ON s.id = p.skill_id \
             WHERE p.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Upsert the self-assessed level of each entry in one transaction.
    ///
    /// Existing rows keep their completion count; new rows start at zero.
    /// Entries must already be validated. Returns the number of rows written.
    pub async fn save_assessment(
        pool: &PgPool,
        user_id: DbId,
        entries: &[AssessmentEntry],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut written = 0;

        for entry in entries {
            let result = sqlx::query(
                "INSERT INTO user_skill_progress (user_id, skill_id, current_level) \
                 VALUES ($1, $2, $3) \
                 ON CONFLICT ON CONSTRAINT uq_user_skill_progress_user_skill DO UPDATE SET \
                     current_level = EXCLUDED.current_level",
            )
            .bind(user_id)
            .bind(entry.skill_id)
            .bind(entry.level)
            .execute(&mut *tx)
            .await?;
            written += result.rows_affected();
        }

        tx.commit().await?;
        Ok(written)
    }

    /// Record one completed activity for a (user, skill) pair.
    ///
    /// The existing row is locked with `FOR UPDATE` for the duration of the
    /// transaction, so concurrent completions for the same pair serialize
    /// instead of losing increments. Level promotion follows
    /// [`complete_activity`].
    pub async fn record_completion(
        pool: &PgPool,
        user_id: DbId,
        skill_id: DbId,
    ) -> Result<UserSkillProgress, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let row = match Self::lock(&mut tx, user_id, skill_id).await? {
            Some(existing) => Self::advance(&mut tx, &existing).await?,
            None => {
                let first = complete_activity(None);
                match Self::insert_if_absent(&mut tx, user_id, skill_id, first).await? {
                    Some(created) => created,
                    // A concurrent request created the row first; its insert has
                    // committed by now, so lock it and advance as usual.
                    None => {
                        let existing = Self::lock(&mut tx, user_id, skill_id)
                            .await?
                            .ok_or(sqlx::Error::RowNotFound)?;
                        Self::advance(&mut tx, &existing).await?
                    }
                }
            }
        };

        tx.commit().await?;
        Ok(row)
    }

    async fn lock(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        skill_id: DbId,
    ) -> Result<Option<UserSkillProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_skill_progress \
             WHERE user_id = $1 AND skill_id = $2 \
             FOR UPDATE"
        );
        sqlx::query_as::<_, UserSkillProgress>(&query)
            .bind(user_id)
            .bind(skill_id)
            .fetch_optional(&mut **tx)
            .await
    }

    async fn advance(
        tx: &mut Transaction<'_, Postgres>,
        existing: &UserSkillProgress,
    ) -> Result<UserSkillProgress, sqlx::Error> {
        let next = complete_activity(Some(existing.state()));
        let query = format!(
            "UPDATE user_skill_progress SET \
                 current_level = $2, \
                 completed_activities_count = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSkillProgress>(&query)
            .bind(existing.id)
            .bind(next.current_level)
            .bind(next.completed_count)
            .fetch_one(&mut **tx)
            .await
    }

    async fn insert_if_absent(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        skill_id: DbId,
        state: ProgressState,
    ) -> Result<Option<UserSkillProgress>, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_skill_progress \
                 (user_id, skill_id, current_level, completed_activities_count) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT uq_user_skill_progress_user_skill DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSkillProgress>(&query)
            .bind(user_id)
            .bind(skill_id)
            .bind(state.current_level)
            .bind(state.completed_count)
            .fetch_optional(&mut **tx)
            .await
    }
}
