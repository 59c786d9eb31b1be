//! Repository for the append-only `feedback` table.

use sqlx::PgPool;

use crate::models::feedback::{CreateFeedback, Feedback};

/// Column list for the `feedback` table.
const COLUMNS: &str = "id, author_name, rating, message, created_at";

/// Number of entries shown in the landing-page excerpt.
pub const RECENT_FEEDBACK_LIMIT: i64 = 3;

/// Provides append and newest-first reads of the feedback log.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Append a feedback entry.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (author_name, rating, message) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(&input.author_name)
            .bind(input.rating)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List entries newest first, optionally limited.
    ///
    /// Ordering is by insertion id, not `created_at`, so entries written in
    /// the same instant keep their creation order.
    pub async fn list_newest_first(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback ORDER BY id DESC LIMIT $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
