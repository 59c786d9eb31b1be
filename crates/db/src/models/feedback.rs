//! Feedback log entries.

use serde::Serialize;
use skillsync_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the append-only `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub author_name: String,
    pub rating: i32,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for appending a feedback entry.
#[derive(Debug)]
pub struct CreateFeedback {
    pub author_name: String,
    pub rating: i32,
    pub message: String,
}
