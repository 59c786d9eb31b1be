use std::sync::Arc;

use skillsync_chat::ChatRelay;
use skillsync_core::catalog::SkillCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: skillsync_db::DbPool,
    /// Server configuration (JWT settings, password policy, timeouts).
    pub config: Arc<ServerConfig>,
    /// Skill catalog loaded at startup (roadmap order, soft-skill activities).
    pub catalog: Arc<SkillCatalog>,
    /// Upstream chat relay.
    pub chat: Arc<ChatRelay>,
}
