//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod feedback_repo;
pub mod progress_repo;
pub mod session_repo;
pub mod skill_repo;
pub mod user_repo;

pub use feedback_repo::FeedbackRepo;
pub use progress_repo::ProgressRepo;
pub use session_repo::SessionRepo;
pub use skill_repo::SkillRepo;
pub use user_repo::UserRepo;
