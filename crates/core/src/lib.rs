//! Domain core for the SkillSync service.
//!
//! Pure logic and shared types with no database or HTTP dependencies:
//! the skill-progress model (gap aggregation and the activity completion
//! rule), assessment batch parsing, and the declarative skill catalog.

pub mod activity;
pub mod assessment;
pub mod catalog;
pub mod error;
pub mod progress;
pub mod skill;
pub mod types;
