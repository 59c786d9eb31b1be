//! Skill categories and level bounds.
//!
//! Categories are persisted as plain text in `skills.category`; the string
//! constants here must match the check constraint in the skills migration.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const CATEGORY_TECHNICAL: &str = "Technical";
pub const CATEGORY_SOFT: &str = "Soft";

/// All valid category strings, in dashboard display order.
pub const VALID_CATEGORIES: &[&str] = &[CATEGORY_TECHNICAL, CATEGORY_SOFT];

/// Lowest self-assessed or industry-need level.
pub const MIN_LEVEL: i32 = 1;

/// Highest self-assessed or industry-need level.
pub const MAX_LEVEL: i32 = 5;

/// Roadmap group assigned to every soft skill.
pub const SOFT_SKILL_GROUP: &str = "General";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
}

impl SkillCategory {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            CATEGORY_TECHNICAL => Ok(Self::Technical),
            CATEGORY_SOFT => Ok(Self::Soft),
            _ => Err(format!(
                "Invalid skill category '{s}'. Must be one of: {}",
                VALID_CATEGORIES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => CATEGORY_TECHNICAL,
            Self::Soft => CATEGORY_SOFT,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a level lies within `MIN_LEVEL..=MAX_LEVEL`.
pub fn validate_level(level: i64) -> Result<i32, String> {
    if (i64::from(MIN_LEVEL)..=i64::from(MAX_LEVEL)).contains(&level) {
        Ok(level as i32)
    } else {
        Err(format!(
            "Level {level} is out of range ({MIN_LEVEL}-{MAX_LEVEL})"
        ))
    }
}
