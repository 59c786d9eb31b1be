//! Declarative skill catalog.
//!
//! The catalog lists the technical roadmaps (ordered skill lists with their
//! industry-need levels) and the soft skills with their suggested activities
//! and display icons. A default catalog is compiled in from
//! `config/catalog.json`; deployments may point `SKILL_CATALOG_PATH` at a
//! replacement file with the same shape.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::skill::{validate_level, SkillCategory, MAX_LEVEL, SOFT_SKILL_GROUP};

/// The catalog shipped with the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../../../config/catalog.json");

/// Maximum length of a skill name (matches `skills.name`).
pub const MAX_SKILL_NAME_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// File shape
// ---------------------------------------------------------------------------

fn default_soft_need() -> i32 {
    MAX_LEVEL
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapSkill {
    pub name: String,
    pub industry_need: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Roadmap {
    pub group: String,
    pub skills: Vec<RoadmapSkill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SoftSkill {
    pub name: String,
    #[serde(default = "default_soft_need")]
    pub industry_need: i32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
}

/// Parsed and validated catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillCatalog {
    pub roadmaps: Vec<Roadmap>,
    pub soft_skills: Vec<SoftSkill>,
}

/// A row to insert into `skills` during seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSkill {
    pub name: String,
    pub category: SkillCategory,
    pub industry_need: i32,
    pub roadmap_group: String,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl SkillCatalog {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: SkillCatalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The compiled-in default catalog.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load from `path` when given, otherwise fall back to the embedded catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::from_json(&text)
            }
            None => Self::embedded(),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let check_name = |name: &str| {
            if name.trim().is_empty() {
                return Err(CatalogError::Invalid("skill name must not be empty".into()));
            }
            if name.len() > MAX_SKILL_NAME_LENGTH {
                return Err(CatalogError::Invalid(format!(
                    "skill name '{name}' exceeds {MAX_SKILL_NAME_LENGTH} characters"
                )));
            }
            Ok(())
        };
        let check_need = |name: &str, need: i32| {
            validate_level(i64::from(need))
                .map(|_| ())
                .map_err(|e| CatalogError::Invalid(format!("skill '{name}': {e}")))
        };

        for roadmap in &self.roadmaps {
            if roadmap.group.trim().is_empty() {
                return Err(CatalogError::Invalid("roadmap group must not be empty".into()));
            }
            if roadmap.skills.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "roadmap '{}' has no skills",
                    roadmap.group
                )));
            }
            for skill in &roadmap.skills {
                check_name(&skill.name)?;
                check_need(&skill.name, skill.industry_need)?;
            }
        }

        let mut soft_names = HashSet::new();
        for skill in &self.soft_skills {
            check_name(&skill.name)?;
            check_need(&skill.name, skill.industry_need)?;
            if !soft_names.insert(skill.name.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "soft skill '{}' is listed twice",
                    skill.name
                )));
            }
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    /// Roadmap group names in catalog order.
    pub fn roadmap_groups(&self) -> Vec<String> {
        self.roadmaps.iter().map(|r| r.group.clone()).collect()
    }

    /// Rows to seed, one per distinct skill name.
    ///
    /// A name listed by several roadmaps keeps the first group and need
    /// level it appears with. Technical skills come first, then soft skills.
    pub fn seed_rows(&self) -> Vec<SeedSkill> {
        let mut seen = HashSet::new();
        let technical = self.roadmaps.iter().flat_map(|roadmap| {
            roadmap.skills.iter().map(move |skill| SeedSkill {
                name: skill.name.clone(),
                category: SkillCategory::Technical,
                industry_need: skill.industry_need,
                roadmap_group: roadmap.group.clone(),
            })
        });
        let soft = self.soft_skills.iter().map(|skill| SeedSkill {
            name: skill.name.clone(),
            category: SkillCategory::Soft,
            industry_need: skill.industry_need,
            roadmap_group: SOFT_SKILL_GROUP.to_string(),
        });

        technical
            .chain(soft)
            .filter(|row| seen.insert(row.name.clone()))
            .collect()
    }

    /// Suggested activities keyed by soft-skill name.
    pub fn activities(&self) -> BTreeMap<String, Vec<String>> {
        self.soft_skills
            .iter()
            .map(|s| (s.name.clone(), s.activities.clone()))
            .collect()
    }

    /// Display icons keyed by soft-skill name (skills without one are omitted).
    pub fn icons(&self) -> BTreeMap<String, String> {
        self.soft_skills
            .iter()
            .filter_map(|s| s.icon.clone().map(|icon| (s.name.clone(), icon)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = SkillCatalog::embedded().expect("embedded catalog must parse");
        assert_eq!(catalog.roadmaps.len(), 9);
        assert_eq!(catalog.soft_skills.len(), 9);
        assert_eq!(catalog.roadmap_groups()[0], "Web Developer");
    }

    #[test]
    fn embedded_seed_rows_have_unique_names() {
        let catalog = SkillCatalog::embedded().unwrap();
        let rows = catalog.seed_rows();
        let names: HashSet<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), rows.len());
        assert!(rows
            .iter()
            .filter(|r| r.category == SkillCategory::Soft)
            .all(|r| r.roadmap_group == SOFT_SKILL_GROUP && r.industry_need == 5));
    }

    #[test]
    fn shared_skill_keeps_first_group() {
        let catalog = SkillCatalog::from_json(
            r#"{
                "roadmaps": [
                    {"group": "A", "skills": [{"name": "Git", "industry_need": 4}]},
                    {"group": "B", "skills": [{"name": "Git", "industry_need": 2}]}
                ],
                "soft_skills": []
            }"#,
        )
        .unwrap();
        let rows = catalog.seed_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].roadmap_group, "A");
        assert_eq!(rows[0].industry_need, 4);
    }

    #[test]
    fn soft_skill_need_defaults_to_five() {
        let catalog = SkillCatalog::from_json(
            r#"{"roadmaps": [], "soft_skills": [{"name": "Creativity", "icon": "💡"}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.soft_skills[0].industry_need, 5);
        assert_eq!(catalog.icons()["Creativity"], "💡");
        assert!(catalog.activities()["Creativity"].is_empty());
    }

    #[test]
    fn out_of_range_need_is_rejected() {
        let err = SkillCatalog::from_json(
            r#"{"roadmaps": [{"group": "A", "skills": [{"name": "X", "industry_need": 7}]}],
                "soft_skills": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn empty_roadmap_is_rejected() {
        let err = SkillCatalog::from_json(
            r#"{"roadmaps": [{"group": "A", "skills": []}], "soft_skills": []}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("has no skills"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SkillCatalog::from_json("{").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SkillCatalog::load(Some(Path::new("/nonexistent/catalog.json"))).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
