//! Per-category gap aggregation for the dashboard.
//!
//! The gap of one assessed skill is `industry_need - current_level`. A
//! category's gap is the mean over every skill the user has assessed in it,
//! and the readiness level is `5 - round(gap)` clamped to `0..=5`. The level
//! rounds half away from zero; the displayed gap rounds half to even.
//! Categories without any assessed skill report [`CategoryProgress::NOT_ASSESSED`].

use std::collections::HashMap;

use serde::Serialize;

use crate::skill::{SkillCategory, MAX_LEVEL};

/// Gap reported for a category the user has not assessed yet.
pub const UNASSESSED_GAP: f64 = 5.0;

/// One assessed skill, as loaded from the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessedSkill {
    pub category: SkillCategory,
    pub industry_need: i32,
    pub current_level: i32,
}

/// Gap summary of a single category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryProgress {
    /// Mean gap, rounded to one decimal place.
    pub total_gap: f64,
    /// Readiness level in `0..=5`.
    pub level: i32,
}

impl CategoryProgress {
    pub const NOT_ASSESSED: Self = Self {
        total_gap: UNASSESSED_GAP,
        level: 0,
    };

    /// Build the summary from an unrounded mean gap.
    pub fn from_mean_gap(avg_gap: f64) -> Self {
        let max = i64::from(MAX_LEVEL);
        let level = (max - avg_gap.round() as i64).clamp(0, max);
        Self {
            total_gap: round_one_decimal(avg_gap),
            level: level as i32,
        }
    }
}

/// Gap summaries for every category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressSummary {
    #[serde(rename = "Technical")]
    pub technical: CategoryProgress,
    #[serde(rename = "Soft")]
    pub soft: CategoryProgress,
}

impl ProgressSummary {
    pub fn get(&self, category: SkillCategory) -> CategoryProgress {
        match category {
            SkillCategory::Technical => self.technical,
            SkillCategory::Soft => self.soft,
        }
    }

    /// Whether at least one category has assessed skills.
    pub fn has_assessments(&self) -> bool {
        self.technical != CategoryProgress::NOT_ASSESSED
            || self.soft != CategoryProgress::NOT_ASSESSED
    }
}

/// Mean gap of a set of skills, or `None` when the set is empty.
pub fn mean_gap<'a>(skills: impl IntoIterator<Item = &'a AssessedSkill>) -> Option<f64> {
    let (sum, count) = skills.into_iter().fold((0i64, 0u32), |(sum, count), s| {
        (sum + i64::from(s.industry_need - s.current_level), count + 1)
    });
    (count > 0).then(|| sum as f64 / f64::from(count))
}

/// Aggregate assessed skills into per-category summaries.
///
/// Pure function; the caller loads the user's assessed skills.
pub fn summarize(skills: &[AssessedSkill]) -> ProgressSummary {
    let mut by_category: HashMap<SkillCategory, Vec<&AssessedSkill>> = HashMap::new();
    for skill in skills {
        by_category.entry(skill.category).or_default().push(skill);
    }

    let summary_for = |category: SkillCategory| {
        by_category
            .get(&category)
            .and_then(|group| mean_gap(group.iter().copied()))
            .map(CategoryProgress::from_mean_gap)
            .unwrap_or(CategoryProgress::NOT_ASSESSED)
    };

    ProgressSummary {
        technical: summary_for(SkillCategory::Technical),
        soft: summary_for(SkillCategory::Soft),
    }
}

/// Dashboard greeting for the given user.
pub fn status_message(username: &str, summary: &ProgressSummary) -> String {
    if summary.has_assessments() {
        format!("Welcome back, {username}.")
    } else {
        format!("Welcome, {username}. Start your assessment.")
    }
}

/// Round to the nearest tenth, ties to even, judged on the exact binary
/// value: `0.35` is stored just below the tie and goes down, `1.25` is an
/// exact tie and goes to `1.2`.
fn round_one_decimal(value: f64) -> f64 {
    let below = (value * 10.0).floor();
    // Sign of `20 * value - (2 * below + 1)`, computed with a single rounding.
    let above_midpoint = value.mul_add(20.0, -(2.0 * below + 1.0));
    let tenths = if above_midpoint > 0.0 {
        below + 1.0
    } else if above_midpoint < 0.0 || below % 2.0 == 0.0 {
        below
    } else {
        below + 1.0
    };
    tenths / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technical(need: i32, level: i32) -> AssessedSkill {
        AssessedSkill {
            category: SkillCategory::Technical,
            industry_need: need,
            current_level: level,
        }
    }

    fn soft(need: i32, level: i32) -> AssessedSkill {
        AssessedSkill {
            category: SkillCategory::Soft,
            industry_need: need,
            current_level: level,
        }
    }

    #[test]
    fn no_assessments_yields_placeholder_for_both_categories() {
        let summary = summarize(&[]);
        assert_eq!(summary.technical, CategoryProgress::NOT_ASSESSED);
        assert_eq!(summary.soft, CategoryProgress::NOT_ASSESSED);
        assert_eq!(summary.technical.total_gap, 5.0);
        assert_eq!(summary.technical.level, 0);
        assert!(!summary.has_assessments());
    }

    #[test]
    fn mixed_levels_against_full_need() {
        let summary = summarize(&[technical(5, 3), technical(5, 4), technical(5, 5)]);
        assert_eq!(summary.technical.total_gap, 1.0);
        assert_eq!(summary.technical.level, 4);
        assert_eq!(summary.soft, CategoryProgress::NOT_ASSESSED);
    }

    #[test]
    fn gap_uses_each_skill_need() {
        // (4-1) + (2-2) = 3, over 2 skills = 1.5 -> rounds away from zero to 2.
        let summary = summarize(&[technical(4, 1), technical(2, 2)]);
        assert_eq!(summary.technical.total_gap, 1.5);
        assert_eq!(summary.technical.level, 3);
    }

    #[test]
    fn display_gap_rounds_to_one_decimal() {
        // (5-1) + (5-2) + (5-2) = 10 / 3 = 3.333...
        let summary = summarize(&[soft(5, 1), soft(5, 2), soft(5, 2)]);
        assert_eq!(summary.soft.total_gap, 3.3);
        assert_eq!(summary.soft.level, 2);
    }

    #[test]
    fn displayed_gap_ties_round_to_even() {
        // 1 + 1 + 1 + 2 = 5 / 4 = 1.25 -> 1.2 on display, level 4.
        let summary = summarize(&[soft(5, 4), soft(5, 4), soft(5, 4), soft(5, 3)]);
        assert_eq!(summary.soft.total_gap, 1.2);
        assert_eq!(summary.soft.level, 4);
    }

    #[test]
    fn level_ties_round_away_from_zero() {
        // (5-3) + (5-2) = 5 / 2 = 2.5 -> 3, so level 2.
        let summary = summarize(&[technical(5, 3), technical(5, 2)]);
        assert_eq!(summary.technical.total_gap, 2.5);
        assert_eq!(summary.technical.level, 2);
    }

    #[test]
    fn one_decimal_rounding_follows_stored_value() {
        assert_eq!(round_one_decimal(1.25), 1.2);
        assert_eq!(round_one_decimal(1.35), 1.4);
        assert_eq!(round_one_decimal(-1.25), -1.2);
        // 7/20 is stored just below 0.35, 9/20 just above 0.45.
        assert_eq!(round_one_decimal(7.0 / 20.0), 0.3);
        assert_eq!(round_one_decimal(9.0 / 20.0), 0.5);
        assert_eq!(round_one_decimal(10.0 / 3.0), 3.3);
        assert_eq!(round_one_decimal(-2.0), -2.0);
    }

    #[test]
    fn fresh_assessment_at_level_one_gives_level_one() {
        let summary = summarize(&[soft(5, 1)]);
        assert_eq!(summary.soft.total_gap, 4.0);
        assert_eq!(summary.soft.level, 1);
    }

    #[test]
    fn level_is_clamped_when_user_exceeds_need() {
        let summary = summarize(&[technical(3, 5)]);
        assert_eq!(summary.technical.total_gap, -2.0);
        assert_eq!(summary.technical.level, 5);
    }

    #[test]
    fn categories_are_aggregated_independently() {
        let summary = summarize(&[technical(5, 5), soft(5, 1)]);
        assert_eq!(summary.get(SkillCategory::Technical).level, 5);
        assert_eq!(summary.get(SkillCategory::Soft).level, 1);
    }

    #[test]
    fn mean_gap_of_empty_set_is_none() {
        assert_eq!(mean_gap(&Vec::<AssessedSkill>::new()), None);
    }

    #[test]
    fn status_message_depends_on_assessments() {
        let empty = summarize(&[]);
        assert_eq!(
            status_message("ada", &empty),
            "Welcome, ada. Start your assessment."
        );
        let some = summarize(&[soft(5, 2)]);
        assert_eq!(status_message("ada", &some), "Welcome back, ada.");
    }

    #[test]
    fn summary_serializes_with_category_keys() {
        let json = serde_json::to_value(summarize(&[])).unwrap();
        assert_eq!(json["Technical"]["total_gap"], 5.0);
        assert_eq!(json["Soft"]["level"], 0);
    }
}
