//! Assessment batch parsing.
//!
//! A submission is a list of loosely-typed `{skill_id, level}` pairs. Each
//! entry is validated on its own: malformed entries are reported as skipped
//! and never abort the rest of the batch.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::skill::validate_level;
use crate::types::DbId;

/// One raw entry as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAssessmentEntry {
    #[serde(default)]
    pub skill_id: Value,
    #[serde(default)]
    pub level: Value,
}

/// A validated `(skill, level)` pair ready to upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentEntry {
    pub skill_id: DbId,
    pub level: i32,
}

/// Why an entry was dropped from a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub index: usize,
    pub reason: String,
}

/// Outcome of parsing a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAssessment {
    pub entries: Vec<AssessmentEntry>,
    pub skipped: Vec<SkippedEntry>,
}

/// Read an integer from a JSON number or a numeric string (form posts send
/// everything as text). Fractional numbers are rejected.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Validate a raw batch against the set of known skill ids.
///
/// When the same skill appears more than once, the last valid entry wins,
/// matching sequential upsert semantics.
pub fn parse_batch(raw: &[RawAssessmentEntry], known_skills: &HashSet<DbId>) -> ParsedAssessment {
    let mut parsed = ParsedAssessment::default();

    for (index, entry) in raw.iter().enumerate() {
        let skip = |reason: String| SkippedEntry { index, reason };

        let Some(skill_id) = as_integer(&entry.skill_id) else {
            parsed.skipped.push(skip(format!("invalid skill_id {}", entry.skill_id)));
            continue;
        };
        if !known_skills.contains(&skill_id) {
            parsed.skipped.push(skip(format!("unknown skill_id {skill_id}")));
            continue;
        }
        let Some(level) = as_integer(&entry.level) else {
            parsed.skipped.push(skip(format!("invalid level {}", entry.level)));
            continue;
        };
        let level = match validate_level(level) {
            Ok(level) => level,
            Err(e) => {
                parsed.skipped.push(skip(e));
                continue;
            }
        };

        parsed.entries.retain(|e| e.skill_id != skill_id);
        parsed.entries.push(AssessmentEntry { skill_id, level });
    }

    parsed
}
