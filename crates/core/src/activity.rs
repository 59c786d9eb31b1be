//! Activity completion rule.
//!
//! Every completed learning activity bumps the per-skill counter; every
//! third completion promotes the user's level by one, up to [`MAX_LEVEL`].

use serde::Serialize;

use crate::skill::{MAX_LEVEL, MIN_LEVEL};

/// Number of completions between automatic level promotions.
pub const COMPLETIONS_PER_LEVEL: i32 = 3;

/// The mutable part of a user's progress on one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressState {
    pub current_level: i32,
    pub completed_count: i32,
}

impl Default for ProgressState {
    /// Implied state of a skill the user never touched.
    fn default() -> Self {
        Self {
            current_level: MIN_LEVEL,
            completed_count: 0,
        }
    }
}

/// Apply one completed activity to the existing state (if any).
///
/// A missing record becomes level 1 with one completion. Otherwise the
/// counter advances and, when the new count is a multiple of
/// [`COMPLETIONS_PER_LEVEL`] and the level is below the cap, the level
/// rises by one. Not idempotent: each call is one real completion.
pub fn complete_activity(existing: Option<ProgressState>) -> ProgressState {
    let Some(state) = existing else {
        return ProgressState {
            current_level: MIN_LEVEL,
            completed_count: 1,
        };
    };

    let completed_count = state.completed_count.saturating_add(1);
    let current_level =
        if state.current_level < MAX_LEVEL && completed_count % COMPLETIONS_PER_LEVEL == 0 {
            state.current_level + 1
        } else {
            state.current_level
        };

    ProgressState {
        current_level: current_level.min(MAX_LEVEL),
        completed_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(level: i32, count: i32) -> ProgressState {
        ProgressState {
            current_level: level,
            completed_count: count,
        }
    }

    #[test]
    fn first_completion_creates_level_one() {
        assert_eq!(complete_activity(None), state(1, 1));
    }

    #[test]
    fn non_multiple_of_three_only_counts() {
        assert_eq!(complete_activity(Some(state(2, 0))), state(2, 1));
        assert_eq!(complete_activity(Some(state(2, 1))), state(2, 2));
    }

    #[test]
    fn third_completion_promotes() {
        assert_eq!(complete_activity(Some(state(1, 2))), state(2, 3));
    }

    #[test]
    fn repeated_completions_promote_every_third() {
        let mut current = None;
        let mut levels = Vec::new();
        for _ in 0..12 {
            let next = complete_activity(current);
            levels.push(next.current_level);
            current = Some(next);
        }
        assert_eq!(levels, vec![1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5]);
        assert_eq!(current.unwrap().completed_count, 12);
    }

    #[test]
    fn level_never_exceeds_cap() {
        let mut current = Some(state(5, 0));
        for _ in 0..9 {
            current = Some(complete_activity(current));
        }
        assert_eq!(current, Some(state(5, 9)));
    }

    #[test]
    fn counter_is_monotonic_for_assessed_skill() {
        // An assessed skill at level 4 with no completions yet.
        let after_three = (0..3).fold(state(4, 0), |s, _| complete_activity(Some(s)));
        assert_eq!(after_three, state(5, 3));
    }

    #[test]
    fn default_state_is_level_one_without_completions() {
        assert_eq!(ProgressState::default(), state(1, 0));
    }
}
