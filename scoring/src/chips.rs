//! Chip conditions.
//!
//! Chip templates name their condition with a free-text code. Codes are
//! matched loosely (case-insensitive substring), so `goal_surge`, `GOAL SURGE+`
//! and `SUPER_GOAL` all select [`ChipCondition::GoalSurge`].

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::types::GameweekPerformance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChipCondition {
    /// goals ≥ threshold
    GoalSurge,
    /// goals + assists ≥ threshold
    Playmaker,
    /// Clean sheet with a long appearance
    Wall,
    /// base points ≥ threshold
    HeroicHaul,
    /// base points ≥ threshold, lower bar than a haul
    SteadyForm,
}

impl ChipCondition {
    /// Parse a template condition code. `None` for codes that name no condition.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        if code.contains("GOAL") {
            Some(ChipCondition::GoalSurge)
        } else if code.contains("PLAYMAKER") || code.contains("ASSIST") {
            Some(ChipCondition::Playmaker)
        } else if code.contains("WALL") || code.contains("CLEAN") {
            Some(ChipCondition::Wall)
        } else if code.contains("HAUL") || code.contains("HEROIC") {
            Some(ChipCondition::HeroicHaul)
        } else if code.contains("STEADY") || code.contains("FORM") {
            Some(ChipCondition::SteadyForm)
        } else {
            None
        }
    }

    pub fn default_threshold(&self) -> i32 {
        match self {
            ChipCondition::GoalSurge => 1,
            ChipCondition::Playmaker => 2,
            ChipCondition::Wall => 0,
            ChipCondition::HeroicHaul => 10,
            ChipCondition::SteadyForm => 5,
        }
    }

    /// Whether the condition is met. A player with no stat line never meets one.
    pub fn evaluate(
        &self,
        performance: Option<&GameweekPerformance>,
        base_points: i32,
        threshold: Option<i32>,
        clean_sheet_minutes: u32,
    ) -> bool {
        let Some(performance) = performance else {
            return false;
        };
        let threshold = threshold.unwrap_or_else(|| self.default_threshold());

        match self {
            ChipCondition::GoalSurge => performance.goals as i32 >= threshold,
            ChipCondition::Playmaker => (performance.goals + performance.assists) as i32 >= threshold,
            ChipCondition::Wall => {
                performance.kept_clean_sheet() && performance.minutes >= clean_sheet_minutes
            }
            ChipCondition::HeroicHaul | ChipCondition::SteadyForm => base_points >= threshold,
        }
    }
}
