//! Scoring configuration

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::evolution::EvolutionLadder;
use crate::points::FantasyPointsTable;

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRules {
    /// Base points at or below this make a blank gameweek
    pub blank_threshold: i32,
    /// Base points at or below this make a big fail
    pub big_fail_threshold: i32,
    /// Consecutive blanks that cost an evolution level
    pub blank_streak_limit: u32,
    /// Minutes needed for a clean sheet to satisfy a wall chip
    pub clean_sheet_minutes: u32,
    pub ladder: EvolutionLadder,
    pub points: FantasyPointsTable,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            blank_threshold: 2,
            big_fail_threshold: 0,
            blank_streak_limit: 3,
            clean_sheet_minutes: 60,
            ladder: EvolutionLadder::default(),
            points: FantasyPointsTable::default(),
        }
    }
}
