use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use fml_battle::{CareerTotals, MonsterId, MonsterRecord, UserId};

/// Real-world gameweek number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GameweekId(pub u16);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChipId(pub u32);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssignmentId(pub u32);

/// One real player's stat line for a finalized gameweek
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameweekPerformance {
    /// Stable code of the real player, matched against `MonsterRecord::player_code`
    pub player_code: u32,
    pub minutes: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub saves: u32,
    pub penalties_saved: u32,
    /// Aggregate fantasy points as published by the stat provider.
    /// Computed from the stat line with the points table when absent.
    #[serde(default)]
    pub total_points: Option<i32>,
}

impl GameweekPerformance {
    pub fn kept_clean_sheet(&self) -> bool {
        self.clean_sheets > 0
    }
}

/// A chip owned by a user: a named condition plus the tries it has left
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChip {
    pub id: ChipId,
    pub owner: UserId,
    /// Condition code from the chip template, e.g. `GOAL_SURGE`
    pub condition_code: String,
    /// Overrides the condition's default threshold
    #[serde(default)]
    pub threshold: Option<i32>,
    pub remaining_tries: u32,
    pub consumed: bool,
}

/// A chip placed on one monster for one gameweek
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipAssignment {
    pub id: AssignmentId,
    pub gameweek: GameweekId,
    pub monster_id: MonsterId,
    pub chip: UserChip,
}

/// The monsters one user fielded for the gameweek
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameweekEntry {
    pub user_id: UserId,
    pub monsters: Vec<MonsterRecord>,
}

/// Why an evolution level changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvolutionReason {
    /// Scored at or below the big-fail threshold
    BigFail,
    /// Too many blank gameweeks in a row
    BlankStreak,
    /// An assigned chip's condition was met
    ChipSuccess,
}

/// Immutable record of one evolution level change
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionEvent {
    pub monster_id: MonsterId,
    pub gameweek: GameweekId,
    pub old_level: u32,
    pub new_level: u32,
    pub reason: EvolutionReason,
    pub description: String,
}

/// New persisted values for one fielded monster
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterUpdate {
    pub monster_id: MonsterId,
    pub owner: UserId,
    /// Whether the real player had a stat line this gameweek
    pub played: bool,
    pub base_points: i32,
    pub final_points: i32,
    pub evolution_level: u32,
    pub blank_streak: u32,
    pub career: CareerTotals,
}

impl MonsterUpdate {
    /// Write the scored fields back onto the roster record
    pub fn apply_to(&self, record: &mut MonsterRecord) {
        record.evolution_level = self.evolution_level;
        record.blank_streak = self.blank_streak;
        record.career = self.career.clone();
    }
}

/// Resolution of one chip assignment, for the chip store
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipResolution {
    pub assignment_id: AssignmentId,
    pub chip_id: ChipId,
    pub monster_id: MonsterId,
    pub success: bool,
    pub remaining_tries: u32,
    pub consumed: bool,
    pub resolved_at: GameweekId,
}

/// Aggregate score row, one per (user, gameweek)
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGameweekScore {
    pub user_id: UserId,
    pub gameweek: GameweekId,
    pub points: i32,
}

/// Everything a scoring run produces
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameweekOutcome {
    pub gameweek: GameweekId,
    /// Ordered by user id
    pub user_totals: Vec<UserGameweekScore>,
    pub monster_updates: Vec<MonsterUpdate>,
    pub evolution_events: Vec<EvolutionEvent>,
    pub chip_resolutions: Vec<ChipResolution>,
}

impl GameweekOutcome {
    pub fn total_for(&self, user_id: UserId) -> Option<i32> {
        self.user_totals
            .iter()
            .find(|row| row.user_id == user_id)
            .map(|row| row.points)
    }

    pub fn update_for(&self, monster_id: MonsterId) -> Option<&MonsterUpdate> {
        self.monster_updates
            .iter()
            .find(|update| update.monster_id == monster_id)
    }
}
