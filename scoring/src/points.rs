//! Fantasy points for a raw stat line.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use fml_battle::Position;

use crate::types::GameweekPerformance;

/// Per-position weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionWeights {
    pub goal: i32,
    pub clean_sheet: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FantasyPointsTable {
    /// Points for any appearance
    pub appearance: i32,
    /// Points for playing at least `long_appearance_minutes`, replacing `appearance`
    pub long_appearance: i32,
    pub long_appearance_minutes: u32,
    pub goalkeeper: PositionWeights,
    pub defender: PositionWeights,
    pub midfielder: PositionWeights,
    pub forward: PositionWeights,
    pub assist: i32,
    /// One point for every this many saves
    pub saves_per_point: u32,
    pub penalty_save: i32,
}

impl Default for FantasyPointsTable {
    fn default() -> Self {
        Self {
            appearance: 1,
            long_appearance: 2,
            long_appearance_minutes: 60,
            goalkeeper: PositionWeights { goal: 6, clean_sheet: 4 },
            defender: PositionWeights { goal: 6, clean_sheet: 4 },
            midfielder: PositionWeights { goal: 5, clean_sheet: 1 },
            forward: PositionWeights { goal: 4, clean_sheet: 0 },
            assist: 3,
            saves_per_point: 3,
            penalty_save: 5,
        }
    }
}

impl FantasyPointsTable {
    pub fn weights(&self, position: Position) -> PositionWeights {
        match position {
            Position::Goalkeeper => self.goalkeeper,
            Position::Defender => self.defender,
            Position::Midfielder => self.midfielder,
            Position::Forward => self.forward,
        }
    }

    /// Points earned by `performance` for a player in `position`.
    ///
    /// A clean sheet only counts with a long appearance.
    pub fn points(&self, position: Position, performance: &GameweekPerformance) -> i32 {
        let weights = self.weights(position);
        let long = performance.minutes >= self.long_appearance_minutes;

        let mut points = if long {
            self.long_appearance
        } else if performance.minutes > 0 {
            self.appearance
        } else {
            0
        };
        points += weights.goal * performance.goals as i32;
        points += self.assist * performance.assists as i32;
        if long && performance.kept_clean_sheet() {
            points += weights.clean_sheet;
        }
        if self.saves_per_point > 0 {
            points += (performance.saves / self.saves_per_point) as i32;
        }
        points += self.penalty_save * performance.penalties_saved as i32;
        points
    }

    /// The provider's aggregate when published, otherwise [`Self::points`]
    pub fn base_points(&self, position: Position, performance: &GameweekPerformance) -> i32 {
        performance
            .total_points
            .unwrap_or_else(|| self.points(position, performance))
    }
}
