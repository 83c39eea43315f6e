//! Processed-gameweek guard.

use alloc::collections::BTreeSet;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::engine::score_gameweek;
use crate::error::{ScoringError, ScoringResult};
use crate::rules::ScoringRules;
use crate::types::*;

/// Remembers which gameweeks have been scored so career totals are never
/// incremented twice for the same week. Persist it next to the scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringLedger {
    scored: BTreeSet<GameweekId>,
}

impl ScoringLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scored(&self, gameweek: GameweekId) -> bool {
        self.scored.contains(&gameweek)
    }

    pub fn scored_gameweeks(&self) -> impl Iterator<Item = GameweekId> + '_ {
        self.scored.iter().copied()
    }

    /// Score `gameweek` unless it was scored before.
    ///
    /// The gameweek is only recorded when scoring succeeds.
    pub fn score(
        &mut self,
        gameweek: GameweekId,
        performances: &[GameweekPerformance],
        assignments: &[ChipAssignment],
        entries: &[GameweekEntry],
        rules: &ScoringRules,
    ) -> ScoringResult<GameweekOutcome> {
        if self.is_scored(gameweek) {
            log::warn!(target: "fml::scoring", "gameweek {} was already scored", gameweek.0);
            return Err(ScoringError::AlreadyScored { gameweek });
        }
        let outcome = score_gameweek(gameweek, performances, assignments, entries, rules)?;
        self.scored.insert(gameweek);
        Ok(outcome)
    }
}
