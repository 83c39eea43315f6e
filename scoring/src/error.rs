//! Error types for gameweek scoring
//!
//! Missing or unmapped stat data is not an error: it is scored as a week the
//! player did not appear. Only inputs that would make the run ambiguous fail.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use fml_battle::MonsterId;

use crate::types::GameweekId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScoringError {
    /// The gameweek has already been scored once
    #[serde(rename_all = "camelCase")]
    AlreadyScored { gameweek: GameweekId },
    /// The same monster was fielded twice in one gameweek
    #[serde(rename_all = "camelCase")]
    DuplicateMonster { monster_id: MonsterId },
}

impl core::fmt::Display for ScoringError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScoringError::AlreadyScored { gameweek } => {
                write!(f, "gameweek {} has already been scored", gameweek.0)
            }
            ScoringError::DuplicateMonster { monster_id } => {
                write!(f, "monster {} is fielded more than once", monster_id.0)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScoringError {}

/// Result type alias for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;
