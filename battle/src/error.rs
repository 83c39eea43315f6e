//! Error types for battle operations
//!
//! Only malformed input is an error. Illegal moves (not enough mana, full board,
//! guarded targets, acting out of turn) are reported through the match log and
//! leave the state untouched, so they never show up here.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BattleError {
    /// No card at this hand position
    InvalidHandIndex { index: u32 },
    /// No card at this position on the acting side's board
    InvalidBoardIndex { index: u32 },
    /// No card at this position on the defending side's board
    InvalidTargetIndex { index: u32 },
}

impl core::fmt::Display for BattleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BattleError::InvalidHandIndex { index } => write!(f, "no card at hand index {}", index),
            BattleError::InvalidBoardIndex { index } => write!(f, "no card at board index {}", index),
            BattleError::InvalidTargetIndex { index } => write!(f, "no target at board index {}", index),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BattleError {}

/// Result type alias for battle operations
pub type BattleResult<T> = Result<T, BattleError>;
