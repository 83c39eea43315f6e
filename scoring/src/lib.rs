//! Fantasy Monster League gameweek scoring.
//!
//! Turns a finalized gameweek's real-world stat lines into fantasy points, evolves
//! or devolves the monsters that were fielded, resolves the chips assigned to them
//! and totals each user's score. Scoring is a pure batch transform: the caller
//! persists the returned [`GameweekOutcome`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod chips;
pub mod engine;
pub mod error;
pub mod evolution;
pub mod ledger;
pub mod points;
pub mod rules;
pub mod types;

#[cfg(test)]
mod tests;

pub use chips::ChipCondition;
pub use engine::score_gameweek;
pub use error::{ScoringError, ScoringResult};
pub use evolution::{apply_multiplier, EvolutionLadder, FormCheck};
pub use ledger::ScoringLedger;
pub use points::FantasyPointsTable;
pub use rules::ScoringRules;
pub use types::*;
