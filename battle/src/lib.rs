//! Fantasy Monster League battle engine.
//!
//! Converts persisted monster records into battle cards, deals decks and runs the
//! turn-based PvP state machine. Every mutator is a pure `(state, action) -> state`
//! transition: illegal actions come back as the same state with a log line appended,
//! malformed input (bad indices) comes back as a [`BattleError`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod cards;
pub mod engine;
pub mod error;
pub mod rng;
pub mod setup;
pub mod state;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use cards::{build_hero, build_monster_card, placeholder_hero, spell_pool};
pub use engine::{apply_action, attack, end_turn, hero_power, play_card};
pub use error::{BattleError, BattleResult};
pub use rng::{MatchRng, XorShiftRng};
pub use setup::{initialize_match, select_deck_monsters};
pub use state::*;
pub use types::*;
pub use view::{BattleView, BoardCardView, HandCardView, HeroView};
