//! Fantasy Monster League game core.
//!
//! Re-exports the battle engine and the gameweek scoring engine, and gathers the
//! operations a server wraps: create a match, play a card, attack, end the turn,
//! score a gameweek.

#![cfg_attr(not(feature = "std"), no_std)]

pub use fml_battle as battle;
pub use fml_scoring as scoring;

pub use fml_battle::{
    apply_action, attack, end_turn, hero_power, initialize_match, play_card, AttackTarget,
    BattleAction, BattleError, BattleResult, BattleState, BattleView, MatchRules, MonsterRecord,
    Side, Winner, XorShiftRng,
};
pub use fml_scoring::{
    score_gameweek, ChipAssignment, GameweekEntry, GameweekId, GameweekOutcome,
    GameweekPerformance, ScoringError, ScoringLedger, ScoringResult, ScoringRules,
};

/// Create a match with the default rules, dealt from `seed`
pub fn new_match(player_roster: &[MonsterRecord], opponent_roster: &[MonsterRecord], seed: u64) -> BattleState {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    initialize_match(player_roster, opponent_roster, MatchRules::default(), &mut rng)
}
