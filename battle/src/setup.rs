//! Match creation
//!
//! Turns two rosters into a ready-to-play [`BattleState`]: goalkeepers become
//! heroes, the best outfield players plus a handful of spells become the deck.

use alloc::format;
use alloc::vec::Vec;

use crate::cards::{build_hero, build_monster_card, placeholder_hero, spell_pool};
use crate::engine::start_turn;
use crate::rng::MatchRng;
use crate::state::*;
use crate::types::*;

/// Outfield monsters that make it into a deck, strongest first when the
/// roster is too big. Equal power keeps roster order.
pub fn select_deck_monsters(roster: &[MonsterRecord]) -> Vec<&MonsterRecord> {
    let mut outfield: Vec<&MonsterRecord> = roster
        .iter()
        .filter(|record| record.position != Position::Goalkeeper)
        .collect();

    if outfield.len() > DECK_MONSTERS {
        // sort_by is stable
        outfield.sort_by(|a, b| b.power().cmp(&a.power()));
        outfield.truncate(DECK_MONSTERS);
    }
    outfield
}

/// Build and shuffle one side's deck
fn build_deck<R: MatchRng>(roster: &[MonsterRecord], rng: &mut R) -> Vec<BattleCard> {
    let pool = spell_pool();
    let mut deck: Vec<BattleCard> = select_deck_monsters(roster)
        .into_iter()
        .map(|record| BattleCard::Monster(build_monster_card(record)))
        .collect();

    // Sampled with replacement, duplicates are expected
    for _ in 0..SPELLS_PER_DECK {
        if let Some(spell) = rng.pick(&pool) {
            deck.push(BattleCard::Spell(spell.clone()));
        }
    }

    rng.shuffle(&mut deck);
    deck
}

fn build_side<R: MatchRng>(roster: &[MonsterRecord], rng: &mut R) -> PlayerState {
    let hero = build_hero(roster).unwrap_or_else(placeholder_hero);
    let mut side = PlayerState::new(build_deck(roster, rng), hero);
    side.draw_many(OPENING_HAND);
    side
}

/// Create a match between two rosters.
///
/// Both sides draw an opening hand, then the player's first turn begins
/// (one mana, one extra card).
pub fn initialize_match<R: MatchRng>(
    player_roster: &[MonsterRecord],
    opponent_roster: &[MonsterRecord],
    rules: MatchRules,
    rng: &mut R,
) -> BattleState {
    let player = build_side(player_roster, rng);
    let opponent = build_side(opponent_roster, rng);

    log::info!(
        target: "fml::battle",
        "new match: {} ({} cards) vs {} ({} cards)",
        player.hero.name,
        player.deck.len() + player.hand.len(),
        opponent.hero.name,
        opponent.deck.len() + opponent.hand.len(),
    );

    let opening = format!("Kick-off! {} vs {}.", player.hero.name, opponent.hero.name);
    let mut state = BattleState {
        player,
        opponent,
        active: Side::Player,
        turn: 1,
        winner: None,
        rules,
        log: Vec::new(),
    };
    state.push_log(opening);
    start_turn(&mut state, Side::Player);
    state
}
