mod invariants;
mod play;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::cards::placeholder_hero;
use crate::state::*;
use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn record(
    id: u32,
    name: &str,
    position: Position,
    rarity: &str,
    attack: i32,
    magic: i32,
    defense: i32,
    evolution: u32,
) -> MonsterRecord {
    MonsterRecord {
        id: MonsterId(id),
        template_code: format!("tpl-{}", id),
        display_name: name.to_string(),
        real_player_name: name.to_string(),
        position,
        club: "Test FC".to_string(),
        rarity: rarity.to_string(),
        base_attack: attack,
        base_magic: magic,
        base_defense: defense,
        evolution_level: evolution,
        blank_streak: 0,
        player_code: Some(id),
        career: CareerTotals::default(),
        edition: None,
    }
}

/// A monster already settled on the board (no summoning sickness)
fn board_card(name: &str, position: Position, attack: i32, health: i32) -> MonsterCard {
    let keywords = match position {
        Position::Defender => vec![Keyword::Taunt],
        _ => Vec::new(),
    };
    MonsterCard {
        source_monster_id: MonsterId(0),
        name: name.to_string(),
        position,
        rarity: Rarity::Common,
        mana_cost: 1,
        attack,
        health,
        max_health: health,
        magic: 0,
        keywords,
        has_summoning_sickness: false,
        can_attack: position != Position::Defender,
    }
}

fn hand_monster(name: &str, position: Position, cost: u32) -> BattleCard {
    let mut card = board_card(name, position, 2, 2);
    card.mana_cost = cost;
    card.has_summoning_sickness = true;
    card.can_attack = false;
    BattleCard::Monster(card)
}

fn power_shot() -> BattleCard {
    BattleCard::Spell(crate::cards::spell_pool()[0].clone())
}

fn wall_of_roots() -> BattleCard {
    BattleCard::Spell(crate::cards::spell_pool()[1].clone())
}

/// Mid-match state with empty decks, full mana and the player to act
fn test_state(rules: MatchRules) -> BattleState {
    let mut player = PlayerState::new(Vec::new(), placeholder_hero());
    let mut opponent = PlayerState::new(Vec::new(), placeholder_hero());
    player.hero.name = String::from("Home GK");
    opponent.hero.name = String::from("Away GK");
    for seat in [&mut player, &mut opponent] {
        seat.mana = MAX_MANA;
        seat.max_mana = MAX_MANA;
    }
    BattleState {
        player,
        opponent,
        active: Side::Player,
        turn: 10,
        winner: None,
        rules,
        log: Vec::new(),
    }
}

/// Six outfielders and a keeper
fn sample_roster(base_id: u32) -> Vec<MonsterRecord> {
    vec![
        record(base_id, "Keeper", Position::Goalkeeper, "RARE", 1, 1, 8, 1),
        record(base_id + 1, "Back One", Position::Defender, "COMMON", 3, 1, 6, 0),
        record(base_id + 2, "Back Two", Position::Defender, "EPIC", 4, 2, 7, 2),
        record(base_id + 3, "Engine", Position::Midfielder, "RARE", 5, 4, 4, 1),
        record(base_id + 4, "Playmaker", Position::Midfielder, "LEGENDARY", 6, 6, 3, 3),
        record(base_id + 5, "Poacher", Position::Forward, "EPIC", 8, 2, 2, 0),
        record(base_id + 6, "Target Man", Position::Forward, "Mythical", 6, 3, 5, 0),
    ]
}

/// Everything except the log
fn same_board_and_heroes(a: &BattleState, b: &BattleState) -> bool {
    a.player.board == b.player.board
        && a.opponent.board == b.opponent.board
        && a.player.hero == b.player.hero
        && a.opponent.hero == b.opponent.hero
        && a.player.hand == b.player.hand
        && a.opponent.hand == b.opponent.hand
        && a.player.mana == b.player.mana
        && a.opponent.mana == b.opponent.mana
}
