//! Card builder: roster records to combat-ready cards and heroes.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::state::{HeroState, HERO_MAX_HP};
use crate::types::*;

/// Base attack at which a forward always rushes
pub const RUSH_ATTACK_THRESHOLD: i32 = 8;
/// Overall power at which a forward rushes regardless of attack
pub const RUSH_POWER_THRESHOLD: i32 = 20;
/// Flat health every monster gets on top of its defense
pub const BASE_HEALTH_BONUS: i32 = 5;
/// Extra health for mythical monsters
pub const MYTHICAL_HEALTH_BONUS: i32 = 3;
/// Name of the hero used when a roster has no goalkeeper
pub const PLACEHOLDER_HERO_NAME: &str = "Mysterious GK";

/// Build a fresh combat card from a roster record
pub fn build_monster_card(record: &MonsterRecord) -> MonsterCard {
    let rarity = record.rarity_tier();
    let evolution_bonus = (record.evolution_level / 2) as i32;
    let top_tier = matches!(rarity, Rarity::Legendary | Rarity::Mythical);

    let attack = record.base_attack + evolution_bonus + i32::from(top_tier);
    let health = record.base_defense
        + BASE_HEALTH_BONUS
        + evolution_bonus
        + if rarity == Rarity::Mythical { MYTHICAL_HEALTH_BONUS } else { 0 };

    MonsterCard {
        source_monster_id: record.id,
        name: record.display_name.clone(),
        position: record.position,
        rarity,
        mana_cost: rarity.mana_cost(),
        attack,
        health,
        max_health: health,
        magic: record.base_magic,
        keywords: keywords_for(record),
        has_summoning_sickness: true,
        can_attack: false,
    }
}

fn keywords_for(record: &MonsterRecord) -> Vec<Keyword> {
    match record.position {
        Position::Defender => vec![Keyword::Taunt],
        Position::Forward
            if record.base_attack >= RUSH_ATTACK_THRESHOLD
                || record.power() >= RUSH_POWER_THRESHOLD =>
        {
            vec![Keyword::Rush]
        }
        _ => Vec::new(),
    }
}

/// Pick the strongest goalkeeper of a roster as hero.
///
/// Strength is `base_defense + evolution_level`; the first of equally strong
/// keepers wins. Returns `None` when the roster has no goalkeeper.
pub fn build_hero(roster: &[MonsterRecord]) -> Option<HeroState> {
    let keeper = roster
        .iter()
        .filter(|record| record.position == Position::Goalkeeper)
        .fold(None::<&MonsterRecord>, |best, record| match best {
            Some(best) if hero_strength(best) >= hero_strength(record) => Some(best),
            _ => Some(record),
        })?;

    Some(HeroState {
        name: keeper.display_name.clone(),
        source_monster_id: Some(keeper.id),
        hp: HERO_MAX_HP,
        max_hp: HERO_MAX_HP,
        armor: 0,
    })
}

fn hero_strength(record: &MonsterRecord) -> i32 {
    record.base_defense + record.evolution_level as i32
}

/// Stand-in hero for rosters without a goalkeeper
pub fn placeholder_hero() -> HeroState {
    HeroState {
        name: String::from(PLACEHOLDER_HERO_NAME),
        source_monster_id: None,
        hp: HERO_MAX_HP,
        max_hp: HERO_MAX_HP,
        armor: 0,
    }
}

/// The spells decks are filled from
pub fn spell_pool() -> [SpellCard; 2] {
    [
        SpellCard {
            name: String::from("Power Shot"),
            mana_cost: 2,
            effect: SpellEffect::DamageHero,
            value: 3,
        },
        SpellCard {
            name: String::from("Wall of Roots"),
            mana_cost: 2,
            effect: SpellEffect::ShieldHero,
            value: 3,
        },
    ]
}
