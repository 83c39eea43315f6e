//! View types for client serialization
//!
//! A [`BattleView`] is what one seat is allowed to see: its own hand in full, the
//! other hand and both decks only as counts.

use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::state::*;
use crate::types::*;

/// A card in the viewer's hand
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandCardView {
    pub card: BattleCard,
    /// Whether the viewer has the mana for it right now
    pub can_afford: bool,
}

/// A monster on either board
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCardView {
    pub name: String,
    pub position: Position,
    pub rarity: Rarity,
    pub attack: i32,
    pub health: i32,
    pub max_health: i32,
    pub keywords: Vec<Keyword>,
    pub can_attack: bool,
}

impl From<&MonsterCard> for BoardCardView {
    fn from(card: &MonsterCard) -> Self {
        Self {
            name: card.name.clone(),
            position: card.position,
            rarity: card.rarity,
            attack: card.attack,
            health: card.health,
            max_health: card.max_health,
            keywords: card.keywords.clone(),
            can_attack: card.can_attack,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub armor: i32,
}

impl From<&HeroState> for HeroView {
    fn from(hero: &HeroState) -> Self {
        Self {
            name: hero.name.clone(),
            hp: hero.hp,
            max_hp: hero.max_hp,
            armor: hero.armor,
        }
    }
}

/// The match as seen from one seat
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleView {
    pub viewer: Side,
    pub is_my_turn: bool,
    pub turn: u32,
    pub winner: Option<Winner>,
    pub mana: u32,
    pub max_mana: u32,
    pub hand: Vec<HandCardView>,
    pub deck_count: u32,
    pub board: Vec<BoardCardView>,
    pub hero: HeroView,
    pub opponent_hand_count: u32,
    pub opponent_deck_count: u32,
    pub opponent_mana: u32,
    pub opponent_board: Vec<BoardCardView>,
    pub opponent_hero: HeroView,
    /// Whether the hero power is affordable and the viewer may act
    pub can_use_hero_power: bool,
    pub log: Vec<String>,
}

impl BattleView {
    /// Project the state for `viewer`
    pub fn for_side(state: &BattleState, viewer: Side) -> Self {
        let me = state.side(viewer);
        let foe = state.side(viewer.other());
        let is_my_turn = state.active == viewer && !state.is_over();

        Self {
            viewer,
            is_my_turn,
            turn: state.turn,
            winner: state.winner,
            mana: me.mana,
            max_mana: me.max_mana,
            hand: me
                .hand
                .iter()
                .map(|card| HandCardView {
                    card: card.clone(),
                    can_afford: is_my_turn && me.can_afford(card.mana_cost()),
                })
                .collect(),
            deck_count: me.deck.len() as u32,
            board: me.board.iter().map(BoardCardView::from).collect(),
            hero: HeroView::from(&me.hero),
            opponent_hand_count: foe.hand.len() as u32,
            opponent_deck_count: foe.deck.len() as u32,
            opponent_mana: foe.mana,
            opponent_board: foe.board.iter().map(BoardCardView::from).collect(),
            opponent_hero: HeroView::from(&foe.hero),
            can_use_hero_power: is_my_turn && me.can_afford(HERO_POWER_COST),
            log: state.log.clone(),
        }
    }
}
