use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Maximum monsters on one side of the pitch
pub const MAX_BOARD_SIZE: usize = 3;
/// Mana ceiling, reached on turn 10
pub const MAX_MANA: u32 = 10;
/// Hero hit points
pub const HERO_MAX_HP: i32 = 300;
/// Cards each side draws before the first turn
pub const OPENING_HAND: usize = 3;
/// Outfield monsters taken into a deck
pub const DECK_MONSTERS: usize = 11;
/// Spell cards shuffled into every deck
pub const SPELLS_PER_DECK: usize = 4;
/// Mana cost of the hero power
pub const HERO_POWER_COST: u32 = 3;
/// Cards drawn by the hero power
pub const HERO_POWER_DRAW: usize = 2;

/// Mana available on a given turn
pub fn mana_for_turn(turn: u32) -> u32 {
    turn.min(MAX_MANA)
}

/// One of the two seats in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

/// Terminal result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Winner {
    Player,
    Opponent,
    Draw,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Winner::Player,
            Side::Opponent => Winner::Opponent,
        }
    }
}

/// Rule switches distinguishing the engine variants.
///
/// A taunting monster guards its hero and the other monsters on its board under
/// both rule sets. `standard()` adds nothing on top of that. `server()` also
/// treats every defender as a guard, spares forwards the counter-hit from
/// defenders and takes a midfielder off the pitch once it has shot at the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRules {
    /// Hero can't be attacked while a defender is on the defending board
    pub defenders_guard_hero: bool,
    /// Non-defender minions can't be attacked while a defender is on the board
    pub defenders_first: bool,
    /// Forwards take no counter-damage from defenders (taunt always exempts)
    pub forwards_ignore_defender_counter: bool,
    /// Midfielders leave the board after striking the hero
    pub midfielder_dispossessed: bool,
}

impl MatchRules {
    pub const fn standard() -> Self {
        Self {
            defenders_guard_hero: false,
            defenders_first: false,
            forwards_ignore_defender_counter: false,
            midfielder_dispossessed: false,
        }
    }

    pub const fn server() -> Self {
        Self {
            defenders_guard_hero: true,
            defenders_first: true,
            forwards_ignore_defender_counter: true,
            midfielder_dispossessed: true,
        }
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self::server()
    }
}

/// Goalkeeper-derived avatar. Armor soaks damage before hp.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroState {
    pub name: String,
    pub source_monster_id: Option<MonsterId>,
    pub hp: i32,
    pub max_hp: i32,
    pub armor: i32,
}

impl HeroState {
    /// Apply damage armor-first. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let amount = amount.max(0);
        let absorbed = amount.min(self.armor);
        self.armor -= absorbed;
        let through = amount - absorbed;
        let before = self.hp;
        self.hp = (self.hp - through).max(0);
        before - self.hp
    }

    pub fn add_armor(&mut self, amount: i32) {
        self.armor += amount.max(0);
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

/// Everything one seat owns during a match
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Draw pile, front is the top
    pub deck: Vec<BattleCard>,
    pub hand: Vec<BattleCard>,
    /// At most [`MAX_BOARD_SIZE`] monsters
    pub board: Vec<MonsterCard>,
    pub hero: HeroState,
    pub mana: u32,
    pub max_mana: u32,
}

impl PlayerState {
    pub fn new(deck: Vec<BattleCard>, hero: HeroState) -> Self {
        Self {
            deck,
            hand: Vec::new(),
            board: Vec::new(),
            hero,
            mana: 0,
            max_mana: 0,
        }
    }

    /// Move the top of the deck into the hand. An empty deck is a no-op.
    pub fn draw(&mut self) -> Option<&BattleCard> {
        if self.deck.is_empty() {
            return None;
        }
        let card = self.deck.remove(0);
        self.hand.push(card);
        self.hand.last()
    }

    /// Draw up to `count` cards, returns how many were drawn
    pub fn draw_many(&mut self, count: usize) -> usize {
        (0..count).take_while(|_| self.draw().is_some()).count()
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.mana >= cost
    }

    pub fn board_is_full(&self) -> bool {
        self.board.len() >= MAX_BOARD_SIZE
    }

    pub fn has_position_on_board(&self, position: Position) -> bool {
        self.board.iter().any(|card| card.position == position)
    }

    pub fn has_keyword_on_board(&self, keyword: Keyword) -> bool {
        self.board.iter().any(|card| card.has_keyword(keyword))
    }

    /// Drop every monster whose health is gone
    pub fn remove_dead(&mut self) -> Vec<MonsterCard> {
        let (alive, dead): (Vec<_>, Vec<_>) = core::mem::take(&mut self.board)
            .into_iter()
            .partition(MonsterCard::is_alive);
        self.board = alive;
        dead
    }
}

/// Root aggregate of one match
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleState {
    pub player: PlayerState,
    pub opponent: PlayerState,
    pub active: Side,
    /// Round counter, only advances when play returns to [`Side::Player`]
    pub turn: u32,
    pub winner: Option<Winner>,
    pub rules: MatchRules,
    /// Append-only, human readable, shown to both players
    pub log: Vec<String>,
}

impl BattleState {
    pub fn side(&self, side: Side) -> &PlayerState {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut PlayerState {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Mutable access to both seats at once, acting side first
    pub fn split_mut(&mut self, acting: Side) -> (&mut PlayerState, &mut PlayerState) {
        match acting {
            Side::Player => (&mut self.player, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.player),
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn push_log(&mut self, line: String) {
        self.log.push(line);
    }

    /// Set `winner` if a hero has fallen. Both at once is a draw.
    pub fn check_winner(&mut self) -> Option<Winner> {
        if self.winner.is_some() {
            return self.winner;
        }
        let winner = match (self.player.hero.is_defeated(), self.opponent.hero.is_defeated()) {
            (true, true) => Some(Winner::Draw),
            (true, false) => Some(Winner::Opponent),
            (false, true) => Some(Winner::Player),
            (false, false) => None,
        };
        if let Some(winner) = winner {
            log::info!(target: "fml::battle", "match decided on turn {}: {:?}", self.turn, winner);
            self.push_log(match winner {
                Winner::Draw => String::from("Both heroes fall. The match is a draw."),
                Winner::Player => alloc::format!("{} falls. Player wins!", self.opponent.hero.name),
                Winner::Opponent => alloc::format!("{} falls. Opponent wins!", self.player.hero.name),
            });
        }
        self.winner = winner;
        winner
    }
}
