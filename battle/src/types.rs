use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Persistent identifier of a monster in the roster store
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MonsterId(pub u32);

/// Identifier of the user owning a roster
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// Pitch position of the real player behind a monster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }
}

/// Rarity tier of a monster.
///
/// Rosters carry rarity as free text, so the tier is always derived through
/// [`Rarity::from_label`] rather than trusted verbatim.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythical,
}

impl Rarity {
    /// Normalize a free-text rarity label.
    ///
    /// Matching is a case-insensitive substring search ("Mythic", "MYTHICAL" and
    /// "mythical edition" all resolve to [`Rarity::Mythical`]). Anything
    /// unrecognized is [`Rarity::Common`].
    pub fn from_label(label: &str) -> Self {
        let label = label.to_ascii_uppercase();
        if label.contains("MYTH") {
            Rarity::Mythical
        } else if label.contains("LEGEND") {
            Rarity::Legendary
        } else if label.contains("EPIC") {
            Rarity::Epic
        } else if label.contains("RARE") {
            Rarity::Rare
        } else {
            Rarity::Common
        }
    }

    /// Mana cost of a monster card of this tier
    pub fn mana_cost(&self) -> u32 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
            Rarity::Mythical => 5,
        }
    }

    /// Highest evolution level a chip can push this tier to.
    /// `None` means chips never change the level.
    pub fn max_evolution(&self) -> Option<u32> {
        match self {
            Rarity::Common => Some(1),
            Rarity::Rare => Some(2),
            Rarity::Epic => Some(3),
            Rarity::Legendary => Some(4),
            Rarity::Mythical => None,
        }
    }
}

/// Combat keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Keyword {
    /// Must be dealt with before the hero and other non-taunt targets
    Taunt,
    /// May attack the turn it is played
    Rush,
}

/// Career totals accumulated by gameweek scoring
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTotals {
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub fantasy_points: i32,
}

/// A persisted monster as supplied by the roster provider
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterRecord {
    pub id: MonsterId,
    pub template_code: String,
    pub display_name: String,
    pub real_player_name: String,
    pub position: Position,
    pub club: String,
    /// Free-text rarity label, see [`Rarity::from_label`]
    pub rarity: String,
    pub base_attack: i32,
    pub base_magic: i32,
    pub base_defense: i32,
    pub evolution_level: u32,
    /// Consecutive blank gameweeks
    pub blank_streak: u32,
    /// Stable code of the real player in the stat feed. `None` when unmapped.
    #[serde(default)]
    pub player_code: Option<u32>,
    #[serde(default)]
    pub career: CareerTotals,
    #[serde(default)]
    pub edition: Option<String>,
}

impl MonsterRecord {
    pub fn rarity_tier(&self) -> Rarity {
        Rarity::from_label(&self.rarity)
    }

    /// Overall strength used for deck selection and the rush threshold
    pub fn power(&self) -> i32 {
        self.base_attack + self.base_magic + self.base_defense + 2 * self.evolution_level as i32
    }
}

/// A monster in a deck, hand or on the board. Recreated for every match.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterCard {
    /// Back-reference to the roster entry this card was built from
    pub source_monster_id: MonsterId,
    pub name: String,
    pub position: Position,
    pub rarity: Rarity,
    pub mana_cost: u32,
    pub attack: i32,
    pub health: i32,
    pub max_health: i32,
    /// Informational only, combat does not read it
    pub magic: i32,
    pub keywords: Vec<Keyword>,
    pub has_summoning_sickness: bool,
    pub can_attack: bool,
}

impl MonsterCard {
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.keywords.contains(&keyword)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount.max(0);
    }

    /// Defenders guard the pitch and never attack
    pub fn is_defender(&self) -> bool {
        self.position == Position::Defender
    }
}

/// Spell effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpellEffect {
    /// Damage the opposing hero, armor first
    DamageHero,
    /// Add armor to the caster's hero
    ShieldHero,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellCard {
    pub name: String,
    pub mana_cost: u32,
    pub effect: SpellEffect,
    pub value: i32,
}

/// Anything that can sit in a deck or hand
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleCard {
    Monster(MonsterCard),
    Spell(SpellCard),
}

impl BattleCard {
    pub fn mana_cost(&self) -> u32 {
        match self {
            BattleCard::Monster(card) => card.mana_cost,
            BattleCard::Spell(card) => card.mana_cost,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            BattleCard::Monster(card) => &card.name,
            BattleCard::Spell(card) => &card.name,
        }
    }
}

/// What an attack is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AttackTarget {
    Hero,
    Minion { index: u32 },
}

/// A single move submitted by the side whose turn it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BattleAction {
    #[serde(rename_all = "camelCase")]
    PlayCard { hand_index: u32 },
    #[serde(rename_all = "camelCase")]
    Attack { attacker_index: u32, target: AttackTarget },
    EndTurn,
    HeroPower,
}
