//! Evolution ladder, form classification and level changes.
//!
//! Multipliers are kept in per-mille so scoring stays in integer arithmetic:
//! `1150` means ×1.15.

use alloc::vec;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use fml_battle::Rarity;

use crate::types::EvolutionReason;

/// Multiplier steps per rarity, indexed by evolution level.
/// Levels past the end of a ladder use its last step.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionLadder {
    pub common: Vec<u32>,
    pub rare: Vec<u32>,
    pub epic: Vec<u32>,
    pub legendary: Vec<u32>,
    /// Flat multiplier, mythical monsters ignore their level
    pub mythical: u32,
}

impl Default for EvolutionLadder {
    fn default() -> Self {
        Self {
            common: vec![1000, 1150],
            rare: vec![1000, 1150, 1350],
            epic: vec![1000, 1150, 1350, 1650],
            legendary: vec![1000, 1150, 1350, 1650, 2000],
            mythical: 1800,
        }
    }
}

impl EvolutionLadder {
    pub fn per_mille(&self, rarity: Rarity, level: u32) -> u32 {
        let steps = match rarity {
            Rarity::Common => &self.common,
            Rarity::Rare => &self.rare,
            Rarity::Epic => &self.epic,
            Rarity::Legendary => &self.legendary,
            Rarity::Mythical => return self.mythical,
        };
        let index = (level as usize).min(steps.len().saturating_sub(1));
        steps.get(index).copied().unwrap_or(1000)
    }
}

/// `points × per_mille / 1000`, rounded half up
pub fn apply_multiplier(points: i32, per_mille: u32) -> i32 {
    let scaled = i64::from(points) * i64::from(per_mille) + 500;
    scaled.div_euclid(1000) as i32
}

/// How a gameweek went for one monster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCheck {
    pub is_blank: bool,
    pub is_big_fail: bool,
}

impl FormCheck {
    /// Classify base points. No stat line at all is a blank but never a big fail.
    pub fn classify(base_points: Option<i32>, blank_threshold: i32, big_fail_threshold: i32) -> Self {
        match base_points {
            Some(points) => Self {
                is_blank: points <= blank_threshold,
                is_big_fail: points <= big_fail_threshold,
            },
            None => Self { is_blank: true, is_big_fail: false },
        }
    }
}

/// Update the blank streak and apply any devolution.
///
/// Returns the reason when the level dropped. Mythical monsters and monsters
/// already at level 0 never devolve, their streak keeps counting.
pub fn apply_form(
    rarity: Rarity,
    level: &mut u32,
    blank_streak: &mut u32,
    form: FormCheck,
    streak_limit: u32,
) -> Option<EvolutionReason> {
    if form.is_blank {
        *blank_streak += 1;
    } else {
        *blank_streak = 0;
    }

    if rarity == Rarity::Mythical || *level == 0 {
        return None;
    }

    let reason = if form.is_big_fail {
        EvolutionReason::BigFail
    } else if *blank_streak >= streak_limit {
        EvolutionReason::BlankStreak
    } else {
        return None;
    };
    *level -= 1;
    *blank_streak = 0;
    Some(reason)
}

/// Level after a successful chip, capped by rarity
pub fn chip_boost(rarity: Rarity, level: u32) -> u32 {
    match rarity.max_evolution() {
        Some(cap) if level < cap => level + 1,
        _ => level,
    }
}
