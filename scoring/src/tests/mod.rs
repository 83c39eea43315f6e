mod ledger;

use alloc::string::String;
use alloc::vec::Vec;

use fml_battle::{CareerTotals, MonsterId, MonsterRecord, Position, UserId};

use crate::types::*;

pub const GW: GameweekId = GameweekId(7);

/// A fielded monster whose stat line is keyed by its own id
pub fn monster(id: u32, position: Position, rarity: &str, evolution_level: u32) -> MonsterRecord {
    MonsterRecord {
        id: MonsterId(id),
        template_code: String::from("TEST"),
        display_name: alloc::format!("Monster {}", id),
        real_player_name: alloc::format!("Player {}", id),
        position,
        club: String::from("Test FC"),
        rarity: String::from(rarity),
        base_attack: 5,
        base_magic: 5,
        base_defense: 5,
        evolution_level,
        blank_streak: 0,
        player_code: Some(id),
        career: CareerTotals::default(),
        edition: None,
    }
}

/// Stat line with an explicit provider total
pub fn points_line(player_code: u32, total_points: i32) -> GameweekPerformance {
    GameweekPerformance {
        player_code,
        minutes: 90,
        total_points: Some(total_points),
        ..Default::default()
    }
}

pub fn stat_line(player_code: u32, minutes: u32, goals: u32, assists: u32, clean_sheets: u32) -> GameweekPerformance {
    GameweekPerformance {
        player_code,
        minutes,
        goals,
        assists,
        clean_sheets,
        ..Default::default()
    }
}

pub fn assignment(id: u32, gameweek: GameweekId, monster_id: u32, code: &str, tries: u32) -> ChipAssignment {
    ChipAssignment {
        id: AssignmentId(id),
        gameweek,
        monster_id: MonsterId(monster_id),
        chip: UserChip {
            id: ChipId(100 + id),
            owner: UserId(1),
            condition_code: String::from(code),
            threshold: None,
            remaining_tries: tries,
            consumed: false,
        },
    }
}

pub fn entry(user: u64, monsters: Vec<MonsterRecord>) -> GameweekEntry {
    GameweekEntry {
        user_id: UserId(user),
        monsters,
    }
}
