//! Gameweek scoring run
//!
//! Each fielded monster is scored independently, in this order:
//! base points, blank/big-fail classification, devolution, chip resolution,
//! evolution multiplier, career totals. The multiplier uses the level after
//! devolution and chips have been applied.

use alloc::collections::btree_map::Entry;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use fml_battle::{MonsterId, MonsterRecord, UserId};

use crate::chips::ChipCondition;
use crate::error::{ScoringError, ScoringResult};
use crate::evolution::{apply_form, apply_multiplier, chip_boost, FormCheck};
use crate::rules::ScoringRules;
use crate::types::*;

const TARGET: &str = "fml::scoring";

/// Score one finalized gameweek.
///
/// `entries` lists every user's fielded monsters; a monster may be fielded only
/// once. Stat lines are matched through `MonsterRecord::player_code`, and a
/// monster without one is scored as not having played. Every chip assignment for
/// `gameweek` is resolved exactly once, including assignments whose monster was
/// not fielded and extra chips stacked on one monster (both failures).
/// Assignments for other gameweeks are left alone.
///
/// Career totals are increments: scoring the same gameweek twice double counts.
/// Use [`crate::ScoringLedger`] to guard against re-runs.
pub fn score_gameweek(
    gameweek: GameweekId,
    performances: &[GameweekPerformance],
    assignments: &[ChipAssignment],
    entries: &[GameweekEntry],
    rules: &ScoringRules,
) -> ScoringResult<GameweekOutcome> {
    let stats = index_performances(performances);
    let (chips, extra) = index_assignments(gameweek, assignments);

    let mut fielded = BTreeSet::new();
    let mut totals: BTreeMap<UserId, i32> = BTreeMap::new();
    let mut outcome = GameweekOutcome {
        gameweek,
        user_totals: Vec::new(),
        monster_updates: Vec::new(),
        evolution_events: Vec::new(),
        chip_resolutions: Vec::new(),
    };

    for entry in entries {
        let total = totals.entry(entry.user_id).or_insert(0);
        for record in &entry.monsters {
            if !fielded.insert(record.id) {
                return Err(ScoringError::DuplicateMonster { monster_id: record.id });
            }
            let performance = performance_for(&stats, record);
            let chip = chips.get(&record.id).copied();
            let scored = score_monster(gameweek, entry.user_id, record, performance, chip, rules);

            *total += scored.update.final_points;
            outcome.monster_updates.push(scored.update);
            outcome.evolution_events.extend(scored.events);
            outcome.chip_resolutions.extend(scored.resolution);
        }
    }

    for (monster_id, assignment) in &chips {
        if !fielded.contains(monster_id) {
            log::warn!(
                target: TARGET,
                "gameweek {}: chip assignment {} targets monster {} which was not fielded",
                gameweek.0,
                assignment.id.0,
                monster_id.0
            );
            outcome.chip_resolutions.push(resolve_chip(assignment, false, gameweek));
        }
    }
    for assignment in extra {
        outcome.chip_resolutions.push(resolve_chip(assignment, false, gameweek));
    }

    outcome.user_totals = totals
        .into_iter()
        .map(|(user_id, points)| {
            log::info!(target: TARGET, "gameweek {}: user {} scores {}", gameweek.0, user_id.0, points);
            UserGameweekScore { user_id, gameweek, points }
        })
        .collect();

    Ok(outcome)
}

fn index_performances(performances: &[GameweekPerformance]) -> BTreeMap<u32, &GameweekPerformance> {
    let mut stats = BTreeMap::new();
    for performance in performances {
        if stats.insert(performance.player_code, performance).is_some() {
            log::warn!(
                target: TARGET,
                "duplicate stat line for player {}, keeping the last one",
                performance.player_code
            );
        }
    }
    stats
}

/// The first assignment on a monster is the one evaluated. Later ones on the
/// same monster come back in the second list and are resolved as failures. An
/// assignment id listed twice is only resolved once.
fn index_assignments(
    gameweek: GameweekId,
    assignments: &[ChipAssignment],
) -> (BTreeMap<MonsterId, &ChipAssignment>, Vec<&ChipAssignment>) {
    let mut seen = BTreeSet::new();
    let mut chips = BTreeMap::new();
    let mut extra = Vec::new();
    for assignment in assignments.iter().filter(|a| a.gameweek == gameweek) {
        if !seen.insert(assignment.id) {
            log::warn!(
                target: TARGET,
                "chip assignment {} is listed twice, resolving it once",
                assignment.id.0
            );
            continue;
        }
        match chips.entry(assignment.monster_id) {
            Entry::Vacant(slot) => {
                slot.insert(assignment);
            }
            Entry::Occupied(_) => {
                log::warn!(
                    target: TARGET,
                    "monster {} already has a chip this gameweek, assignment {} fails",
                    assignment.monster_id.0,
                    assignment.id.0
                );
                extra.push(assignment);
            }
        }
    }
    (chips, extra)
}

fn performance_for<'a>(
    stats: &BTreeMap<u32, &'a GameweekPerformance>,
    record: &MonsterRecord,
) -> Option<&'a GameweekPerformance> {
    let Some(code) = record.player_code else {
        log::warn!(
            target: TARGET,
            "monster {} ({}) has no player code, scoring as a non-appearance",
            record.id.0,
            record.real_player_name
        );
        return None;
    };
    let performance = stats.get(&code).copied();
    if performance.is_none() {
        log::debug!(target: TARGET, "no stat line for player {}", code);
    }
    performance
}

struct ScoredMonster {
    update: MonsterUpdate,
    events: Vec<EvolutionEvent>,
    resolution: Option<ChipResolution>,
}

fn score_monster(
    gameweek: GameweekId,
    owner: UserId,
    record: &MonsterRecord,
    performance: Option<&GameweekPerformance>,
    chip: Option<&ChipAssignment>,
    rules: &ScoringRules,
) -> ScoredMonster {
    let rarity = record.rarity_tier();
    let base = performance.map(|p| rules.points.base_points(record.position, p));
    let base_points = base.unwrap_or(0);
    let form = FormCheck::classify(base, rules.blank_threshold, rules.big_fail_threshold);

    let mut level = record.evolution_level;
    let mut blank_streak = record.blank_streak;
    let mut events = Vec::new();

    let before = level;
    if let Some(reason) = apply_form(rarity, &mut level, &mut blank_streak, form, rules.blank_streak_limit) {
        let description = match reason {
            EvolutionReason::BigFail => format!(
                "{} devolved to level {} after a big fail ({} pts).",
                record.display_name, level, base_points
            ),
            _ => format!(
                "{} devolved to level {} after {} blank gameweeks.",
                record.display_name, level, rules.blank_streak_limit
            ),
        };
        events.push(evolution_event(record, gameweek, before, level, reason, description));
    }

    let mut resolution = None;
    if let Some(assignment) = chip {
        let success = chip_succeeds(assignment, performance, base_points, rules);
        if success {
            let before = level;
            level = chip_boost(rarity, level);
            if level != before {
                let description = format!(
                    "{} evolved to level {} with chip {}.",
                    record.display_name, level, assignment.chip.condition_code
                );
                events.push(evolution_event(
                    record,
                    gameweek,
                    before,
                    level,
                    EvolutionReason::ChipSuccess,
                    description,
                ));
            }
        }
        resolution = Some(resolve_chip(assignment, success, gameweek));
    }

    let final_points = apply_multiplier(base_points, rules.ladder.per_mille(rarity, level));

    let mut career = record.career.clone();
    if let Some(performance) = performance {
        career.goals += performance.goals;
        career.assists += performance.assists;
        career.clean_sheets += performance.clean_sheets;
    }
    career.fantasy_points += final_points;

    log::debug!(
        target: TARGET,
        "gameweek {}: {} base {} final {} level {} streak {}",
        gameweek.0,
        record.display_name,
        base_points,
        final_points,
        level,
        blank_streak
    );

    ScoredMonster {
        update: MonsterUpdate {
            monster_id: record.id,
            owner,
            played: performance.is_some(),
            base_points,
            final_points,
            evolution_level: level,
            blank_streak,
            career,
        },
        events,
        resolution,
    }
}

fn chip_succeeds(
    assignment: &ChipAssignment,
    performance: Option<&GameweekPerformance>,
    base_points: i32,
    rules: &ScoringRules,
) -> bool {
    let chip = &assignment.chip;
    if chip.consumed || chip.remaining_tries == 0 {
        log::warn!(target: TARGET, "chip {} is already used up", chip.id.0);
        return false;
    }
    match ChipCondition::from_code(&chip.condition_code) {
        Some(condition) => {
            condition.evaluate(performance, base_points, chip.threshold, rules.clean_sheet_minutes)
        }
        None => {
            log::warn!(
                target: TARGET,
                "chip {} has unknown condition code {:?}",
                chip.id.0,
                chip.condition_code
            );
            false
        }
    }
}

/// Success consumes the chip; failure costs one try and consumes it at zero.
fn resolve_chip(assignment: &ChipAssignment, success: bool, gameweek: GameweekId) -> ChipResolution {
    let remaining_tries = if success {
        0
    } else {
        assignment.chip.remaining_tries.saturating_sub(1)
    };
    ChipResolution {
        assignment_id: assignment.id,
        chip_id: assignment.chip.id,
        monster_id: assignment.monster_id,
        success,
        remaining_tries,
        consumed: success || remaining_tries == 0,
        resolved_at: gameweek,
    }
}

fn evolution_event(
    record: &MonsterRecord,
    gameweek: GameweekId,
    old_level: u32,
    new_level: u32,
    reason: EvolutionReason,
    description: String,
) -> EvolutionEvent {
    log::info!(target: TARGET, "{}", description);
    EvolutionEvent {
        monster_id: record.id,
        gameweek,
        old_level,
        new_level,
        reason,
        description,
    }
}
