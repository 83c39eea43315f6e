//! Battle state machine
//!
//! Every public function takes the current state by reference and hands back the
//! next one. A move the rules don't allow produces a clone of the input with one
//! extra log line and nothing else changed, so a stale or hostile client can never
//! push a match into a broken state. Once `winner` is set every move is rejected.

use alloc::format;
use alloc::string::{String, ToString};

use crate::error::{BattleError, BattleResult};
use crate::state::*;
use crate::types::*;

const TARGET: &str = "fml::battle";

/// Reason a side may not act right now, if any
fn turn_guard(state: &BattleState, side: Side) -> Option<String> {
    if state.is_over() {
        Some(String::from("The match is already over."))
    } else if state.active != side {
        Some(format!("It is not the {}'s turn.", side.label()))
    } else {
        None
    }
}

/// Same state, one more log line
fn reject(state: &BattleState, action: &str, reason: String) -> BattleState {
    log::warn!(target: TARGET, "rejected {} on turn {}: {}", action, state.turn, reason);
    let mut next = state.clone();
    next.push_log(reason);
    next
}

/// Beginning-of-turn bookkeeping for the side that just became active:
/// refill mana, wake up the board, draw a card.
pub(crate) fn start_turn(state: &mut BattleState, side: Side) {
    let turn = state.turn;
    let seat = state.side_mut(side);

    seat.max_mana = mana_for_turn(turn);
    seat.mana = seat.max_mana;
    for card in seat.board.iter_mut() {
        card.has_summoning_sickness = false;
        card.can_attack = !card.is_defender()
            && (!card.has_summoning_sickness || card.has_keyword(Keyword::Rush));
    }
    let drawn = seat.draw().map(|card| card.name().to_string());
    let mana = seat.mana;

    log::debug!(target: TARGET, "turn {} starts for {} with {} mana", turn, side.label(), mana);
    state.push_log(format!("Turn {}: {} has {} mana.", turn, side.label(), mana));
    state.push_log(match drawn {
        Some(name) => format!("{} draws {}.", side.label(), name),
        None => format!("{} has no cards left to draw.", side.label()),
    });
}

/// Play the card at `hand_index`.
///
/// Monsters go to the board (at most three, forwards need a midfielder to feed
/// them), damage spells hit the opposing hero and shields armor the caster's.
pub fn play_card(state: &BattleState, side: Side, hand_index: usize) -> BattleResult<BattleState> {
    if let Some(reason) = turn_guard(state, side) {
        return Ok(reject(state, "play_card", reason));
    }

    let seat = state.side(side);
    let card = seat
        .hand
        .get(hand_index)
        .ok_or(BattleError::InvalidHandIndex { index: hand_index as u32 })?;

    let cost = card.mana_cost();
    if !seat.can_afford(cost) {
        return Ok(reject(
            state,
            "play_card",
            format!("{} costs {} mana, only {} available.", card.name(), cost, seat.mana),
        ));
    }

    if let BattleCard::Monster(monster) = card {
        if seat.board_is_full() {
            return Ok(reject(
                state,
                "play_card",
                format!("The pitch is full, {} can't come on.", monster.name),
            ));
        }
        if monster.position == Position::Forward
            && !seat.has_position_on_board(Position::Midfielder)
        {
            return Ok(reject(
                state,
                "play_card",
                format!("{} needs a midfielder on the pitch to play.", monster.name),
            ));
        }
    }

    let mut next = state.clone();
    let (me, foe) = next.split_mut(side);
    let card = me.hand.remove(hand_index);
    me.mana -= cost;

    let line = match card {
        BattleCard::Monster(mut monster) => {
            let rush = monster.has_keyword(Keyword::Rush);
            monster.has_summoning_sickness = !rush;
            monster.can_attack = !monster.is_defender() && rush;
            let line = if monster.can_attack {
                format!("{} plays {} and it rushes in!", side.label(), monster.name)
            } else {
                format!("{} plays {}.", side.label(), monster.name)
            };
            me.board.push(monster);
            line
        }
        BattleCard::Spell(spell) => match spell.effect {
            SpellEffect::DamageHero => {
                foe.hero.take_damage(spell.value);
                format!(
                    "{} casts {}: {} takes {} damage ({} hp, {} armor left).",
                    side.label(),
                    spell.name,
                    foe.hero.name,
                    spell.value,
                    foe.hero.hp,
                    foe.hero.armor
                )
            }
            SpellEffect::ShieldHero => {
                me.hero.add_armor(spell.value);
                format!(
                    "{} casts {}: {} gains {} armor.",
                    side.label(),
                    spell.name,
                    me.hero.name,
                    spell.value
                )
            }
        },
    };

    log::debug!(target: TARGET, "{}", line);
    next.push_log(line);
    next.check_winner();
    Ok(next)
}

/// Attack with the monster at `attacker_index`.
///
/// Each monster attacks at most once per turn. Against a minion both sides trade
/// blows, except that forwards slip past the counter-hit of a taunting (and, under
/// the server rules, any defending) target. Dead monsters leave the board at once.
pub fn attack(
    state: &BattleState,
    side: Side,
    attacker_index: usize,
    target: AttackTarget,
) -> BattleResult<BattleState> {
    if let Some(reason) = turn_guard(state, side) {
        return Ok(reject(state, "attack", reason));
    }

    let attacker = state
        .side(side)
        .board
        .get(attacker_index)
        .ok_or(BattleError::InvalidBoardIndex { index: attacker_index as u32 })?;
    let defending = state.side(side.other());
    if let AttackTarget::Minion { index } = target {
        if defending.board.get(index as usize).is_none() {
            return Err(BattleError::InvalidTargetIndex { index });
        }
    }
    let rules = state.rules;

    if !attacker.can_attack {
        return Ok(reject(
            state,
            "attack",
            format!("{} can't attack right now.", attacker.name),
        ));
    }

    let mut next = match target {
        AttackTarget::Hero => {
            let guarded = defending.has_keyword_on_board(Keyword::Taunt)
                || (rules.defenders_guard_hero
                    && defending.has_position_on_board(Position::Defender));
            if guarded {
                return Ok(reject(
                    state,
                    "attack",
                    format!("{} can't reach the keeper past the defence.", attacker.name),
                ));
            }

            let mut next = state.clone();
            let (me, foe) = next.split_mut(side);
            foe.hero.take_damage(attacker.attack);
            let mut line = format!(
                "{} strikes {} for {} ({} hp, {} armor left).",
                attacker.name, foe.hero.name, attacker.attack, foe.hero.hp, foe.hero.armor
            );

            if rules.midfielder_dispossessed && attacker.position == Position::Midfielder {
                me.board.remove(attacker_index);
                line.push_str(&format!(" {} is dispossessed after the shot.", attacker.name));
            } else {
                me.board[attacker_index].can_attack = false;
            }

            log::debug!(target: TARGET, "{}", line);
            next.push_log(line);
            next
        }
        AttackTarget::Minion { index } => {
            let target_index = index as usize;
            let defender = &defending.board[target_index];

            if !defender.has_keyword(Keyword::Taunt)
                && defending.has_keyword_on_board(Keyword::Taunt)
            {
                return Ok(reject(
                    state,
                    "attack",
                    String::from("Must attack a taunting monster first."),
                ));
            }
            if rules.defenders_first
                && !defender.is_defender()
                && defending.has_position_on_board(Position::Defender)
            {
                return Ok(reject(
                    state,
                    "attack",
                    String::from("Must attack a defender while any defenders are on the pitch."),
                ));
            }

            let counter_exempt = attacker.position == Position::Forward
                && (defender.has_keyword(Keyword::Taunt)
                    || (rules.forwards_ignore_defender_counter && defender.is_defender()));
            let counter = if counter_exempt { 0 } else { defender.attack };
            let damage = attacker.attack;

            let mut next = state.clone();
            let (me, foe) = next.split_mut(side);
            foe.board[target_index].take_damage(damage);
            let striker = &mut me.board[attacker_index];
            striker.take_damage(counter);
            striker.can_attack = false;

            let line = format!(
                "{} hits {} for {} and takes {} back.",
                attacker.name, defender.name, damage, counter
            );
            let fallen: alloc::vec::Vec<String> = me
                .remove_dead()
                .into_iter()
                .chain(foe.remove_dead())
                .map(|card| format!("{} is knocked out.", card.name))
                .collect();

            log::debug!(target: TARGET, "{}", line);
            next.push_log(line);
            for line in fallen {
                next.push_log(line);
            }
            next
        }
    };

    next.check_winner();
    Ok(next)
}

/// Hand the turn to the other side.
///
/// The turn counter counts rounds: it only advances when play comes back to
/// [`Side::Player`]. Seat ownership is checked by [`apply_action`].
pub fn end_turn(state: &BattleState) -> BattleState {
    if state.is_over() {
        return reject(state, "end_turn", String::from("The match is already over."));
    }

    let mut next = state.clone();
    let ending = next.active;
    let starting = ending.other();
    next.active = starting;
    if starting == Side::Player {
        next.turn += 1;
    }
    next.push_log(format!("{} ends the turn.", ending.label()));
    start_turn(&mut next, starting);
    next
}

/// Pay [`HERO_POWER_COST`] mana to draw [`HERO_POWER_DRAW`] cards
pub fn hero_power(state: &BattleState, side: Side) -> BattleState {
    if let Some(reason) = turn_guard(state, side) {
        return reject(state, "hero_power", reason);
    }
    let seat = state.side(side);
    if !seat.can_afford(HERO_POWER_COST) {
        return reject(
            state,
            "hero_power",
            format!(
                "The hero power costs {} mana, only {} available.",
                HERO_POWER_COST, seat.mana
            ),
        );
    }

    let mut next = state.clone();
    let seat = next.side_mut(side);
    seat.mana -= HERO_POWER_COST;
    let drawn = seat.draw_many(HERO_POWER_DRAW);
    let line = format!("{} uses the hero power and draws {} card(s).", side.label(), drawn);
    log::debug!(target: TARGET, "{}", line);
    next.push_log(line);
    next
}

/// Apply one action on behalf of `side`
pub fn apply_action(
    state: &BattleState,
    side: Side,
    action: BattleAction,
) -> BattleResult<BattleState> {
    match action {
        BattleAction::PlayCard { hand_index } => play_card(state, side, hand_index as usize),
        BattleAction::Attack { attacker_index, target } => {
            attack(state, side, attacker_index as usize, target)
        }
        BattleAction::HeroPower => Ok(hero_power(state, side)),
        BattleAction::EndTurn => match turn_guard(state, side) {
            Some(reason) => Ok(reject(state, "end_turn", reason)),
            None => Ok(end_turn(state)),
        },
    }
}
