//! Properties that must hold for every reachable state, checked over random
//! action sequences.

use super::*;
use crate::engine::apply_action;
use crate::rng::XorShiftRng;
use crate::setup::initialize_match;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn action_strategy() -> impl Strategy<Value = BattleAction> {
    prop_oneof![
        4 => (0u32..8).prop_map(|hand_index| BattleAction::PlayCard { hand_index }),
        2 => (0u32..3).prop_map(|attacker_index| BattleAction::Attack {
            attacker_index,
            target: AttackTarget::Hero,
        }),
        2 => (0u32..3, 0u32..3).prop_map(|(attacker_index, index)| BattleAction::Attack {
            attacker_index,
            target: AttackTarget::Minion { index },
        }),
        1 => Just(BattleAction::HeroPower),
        2 => Just(BattleAction::EndTurn),
    ]
}

fn check_invariants(state: &BattleState) -> Result<(), TestCaseError> {
    for seat in [&state.player, &state.opponent] {
        prop_assert!(seat.mana <= seat.max_mana);
        prop_assert!(seat.max_mana <= mana_for_turn(state.turn));
        prop_assert!(seat.board.len() <= MAX_BOARD_SIZE);
        prop_assert!(seat
            .board
            .iter()
            .all(|card| card.health > 0 && card.health <= card.max_health));
        prop_assert!(seat.hero.hp >= 0);
    }
    if state.player.hero.hp == 0 || state.opponent.hero.hp == 0 {
        prop_assert!(state.winner.is_some());
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_reachable_states_hold_invariants(
        seed in any::<u64>(),
        server_rules in any::<bool>(),
        low_hp in any::<bool>(),
        actions in prop::collection::vec(action_strategy(), 0..250),
    ) {
        let rules = if server_rules { MatchRules::server() } else { MatchRules::standard() };
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let mut state = initialize_match(&sample_roster(1), &sample_roster(100), rules, &mut rng);
        if low_hp {
            state.player.hero.hp = 8;
            state.opponent.hero.hp = 8;
        }
        check_invariants(&state)?;

        for action in actions {
            let Ok(next) = apply_action(&state, state.active, action) else {
                continue;
            };

            if state.winner.is_some() {
                prop_assert_eq!(next.winner, state.winner);
                prop_assert!(same_board_and_heroes(&state, &next));
            }

            if next.active != state.active && next.active == Side::Player {
                prop_assert_eq!(next.turn, state.turn + 1);
            } else {
                prop_assert_eq!(next.turn, state.turn);
            }

            prop_assert!(next.log.len() > state.log.len());
            check_invariants(&next)?;
            state = next;
        }
    }
}
