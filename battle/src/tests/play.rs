use super::*;
use crate::engine::play_card;
use crate::error::BattleError;

#[test]
fn test_play_monster_spends_mana_and_enters_sick() {
    let mut state = test_state(MatchRules::server());
    state.player.hand = vec![hand_monster("Engine", Position::Midfielder, 3)];

    let next = play_card(&state, Side::Player, 0).unwrap();

    assert!(next.player.hand.is_empty());
    assert_eq!(next.player.mana, MAX_MANA - 3);
    assert_eq!(next.player.board.len(), 1);
    let played = &next.player.board[0];
    assert!(played.has_summoning_sickness);
    assert!(!played.can_attack);
}

#[test]
fn test_rush_forward_can_attack_immediately() {
    let mut state = test_state(MatchRules::server());
    state.player.board = vec![board_card("Engine", Position::Midfielder, 2, 2)];
    let mut rusher = hand_monster("Poacher", Position::Forward, 3);
    if let BattleCard::Monster(card) = &mut rusher {
        card.keywords = vec![Keyword::Rush];
    }
    state.player.hand = vec![rusher];

    let next = play_card(&state, Side::Player, 0).unwrap();
    let played = &next.player.board[1];
    assert!(!played.has_summoning_sickness);
    assert!(played.can_attack);
}

#[test]
fn test_not_enough_mana_is_rejected_without_spending() {
    let mut state = test_state(MatchRules::server());
    state.player.mana = 2;
    state.player.hand = vec![hand_monster("Star", Position::Midfielder, 4)];

    let next = play_card(&state, Side::Player, 0).unwrap();

    assert!(same_board_and_heroes(&state, &next));
    assert_eq!(next.player.mana, 2);
    assert_eq!(next.log.len(), state.log.len() + 1);
    assert!(next.log.last().unwrap().contains("costs 4 mana"));
}

#[test]
fn test_full_board_rejects_monsters() {
    let mut state = test_state(MatchRules::server());
    state.player.board = vec![
        board_card("A", Position::Midfielder, 1, 1),
        board_card("B", Position::Midfielder, 1, 1),
        board_card("C", Position::Defender, 1, 1),
    ];
    state.player.hand = vec![hand_monster("D", Position::Midfielder, 1)];

    let next = play_card(&state, Side::Player, 0).unwrap();

    assert_eq!(next.player.board.len(), MAX_BOARD_SIZE);
    assert_eq!(next.player.hand.len(), 1);
    assert_eq!(next.player.mana, MAX_MANA);
}

#[test]
fn test_full_board_still_allows_spells() {
    let mut state = test_state(MatchRules::server());
    state.player.board = vec![
        board_card("A", Position::Midfielder, 1, 1),
        board_card("B", Position::Midfielder, 1, 1),
        board_card("C", Position::Defender, 1, 1),
    ];
    state.player.hand = vec![wall_of_roots()];

    let next = play_card(&state, Side::Player, 0).unwrap();
    assert_eq!(next.player.hero.armor, 3);
}

#[test]
fn test_forward_needs_a_midfielder() {
    let mut state = test_state(MatchRules::server());
    state.player.board = vec![board_card("Back", Position::Defender, 1, 5)];
    state.player.hand = vec![hand_monster("Poacher", Position::Forward, 2)];

    let rejected = play_card(&state, Side::Player, 0).unwrap();
    assert_eq!(rejected.player.board.len(), 1);
    assert_eq!(rejected.player.mana, MAX_MANA);
    assert!(rejected.log.last().unwrap().contains("needs a midfielder"));

    state.player.board.push(board_card("Engine", Position::Midfielder, 2, 2));
    let accepted = play_card(&state, Side::Player, 0).unwrap();
    assert_eq!(accepted.player.board.len(), 3);
    assert_eq!(accepted.player.mana, MAX_MANA - 2);
}

#[test]
fn test_power_shot_goes_through_armor_first() {
    let mut state = test_state(MatchRules::server());
    state.opponent.hero.armor = 2;
    state.player.hand = vec![power_shot()];

    let next = play_card(&state, Side::Player, 0).unwrap();

    assert_eq!(next.opponent.hero.armor, 0);
    assert_eq!(next.opponent.hero.hp, HERO_MAX_HP - 1);
    assert_eq!(next.player.mana, MAX_MANA - 2);
    assert_eq!(next.winner, None);
}

#[test]
fn test_lethal_power_shot_ends_the_match() {
    let mut state = test_state(MatchRules::server());
    state.opponent.hero.hp = 3;
    state.opponent.hero.armor = 0;
    state.player.hand = vec![power_shot()];

    let next = play_card(&state, Side::Player, 0).unwrap();

    assert_eq!(next.opponent.hero.hp, 0);
    assert_eq!(next.winner, Some(Winner::Player));
}

#[test]
fn test_opponent_spell_can_win_for_opponent() {
    let mut state = test_state(MatchRules::standard());
    state.active = Side::Opponent;
    state.player.hero.hp = 2;
    state.opponent.hand = vec![power_shot()];

    let next = play_card(&state, Side::Opponent, 0).unwrap();
    assert_eq!(next.winner, Some(Winner::Opponent));
}

#[test]
fn test_wall_of_roots_armors_caster() {
    let mut state = test_state(MatchRules::server());
    state.player.hand = vec![wall_of_roots(), wall_of_roots()];

    let once = play_card(&state, Side::Player, 0).unwrap();
    let twice = play_card(&once, Side::Player, 0).unwrap();

    assert_eq!(twice.player.hero.armor, 6);
    assert_eq!(twice.opponent.hero.armor, 0);
    assert_eq!(twice.player.mana, MAX_MANA - 4);
}

#[test]
fn test_out_of_turn_play_is_rejected() {
    let mut state = test_state(MatchRules::server());
    state.opponent.hand = vec![power_shot()];

    let next = play_card(&state, Side::Opponent, 0).unwrap();

    assert!(same_board_and_heroes(&state, &next));
    assert_eq!(next.log.last().map(String::as_str), Some("It is not the opponent's turn."));
}

#[test]
fn test_bad_hand_index_is_an_error() {
    let state = test_state(MatchRules::server());
    assert_eq!(
        play_card(&state, Side::Player, 3),
        Err(BattleError::InvalidHandIndex { index: 3 })
    );
}
