use std::collections::HashSet;

use chess_action_space::action_space::action_catalogue::{
    action_space_size, is_promotion_eligible, underpromotion_action_space_size, ActionCatalogue,
};
use chess_action_space::codec::codec_move::{Move, Underpromotion};
use chess_action_space::game_state::chess_types::{square_file, square_rank};
use chess_action_space::game_state::game_state::GameState;
use chess_action_space::utils::random_game::random_game;

#[test]
fn catalogue_has_1924_distinct_actions() {
    let catalogue = ActionCatalogue::standard();
    assert_eq!(action_space_size(), 1924);
    assert_eq!(underpromotion_action_space_size(), 132);

    let distinct: HashSet<Move> = catalogue.actions().iter().copied().collect();
    assert_eq!(distinct.len(), 1924);
    let tagged = catalogue
        .actions()
        .iter()
        .filter(|mv| mv.promotion.is_some())
        .count();
    assert_eq!(tagged, 132);
}

#[test]
fn tagged_and_untagged_actions_pair_up() {
    let catalogue = ActionCatalogue::standard();
    for action in catalogue.actions() {
        let base = Move::new(action.from, action.to);
        assert!(catalogue.action_index_of(&base).is_some());

        let variants = Underpromotion::ALL
            .iter()
            .filter(|piece| {
                catalogue
                    .action_index_of(&Move::with_promotion(action.from, action.to, **piece))
                    .is_some()
            })
            .count();
        let expected = if is_promotion_eligible(action.from, action.to) { 3 } else { 0 };
        assert_eq!(variants, expected, "{action}");
    }
}

#[test]
fn eligibility_matches_pawn_geometry() {
    for from in 0..64u8 {
        for to in 0..64u8 {
            let advance = match square_rank(from) {
                6 => square_rank(to) == 7,
                1 => square_rank(to) == 0,
                _ => false,
            };
            let expected = advance && square_file(from).abs_diff(square_file(to)) <= 1;
            assert_eq!(is_promotion_eligible(from, to), expected, "{from}->{to}");
        }
    }
}

#[test]
fn indices_are_stable_and_invertible() {
    let catalogue = ActionCatalogue::standard();
    for index in 0..catalogue.action_space_size() {
        let action = catalogue.move_at_index(index).expect("index is in range");
        assert_eq!(catalogue.action_index_of(&action), Some(index));
    }
}

#[test]
fn every_played_move_has_an_action() {
    let catalogue = ActionCatalogue::standard();
    let start = GameState::new_game();
    for seed in 0..8u64 {
        for mv in random_game(&start, 200, seed).expect("random playout should succeed") {
            let action = Move::from_description(mv);
            assert!(catalogue.action_index_of(&action).is_some(), "{action}");
        }
    }
}
