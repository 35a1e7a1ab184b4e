//! Node counting over the legal move tree, used to validate the rules engine.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};

pub fn perft(game_state: &GameState, depth: u8) -> MoveGenResult<u64> {
    let mut scratch = game_state.scratch_copy();
    perft_recurse(&mut scratch, depth)
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> MoveGenResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = LegalMoveGenerator.generate_moves(game_state, !0)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        game_state
            .make_move(mv)
            .map_err(MoveGenerationError::InvalidState)?;
        nodes += perft_recurse(game_state, depth - 1)?;
        game_state.unmake_move();
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).expect("perft should run"), 20);
        assert_eq!(perft(&game, 2).expect("perft should run"), 400);
        assert_eq!(perft(&game, 3).expect("perft should run"), 8902);
    }

    #[test]
    fn kiwipete_node_counts() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        assert_eq!(perft(&game, 1).expect("perft should run"), 48);
        assert_eq!(perft(&game, 2).expect("perft should run"), 2039);
    }

    #[test]
    fn endgame_position_node_counts() {
        let game = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(perft(&game, 1).expect("perft should run"), 14);
        assert_eq!(perft(&game, 2).expect("perft should run"), 191);
        assert_eq!(perft(&game, 3).expect("perft should run"), 2812);
    }

    #[test]
    fn promotion_heavy_position_node_counts() {
        let game = GameState::from_fen(
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        )
        .expect("FEN should parse");
        assert_eq!(perft(&game, 1).expect("perft should run"), 6);
        assert_eq!(perft(&game, 2).expect("perft should run"), 264);
        assert_eq!(perft(&game, 3).expect("perft should run"), 9467);
    }
}
