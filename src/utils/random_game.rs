//! Seeded random playouts, used to exercise the codec on varied games.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generator_for;
use crate::move_generation::move_generator::{GenerationMode, MoveGenResult, MoveGenerationError};
use crate::moves::move_descriptions::MoveDescription;

/// Play up to `max_plies` uniformly random legal moves from `start`, stopping
/// early at mate or stalemate. The same seed always yields the same game.
pub fn random_game(
    start: &GameState,
    max_plies: usize,
    seed: u64,
) -> MoveGenResult<Vec<MoveDescription>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = start.clone();
    let mut history = Vec::with_capacity(max_plies);

    for _ in 0..max_plies {
        let legal_moves = generator_for(GenerationMode::Legal).generate_moves(&state, u64::MAX)?;
        let Some(picked) = legal_moves.as_slice().choose(&mut rng) else {
            break;
        };
        state.make_move(*picked).map_err(MoveGenerationError::InvalidState)?;
        history.push(*picked);
    }

    Ok(history)
}
