//! Legal move generation.
//!
//! Generates pseudo-legal candidates for the requested origins and keeps the
//! ones that do not leave the mover's king attacked, testing each with
//! make/unmake on a scratch copy.

use crate::game_state::chess_types::Bitboard;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{
    GenerationMode, MoveGenResult, MoveGenerationError, MoveGenerator,
};
use crate::move_generation::pseudo_legal_moves::{
    generate_pseudo_legal_moves, PseudoLegalMoveGenerator,
};
use crate::moves::move_descriptions::MoveDescription;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(
        &self,
        game_state: &GameState,
        from_mask: Bitboard,
    ) -> MoveGenResult<Vec<MoveDescription>> {
        let mut pseudo = Vec::with_capacity(64);
        generate_pseudo_legal_moves(game_state, from_mask, &mut pseudo);

        let mover = game_state.side_to_move;
        let mut scratch = game_state.scratch_copy();
        let mut legal = Vec::with_capacity(pseudo.len());

        for mv in pseudo {
            scratch.make_move(mv).map_err(|err| {
                MoveGenerationError::InvalidState(format!("make_move failed: {err}"))
            })?;
            let leaves_king_attacked = is_king_in_check(&scratch, mover);
            scratch.unmake_move();

            if !leaves_king_attacked {
                legal.push(mv);
            }
        }

        Ok(legal)
    }
}

/// The generator enforcing `mode`.
pub fn generator_for(mode: GenerationMode) -> &'static dyn MoveGenerator {
    match mode {
        GenerationMode::PseudoLegal => &PseudoLegalMoveGenerator,
        GenerationMode::Legal => &LegalMoveGenerator,
    }
}
