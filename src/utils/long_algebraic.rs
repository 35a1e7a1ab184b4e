//! UCI long algebraic notation (`e2e4`, `e7e8q`) for engine moves.

use crate::codec::codec_move::Move;
use crate::game_state::chess_types::{square_bit, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generator_for;
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::algebraic::square_to_algebraic;

pub fn move_description_to_long_algebraic(
    move_description: MoveDescription,
) -> Result<String, String> {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(move_description.from())?);
    out.push_str(&square_to_algebraic(move_description.to())?);

    if let Some(promotion_piece) = move_description.promotion_piece() {
        out.push(promotion_to_char(promotion_piece)?);
    }

    Ok(out)
}

/// Resolve `long_algebraic` against the legal moves of `game_state`. A pawn
/// reaching the back rank without a suffix promotes to a queen.
pub fn long_algebraic_to_move_description(
    long_algebraic: &str,
    game_state: &GameState,
) -> Result<MoveDescription, String> {
    let mv: Move = long_algebraic.parse()?;

    generator_for(GenerationMode::Legal)
        .generate_moves(game_state, square_bit(mv.from))
        .map_err(|err| err.to_string())?
        .into_iter()
        .find(|candidate| mv.matches(*candidate))
        .ok_or_else(|| {
            format!(
                "Illegal long algebraic move {long_algebraic} in {}",
                game_state.get_fen()
            )
        })
}

fn promotion_to_char(piece_kind: PieceKind) -> Result<char, String> {
    match piece_kind {
        PieceKind::Knight => Ok('n'),
        PieceKind::Bishop => Ok('b'),
        PieceKind::Rook => Ok('r'),
        PieceKind::Queen => Ok('q'),
        _ => Err(format!("Invalid promotion piece: {piece_kind:?}")),
    }
}
