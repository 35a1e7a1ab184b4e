use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescription;

/// What `unmake_move` needs to restore after `make_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: MoveDescription,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
