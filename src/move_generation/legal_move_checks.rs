use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let kings = game_state.pieces[color.index()][PieceKind::King.index()];
    (kings != 0).then(|| kings.trailing_zeros() as Square)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    king_square(game_state, color)
        .is_some_and(|king_sq| is_square_attacked(game_state, king_sq, color.opposite()))
}

/// Whether any piece of `attacker_color` attacks `square`, looking from the
/// target outwards.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let attackers = &game_state.pieces[attacker_color.index()];
    let occupancy = game_state.occupancy_all;

    // A pawn attacks `square` iff a defending pawn on `square` would attack it.
    if pawn_attacks(attacker_color.opposite(), square) & attackers[PieceKind::Pawn.index()] != 0 {
        return true;
    }
    if knight_attacks(square) & attackers[PieceKind::Knight.index()] != 0 {
        return true;
    }
    if king_attacks(square) & attackers[PieceKind::King.index()] != 0 {
        return true;
    }

    let queens = attackers[PieceKind::Queen.index()];
    if bishop_attacks(square, occupancy) & (attackers[PieceKind::Bishop.index()] | queens) != 0 {
        return true;
    }
    rook_attacks(square, occupancy) & (attackers[PieceKind::Rook.index()] | queens) != 0
}
