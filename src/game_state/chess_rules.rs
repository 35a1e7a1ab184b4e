//! Fixed facts of standard chess used across the engine.

use crate::game_state::chess_types::{Bitboard, Square};

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const E1: Square = 4;
pub const C1: Square = 2;
pub const G1: Square = 6;
pub const E8: Square = 60;
pub const C8: Square = 58;
pub const G8: Square = 62;

/// Ranks from which the geometric pawn table allows a two-square advance.
pub const DOUBLE_PAWN_MOVE_RANKS: Bitboard =
    0x0000_0000_0000_FFFF | 0xFFFF_0000_0000_0000;

/// Castling king hops as `(king_from, king_to, rook_from, rook_to)`.
pub const CASTLING_ROOK_HOPS: [(Square, Square, Square, Square); 4] = [
    (E1, G1, 7, 5),
    (E1, C1, 0, 3),
    (E8, G8, 63, 61),
    (E8, C8, 56, 59),
];

#[inline]
pub fn castling_rook_hop(king_from: Square, king_to: Square) -> Option<(Square, Square)> {
    CASTLING_ROOK_HOPS
        .iter()
        .find(|(from, to, _, _)| *from == king_from && *to == king_to)
        .map(|(_, _, rook_from, rook_to)| (*rook_from, *rook_to))
}
