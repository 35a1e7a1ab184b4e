//! Attack bitboards for every piece kind.
//!
//! Leapers (knight, king, pawn captures) are precomputed at compile time.
//! Sliders trace rays against an occupancy mask; the same ray walker without
//! blockers yields the empty-board tables used by the geometric move space.

use crate::game_state::chess_types::{Bitboard, Color, Square};

pub const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_DELTAS);
pub const KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_DELTAS);
pub const PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    leaper_table(&[(-1, 1), (1, 1)]),
    leaper_table(&[(-1, -1), (1, -1)]),
];

#[inline]
pub const fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}

/// Squares a pawn of `color` on `square` captures onto.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][square as usize]
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    slider_attacks(square, occupancy, &BISHOP_DIRECTIONS)
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    slider_attacks(square, occupancy, &ROOK_DIRECTIONS)
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Union of the rays from `square`, each ray stopping on (and including) the
/// first occupied square.
pub const fn slider_attacks(square: Square, occupancy: Bitboard, directions: &[(i32, i32)]) -> Bitboard {
    let file0 = (square % 8) as i32;
    let rank0 = (square / 8) as i32;
    let mut attacks = 0u64;
    let mut d = 0usize;

    while d < directions.len() {
        let (file_step, rank_step) = directions[d];
        let mut file = file0 + file_step;
        let mut rank = rank0 + rank_step;

        while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            let bit = 1u64 << ((rank * 8 + file) as u32);
            attacks |= bit;
            if (occupancy & bit) != 0 {
                break;
            }
            file += file_step;
            rank += rank_step;
        }
        d += 1;
    }

    attacks
}

/// Squares reached from `square` by single `(file, rank)` steps that stay on
/// the board.
pub const fn step_attacks(square: Square, deltas: &[(i32, i32)]) -> Bitboard {
    let file = (square % 8) as i32;
    let rank = (square / 8) as i32;
    let mut attacks = 0u64;
    let mut i = 0usize;

    while i < deltas.len() {
        let (df, dr) = deltas[i];
        let f = file + df;
        let r = rank + dr;
        if f >= 0 && f < 8 && r >= 0 && r < 8 {
            attacks |= 1u64 << ((r * 8 + f) as u32);
        }
        i += 1;
    }

    attacks
}

const fn leaper_table(deltas: &[(i32, i32)]) -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;
    while sq < 64 {
        table[sq] = step_attacks(sq as Square, deltas);
        sq += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_on_d4_reaches_eight_squares() {
        assert_eq!(knight_attacks(27).count_ones(), 8);
        assert_eq!(knight_attacks(0).count_ones(), 2);
    }

    #[test]
    fn king_in_corner_has_three_targets() {
        assert_eq!(king_attacks(0).count_ones(), 3);
        assert_eq!(king_attacks(63).count_ones(), 3);
    }

    #[test]
    fn pawn_captures_point_forward_for_each_color() {
        let e2 = 12u8;
        assert_eq!(pawn_attacks(Color::Light, e2), (1u64 << 19) | (1u64 << 21));
        let a7 = 48u8;
        assert_eq!(pawn_attacks(Color::Dark, a7), 1u64 << 41);
    }

    #[test]
    fn rook_ray_stops_on_blocker() {
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(0, blocker_on_a4);
        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
        assert_eq!(rook_attacks(27, 0).count_ones(), 14);
    }

    #[test]
    fn bishop_on_empty_board_from_d4() {
        assert_eq!(bishop_attacks(27, 0).count_ones(), 13);
        assert_eq!(queen_attacks(27, 0).count_ones(), 27);
    }
}
