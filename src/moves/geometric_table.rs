//! Empty-board reachability tables.
//!
//! `GeometricAttackTable` is built entirely at compile time and is immutable,
//! so a single `'static` instance can be shared by every thread. It backs both
//! the geometric mask policy of the codec and the fixed action catalogue.

use crate::game_state::chess_rules::{C1, C8, DOUBLE_PAWN_MOVE_RANKS, E1, E8, G1, G8};
use crate::game_state::chess_types::{square_bit, Bitboard, Color, PieceKind, Square};
use crate::moves::attack_tables::{
    slider_attacks, step_attacks, BISHOP_DIRECTIONS, KING_ATTACKS, KNIGHT_ATTACKS,
    ROOK_DIRECTIONS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometricAttackTable {
    queen_or_knight: [Bitboard; 64],
    pawn: [[Bitboard; 64]; 2],
    bishop: [Bitboard; 64],
    rook: [Bitboard; 64],
    king: [Bitboard; 64],
}

static STANDARD_TABLE: GeometricAttackTable = GeometricAttackTable::build();

impl GeometricAttackTable {
    pub const fn build() -> Self {
        let mut table = Self {
            queen_or_knight: [0; 64],
            pawn: [[0; 64]; 2],
            bishop: [0; 64],
            rook: [0; 64],
            king: KING_ATTACKS,
        };

        let mut sq = 0usize;
        while sq < 64 {
            let square = sq as Square;
            table.bishop[sq] = slider_attacks(square, 0, &BISHOP_DIRECTIONS);
            table.rook[sq] = slider_attacks(square, 0, &ROOK_DIRECTIONS);
            table.queen_or_knight[sq] = table.bishop[sq] | table.rook[sq] | KNIGHT_ATTACKS[sq];

            let double_step = (DOUBLE_PAWN_MOVE_RANKS & square_bit(square)) != 0;
            table.pawn[Color::Light.index()][sq] = if double_step {
                step_attacks(square, &[(-1, 1), (0, 1), (1, 1), (0, 2)])
            } else {
                step_attacks(square, &[(-1, 1), (0, 1), (1, 1)])
            };
            table.pawn[Color::Dark.index()][sq] = if double_step {
                step_attacks(square, &[(-1, -1), (0, -1), (1, -1), (0, -2)])
            } else {
                step_attacks(square, &[(-1, -1), (0, -1), (1, -1)])
            };
            sq += 1;
        }

        table.king[E1 as usize] |= square_bit(G1) | square_bit(C1);
        table.king[E8 as usize] |= square_bit(G8) | square_bit(C8);

        table
    }

    /// The process-wide table.
    #[inline]
    pub fn standard() -> &'static Self {
        &STANDARD_TABLE
    }

    /// Everything a queen or a knight could reach from `from` on an empty board.
    #[inline]
    pub fn destinations(&self, from: Square) -> Bitboard {
        self.queen_or_knight[from as usize]
    }

    /// Empty-board destinations for a specific piece. Pawns may capture on
    /// both forward diagonals; kings on e1/e8 also reach their castling squares.
    pub fn piece_destinations(&self, kind: PieceKind, color: Color, from: Square) -> Bitboard {
        let sq = from as usize;
        match kind {
            PieceKind::Pawn => self.pawn[color.index()][sq],
            PieceKind::Knight => KNIGHT_ATTACKS[sq],
            PieceKind::Bishop => self.bishop[sq],
            PieceKind::Rook => self.rook[sq],
            PieceKind::Queen => self.bishop[sq] | self.rook[sq],
            PieceKind::King => self.king[sq],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GeometricAttackTable;
    use crate::game_state::chess_types::{square_bit, Color, PieceKind};

    #[test]
    fn no_entry_contains_its_own_square() {
        let table = GeometricAttackTable::standard();
        for sq in 0..64u8 {
            assert_eq!(table.destinations(sq) & square_bit(sq), 0);
            assert_eq!(
                table.piece_destinations(PieceKind::King, Color::Light, sq) & square_bit(sq),
                0
            );
        }
    }

    #[test]
    fn queen_or_knight_totals_1792() {
        let table = GeometricAttackTable::standard();
        let total: u32 = (0..64u8).map(|sq| table.destinations(sq).count_ones()).sum();
        assert_eq!(total, 1792);
    }

    #[test]
    fn king_on_e1_flags_castling_targets() {
        let table = GeometricAttackTable::standard();
        let king = table.piece_destinations(PieceKind::King, Color::Light, 4);
        assert_eq!(king.count_ones(), 7);
        assert_ne!(king & square_bit(6), 0);
        assert_ne!(king & square_bit(2), 0);
        let d1 = table.piece_destinations(PieceKind::King, Color::Light, 3);
        assert_eq!(d1.count_ones(), 5);
    }

    #[test]
    fn pawn_tables_are_direction_aware() {
        let table = GeometricAttackTable::standard();
        let e2 = 12u8;
        let light = table.piece_destinations(PieceKind::Pawn, Color::Light, e2);
        assert_eq!(light, square_bit(19) | square_bit(20) | square_bit(21) | square_bit(28));

        let e4 = 28u8;
        let dark = table.piece_destinations(PieceKind::Pawn, Color::Dark, e4);
        assert_eq!(dark, square_bit(19) | square_bit(20) | square_bit(21));

        let h7 = 55u8;
        let dark_h7 = table.piece_destinations(PieceKind::Pawn, Color::Dark, h7);
        assert_eq!(dark_h7, square_bit(46) | square_bit(47) | square_bit(39));
    }
}
