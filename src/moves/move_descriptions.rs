//! Packed engine-side move record.
//!
//! Layout: from (6 bits) | to (6) | moved piece (3) | captured piece (3) |
//! promotion piece (3) | flags. A piece field holding `NO_PIECE_CODE` means
//! "none".

use crate::game_state::chess_types::{PieceKind, Square};

const FROM_SHIFT: u64 = 0;
const TO_SHIFT: u64 = 6;
const MOVED_PIECE_SHIFT: u64 = 12;
const CAPTURED_PIECE_SHIFT: u64 = 15;
const PROMOTION_PIECE_SHIFT: u64 = 18;

const SQUARE_MASK: u64 = 0x3F;
const PIECE_MASK: u64 = 0x7;
pub const NO_PIECE_CODE: u64 = 0x7;

pub const FLAG_CAPTURE: u64 = 1u64 << 21;
pub const FLAG_DOUBLE_PAWN_PUSH: u64 = 1u64 << 22;
pub const FLAG_EN_PASSANT: u64 = 1u64 << 23;
pub const FLAG_CASTLING: u64 = 1u64 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDescription(pub u64);

impl MoveDescription {
    #[inline]
    pub fn new(
        from: Square,
        to: Square,
        moved_piece: PieceKind,
        captured_piece: Option<PieceKind>,
        promotion_piece: Option<PieceKind>,
        flags: u64,
    ) -> Self {
        let mut packed = 0u64;
        packed |= (from as u64) << FROM_SHIFT;
        packed |= (to as u64) << TO_SHIFT;
        packed |= piece_code(Some(moved_piece)) << MOVED_PIECE_SHIFT;
        packed |= piece_code(captured_piece) << CAPTURED_PIECE_SHIFT;
        packed |= piece_code(promotion_piece) << PROMOTION_PIECE_SHIFT;
        Self(packed | flags)
    }

    #[inline]
    pub fn from(self) -> Square {
        ((self.0 >> FROM_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub fn to(self) -> Square {
        ((self.0 >> TO_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub fn moved_piece(self) -> Option<PieceKind> {
        piece_from_code((self.0 >> MOVED_PIECE_SHIFT) & PIECE_MASK)
    }

    #[inline]
    pub fn captured_piece(self) -> Option<PieceKind> {
        piece_from_code((self.0 >> CAPTURED_PIECE_SHIFT) & PIECE_MASK)
    }

    #[inline]
    pub fn promotion_piece(self) -> Option<PieceKind> {
        piece_from_code((self.0 >> PROMOTION_PIECE_SHIFT) & PIECE_MASK)
    }

    #[inline]
    pub fn has_flag(self, flag: u64) -> bool {
        (self.0 & flag) != 0
    }
}

#[inline]
fn piece_code(piece: Option<PieceKind>) -> u64 {
    piece.map_or(NO_PIECE_CODE, |kind| kind.index() as u64)
}

#[inline]
fn piece_from_code(code: u64) -> Option<PieceKind> {
    PieceKind::from_index(code as usize)
}

#[cfg(test)]
mod tests {
    use super::{MoveDescription, FLAG_CAPTURE, FLAG_CASTLING};
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn fields_survive_packing() {
        let mv = MoveDescription::new(
            52,
            61,
            PieceKind::Pawn,
            Some(PieceKind::Rook),
            Some(PieceKind::Knight),
            FLAG_CAPTURE,
        );
        assert_eq!(mv.from(), 52);
        assert_eq!(mv.to(), 61);
        assert_eq!(mv.moved_piece(), Some(PieceKind::Pawn));
        assert_eq!(mv.captured_piece(), Some(PieceKind::Rook));
        assert_eq!(mv.promotion_piece(), Some(PieceKind::Knight));
        assert!(mv.has_flag(FLAG_CAPTURE));
        assert!(!mv.has_flag(FLAG_CASTLING));
    }

    #[test]
    fn absent_pieces_read_back_as_none() {
        let mv = MoveDescription::new(4, 6, PieceKind::King, None, None, FLAG_CASTLING);
        assert_eq!(mv.captured_piece(), None);
        assert_eq!(mv.promotion_piece(), None);
    }
}
