//! Candidate masks the codec ranks squares against.
//!
//! Every field the codec writes is the rank of a square (or a promotion
//! choice) inside a mask computed here, so encode and decode must see exactly
//! the same masks for the same position and policy.

use crate::codec::codec_errors::{CodecError, CodecResult};
use crate::codec::codec_move::Underpromotion;
use crate::codec::position::CodecPosition;
use crate::game_state::chess_types::{
    square_bit, square_rank, squares_of, Bitboard, PieceKind, Square,
};
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::geometric_table::GeometricAttackTable;

/// How candidate squares are derived from a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPolicy {
    /// Empty-board reachability; no rules engine involved.
    Geometric,
    PseudoLegal,
    Legal,
}

impl MaskPolicy {
    pub const ALL: [MaskPolicy; 3] = [
        MaskPolicy::Geometric,
        MaskPolicy::PseudoLegal,
        MaskPolicy::Legal,
    ];

    pub const fn generation_mode(self) -> Option<GenerationMode> {
        match self {
            MaskPolicy::Geometric => None,
            MaskPolicy::PseudoLegal => Some(GenerationMode::PseudoLegal),
            MaskPolicy::Legal => Some(GenerationMode::Legal),
        }
    }
}

/// Promotion choices as a 4-bit mask: bit 0 is the default (queen, or no
/// promotion at all), then knight, bishop, rook.
pub type PromotionMask = u8;

pub const DEFAULT_PROMOTION_BIT: PromotionMask = 1;
pub const ALL_PROMOTIONS: PromotionMask = 0b1111;

#[inline]
pub const fn promotion_bit(promotion: Option<Underpromotion>) -> PromotionMask {
    match promotion {
        None => 1 << 0,
        Some(Underpromotion::Knight) => 1 << 1,
        Some(Underpromotion::Bishop) => 1 << 2,
        Some(Underpromotion::Rook) => 1 << 3,
    }
}

/// Inverse of `promotion_bit`, by bit index.
pub const fn promotion_from_index(index: u8) -> Option<Option<Underpromotion>> {
    match index {
        0 => Some(None),
        1 => Some(Some(Underpromotion::Knight)),
        2 => Some(Some(Underpromotion::Bishop)),
        3 => Some(Some(Underpromotion::Rook)),
        _ => None,
    }
}

/// Reachable squares from one origin, with the promotion choices available on
/// each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destinations {
    pub reachable: Bitboard,
    promotions: [PromotionMask; 64],
}

impl Destinations {
    fn empty() -> Self {
        Self {
            reachable: 0,
            promotions: [0; 64],
        }
    }

    fn uniform(reachable: Bitboard) -> Self {
        let mut out = Self::empty();
        for to in squares_of(reachable) {
            out.promotions[to as usize] = DEFAULT_PROMOTION_BIT;
        }
        out.reachable = reachable;
        out
    }

    fn add(&mut self, to: Square, promotion: Option<Underpromotion>) {
        self.reachable |= square_bit(to);
        self.promotions[to as usize] |= promotion_bit(promotion);
    }

    /// Promotion choices for `to`; zero when `to` is not reachable.
    #[inline]
    pub fn promotion_candidates(&self, to: Square) -> PromotionMask {
        self.promotions.get(to as usize).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MoveSpace {
    table: &'static GeometricAttackTable,
    policy: MaskPolicy,
}

impl MoveSpace {
    pub fn new(policy: MaskPolicy) -> Self {
        Self::with_table(GeometricAttackTable::standard(), policy)
    }

    pub fn with_table(table: &'static GeometricAttackTable, policy: MaskPolicy) -> Self {
        Self { table, policy }
    }

    #[inline]
    pub fn policy(&self) -> MaskPolicy {
        self.policy
    }

    /// Squares of the side to move that can start a move. Geometric treats
    /// every piece of the side to move as movable.
    pub fn movable_pieces_mask<P: CodecPosition>(&self, position: &P) -> CodecResult<Bitboard> {
        let occupancy = position.side_to_move_occupancy();
        match self.policy.generation_mode() {
            None => Ok(occupancy),
            Some(mode) => Ok(position
                .candidate_moves(occupancy, mode)?
                .iter()
                .fold(0, |mask, mv| mask | square_bit(mv.from))),
        }
    }

    /// Squares reachable from `from`. Geometric without a position falls back
    /// to the queen-or-knight pattern.
    pub fn reachable_mask<P: CodecPosition>(
        &self,
        from: Square,
        position: Option<&P>,
    ) -> CodecResult<Bitboard> {
        Ok(self.destinations(from, position)?.reachable)
    }

    pub fn destinations<P: CodecPosition>(
        &self,
        from: Square,
        position: Option<&P>,
    ) -> CodecResult<Destinations> {
        if from > 63 {
            return Err(CodecError::PreconditionViolation {
                index: from,
                mask: 0,
            });
        }

        match (self.policy.generation_mode(), position) {
            (None, None) => Ok(Destinations::uniform(self.table.destinations(from))),
            (None, Some(position)) => Ok(self.geometric_destinations(from, position)),
            (Some(mode), Some(position)) => {
                let mut out = Destinations::empty();
                for mv in position.candidate_moves(square_bit(from), mode)? {
                    out.add(mv.to, mv.promotion);
                }
                Ok(out)
            }
            (Some(_), None) => Err(CodecError::PositionRequired(self.policy)),
        }
    }

    fn geometric_destinations<P: CodecPosition>(&self, from: Square, position: &P) -> Destinations {
        let Some((color, kind)) = position.piece_at(from) else {
            return Destinations::uniform(self.table.destinations(from));
        };

        let mut out = Destinations::uniform(self.table.piece_destinations(kind, color, from));
        if kind == PieceKind::Pawn {
            for to in squares_of(out.reachable) {
                if square_rank(to) == color.promotion_rank() {
                    out.promotions[to as usize] = ALL_PROMOTIONS;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{promotion_bit, promotion_from_index, MaskPolicy, MoveSpace, ALL_PROMOTIONS};
    use crate::codec::codec_errors::CodecError;
    use crate::codec::codec_move::Underpromotion;
    use crate::game_state::chess_types::square_bit;
    use crate::game_state::game_state::GameState;

    const E2: u8 = 12;

    #[test]
    fn movable_mask_at_start() {
        let game = GameState::new_game();
        let geometric = MoveSpace::new(MaskPolicy::Geometric);
        assert_eq!(geometric.movable_pieces_mask(&game), Ok(0xFFFF));

        // Only pawns and knights can move from the start.
        let legal = MoveSpace::new(MaskPolicy::Legal);
        let mask = legal.movable_pieces_mask(&game).expect("mask should compute");
        assert_eq!(mask, 0xFF00 | square_bit(1) | square_bit(6));
        assert_eq!(mask.count_ones(), 10);
    }

    #[test]
    fn reachable_mask_per_policy() {
        let game = GameState::new_game();
        let legal = MoveSpace::new(MaskPolicy::Legal);
        assert_eq!(
            legal.reachable_mask(E2, Some(&game)),
            Ok(square_bit(20) | square_bit(28))
        );

        let geometric = MoveSpace::new(MaskPolicy::Geometric);
        let pawn = geometric
            .reachable_mask(E2, Some(&game))
            .expect("geometric mask should compute");
        assert_eq!(pawn.count_ones(), 4);

        let unobstructed = geometric
            .reachable_mask::<GameState>(E2, None)
            .expect("geometric mask needs no position");
        assert_eq!(unobstructed.count_ones(), 29);
    }

    #[test]
    fn engine_policies_need_a_position() {
        let pseudo = MoveSpace::new(MaskPolicy::PseudoLegal);
        assert_eq!(
            pseudo.reachable_mask::<GameState>(E2, None),
            Err(CodecError::PositionRequired(MaskPolicy::PseudoLegal))
        );
    }

    #[test]
    fn promotion_candidates_follow_the_policy() {
        let game = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let a7 = 48u8;

        let legal = MoveSpace::new(MaskPolicy::Legal)
            .destinations(a7, Some(&game))
            .expect("destinations should compute");
        assert_eq!(legal.reachable, square_bit(56) | square_bit(57));
        assert_eq!(legal.promotion_candidates(56), ALL_PROMOTIONS);
        assert_eq!(legal.promotion_candidates(57), ALL_PROMOTIONS);
        assert_eq!(legal.promotion_candidates(40), 0);

        let geometric = MoveSpace::new(MaskPolicy::Geometric)
            .destinations(a7, Some(&game))
            .expect("destinations should compute");
        assert_eq!(geometric.promotion_candidates(56), ALL_PROMOTIONS);

        let king = MoveSpace::new(MaskPolicy::Geometric)
            .destinations(4, Some(&game))
            .expect("destinations should compute");
        assert_eq!(king.promotion_candidates(12), 1);
    }

    #[test]
    fn promotion_bits_invert() {
        for index in 0..4u8 {
            let promotion = promotion_from_index(index).expect("index is a promotion slot");
            assert_eq!(promotion_bit(promotion), 1 << index);
        }
        assert_eq!(promotion_from_index(4), None);
        assert_eq!(promotion_bit(Some(Underpromotion::Rook)), 0b1000);
    }
}
