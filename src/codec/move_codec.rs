//! One move as up to three minimal-width fields.
//!
//! Field layout, all big-endian with widths derived from the position:
//!
//! 1. rank of `from` among the movable pieces, `bit_width(popcount(m1))` bits;
//! 2. rank of `to` among the squares reachable from `from`, `bit_width(popcount(m2))` bits;
//! 3. rank of the promotion choice among the choices available for
//!    `(from, to)`, `bit_width(#choices)` bits. Ordinary moves have one
//!    choice and so write nothing here.

use crate::codec::bit_string::{BitReader, BitString};
use crate::codec::codec_errors::{CodecError, CodecResult};
use crate::codec::codec_move::Move;
use crate::codec::move_space::{
    promotion_bit, promotion_from_index, MaskPolicy, MoveSpace, PromotionMask,
};
use crate::codec::position::CodecPosition;
use crate::codec::rank_index::{bit_width, rank_of, square_at_rank};

#[derive(Debug, Clone, Copy)]
pub struct MoveCodec {
    space: MoveSpace,
}

impl MoveCodec {
    pub fn new(policy: MaskPolicy) -> Self {
        Self::with_space(MoveSpace::new(policy))
    }

    pub fn with_space(space: MoveSpace) -> Self {
        Self { space }
    }

    #[inline]
    pub fn policy(&self) -> MaskPolicy {
        self.space.policy()
    }

    #[inline]
    pub fn space(&self) -> &MoveSpace {
        &self.space
    }

    pub fn encode_move<P: CodecPosition>(&self, mv: Move, position: &P) -> CodecResult<BitString> {
        let mut out = BitString::new();
        self.encode_move_into(mv, position, &mut out)?;
        Ok(out)
    }

    /// Append the encoding of `mv` to `out` and return the number of bits
    /// written. Nothing is appended when an error is returned.
    pub fn encode_move_into<P: CodecPosition>(
        &self,
        mv: Move,
        position: &P,
        out: &mut BitString,
    ) -> CodecResult<usize> {
        let movable = self.space.movable_pieces_mask(position)?;
        let from_rank = rank_of(mv.from, movable)?;
        let from_width = bit_width(movable.count_ones());

        let destinations = self.space.destinations(mv.from, Some(position))?;
        let to_rank = rank_of(mv.to, destinations.reachable)?;
        let to_width = bit_width(destinations.reachable.count_ones());

        let choices = destinations.promotion_candidates(mv.to);
        let choice = promotion_bit(mv.promotion).trailing_zeros() as u8;
        let choice_rank = rank_of(choice, u64::from(choices))?;
        let choice_width = bit_width(choices.count_ones());

        out.push_field(u64::from(from_rank), from_width);
        out.push_field(u64::from(to_rank), to_width);
        out.push_field(u64::from(choice_rank), choice_width);
        Ok((from_width + to_width + choice_width) as usize)
    }

    /// Decode the move at the front of `bits`, returning it with the number of
    /// bits consumed.
    pub fn decode_move<P: CodecPosition>(
        &self,
        bits: &BitString,
        position: &P,
    ) -> CodecResult<(Move, usize)> {
        let mut reader = bits.reader();
        let mv = self.decode_from(&mut reader, position)?;
        Ok((mv, reader.position()))
    }

    pub fn decode_from<P: CodecPosition>(
        &self,
        reader: &mut BitReader<'_>,
        position: &P,
    ) -> CodecResult<Move> {
        let movable = self.space.movable_pieces_mask(position)?;
        if movable == 0 {
            return Err(CodecError::DesynchronizedStream {
                leftover: reader.remaining(),
            });
        }
        let from_rank = reader.read_field(bit_width(movable.count_ones()))?;
        let from = square_at_rank(from_rank, movable)?;

        let destinations = self.space.destinations(from, Some(position))?;
        let to_rank = reader.read_field(bit_width(destinations.reachable.count_ones()))?;
        let to = square_at_rank(to_rank, destinations.reachable)?;

        let choices: PromotionMask = destinations.promotion_candidates(to);
        let choice_rank = reader.read_field(bit_width(choices.count_ones()))?;
        let choice = square_at_rank(choice_rank, u64::from(choices))?;
        let promotion = promotion_from_index(choice).ok_or(CodecError::IndexOutOfRange {
            rank: choice_rank,
            population: choices.count_ones(),
        })?;

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}
