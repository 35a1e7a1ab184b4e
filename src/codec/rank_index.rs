//! Rank of a set bit among the set bits of a mask, and the inverse.
//!
//! These turn a square drawn from a known candidate set into the smallest
//! possible integer, which is what keeps the codec's fields narrow.

use crate::codec::codec_errors::{CodecError, CodecResult};
use crate::game_state::chess_types::Bitboard;

/// Number of set bits of `mask` that sort below `index`.
///
/// Computed as `popcount(mask) - popcount(mask >> index)`: the bits shifted
/// out are exactly those below `index`.
#[inline]
pub fn rank_of(index: u8, mask: Bitboard) -> CodecResult<u32> {
    if index > 63 || (mask >> index) & 1 == 0 {
        return Err(CodecError::PreconditionViolation { index, mask });
    }
    Ok(mask.count_ones() - (mask >> index).count_ones())
}

/// The index of the set bit of `mask` whose rank is `rank`.
pub fn square_at_rank(rank: u64, mask: Bitboard) -> CodecResult<u8> {
    let mut remaining = mask;
    let mut to_skip = rank;

    while remaining != 0 {
        if to_skip == 0 {
            return Ok(remaining.trailing_zeros() as u8);
        }
        remaining &= remaining - 1;
        to_skip -= 1;
    }

    Err(CodecError::IndexOutOfRange {
        rank,
        population: mask.count_ones(),
    })
}

/// Bits needed to tell `count` values apart; `0` when `count <= 1`.
#[inline]
pub const fn bit_width(count: u32) -> u32 {
    if count <= 1 {
        0
    } else {
        u32::BITS - (count - 1).leading_zeros()
    }
}
