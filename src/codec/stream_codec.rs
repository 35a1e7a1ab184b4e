//! Whole move sequences.
//!
//! Each move is coded against the position reached by all moves before it,
//! so encode and decode walk the game in the same order, pushing every move
//! onto a working position as they go. Nothing separates moves in the
//! output: the field widths alone say where one move ends.
//!
//! A move that is the only option available (one movable piece, one target,
//! one promotion choice) costs zero bits. Such moves at the very end of a game
//! leave no trace; use `decode_sequence_exact` with the ply count when that
//! matters.

use crate::codec::bit_string::{BitReader, BitString};
use crate::codec::codec_errors::{CodecError, CodecResult};
use crate::codec::codec_move::Move;
use crate::codec::move_codec::MoveCodec;
use crate::codec::move_space::MaskPolicy;
use crate::codec::position::{CodecPosition, MoveStackGuard};

/// Default longest run of zero-width moves accepted while decoding to
/// exhaustion.
pub const MAX_ZERO_WIDTH_RUN: usize = 512;

#[derive(Debug, Clone, Copy)]
pub struct StreamCodec {
    codec: MoveCodec,
    zero_width_limit: usize,
}

impl StreamCodec {
    pub fn new(policy: MaskPolicy) -> Self {
        Self::with_codec(MoveCodec::new(policy))
    }

    pub fn with_codec(codec: MoveCodec) -> Self {
        Self {
            codec,
            zero_width_limit: MAX_ZERO_WIDTH_RUN,
        }
    }

    /// Cap on consecutive zero-width moves in `decode_sequence`.
    pub fn with_zero_width_limit(mut self, limit: usize) -> Self {
        self.zero_width_limit = limit;
        self
    }

    #[inline]
    pub fn policy(&self) -> MaskPolicy {
        self.codec.policy()
    }

    pub fn encode_sequence<P: CodecPosition>(
        &self,
        moves: &[Move],
        start: &P,
    ) -> CodecResult<BitString> {
        let mut working = start.clone();
        self.encode_sequence_in_place(moves, &mut working)
    }

    /// Like `encode_sequence`, but plays the moves on `position` itself. The
    /// position is back in its starting state when this returns, error or not.
    pub fn encode_sequence_in_place<P: CodecPosition>(
        &self,
        moves: &[Move],
        position: &mut P,
    ) -> CodecResult<BitString> {
        let mut guard = MoveStackGuard::new(position);
        let mut out = BitString::new();
        for &mv in moves {
            self.codec.encode_move_into(mv, guard.position(), &mut out)?;
            guard.push(mv)?;
        }
        Ok(out)
    }

    /// Decode moves until `bits` is exhausted.
    pub fn decode_sequence<P: CodecPosition>(
        &self,
        bits: &BitString,
        start: &P,
    ) -> CodecResult<Vec<Move>> {
        let mut working = start.clone();
        self.decode_sequence_in_place(bits, &mut working)
    }

    pub fn decode_sequence_in_place<P: CodecPosition>(
        &self,
        bits: &BitString,
        position: &mut P,
    ) -> CodecResult<Vec<Move>> {
        let mut guard = MoveStackGuard::new(position);
        let mut reader = bits.reader();
        let mut moves = Vec::new();
        let mut zero_width_run = 0usize;

        while reader.remaining() > 0 {
            let before = reader.position();
            let mv = self.codec.decode_from(&mut reader, guard.position())?;

            if reader.position() == before {
                zero_width_run += 1;
                if zero_width_run > self.zero_width_limit {
                    return Err(CodecError::DesynchronizedStream {
                        leftover: reader.remaining(),
                    });
                }
            } else {
                zero_width_run = 0;
            }

            guard.push(mv)?;
            moves.push(mv);
        }

        Ok(moves)
    }

    /// Decode exactly `plies` moves. Unlike `decode_sequence` this recovers
    /// trailing zero-width moves, and any bits left afterwards are an error.
    pub fn decode_sequence_exact<P: CodecPosition>(
        &self,
        bits: &BitString,
        start: &P,
        plies: usize,
    ) -> CodecResult<Vec<Move>> {
        let mut working = start.clone();
        let mut guard = MoveStackGuard::new(&mut working);
        let mut reader = bits.reader();
        let moves = self.decode_plies(&mut reader, &mut guard, plies)?;

        if reader.remaining() > 0 {
            return Err(CodecError::DesynchronizedStream {
                leftover: reader.remaining(),
            });
        }
        Ok(moves)
    }

    fn decode_plies<P: CodecPosition>(
        &self,
        reader: &mut BitReader<'_>,
        guard: &mut MoveStackGuard<'_, P>,
        plies: usize,
    ) -> CodecResult<Vec<Move>> {
        let mut moves = Vec::with_capacity(plies);
        for _ in 0..plies {
            let mv = self.codec.decode_from(reader, guard.position())?;
            guard.push(mv)?;
            moves.push(mv);
        }
        Ok(moves)
    }
}

pub fn encode_sequence<P: CodecPosition>(
    moves: &[Move],
    start: &P,
    policy: MaskPolicy,
) -> CodecResult<BitString> {
    StreamCodec::new(policy).encode_sequence(moves, start)
}

pub fn decode_sequence<P: CodecPosition>(
    bits: &BitString,
    start: &P,
    policy: MaskPolicy,
) -> CodecResult<Vec<Move>> {
    StreamCodec::new(policy).decode_sequence(bits, start)
}
