//! Failure modes of the move codec.
//!
//! None of these are retried or masked inside the codec: each one means
//! either the caller paired bits with the wrong position/policy, or the data
//! is corrupt.

use std::error::Error;
use std::fmt;

use crate::codec::move_space::MaskPolicy;
use crate::game_state::chess_types::Bitboard;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The index being ranked is not a member of the mask.
    PreconditionViolation { index: u8, mask: Bitboard },
    /// A decoded rank is at or beyond the mask's population.
    IndexOutOfRange { rank: u64, population: u32 },
    /// A field needs more bits than remain.
    TruncatedInput { needed: u32, remaining: usize },
    /// Bits remain that cannot be consumed as a further complete move.
    DesynchronizedStream { leftover: usize },
    /// A position-dependent policy was asked for a mask without a position.
    PositionRequired(MaskPolicy),
    /// The rules engine refused to apply a move.
    RejectedMove(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::PreconditionViolation { index, mask } => {
                write!(f, "index {index} is not set in mask {mask:#018x}")
            }
            CodecError::IndexOutOfRange { rank, population } => {
                write!(f, "rank {rank} is out of range for a mask of {population} bits")
            }
            CodecError::TruncatedInput { needed, remaining } => {
                write!(f, "field needs {needed} bits but only {remaining} remain")
            }
            CodecError::DesynchronizedStream { leftover } => {
                write!(f, "{leftover} trailing bits do not form a complete move")
            }
            CodecError::PositionRequired(policy) => {
                write!(f, "{policy:?} masks need a position")
            }
            CodecError::RejectedMove(msg) => write!(f, "move rejected by rules engine: {msg}"),
        }
    }
}

impl Error for CodecError {}
