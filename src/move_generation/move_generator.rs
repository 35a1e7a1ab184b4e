use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Bitboard;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

/// Which rule set a generator enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationMode {
    /// Moves obeying piece movement, ignoring self-check.
    PseudoLegal,
    /// Pseudo-legal moves that do not leave the mover's king attacked.
    Legal,
}

pub trait MoveGenerator: Send + Sync {
    /// Moves of the side to move whose origin square is in `from_mask`.
    fn generate_moves(
        &self,
        game_state: &GameState,
        from_mask: Bitboard,
    ) -> MoveGenResult<Vec<MoveDescription>>;
}
