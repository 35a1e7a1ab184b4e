//! The codec's view of a chess position.
//!
//! The codec never inspects rules itself; everything it needs to know about a
//! position goes through `CodecPosition`. `MoveStackGuard` gives push/pop a
//! scoped shape so callers' positions are restored on every exit path.

use crate::codec::codec_errors::{CodecError, CodecResult};
use crate::codec::codec_move::Move;
use crate::game_state::chess_types::{square_bit, Bitboard, Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generator_for;
use crate::move_generation::move_generator::GenerationMode;

pub trait CodecPosition: Clone {
    fn side_to_move(&self) -> Color;

    /// Squares occupied by the side to move.
    fn side_to_move_occupancy(&self) -> Bitboard;

    fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)>;

    /// Moves of the side to move starting in `from_mask`.
    fn candidate_moves(&self, from_mask: Bitboard, mode: GenerationMode) -> CodecResult<Vec<Move>>;

    /// Apply `mv`; an untagged move onto the last rank promotes to a queen.
    fn push_move(&mut self, mv: Move) -> CodecResult<()>;

    /// Revert the most recent `push_move`.
    fn pop_move(&mut self) -> Option<Move>;
}

impl CodecPosition for GameState {
    #[inline]
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    fn side_to_move_occupancy(&self) -> Bitboard {
        self.occupancy_by_color[self.side_to_move.index()]
    }

    #[inline]
    fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        GameState::piece_at(self, square)
    }

    fn candidate_moves(&self, from_mask: Bitboard, mode: GenerationMode) -> CodecResult<Vec<Move>> {
        let moves = generator_for(mode)
            .generate_moves(self, from_mask)
            .map_err(|err| CodecError::RejectedMove(err.to_string()))?;
        Ok(moves.into_iter().map(Move::from_description).collect())
    }

    fn push_move(&mut self, mv: Move) -> CodecResult<()> {
        let description = generator_for(GenerationMode::PseudoLegal)
            .generate_moves(self, square_bit(mv.from))
            .map_err(|err| CodecError::RejectedMove(err.to_string()))?
            .into_iter()
            .find(|candidate| mv.matches(*candidate))
            .ok_or_else(|| {
                CodecError::RejectedMove(format!("{mv} is not playable in {}", self.get_fen()))
            })?;

        self.make_move(description).map_err(CodecError::RejectedMove)
    }

    fn pop_move(&mut self) -> Option<Move> {
        self.unmake_move().map(Move::from_description)
    }
}

/// Pushes moves onto a borrowed position and pops all of them when dropped.
pub struct MoveStackGuard<'a, P: CodecPosition> {
    position: &'a mut P,
    pushed: usize,
}

impl<'a, P: CodecPosition> MoveStackGuard<'a, P> {
    pub fn new(position: &'a mut P) -> Self {
        Self {
            position,
            pushed: 0,
        }
    }

    pub fn push(&mut self, mv: Move) -> CodecResult<()> {
        self.position.push_move(mv)?;
        self.pushed += 1;
        Ok(())
    }

    #[inline]
    pub fn position(&self) -> &P {
        self.position
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.pushed
    }
}

impl<P: CodecPosition> Drop for MoveStackGuard<'_, P> {
    fn drop(&mut self) {
        while self.pushed > 0 {
            self.position.pop_move();
            self.pushed -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CodecPosition, MoveStackGuard};
    use crate::codec::codec_errors::CodecError;
    use crate::codec::codec_move::{Move, Underpromotion};
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_state::GameState;

    #[test]
    fn guard_restores_position_on_drop() {
        let mut game = GameState::new_game();
        let before = game.clone();
        {
            let mut guard = MoveStackGuard::new(&mut game);
            guard.push("e2e4".parse().expect("UCI should parse")).expect("e2e4 is playable");
            guard.push("e7e5".parse().expect("UCI should parse")).expect("e7e5 is playable");
            assert_eq!(guard.depth(), 2);
            assert_eq!(guard.position().side_to_move, Color::Light);
        }
        assert_eq!(game, before);
    }

    #[test]
    fn guard_restores_position_after_rejected_push() {
        let mut game = GameState::new_game();
        let before = game.clone();
        {
            let mut guard = MoveStackGuard::new(&mut game);
            guard.push("g1f3".parse().expect("UCI should parse")).expect("g1f3 is playable");
            let err = guard
                .push("e2e5".parse().expect("UCI should parse"))
                .expect_err("e2e5 is not playable");
            assert!(matches!(err, CodecError::RejectedMove(_)));
        }
        assert_eq!(game, before);
    }

    #[test]
    fn push_resolves_promotion_tags() {
        let mut game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        game.push_move(Move::new(48, 56)).expect("queen promotion is playable");
        assert_eq!(game.piece_at(56), Some((Color::Light, PieceKind::Queen)));
        assert_eq!(game.pop_move(), Some(Move::new(48, 56)));

        let knight = Move::with_promotion(48, 56, Underpromotion::Knight);
        game.push_move(knight).expect("knight promotion is playable");
        assert_eq!(game.piece_at(56), Some((Color::Light, PieceKind::Knight)));
        assert_eq!(game.pop_move(), Some(knight));
    }
}
