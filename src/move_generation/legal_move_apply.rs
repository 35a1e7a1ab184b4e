//! Make/unmake on `GameState`.
//!
//! Every `make_move` pushes one `UndoState`; `unmake_move` pops exactly one and
//! restores the position bit for bit.

use crate::game_state::chess_rules::castling_rook_hop;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{
    MoveDescription, FLAG_CAPTURE, FLAG_CASTLING, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};

impl GameState {
    pub fn make_move(&mut self, mv: MoveDescription) -> Result<(), String> {
        let from = mv.from();
        let to = mv.to();
        let mover = self.side_to_move;
        let enemy = mover.opposite();

        let moved_piece = mv
            .moved_piece()
            .ok_or_else(|| format!("Move {from}->{to} has no moved piece"))?;
        if self.piece_of(mover, from) != Some(moved_piece) {
            return Err(format!(
                "Expected {mover:?} {moved_piece:?} on square {from} for move {from}->{to}"
            ));
        }

        self.undo_stack.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
        });

        self.remove_piece(mover, moved_piece, from);

        if mv.has_flag(FLAG_EN_PASSANT) {
            self.remove_piece(enemy, PieceKind::Pawn, en_passant_victim(mover, to));
        } else if let Some(captured) = mv.captured_piece() {
            self.remove_piece(enemy, captured, to);
        }

        let placed = mv.promotion_piece().unwrap_or(moved_piece);
        self.put_piece(mover, placed, to);

        if mv.has_flag(FLAG_CASTLING) {
            if let Some((rook_from, rook_to)) = castling_rook_hop(from, to) {
                self.remove_piece(mover, PieceKind::Rook, rook_from);
                self.put_piece(mover, PieceKind::Rook, rook_to);
            }
        }

        self.castling_rights &= !(rights_lost_by(from) | rights_lost_by(to));
        self.en_passant_square = if mv.has_flag(FLAG_DOUBLE_PAWN_PUSH) {
            Some((from + to) / 2)
        } else {
            None
        };

        if moved_piece == PieceKind::Pawn || mv.has_flag(FLAG_CAPTURE) {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = enemy;
        self.ply = self.ply.saturating_add(1);
        self.recalc_occupancy();
        Ok(())
    }

    /// Reverts the most recent `make_move`, returning the move undone.
    pub fn unmake_move(&mut self) -> Option<MoveDescription> {
        let undo = self.undo_stack.pop()?;
        let mv = undo.mv;
        let from = mv.from();
        let to = mv.to();
        let mover = self.side_to_move.opposite();
        let enemy = self.side_to_move;

        // make_move refuses descriptions without a moved piece.
        let moved_piece = mv.moved_piece()?;
        let placed = mv.promotion_piece().unwrap_or(moved_piece);

        self.remove_piece(mover, placed, to);
        self.put_piece(mover, moved_piece, from);

        if mv.has_flag(FLAG_CASTLING) {
            if let Some((rook_from, rook_to)) = castling_rook_hop(from, to) {
                self.remove_piece(mover, PieceKind::Rook, rook_to);
                self.put_piece(mover, PieceKind::Rook, rook_from);
            }
        }

        if mv.has_flag(FLAG_EN_PASSANT) {
            self.put_piece(enemy, PieceKind::Pawn, en_passant_victim(mover, to));
        } else if let Some(captured) = mv.captured_piece() {
            self.put_piece(enemy, captured, to);
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
        self.side_to_move = mover;
        self.ply = self.ply.saturating_sub(1);
        self.recalc_occupancy();
        Some(mv)
    }
}

#[inline]
fn en_passant_victim(mover: Color, to: Square) -> Square {
    match mover {
        Color::Light => to - 8,
        Color::Dark => to + 8,
    }
}

/// Castling rights cleared when a piece leaves or lands on `square`.
#[inline]
fn rights_lost_by(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_LIGHT_QUEENSIDE,
        4 => CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE,
        7 => CASTLE_LIGHT_KINGSIDE,
        56 => CASTLE_DARK_QUEENSIDE,
        60 => CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE,
        63 => CASTLE_DARK_KINGSIDE,
        _ => 0,
    }
}
