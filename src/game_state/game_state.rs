//! Bitboard position model.
//!
//! `GameState` stores piece bitboards, occupancy caches, side/rights/clock
//! fields and the make/unmake history. It is the concrete position the codec
//! drives through the `CodecPosition` seam.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub pieces: [[Bitboard; 6]; 2],

    pub occupancy_by_color: [Bitboard; 2],
    pub occupancy_all: Bitboard,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub ply: u16,
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            ply: 0,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).unwrap_or_default()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// The same position with no move history, for make/unmake probing that
    /// must not pay for the games played so far.
    pub fn scratch_copy(&self) -> Self {
        Self {
            pieces: self.pieces,
            occupancy_by_color: self.occupancy_by_color,
            occupancy_all: self.occupancy_all,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            ply: self.ply,
            undo_stack: Vec::new(),
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        [Color::Light, Color::Dark]
            .into_iter()
            .find_map(|color| self.piece_of(color, square).map(|kind| (color, kind)))
    }

    pub fn piece_of(&self, color: Color, square: Square) -> Option<PieceKind> {
        let mask = square_bit(square);
        ALL_PIECE_KINDS
            .into_iter()
            .find(|kind| (self.pieces[color.index()][kind.index()] & mask) != 0)
    }

    #[inline]
    pub fn put_piece(&mut self, color: Color, kind: PieceKind, square: Square) {
        self.pieces[color.index()][kind.index()] |= square_bit(square);
    }

    #[inline]
    pub fn remove_piece(&mut self, color: Color, kind: PieceKind, square: Square) {
        self.pieces[color.index()][kind.index()] &= !square_bit(square);
    }

    pub fn recalc_occupancy(&mut self) {
        for color in [Color::Light, Color::Dark] {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[0] | self.occupancy_by_color[1];
    }
}
