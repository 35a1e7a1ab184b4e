//! Pseudo-legal move generation restricted to a set of origin squares.
//!
//! Castling is only produced when the king is not in check and does not pass
//! through or land on an attacked square, so the only thing the legal filter
//! still has to reject is leaving the king attacked.

use crate::game_state::chess_rules::{C1, C8, E1, E8, G1, G8};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
use crate::moves::move_descriptions::{
    MoveDescription, FLAG_CAPTURE, FLAG_CASTLING, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};

const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
];

pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(
        &self,
        game_state: &GameState,
        from_mask: Bitboard,
    ) -> MoveGenResult<Vec<MoveDescription>> {
        let mut out = Vec::with_capacity(64);
        generate_pseudo_legal_moves(game_state, from_mask, &mut out);
        Ok(out)
    }
}

pub fn generate_pseudo_legal_moves(
    game_state: &GameState,
    from_mask: Bitboard,
    out: &mut Vec<MoveDescription>,
) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];
    let occupancy = game_state.occupancy_all;

    for kind in ALL_PIECE_KINDS {
        let movers = game_state.pieces[side.index()][kind.index()] & from_mask;
        for from in squares_of(movers) {
            let targets = match kind {
                PieceKind::Pawn => {
                    push_pawn_moves(game_state, from, out);
                    continue;
                }
                PieceKind::Knight => knight_attacks(from),
                PieceKind::Bishop => bishop_attacks(from, occupancy),
                PieceKind::Rook => rook_attacks(from, occupancy),
                PieceKind::Queen => queen_attacks(from, occupancy),
                PieceKind::King => {
                    push_castling_moves(game_state, from, out);
                    king_attacks(from)
                }
            };

            for to in squares_of(targets & !own_occ) {
                let captured = game_state.piece_of(side.opposite(), to);
                let flags = if captured.is_some() { FLAG_CAPTURE } else { 0 };
                out.push(MoveDescription::new(from, to, kind, captured, None, flags));
            }
        }
    }
}

fn push_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<MoveDescription>) {
    let side = game_state.side_to_move;
    let empty = !game_state.occupancy_all;
    let enemy = side.opposite();

    let forward = |square: Square| match side {
        Color::Light => square.checked_add(8).filter(|sq| *sq < 64),
        Color::Dark => square.checked_sub(8),
    };

    if let Some(one_step) = forward(from).filter(|sq| empty & square_bit(*sq) != 0) {
        push_pawn_move(side, from, one_step, None, 0, out);

        let start_rank = if side == Color::Light { 1 } else { 6 };
        if square_rank(from) == start_rank {
            if let Some(two_step) = forward(one_step).filter(|sq| empty & square_bit(*sq) != 0) {
                push_pawn_move(side, from, two_step, None, FLAG_DOUBLE_PAWN_PUSH, out);
            }
        }
    }

    for to in squares_of(pawn_attacks(side, from)) {
        if let Some(captured) = game_state.piece_of(enemy, to) {
            push_pawn_move(side, from, to, Some(captured), FLAG_CAPTURE, out);
        } else if game_state.en_passant_square == Some(to) {
            push_pawn_move(
                side,
                from,
                to,
                Some(PieceKind::Pawn),
                FLAG_CAPTURE | FLAG_EN_PASSANT,
                out,
            );
        }
    }
}

fn push_pawn_move(
    side: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    flags: u64,
    out: &mut Vec<MoveDescription>,
) {
    if square_rank(to) == side.promotion_rank() {
        for promo in PROMOTION_PIECES {
            out.push(MoveDescription::new(from, to, PieceKind::Pawn, captured, Some(promo), flags));
        }
    } else {
        out.push(MoveDescription::new(from, to, PieceKind::Pawn, captured, None, flags));
    }
}

fn push_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<MoveDescription>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();

    let (home, kingside, queenside, short_to, long_to) = match side {
        Color::Light => (E1, CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE, G1, C1),
        Color::Dark => (E8, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, G8, C8),
    };
    if king_from != home || is_square_attacked(game_state, home, enemy) {
        return;
    }

    let rook_on = |square: Square| game_state.piece_of(side, square) == Some(PieceKind::Rook);
    let clear = |mask: Bitboard| game_state.occupancy_all & mask == 0;
    let safe = |squares: [Square; 2]| {
        squares
            .iter()
            .all(|sq| !is_square_attacked(game_state, *sq, enemy))
    };

    if game_state.castling_rights & kingside != 0
        && rook_on(home + 3)
        && clear(square_bit(home + 1) | square_bit(home + 2))
        && safe([home + 1, home + 2])
    {
        out.push(MoveDescription::new(home, short_to, PieceKind::King, None, None, FLAG_CASTLING));
    }

    if game_state.castling_rights & queenside != 0
        && rook_on(home - 4)
        && clear(square_bit(home - 1) | square_bit(home - 2) | square_bit(home - 3))
        && safe([home - 1, home - 2])
    {
        out.push(MoveDescription::new(home, long_to, PieceKind::King, None, None, FLAG_CASTLING));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pseudo_legal_moves;
    use crate::game_state::chess_types::square_bit;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{FLAG_CASTLING, FLAG_EN_PASSANT};

    #[test]
    fn start_position_has_twenty_moves() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_pseudo_legal_moves(&game, !0, &mut out);
        assert_eq!(out.len(), 20);
    }

    #[test]
    fn from_mask_restricts_origins() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_pseudo_legal_moves(&game, square_bit(6), &mut out);
        let mut targets: Vec<u8> = out.iter().map(|mv| mv.to()).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![21, 23]);
    }

    #[test]
    fn promotions_expand_to_four_pieces() {
        let game = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pseudo_legal_moves(&game, square_bit(48), &mut out);
        // a8 push and b8 capture, each with four promotion pieces.
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn castling_and_en_passant_are_generated() {
        let castle =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pseudo_legal_moves(&castle, square_bit(4), &mut out);
        assert_eq!(out.iter().filter(|mv| mv.has_flag(FLAG_CASTLING)).count(), 2);

        let attacked =
            GameState::from_fen("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1").expect("FEN should parse");
        out.clear();
        generate_pseudo_legal_moves(&attacked, square_bit(4), &mut out);
        // f2 rook covers f1: kingside castling is off, queenside stays.
        assert_eq!(out.iter().filter(|mv| mv.has_flag(FLAG_CASTLING)).count(), 1);

        let ep = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        out.clear();
        generate_pseudo_legal_moves(&ep, square_bit(36), &mut out);
        assert_eq!(out.iter().filter(|mv| mv.has_flag(FLAG_EN_PASSANT)).count(), 1);
    }
}
