//! Standard algebraic notation (`Nbd7`, `exd5`, `O-O`, `e8=Q+`).

use crate::game_state::chess_types::{square_file, square_rank, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generator_for;
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::move_descriptions::{MoveDescription, FLAG_CAPTURE, FLAG_CASTLING};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn san_to_move_description(
    san: &str,
    game_state: &GameState,
) -> Result<MoveDescription, String> {
    let legal = legal_moves(game_state)?;
    let cleaned = san.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'));

    if let Some(long_side) = castling_side(cleaned) {
        return legal
            .into_iter()
            .find(|mv| {
                mv.has_flag(FLAG_CASTLING) && (square_file(mv.to()) == 2) == long_side
            })
            .ok_or_else(|| format!("Castling {san} is not legal in {}", game_state.get_fen()));
    }

    let (body, promotion) = split_promotion(cleaned)?;
    let (kind, body) = match body.chars().next().and_then(piece_from_san_char) {
        Some(kind) => (kind, &body[1..]),
        None => (PieceKind::Pawn, body),
    };

    let body: String = body.chars().filter(|&c| c != 'x').collect();
    if body.len() < 2 || !body.is_ascii() {
        return Err(format!("Invalid SAN move: {san}"));
    }
    let (hint, target) = body.split_at(body.len() - 2);
    let to = algebraic_to_square(target)?;

    let mut from_file = None;
    let mut from_rank = None;
    for ch in hint.chars() {
        match ch {
            'a'..='h' => from_file = Some(ch as u8 - b'a'),
            '1'..='8' => from_rank = Some(ch as u8 - b'1'),
            _ => return Err(format!("Invalid SAN disambiguation in {san}")),
        }
    }

    let wanted_promotion = if kind == PieceKind::Pawn
        && (square_rank(to) == 0 || square_rank(to) == 7)
    {
        Some(promotion.unwrap_or(PieceKind::Queen))
    } else {
        promotion
    };

    let mut matches = legal.into_iter().filter(|mv| {
        mv.to() == to
            && mv.moved_piece() == Some(kind)
            && mv.promotion_piece() == wanted_promotion
            && from_file.is_none_or(|file| square_file(mv.from()) == file)
            && from_rank.is_none_or(|rank| square_rank(mv.from()) == rank)
    });

    match (matches.next(), matches.next()) {
        (Some(mv), None) => Ok(mv),
        (None, _) => Err(format!("Illegal SAN move {san} in {}", game_state.get_fen())),
        (Some(_), Some(_)) => Err(format!("Ambiguous SAN move {san} in {}", game_state.get_fen())),
    }
}

pub fn move_description_to_san(
    move_description: MoveDescription,
    game_state: &GameState,
) -> Result<String, String> {
    let legal = legal_moves(game_state)?;
    if !legal.contains(&move_description) {
        return Err(format!(
            "Move {:#x} is not legal in {}",
            move_description.0,
            game_state.get_fen()
        ));
    }

    let mut out = String::new();
    if move_description.has_flag(FLAG_CASTLING) {
        out.push_str(if square_file(move_description.to()) == 2 {
            "O-O-O"
        } else {
            "O-O"
        });
    } else {
        let kind = move_description
            .moved_piece()
            .ok_or("Move description has no moved piece")?;
        let from = move_description.from();
        let to = move_description.to();
        let capture = move_description.has_flag(FLAG_CAPTURE);

        if kind == PieceKind::Pawn {
            if capture {
                out.push((b'a' + square_file(from)) as char);
            }
        } else {
            out.push(piece_to_san_char(kind));
            let rivals: Vec<_> = legal
                .iter()
                .filter(|mv| mv.to() == to && mv.moved_piece() == Some(kind) && mv.from() != from)
                .collect();
            if !rivals.is_empty() {
                let file_clash = rivals.iter().any(|mv| square_file(mv.from()) == square_file(from));
                let rank_clash = rivals.iter().any(|mv| square_rank(mv.from()) == square_rank(from));
                if !file_clash {
                    out.push((b'a' + square_file(from)) as char);
                } else if !rank_clash {
                    out.push((b'1' + square_rank(from)) as char);
                } else {
                    out.push_str(&square_to_algebraic(from)?);
                }
            }
        }

        if capture {
            out.push('x');
        }
        out.push_str(&square_to_algebraic(to)?);
        if let Some(promotion) = move_description.promotion_piece() {
            out.push('=');
            out.push(piece_to_san_char(promotion));
        }
    }

    let mut after = game_state.scratch_copy();
    after.make_move(move_description)?;
    if is_king_in_check(&after, after.side_to_move) {
        let replies = legal_moves(&after)?;
        out.push(if replies.is_empty() { '#' } else { '+' });
    }

    Ok(out)
}

fn legal_moves(game_state: &GameState) -> Result<Vec<MoveDescription>, String> {
    generator_for(GenerationMode::Legal)
        .generate_moves(game_state, u64::MAX)
        .map_err(|err| err.to_string())
}

/// `Some(true)` for queenside, `Some(false)` for kingside.
fn castling_side(san: &str) -> Option<bool> {
    match san {
        "O-O" | "0-0" => Some(false),
        "O-O-O" | "0-0-0" => Some(true),
        _ => None,
    }
}

/// Split `e8=Q` / `e8Q` into the move body and its promotion piece.
fn split_promotion(san: &str) -> Result<(&str, Option<PieceKind>), String> {
    if let Some((body, piece)) = san.split_once('=') {
        let kind = piece
            .chars()
            .next()
            .and_then(piece_from_san_char)
            .ok_or_else(|| format!("Invalid promotion in SAN move {san}"))?;
        return Ok((body, Some(kind)));
    }

    match san.chars().last() {
        Some(last) if san.len() > 2 && last.is_ascii_uppercase() => {
            let kind = piece_from_san_char(last)
                .ok_or_else(|| format!("Invalid promotion in SAN move {san}"))?;
            Ok((&san[..san.len() - 1], Some(kind)))
        }
        _ => Ok((san, None)),
    }
}

fn piece_from_san_char(ch: char) -> Option<PieceKind> {
    match ch {
        'N' => Some(PieceKind::Knight),
        'B' => Some(PieceKind::Bishop),
        'R' => Some(PieceKind::Rook),
        'Q' => Some(PieceKind::Queen),
        'K' => Some(PieceKind::King),
        _ => None,
    }
}

fn piece_to_san_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'P',
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Rook => 'R',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
    }
}

#[cfg(test)]
mod tests {
    use super::{move_description_to_san, san_to_move_description};
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::FLAG_CASTLING;

    #[test]
    fn opening_moves_resolve() {
        let mut game = GameState::new_game();
        for (san, from, to) in [("e4", 12, 28), ("e5", 52, 36), ("Nf3", 6, 21), ("Nc6", 57, 42)] {
            let mv = san_to_move_description(san, &game).expect("SAN should resolve");
            assert_eq!((mv.from(), mv.to()), (from, to), "{san}");
            assert_eq!(move_description_to_san(mv, &game).expect("SAN should render"), san);
            game.make_move(mv).expect("move should apply");
        }
    }

    #[test]
    fn disambiguation_and_captures() {
        let game = GameState::from_fen("4k3/8/8/3p4/8/2N1N3/8/4K3 w - - 0 1").expect("FEN should parse");
        let mv = san_to_move_description("Ncxd5", &game).expect("SAN should resolve");
        assert_eq!(mv.from(), 18);
        assert_eq!(move_description_to_san(mv, &game).expect("SAN should render"), "Ncxd5");
        assert!(san_to_move_description("Nxd5", &game).is_err());
    }

    #[test]
    fn castling_and_promotion() {
        let game = GameState::from_fen("r3k3/1P6/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        let castle = san_to_move_description("O-O", &game).expect("castling should resolve");
        assert!(castle.has_flag(FLAG_CASTLING));
        assert_eq!(move_description_to_san(castle, &game).expect("SAN should render"), "O-O");

        let capture = san_to_move_description("bxa8=N", &game).expect("promotion should resolve");
        assert_eq!(capture.promotion_piece(), Some(PieceKind::Knight));
        let push = san_to_move_description("b8", &game).expect("queen is the default");
        assert_eq!(push.promotion_piece(), Some(PieceKind::Queen));
        assert_eq!(move_description_to_san(push, &game).expect("SAN should render"), "b8=Q+");
    }

    #[test]
    fn mate_is_marked() {
        let game = GameState::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2")
            .expect("FEN should parse");
        let mv = san_to_move_description("Qh4#", &game).expect("mate should resolve");
        assert_eq!(move_description_to_san(mv, &game).expect("SAN should render"), "Qh4#");
    }
}
