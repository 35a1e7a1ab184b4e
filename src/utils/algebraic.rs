//! Square names (`e4`) to and from square indices.

use crate::game_state::chess_types::{make_square, square_file, square_rank, Square};

pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let &[file, rank] = square.as_bytes() else {
        return Err(format!("Invalid algebraic square: {square}"));
    };

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(make_square(file - b'a', rank - b'1'))
}

pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square > 63 {
        return Err(format!("Square index out of bounds: {square}"));
    }

    let file_char = char::from(b'a' + square_file(square));
    let rank_char = char::from(b'1' + square_rank(square));
    Ok(format!("{file_char}{rank_char}"))
}
