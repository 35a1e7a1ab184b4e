//! Crate root module declarations for the chess action-space project.
//!
//! This file exposes the rules engine (game state, move tables, move
//! generation), the move-stream codec, the fixed action catalogue and the
//! text-format helpers so binaries, tests and benches can import stable
//! module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod attack_tables;
    pub mod geometric_table;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal_moves;
}

pub mod codec {
    pub mod bit_string;
    pub mod codec_errors;
    pub mod codec_move;
    pub mod move_codec;
    pub mod move_space;
    pub mod position;
    pub mod rank_index;
    pub mod stream_codec;
}

pub mod action_space {
    pub mod action_catalogue;
    pub mod action_export;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod random_game;
    pub mod san;
}
