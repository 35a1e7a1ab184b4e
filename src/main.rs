//! Move-stream codec harness.
//!
//! Encodes and decodes one game under every mask policy, checks the round
//! trip, and compares bits used and time spent against the Geometric policy.
//!
//! Usage:
//! `cargo run --release`
//! `cargo run --release -- --pgn game.pgn --iterations 200`

use std::fs;
use std::time::{Duration, Instant};

use chess_action_space::codec::bit_string::BitString;
use chess_action_space::codec::codec_move::Move;
use chess_action_space::codec::move_space::MaskPolicy;
use chess_action_space::codec::position::CodecPosition;
use chess_action_space::codec::stream_codec::StreamCodec;
use chess_action_space::game_state::game_state::GameState;
use chess_action_space::utils::pgn::{format_fullmove, read_pgn};

const SAMPLE_PGN: &str = r#"[Event "Casual Bullet game"]
[Site "https://lichess.org/Y2hanlPl"]
[Date "2022.07.01"]
[White "Goldy35"]
[Black "penguingm1"]
[Result "0-1"]
[ECO "D31"]
[Opening "Queen's Gambit Declined: Charousek Variation"]
[Termination "Time forfeit"]

1. d4 d5 2. c4 e6 3. Nc3 Be7 { D31 Queen's Gambit Declined: Charousek Variation } 4. Nf3 Nf6
5. cxd5 exd5 6. Bf4 c6 7. e3 Bf5 8. Be2 Nbd7 9. O-O O-O 10. h3 h6 11. Rc1 Re8 12. Re1 Nf8
13. e4?? { Blunder. Ne5 was best. } (13. Ne5 Bd6 14. Bd3 Bxd3 15. Nxd3 Bxf4) 13... Nxe4
14. Bd3 Nxc3 15. bxc3 Bxd3 16. Qxd3 Ne6?! (16... Bf6 17. Be5) 17. Bh2?! (17. Rxe6 fxe6)
17... Bd6 18. Bxd6 Qxd6 19. Ne5 Re7 20. Re3 Rae8 21. Rce1 Nf4?! (21... Ng5) 22. Qf5 Ne6
23. f4?! (23. h4 Nf8) 23... Nf8 24. Qd3 f6 25. Nxc6?? (25. Nf3) 25... bxc6 26. Rxe7 Rxe7
27. Rxe7 Qxe7 { Black wins on time. } 0-1
"#;

struct PolicyRun {
    policy: MaskPolicy,
    elapsed: Duration,
    bits: BitString,
    correct: bool,
}

fn parse_arg_string(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn parse_arg_usize(flag: &str, default: usize) -> usize {
    parse_arg_string(flag)
        .and_then(|value| value.parse::<usize>().ok())
        .map_or(default, |value| value.max(1))
}

/// Print the first ply where `decoded` strays from `expected`.
fn report_mismatch(start: &GameState, expected: &[Move], decoded: &[Move]) -> Result<(), String> {
    let mut board = start.clone();
    for (ply, expected_move) in expected.iter().enumerate() {
        let move_num = format_fullmove(board.fullmove_number, board.side_to_move);
        match decoded.get(ply) {
            Some(got) if got == expected_move => {}
            Some(got) => {
                println!("Error: decoded to {move_num}{got}, expected {move_num}{expected_move}");
                return Ok(());
            }
            None => {
                println!("Error: decoding stopped before {move_num}{expected_move}");
                return Ok(());
            }
        }
        board.push_move(*expected_move).map_err(|e| e.to_string())?;
    }
    if decoded.len() > expected.len() {
        println!("Error: decoded {} extra moves", decoded.len() - expected.len());
    }
    Ok(())
}

fn run_policy(
    policy: MaskPolicy,
    start: &GameState,
    moves: &[Move],
    iterations: usize,
) -> Result<PolicyRun, String> {
    let codec = StreamCodec::new(policy);
    let mut bits = BitString::new();
    let mut decoded = Vec::new();

    let timer = Instant::now();
    for _ in 0..iterations {
        bits = codec
            .encode_sequence(moves, start)
            .map_err(|e| format!("{policy:?} encode failed: {e}"))?;
        decoded = codec
            .decode_sequence_exact(&bits, start, moves.len())
            .map_err(|e| format!("{policy:?} decode failed: {e}"))?;
    }
    let elapsed = timer.elapsed();

    let correct = decoded == moves;
    if !correct {
        report_mismatch(start, moves, &decoded)?;
    }

    Ok(PolicyRun {
        policy,
        elapsed,
        bits,
        correct,
    })
}

fn main() -> Result<(), String> {
    let iterations = parse_arg_usize("--iterations", 100);
    let pgn_text = match parse_arg_string("--pgn") {
        Some(path) => fs::read_to_string(&path).map_err(|e| format!("cannot read {path}: {e}"))?,
        None => SAMPLE_PGN.to_owned(),
    };

    let game = read_pgn(&pgn_text)?;
    let moves = game.codec_moves();
    println!(
        "game: {} plies from {} ({iterations} iterations per policy)",
        moves.len(),
        game.initial_state.get_fen()
    );
    println!();

    let mut runs = Vec::with_capacity(MaskPolicy::ALL.len());
    for policy in MaskPolicy::ALL {
        let run = run_policy(policy, &game.initial_state, &moves, iterations)?;
        println!("policy: {:?}", run.policy);
        println!("Encoded: {}", run.bits);
        println!("Correct decoding: {}", run.correct);
        println!();
        runs.push(run);
    }

    let baseline = runs
        .iter()
        .find(|run| run.policy == MaskPolicy::Geometric)
        .ok_or("geometric baseline missing")?;
    let baseline_secs = baseline.elapsed.as_secs_f64().max(f64::EPSILON);
    let baseline_bits = baseline.bits.len().max(1) as f64;

    for run in &runs {
        println!("policy: {:?}", run.policy);
        println!("Time: {:.3} seconds", run.elapsed.as_secs_f64());
        println!("Bits used: {}", run.bits.len());
        println!(
            "Time ratio to baseline: {:.3}",
            run.elapsed.as_secs_f64() / baseline_secs
        );
        println!(
            "Bits used ratio to baseline: {:.3}",
            run.bits.len() as f64 / baseline_bits
        );
        println!();
    }

    if runs.iter().all(|run| run.correct) {
        Ok(())
    } else {
        Err("round trip failed for at least one policy".to_owned())
    }
}
