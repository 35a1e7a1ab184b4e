//! Action catalogue tool.
//!
//! Usage:
//! `cargo run --bin action_space -- count`
//! `cargo run --bin action_space -- export actions.txt`
//! `cargo run --bin action_space -- export actions.txt --allow-overwrite`

use std::path::Path;

use chess_action_space::action_space::action_catalogue::{
    counted_action_space_size, underpromotion_action_space_size, ActionCatalogue,
};
use chess_action_space::action_space::action_export::export_actions;
use chess_action_space::moves::geometric_table::GeometricAttackTable;

const USAGE: &str = "usage: action_space count | action_space export <path> [--allow-overwrite]";

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn count() -> Result<(), String> {
    let enumerated = ActionCatalogue::standard().action_space_size();
    let counted = counted_action_space_size(GeometricAttackTable::standard());
    if enumerated != counted {
        return Err(format!(
            "enumerated {enumerated} actions but table popcounts give {counted}"
        ));
    }
    println!("action space size: {enumerated}");
    println!(
        "underpromotion action space size: {}",
        underpromotion_action_space_size()
    );
    Ok(())
}

fn export(path: &str, allow_overwrite: bool) -> Result<(), String> {
    let written = export_actions(Path::new(path), allow_overwrite)
        .map_err(|e| format!("cannot export to {path}: {e}"))?;
    println!("wrote {written} actions to {path}");
    Ok(())
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("count") | None => count(),
        Some("export") => {
            let path = args.get(1).ok_or(USAGE)?;
            export(path, has_flag(&args, "--allow-overwrite"))
        }
        Some(other) => Err(format!("unknown command {other}\n{USAGE}")),
    }
}
