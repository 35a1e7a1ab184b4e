//! The fixed action space: every move any piece could make on an empty board.
//!
//! Actions are ordered by origin square, then destination square, with the
//! untagged move first and its knight, bishop and rook underpromotions after
//! it. The order never depends on a position, so an action's index is a
//! stable id.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::codec::codec_move::{Move, Underpromotion};
use crate::game_state::chess_types::{square_file, square_rank, squares_of, Square};
use crate::moves::geometric_table::GeometricAttackTable;

/// Ranks a pawn-like advance onto a back rank may cross, as (from, to).
const PROMOTION_RANK_PAIRS: [(u8, u8); 2] = [(6, 7), (1, 0)];

static STANDARD_CATALOGUE: OnceLock<ActionCatalogue> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct ActionCatalogue {
    actions: Vec<Move>,
    index: HashMap<Move, usize>,
}

impl ActionCatalogue {
    pub fn new(table: &GeometricAttackTable) -> Self {
        let actions = enumerate_actions(table);
        let index = actions
            .iter()
            .enumerate()
            .map(|(i, mv)| (*mv, i))
            .collect();
        Self { actions, index }
    }

    /// Catalogue over the standard table, built on first use.
    pub fn standard() -> &'static Self {
        STANDARD_CATALOGUE.get_or_init(|| Self::new(GeometricAttackTable::standard()))
    }

    #[inline]
    pub fn actions(&self) -> &[Move] {
        &self.actions
    }

    #[inline]
    pub fn action_space_size(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn action_index_of(&self, mv: &Move) -> Option<usize> {
        self.index.get(mv).copied()
    }

    #[inline]
    pub fn move_at_index(&self, index: usize) -> Option<Move> {
        self.actions.get(index).copied()
    }
}

pub fn enumerate_actions(table: &GeometricAttackTable) -> Vec<Move> {
    let mut actions = Vec::with_capacity(2048);
    for from in 0..64u8 {
        for to in squares_of(table.destinations(from)) {
            actions.push(Move::new(from, to));
            if is_promotion_eligible(from, to) {
                actions.extend(
                    Underpromotion::ALL
                        .iter()
                        .map(|&piece| Move::with_promotion(from, to, piece)),
                );
            }
        }
    }
    actions
}

/// A one-rank advance onto the back rank, straight or diagonal.
pub fn is_promotion_eligible(from: Square, to: Square) -> bool {
    let ranks = (square_rank(from), square_rank(to));
    PROMOTION_RANK_PAIRS.contains(&ranks) && square_file(from).abs_diff(square_file(to)) <= 1
}

/// (8 straight + 7 + 7 diagonal advances) x 3 pieces x 2 colors.
pub const fn underpromotion_action_space_size() -> usize {
    (8 + 7 + 7) * Underpromotion::ALL.len() * 2
}

/// Action-space size from table popcounts, without enumerating.
pub fn counted_action_space_size(table: &GeometricAttackTable) -> usize {
    let base: u32 = (0..64u8)
        .map(|from| table.destinations(from).count_ones())
        .sum();
    base as usize + underpromotion_action_space_size()
}

/// Size of the standard catalogue.
pub fn action_space_size() -> usize {
    ActionCatalogue::standard().action_space_size()
}
