//! Board-independent move shape shared by the codec and the action catalogue.

use std::fmt;
use std::str::FromStr;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// A promotion to anything but a queen. Queen promotion is the untagged move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Underpromotion {
    Knight,
    Bishop,
    Rook,
}

impl Underpromotion {
    pub const ALL: [Underpromotion; 3] = [
        Underpromotion::Knight,
        Underpromotion::Bishop,
        Underpromotion::Rook,
    ];

    pub const fn piece_kind(self) -> PieceKind {
        match self {
            Underpromotion::Knight => PieceKind::Knight,
            Underpromotion::Bishop => PieceKind::Bishop,
            Underpromotion::Rook => PieceKind::Rook,
        }
    }

    /// `None` for kinds that are not underpromotions (queen included).
    pub const fn from_piece_kind(kind: PieceKind) -> Option<Self> {
        match kind {
            PieceKind::Knight => Some(Underpromotion::Knight),
            PieceKind::Bishop => Some(Underpromotion::Bishop),
            PieceKind::Rook => Some(Underpromotion::Rook),
            _ => None,
        }
    }

    const fn uci_char(self) -> char {
        match self {
            Underpromotion::Knight => 'n',
            Underpromotion::Bishop => 'b',
            Underpromotion::Rook => 'r',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Underpromotion>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: Underpromotion) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Strip the engine details; a queen promotion becomes the untagged move.
    pub fn from_description(mv: MoveDescription) -> Self {
        Self {
            from: mv.from(),
            to: mv.to(),
            promotion: mv.promotion_piece().and_then(Underpromotion::from_piece_kind),
        }
    }

    /// Whether an engine move is the concrete realisation of this move.
    pub fn matches(&self, mv: MoveDescription) -> bool {
        *self == Self::from_description(mv)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_to_algebraic(self.from).map_err(|_| fmt::Error)?;
        let to = square_to_algebraic(self.to).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.uci_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = String;

    /// UCI notation; an explicit `q` suffix maps to the untagged move.
    fn from_str(uci: &str) -> Result<Self, Self::Err> {
        if !uci.is_ascii() || !(4..=5).contains(&uci.len()) {
            return Err(format!("Invalid UCI move: {uci}"));
        }

        let from = algebraic_to_square(&uci[0..2])?;
        let to = algebraic_to_square(&uci[2..4])?;
        let promotion = match uci[4..].chars().next() {
            None | Some('q') => None,
            Some('n') => Some(Underpromotion::Knight),
            Some('b') => Some(Underpromotion::Bishop),
            Some('r') => Some(Underpromotion::Rook),
            Some(other) => return Err(format!("Invalid promotion piece '{other}' in {uci}")),
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}
