use derive_more::{Display, Error};

use crate::types::{Player, Position};

/// Recoverable outcomes of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ReversiError {
    /// Placement is out of bounds, occupied, or captures nothing.
    #[display("invalid move at {position}")]
    InvalidMove { position: Position },
    /// The acting side has no legal move and must pass.
    #[display("no valid moves for {player}, skipping its turn")]
    NoValidMoves { player: Player },
}

/// Failures while parsing configuration values or move notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    #[display("unknown difficulty '{name}' (expected easy, medium or hard)")]
    UnknownDifficulty { name: String },
    #[display("unknown player '{name}' (expected X, O, black or white)")]
    UnknownPlayer { name: String },
    #[display("invalid coordinate '{input}' (use a letter and a number, e.g. D3)")]
    InvalidCoordinate { input: String },
}
