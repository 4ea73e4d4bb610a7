pub mod eval;
pub mod heuristic;
pub mod random;
pub mod search;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::Board;
use crate::error::ReversiError;
use crate::types::{Player, Position};

pub use heuristic::HeuristicStrategy;
pub use random::RandomStrategy;
pub use search::MinimaxStrategy;

/// Seedable randomness used by the random and heuristic players.
pub type GameRng = Xoshiro256PlusPlus;

pub fn seeded_rng(seed: u64) -> GameRng {
    GameRng::seed_from_u64(seed)
}

/// Picks the computer's move for a board snapshot.
///
/// Contract: the returned position is one of `board.valid_moves(player)`;
/// when that set is empty the call fails with `NoValidMoves`.
pub trait MoveSelector {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, ReversiError>;
}

/// The computer players a game can be configured with.
#[derive(Debug, Clone)]
pub enum Strategy {
    Random(RandomStrategy),
    Heuristic(HeuristicStrategy),
    Minimax(MinimaxStrategy),
}

impl Strategy {
    pub fn random(seed: u64) -> Self {
        Self::Random(RandomStrategy::new(seed))
    }

    pub fn heuristic(seed: u64) -> Self {
        Self::Heuristic(HeuristicStrategy::new(seed))
    }

    pub fn minimax(depth: u8) -> Self {
        Self::Minimax(MinimaxStrategy::new(depth))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Heuristic(_) => "heuristic",
            Self::Minimax(_) => "minimax",
        }
    }
}

impl MoveSelector for Strategy {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, ReversiError> {
        match self {
            Self::Random(s) => s.select_move(board, player),
            Self::Heuristic(s) => s.select_move(board, player),
            Self::Minimax(s) => s.select_move(board, player),
        }
    }
}

/// Legal moves for `player`, or the pass signal when there are none.
fn moves_or_pass(board: &Board, player: Player) -> Result<Vec<Position>, ReversiError> {
    let moves = board.valid_moves(player);
    if moves.is_empty() {
        Err(ReversiError::NoValidMoves { player })
    } else {
        Ok(moves)
    }
}
