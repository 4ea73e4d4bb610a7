use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use crate::ai::{GameRng, MoveSelector, moves_or_pass, seeded_rng};
use crate::board::Board;
use crate::error::ReversiError;
use crate::types::{Player, Position};

/// Uniform choice among the legal moves.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(seeded_rng(seed))
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveSelector for RandomStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, ReversiError> {
        let moves = moves_or_pass(board, player)?;
        let mv = *moves
            .choose(&mut self.rng)
            .ok_or(ReversiError::NoValidMoves { player })?;

        debug!(%mv, candidates = moves.len(), "random move");
        Ok(mv)
    }
}
