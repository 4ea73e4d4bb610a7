use tracing::{debug, instrument, warn};
use web_time::Instant;

use crate::ai::eval::evaluate;
use crate::ai::{MoveSelector, moves_or_pass};
use crate::board::Board;
use crate::error::ReversiError;
use crate::types::{Player, Position};

pub const DEFAULT_DEPTH: u8 = 3;
const MIN_SCORE: i32 = i32::MIN;
const MAX_SCORE: i32 = i32::MAX;

/// Plain depth-limited minimax, no pruning.
///
/// Every root move is scored by searching `depth` further plies with the
/// opponent to move, so a full decision looks `depth + 1` plies ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxStrategy {
    depth: u8,
}

impl MinimaxStrategy {
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl MoveSelector for MinimaxStrategy {
    #[instrument(skip(self, board), fields(depth = self.depth))]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, ReversiError> {
        let start_time = Instant::now();
        let moves = moves_or_pass(board, player)?;

        let mut best_move = moves[0];
        let mut best_score = MIN_SCORE;

        for mv in moves {
            let mut next = *board;
            if let Err(err) = next.make_move(mv, player) {
                warn!(%err, "skipping root move");
                continue;
            }

            let score = minimax(&next, self.depth, false, player);
            // Strict comparison keeps the first move among equals.
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        debug!(
            %best_move,
            best_score,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "minimax search finished"
        );
        Ok(best_move)
    }
}

/// Scores `board` for `root`. The side to move is `root` when `maximizing`,
/// otherwise its opponent.
pub fn minimax(board: &Board, depth: u8, maximizing: bool, root: Player) -> i32 {
    if depth == 0 {
        return evaluate(board, root);
    }

    let mover = if maximizing { root } else { root.opponent() };
    let moves = board.valid_moves(mover);
    if moves.is_empty() {
        return evaluate(board, root);
    }

    let scores = moves.into_iter().filter_map(|mv| {
        let mut next = *board;
        match next.make_move(mv, mover) {
            Ok(()) => Some(minimax(&next, depth - 1, !maximizing, root)),
            Err(err) => {
                warn!(%err, "skipping unplayable move during search");
                None
            }
        }
    });

    if maximizing {
        scores.fold(MIN_SCORE, i32::max)
    } else {
        scores.fold(MAX_SCORE, i32::min)
    }
}
