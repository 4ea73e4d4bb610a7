use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use crate::ai::{GameRng, MoveSelector, moves_or_pass, seeded_rng};
use crate::board::{Board, CORNERS};
use crate::error::ReversiError;
use crate::types::{Player, Position};

/// Why the heuristic player picked a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Winning,
    Blocking,
    Corner,
    MostFlips,
}

/// Single-ply player that checks each legal move in order for a win, a block,
/// or a corner, and otherwise keeps the move capturing the most discs.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy {
    rng: GameRng,
}

impl HeuristicStrategy {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(seeded_rng(seed))
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    pub fn choose(
        &mut self,
        board: &Board,
        player: Player,
    ) -> Result<(Position, Reason), ReversiError> {
        let moves = moves_or_pass(board, player)?;

        // Fallback when no move captures anything.
        let mut best_move = *moves
            .choose(&mut self.rng)
            .ok_or(ReversiError::NoValidMoves { player })?;
        let mut max_flips = 0;

        for &mv in &moves {
            if wins_after(board, mv, player, player) {
                return Ok((mv, Reason::Winning));
            }
            if wins_after(board, mv, player, player.opponent()) {
                return Ok((mv, Reason::Blocking));
            }
            if CORNERS.contains(&mv) {
                return Ok((mv, Reason::Corner));
            }

            let flips = board.count_flips(mv, player);
            if flips > max_flips {
                max_flips = flips;
                best_move = mv;
            }
        }

        Ok((best_move, Reason::MostFlips))
    }
}

impl MoveSelector for HeuristicStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<Position, ReversiError> {
        let (mv, reason) = self.choose(board, player)?;
        debug!(%mv, ?reason, "heuristic move");
        Ok(mv)
    }
}

/// Won position for `player`: a full board with the majority of discs,
/// or an opponent with no discs left at any point.
pub fn check_win(board: &Board, player: Player) -> bool {
    let own = board.count(player);
    let opp = board.count(player.opponent());

    if own as usize + opp as usize == 64 && own > opp {
        return true;
    }
    opp == 0
}

/// Plays `mv` for `mover` on a copy and asks whether `judge` has then won.
/// A move that cannot be played counts as not winning.
fn wins_after(board: &Board, mv: Position, mover: Player, judge: Player) -> bool {
    let mut next = *board;
    match next.make_move(mv, mover) {
        Ok(()) => check_win(&next, judge),
        Err(_) => false,
    }
}
