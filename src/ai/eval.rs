use crate::board::{Board, CORNERS};
use crate::types::Player;

/// Corners can never be flipped back, so each one is worth this many discs.
pub const CORNER_WEIGHT: i32 = 10;

/// Scores a position from `player`'s perspective:
/// disc differential plus `CORNER_WEIGHT` per corner held, minus the same per corner lost.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let mut own = board.count(player) as i32;
    let mut opp = board.count(player.opponent()) as i32;

    for corner in CORNERS {
        match board
            .cell_value(corner.row, corner.col)
            .and_then(|cell| cell.player())
        {
            Some(owner) if owner == player => own += CORNER_WEIGHT,
            Some(_) => opp += CORNER_WEIGHT,
            None => {}
        }
    }

    own - opp
}
