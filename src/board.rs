use std::fmt;

use crate::error::ReversiError;
use crate::types::{BOARD_SIZE, Cell, Player, Position, Score};

const SIZE: usize = BOARD_SIZE as usize;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 7),
    Position::new(7, 0),
    Position::new(7, 7),
];

/// Reversi board state as a fixed 8x8 grid. Copying it yields an independent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;
        Self { cells }
    }

    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Returns `None` when the coordinate is off the board.
    pub fn cell_value(&self, row: u8, col: u8) -> Option<Cell> {
        self.at(row as i32, col as i32)
    }

    /// Checks whether `player` may place a disc at `pos`.
    pub fn is_valid_move(&self, pos: Position, player: Player) -> bool {
        if self.cell_value(pos.row, pos.col) != Some(Cell::Empty) {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.captured_run(pos, player, dr, dc).is_some())
    }

    /// Places one disc and flips captured discs.
    pub fn make_move(&mut self, pos: Position, player: Player) -> Result<(), ReversiError> {
        if !self.is_valid_move(pos, player) {
            return Err(ReversiError::InvalidMove { position: pos });
        }

        self.cells[pos.row as usize][pos.col as usize] = player.into();
        self.flip_pieces(pos, player);
        Ok(())
    }

    /// Number of opponent discs a disc of `player` at `pos` would capture.
    pub fn count_flips(&self, pos: Position, player: Player) -> usize {
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| self.captured_run(pos, player, dr, dc))
            .sum()
    }

    /// All legal moves for `player` in row-major order.
    pub fn valid_moves(&self, player: Player) -> Vec<Position> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.is_valid_move(pos, player))
            .collect()
    }

    pub fn has_valid_move(&self, player: Player) -> bool {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .any(|pos| self.is_valid_move(pos, player))
    }

    pub fn count(&self, player: Player) -> u8 {
        let target = Cell::from(player);
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count() as u8
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.count(Player::Black),
            white: self.count(Player::White),
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Printable symbols in row-major order.
    pub fn to_symbols(&self) -> Vec<char> {
        self.cells.iter().flatten().map(|cell| cell.symbol()).collect()
    }

    /// Recolors every run closed by `player`; expects the disc at `pos` to be placed already.
    fn flip_pieces(&mut self, pos: Position, player: Player) {
        for (dr, dc) in DIRECTIONS {
            let Some(len) = self.captured_run(pos, player, dr, dc) else {
                continue;
            };

            let (mut r, mut c) = (pos.row as i32, pos.col as i32);
            for _ in 0..len {
                r += dr;
                c += dc;
                self.cells[r as usize][c as usize] = player.into();
            }
        }
    }

    /// Length of the opponent run starting next to `pos` in direction `(dr, dc)`,
    /// if it is non-empty and closed by a disc of `player`.
    fn captured_run(&self, pos: Position, player: Player, dr: i32, dc: i32) -> Option<usize> {
        let own = Cell::from(player);
        let opp = Cell::from(player.opponent());
        let mut r = pos.row as i32 + dr;
        let mut c = pos.col as i32 + dc;
        let mut len = 0;

        while let Some(cell) = self.at(r, c) {
            if cell == opp {
                len += 1;
            } else if cell == own && len > 0 {
                return Some(len);
            } else {
                return None;
            }

            r += dr;
            c += dc;
        }

        None
    }

    fn at(&self, row: i32, col: i32) -> Option<Cell> {
        if in_bounds(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/ |")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {} |", (b'A' + col) as char)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} |", row + 1)?;
            for cell in cells {
                write!(f, " {} |", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..SIZE as i32).contains(&row) && (0..SIZE as i32).contains(&col)
}

/// Builds a board from eight rows of `X`, `O` and `.`.
#[cfg(test)]
pub(crate) fn board_from_diagram(rows: [&str; 8]) -> Board {
    let mut cells = [[Cell::Empty; SIZE]; SIZE];
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), SIZE, "row {r} must have 8 cells");
        for (c, ch) in line.chars().enumerate() {
            cells[r][c] = match ch {
                'X' => Cell::Black,
                'O' => Cell::White,
                '.' => Cell::Empty,
                other => panic!("unexpected cell '{other}'"),
            };
        }
    }
    Board::from_cells(cells)
}
