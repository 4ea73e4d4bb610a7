use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

pub const BOARD_SIZE: u8 = 8;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[serde(alias = "X", alias = "x")]
    Black,
    #[serde(alias = "O", alias = "o")]
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Printable symbol: 'X' for black, 'O' for white.
    pub fn symbol(self) -> char {
        Cell::from(self).symbol()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => write!(f, "black ('X')"),
            Self::White => write!(f, "white ('O')"),
        }
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "black" => Ok(Self::Black),
            "o" | "white" => Ok(Self::White),
            _ => Err(ParseError::UnknownPlayer {
                name: s.to_string(),
            }),
        }
    }
}

/// State of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Black => 'X',
            Self::White => 'O',
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Player::Black),
            Self::White => Some(Player::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Self::Black,
            Player::White => Self::White,
        }
    }
}

/// A board coordinate, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

/// Formats as column letter plus 1-based row, e.g. `D3` for (2, 3).
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidCoordinate {
            input: s.to_string(),
        };

        let bytes = s.trim().as_bytes();
        let [letter, digit] = bytes else {
            return Err(invalid());
        };

        let col = letter.to_ascii_uppercase().wrapping_sub(b'A');
        let row = digit.wrapping_sub(b'1');
        let pos = Position::new(row, col);
        if pos.is_on_board() {
            Ok(pos)
        } else {
            Err(invalid())
        }
    }
}

/// Disc counts per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Score {
    pub fn of(&self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    pub fn discs(&self) -> u8 {
        self.black + self.white
    }

    pub fn empty(&self) -> u8 {
        BOARD_SIZE * BOARD_SIZE - self.discs()
    }
}

/// Final standing once no side can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 64 printable symbols in row-major order.
    pub board: Vec<char>,
    pub human: char,
    pub computer: char,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    pub valid_human_moves: Vec<Position>,
    pub last_move: Option<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` on a draw.
    pub winner: Option<char>,
    pub black_count: u8,
    pub white_count: u8,
}
