use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use ai::{MoveSelector, Strategy};
pub use board::Board;
pub use config::{Difficulty, GameConfig};
pub use error::{ParseError, ReversiError};
pub use game::Game;
pub use types::{Cell, Outcome, Player, Position, Score};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
