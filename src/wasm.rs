use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;

/// Game handle exported to JavaScript.
#[wasm_bindgen]
pub struct ReversiGame {
    game: Game,
}

#[wasm_bindgen]
impl ReversiGame {
    /// Accepts a `GameConfig`-shaped object, or nothing for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ReversiGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        Ok(Self {
            game: config.into_game(),
        })
    }

    /// 64 symbols in row-major order.
    pub fn board(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.board().to_symbols())
    }

    #[wasm_bindgen(js_name = boardText)]
    pub fn board_text(&self) -> String {
        self.game.board().to_string()
    }

    #[wasm_bindgen(js_name = cellValue)]
    pub fn cell_value(&self, row: u8, col: u8) -> Option<String> {
        self.game
            .cell_value(row, col)
            .map(|cell| cell.symbol().to_string())
    }

    pub fn score(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.score())
    }

    #[wasm_bindgen(js_name = validHumanMoves)]
    pub fn valid_human_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.valid_human_moves())
    }

    #[wasm_bindgen(js_name = validComputerMoves)]
    pub fn valid_computer_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.valid_computer_moves())
    }

    #[wasm_bindgen(js_name = isValidHumanMove)]
    pub fn is_valid_human_move(&self, row: u8, col: u8) -> bool {
        self.game.is_valid_human_move(row, col)
    }

    #[wasm_bindgen(js_name = isValidComputerMove)]
    pub fn is_valid_computer_move(&self, row: u8, col: u8) -> bool {
        self.game.is_valid_computer_move(row, col)
    }

    #[wasm_bindgen(js_name = playHumanMove)]
    pub fn play_human_move(&mut self, row: u8, col: u8) -> Result<(), JsError> {
        self.game.play_human_move(row, col)?;
        Ok(())
    }

    /// Returns the `{ row, col }` played; throws when the computer has to pass.
    #[wasm_bindgen(js_name = playComputerMove)]
    pub fn play_computer_move(&mut self) -> Result<JsValue, JsError> {
        let pos = self.game.play_computer_move()?;
        to_js(&pos)
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.to_game_state())
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.to_game_result())
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}
