use tracing::{debug, instrument};

use crate::ai::{MoveSelector, Strategy};
use crate::board::Board;
use crate::error::ReversiError;
use crate::types::{Cell, GameResult, GameState, Outcome, Player, Position, Score};

/// One human-versus-computer game.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    human: Player,
    computer: Player,
    strategy: Strategy,
    last_move: Option<Position>,
}

impl Game {
    #[instrument(skip(strategy), fields(strategy = strategy.name()))]
    pub fn new(human: Player, strategy: Strategy) -> Self {
        Self {
            board: Board::new(),
            human,
            computer: human.opponent(),
            strategy,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn computer(&self) -> Player {
        self.computer
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn cell_value(&self, row: u8, col: u8) -> Option<Cell> {
        self.board.cell_value(row, col)
    }

    pub fn valid_moves(&self, player: Player) -> Vec<Position> {
        self.board.valid_moves(player)
    }

    pub fn valid_human_moves(&self) -> Vec<Position> {
        self.valid_moves(self.human)
    }

    pub fn valid_computer_moves(&self) -> Vec<Position> {
        self.valid_moves(self.computer)
    }

    pub fn is_valid_move(&self, pos: Position, player: Player) -> bool {
        self.board.is_valid_move(pos, player)
    }

    pub fn is_valid_human_move(&self, row: u8, col: u8) -> bool {
        self.is_valid_move(Position::new(row, col), self.human)
    }

    pub fn is_valid_computer_move(&self, row: u8, col: u8) -> bool {
        self.is_valid_move(Position::new(row, col), self.computer)
    }

    /// Over once both sides would have to pass; the board need not be full.
    pub fn is_game_over(&self) -> bool {
        !self.board.has_valid_move(self.human) && !self.board.has_valid_move(self.computer)
    }

    #[instrument(skip(self), fields(player = ?self.human))]
    pub fn play_human_move(&mut self, row: u8, col: u8) -> Result<(), ReversiError> {
        let valid = self.valid_human_moves();
        if valid.is_empty() {
            return Err(ReversiError::NoValidMoves { player: self.human });
        }

        let pos = Position::new(row, col);
        if !valid.contains(&pos) {
            return Err(ReversiError::InvalidMove { position: pos });
        }

        self.apply_move(pos, self.human)
    }

    /// Lets the bound strategy move for the computer.
    /// `NoValidMoves` means the computer passes this turn.
    #[instrument(skip(self), fields(player = ?self.computer, strategy = self.strategy.name()))]
    pub fn play_computer_move(&mut self) -> Result<Position, ReversiError> {
        let pos = self.strategy.select_move(&self.board, self.computer)?;
        self.apply_move(pos, self.computer)?;
        Ok(pos)
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Standing by disc count; meaningful once the game is over.
    pub fn outcome(&self) -> Outcome {
        let score = self.score();
        if score.black > score.white {
            Outcome::Winner(Player::Black)
        } else if score.white > score.black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Draw
        }
    }

    pub fn to_game_state(&self) -> GameState {
        let score = self.score();
        GameState {
            board: self.board.to_symbols(),
            human: self.human.symbol(),
            computer: self.computer.symbol(),
            black_count: score.black,
            white_count: score.white,
            is_game_over: self.is_game_over(),
            valid_human_moves: self.valid_human_moves(),
            last_move: self.last_move,
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let score = self.score();
        GameResult {
            winner: match self.outcome() {
                Outcome::Winner(player) => Some(player.symbol()),
                Outcome::Draw => None,
            },
            black_count: score.black,
            white_count: score.white,
        }
    }

    fn apply_move(&mut self, pos: Position, player: Player) -> Result<(), ReversiError> {
        self.board.make_move(pos, player)?;
        self.last_move = Some(pos);

        let score = self.score();
        debug!(%pos, ?player, black = score.black, white = score.white, "move applied");
        Ok(())
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        self.board = board;
        self.last_move = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MoveSelector;
    use crate::board::board_from_diagram;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn game(human: Player) -> Game {
        Game::new(human, Strategy::random(5))
    }

    #[test]
    fn initial_state_is_correct() {
        let game = game(Player::Black);
        let state = game.to_game_state();

        assert_eq!(game.computer(), Player::White);
        assert_eq!(game.score(), Score { black: 2, white: 2 });
        assert_eq!(state.board.iter().filter(|&&s| s == ' ').count(), 60);
        assert_eq!(state.human, 'X');
        assert_eq!(state.computer, 'O');
        assert!(!state.is_game_over);
        assert_eq!(state.last_move, None);
        assert_eq!(game.valid_human_moves().len(), 4);
        assert_eq!(game.valid_computer_moves().len(), 4);
    }

    #[test]
    fn human_move_flips_exactly_one_disc() {
        let mut game = game(Player::Black);

        game.play_human_move(2, 3).unwrap();

        assert_eq!(game.cell_value(3, 3), Some(Cell::Black));
        assert_eq!(game.score(), Score { black: 4, white: 1 });
        assert_eq!(game.last_move(), Some(pos(2, 3)));
    }

    #[test]
    fn t02_illegal_human_move_returns_invalid_move() {
        let mut game = game(Player::Black);
        let before = *game.board();

        for (row, col) in [(0, 0), (3, 3), (9, 9)] {
            assert_eq!(
                game.play_human_move(row, col),
                Err(ReversiError::InvalidMove {
                    position: pos(row, col)
                })
            );
        }
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn t03_human_without_moves_must_pass() {
        let mut game = game(Player::Black);
        // Black cannot move, white can still take a1.
        let board = board_from_diagram([
            ".XOOOOOO", "OOOOOOOO", "OOOOOOOO", "OOOOOOOO", "OOOOOOOO", "OOOOOOOO", "OOOOOOOO",
            "OOOOOOOO",
        ]);
        game.set_board_for_test(board);

        assert_eq!(
            game.play_human_move(0, 0),
            Err(ReversiError::NoValidMoves {
                player: Player::Black
            })
        );
        assert_eq!(*game.board(), board);
        assert!(!game.is_game_over());
        assert_eq!(game.valid_computer_moves(), vec![pos(0, 0)]);
    }

    #[test]
    fn t04_game_is_over_only_when_both_sides_must_pass() {
        let mut game = game(Player::Black);
        let board = board_from_diagram([
            ".XXXXXXX", "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "XXXXXXXX",
            "XXXXXXXX",
        ]);
        game.set_board_for_test(board);

        assert!(game.is_game_over());
        assert!(!game.board().is_full());
        assert_eq!(game.outcome(), Outcome::Winner(Player::Black));
        assert_eq!(
            game.play_computer_move(),
            Err(ReversiError::NoValidMoves {
                player: Player::White
            })
        );
    }

    #[test]
    fn t05_computer_move_fills_board_and_ends_game() {
        let mut game = Game::new(Player::Black, Strategy::heuristic(1));
        game.set_board_for_test(board_from_diagram([
            ".XOOOOOO", "OOOOOOOO", "OOOOOOOO", "OOOOOOOO", "OOOOOOOO", "OOOOOOOO", "OOOOOOOO",
            "OOOOOOOO",
        ]));

        assert_eq!(game.play_computer_move(), Ok(pos(0, 0)));

        let result = game.to_game_result();
        assert!(game.is_game_over());
        assert_eq!(result.winner, Some('O'));
        assert_eq!(result.black_count, 0);
        assert_eq!(result.white_count, 64);
    }

    #[test]
    fn computer_plays_white_when_human_is_black() {
        let mut game = game(Player::Black);
        game.play_human_move(2, 3).unwrap();

        let mv = game.play_computer_move().unwrap();

        assert_eq!(game.cell_value(mv.row, mv.col), Some(Cell::White));
        assert_eq!(game.score().discs(), 6);
    }

    #[test]
    fn computer_opens_when_human_is_white() {
        let mut game = Game::new(Player::White, Strategy::minimax(1));

        assert_eq!(game.play_computer_move(), Ok(pos(2, 3)));
        assert_eq!(game.score(), Score { black: 4, white: 1 });
    }

    #[test]
    fn rebinding_strategy_changes_computer_player() {
        let mut game = game(Player::Black);
        game.set_strategy(Strategy::minimax(2));

        assert_eq!(game.strategy().name(), "minimax");
    }

    #[test]
    fn validity_probes_do_not_mutate() {
        let game = game(Player::White);
        let before = *game.board();

        assert!(game.is_valid_computer_move(2, 3));
        assert!(!game.is_valid_computer_move(2, 4));
        assert!(game.is_valid_human_move(2, 4));
        assert!(!game.is_valid_human_move(0, 0));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn disc_count_grows_by_one_per_move_until_the_end() {
        let mut game = Game::new(Player::Black, Strategy::heuristic(11));
        let mut human_side = Strategy::random(12);
        let mut discs = game.score().discs();

        while !game.is_game_over() {
            let human_move = human_side.select_move(game.board(), Player::Black);
            if let Ok(mv) = human_move {
                game.play_human_move(mv.row, mv.col).unwrap();
                discs += 1;
                assert_eq!(game.score().discs(), discs);
            }

            match game.play_computer_move() {
                Ok(_) => discs += 1,
                Err(err) => assert_eq!(
                    err,
                    ReversiError::NoValidMoves {
                        player: Player::White
                    }
                ),
            }
            let score = game.score();
            assert_eq!(score.discs(), discs);
            assert_eq!(score.discs() + score.empty(), 64);
        }

        assert!(game.valid_human_moves().is_empty());
        assert!(game.valid_computer_moves().is_empty());
    }
}
