use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::ai::Strategy;
use crate::ai::search::DEFAULT_DEPTH;
use crate::error::ParseError;
use crate::game::Game;
use crate::types::Player;

/// Computer strength chosen by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Random legal moves.
    #[default]
    Easy,
    /// Minimax search.
    Medium,
    /// Single-ply heuristic player.
    Hard,
}

impl Difficulty {
    pub fn strategy(self, seed: u64, search_depth: u8) -> Strategy {
        match self {
            Self::Easy => Strategy::random(seed),
            Self::Medium => Strategy::minimax(search_depth),
            Self::Hard => Strategy::heuristic(seed),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseError::UnknownDifficulty {
                name: s.to_string(),
            }),
        }
    }
}

/// Settings resolved by the presentation layer before a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub human: Player,
    /// Seed for the random and heuristic players; taken from the clock when absent.
    pub seed: Option<u64>,
    pub search_depth: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            human: Player::Black,
            seed: None,
            search_depth: DEFAULT_DEPTH,
        }
    }
}

impl GameConfig {
    pub fn into_game(self) -> Game {
        let seed = self.seed.unwrap_or_else(clock_seed);
        let strategy = self.difficulty.strategy(seed, self.search_depth);

        info!(
            difficulty = %self.difficulty,
            human = ?self.human,
            seed,
            strategy = strategy.name(),
            "starting game"
        );
        Game::new(self.human, strategy)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_names_map_to_strategies() {
        let cases = [
            ("easy", "random"),
            ("Medium", "minimax"),
            (" HARD ", "heuristic"),
        ];

        for (name, strategy) in cases {
            let difficulty: Difficulty = name.parse().unwrap();
            assert_eq!(difficulty.strategy(1, 3).name(), strategy);
        }
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let err = "impossible".parse::<Difficulty>().unwrap_err();

        assert_eq!(
            err,
            ParseError::UnknownDifficulty {
                name: "impossible".to_string()
            }
        );
        assert!(err.to_string().contains("expected easy, medium or hard"));
    }

    #[test]
    fn difficulty_display_round_trips_through_from_str() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn config_builds_game_with_complementary_players() {
        let config = GameConfig {
            difficulty: Difficulty::Medium,
            human: Player::White,
            seed: Some(1),
            search_depth: 2,
        };

        let game = config.into_game();

        assert_eq!(game.human(), Player::White);
        assert_eq!(game.computer(), Player::Black);
        assert_eq!(game.strategy().name(), "minimax");
    }

    #[test]
    fn seeded_configs_play_identically() {
        let config = GameConfig {
            difficulty: Difficulty::Easy,
            seed: Some(99),
            ..GameConfig::default()
        };
        let mut first = config.into_game();
        let mut second = config.into_game();

        first.play_human_move(2, 3).unwrap();
        second.play_human_move(2, 3).unwrap();

        assert_eq!(first.play_computer_move(), second.play_computer_move());
    }

    #[test]
    fn default_config_is_easy_black_depth_three() {
        let config = GameConfig::default();

        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.human, Player::Black);
        assert_eq!(config.seed, None);
        assert_eq!(config.search_depth, 3);
        assert_eq!(config.into_game().strategy().name(), "random");
    }
}
