use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use prismatch_core::{Coord, GameConfig};
use serde::{Deserialize, Serialize};

/// Contents of the optional `--config` file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,
    pub seed: Option<u64>,
    /// Entries printed after a finished game.
    pub leaderboard_size: Option<usize>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Applies command line overrides, then clamps the game into supported bounds.
    pub fn with_overrides(mut self, size: Option<Coord>, moves: Option<u16>, seed: Option<u64>) -> Self {
        if let Some(size) = size {
            self.game.size = size;
        }
        if let Some(moves) = moves {
            self.game.moves = moves;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.game = self.game.clamped();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::parse(
            r#"
            seed = 17

            [game]
            moves = 12

            [game.scoring]
            combo_bonus = 8
            "#,
        )
        .unwrap();

        assert_eq!(settings.seed, Some(17));
        assert_eq!(settings.game.size, GameConfig::DEFAULT_SIZE);
        assert_eq!(settings.game.moves, 12);
        assert_eq!(settings.game.scoring.points_per_cell, 10);
        assert_eq!(settings.game.scoring.combo_bonus, 8);
    }

    #[test]
    fn overrides_win_and_get_clamped() {
        let settings = Settings::parse("seed = 1\n[game]\nsize = 6\n")
            .unwrap()
            .with_overrides(Some(200), Some(0), None);

        assert_eq!(settings.game.size, GameConfig::MAX_SIZE);
        assert_eq!(settings.game.moves, 1);
        assert_eq!(settings.seed, Some(1));
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Settings::parse("[game]\nsize = \"big\"").is_err());
    }
}
