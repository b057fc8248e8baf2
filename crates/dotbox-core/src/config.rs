//! 対局設定
//!
//! TOML で盤の大きさと先手を指定する。省略した項目は既定値。
//!
//! ```toml
//! size = 4
//! first_player = "blue"
//! ```

use crate::board::MAX_SIZE;
use crate::error::{BoardError, ConfigError};
use crate::game::Game;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// 既定の盤の大きさ
pub const DEFAULT_SIZE: i32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// 1辺の箱の数
    pub size: i32,
    /// 先手
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE, first_player: Player::Red }
    }
}

impl GameConfig {
    /// TOML 文字列から読み込み、値を検証する
    pub fn from_toml_str(s: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if !(1..=MAX_SIZE).contains(&self.size) {
            return Err(BoardError::InvalidSize(self.size));
        }
        Ok(())
    }

    /// この設定で新しい対局を始める
    pub fn new_game(&self) -> Result<Game, BoardError> {
        Game::new(self.size, self.first_player)
    }
}
