//! 手番（Player）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 手番（赤/青）。赤が先手。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    Red = 0,
    Blue = 1,
}

impl Player {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 両手番（Red, Blue の順）
    pub const ALL: [Player; Player::NUM] = [Player::Red, Player::Blue];

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 盤面表示用の1文字
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Blue => 'B',
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => f.write_str("red"),
            Player::Blue => f.write_str("blue"),
        }
    }
}
