//! Error types for the rule engine
//!
//! 指し手の拒否・盤面の不整合・表記/設定の読み込み失敗を型で区別する。

use crate::types::{BoxCoord, Line, Player};

/// 不正な指し手
///
/// 判定は `Board::check_move` の順序（空 → 線分の範囲 → 重複 → 連続手 → 手番終了）で行い、
/// 最初に見つかった違反を返す。
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// 終局前の空の指し手
    #[error("Empty move while lines remain on the board")]
    EmptyMove,

    /// 盤外、または長さ1の軸平行線分でない
    #[error("Line {line} is not a unit segment on a {size}x{size} board")]
    MalformedLine { line: Line, size: i32 },

    /// 既に盤上にある線分
    #[error("Line {0} is already drawn")]
    AlreadyDrawn(Line),

    /// 指し手の中で同じ線分を2回引いた
    #[error("Line {0} appears twice in the move")]
    DuplicateLine(Line),

    /// 最後以外の線分が箱を完成させなかった
    #[error("Line #{index} ({line}) completes no box, so the move cannot continue")]
    ChainBroken { index: usize, line: Line },

    /// 最後の線分が箱を完成させたのに終局していない
    #[error("Line {line} completes a box, so the turn must continue")]
    TurnNotFinished { line: Line },
}

/// 盤面の不整合
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board size: {0} (expected 1..=1024)")]
    InvalidSize(i32),

    #[error("Line {line} is outside the {size}x{size} board")]
    LineOutOfRange { line: Line, size: i32 },

    #[error("Line {0} is not a unit axis-aligned segment")]
    NotUnitSegment(Line),

    /// 所有者がいるのに埋まっていない箱
    #[error("Box {coord} is claimed by {player} but not filled")]
    UnfilledClaim { player: Player, coord: BoxCoord },

    /// 両者が所有している箱
    #[error("Box {0} is claimed by both players")]
    DoubleClaim(BoxCoord),

    /// 埋まった箱の数と所有数が一致しない
    #[error("Box count mismatch: {filled} filled, {claimed} claimed")]
    UnaccountedBoxes { filled: usize, claimed: usize },
}

/// 表記の解析エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid point notation: {0}")]
    InvalidPoint(String),

    #[error("Invalid line notation: {0}")]
    InvalidLine(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// 設定の読み込みエラー
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Top-level error
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for rule engine operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
