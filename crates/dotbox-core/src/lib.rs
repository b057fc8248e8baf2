//! # dotbox-core
//!
//! 「Dots and Boxes」（点と箱）のルールエンジン。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Line, BoxCoord, Player, Move）
//! - `board`: 盤面表現と箱の完成判定
//! - `movegen`: 全ての線分の列挙
//! - `moves`: 指し手の合法性判定と適用
//! - `game`: 手番と棋譜を管理する対局
//! - `notation`: 線分・指し手のテキスト表記
//! - `json`: 盤面のJSON表現
//! - `config`: 対局設定（TOML）
//! - `error`: エラー型
//!

// 基本型
pub mod types;

// 盤面表現
pub mod board;

// 線分の列挙
pub mod movegen;

// 指し手の判定と適用
pub mod moves;

// 対局
pub mod game;

// 入出力
pub mod config;
pub mod json;
pub mod notation;

pub mod error;

pub use board::{Board, LineSet, MAX_SIZE, Outcome, new_boxes};
pub use config::GameConfig;
pub use error::{BoardError, ConfigError, Error, MoveError, NotationError, Result};
pub use game::Game;
pub use movegen::{generate_all_lines, total_lines};
pub use moves::{MoveOutcome, apply_move};
pub use types::{BoxCoord, Line, Move, Orientation, Player};
