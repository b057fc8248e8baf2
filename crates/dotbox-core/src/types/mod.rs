//! 基本型モジュール
//!
//! ルールエンジンで使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Player
//!
//! Line ← BoxCoord（四辺を Line で表す）
//!   ↓
//! Move（Line の列）
//! ```

mod box_coord;
mod line;
mod moves;
mod player;

pub use box_coord::BoxCoord;
pub use line::{Line, Orientation};
pub use moves::{Move, MoveLines};
pub use player::Player;
