//! 指し手の合法性判定と適用
//!
//! 1手番の指し手は、最後以外の線分が全て箱を完成させ、
//! 最後の線分は「終局させる」か「箱を完成させない」かのどちらかを満たす。

mod apply;
mod legality;

pub use apply::{MoveOutcome, apply_move};
