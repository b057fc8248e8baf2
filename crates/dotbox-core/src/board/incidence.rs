//! 線分と箱の接続判定
//!
//! 1本の線分は最大2つの箱（横線なら上下、縦線なら左右）の辺になる。
//! 新しく引く線分で完成する箱は、その2つのうち残り3辺が既に引かれているものだけ。

use super::LineSet;
use crate::types::{BoxCoord, Line};
use smallvec::SmallVec;

/// 新たに完成する箱の列（0〜2個）
pub type NewBoxes = SmallVec<[BoxCoord; 2]>;

/// `lines` に `line` を加えたときに新たに完成する箱を返す
///
/// `line` が既に `lines` にあれば何も完成しない（空を返す）。
/// 長さ1の軸平行線分でない場合も空。`lines` は変更しない。
pub fn new_boxes(lines: &LineSet, line: Line) -> NewBoxes {
    if lines.contains(&line) {
        return NewBoxes::new();
    }
    line.adjacent_boxes()
        .into_iter()
        .filter(|coord| {
            coord
                .edges()
                .is_some_and(|edges| edges.iter().all(|edge| *edge == line || lines.contains(edge)))
        })
        .collect()
}
