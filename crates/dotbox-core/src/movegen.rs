//! 線分の列挙
//!
//! n×n の盤に引ける全ての線分を生成する。
//! 終局判定（`2·n·(n+1)` 本）と、未着手の線分の列挙に使う。

use crate::board::{LineSet, MAX_SIZE};
use crate::types::Line;

/// size×size の盤に引ける線分の総数 `2·size·(size+1)`
///
/// 横線 size·(size+1) 本と縦線 size·(size+1) 本。
/// 盤として作れない大きさ（`1..=MAX_SIZE` の外）なら 0。
#[inline]
pub fn total_lines(size: i32) -> usize {
    if !(1..=MAX_SIZE).contains(&size) {
        return 0;
    }
    let n = size as usize;
    2 * n * (n + 1)
}

/// 全ての線分を正規形で生成する
///
/// 順序: 各箱の下辺、各箱の左辺、右端の縦線、上端の横線。
/// `total_lines` が 0 になる大きさでは空。
pub fn generate_all_lines(size: i32) -> LineSet {
    let mut lines = LineSet::with_capacity(total_lines(size));
    let n = if total_lines(size) == 0 { 0 } else { size };

    lines.extend((0..n).flat_map(|x| (0..n).map(move |y| Line::horizontal(x, y))));
    lines.extend((0..n).flat_map(|x| (0..n).map(move |y| Line::vertical(x, y))));
    lines.extend((0..n).map(|y| Line::vertical(n, y)));
    lines.extend((0..n).map(|x| Line::horizontal(x, n)));

    debug_assert_eq!(lines.len(), total_lines(size));
    lines
}
