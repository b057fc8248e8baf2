//! 盤面（Board）
//!
//! 盤の大きさ・引かれた線分・各プレイヤーが取った箱を保持する。
//! 状態を変更するのは `moves` モジュールの適用処理だけで、ここにあるのは読み取り専用の問い合わせ。

mod incidence;
mod line_set;
mod validation;

pub use incidence::{NewBoxes, new_boxes};
pub use line_set::LineSet;

use crate::error::BoardError;
use crate::movegen::{generate_all_lines, total_lines};
use crate::types::{BoxCoord, Line, Player};
use std::collections::BTreeSet;
use std::fmt;

/// 盤の大きさの上限
///
/// 線分の総数 `2·size·(size+1)` を確保できる範囲に収める。
pub const MAX_SIZE: i32 = 1024;

/// 対局の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// まだ引ける線分がある
    InProgress,
    Win(Player),
    Draw,
}

/// n×n の箱からなる盤面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// 1辺の箱の数（>= 1）
    size: i32,
    /// 引かれた線分
    lines: LineSet,
    /// プレイヤーごとの取った箱 [player]
    owners: [BTreeSet<BoxCoord>; Player::NUM],
}

impl Board {
    /// 線分のない盤面
    pub fn new(size: i32) -> Result<Board, BoardError> {
        Board::from_parts(size, LineSet::new(), BTreeSet::new(), BTreeSet::new())
    }

    /// 線分を指定して生成（所有者はなし）
    ///
    /// 線分は正規形に揃えて格納する。範囲外の線分もそのまま保持し、検出は `validate` で行う。
    pub fn from_lines<I>(size: i32, lines: I) -> Result<Board, BoardError>
    where
        I: IntoIterator<Item = Line>,
    {
        Board::from_parts(size, lines.into_iter().collect(), BTreeSet::new(), BTreeSet::new())
    }

    /// 全ての要素を指定して生成
    pub fn from_parts(
        size: i32,
        lines: LineSet,
        red_boxes: BTreeSet<BoxCoord>,
        blue_boxes: BTreeSet<BoxCoord>,
    ) -> Result<Board, BoardError> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Board { size, lines, owners: [red_boxes, blue_boxes] })
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// 引かれた線分（引かれた順）
    #[inline]
    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    #[inline]
    pub fn has_line(&self, line: Line) -> bool {
        self.lines.contains(&line)
    }

    #[inline]
    pub fn red_boxes(&self) -> &BTreeSet<BoxCoord> {
        &self.owners[Player::Red.index()]
    }

    #[inline]
    pub fn blue_boxes(&self) -> &BTreeSet<BoxCoord> {
        &self.owners[Player::Blue.index()]
    }

    #[inline]
    pub fn boxes_of(&self, player: Player) -> &BTreeSet<BoxCoord> {
        &self.owners[player.index()]
    }

    /// 箱の所有者（両者が主張している不正な盤面では Red を優先）
    pub fn owner_of(&self, coord: BoxCoord) -> Option<Player> {
        Player::ALL.into_iter().find(|p| self.owners[p.index()].contains(&coord))
    }

    /// 箱の四辺が全て引かれているか
    ///
    /// 盤外の座標は常に false。
    pub fn is_box_filled(&self, coord: BoxCoord) -> bool {
        coord.is_within(self.size)
            && coord
                .edges()
                .is_some_and(|edges| edges.iter().all(|edge| self.lines.contains(edge)))
    }

    /// 埋まっている箱を全て返す（size² 個の候補を走査）
    pub fn filled_boxes(&self) -> BTreeSet<BoxCoord> {
        BoxCoord::all(self.size).filter(|&coord| self.is_box_filled(coord)).collect()
    }

    pub fn count_filled_boxes(&self) -> usize {
        BoxCoord::all(self.size).filter(|&coord| self.is_box_filled(coord)).count()
    }

    /// この盤に引ける線分の総数 `2·size·(size+1)`
    #[inline]
    pub fn total_lines(&self) -> usize {
        total_lines(self.size)
    }

    /// 引かれた線分のうち、盤内の長さ1の線分の数
    ///
    /// 検証していない盤面では `lines().len()` と一致しないことがある。
    pub fn count_drawn_lines(&self) -> usize {
        self.lines.iter().filter(|line| line.is_unit() && line.is_within(self.size)).count()
    }

    /// 盤内の全ての線分が引かれたか（終局）
    ///
    /// 範囲外・不正な線分は数えないので、それらで水増しされた盤面は完成扱いにならない。
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.count_drawn_lines() == self.total_lines()
    }

    /// まだ引かれていない線分（生成順）
    pub fn undrawn_lines(&self) -> Vec<Line> {
        generate_all_lines(self.size)
            .into_iter()
            .filter(|line| !self.lines.contains(line))
            .collect()
    }

    /// 取った箱の数
    #[inline]
    pub fn score(&self, player: Player) -> usize {
        self.owners[player.index()].len()
    }

    pub fn outcome(&self) -> Outcome {
        if !self.is_complete() {
            return Outcome::InProgress;
        }
        let red = self.score(Player::Red);
        let blue = self.score(Player::Blue);
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Outcome::Win(Player::Red),
            std::cmp::Ordering::Less => Outcome::Win(Player::Blue),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// 線分を追加（moves からのみ使用）
    #[inline]
    pub(crate) fn draw_line(&mut self, line: Line) -> bool {
        self.lines.insert(line)
    }

    /// 箱を取る（moves からのみ使用）
    #[inline]
    pub(crate) fn claim_box(&mut self, player: Player, coord: BoxCoord) -> bool {
        self.owners[player.index()].insert(coord)
    }
}

impl fmt::Display for Board {
    /// ASCII の盤面。上の行が y = size。
    ///
    /// ```text
    /// +---+   +
    /// | R |
    /// +---+---+
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;
        let mut row = String::new();
        for y in (0..=n).rev() {
            row.clear();
            for x in 0..=n {
                row.push('+');
                if x < n {
                    row.push_str(if self.has_line(Line::horizontal(x, y)) { "---" } else { "   " });
                }
            }
            writeln!(f, "{}", row.trim_end())?;
            if y == 0 {
                break;
            }

            row.clear();
            let by = y - 1;
            for x in 0..=n {
                row.push(if self.has_line(Line::vertical(x, by)) { '|' } else { ' ' });
                if x < n {
                    let coord = BoxCoord::new(x, by);
                    let mark = match self.owner_of(coord) {
                        Some(player) => player.to_char(),
                        None if self.is_box_filled(coord) => '#',
                        None => ' ',
                    };
                    row.push(' ');
                    row.push(mark);
                    row.push(' ');
                }
            }
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_board(size: i32) -> Board {
        Board::from_lines(size, generate_all_lines(size)).unwrap()
    }

    #[test]
    fn test_board_new_rejects_zero_size() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize(0)));
        assert_eq!(Board::new(-3), Err(BoardError::InvalidSize(-3)));
        assert!(Board::new(1).is_ok());
    }

    #[test]
    fn test_board_new_rejects_oversized() {
        assert_eq!(Board::new(MAX_SIZE + 1), Err(BoardError::InvalidSize(MAX_SIZE + 1)));
        assert_eq!(Board::new(i32::MAX), Err(BoardError::InvalidSize(i32::MAX)));
        assert_eq!(Board::new(MAX_SIZE).unwrap().total_lines(), 2 * 1024 * 1025);
    }

    #[test]
    fn test_from_lines_canonicalizes() {
        let board = Board::from_lines(1, [Line::new(1, 0, 0, 0)]).unwrap();
        assert!(board.has_line(Line::horizontal(0, 0)));
    }

    #[test]
    fn test_is_box_filled() {
        let board = Board::from_lines(2, BoxCoord::new(1, 0).edges().unwrap()).unwrap();
        assert!(board.is_box_filled(BoxCoord::new(1, 0)));
        assert!(!board.is_box_filled(BoxCoord::new(0, 0)));
        // 盤外は常に false
        assert!(!board.is_box_filled(BoxCoord::new(-1, 0)));
        assert!(!board.is_box_filled(BoxCoord::new(2, 0)));
        assert!(!board.is_box_filled(BoxCoord::new(i32::MAX, i32::MAX)));
        assert!(!board.is_box_filled(BoxCoord::new(i32::MIN, 0)));
    }

    #[test]
    fn test_filled_boxes_is_idempotent() {
        let board = Board::from_lines(
            3,
            BoxCoord::new(0, 0).edges().unwrap().into_iter().chain(BoxCoord::new(2, 2).edges().unwrap()),
        )
        .unwrap();
        let first = board.filled_boxes();
        let second = board.filled_boxes();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(board.count_filled_boxes(), 2);
    }

    #[test]
    fn test_is_complete() {
        assert!(!Board::new(2).unwrap().is_complete());
        let board = full_board(2);
        assert_eq!(board.total_lines(), 12);
        assert!(board.is_complete());
        assert_eq!(board.count_filled_boxes(), 4);
        assert!(board.undrawn_lines().is_empty());
    }

    #[test]
    fn test_out_of_range_lines_do_not_complete_board() {
        // 盤内3本と盤外1本で本数だけは総数に一致する
        let lines = generate_all_lines(1);
        let last = lines.get_index(3).unwrap();
        let lines: LineSet =
            lines.iter().filter(|l| *l != last).chain([Line::horizontal(5, 5)]).collect();
        let board = Board::from_lines(1, lines).unwrap();
        assert_eq!(board.lines().len(), board.total_lines());
        assert_eq!(board.count_drawn_lines(), 3);
        assert!(!board.is_complete());
        assert_eq!(board.undrawn_lines(), vec![last]);
    }

    #[test]
    fn test_undrawn_lines() {
        let board = Board::from_lines(1, [Line::horizontal(0, 0)]).unwrap();
        let undrawn = board.undrawn_lines();
        assert_eq!(undrawn.len(), 3);
        assert!(!undrawn.contains(&Line::horizontal(0, 0)));
    }

    #[test]
    fn test_outcome() {
        let red = [BoxCoord::new(0, 0)].into_iter().collect();
        let board = Board::from_parts(1, generate_all_lines(1), red, BTreeSet::new()).unwrap();
        assert_eq!(board.score(Player::Red), 1);
        assert_eq!(board.outcome(), Outcome::Win(Player::Red));
        assert_eq!(Board::new(1).unwrap().outcome(), Outcome::InProgress);
        assert_eq!(full_board(1).outcome(), Outcome::Draw);
    }

    #[test]
    fn test_display_ascii() {
        let mut lines: Vec<Line> = BoxCoord::new(0, 0).edges().unwrap().to_vec();
        lines.push(Line::horizontal(1, 0));
        let blue = [BoxCoord::new(0, 0)].into_iter().collect();
        let board = Board::from_parts(2, lines.into_iter().collect(), BTreeSet::new(), blue).unwrap();
        let expected = "\
+   +   +

+---+   +
| B |
+---+---+
";
        assert_eq!(board.to_string(), expected);
    }
}
