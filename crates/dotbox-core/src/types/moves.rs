//! 指し手（Move）
//!
//! 1手番に引く線分の列。箱を完成させた線分の後にだけ次の線分を続けられる。

use super::Line;
use smallvec::SmallVec;
use std::fmt;

/// 指し手の線分列
/// 連続で箱を閉じない限り1〜2本で終わるので、4本までヒープ確保を避ける
pub type MoveLines = SmallVec<[Line; 4]>;

/// 1手番分の指し手
///
/// 空の指し手は全ての線が引かれた後（終局）にだけ合法。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Move {
    lines: MoveLines,
}

impl Move {
    /// 空の指し手（終局後のパス）
    #[inline]
    pub fn pass() -> Move {
        Move { lines: MoveLines::new() }
    }

    /// 1本だけの指し手
    #[inline]
    pub fn single(line: Line) -> Move {
        let mut lines = MoveLines::new();
        lines.push(line);
        Move { lines }
    }

    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 手番を終える最後の線分
    #[inline]
    pub fn last(&self) -> Option<Line> {
        self.lines.last().copied()
    }

    #[inline]
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn iter(&self) -> impl Iterator<Item = Line> + '_ {
        self.lines.iter().copied()
    }
}

impl FromIterator<Line> for Move {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Move {
        Move { lines: iter.into_iter().collect() }
    }
}

impl From<Vec<Line>> for Move {
    fn from(lines: Vec<Line>) -> Move {
        Move { lines: MoveLines::from_vec(lines) }
    }
}

impl From<&[Line]> for Move {
    fn from(lines: &[Line]) -> Move {
        Move { lines: MoveLines::from_slice(lines) }
    }
}

impl From<Line> for Move {
    fn from(line: Line) -> Move {
        Move::single(line)
    }
}

impl<'a> IntoIterator for &'a Move {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl fmt::Display for Move {
    /// 表記: 線分を空白区切り、空の指し手は `pass`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return f.write_str("pass");
        }
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
