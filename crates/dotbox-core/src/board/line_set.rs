//! 線分の集合（LineSet）

use crate::types::Line;
use indexmap::IndexSet;

/// 引かれた線分の集合
///
/// 所属判定は O(1)、反復は挿入順（＝引かれた順）で決定的。
/// 等価比較は順序を無視した集合としての比較。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSet {
    inner: IndexSet<Line>,
}

impl LineSet {
    #[inline]
    pub fn new() -> LineSet {
        LineSet { inner: IndexSet::new() }
    }

    #[inline]
    pub fn with_capacity(n: usize) -> LineSet {
        LineSet { inner: IndexSet::with_capacity(n) }
    }

    #[inline]
    pub fn contains(&self, line: &Line) -> bool {
        self.inner.contains(line)
    }

    /// 追加。既にあれば何もせず false
    #[inline]
    pub fn insert(&mut self, line: Line) -> bool {
        self.inner.insert(line)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// 挿入順のイテレータ
    pub fn iter(&self) -> impl Iterator<Item = Line> + '_ {
        self.inner.iter().copied()
    }

    /// 挿入順の i 番目
    #[inline]
    pub fn get_index(&self, i: usize) -> Option<Line> {
        self.inner.get_index(i).copied()
    }
}

impl FromIterator<Line> for LineSet {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> LineSet {
        LineSet { inner: iter.into_iter().collect() }
    }
}

impl Extend<Line> for LineSet {
    fn extend<I: IntoIterator<Item = Line>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl IntoIterator for LineSet {
    type Item = Line;
    type IntoIter = indexmap::set::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = indexmap::set::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
