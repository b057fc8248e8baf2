//! 線分（Line）

use super::BoxCoord;
use smallvec::SmallVec;
use std::fmt;

/// 線分の向き
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// 横線（x方向に長さ1）
    Horizontal,
    /// 縦線（y方向に長さ1）
    Vertical,
}

/// 格子点を結ぶ線分
///
/// 常に正規形 `(min(x1,x2), min(y1,y2), max(x1,x2), max(y1,y2))` で保持する。
/// 右向き・上向きに揃えることで、同じ線分は必ず同じ値になる。
///
/// 長さ1の軸平行線分であることは構築時には検査しない
/// （盤面の検証で `is_unit` / `is_within` を使う）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Line {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Line {
    /// 2点から線分を生成（正規形に並べ替える）
    #[inline]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Line {
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (y1, y2) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Line { x1, y1, x2, y2 }
    }

    /// (x, y) から右に伸びる横線
    ///
    /// 盤内の座標向け。`x + 1` が溢れる値では使わない（`Line::new` を使う）。
    #[inline]
    pub const fn horizontal(x: i32, y: i32) -> Line {
        Line { x1: x, y1: y, x2: x + 1, y2: y }
    }

    /// (x, y) から上に伸びる縦線
    ///
    /// `y + 1` が溢れる値では使わない。
    #[inline]
    pub const fn vertical(x: i32, y: i32) -> Line {
        Line { x1: x, y1: y, x2: x, y2: y + 1 }
    }

    /// `[x1, y1, x2, y2]` から生成
    #[inline]
    pub const fn from_array(a: [i32; 4]) -> Line {
        Line::new(a[0], a[1], a[2], a[3])
    }

    /// 正規形の4つ組
    #[inline]
    pub const fn to_array(self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// 始点（左または下）
    #[inline]
    pub const fn start(self) -> (i32, i32) {
        (self.x1, self.y1)
    }

    /// 終点（右または上）
    #[inline]
    pub const fn end(self) -> (i32, i32) {
        (self.x2, self.y2)
    }

    /// 向きを返す。長さ1の軸平行線分でなければ `None`
    #[inline]
    pub const fn orientation(self) -> Option<Orientation> {
        // 端点が i32 の両端にある線分でも溢れないよう checked_sub で差を取る
        match (self.x2.checked_sub(self.x1), self.y2.checked_sub(self.y1)) {
            (Some(1), Some(0)) => Some(Orientation::Horizontal),
            (Some(0), Some(1)) => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// 長さ1の軸平行線分か
    #[inline]
    pub const fn is_unit(self) -> bool {
        self.orientation().is_some()
    }

    /// 全座標が `[0, size]` に収まるか
    #[inline]
    pub const fn is_within(self, size: i32) -> bool {
        self.x1 >= 0 && self.y1 >= 0 && self.x2 <= size && self.y2 <= size
    }

    /// この線分を辺に持つ箱（最大2つ）
    ///
    /// 横線なら上側と下側、縦線なら右側と左側の順。
    /// 盤外の箱も含めて返すので、範囲の判定は呼び出し側で行う。
    /// 長さ1の線分でなければ空。座標が i32 で表せない箱は含めない。
    pub fn adjacent_boxes(self) -> SmallVec<[BoxCoord; 2]> {
        let (x, y) = (self.x1, self.y1);
        let mut boxes = SmallVec::new();
        match self.orientation() {
            Some(Orientation::Horizontal) => {
                boxes.push(BoxCoord::new(x, y));
                boxes.extend(y.checked_sub(1).map(|below| BoxCoord::new(x, below)));
            }
            Some(Orientation::Vertical) => {
                boxes.push(BoxCoord::new(x, y));
                boxes.extend(x.checked_sub(1).map(|left| BoxCoord::new(left, y)));
            }
            None => {}
        }
        boxes
    }
}

impl From<[i32; 4]> for Line {
    fn from(a: [i32; 4]) -> Line {
        Line::from_array(a)
    }
}

impl From<(i32, i32, i32, i32)> for Line {
    fn from((x1, y1, x2, y2): (i32, i32, i32, i32)) -> Line {
        Line::new(x1, y1, x2, y2)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}-{},{}", self.x1, self.y1, self.x2, self.y2)
    }
}
