//! 箱の座標（BoxCoord）

use super::Line;
use std::fmt;

/// 箱（1マス）の座標。左下の格子点で表す。
///
/// 盤上の箱は `0 <= x, y < size`。
/// 負の値など盤外の座標も表現できるが、盤面への問い合わせでは常に「埋まっていない」扱いになる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxCoord {
    pub x: i32,
    pub y: i32,
}

impl BoxCoord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> BoxCoord {
        BoxCoord { x, y }
    }

    /// 四辺（下, 上, 左, 右）
    ///
    /// 右上の格子点が i32 で表せない箱は `None`。
    #[inline]
    pub fn edges(self) -> Option<[Line; 4]> {
        let BoxCoord { x, y } = self;
        let right = x.checked_add(1)?;
        let top = y.checked_add(1)?;
        Some([
            Line::new(x, y, right, y),
            Line::new(x, top, right, top),
            Line::new(x, y, x, top),
            Line::new(right, y, right, top),
        ])
    }

    /// 盤内（`0 <= x, y < size`）か
    #[inline]
    pub const fn is_within(self, size: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < size && self.y < size
    }

    /// size×size の盤上の全ての箱を返すイテレータ（x 優先）
    pub fn all(size: i32) -> impl Iterator<Item = BoxCoord> {
        (0..size.max(0)).flat_map(move |x| (0..size).map(move |y| BoxCoord::new(x, y)))
    }
}

impl From<(i32, i32)> for BoxCoord {
    fn from((x, y): (i32, i32)) -> BoxCoord {
        BoxCoord::new(x, y)
    }
}

impl fmt::Display for BoxCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_edges() {
        let edges = BoxCoord::new(1, 2).edges().unwrap();
        assert_eq!(edges[0], Line::new(1, 2, 2, 2));
        assert_eq!(edges[1], Line::new(1, 3, 2, 3));
        assert_eq!(edges[2], Line::new(1, 2, 1, 3));
        assert_eq!(edges[3], Line::new(2, 2, 2, 3));
    }

    #[test]
    fn test_box_edges_at_i32_limit() {
        assert_eq!(BoxCoord::new(i32::MAX, 0).edges(), None);
        assert_eq!(BoxCoord::new(0, i32::MAX).edges(), None);
        let edges = BoxCoord::new(i32::MIN, i32::MIN).edges().unwrap();
        assert!(edges.iter().all(|e| e.is_unit()));
    }

    #[test]
    fn test_box_is_within() {
        assert!(BoxCoord::new(0, 0).is_within(1));
        assert!(!BoxCoord::new(1, 0).is_within(1));
        assert!(!BoxCoord::new(-1, 0).is_within(3));
    }

    #[test]
    fn test_box_all() {
        assert_eq!(BoxCoord::all(3).count(), 9);
        assert_eq!(BoxCoord::all(0).count(), 0);
        assert!(BoxCoord::all(2).all(|b| b.is_within(2)));
    }
}
