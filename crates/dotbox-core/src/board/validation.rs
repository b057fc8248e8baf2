//! Board validation
//!
//! 線分が盤内の長さ1の軸平行線分であること、
//! 両者の所有が記録されていれば、所有と埋まった箱が過不足なく対応していることを検査する。

use super::Board;
use crate::error::BoardError;
use crate::types::{Line, Player};

impl Board {
    /// 盤面の整合性を検査し、最初に見つかった不整合を返す
    pub fn validate(&self) -> Result<(), BoardError> {
        for line in self.lines.iter() {
            self.validate_line(line)?;
        }

        // 線分だけから作った盤面には所有情報がないので、両者の記録がある場合のみ突き合わせる
        if self.red_boxes().is_empty() || self.blue_boxes().is_empty() {
            return Ok(());
        }

        let filled = self.filled_boxes();
        for player in Player::ALL {
            if let Some(&coord) = self.boxes_of(player).iter().find(|c| !filled.contains(*c)) {
                return Err(BoardError::UnfilledClaim { player, coord });
            }
        }

        if let Some(&coord) = self.red_boxes().intersection(self.blue_boxes()).next() {
            return Err(BoardError::DoubleClaim(coord));
        }

        let claimed = self.red_boxes().len() + self.blue_boxes().len();
        if claimed != filled.len() {
            return Err(BoardError::UnaccountedBoxes { filled: filled.len(), claimed });
        }

        Ok(())
    }

    /// `validate` が通るか
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub(crate) fn validate_line(&self, line: Line) -> Result<(), BoardError> {
        if !line.is_within(self.size) {
            return Err(BoardError::LineOutOfRange { line, size: self.size });
        }
        if !line.is_unit() {
            return Err(BoardError::NotUnitSegment(line));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LineSet;
    use crate::movegen::generate_all_lines;
    use crate::types::BoxCoord;
    use std::collections::BTreeSet;

    fn boxes(coords: &[(i32, i32)]) -> BTreeSet<BoxCoord> {
        coords.iter().map(|&c| BoxCoord::from(c)).collect()
    }

    #[test]
    fn test_empty_and_full_boards_are_valid() {
        assert!(Board::new(3).unwrap().is_valid());
        assert!(Board::from_lines(3, generate_all_lines(3)).unwrap().is_valid());
    }

    #[test]
    fn test_out_of_range_line() {
        let board = Board::from_lines(1, [Line::horizontal(1, 0)]).unwrap();
        assert_eq!(
            board.validate(),
            Err(BoardError::LineOutOfRange { line: Line::horizontal(1, 0), size: 1 })
        );

        let board = Board::from_lines(2, [Line::vertical(0, -1)]).unwrap();
        assert!(!board.is_valid());
    }

    #[test]
    fn test_non_unit_line() {
        let diagonal = Line::new(0, 0, 1, 1);
        let board = Board::from_lines(2, [diagonal]).unwrap();
        assert_eq!(board.validate(), Err(BoardError::NotUnitSegment(diagonal)));

        let long = Line::new(0, 0, 2, 0);
        assert!(!Board::from_lines(2, [long]).unwrap().is_valid());
    }

    #[test]
    fn test_ownership_accounting() {
        let all = generate_all_lines(2);
        let valid = Board::from_parts(2, all.clone(), boxes(&[(0, 0), (1, 1)]), boxes(&[(0, 1), (1, 0)]))
            .unwrap();
        assert!(valid.is_valid());

        let missing = Board::from_parts(2, all.clone(), boxes(&[(0, 0)]), boxes(&[(0, 1), (1, 0)])).unwrap();
        assert_eq!(missing.validate(), Err(BoardError::UnaccountedBoxes { filled: 4, claimed: 3 }));

        let double =
            Board::from_parts(2, all, boxes(&[(0, 0), (1, 1)]), boxes(&[(0, 0), (0, 1), (1, 0)])).unwrap();
        assert_eq!(double.validate(), Err(BoardError::DoubleClaim(BoxCoord::new(0, 0))));
    }

    #[test]
    fn test_unfilled_claim() {
        let lines: LineSet = BoxCoord::new(0, 0).edges().unwrap().into_iter().collect();
        let board = Board::from_parts(2, lines, boxes(&[(0, 0)]), boxes(&[(1, 1)])).unwrap();
        assert_eq!(
            board.validate(),
            Err(BoardError::UnfilledClaim { player: Player::Blue, coord: BoxCoord::new(1, 1) })
        );
    }

    #[test]
    fn test_single_sided_ownership_is_not_checked() {
        // 片方だけ記録がある場合は線分の検査のみ
        let board = Board::from_parts(2, LineSet::new(), boxes(&[(1, 1)]), BTreeSet::new()).unwrap();
        assert!(board.is_valid());
    }
}
