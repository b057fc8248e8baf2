//! 盤面のJSON表現
//!
//! 外部の描画・記録側とのやり取り用。線分は常に正規形 `[x1, y1, x2, y2]` で出力し、
//! 入力側の端点の順序は問わない（読み込み時に正規形へ揃える）。

use crate::board::{Board, LineSet};
use crate::error::{BoardError, Result};
use crate::types::{BoxCoord, Line};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 盤面全体の状態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardJson {
    pub size: i32,
    /// 引かれた順の線分
    pub lines: Vec<[i32; 4]>,
    /// 赤が取った箱 `[x, y]`
    #[serde(default)]
    pub red_boxes: Vec<[i32; 2]>,
    /// 青が取った箱 `[x, y]`
    #[serde(default)]
    pub blue_boxes: Vec<[i32; 2]>,
}

fn boxes_to_json(boxes: &BTreeSet<BoxCoord>) -> Vec<[i32; 2]> {
    boxes.iter().map(|b| [b.x, b.y]).collect()
}

fn boxes_from_json(boxes: &[[i32; 2]]) -> BTreeSet<BoxCoord> {
    boxes.iter().map(|&[x, y]| BoxCoord::new(x, y)).collect()
}

impl From<&Board> for BoardJson {
    fn from(board: &Board) -> Self {
        BoardJson {
            size: board.size(),
            lines: board.lines().iter().map(Line::to_array).collect(),
            red_boxes: boxes_to_json(board.red_boxes()),
            blue_boxes: boxes_to_json(board.blue_boxes()),
        }
    }
}

impl TryFrom<BoardJson> for Board {
    type Error = BoardError;

    /// 盤面を組み立てて `validate` まで行う
    fn try_from(json: BoardJson) -> std::result::Result<Board, BoardError> {
        let lines: LineSet = json.lines.into_iter().map(Line::from_array).collect();
        let board = Board::from_parts(
            json.size,
            lines,
            boxes_from_json(&json.red_boxes),
            boxes_from_json(&json.blue_boxes),
        )?;
        board.validate()?;
        Ok(board)
    }
}

impl Board {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&BoardJson::from(self))?)
    }

    /// JSON から読み込む。不整合な盤面は `BoardError` で拒否する。
    pub fn from_json(s: &str) -> Result<Board> {
        let json: BoardJson = serde_json::from_str(s)?;
        Ok(Board::try_from(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{Move, Player};

    #[test]
    fn test_board_to_json() {
        let mut board = Board::from_lines(1, [Line::horizontal(0, 0), Line::vertical(0, 0), Line::vertical(1, 0)])
            .unwrap();
        board.apply_move(&Move::single(Line::horizontal(0, 1)), Player::Blue).unwrap();

        let value: serde_json::Value = serde_json::from_str(&board.to_json().unwrap()).unwrap();
        assert_eq!(value["size"], 1);
        assert_eq!(value["lines"][3], serde_json::json!([0, 1, 1, 1]));
        assert_eq!(value["red_boxes"], serde_json::json!([]));
        assert_eq!(value["blue_boxes"], serde_json::json!([[0, 0]]));
    }

    #[test]
    fn test_board_from_json_canonicalizes_lines() {
        let board = Board::from_json(r#"{"size": 2, "lines": [[1, 0, 0, 0], [0, 1, 0, 0]]}"#).unwrap();
        assert!(board.has_line(Line::horizontal(0, 0)));
        assert!(board.has_line(Line::vertical(0, 0)));
        assert!(board.red_boxes().is_empty());
    }

    #[test]
    fn test_board_from_json_rejects_malformed() {
        let err = Board::from_json(r#"{"size": 1, "lines": [[0, 0, 2, 0]]}"#).unwrap_err();
        assert!(matches!(err, Error::Board(BoardError::LineOutOfRange { .. })));

        let err = Board::from_json(r#"{"size": 0, "lines": []}"#).unwrap_err();
        assert!(matches!(err, Error::Board(BoardError::InvalidSize(0))));

        let err = Board::from_json("{\"size\": 2}").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_board_json_round_trip_preserves_state() {
        let mut board = Board::new(2).unwrap();
        board.apply_move(&Move::single(Line::vertical(2, 1)), Player::Red).unwrap();
        board.apply_move(&Move::single(Line::horizontal(0, 0)), Player::Blue).unwrap();
        let restored = Board::from_json(&board.to_json().unwrap()).unwrap();
        assert_eq!(restored, board);
        assert_eq!(restored.lines().get_index(0), Some(Line::vertical(2, 1)));
    }
}
