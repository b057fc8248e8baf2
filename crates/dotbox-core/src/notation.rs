//! 線分・指し手のテキスト表記
//!
//! - 点: `x,y`
//! - 線分: `x1,y1-x2,y2`（端点の順序は任意。読み込み時に正規形へ揃える）
//! - 指し手: 線分を空白区切り。空の指し手は `pass`
//!
//! 出力は `Line` / `Move` の `Display` と同じ形式。

use crate::error::NotationError;
use crate::types::{Line, Move};
use std::str::FromStr;

/// 空の指し手の表記
pub const PASS: &str = "pass";

fn parse_coord(s: &str) -> Result<i32, NotationError> {
    let s = s.trim();
    s.parse::<i32>().map_err(|_| NotationError::InvalidNumber(s.to_string()))
}

/// 点の表記（例: "3,0"）を解析
pub fn parse_point(s: &str) -> Result<(i32, i32), NotationError> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| NotationError::InvalidPoint(s.to_string()))?;
    Ok((parse_coord(x)?, parse_coord(y)?))
}

/// 線分の表記（例: "0,0-1,0"）を解析
///
/// 座標に負の値があっても区切りの `-` と区別できるよう、数字の直後の `-` を区切りとみなす。
pub fn parse_line(s: &str) -> Result<Line, NotationError> {
    let s = s.trim();
    let sep = s
        .char_indices()
        .skip(1)
        .find(|&(i, c)| c == '-' && s[..i].ends_with(|p: char| p.is_ascii_digit()))
        .map(|(i, _)| i)
        .ok_or_else(|| NotationError::InvalidLine(s.to_string()))?;

    let (x1, y1) = parse_point(&s[..sep])?;
    let (x2, y2) = parse_point(&s[sep + 1..])?;
    Ok(Line::new(x1, y1, x2, y2))
}

/// 指し手の表記（例: "0,0-1,0 1,0-1,1"、"pass"）を解析
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let s = s.trim();
    if s == PASS {
        return Ok(Move::pass());
    }
    s.split_whitespace().map(parse_line).collect()
}

impl FromStr for Line {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}
