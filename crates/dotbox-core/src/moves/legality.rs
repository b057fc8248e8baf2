//! Move legality checking

use crate::board::{Board, LineSet, new_boxes};
use crate::error::MoveError;
use crate::types::Move;
use log::trace;
use std::borrow::Cow;
use std::collections::HashSet;

impl Board {
    /// 指し手が合法か検査し、最初に見つかった違反を返す
    ///
    /// 判定順:
    /// 1. 空の指し手は終局後のみ合法
    /// 2. 全ての線分が盤内の長さ1の線分であること
    /// 3. 盤上の線分・指し手内の線分と重複しないこと
    /// 4. 最後以外の線分は、それまでの線分に加えたときに箱を完成させること
    /// 5. 最後の線分は、終局させるか、箱を完成させないこと
    pub fn check_move(&self, mv: &Move) -> Result<(), MoveError> {
        let Some(last) = mv.last() else {
            return if self.is_complete() { Ok(()) } else { Err(MoveError::EmptyMove) };
        };

        for line in mv.iter() {
            if self.validate_line(line).is_err() {
                return Err(MoveError::MalformedLine { line, size: self.size() });
            }
        }

        if let Some(line) = mv.iter().find(|line| self.has_line(*line)) {
            return Err(MoveError::AlreadyDrawn(line));
        }
        let mut seen = HashSet::with_capacity(mv.len());
        if let Some(line) = mv.iter().find(|line| !seen.insert(*line)) {
            return Err(MoveError::DuplicateLine(line));
        }

        // 1本だけの指し手では盤面の線分集合を複製しない
        let mut drawn: Cow<'_, LineSet> = Cow::Borrowed(self.lines());
        let interior = &mv.lines()[..mv.len() - 1];
        for (index, &line) in interior.iter().enumerate() {
            let boxes = new_boxes(&drawn, line);
            trace!("chain check #{index} {line}: {} new box(es)", boxes.len());
            if boxes.is_empty() {
                return Err(MoveError::ChainBroken { index, line });
            }
            drawn.to_mut().insert(line);
        }

        // 盤外の線分は本数に含めない
        let game_over = self.count_drawn_lines() + mv.len() >= self.total_lines();
        if !game_over && !new_boxes(&drawn, last).is_empty() {
            return Err(MoveError::TurnNotFinished { line: last });
        }

        Ok(())
    }

    /// `check_move` が通るか
    #[inline]
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        self.check_move(mv).is_ok()
    }
}
