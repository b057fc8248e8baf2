//! Move application
//!
//! 検証してから線分を追加し、新たに埋まった箱を手番のプレイヤーに与える。
//! 拒否された指し手は盤面を一切変更しない。

use crate::board::Board;
use crate::error::MoveError;
use crate::types::{BoxCoord, Move, Player};
use log::{debug, log_enabled, warn};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// 指し手を適用した結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// 指したプレイヤー
    pub player: Player,
    /// この指し手で取った箱
    pub claimed: BTreeSet<BoxCoord>,
    /// この指し手で全ての線分が引かれたか
    pub game_over: bool,
}

/// 指し手を検証して適用する
///
/// `copy_board` が true なら `board` は変更せず、適用後の独立した複製を `Cow::Owned` で返す。
/// false なら `board` に直接適用し、その盤面を `Cow::Borrowed` で返す。
/// どちらの場合も不正な指し手なら `board` は変更しない。
pub fn apply_move<'a>(
    board: &'a mut Board,
    mv: &Move,
    player: Player,
    copy_board: bool,
) -> Result<(Cow<'a, Board>, MoveOutcome), MoveError> {
    if copy_board {
        let (next, outcome) = board.with_move(mv, player)?;
        Ok((Cow::Owned(next), outcome))
    } else {
        let outcome = board.apply_move(mv, player)?;
        Ok((Cow::Borrowed(&*board), outcome))
    }
}

impl Board {
    /// 指し手を検証して盤面に直接適用する
    ///
    /// 不正な指し手なら `MoveError` を返し、盤面は変更しない。
    pub fn apply_move(&mut self, mv: &Move, player: Player) -> Result<MoveOutcome, MoveError> {
        self.check_move_logged(mv, player)?;
        Ok(self.commit(mv, player))
    }

    /// 指し手を検証し、適用後の盤面を独立した複製として返す
    ///
    /// 元の盤面は変更しない。返す盤面とは状態を共有しない。
    pub fn with_move(&self, mv: &Move, player: Player) -> Result<(Board, MoveOutcome), MoveError> {
        self.check_move_logged(mv, player)?;
        let mut next = self.clone();
        let outcome = next.commit(mv, player);
        Ok((next, outcome))
    }

    /// 検証せずに適用する
    ///
    /// 線分の追加は集合への追加なので、既にある線分は無視される。
    /// 不正な指し手だった場合は warn ログを出す（盤面には反映する）。
    pub fn apply_unchecked(&mut self, mv: &Move, player: Player) -> MoveOutcome {
        if log_enabled!(log::Level::Warn) {
            if let Err(err) = self.check_move(mv) {
                warn!("Committing unchecked move [{mv}] for {player}: {err}");
            }
        }
        self.commit(mv, player)
    }

    fn check_move_logged(&self, mv: &Move, player: Player) -> Result<(), MoveError> {
        self.check_move(mv).inspect_err(|err| {
            debug!("Rejected move [{mv}] for {player}: {err}");
        })
    }

    fn commit(&mut self, mv: &Move, player: Player) -> MoveOutcome {
        let before = self.filled_boxes();
        for line in mv.iter() {
            self.draw_line(line);
        }
        let claimed: BTreeSet<BoxCoord> = self.filled_boxes().difference(&before).copied().collect();
        for &coord in &claimed {
            self.claim_box(player, coord);
        }

        let game_over = self.is_complete();
        debug!(
            "Applied move [{mv}] for {player}: {} line(s), {} box(es) claimed, {}/{} lines drawn",
            mv.len(),
            claimed.len(),
            self.count_drawn_lines(),
            self.total_lines()
        );

        MoveOutcome { player, claimed, game_over }
    }
}
