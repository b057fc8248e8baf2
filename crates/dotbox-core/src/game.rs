//! 対局（Game）
//!
//! 盤面・手番・棋譜をまとめて管理する。
//! 合法な指し手は必ず手番を終えるので、終局するまで1手ごとに手番が交代する。

use crate::board::{Board, Outcome};
use crate::error::{BoardError, MoveError};
use crate::moves::MoveOutcome;
use crate::types::{Move, Player};

/// 1局分の状態
#[derive(Debug, Clone)]
pub struct Game {
    /// 開始局面（undo で棋譜を再生する起点）
    initial: Board,
    board: Board,
    side_to_move: Player,
    first_player: Player,
    history: Vec<(Player, Move)>,
}

impl Game {
    /// 空の盤面から開始
    pub fn new(size: i32, first_player: Player) -> Result<Game, BoardError> {
        Ok(Game::from_board(Board::new(size)?, first_player))
    }

    /// 任意の局面から開始
    pub fn from_board(board: Board, side_to_move: Player) -> Game {
        Game {
            initial: board.clone(),
            board,
            side_to_move,
            first_player: side_to_move,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// 指した順の (プレイヤー, 指し手)
    #[inline]
    pub fn history(&self) -> &[(Player, Move)] {
        &self.history
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.board.is_complete()
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// 手番のプレイヤーとして指す
    ///
    /// 不正な指し手なら局面・手番・棋譜は変わらない。
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let player = self.side_to_move;
        let outcome = self.board.apply_move(&mv, player)?;
        self.history.push((player, mv));
        if !outcome.game_over {
            self.side_to_move = !player;
        }
        Ok(outcome)
    }

    /// 最後の指し手を取り消す
    ///
    /// 開始局面から残りの棋譜を再生して局面を作り直す。
    pub fn undo(&mut self) -> Option<(Player, Move)> {
        let last = self.history.pop()?;
        let mut board = self.initial.clone();
        for (player, mv) in &self.history {
            // 棋譜の指し手は play で検証済み
            board.apply_unchecked(mv, *player);
        }
        self.board = board;
        self.side_to_move = last.0;
        Some(last)
    }

    /// 開始局面に戻す
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.side_to_move = self.first_player;
        self.history.clear();
    }
}
