//! Full position evaluation
//!
//! Sums every term from White's perspective, then flips the sign so the
//! result is relative to the side to move.

use super::king_safety::evaluate_king_safety;
use super::material::{evaluate_material, is_endgame};
use super::mobility::evaluate_mobility;
use super::structure::{evaluate_bishop_pair, evaluate_pawn_structure, evaluate_rook_placement};
use crate::board::Board;
use crate::constants::MATE_SCORE;
use shakmaty::Color;

/// Static score of `board` in centipawns for the side to move
pub fn evaluate_position(board: &Board) -> i32 {
    if board.is_checkmate() {
        return -MATE_SCORE;
    }
    if board.is_stalemate() || board.is_insufficient_material() {
        return 0;
    }

    let endgame = is_endgame(board);

    let score = evaluate_material(board, endgame)
        + evaluate_mobility(board)
        + evaluate_pawn_structure(board)
        + evaluate_king_safety(board, endgame)
        + evaluate_bishop_pair(board)
        + evaluate_rook_placement(board);

    match board.turn() {
        Color::White => score,
        Color::Black => -score,
    }
}
