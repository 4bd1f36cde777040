//! Move ordering for alpha-beta pruning
//!
//! Orders moves to maximize alpha-beta pruning efficiency by trying
//! the most promising moves first: the cached best move, winning captures,
//! promotions, checks, killers, castling, history and development.
//! Development covers knights and bishops leaving their home squares.

use super::context::SearchContext;
use crate::board::Board;
use crate::constants::*;
use shakmaty::{Move, Role, Square};
use std::cmp::Reverse;

/// Starting squares of the minor pieces, bishops included
const MINOR_HOME_SQUARES: [Square; 8] = [
    Square::B1,
    Square::C1,
    Square::F1,
    Square::G1,
    Square::B8,
    Square::C8,
    Square::F8,
    Square::G8,
];

/// Static exchange estimate of a capture
///
/// Gains the victim; if the destination is covered by the opponent after
/// the capture, assumes the capturer is lost and the cheapest recapturer
/// is won back. Non-captures score 0.
pub fn see(board: &mut Board, mv: &Move) -> i32 {
    let Some(victim) = mv.capture() else {
        return 0;
    };

    let mut gain = piece_value(victim);
    let child = board.make(mv);
    let cheapest_defender = child
        .attackers(child.turn(), mv.to())
        .into_iter()
        .filter_map(|sq| child.piece_at(sq))
        .map(|piece| piece_value(piece.role))
        .min();

    if let Some(defender) = cheapest_defender {
        gain -= piece_value(mv.role());
        gain += defender;
    }

    gain
}

/// Quiescence ordering key: victim + promotion + check/mate bonuses
pub fn tactical_value(board: &mut Board, mv: &Move) -> i32 {
    let mut value = mv.capture().map_or(0, piece_value) + mv.promotion().map_or(0, piece_value);

    let child = board.make(mv);
    if child.is_check() {
        value += TACTICAL_CHECK_BONUS;
        if child.is_checkmate() {
            value += TACTICAL_MATE_BONUS;
        }
    }

    value
}

fn move_score(board: &mut Board, ctx: &SearchContext, tt_move: Option<&Move>, mv: &Move) -> i32 {
    if tt_move == Some(mv) {
        return ORDER_TT_MOVE;
    }

    let mut score = 0;

    if let Some(victim) = mv.capture() {
        let see_score = see(board, mv);
        if see_score >= 0 {
            let mvv_lva = piece_value(victim) * 10 - piece_value(mv.role());
            score += ORDER_GOOD_CAPTURE + mvv_lva + see_score;
        } else {
            score += ORDER_BAD_CAPTURE + see_score;
        }
    }

    if let Some(promoted) = mv.promotion() {
        score += ORDER_PROMOTION + piece_value(promoted);
    }

    if board.gives_check(mv) {
        score += ORDER_CHECK;
    }

    if let Some(slot) = ctx.killers.slot_of(mv) {
        score += ORDER_KILLER - slot as i32 * ORDER_KILLER_SLOT_STEP;
    }

    if mv.is_castle() {
        score += ORDER_CASTLE;
    }

    score += (ctx.history.score(mv) / ORDER_HISTORY_DIVISOR as u32) as i32;

    if matches!(mv.role(), Role::Knight | Role::Bishop)
        && mv.from().is_some_and(|from| MINOR_HOME_SQUARES.contains(&from))
    {
        score += ORDER_DEVELOPMENT;
    }

    score
}

/// Sort `moves` best-first; ties keep their generation order
pub(crate) fn order_moves(board: &mut Board, ctx: &SearchContext, moves: &mut [Move]) {
    let tt_move = ctx.tt.best_move(board.fingerprint()).cloned();
    moves.sort_by_cached_key(|mv| Reverse(move_score(board, ctx, tt_move.as_ref(), mv)));
}

/// Sort tactical moves by [`tactical_value`], highest first
pub(crate) fn order_tactical(board: &mut Board, moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| Reverse(tactical_value(board, mv)));
}
