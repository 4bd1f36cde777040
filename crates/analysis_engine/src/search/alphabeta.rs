//! Alpha-beta search with negamax
//!
//! Principal-variation search with late-move reductions, backed by the
//! transposition table and the killer/history heuristics of the
//! [`SearchContext`]. Scores are relative to the side to move.

use super::context::SearchContext;
use super::ordering::order_moves;
use super::quiescence::quiescence;
use crate::board::Board;
use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::hash::TranspositionEntry;

/// Moves searched at full depth before late-move reductions kick in
const LMR_FULL_DEPTH_MOVES: usize = 3;
/// Minimum remaining depth for a reduction
const LMR_MIN_DEPTH: i32 = 2;

/// Negamax search of `board` to `depth` plies inside `(alpha, beta)`
///
/// `ply` is the distance from the root and indexes the killer table.
///
/// # Errors
///
/// Returns [`EngineError::PlyLimit`] if the recursion goes deeper than the
/// killer table.
pub(crate) fn negamax(
    board: &mut Board,
    ctx: &mut SearchContext,
    depth: i32,
    mut alpha: i32,
    beta: i32,
    ply: usize,
) -> EngineResult<i32> {
    if ply >= MAX_PLY {
        return Err(EngineError::PlyLimit {
            ply,
            limit: MAX_PLY,
        });
    }

    ctx.stats.nodes += 1;

    let mut moves = board.legal_moves();
    if moves.is_empty() {
        return Ok(if board.is_check() {
            -MATE_SCORE + ply as i32
        } else {
            0
        });
    }
    if board.is_rule_draw() {
        return Ok(0);
    }

    if depth <= 0 {
        return Ok(quiescence(board, alpha, beta, ctx.quiescence_horizon));
    }

    let key = board.fingerprint();
    if let Some(entry) = ctx.tt.probe(key) {
        if entry.depth_searched >= depth {
            ctx.stats.tt_hits += 1;
            return Ok(entry.score);
        }
    }

    order_moves(board, ctx, &mut moves);

    let mut best_score = -SEARCH_INFINITY;
    let mut best_move = None;

    for (searched, mv) in moves.iter().enumerate() {
        let score = {
            let mut child = board.make(mv);

            if searched == 0 {
                -negamax(&mut child, ctx, depth - 1, -beta, -alpha, ply + 1)?
            } else {
                let reduction = i32::from(
                    searched > LMR_FULL_DEPTH_MOVES
                        && depth > LMR_MIN_DEPTH
                        && !mv.is_capture()
                        && !mv.is_promotion()
                        && !child.is_check(),
                );

                let null_window =
                    -negamax(&mut child, ctx, depth - 1 - reduction, -alpha - 1, -alpha, ply + 1)?;
                if null_window > alpha && null_window < beta {
                    -negamax(&mut child, ctx, depth - 1, -beta, -alpha, ply + 1)?
                } else {
                    null_window
                }
            }
        };

        if score > best_score {
            best_score = score;
            best_move = Some(mv.clone());
        }
        alpha = alpha.max(score);

        if alpha >= beta {
            ctx.stats.beta_cutoffs += 1;
            ctx.killers.record(ply, mv)?;
            ctx.history.reward(mv, depth);
            break;
        }
    }

    ctx.tt.store(
        key,
        TranspositionEntry {
            score: best_score,
            depth_searched: depth,
            best_move,
        },
    );

    Ok(best_score)
}
