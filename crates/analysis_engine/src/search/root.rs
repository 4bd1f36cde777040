//! Root move loop and principal variation extraction

use super::alphabeta::negamax;
use super::context::SearchContext;
use super::ordering::order_moves;
use crate::board::Board;
use crate::constants::*;
use crate::error::EngineResult;
use crate::types::MoveResult;
use shakmaty::Move;

/// Best evaluation and every root move, best first
#[derive(Debug, Clone, Default)]
pub(crate) struct RootOutcome {
    pub evaluation: i32,
    pub moves: Vec<MoveResult>,
}

/// Search every legal root move to `depth` with the full window
///
/// # Errors
///
/// Propagates errors from [`negamax`].
pub(crate) fn search_root(
    board: &mut Board,
    ctx: &mut SearchContext,
    depth: i32,
) -> EngineResult<RootOutcome> {
    let mut moves = board.legal_moves();
    if moves.is_empty() {
        let evaluation = if board.is_check() { -MATE_SCORE } else { 0 };
        return Ok(RootOutcome {
            evaluation,
            moves: Vec::new(),
        });
    }

    order_moves(board, ctx, &mut moves);

    let mut results = Vec::with_capacity(moves.len());
    for mv in &moves {
        let mut child = board.make(mv);
        let eval_score =
            -negamax(&mut child, ctx, depth - 1, -SEARCH_INFINITY, SEARCH_INFINITY, 1)?;
        let principal_variation = extract_pv(&child, ctx, mv, depth - 1);

        results.push(MoveResult {
            mv: mv.clone(),
            eval_score,
            principal_variation,
        });
    }

    // Stable: equal scores keep their ordering rank
    results.sort_by(|a, b| b.eval_score.cmp(&a.eval_score));

    Ok(RootOutcome {
        evaluation: results.first().map_or(0, |best| best.eval_score),
        moves: results,
    })
}

/// First capture or checking move, else the first legal move
fn fallback_move(board: &mut Board) -> Option<Move> {
    let moves = board.legal_moves();
    let forcing = moves
        .iter()
        .find(|mv| mv.is_capture() || board.gives_check(mv))
        .cloned();
    forcing.or_else(|| moves.first().cloned())
}

/// Follow cached best moves from the child position
///
/// Walks a snapshot of `child` for up to `min(depth, 6)` moves. Positions
/// without a cache entry continue with a forcing move; an entry whose move
/// is missing or illegal ends the line.
pub(crate) fn extract_pv(child: &Board, ctx: &SearchContext, first: &Move, depth: i32) -> Vec<Move> {
    let mut pv = vec![first.clone()];
    let mut snapshot = child.clone();
    let steps = usize::try_from(depth).unwrap_or(0).min(MAX_PV_EXTENSION);

    for _ in 0..steps {
        let next = match ctx.tt.probe(snapshot.fingerprint()) {
            Some(entry) => match &entry.best_move {
                Some(mv) if snapshot.legal_moves().contains(mv) => mv.clone(),
                _ => break,
            },
            None => match fallback_move(&mut snapshot) {
                Some(mv) => mv,
                None => break,
            },
        };

        snapshot.play(&next);
        pv.push(next);
    }

    pv
}
