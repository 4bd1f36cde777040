//! Quiescence search to avoid horizon effect
//!
//! Extends the search along tactical moves only (captures, checks and
//! promotions) until the position is quiet or the horizon runs out.

use super::ordering::{order_tactical, see};
use crate::board::Board;
use crate::constants::SEE_PRUNE_MARGIN;
use crate::evaluation::evaluate_position;
use shakmaty::Move;

/// Captures, checking moves and promotions from the current position
fn tactical_moves(board: &mut Board) -> Vec<Move> {
    let candidates = board.legal_moves();
    candidates
        .into_iter()
        .filter(|mv| mv.is_capture() || mv.is_promotion() || board.gives_check(mv))
        .collect()
}

/// Fail-hard quiescence search, score relative to the side to move
///
/// `depth` is the number of tactical plies still allowed; at zero only the
/// stand-pat bound is returned.
pub(crate) fn quiescence(board: &mut Board, mut alpha: i32, beta: i32, depth: i32) -> i32 {
    let stand_pat = evaluate_position(board);

    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }
    if depth <= 0 {
        return alpha;
    }

    let mut moves = tactical_moves(board);
    order_tactical(board, &mut moves);

    for mv in &moves {
        if mv.is_capture() && see(board, mv) < SEE_PRUNE_MARGIN {
            continue;
        }

        let score = {
            let mut child = board.make(mv);
            -quiescence(&mut child, -beta, -alpha, depth - 1)
        };

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{QUIESCENCE_HORIZON, SEARCH_INFINITY};

    #[test]
    fn test_stand_pat_fail_high() {
        // White is a queen up; a low beta is immediately returned
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1").unwrap();
        assert_eq!(quiescence(&mut board, -SEARCH_INFINITY, 100, QUIESCENCE_HORIZON), 100);
    }

    #[test]
    fn test_zero_horizon_returns_stand_pat_bound() {
        let mut board = Board::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let stand_pat = evaluate_position(&board);
        assert_eq!(
            quiescence(&mut board, -SEARCH_INFINITY, SEARCH_INFINITY, 0),
            stand_pat
        );
        assert_eq!(
            quiescence(&mut board, stand_pat + 10, SEARCH_INFINITY, 0),
            stand_pat + 10
        );
    }

    #[test]
    fn test_hanging_queen_is_captured() {
        let mut board = Board::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let stand_pat = evaluate_position(&board);
        let score = quiescence(&mut board, -SEARCH_INFINITY, SEARCH_INFINITY, QUIESCENCE_HORIZON);
        assert!(score > stand_pat + 500, "score {score} vs stand pat {stand_pat}");
    }

    #[test]
    fn test_horizon_bounds_the_capture_chain() {
        // exd5 wins the queen; cxd5 only comes into view with a second ply
        let fen = "4k3/8/2p5/3q4/4P3/8/8/4K3 w - - 0 1";
        let mut one_ply = Board::from_fen(fen).unwrap();
        let mut two_ply = Board::from_fen(fen).unwrap();

        let greedy = quiescence(&mut one_ply, -SEARCH_INFINITY, SEARCH_INFINITY, 1);
        let answered = quiescence(&mut two_ply, -SEARCH_INFINITY, SEARCH_INFINITY, 2);
        assert!(greedy > answered, "horizon 1: {greedy}, horizon 2: {answered}");
    }

    #[test]
    fn test_capture_rich_position_terminates_within_horizon() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut board = Board::from_fen(fen).unwrap();
        let score = quiescence(&mut board, -SEARCH_INFINITY, SEARCH_INFINITY, QUIESCENCE_HORIZON);
        assert!(score.abs() < SEARCH_INFINITY);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_quiescence_restores_board() {
        let mut board =
            Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 0 4")
                .unwrap();
        let before = board.to_fen();
        let _ = quiescence(&mut board, -SEARCH_INFINITY, SEARCH_INFINITY, QUIESCENCE_HORIZON);
        assert_eq!(board.to_fen(), before);
    }
}
