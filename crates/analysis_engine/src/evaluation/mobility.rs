//! Weighted mobility
//!
//! Each legal move earns a weight by the moving piece's kind: queen 4,
//! rook 2, bishop/knight 1, pawn/king 0.5. The weights below are kept in
//! half-units so the ×2 difference stays integral.

use crate::board::Board;
use shakmaty::attacks;
use shakmaty::{Color, Role};

#[inline]
fn half_weight(role: Role) -> i32 {
    match role {
        Role::Queen => 8,
        Role::Rook => 4,
        Role::Bishop | Role::Knight => 2,
        Role::Pawn | Role::King => 1,
    }
}

/// Weighted legal-move count of the side to move, in half-units
fn side_to_move_mobility(board: &Board) -> i32 {
    board
        .legal_moves()
        .iter()
        .map(|mv| half_weight(mv.role()))
        .sum()
}

/// Weighted attack count of `color`, used when its moves cannot be listed
///
/// Swapping the side to move is illegal while the current mover is in
/// check, so the opponent's pseudo-mobility is read from attack sets.
fn attack_mobility(board: &Board, color: Color) -> i32 {
    let occupied = board.occupied();
    let mut total = 0;

    for square in occupied {
        if let Some(piece) = board.piece_at(square) {
            if piece.color != color {
                continue;
            }
            let reachable = attacks::attacks(square, piece, occupied);
            let targets = reachable
                .into_iter()
                .filter(|&to| board.piece_at(to).map_or(true, |p| p.color != color))
                .count() as i32;
            total += targets * half_weight(piece.role);
        }
    }

    total
}

/// Mobility difference ×2 from White's perspective
pub fn evaluate_mobility(board: &Board) -> i32 {
    let mover = board.turn();
    let ours = side_to_move_mobility(board);
    let theirs = match board.with_turn_swapped() {
        Some(swapped) => side_to_move_mobility(&swapped),
        None => attack_mobility(board, !mover),
    };

    // (ours - theirs) in half-units equals the ×2 difference in full units
    let diff = ours - theirs;
    match mover {
        Color::White => diff,
        Color::Black => -diff,
    }
}
