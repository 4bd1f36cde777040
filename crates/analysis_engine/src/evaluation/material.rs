//! Material, piece-square and game phase evaluation
//!
//! Scores are from White's perspective.

use super::pst::pst_value;
use crate::board::Board;
use crate::constants::*;
use shakmaty::{Color, Role};

/// Endgame when non-king material or the non-king piece count runs low
pub fn is_endgame(board: &Board) -> bool {
    let mut material = 0;
    let mut pieces = 0u32;

    for square in board.occupied() {
        if let Some(piece) = board.piece_at(square) {
            if piece.role != Role::King {
                material += piece_value(piece.role);
                pieces += 1;
            }
        }
    }

    material < ENDGAME_MATERIAL || pieces < ENDGAME_PIECE_COUNT
}

/// Material plus piece-square bonus for every piece on the board
pub fn evaluate_material(board: &Board, endgame: bool) -> i32 {
    let mut score = 0;

    for square in board.occupied() {
        if let Some(piece) = board.piece_at(square) {
            let value = piece_value(piece.role) + pst_value(piece.role, piece.color, square, endgame);
            score += match piece.color {
                Color::White => value,
                Color::Black => -value,
            };
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_material_balance() {
        let board = Board::default();
        assert!(!is_endgame(&board));
        assert_eq!(evaluate_material(&board, false), 0);
    }

    #[test]
    fn test_white_up_queen() {
        let board =
            Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        let score = evaluate_material(&board, is_endgame(&board));
        assert!(score >= QUEEN_VALUE - 50, "score {score} should reflect the extra queen");
    }

    #[test]
    fn test_color_mirror_negates_material() {
        let white = Board::from_fen("4k3/8/8/3p4/8/2N5/PP6/4K3 w - - 0 1").unwrap();
        let mirrored = Board::from_fen("4k3/pp6/2n5/8/3P4/8/8/4K3 b - - 0 1").unwrap();

        let endgame = is_endgame(&white);
        assert_eq!(endgame, is_endgame(&mirrored));
        assert_eq!(
            evaluate_material(&white, endgame),
            -evaluate_material(&mirrored, endgame)
        );
    }

    #[test]
    fn test_endgame_detection() {
        // Rooks and pawns only: 1000 + 600 = 1600 < 1800
        let board = Board::from_fen("4k3/ppp2r2/8/8/8/8/PPP2R2/4K3 w - - 0 1").unwrap();
        assert!(is_endgame(&board));

        // Full armies minus one pawn each are still a middlegame
        let board =
            Board::from_fen("rnbqkbnr/ppppppp1/8/8/8/8/PPPPPPP1/RNBQKBNR w KQkq - 0 1").unwrap();
        assert!(!is_endgame(&board));
    }
}
