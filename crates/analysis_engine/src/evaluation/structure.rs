//! Pawn structure, bishop pair and rook file evaluation
//!
//! Scores are from White's perspective.

use crate::board::Board;
use shakmaty::{Color, Role, Square};

const DOUBLED_PAWN_PENALTY: i32 = 30;
const ISOLATED_PAWN_PENALTY: i32 = 25;
const PASSED_PAWN_BASE: i32 = 20;
const PASSED_PAWN_PER_RANK: i32 = 10;
const BISHOP_PAIR_BONUS: i32 = 30;
const ROOK_OPEN_FILE_BONUS: i32 = 25;
const ROOK_SEMI_OPEN_FILE_BONUS: i32 = 15;

#[inline]
fn sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Pawn count per file for one color
fn pawns_per_file(board: &Board, color: Color) -> [i32; 8] {
    let mut files = [0; 8];
    for square in board.squares_of(Role::Pawn, color) {
        files[square.file() as usize] += 1;
    }
    files
}

/// Ranks a pawn has advanced from its home rank
#[inline]
fn ranks_advanced(color: Color, square: Square) -> i32 {
    let rank = square.rank() as i32;
    match color {
        Color::White => rank - 1,
        Color::Black => 6 - rank,
    }
}

/// No enemy pawn on the same or an adjacent file further up the board
fn is_passed(board: &Board, color: Color, square: Square) -> bool {
    let file = square.file() as i32;
    let rank = square.rank() as i32;

    !board.squares_of(Role::Pawn, !color).into_iter().any(|enemy| {
        let ahead = match color {
            Color::White => enemy.rank() as i32 > rank,
            Color::Black => (enemy.rank() as i32) < rank,
        };
        (enemy.file() as i32 - file).abs() <= 1 && ahead
    })
}

/// Doubled, isolated and passed pawns
pub fn evaluate_pawn_structure(board: &Board) -> i32 {
    let mut score = 0;

    for color in [Color::White, Color::Black] {
        let files = pawns_per_file(board, color);
        let mut side = 0;

        for &count in &files {
            if count > 1 {
                side -= (count - 1) * DOUBLED_PAWN_PENALTY;
            }
        }

        for square in board.squares_of(Role::Pawn, color) {
            let file = square.file() as usize;
            let left = file > 0 && files[file - 1] > 0;
            let right = file < 7 && files[file + 1] > 0;
            if !left && !right {
                side -= ISOLATED_PAWN_PENALTY;
            }

            if is_passed(board, color, square) {
                side += PASSED_PAWN_BASE + ranks_advanced(color, square) * PASSED_PAWN_PER_RANK;
            }
        }

        score += sign(color) * side;
    }

    score
}

/// +30 for each side holding two or more bishops
pub fn evaluate_bishop_pair(board: &Board) -> i32 {
    [Color::White, Color::Black]
        .into_iter()
        .filter(|&color| board.squares_of(Role::Bishop, color).count() >= 2)
        .map(|color| sign(color) * BISHOP_PAIR_BONUS)
        .sum()
}

/// Rooks on open (+25) and semi-open (+15) files
pub fn evaluate_rook_placement(board: &Board) -> i32 {
    let white_pawns = pawns_per_file(board, Color::White);
    let black_pawns = pawns_per_file(board, Color::Black);
    let mut score = 0;

    for color in [Color::White, Color::Black] {
        let (own, theirs) = match color {
            Color::White => (&white_pawns, &black_pawns),
            Color::Black => (&black_pawns, &white_pawns),
        };

        for square in board.squares_of(Role::Rook, color) {
            let file = square.file() as usize;
            let bonus = match (own[file], theirs[file]) {
                (0, 0) => ROOK_OPEN_FILE_BONUS,
                (0, _) => ROOK_SEMI_OPEN_FILE_BONUS,
                _ => 0,
            };
            score += sign(color) * bonus;
        }
    }

    score
}
