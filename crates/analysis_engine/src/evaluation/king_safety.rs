//! King safety (middlegame only)
//!
//! Rewards a pawn shield in front of each king and penalizes enemy pressure
//! on the king square and its neighbourhood. Scores are from White's
//! perspective.

use crate::board::Board;
use shakmaty::attacks;
use shakmaty::{Color, File, Rank, Role, Square};

const SHIELD_NEAR_BONUS: i32 = 10;
const SHIELD_FAR_BONUS: i32 = 5;
const KING_ATTACKER_PENALTY: i32 = 15;
const ZONE_ATTACK_PENALTY: i32 = 5;

fn shield_square(king: Square, file_offset: i32, rank_offset: i32) -> Option<Square> {
    let file = king.file() as i32 + file_offset;
    let rank = king.rank() as i32 + rank_offset;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(Square::from_coords(File::new(file as u32), Rank::new(rank as u32)))
    } else {
        None
    }
}

/// Own pawns on the three files around the king, one and two ranks ahead
fn pawn_shield(board: &Board, color: Color, king: Square) -> i32 {
    let forward = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let pawns = board.squares_of(Role::Pawn, color);
    let mut score = 0;

    for file_offset in -1..=1 {
        if let Some(sq) = shield_square(king, file_offset, forward) {
            if pawns.contains(sq) {
                score += SHIELD_NEAR_BONUS;
            }
        }
        if let Some(sq) = shield_square(king, file_offset, 2 * forward) {
            if pawns.contains(sq) {
                score += SHIELD_FAR_BONUS;
            }
        }
    }

    score
}

/// Safety of one king, positive is good for `color`
fn king_safety_for(board: &Board, color: Color) -> i32 {
    let Some(king) = board.king_of(color) else {
        return 0;
    };

    let mut score = pawn_shield(board, color, king);

    let direct = board.attackers(!color, king).count() as i32;
    score -= direct * KING_ATTACKER_PENALTY;

    for square in attacks::king_attacks(king) {
        let pressure = board.attackers(!color, square).count() as i32;
        score -= pressure * ZONE_ATTACK_PENALTY;
    }

    score
}

/// King safety difference, zero in the endgame
pub fn evaluate_king_safety(board: &Board, endgame: bool) -> i32 {
    if endgame {
        return 0;
    }
    king_safety_for(board, Color::White) - king_safety_for(board, Color::Black)
}
