//! Piece-square tables
//!
//! Tables are written as the board is seen from White's side: the first row
//! is rank 8, the last row rank 1. A lookup takes the piece kind and the
//! square relative to the piece's color, so Black reads the tables through a
//! vertical mirror.

use shakmaty::{Color, Role, Square};

#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     78,  83,  86,  73, 102,  82,  85,  90,
      7,  29,  21,  44,  40,  31,  44,   7,
    -17,  16,  -2,  15,  14,   0,  15, -13,
    -26,   3,  10,   9,   6,   1,   0, -23,
    -22,   9,   5, -11, -10,  -2,   3, -19,
    -31,   8,  -7, -37, -36, -14,   3, -31,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
   -167, -89, -34, -49,  61, -97, -15,-107,
    -73, -41,  72,  36,  23,  62,   7, -17,
    -47,  60,  37,  65,  84, 129,  73,  44,
     -9,  17,  19,  53,  37,  69,  18,  22,
    -13,   4,  16,  13,  28,  19,  21,  -8,
    -23,  -9,  12,  10,  19,  17,  25, -16,
    -29, -53, -12,  -3,  -1,  18, -14, -19,
   -105, -21, -58, -33, -17, -28, -19, -23,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
      0,  0,  0,  0,  0,  0,  0,  0,
      5, 10, 10, 10, 10, 10, 10,  5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
     -5,  0,  0,  0,  0,  0,  0, -5,
      0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_PST_MIDDLEGAME: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_PST_ENDGAME: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-30,-50,
];

/// Table row-major index of `square` as seen by `color`
#[inline]
fn table_index(color: Color, square: Square) -> usize {
    match color {
        // a1 is index 56 in a rank-8-first table
        Color::White => square as usize ^ 56,
        Color::Black => square as usize,
    }
}

/// Positional bonus for a piece of `role` and `color` on `square`
pub fn pst_value(role: Role, color: Color, square: Square, endgame: bool) -> i32 {
    let table = match role {
        Role::Pawn => &PAWN_PST,
        Role::Knight => &KNIGHT_PST,
        Role::Bishop => &BISHOP_PST,
        Role::Rook => &ROOK_PST,
        Role::Queen => &QUEEN_PST,
        Role::King if endgame => &KING_PST_ENDGAME,
        Role::King => &KING_PST_MIDDLEGAME,
    };
    table[table_index(color, square)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_squares_share_values() {
        for role in Role::ALL {
            for endgame in [false, true] {
                assert_eq!(
                    pst_value(role, Color::White, Square::E2, endgame),
                    pst_value(role, Color::Black, Square::E7, endgame),
                );
                assert_eq!(
                    pst_value(role, Color::White, Square::G1, endgame),
                    pst_value(role, Color::Black, Square::G8, endgame),
                );
            }
        }
    }

    #[test]
    fn test_pawn_table_rewards_advancement() {
        let home = pst_value(Role::Pawn, Color::White, Square::D2, false);
        let seventh = pst_value(Role::Pawn, Color::White, Square::D7, false);
        assert!(seventh > home);
        assert_eq!(pst_value(Role::Pawn, Color::White, Square::D2, false), -37);
    }

    #[test]
    fn test_king_table_depends_on_phase() {
        let castled = pst_value(Role::King, Color::White, Square::G1, false);
        let centre_mid = pst_value(Role::King, Color::White, Square::E4, false);
        let centre_end = pst_value(Role::King, Color::White, Square::E4, true);
        assert!(castled > centre_mid);
        assert!(centre_end > centre_mid);
    }
}
