//! Board adapter over the chess rules provider
//!
//! Wraps a [`shakmaty::Chess`] position and exposes exactly the rule queries
//! the search and evaluator consume:
//! - FEN parsing and formatting
//! - Legal move generation and terminal state queries
//! - Attacker, piece and piece-set queries
//! - Move classification (capture, castle, gives check)
//! - UCI / SAN conversion and the position fingerprint
//!
//! Making and unmaking moves lives in `search::make_unmake`, which hands out
//! a guard that restores the position when dropped.

use crate::error::{EngineError, EngineResult};
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{
    Bitboard, CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Piece, Position, Role,
    Square,
};

/// Halfmove clock at which the seventy-five-move rule ends the game
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Mutable position owned by one analysis call
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pos: Chess,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            pos: Chess::default(),
        }
    }
}

impl Board {
    /// Parse a FEN string into a legal standard-chess position
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidFen`] if the text is malformed or the
    /// described position is not legal.
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let invalid = |reason: String| EngineError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        let pos: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;

        Ok(Self { pos })
    }

    /// Format the position as FEN (en passant square only when capturable)
    pub fn to_fen(&self) -> String {
        Fen::from_position(self.pos.clone(), EnPassantMode::Legal).to_string()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    #[inline]
    pub fn legal_moves(&self) -> MoveList {
        self.pos.legal_moves()
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        self.pos.is_check()
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    #[inline]
    pub fn is_insufficient_material(&self) -> bool {
        self.pos.is_insufficient_material()
    }

    /// Draw by rule that does not depend on the legal move list
    pub fn is_rule_draw(&self) -> bool {
        self.pos.is_insufficient_material() || self.pos.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
    }

    /// Pieces of `color` attacking `square` on the current occupancy
    pub fn attackers(&self, color: Color, square: Square) -> Bitboard {
        let board = self.pos.board();
        board.attacks_to(square, color, board.occupied())
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pos.board().piece_at(square)
    }

    /// Squares occupied by pieces of the given kind and color
    #[inline]
    pub fn squares_of(&self, role: Role, color: Color) -> Bitboard {
        self.pos.board().by_piece(role.of(color))
    }

    #[inline]
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.pos.board().king_of(color)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.pos.board().occupied()
    }

    #[inline]
    pub fn is_capture(&self, mv: &Move) -> bool {
        mv.is_capture()
    }

    #[inline]
    pub fn is_castle(&self, mv: &Move) -> bool {
        mv.is_castle()
    }

    /// Whether playing `mv` puts the opponent in check
    pub fn gives_check(&mut self, mv: &Move) -> bool {
        let child = self.make(mv);
        child.is_check()
    }

    /// Play a legal move without keeping the parent position
    pub fn play(&mut self, mv: &Move) {
        self.pos.play_unchecked(mv);
    }

    /// Coordinate notation (`e2e4`, `e1g1`, `e7e8q`)
    pub fn uci(&self, mv: &Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }

    /// Standard algebraic notation with check/mate suffix
    pub fn san(&self, mv: &Move) -> String {
        SanPlus::from_move(self.pos.clone(), mv).to_string()
    }

    /// Resolve coordinate notation against the current position
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IllegalMove`] if the text is not a legal move here.
    pub fn parse_uci(&self, uci: &str) -> EngineResult<Move> {
        let illegal = || EngineError::IllegalMove {
            uci: uci.to_string(),
            fen: self.to_fen(),
        };

        let parsed: UciMove = uci.parse().map_err(|_| illegal())?;
        parsed.to_move(&self.pos).map_err(|_| illegal())
    }

    /// Full-board Zobrist fingerprint (pieces, side, castling, en passant)
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.pos.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
    }

    /// Same placement with the other side to move
    ///
    /// Returns `None` when that position would be illegal (the side to move
    /// is currently in check).
    pub fn with_turn_swapped(&self) -> Option<Board> {
        self.pos.clone().swap_turn().ok().map(|pos| Board { pos })
    }
}
