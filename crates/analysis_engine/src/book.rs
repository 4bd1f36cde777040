//! Opening book
//!
//! A small static table of well-known opening positions, matched on the
//! exact FEN text. A hit answers the request without searching.

use crate::board::Board;
use shakmaty::Move;
use tracing::warn;

/// (FEN, reply in coordinate notation)
const BOOK_ENTRIES: [(&str, &str); 7] = [
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "e2e4",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        "e7e5",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1",
        "d7d5",
    ),
    (
        "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        "e4d5",
    ),
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        "g1f3",
    ),
    (
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        "f1b5",
    ),
    (
        "rnbqkb1r/pppp1ppp/5n2/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 4 3",
        "d2d3",
    ),
];

/// Exact-FEN lookup table
#[derive(Debug, Clone, Copy, Default)]
pub struct OpeningBook;

impl OpeningBook {
    /// Book reply text for `fen`, if any
    pub fn lookup(&self, fen: &str) -> Option<&'static str> {
        let fen = fen.trim();
        BOOK_ENTRIES
            .iter()
            .find(|(book_fen, _)| *book_fen == fen)
            .map(|(_, reply)| *reply)
    }

    /// Book reply resolved against `board`
    ///
    /// An entry whose reply is not legal in the position is skipped.
    pub fn probe(&self, fen: &str, board: &Board) -> Option<Move> {
        let reply = self.lookup(fen)?;
        match board.parse_uci(reply) {
            Ok(mv) => Some(mv),
            Err(e) => {
                warn!("[BOOK] Ignoring book entry: {}", e);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        BOOK_ENTRIES.len()
    }

    pub fn is_empty(&self) -> bool {
        BOOK_ENTRIES.is_empty()
    }
}
