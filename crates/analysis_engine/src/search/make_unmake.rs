//! Move making and unmaking for search
//!
//! `Board::make` plays a move in place and returns a [`MadeMove`] guard.
//! The guard derefs to the child position and restores the parent when it
//! is dropped, so every exit path of a recursive call (normal return, `?`,
//! unwinding) unmakes the move.

use crate::board::Board;
use shakmaty::{Chess, Move, Position};
use std::ops::{Deref, DerefMut};

/// A move made on a borrowed board, unmade on drop
pub struct MadeMove<'a> {
    board: &'a mut Board,
    undo: Chess,
}

impl Board {
    /// Make `mv` on this board (returns the unmake guard)
    ///
    /// `mv` must be legal in the current position.
    pub fn make(&mut self, mv: &Move) -> MadeMove<'_> {
        let undo = self.pos.clone();
        self.pos.play_unchecked(mv);
        MadeMove { board: self, undo }
    }
}

impl Deref for MadeMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for MadeMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for MadeMove<'_> {
    fn drop(&mut self) {
        std::mem::swap(&mut self.board.pos, &mut self.undo);
    }
}
