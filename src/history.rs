// This file is part of the chessrules library.
// Copyright (C) 2026 The chessrules developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Applying moves to a [`Board`] and taking them back.

use std::{
    ops::{Deref, DerefMut},
    slice,
};

use crate::{board::Board, m::Move};

/// Moves applied to a board, oldest first.
///
/// Only the most recent move can be taken back, using
/// [`Board::revert_last()`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct History {
    moves: Vec<Move>,
}

impl History {
    pub const fn new() -> History {
        History { moves: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The most recently applied move.
    #[inline]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// The trailing `n` moves, or `None` if fewer than `n` moves were
    /// applied.
    pub fn recent(&self, n: usize) -> Option<&[Move]> {
        self.moves
            .len()
            .checked_sub(n)
            .map(|start| &self.moves[start..])
    }

    /// Number of trailing moves that are neither pawn moves nor captures.
    pub fn halfmoves(&self) -> u32 {
        let quiet = self
            .moves
            .iter()
            .rev()
            .take_while(|m| !m.is_zeroing())
            .count();
        u32::try_from(quiet).unwrap_or(u32::MAX)
    }

    fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Board {
    /// Executes a move and records it in the history.
    ///
    /// The move is not validated. Applying a move that does not fit the
    /// board is an invariant violation.
    ///
    /// # Panics
    ///
    /// Panics if there is no piece on the origin square (or the rook
    /// origin of a castling move).
    pub fn apply(&mut self, m: &Move) {
        debug_assert_eq!(self.piece_at(m.from), Some(m.piece), "{m} does not fit the board");

        if m.capture.is_some() {
            self.remove(m.to);
        }
        self.move_piece(m.from, m.to);
        if let Some(castle) = m.castle {
            self.move_piece(castle.rook_from, castle.rook_to);
        }
        if let Some(role) = m.promotion {
            self.set_role(m.to, role);
        }

        self.history.push(*m);
    }

    /// Takes back the most recently applied move, restoring occupancy and
    /// every "has moved" flag exactly.
    ///
    /// Returns the move, or `None` if the history is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessrules::{Board, Color};
    ///
    /// let mut board = Board::new();
    /// let before = board.clone();
    /// let m = board.legal_moves(Color::White)[0];
    ///
    /// board.apply(&m);
    /// assert_eq!(board.revert_last(), Some(m));
    /// assert_eq!(board.render(), before.render());
    /// assert!(board.history().is_empty());
    /// ```
    pub fn revert_last(&mut self) -> Option<Move> {
        let m = self.history.pop()?;

        if let Some(castle) = m.castle {
            self.move_piece(castle.rook_to, castle.rook_from);
            // Castling requires an unmoved rook.
            self.set_has_moved(castle.rook_from, false);
        }
        self.move_piece(m.to, m.from);
        self.set_has_moved(m.from, !m.first_move);
        if m.promotion.is_some() {
            self.set_role(m.from, m.piece.role);
        }
        if let Some(captured) = m.capture {
            self.place(m.to, captured);
        }

        Some(m)
    }

    /// Applies a move for the lifetime of the returned guard. The move is
    /// taken back when the guard is dropped, on every exit path.
    pub(crate) fn speculate(&mut self, m: &Move) -> Speculation<'_> {
        self.apply(m);
        Speculation { board: self }
    }
}

/// A board with one move applied, reverted on drop.
#[derive(Debug)]
pub(crate) struct Speculation<'a> {
    board: &'a mut Board,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.revert_last();
    }
}
