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

//! The 8×8 grid of cells and the pieces standing on it.

use std::{fmt, iter::FusedIterator};

use crate::{
    color::{ByColor, Color},
    history::History,
    role::{ByRole, Role},
    square::Square,
    types::{Occupant, Piece},
};

/// Piece positions on a board, together with the history of moves that
/// were applied to it.
///
/// # Examples
///
/// ```
/// use chessrules::{Board, Color, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
///
/// print!("{}", board);
/// // rnbqkbnr
/// // pppppppp
/// //
/// //
/// //
/// //
/// // PPPPPPPP
/// // RNBQKBNR
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Option<Occupant>; 64],
    pub(crate) history: History,
}

impl Board {
    /// A board with the standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();

        let backrank = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        for color in Color::ALL {
            for (file, role) in (0..).zip(backrank) {
                board.place(on(color.backrank(), file), role.of(color));
                board.place(on(color.pawn_rank(), file), color.pawn());
            }
        }

        board
    }

    /// A board without any pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; 64],
            history: History::new(),
        }
    }

    #[inline]
    pub fn occupant_at(&self, sq: Square) -> Option<Occupant> {
        self.cells[sq.to_usize()]
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.occupant_at(sq).map(|occupant| occupant.piece)
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.occupant_at(sq).map(Occupant::color)
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.occupant_at(sq).map(Occupant::role)
    }

    /// Puts a piece on a square, replacing whatever stood there.
    ///
    /// A plain [`Piece`] is placed as not having moved yet. Pass an
    /// [`Occupant`] to control the flag.
    pub fn place<O: Into<Occupant>>(&mut self, sq: Square, occupant: O) {
        self.cells[sq.to_usize()] = Some(occupant.into());
    }

    /// Takes the piece off a square.
    pub fn remove(&mut self, sq: Square) -> Option<Occupant> {
        self.cells[sq.to_usize()].take()
    }

    /// Moves the piece on `from` to `to` and marks it as moved.
    ///
    /// # Panics
    ///
    /// Panics if there is no piece on `from`.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let occupant = match self.remove(from) {
            Some(occupant) => occupant,
            None => panic!("no piece on {from} to move to {to}"),
        };
        self.place(to, occupant.moved());
    }

    pub(crate) fn set_has_moved(&mut self, sq: Square, has_moved: bool) {
        if let Some(occupant) = &mut self.cells[sq.to_usize()] {
            occupant.has_moved = has_moved;
        }
    }

    pub(crate) fn set_role(&mut self, sq: Square, role: Role) {
        if let Some(occupant) = &mut self.cells[sq.to_usize()] {
            occupant.piece.role = role;
        }
    }

    /// Iterates over occupied squares in scan order: rank ascending, then
    /// file ascending. The order determines the order of generated moves.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessrules::{Board, Color, Square};
    ///
    /// let board = Board::new();
    /// let (sq, occupant) = board.pieces().next().expect("a1 is occupied");
    /// assert_eq!(sq, Square::A1);
    /// assert_eq!(occupant.piece, Color::White.rook());
    /// assert_eq!(board.pieces().count(), 32);
    /// ```
    #[inline]
    pub fn pieces(&self) -> Pieces<'_> {
        Pieces {
            cells: &self.cells,
            next: 0,
        }
    }

    /// Pieces of one color, in scan order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        self.pieces()
            .filter(move |(_, occupant)| occupant.color() == color)
    }

    /// Finds the king of the given color.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, occupant)| occupant.piece == color.king())
            .map(|(sq, _)| sq)
    }

    /// Counts pieces by color and role.
    pub fn material(&self) -> ByColor<ByRole<u8>> {
        let mut material = ByColor::<ByRole<u8>>::default();
        for (_, occupant) in self.pieces() {
            *material[occupant.color()].get_mut(occupant.role()) += 1;
        }
        material
    }

    /// Moves applied to this board, oldest first.
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// A copy of the piece positions with an empty history, for
    /// speculative play.
    pub(crate) fn scratch(&self) -> Board {
        Board {
            cells: self.cells,
            history: History::new(),
        }
    }

    /// Renders the board as 8 rows of 8 characters, rank 8 first, each row
    /// terminated by a newline. White pieces are uppercase, black pieces
    /// lowercase and empty squares are spaces.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let ch = self.piece_at(on(rank, file)).map_or(' ', Piece::char);
                fmt::Write::write_char(f, ch)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

fn on(rank: u8, file: u8) -> Square {
    match Square::from_coords(i32::from(rank), i32::from(file)) {
        Some(sq) => sq,
        None => unreachable!("rank {rank} and file {file} are on the board"),
    }
}

/// Iterator over the occupied squares of a [`Board`], in scan order.
#[derive(Clone, Debug)]
pub struct Pieces<'a> {
    cells: &'a [Option<Occupant>; 64],
    next: usize,
}

impl Iterator for Pieces<'_> {
    type Item = (Square, Occupant);

    fn next(&mut self) -> Option<(Square, Occupant)> {
        while self.next < 64 {
            let index = self.next;
            self.next += 1;
            if let (Some(occupant), Some(sq)) = (self.cells[index], Square::from_index(index)) {
                return Some((sq, occupant));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(64 - self.next))
    }
}

impl FusedIterator for Pieces<'_> {}
