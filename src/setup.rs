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

use crate::{
    board::Board,
    color::Color,
    errors::PositionErrorKinds,
    role::Role,
};

/// A not necessarily legal position to start a game from.
///
/// Validated by [`Chess::from_setup()`](crate::Chess::from_setup).
///
/// # Examples
///
/// ```
/// use chessrules::{Chess, Color, Rules, Setup, Square};
///
/// let mut setup = Setup::empty();
/// setup.board.place(Square::E1, Color::White.king());
/// setup.board.place(Square::C3, Color::White.bishop());
/// setup.board.place(Square::E8, Color::Black.king());
///
/// let game = Chess::from_setup(setup, Rules::default())?;
/// assert!(game.is_insufficient_material());
/// # Ok::<_, chessrules::PositionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Setup {
    /// Piece positions. Any history on the board is discarded when the
    /// setup is validated.
    pub board: Board,
    /// Side to move.
    pub turn: Color,
}

impl Setup {
    /// An empty board with White to move.
    pub const fn empty() -> Setup {
        Setup {
            board: Board::empty(),
            turn: Color::White,
        }
    }

    /// Collects everything that keeps this setup from being a legal
    /// starting position.
    pub(crate) fn errors(&self) -> PositionErrorKinds {
        let mut errors = PositionErrorKinds::empty();
        let material = self.board.material();

        for color in Color::ALL {
            let side = material[color];
            match side.king {
                0 => errors |= PositionErrorKinds::MISSING_KING,
                1 => (),
                _ => errors |= PositionErrorKinds::TOO_MANY_KINGS,
            }
            if side.count() > 16 || side.pawn + side.promoted() > 8 {
                errors |= PositionErrorKinds::TOO_MUCH_MATERIAL;
            }
        }

        if self.board.pieces().any(|(sq, occupant)| {
            occupant.role() == Role::Pawn && (sq.rank() == 0 || sq.rank() == 7)
        }) {
            errors |= PositionErrorKinds::PAWNS_ON_BACKRANK;
        }

        // Check detection needs exactly one king per side.
        if errors.is_empty() && self.board.king_in_check(!self.turn) {
            errors |= PositionErrorKinds::IMPOSSIBLE_CHECK;
        }

        errors
    }
}

impl Default for Setup {
    /// The standard starting position with White to move.
    fn default() -> Setup {
        Setup {
            board: Board::new(),
            turn: Color::White,
        }
    }
}
