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

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// Uppercase letter for white pieces, lowercase for black.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessrules::Color;
    ///
    /// assert_eq!(Color::White.knight().char(), 'N');
    /// assert_eq!(Color::Black.queen().char(), 'q');
    /// ```
    pub fn char(self) -> char {
        self.color.fold(self.role.upper_char(), self.role.char())
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch).map(|role| role.of(Color::from_white(ch.is_ascii_uppercase())))
    }
}

/// A piece standing on the board, together with its "has moved" flag.
///
/// The flag gates the pawn double step and castling.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub piece: Piece,
    pub has_moved: bool,
}

impl Occupant {
    #[inline]
    pub const fn new(piece: Piece) -> Occupant {
        Occupant {
            piece,
            has_moved: false,
        }
    }

    /// The same piece, marked as having moved before.
    #[must_use]
    #[inline]
    pub const fn moved(self) -> Occupant {
        Occupant {
            has_moved: true,
            ..self
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.piece.color
    }

    #[inline]
    pub const fn role(self) -> Role {
        self.piece.role
    }
}

impl From<Piece> for Occupant {
    #[inline]
    fn from(piece: Piece) -> Occupant {
        Occupant::new(piece)
    }
}

/// Draw rules applied after every move.
///
/// # Examples
///
/// ```
/// use chessrules::Rules;
///
/// let rules = Rules::default();
/// assert_eq!(rules.fifty_moves, 50);
/// assert!(rules.insufficient_material);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rules {
    /// Number of consecutive half-moves without a pawn move or capture
    /// that ends the game in a draw. `0` disables the rule.
    pub fifty_moves: u32,
    /// Whether positions without mating material end the game in a draw.
    pub insufficient_material: bool,
}

impl Default for Rules {
    fn default() -> Rules {
        Rules {
            fifty_moves: 50,
            insufficient_material: true,
        }
    }
}
