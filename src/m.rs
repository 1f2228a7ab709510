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

use std::fmt::{self, Write as _};

use arrayvec::ArrayVec;

use crate::{
    castling_side::CastlingSide,
    color::Color,
    role::Role,
    square::Square,
    types::{Occupant, Piece},
};

/// The rook half of a castling move.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Castle {
    pub side: CastlingSide,
    pub rook: Piece,
    pub rook_from: Square,
    pub rook_to: Square,
}

/// Information about a move.
///
/// A move is a plain value: it carries everything needed to apply it to a
/// board and to take it back again, including the captured piece and its
/// "has moved" flag. Two moves are equal iff all fields are equal.
///
/// # Display
///
/// `Move` implements [`Display`](fmt::Display) using long algebraic
/// notation, e.g. `Nb1-c3`, `Qd8xh4` or `O-O-O`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub to: Square,
    pub from: Square,
    pub piece: Piece,
    /// Whether this is the first move of the moving piece.
    pub first_move: bool,
    pub capture: Option<Occupant>,
    pub castle: Option<Castle>,
    /// Piece the pawn turns into. Never produced by move generation.
    pub promotion: Option<Role>,
}

impl Move {
    /// A non-castling move of `mover` from `from` to `to`.
    pub const fn normal(
        mover: Occupant,
        from: Square,
        to: Square,
        capture: Option<Occupant>,
    ) -> Move {
        Move {
            to,
            from,
            piece: mover.piece,
            first_move: !mover.has_moved,
            capture,
            castle: None,
            promotion: None,
        }
    }

    /// Gets the role of the moved piece.
    #[inline]
    pub const fn role(&self) -> Role {
        self.piece.role
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.piece.color
    }

    /// Checks if the move is a capture.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Checks if the move resets the fifty-move count, i.e. is a pawn
    /// move or a capture.
    #[inline]
    pub const fn is_zeroing(&self) -> bool {
        matches!(self.piece.role, Role::Pawn) || self.capture.is_some()
    }

    /// Checks if the move is a castling move.
    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    /// Gets the castling side.
    pub fn castling_side(&self) -> Option<CastlingSide> {
        self.castle.map(|castle| castle.side)
    }

    /// Checks if the move is a promotion.
    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(castle) = self.castle {
            return f.write_str(match castle.side {
                CastlingSide::KingSide => "O-O",
                CastlingSide::QueenSide => "O-O-O",
            });
        }

        if self.piece.role != Role::Pawn {
            f.write_char(self.piece.role.upper_char())?;
        }

        write!(
            f,
            "{}{}{}",
            self.from,
            if self.is_capture() { 'x' } else { '-' },
            self.to
        )?;

        if let Some(role) = self.promotion {
            write!(f, "={}", role.upper_char())?;
        }

        Ok(())
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is enough to hold the legal moves of any position accepted
/// by [`Chess::from_setup()`](crate::Chess::from_setup). The most known is
/// 218.
pub type MoveList = ArrayVec<Move, 256>;
