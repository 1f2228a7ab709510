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

use crate::{color::Color, square::Square};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    #[inline]
    pub const fn is_queen_side(self) -> bool {
        matches!(self, CastlingSide::QueenSide)
    }

    #[inline]
    pub const fn is_king_side(self) -> bool {
        matches!(self, CastlingSide::KingSide)
    }

    pub const fn king_to_file(self) -> i32 {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }

    pub const fn rook_from_file(self) -> i32 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    pub const fn rook_to_file(self) -> i32 {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }

    fn on_backrank(color: Color, file: i32) -> Square {
        match Square::from_coords(i32::from(color.backrank()), file) {
            Some(sq) => sq,
            None => unreachable!("castling files are on the board"),
        }
    }

    pub fn king_to(self, color: Color) -> Square {
        CastlingSide::on_backrank(color, self.king_to_file())
    }

    pub fn rook_from(self, color: Color) -> Square {
        CastlingSide::on_backrank(color, self.rook_from_file())
    }

    pub fn rook_to(self, color: Color) -> Square {
        CastlingSide::on_backrank(color, self.rook_to_file())
    }

    /// `QueenSide` and `KingSide`, in the order castling moves are
    /// generated.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::QueenSide, CastlingSide::KingSide];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castling_squares() {
        assert_eq!(CastlingSide::KingSide.king_to(Color::White), Square::G1);
        assert_eq!(CastlingSide::KingSide.rook_from(Color::White), Square::H1);
        assert_eq!(CastlingSide::KingSide.rook_to(Color::White), Square::F1);
        assert_eq!(CastlingSide::QueenSide.king_to(Color::Black), Square::C8);
        assert_eq!(CastlingSide::QueenSide.rook_from(Color::Black), Square::A8);
        assert_eq!(CastlingSide::QueenSide.rook_to(Color::Black), Square::D8);
    }

    #[test]
    fn test_generation_order() {
        assert!(CastlingSide::ALL[0].is_queen_side());
        assert!(CastlingSide::ALL[1].is_king_side());
    }
}
