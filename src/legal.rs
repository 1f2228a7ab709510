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

//! Check detection and the legality filter.

use tracing::trace;

use crate::{
    board::Board,
    color::Color,
    m::{Move, MoveList},
    movegen,
    square::Square,
};

impl Board {
    /// Pseudo-legal moves of all pieces of `color`, in scan order of the
    /// moving piece and then in the generation order of each piece.
    ///
    /// The list grows as needed, so any placement of pieces works.
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut buffer = MoveList::new();
        for (from, _) in self.pieces_of(color) {
            movegen::pseudo_legal_moves(self, from, &mut buffer);
            moves.extend(buffer.drain(..));
        }
        moves
    }

    /// Tests if any pseudo-legal move of a piece of color `by` lands on
    /// `sq`.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        let mut moves = MoveList::new();
        self.pieces_of(by).any(|(from, _)| {
            moves.clear();
            movegen::pseudo_legal_moves(self, from, &mut moves);
            moves.iter().any(|m| m.to == sq)
        })
    }

    /// Tests if the king of `color` is attacked.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king on the board.
    pub fn king_in_check(&self, color: Color) -> bool {
        match self.king_of(color) {
            Some(king) => self.is_attacked(king, !color),
            None => panic!("{color} has no king"),
        }
    }

    /// Legal moves of `color`: the pseudo-legal moves that do not leave its
    /// own king in check. A castling king must also not pass through an
    /// attacked square.
    ///
    /// The candidates are tried on a private copy of the board, so `self`
    /// is never mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessrules::{Board, Color};
    ///
    /// let board = Board::new();
    /// assert_eq!(board.legal_moves(Color::White).len(), 20);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king on the board, or if there are more
    /// legal moves than a [`MoveList`] holds. No position accepted by
    /// [`Chess::from_setup()`](crate::Chess::from_setup) has that many.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut scratch = self.scratch();
        let mut moves = MoveList::new();
        for m in self.pseudo_legal_moves(color) {
            if scratch.is_safe(&m) {
                moves.push(m);
            } else {
                trace!(%m, "rejected move that leaves own king in check");
            }
        }
        moves
    }

    fn is_safe(&mut self, m: &Move) -> bool {
        if let Some(castle) = m.castle {
            let toward_king = if castle.side.is_king_side() { -1 } else { 1 };
            if let Some(hop) = m.to.offset(0, toward_king) {
                let hop = Move {
                    to: hop,
                    castle: None,
                    ..*m
                };
                if !self.leaves_king_safe(&hop) {
                    return false;
                }
            }
        }
        self.leaves_king_safe(m)
    }

    fn leaves_king_safe(&mut self, m: &Move) -> bool {
        let after = self.speculate(m);
        !after.king_in_check(m.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{role::Role, types::Occupant};

    fn castles(board: &Board, color: Color) -> Vec<String> {
        board
            .legal_moves(color)
            .iter()
            .filter(|m| m.is_castle())
            .map(ToString::to_string)
            .collect()
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.place(Square::E1, Color::White.king());
        board.place(Square::A1, Color::White.rook());
        board.place(Square::H1, Color::White.rook());
        board.place(Square::E8, Color::Black.king());
        board
    }

    #[test]
    fn test_initial_position() {
        let board = Board::new();
        let moves = board.legal_moves(Color::White);
        assert_eq!(moves.len(), 20);
        assert_eq!(moves.iter().filter(|m| m.role() == Role::Pawn).count(), 16);
        assert_eq!(moves[0].to_string(), "Nb1-a3");
        assert_eq!(board.legal_moves(Color::Black).len(), 20);
        assert!(!board.king_in_check(Color::White));
    }

    #[test]
    fn test_pinned_piece() {
        let mut board = Board::empty();
        board.place(Square::E1, Color::White.king());
        board.place(Square::E2, Color::White.knight());
        board.place(Square::E8, Color::Black.rook());
        board.place(Square::A8, Color::Black.king());
        let moves = board.legal_moves(Color::White);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.role() == Role::King));
        assert_eq!(board.pseudo_legal_moves(Color::White).len(), 4 + 6);
    }

    #[test]
    fn test_check_detection() {
        let mut board = Board::empty();
        board.place(Square::E1, Color::White.king());
        board.place(Square::H4, Color::Black.queen());
        board.place(Square::E8, Color::Black.king());
        assert!(board.king_in_check(Color::White));
        assert!(!board.king_in_check(Color::Black));

        board.place(Square::F2, Occupant::new(Color::White.pawn()).moved());
        assert!(!board.king_in_check(Color::White));
    }

    #[test]
    fn test_pawns_attack_diagonally() {
        let mut board = Board::empty();
        board.place(Square::D1, Color::White.king());
        board.place(Square::A8, Color::Black.king());
        board.place(Square::D2, Occupant::new(Color::Black.pawn()).moved());
        assert!(!board.king_in_check(Color::White));

        // Empty squares are not capture destinations.
        assert!(!board.is_attacked(Square::E1, Color::Black));

        board.remove(Square::D1);
        board.place(Square::E1, Occupant::new(Color::White.king()).moved());
        assert!(board.king_in_check(Color::White));
    }

    #[test]
    fn test_pseudo_legal_moves_of_crowded_board() {
        let mut board = Board::empty();
        board.place(Square::A1, Color::White.king());
        board.place(Square::H8, Color::Black.king());
        for sq in Square::all().filter(|sq| sq.rank() % 2 == 1 && sq.rank() < 7) {
            board.place(sq, Color::White.queen());
        }
        for sq in Square::all().filter(|sq| sq.rank() == 0 && sq.file() > 0) {
            board.place(sq, Color::White.knight());
        }

        let moves = board.pseudo_legal_moves(Color::White);
        let expected: usize = board
            .pieces_of(Color::White)
            .map(|(from, _)| {
                let mut buffer = MoveList::new();
                movegen::pseudo_legal_moves(&board, from, &mut buffer);
                buffer.len()
            })
            .sum();
        assert_eq!(moves.len(), expected);
        assert!(moves.iter().all(|m| m.color() == Color::White));
    }

    #[test]
    fn test_castling_allowed() {
        let board = castling_board();
        assert_eq!(castles(&board, Color::White), ["O-O-O", "O-O"]);
    }

    #[test]
    fn test_castling_through_attacked_square() {
        let mut board = castling_board();
        board.place(Square::F8, Color::Black.rook());
        assert_eq!(castles(&board, Color::White), ["O-O-O"]);

        // The b-file may be attacked, the king does not cross it.
        let mut board = castling_board();
        board.place(Square::B8, Color::Black.rook());
        assert_eq!(castles(&board, Color::White), ["O-O-O", "O-O"]);

        let mut board = castling_board();
        board.place(Square::D8, Color::Black.rook());
        assert_eq!(castles(&board, Color::White), ["O-O"]);
    }

    #[test]
    fn test_castling_into_attacked_square() {
        let mut board = castling_board();
        board.place(Square::G8, Color::Black.rook());
        assert_eq!(castles(&board, Color::White), ["O-O-O"]);

        let mut board = castling_board();
        board.place(Square::C8, Color::Black.rook());
        assert_eq!(castles(&board, Color::White), ["O-O"]);
    }

    #[test]
    fn test_legal_moves_leave_board_untouched() {
        let board = castling_board();
        let before: Vec<_> = board.pieces().collect();
        let _ = board.legal_moves(Color::White);
        assert_eq!(board.pieces().collect::<Vec<_>>(), before);
        assert!(board.history().is_empty());
    }

    #[test]
    #[should_panic(expected = "white has no king")]
    fn test_missing_king_panics() {
        Board::empty().king_in_check(Color::White);
    }
}
