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

//! Pseudo-legal move generation.
//!
//! Moves obey the movement pattern and the blocking and capture rules of
//! each piece, without regard to whether they leave the mover's own king
//! in check.

use crate::{
    board::Board,
    castling_side::CastlingSide,
    m::{Castle, Move, MoveList},
    role::Role,
    square::Square,
    types::Occupant,
};

/// Generates the pseudo-legal moves of the piece on `from`, in its
/// generation order, and appends them to `moves`. Does nothing if the
/// square is empty.
///
/// # Panics
///
/// Panics if `moves` runs out of capacity.
pub fn pseudo_legal_moves(board: &Board, from: Square, moves: &mut MoveList) {
    let Some(mover) = board.occupant_at(from) else {
        return;
    };

    match mover.role() {
        Role::Pawn => gen_pawn_moves(board, from, mover, moves),
        Role::Knight => KnightTag::gen_moves(board, from, mover, moves),
        Role::Bishop => BishopTag::gen_moves(board, from, mover, moves),
        Role::Rook => RookTag::gen_moves(board, from, mover, moves),
        Role::Queen => QueenTag::gen_moves(board, from, mover, moves),
        Role::King => {
            KingTag::gen_moves(board, from, mover, moves);
            gen_castling_moves(board, from, mover, moves);
        }
    }
}

/// The move of `mover` to `to`, unless `to` holds a piece of the same
/// color.
fn step(board: &Board, from: Square, mover: Occupant, to: Square) -> Option<Move> {
    match board.occupant_at(to) {
        Some(target) if target.color() == mover.color() => None,
        capture => Some(Move::normal(mover, from, to, capture)),
    }
}

trait Stepper {
    const ROLE: Role;
    const DELTAS: &'static [(i32, i32)];

    fn gen_moves(board: &Board, from: Square, mover: Occupant, moves: &mut MoveList) {
        debug_assert_eq!(mover.role(), Self::ROLE);
        moves.extend(
            Self::DELTAS
                .iter()
                .filter_map(|&(drank, dfile)| from.offset(drank, dfile))
                .filter_map(|to| step(board, from, mover, to)),
        );
    }
}

trait Slider {
    const ROLE: Role;
    const DIRECTIONS: &'static [(i32, i32)];

    fn gen_moves(board: &Board, from: Square, mover: Occupant, moves: &mut MoveList) {
        debug_assert_eq!(mover.role(), Self::ROLE);
        for &(drank, dfile) in Self::DIRECTIONS {
            let mut ray = from.offset(drank, dfile);
            while let Some(to) = ray {
                let Some(m) = step(board, from, mover, to) else {
                    break;
                };
                moves.push(m);
                if m.is_capture() {
                    break;
                }
                ray = to.offset(drank, dfile);
            }
        }
    }
}

const ADJACENT: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

struct KingTag;
struct KnightTag;
struct BishopTag;
struct RookTag;
struct QueenTag;

impl Stepper for KingTag {
    const ROLE: Role = Role::King;
    const DELTAS: &'static [(i32, i32)] = &ADJACENT;
}

impl Stepper for KnightTag {
    const ROLE: Role = Role::Knight;
    const DELTAS: &'static [(i32, i32)] = &[
        (-2, -1),
        (-2, 1),
        (-1, -2),
        (-1, 2),
        (1, -2),
        (1, 2),
        (2, -1),
        (2, 1),
    ];
}

impl Slider for BishopTag {
    const ROLE: Role = Role::Bishop;
    const DIRECTIONS: &'static [(i32, i32)] = &[(-1, -1), (-1, 1), (1, -1), (1, 1)];
}

impl Slider for RookTag {
    const ROLE: Role = Role::Rook;
    const DIRECTIONS: &'static [(i32, i32)] = &[(-1, 0), (0, -1), (0, 1), (1, 0)];
}

impl Slider for QueenTag {
    const ROLE: Role = Role::Queen;
    const DIRECTIONS: &'static [(i32, i32)] = &ADJACENT;
}

fn gen_pawn_moves(board: &Board, from: Square, pawn: Occupant, moves: &mut MoveList) {
    let color = pawn.color();
    let forward = color.forward();

    if let Some(single) = from.offset(forward, 0).filter(|&to| board.occupant_at(to).is_none()) {
        moves.push(Move::normal(pawn, from, single, None));

        if !pawn.has_moved && from.rank() == color.pawn_rank() {
            if let Some(double) = single
                .offset(forward, 0)
                .filter(|&to| board.occupant_at(to).is_none())
            {
                moves.push(Move::normal(pawn, from, double, None));
            }
        }
    }

    for dfile in [-1, 1] {
        let Some(to) = from.offset(forward, dfile) else {
            continue;
        };
        if let Some(capture) = board.occupant_at(to).filter(|target| target.color() != color) {
            moves.push(Move::normal(pawn, from, to, Some(capture)));
        }
    }
}

fn gen_castling_moves(board: &Board, from: Square, king: Occupant, moves: &mut MoveList) {
    let color = king.color();
    if king.has_moved || from.rank() != color.backrank() || from.file() != 4 {
        return;
    }

    for side in CastlingSide::ALL {
        let rook_from = side.rook_from(color);
        let rook = match board.occupant_at(rook_from) {
            Some(rook) if rook.piece == color.rook() && !rook.has_moved => rook,
            _ => continue,
        };

        let (lo, hi) = if rook_from < from {
            (rook_from, from)
        } else {
            (from, rook_from)
        };
        let path_clear = Square::all()
            .filter(|&sq| lo < sq && sq < hi)
            .all(|sq| board.occupant_at(sq).is_none());
        if !path_clear {
            continue;
        }

        moves.push(Move {
            castle: Some(Castle {
                side,
                rook: rook.piece,
                rook_from,
                rook_to: side.rook_to(color),
            }),
            ..Move::normal(king, from, side.king_to(color), None)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn moves_from(board: &Board, from: Square) -> Vec<String> {
        let mut moves = MoveList::new();
        pseudo_legal_moves(board, from, &mut moves);
        moves.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_knight_order() {
        let board = Board::new();
        assert_eq!(moves_from(&board, Square::B1), ["Nb1-a3", "Nb1-c3"]);

        let mut board = Board::empty();
        board.place(Square::D4, Color::White.knight());
        board.place(Square::B3, Color::White.pawn());
        board.place(Square::F5, Color::Black.pawn());
        assert_eq!(
            moves_from(&board, Square::D4),
            ["Nd4-c2", "Nd4-e2", "Nd4-f3", "Nd4-b5", "Nd4xf5", "Nd4-c6", "Nd4-e6"]
        );
    }

    #[test]
    fn test_pawn_moves() {
        let mut board = Board::new();
        assert_eq!(moves_from(&board, Square::E2), ["e2-e3", "e2-e4"]);

        board.place(Square::D3, Color::Black.knight());
        board.place(Square::E4, Color::Black.pawn());
        assert_eq!(moves_from(&board, Square::E2), ["e2-e3", "e2xd3"]);

        board.place(Square::E3, Color::White.bishop());
        assert_eq!(moves_from(&board, Square::E2), ["e2xd3"]);
        assert!(moves_from(&board, Square::E4).is_empty());
    }

    #[test]
    fn test_pawn_double_step_needs_unmoved_pawn() {
        let mut board = Board::empty();
        board.place(Square::C7, Occupant::new(Color::Black.pawn()).moved());
        assert_eq!(moves_from(&board, Square::C7), ["c7-c6"]);

        board.place(Square::C7, Color::Black.pawn());
        assert_eq!(moves_from(&board, Square::C7), ["c7-c6", "c7-c5"]);

        // Not on its start rank.
        board.place(Square::H5, Color::White.pawn());
        assert_eq!(moves_from(&board, Square::H5), ["h5-h6"]);
    }

    #[test]
    fn test_slider_blocking() {
        let mut board = Board::empty();
        board.place(Square::A1, Color::White.rook());
        board.place(Square::A3, Color::Black.knight());
        board.place(Square::C1, Color::White.king());
        assert_eq!(moves_from(&board, Square::A1), ["Ra1-b1", "Ra1-a2", "Ra1xa3"]);

        board.place(Square::C3, Color::White.bishop());
        assert_eq!(
            moves_from(&board, Square::C3),
            ["Bc3-b2", "Bc3-d2", "Bc3-e1", "Bc3-b4", "Bc3-a5", "Bc3-d4", "Bc3-e5", "Bc3-f6", "Bc3-g7", "Bc3-h8"]
        );
    }

    #[test]
    fn test_queen_moves_are_union() {
        let mut board = Board::empty();
        board.place(Square::D4, Color::White.queen());
        assert_eq!(moves_from(&board, Square::D4).len(), 27);

        board.place(Square::D4, Color::White.rook());
        let rook = moves_from(&board, Square::D4).len();
        board.place(Square::D4, Color::White.bishop());
        let bishop = moves_from(&board, Square::D4).len();
        assert_eq!(rook + bishop, 27);
    }

    #[test]
    fn test_castling_generation() {
        let mut board = Board::empty();
        board.place(Square::E1, Color::White.king());
        board.place(Square::A1, Color::White.rook());
        board.place(Square::H1, Color::White.rook());
        let moves = moves_from(&board, Square::E1);
        assert_eq!(&moves[moves.len() - 2..], ["O-O-O", "O-O"]);

        // Blocked on the queen side.
        board.place(Square::B1, Color::White.knight());
        let moves = moves_from(&board, Square::E1);
        assert_eq!(moves.last().map(String::as_str), Some("O-O"));
        assert!(!moves.iter().any(|m| m == "O-O-O"));

        // Moved rook.
        board.place(Square::H1, Occupant::new(Color::White.rook()).moved());
        assert!(!moves_from(&board, Square::E1).iter().any(|m| m.starts_with('O')));

        // Moved king.
        board.remove(Square::B1);
        board.place(Square::H1, Color::White.rook());
        board.place(Square::E1, Occupant::new(Color::White.king()).moved());
        assert!(!moves_from(&board, Square::E1).iter().any(|m| m.starts_with('O')));

        // Opposing rook.
        board.place(Square::E1, Color::White.king());
        board.place(Square::A1, Color::Black.rook());
        board.place(Square::H1, Color::Black.rook());
        assert!(!moves_from(&board, Square::E1).iter().any(|m| m.starts_with('O')));
    }

    #[test]
    fn test_castle_move_fields() {
        let mut board = Board::empty();
        board.place(Square::E8, Color::Black.king());
        board.place(Square::H8, Color::Black.rook());
        let mut moves = MoveList::new();
        pseudo_legal_moves(&board, Square::E8, &mut moves);
        let castle = moves.iter().find(|m| m.is_castle()).expect("castling move");
        assert_eq!(castle.to, Square::G8);
        assert!(castle.first_move);
        let rook = castle.castle.expect("rook half");
        assert_eq!(rook.rook_from, Square::H8);
        assert_eq!(rook.rook_to, Square::F8);
        assert_eq!(rook.side, CastlingSide::KingSide);
    }
}
