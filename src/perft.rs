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

use crate::{board::Board, color::Color, position::Chess};

/// Counts legal move paths of a given length.
///
/// Paths are not cut short when a rule ends the game. Moves are applied
/// and taken back on a private copy of the board.
///
/// # Examples
///
/// ```
/// use chessrules::{perft, Chess};
///
/// let game = Chess::new();
/// assert_eq!(perft(&game, 1), 20);
/// assert_eq!(perft(&game, 2), 400);
/// ```
pub fn perft(pos: &Chess, depth: u32) -> u64 {
    let mut board = pos.board().scratch();
    perft_board(&mut board, pos.turn(), depth)
}

fn perft_board(board: &mut Board, turn: Color, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    let moves = board.legal_moves(turn);
    if depth == 1 {
        moves.len() as u64
    } else {
        moves
            .iter()
            .map(|m| {
                let mut child = board.speculate(m);
                perft_board(&mut child, !turn, depth - 1)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_leaves_game_untouched() {
        let game = Chess::new();
        assert_eq!(perft(&game, 0), 1);
        assert_eq!(perft(&game, 2), 400);
        assert!(game.board().history().is_empty());
        assert_eq!(game.render(), Chess::new().render());
    }
}
