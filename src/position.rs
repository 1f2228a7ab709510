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

use std::fmt;

use tracing::{debug, info, warn};

use crate::{
    board::Board,
    color::Color,
    errors::{GameNotOverError, PlayError, PositionError},
    m::{Move, MoveList},
    setup::Setup,
    types::Rules,
};

/// Why a game ended in a draw without a stalemate.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawReason {
    /// Fifty consecutive half-moves without a pawn move or capture.
    FiftyMoves,
    /// Neither side can possibly deliver checkmate.
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrawReason::FiftyMoves => "fifty-move rule",
            DrawReason::InsufficientMaterial => "insufficient material",
        })
    }
}

/// Outcome of a game.
///
/// # Display
///
/// `1-0` if White won, `0-1` if Black won, `1/2-1/2` otherwise.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Draw { reason: DrawReason },
}

impl Outcome {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            Outcome::Stalemate | Outcome::Draw { .. } => None,
        }
    }

    pub const fn is_draw(self) -> bool {
        self.winner().is_none()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Checkmate {
                winner: Color::White,
            } => "1-0",
            Outcome::Checkmate {
                winner: Color::Black,
            } => "0-1",
            Outcome::Stalemate | Outcome::Draw { .. } => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A game of standard chess: a board, the side to move and the rules that
/// end the game.
///
/// # Examples
///
/// ```
/// use chessrules::{Chess, Color, Outcome, Square};
///
/// let mut game = Chess::new();
///
/// for (from, to) in [
///     (Square::F2, Square::F3),
///     (Square::E7, Square::E5),
///     (Square::G2, Square::G4),
///     (Square::D8, Square::H4),
/// ] {
///     let m = game
///         .legal_moves()
///         .into_iter()
///         .find(|m| m.from == from && m.to == to)
///         .expect("legal");
///     game.play(&m)?;
/// }
///
/// assert_eq!(game.outcome(), Some(Outcome::Checkmate { winner: Color::Black }));
/// assert_eq!(game.determine_winner(), Ok(Some(Color::Black)));
/// # Ok::<_, chessrules::PlayError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Chess {
    board: Board,
    turn: Color,
    rules: Rules,
    fullmoves: u32,
    outcome: Option<Outcome>,
}

impl Chess {
    /// A game from the standard starting position with default [`Rules`].
    pub fn new() -> Chess {
        Chess::with_rules(Rules::default())
    }

    /// A game from the standard starting position.
    pub fn with_rules(rules: Rules) -> Chess {
        Chess {
            board: Board::new(),
            turn: Color::White,
            rules,
            fullmoves: 1,
            outcome: None,
        }
    }

    /// Validates a [`Setup`] and starts a game from it.
    ///
    /// The game starts with an empty history. Termination is first
    /// evaluated after the first move is played.
    ///
    /// # Errors
    ///
    /// Errors if a side does not have exactly one king, if there are pawns
    /// on the backrank, or if the side not to move is in check.
    pub fn from_setup(setup: Setup, rules: Rules) -> Result<Chess, PositionError> {
        let errors = setup.errors();
        if !errors.is_empty() {
            return Err(PositionError { setup, errors });
        }

        Ok(Chess {
            board: setup.board.scratch(),
            turn: setup.turn,
            rules,
            fullmoves: 1,
            outcome: None,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Move number, starting at 1 and incremented after every Black move.
    #[inline]
    pub fn fullmoves(&self) -> u32 {
        self.fullmoves
    }

    /// Number of half-moves since the last pawn move or capture.
    pub fn halfmoves(&self) -> u32 {
        self.board.history().halfmoves()
    }

    /// The outcome, once a move has ended the game.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal moves of the side to move, in scan order of the moving piece
    /// and then in the generation order of each piece.
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.turn)
    }

    /// Tests if a move is among the legal moves of the side to move.
    pub fn is_legal(&self, m: &Move) -> bool {
        self.legal_moves().contains(m)
    }

    /// Tests if the king of the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.king_in_check(self.turn)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.legal_moves().is_empty()
    }

    /// Tests if neither side has the material to deliver checkmate: no
    /// pawns, rooks or queens, and either both sides have at most one minor
    /// piece, or one side has two knights against a bare king.
    pub fn is_insufficient_material(&self) -> bool {
        let material = self.board.material();

        if material.any(|side| side.has_mating_material()) {
            return false;
        }

        if material.all(|side| side.minors() <= 1) {
            return true;
        }

        Color::ALL.into_iter().any(|color| {
            let (us, them) = (material[color], material[!color]);
            us.knight == 2 && us.bishop == 0 && them.minors() == 0
        })
    }

    /// Validates and plays a move, then evaluates whether the game is over.
    ///
    /// Returns the outcome if the move ended the game.
    ///
    /// # Errors
    ///
    /// Errors without changing the game if the move is not legal, or if
    /// the game is already over.
    pub fn play(&mut self, m: &Move) -> Result<Option<Outcome>, PlayError> {
        if let Some(outcome) = self.outcome {
            warn!(%m, %outcome, "move played after the game ended");
            return Err(PlayError::GameOver { outcome });
        }

        if !self.is_legal(m) {
            warn!(%m, turn = %self.turn, "illegal move");
            return Err(PlayError::IllegalMove { m: *m });
        }

        debug!(%m, turn = %self.turn, "play");
        self.board.apply(m);
        if self.turn.is_black() {
            self.fullmoves = self.fullmoves.saturating_add(1);
        }
        self.turn = !self.turn;

        self.outcome = self.evaluate();
        if let Some(outcome) = self.outcome {
            info!(%outcome, fullmoves = self.fullmoves, "game over");
        }
        Ok(self.outcome)
    }

    fn evaluate(&self) -> Option<Outcome> {
        let in_check = self.is_check();

        if self.legal_moves().is_empty() {
            return Some(if in_check {
                Outcome::Checkmate { winner: !self.turn }
            } else {
                Outcome::Stalemate
            });
        }

        if self.rules.fifty_moves > 0 {
            let window = usize::try_from(self.rules.fifty_moves).unwrap_or(usize::MAX);
            if let Some(recent) = self.board.history().recent(window) {
                if !recent.iter().any(Move::is_zeroing) {
                    return Some(Outcome::Draw {
                        reason: DrawReason::FiftyMoves,
                    });
                }
            }
        }

        if self.rules.insufficient_material && !in_check && self.is_insufficient_material() {
            return Some(Outcome::Draw {
                reason: DrawReason::InsufficientMaterial,
            });
        }

        None
    }

    /// Gets the winner of a game that ended because the side to move has
    /// no legal moves: the other side if the king is in check, `None` for a
    /// stalemate.
    ///
    /// # Errors
    ///
    /// Errors if the side to move still has legal moves, even if the game
    /// ended in a draw by rule.
    pub fn determine_winner(&self) -> Result<Option<Color>, GameNotOverError> {
        let legal_moves = self.legal_moves().len();
        if legal_moves > 0 {
            return Err(GameNotOverError {
                turn: self.turn,
                legal_moves,
            });
        }

        Ok(if self.is_check() {
            Some(!self.turn)
        } else {
            None
        })
    }

    /// Renders the board. See [`Board::render()`].
    pub fn render(&self) -> String {
        self.board.render()
    }
}

impl Default for Chess {
    fn default() -> Chess {
        Chess::new()
    }
}
