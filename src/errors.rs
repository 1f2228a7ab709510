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

use std::{error::Error, fmt};

use bitflags::bitflags;

use crate::{color::Color, m::Move, position::Outcome, setup::Setup};

/// Error when trying to play an illegal move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayError {
    /// The move is not among the legal moves of the side to move.
    IllegalMove { m: Move },
    /// The game has already ended.
    GameOver { outcome: Outcome },
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::IllegalMove { m } => write!(f, "illegal move {m}"),
            PlayError::GameOver { outcome } => write!(f, "game is already over ({outcome})"),
        }
    }
}

impl Error for PlayError {}

/// Error when asking for the winner of a game in which the side to move
/// still has legal moves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameNotOverError {
    pub turn: Color,
    pub legal_moves: usize,
}

impl fmt::Display for GameNotOverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "game is not over: {} has {} legal moves",
            self.turn, self.legal_moves
        )
    }
}

impl Error for GameNotOverError {}

bitflags! {
    /// Reasons for a [`Setup`] to be rejected.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct PositionErrorKinds: u32 {
        /// A side has no king.
        const MISSING_KING = 1 << 0;

        /// A side has more than one king.
        const TOO_MANY_KINGS = 1 << 1;

        /// There are pawns on the first or eighth rank.
        const PAWNS_ON_BACKRANK = 1 << 2;

        /// The side that is not to move is in check.
        const IMPOSSIBLE_CHECK = 1 << 3;

        /// A side has more than 16 pieces, more than 8 pawns, or more
        /// pieces than promotions of its missing pawns could explain.
        const TOO_MUCH_MATERIAL = 1 << 4;
    }
}

/// Error when trying to create a [`Chess`](crate::Chess) game from an
/// illegal [`Setup`].
#[derive(Clone, Debug)]
pub struct PositionError {
    pub(crate) setup: Setup,
    pub(crate) errors: PositionErrorKinds,
}

impl PositionError {
    /// The reasons the setup was rejected.
    pub fn kinds(&self) -> PositionErrorKinds {
        self.errors
    }

    /// Gives back the rejected setup.
    pub fn into_setup(self) -> Setup {
        self.setup
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal position")?;

        let mut reasons = Vec::new();
        if self.errors.contains(PositionErrorKinds::MISSING_KING) {
            reasons.push("missing king");
        }
        if self.errors.contains(PositionErrorKinds::TOO_MANY_KINGS) {
            reasons.push("too many kings");
        }
        if self.errors.contains(PositionErrorKinds::PAWNS_ON_BACKRANK) {
            reasons.push("pawns on backrank");
        }
        if self.errors.contains(PositionErrorKinds::IMPOSSIBLE_CHECK) {
            reasons.push("impossible check");
        }
        if self.errors.contains(PositionErrorKinds::TOO_MUCH_MATERIAL) {
            reasons.push("too much material");
        }

        if !reasons.is_empty() {
            write!(f, ": {}", reasons.join(", "))?;
        }
        Ok(())
    }
}

impl Error for PositionError {}
