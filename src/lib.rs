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

//! A chess rules engine: board model, legal move generation and detection
//! of the end of the game.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use chessrules::Chess;
//!
//! let game = Chess::default();
//! let legals = game.legal_moves();
//! assert_eq!(legals.len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! # use chessrules::Chess;
//! use chessrules::Square;
//! #
//! # let mut game = Chess::default();
//!
//! // 1. e4
//! let m = game
//!     .legal_moves()
//!     .into_iter()
//!     .find(|m| m.from == Square::E2 && m.to == Square::E4)
//!     .expect("e4 is legal");
//! game.play(&m)?;
//! assert_eq!(game.render().lines().nth(4), Some("    P   "));
//! # Ok::<_, chessrules::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! # use chessrules::Chess;
//! # let game = Chess::default();
//! assert!(!game.is_checkmate());
//! assert!(!game.is_stalemate());
//! assert!(!game.is_insufficient_material());
//! assert_eq!(game.outcome(), None); // no winner yet
//! ```
//!
//! Moves are recorded on the [`Board`], which can take back the most recent
//! one exactly, including every "has moved" flag.
//!
//! Not supported: en passant, promotion choices, threefold repetition and
//! any notation parsing.
//!
//! # Logging
//!
//! Played moves, rejected moves and game results are reported as
//! [`tracing`](https://docs.rs/tracing/0.1/tracing/) events. No subscriber
//! is installed by this crate.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   vocabulary types, moves, outcomes and [`Rules`].
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![doc(html_root_url = "https://docs.rs/chessrules/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod castling_side;
mod color;
mod errors;
mod history;
mod legal;
mod m;
mod perft;
mod position;
mod role;
mod setup;
mod square;
mod types;

pub mod board;
pub mod movegen;

pub use board::Board;
pub use castling_side::CastlingSide;
pub use color::{ByColor, Color, ParseColorError};
pub use errors::{GameNotOverError, PlayError, PositionError, PositionErrorKinds};
pub use history::History;
pub use m::{Castle, Move, MoveList};
pub use perft::perft;
pub use position::{Chess, DrawReason, Outcome};
pub use role::{ByRole, Role};
pub use setup::Setup;
pub use square::{ParseSquareError, Square};
pub use types::{Occupant, Piece, Rules};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
