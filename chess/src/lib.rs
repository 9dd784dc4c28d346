//! # parlorchess
//!
//! Board model and movement legality engine for a console chess session.
//!
//! The engine answers one question per move attempt: is this displacement
//! shape legal for this piece kind? It does not track turns, captures, check
//! or any other positional rule. Input arrives as two-character algebraic
//! tokens, gets decoded into [`Coord`] pairs and, when the occupant of the
//! source square accepts the displacement, the board mutates in place.

pub mod board;
pub mod moves;

pub use parlorchess_base::geometry::{self, Delta};
pub use parlorchess_base::types::{
    Cell, CellParseError, Color, Coord, CoordParseError, File, PieceKind, Rank,
};

pub use board::{Board, MoveError, Piece, PrettyStyle};
pub use moves::{execute, ExecuteError, Move, RawParseError};
