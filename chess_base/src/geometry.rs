use crate::types::{Color, PieceKind, Rank};

use derive_more::{Add, AddAssign, Neg, Sub, SubAssign};
use std::fmt;

/// Displacement between two squares, as destination minus source
///
/// A `Delta` is transient: it is computed per move attempt and never stored.
/// Components are signed board-space offsets, so they always fit in `i8`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Add, AddAssign, Sub, SubAssign, Neg)]
pub struct Delta {
    pub d_rank: i8,
    pub d_file: i8,
}

impl Delta {
    pub const fn new(d_rank: i8, d_file: i8) -> Delta {
        Delta { d_rank, d_file }
    }

    /// Euclidean length of the displacement
    pub fn magnitude(&self) -> f64 {
        f64::from(self.d_rank).hypot(f64::from(self.d_file))
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "({}, {})", self.d_rank, self.d_file)
    }
}

pub const fn back_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

pub const fn pawn_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Starting arrangement of the back rank, from file `a` to file `h`
///
/// The royal pair is mirrored for Black, so both kings start on the same file
/// as the opposing queen.
pub const fn back_rank_order(c: Color) -> [PieceKind; 8] {
    use PieceKind::*;
    match c {
        Color::White => [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook],
        Color::Black => [Rook, Knight, Bishop, King, Queen, Bishop, Knight, Rook],
    }
}
