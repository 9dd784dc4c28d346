//! Movement legality and move execution

use crate::board::{Board, MoveError};

use parlorchess_base::geometry::Delta;
use parlorchess_base::types::{Coord, CoordParseError, PieceKind};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a [`Move`] from string
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum RawParseError {
    /// Input is not two tokens or one four-character token
    #[error("bad string length")]
    BadLength,
    /// Bad source square
    #[error("bad source: {0}")]
    BadSrc(CoordParseError),
    /// Bad destination square
    #[error("bad destination: {0}")]
    BadDst(CoordParseError),
}

/// Error executing a move string against a board
///
/// Composes every failure of the decode → lookup → validate → apply pipeline
/// into a single reported outcome.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ExecuteError {
    /// Error decoding the input into a move
    #[error("cannot parse move: {0}")]
    Parse(#[from] RawParseError),
    /// The move was decoded but the board rejected it
    #[error("invalid move: {0}")]
    Move(#[from] MoveError),
}

/// Tolerance for magnitude-shaped legality checks
const MAGNITUDE_EPS: f64 = 0.01;

fn knight_leap() -> f64 {
    Delta::new(1, 2).magnitude()
}

// Exactly one axis moves: a rank or file slide of any distance.
fn line_rule(d: Delta) -> bool {
    (d.d_rank != 0) != (d.d_file != 0)
}

// Both signed components equal. Covers one of the two diagonals and the
// zero displacement.
fn diagonal_rule(d: Delta) -> bool {
    d.d_rank == d.d_file
}

/// Returns whether the displacement shape is legal for the piece kind
///
/// Purely geometric: board occupancy, check safety and turn order are all
/// ignored here. The per-kind predicates are:
///
/// - `Pawn`: magnitude of the displacement is at most 1, i.e. any
///   adjacent-or-zero square in any direction;
/// - `Rook`: exactly one of the components is nonzero, any distance;
/// - `Bishop`: both signed components are equal, any distance, zero included;
/// - `Queen`, `King`: the rook rule or the bishop rule (the king's distance is
///   deliberately uncapped);
/// - `Knight`: the magnitude equals the knight's leap within tolerance, which
///   admits exactly the eight L-shaped displacements.
pub fn is_delta_legal(kind: PieceKind, delta: Delta) -> bool {
    match kind {
        PieceKind::Pawn => delta.magnitude() <= 1.0,
        PieceKind::Rook => line_rule(delta),
        PieceKind::Bishop => diagonal_rule(delta),
        PieceKind::Queen | PieceKind::King => line_rule(delta) || diagonal_rule(delta),
        PieceKind::Knight => (delta.magnitude() - knight_leap()).abs() <= MAGNITUDE_EPS,
    }
}

/// A move request: source square and destination square
///
/// A `Move` is only a pair of decoded coordinates. Whether it is acceptable
/// for the piece standing on `src` is decided by [`Board::apply_move()`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    /// Source square
    pub src: Coord,
    /// Destination square
    pub dst: Coord,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{} {}", self.src, self.dst)
    }
}

impl FromStr for Move {
    type Err = RawParseError;

    /// Parses a move from two whitespace-separated algebraic tokens
    /// (`"e2 e4"`), or from a single four-character token (`"e2e4"`)
    fn from_str(s: &str) -> Result<Move, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (src, dst) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(src), Some(dst), None) => (src, dst),
            (Some(both), None, None) if both.len() == 4 && both.is_char_boundary(2) => {
                (&both[0..2], &both[2..4])
            }
            _ => return Err(RawParseError::BadLength),
        };
        Ok(Move {
            src: Coord::from_str(src).map_err(RawParseError::BadSrc)?,
            dst: Coord::from_str(dst).map_err(RawParseError::BadDst)?,
        })
    }
}

/// Runs one full move attempt against the board
///
/// Decodes `input` into a [`Move`], resolves the source square to an occupying
/// piece, validates the displacement and applies the relocation. Any failure
/// along the way leaves the board untouched and is reported as a single
/// [`ExecuteError`].
pub fn execute(board: &mut Board, input: &str) -> Result<Move, ExecuteError> {
    let mv = Move::from_str(input)?;
    board.apply_move(mv.src, mv.dst)?;
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deltas() -> impl Iterator<Item = Delta> {
        (-7..=7).flat_map(|r| (-7..=7).map(move |f| Delta::new(r, f)))
    }

    #[test]
    fn test_pawn() {
        for d in deltas() {
            assert_eq!(
                is_delta_legal(PieceKind::Pawn, d),
                d.magnitude() <= 1.0,
                "delta {}",
                d
            );
        }
        assert!(is_delta_legal(PieceKind::Pawn, Delta::new(0, 0)));
        assert!(is_delta_legal(PieceKind::Pawn, Delta::new(1, 0)));
        assert!(is_delta_legal(PieceKind::Pawn, Delta::new(0, 1)));
        assert!(is_delta_legal(PieceKind::Pawn, Delta::new(-1, 0)));
        assert!(!is_delta_legal(PieceKind::Pawn, Delta::new(1, 1)));
        assert!(!is_delta_legal(PieceKind::Pawn, Delta::new(0, 3)));
    }

    #[test]
    fn test_rook() {
        for d in deltas() {
            let expected = (d.d_rank == 0) != (d.d_file == 0);
            assert_eq!(is_delta_legal(PieceKind::Rook, d), expected, "delta {}", d);
        }
        assert!(is_delta_legal(PieceKind::Rook, Delta::new(0, 5)));
        assert!(is_delta_legal(PieceKind::Rook, Delta::new(-7, 0)));
        assert!(!is_delta_legal(PieceKind::Rook, Delta::new(0, 0)));
        assert!(!is_delta_legal(PieceKind::Rook, Delta::new(1, 1)));
    }

    #[test]
    fn test_bishop() {
        for d in deltas() {
            assert_eq!(
                is_delta_legal(PieceKind::Bishop, d),
                d.d_rank == d.d_file,
                "delta {}",
                d
            );
        }
        assert!(is_delta_legal(PieceKind::Bishop, Delta::new(2, 2)));
        assert!(is_delta_legal(PieceKind::Bishop, Delta::new(-3, -3)));
        assert!(is_delta_legal(PieceKind::Bishop, Delta::new(0, 0)));
        assert!(!is_delta_legal(PieceKind::Bishop, Delta::new(2, -2)));
    }

    #[test]
    fn test_queen_and_king() {
        for d in deltas() {
            let expected =
                is_delta_legal(PieceKind::Rook, d) || is_delta_legal(PieceKind::Bishop, d);
            assert_eq!(is_delta_legal(PieceKind::Queen, d), expected, "delta {}", d);
            assert_eq!(
                is_delta_legal(PieceKind::King, d),
                is_delta_legal(PieceKind::Queen, d),
                "delta {}",
                d
            );
        }
    }

    #[test]
    fn test_knight() {
        let legal: Vec<_> = deltas()
            .filter(|&d| is_delta_legal(PieceKind::Knight, d))
            .collect();
        assert_eq!(legal.len(), 8);
        for d in &legal {
            let (r, f) = (d.d_rank.abs(), d.d_file.abs());
            assert!((r, f) == (1, 2) || (r, f) == (2, 1), "delta {}", d);
        }
        assert!(!is_delta_legal(PieceKind::Knight, Delta::new(0, 0)));
        assert!(!is_delta_legal(PieceKind::Knight, Delta::new(2, 3)));
    }

    #[test]
    fn test_parse() {
        let mv = Move::from_str("e2 e4").unwrap();
        assert_eq!(mv.src, Coord::from_str("e2").unwrap());
        assert_eq!(mv.dst, Coord::from_str("e4").unwrap());
        assert_eq!(mv.to_string(), "e2 e4");

        assert_eq!(Move::from_str("e2e4"), Ok(mv));
        assert_eq!(Move::from_str("  e2   e4 "), Ok(mv));
        assert_eq!(Move::from_str("E2 E4"), Ok(mv));

        assert_eq!(Move::from_str(""), Err(RawParseError::BadLength));
        assert_eq!(Move::from_str("e2"), Err(RawParseError::BadLength));
        assert_eq!(Move::from_str("e2 e4 e5"), Err(RawParseError::BadLength));
        assert_eq!(
            Move::from_str("i9 e4"),
            Err(RawParseError::BadSrc(CoordParseError::UnexpectedFileChar(
                'i'
            )))
        );
        assert_eq!(
            Move::from_str("e2 e9"),
            Err(RawParseError::BadDst(CoordParseError::UnexpectedRankChar(
                '9'
            )))
        );
    }

    #[test]
    fn test_execute() {
        let mut b = Board::initial();
        let mv = execute(&mut b, "a1 f1").unwrap();
        assert_eq!(mv.to_string(), "a1 f1");

        let before = b.clone();
        assert!(matches!(
            execute(&mut b, "b7 b9"),
            Err(ExecuteError::Parse(RawParseError::BadDst(_)))
        ));
        assert_eq!(b, before);

        assert!(matches!(
            execute(&mut b, "e4 e5"),
            Err(ExecuteError::Move(MoveError::NoPieceAt(_)))
        ));
        assert_eq!(b, before);

        assert!(matches!(
            execute(&mut b, "b2 e2"),
            Err(ExecuteError::Move(MoveError::IllegalMove { .. }))
        ));
        assert_eq!(b, before);
    }
}
