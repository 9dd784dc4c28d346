//! Board and related things

use crate::moves;

use parlorchess_base::geometry::{self, Delta};
use parlorchess_base::types::{Cell, Color, Coord, File, PieceKind, Rank};

use arrayvec::ArrayVec;
use std::fmt::{self, Display};

use thiserror::Error;

/// Error applying a move to the board
///
/// All the variants are turn-local and non-fatal: the board is left untouched,
/// and the session may go on with the next input.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// The source square is not occupied
    #[error("no piece at {0}")]
    NoPieceAt(Coord),
    /// The occupant's legality predicate rejected the displacement
    #[error("illegal {kind:?} move, delta {delta}")]
    IllegalMove {
        /// Kind of the piece that rejected the move
        kind: PieceKind,
        /// Rejected displacement
        delta: Delta,
    },
}

/// A single piece owned by the board
///
/// Pieces are value types living in the board's collection; none exists
/// outside a [`Board`]. Only `pos` is ever mutated, and only by a successful
/// [`Board::apply_move()`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    /// Owning side; fixed at construction
    pub color: Color,
    /// Kind, which selects the legality predicate; fixed at construction
    pub kind: PieceKind,
    /// Current square
    pub pos: Coord,
}

impl Piece {
    /// Returns the square contents this piece would occupy
    #[inline]
    pub const fn cell(&self) -> Cell {
        Cell::from_parts(self.color, self.kind)
    }
}

/// Chess board owning the full collection of pieces
///
/// The board stores pieces as plain records in a fixed-capacity vector and
/// answers square lookups with a linear scan. At most one piece is expected
/// per square; since captures are not modeled, keeping that invariant across
/// moves is the caller's contract, not something [`Board::apply_move()`]
/// enforces.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    pieces: ArrayVec<Piece, 32>,
}

impl Board {
    /// Returns a board with the standard starting arrangement
    ///
    /// 8 pawns plus 8 back-rank pieces per color, placed per the order tables
    /// in [`geometry`].
    pub fn initial() -> Board {
        Board::with_back_ranks(
            geometry::back_rank_order(Color::White),
            geometry::back_rank_order(Color::Black),
        )
    }

    /// Returns a board with the given back-rank arrangements
    ///
    /// Each side gets its pawns on the usual pawn rank and the pieces from its
    /// order table on the back rank, file `a` through file `h`.
    pub fn with_back_ranks(white: [PieceKind; 8], black: [PieceKind; 8]) -> Board {
        let mut pieces = ArrayVec::new();
        for (color, order) in [(Color::White, white), (Color::Black, black)] {
            let pawn_rank = geometry::pawn_rank(color);
            let back_rank = geometry::back_rank(color);
            for (file, kind) in File::iter().zip(order) {
                pieces.push(Piece {
                    color,
                    kind: PieceKind::Pawn,
                    pos: Coord::from_parts(file, pawn_rank),
                });
                pieces.push(Piece {
                    color,
                    kind,
                    pos: Coord::from_parts(file, back_rank),
                });
            }
        }
        Board { pieces }
    }

    /// Returns the piece occupying square `c`, if any
    ///
    /// First match in insertion order wins if the one-piece-per-square
    /// invariant was broken by the caller.
    pub fn piece_at(&self, c: Coord) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.pos == c)
    }

    /// Returns the contents of square `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.piece_at(c).map_or(Cell::EMPTY, Piece::cell)
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Cell {
        self.get(Coord::from_parts(file, rank))
    }

    /// Returns a view over all the pieces, in insertion order
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Relocates the piece at `src` to `dst` if the displacement is legal
    ///
    /// Looks up the occupant of `src`, computes the displacement `dst - src`
    /// and asks the occupant's legality predicate. On success, exactly that
    /// piece's position changes; on any failure nothing changes.
    pub fn apply_move(&mut self, src: Coord, dst: Coord) -> Result<(), MoveError> {
        let delta = src.delta_to(dst);
        let piece = self
            .pieces
            .iter_mut()
            .find(|p| p.pos == src)
            .ok_or(MoveError::NoPieceAt(src))?;
        if !moves::is_delta_legal(piece.kind, delta) {
            return Err(MoveError::IllegalMove {
                kind: piece.kind,
                delta,
            });
        }
        piece.pos = dst;
        Ok(())
    }

    /// Wraps the board to allow pretty-printing with the given style `style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use parlorchess::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbkqbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::initial()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter().rev() {
            if rank != Rank::R8 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for file in File::iter() {
                let cell = self.get2(file, rank);
                if cell.is_empty() {
                    empty += 1;
                    continue;
                }
                if empty != 0 {
                    write!(f, "{}", (b'0' + empty) as char)?;
                    empty = 0;
                }
                write!(f, "{}", cell)?;
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
            }
        }
        Ok(())
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn cell(c: Cell) -> char;

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter().rev() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                write!(f, "{}", Self::cell(b.get2(file, rank)))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn cell(c: Cell) -> char {
        c.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn cell(c: Cell) -> char {
        c.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}
