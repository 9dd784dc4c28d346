use crate::geometry::Delta;

use std::fmt::{self, Display};
use std::hint;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing [`Coord`] from an algebraic token
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    /// File character is outside `a..h` (or `A..H`)
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    /// Rank character is outside `1..8`
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    /// Token is not exactly two characters long
    #[error("invalid string length")]
    BadLength,
}

/// Error parsing [`Cell`] from a character
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellParseError {
    #[error("unexpected cell char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Vertical line of the board, labeled `a..h` from White's left
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "file index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    unsafe fn from_char_unchecked(c: char) -> Self {
        File::from_index_unchecked((u32::from(c) - u32::from('a')) as usize)
    }

    /// Parses a file from its letter. Both cases are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            c @ 'a'..='h' => Some(unsafe { Self::from_char_unchecked(c) }),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Horizontal line of the board
///
/// Index 0 is White's back rank (rank `1` in algebraic notation), and the index
/// grows toward Black's side of the board.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => Rank::R1,
            1 => Rank::R2,
            2 => Rank::R3,
            3 => Rank::R4,
            4 => Rank::R5,
            5 => Rank::R6,
            6 => Rank::R7,
            7 => Rank::R8,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "rank index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    unsafe fn from_char_unchecked(c: char) -> Self {
        Rank::from_index_unchecked((u32::from(c) - u32::from('1')) as usize)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(unsafe { Self::from_char_unchecked(c) }),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'1' + *self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Square coordinate
///
/// Packs a [`File`] and a [`Rank`] into a single byte. A `Coord` is always a
/// valid on-board square, so board bounds never need to be rechecked after
/// construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coord(u8);

impl Coord {
    pub const fn from_index(val: usize) -> Coord {
        assert!(val < 64, "coord must be between 0 and 63");
        Coord(val as u8)
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Coord {
        Coord(val as u8)
    }

    pub const fn from_parts(file: File, rank: Rank) -> Coord {
        Coord(((rank as u8) << 3) | file as u8)
    }

    pub const fn file(&self) -> File {
        unsafe { File::from_index_unchecked((self.0 & 7) as usize) }
    }

    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_index_unchecked((self.0 >> 3) as usize) }
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the displacement leading from `self` to `dst`
    pub fn delta_to(self, dst: Coord) -> Delta {
        Delta::new(
            dst.rank().index() as i8 - self.rank().index() as i8,
            dst.file().index() as i8 - self.file().index() as i8,
        )
    }

    /// Applies `delta` to the coordinate, returning `None` if the result
    /// leaves the board
    pub fn shifted(self, delta: Delta) -> Option<Coord> {
        let rank = self.rank().index() as i16 + i16::from(delta.d_rank);
        let file = self.file().index() as i16 + i16::from(delta.d_file);
        if !(0..8).contains(&rank) || !(0..8).contains(&file) {
            return None;
        }
        Some(Coord::from_parts(
            File::from_index(file as usize),
            Rank::from_index(rank as usize),
        ))
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Coord)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.0 < 64 {
            return write!(f, "Coord({})", self);
        }
        write!(f, "Coord(?{:?})", self.0)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file().as_char(), self.rank().as_char())
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 2 {
            return Err(CoordParseError::BadLength);
        }
        let mut chars = s.chars();
        let (file_ch, rank_ch) = (chars.next().unwrap(), chars.next().unwrap());
        Ok(Coord::from_parts(
            File::from_char(file_ch).ok_or(CoordParseError::UnexpectedFileChar(file_ch))?,
            Rank::from_char(rank_ch).ok_or(CoordParseError::UnexpectedRankChar(rank_ch))?,
        ))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Kind of a chess piece, without color
///
/// This is a closed set: movement legality is a single `match` over the kind,
/// and adding a variant means adding one match arm.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    King = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
}

impl PieceKind {
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            PieceKind::Pawn,
            PieceKind::King,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
        ]
        .into_iter()
    }
}

/// Contents of a single square: either empty or a colored piece, in one byte
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);
    pub const MAX_INDEX: usize = 13;

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_occupied(&self) -> bool {
        self.0 != 0
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Cell {
        Cell(val as u8)
    }

    pub const fn from_index(val: usize) -> Cell {
        assert!(val < Self::MAX_INDEX, "index too large");
        Cell(val as u8)
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    pub const fn from_parts(c: Color, p: PieceKind) -> Cell {
        Cell(match c {
            Color::White => 1 + p as u8,
            Color::Black => 7 + p as u8,
        })
    }

    pub const fn color(&self) -> Option<Color> {
        match self.0 {
            0 => None,
            1..=6 => Some(Color::White),
            _ => Some(Color::Black),
        }
    }

    pub const fn kind(&self) -> Option<PieceKind> {
        match self.0 {
            0 => None,
            1 | 7 => Some(PieceKind::Pawn),
            2 | 8 => Some(PieceKind::King),
            3 | 9 => Some(PieceKind::Knight),
            4 | 10 => Some(PieceKind::Bishop),
            5 | 11 => Some(PieceKind::Rook),
            6 | 12 => Some(PieceKind::Queen),
            _ => unsafe { hint::unreachable_unchecked() },
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::MAX_INDEX).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn as_char(&self) -> char {
        b".PKNBRQpknbrq"[self.0 as usize] as char
    }

    pub fn as_utf8_char(&self) -> char {
        [
            '.', '♙', '♔', '♘', '♗', '♖', '♕', '♟', '♚', '♞', '♝', '♜', '♛',
        ][self.0 as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        if c == '.' {
            return Some(Cell::EMPTY);
        }
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'k' => PieceKind::King,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            _ => return None,
        };
        Some(Cell::from_parts(color, kind))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if (self.0 as usize) < Self::MAX_INDEX {
            return write!(f, "Cell({})", self.as_char());
        }
        write!(f, "Cell(?{:?})", self.0)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(CellParseError::BadLength);
        }
        let ch = s.as_bytes()[0] as char;
        Cell::from_char(ch).ok_or(CellParseError::UnexpectedChar(ch))
    }
}
