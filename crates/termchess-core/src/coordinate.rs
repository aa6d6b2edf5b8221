//! Board coordinates: a (file, rank) pair with a "no square" sentinel.

use std::fmt;
use std::str::FromStr;

use crate::error::CoordinateError;

/// File letters in board order; position + 1 is the stored file number.
const FILE_LETTERS: &[u8; 8] = b"abcdefgh";

/// A square on the board, identified by one-based file and rank.
///
/// Valid squares lie in `[1, 8] x [1, 8]` (file 1 = `a`). Values outside that
/// range are representable so that the board can answer for them, and
/// [`Coordinate::NONE`] (`{0, 0}`) marks "nothing selected".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

impl Coordinate {
    /// Number of files and ranks.
    pub const SIZE: u8 = 8;

    /// The "no square" sentinel.
    pub const NONE: Coordinate = Coordinate { file: 0, rank: 0 };

    /// Create a coordinate without range checking.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Coordinate {
        Coordinate { file, rank }
    }

    /// Parse algebraic notation (e.g. "e2") into a coordinate.
    ///
    /// Surrounding whitespace is ignored. The letter must be lowercase `a`-`h`
    /// and the digit `1`-`8`; nothing may follow them.
    pub fn from_algebraic(s: &str) -> Result<Coordinate, CoordinateError> {
        let trimmed = s.trim();
        let malformed = || CoordinateError::Malformed {
            input: trimmed.to_string(),
        };

        let bytes = trimmed.as_bytes();
        let &[file_byte, rank_byte] = bytes else {
            return Err(malformed());
        };

        let file = FILE_LETTERS
            .iter()
            .position(|&letter| letter == file_byte)
            .ok_or_else(malformed)?;
        if !(b'1'..=b'8').contains(&rank_byte) {
            return Err(malformed());
        }

        Ok(Coordinate::new(file as u8 + 1, rank_byte - b'0'))
    }

    /// One-based file (1 = `a`).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// One-based rank.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Return `true` if this is the "no square" sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.file == 0 && self.rank == 0
    }

    /// Return `true` if both axes lie in `1..=8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 1 && self.file <= Self::SIZE && self.rank >= 1 && self.rank <= Self::SIZE
    }

    /// Letter of the file, if the file is on the board.
    pub fn file_letter(self) -> Option<char> {
        match self.file {
            1..=8 => Some(FILE_LETTERS[self.file as usize - 1] as char),
            _ => None,
        }
    }

    /// Iterate over all 64 squares, rank 1 first, files a to h within a rank.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (1..=Self::SIZE)
            .flat_map(|rank| (1..=Self::SIZE).map(move |file| Coordinate::new(file, rank)))
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::from_algebraic(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "-");
        }
        match self.file_letter() {
            Some(letter) if self.is_on_board() => write!(f, "{letter}{}", self.rank()),
            _ => write!(f, "({},{})", self.file(), self.rank()),
        }
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({})", self)
    }
}
