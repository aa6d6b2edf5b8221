//! The two playing sides, plus the "no occupant" side of an empty square.

use std::fmt;

/// Which side a piece belongs to.
///
/// `Empty` (0) is not a player: it is the side of an unoccupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Side {
    #[default]
    Empty = 0,
    White = 1,
    Black = 2,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Empty => write!(f, "empty"),
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}
