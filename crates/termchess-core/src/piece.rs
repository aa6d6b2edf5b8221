//! A piece with its side; the empty square is a piece too.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// An occupant of a square: a kind and the side it belongs to.
///
/// Empty squares hold [`Piece::EMPTY`] (kind `Empty`, side `Empty`), which is
/// also the `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
}

impl Piece {
    /// The occupant of an empty square.
    pub const EMPTY: Piece = Piece::new(PieceKind::Empty, Side::Empty);

    /// Create a piece from a kind and a side.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece { kind, side }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the side.
    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    /// Return `true` for the empty occupant.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    /// Board glyph of this piece.
    #[inline]
    pub const fn glyph(self) -> char {
        self.kind.glyph()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(f, "{} {}", self.side, self.kind)
        }
    }
}
