//! The board: a sparse square-to-piece map plus the currently selected square.

use std::collections::HashMap;

use tracing::trace;

use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;

/// Piece placement and selection state.
///
/// The map is total by convention: any coordinate without an entry, whether
/// the sentinel, off the board, or simply never set, reads as
/// [`Piece::EMPTY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square that has been written.
    grid: HashMap<Coordinate, Piece>,
    /// Square chosen as the move source, or [`Coordinate::NONE`].
    selected: Coordinate,
}

impl Board {
    /// Return an empty board with nothing selected.
    pub fn new() -> Board {
        Board::default()
    }

    /// Return the starting layout.
    ///
    /// White (side 1) holds ranks 8 and 7, Black (side 2) holds ranks 1 and 2,
    /// with the back ranks mirrored. Every square gets a live entry.
    pub fn starting_position() -> Board {
        let mut board = Board::new();

        for square in Coordinate::all() {
            board.set(Piece::EMPTY, square);
        }

        for (file, &kind) in (1u8..).zip(PieceKind::BACK_RANK.iter()) {
            board.set(Piece::new(kind, Side::White), Coordinate::new(file, 8));
            board.set(Piece::new(kind, Side::Black), Coordinate::new(file, 1));
        }

        for file in 1..=Coordinate::SIZE {
            board.set(Piece::new(PieceKind::Pawn, Side::Black), Coordinate::new(file, 2));
            board.set(Piece::new(PieceKind::Pawn, Side::White), Coordinate::new(file, 7));
        }

        board
    }

    /// Overwrite the occupant of `coord`. No validation.
    #[inline]
    pub fn set(&mut self, piece: Piece, coord: Coordinate) {
        self.grid.insert(coord, piece);
    }

    /// Return the occupant of `coord`, or [`Piece::EMPTY`] if it has none.
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Piece {
        self.grid.get(&coord).copied().unwrap_or(Piece::EMPTY)
    }

    /// Mark `coord` as selected and return the piece on it.
    ///
    /// Any coordinate is accepted, including empty squares, the sentinel and
    /// off-board values.
    pub fn select(&mut self, coord: Coordinate) -> Piece {
        self.selected = coord;
        self.get(coord)
    }

    /// Clear the selection.
    #[inline]
    pub fn unselect(&mut self) {
        self.selected = Coordinate::NONE;
    }

    /// Return the selected square, or [`Coordinate::NONE`].
    #[inline]
    pub fn selected(&self) -> Coordinate {
        self.selected
    }

    /// Return the piece on the selected square.
    #[inline]
    pub fn selected_piece(&self) -> Piece {
        self.get(self.selected)
    }

    /// Relocate the piece on `from` to `to` and clear the selection.
    ///
    /// Unconditional: whatever was on `to` is discarded. With `from == to`
    /// the piece is erased, so callers check [`Board::is_valid_move`] first.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) {
        let piece = self.get(from);
        trace!(%from, %to, %piece, "moving piece");
        self.set(piece, to);
        self.set(Piece::EMPTY, from);
        self.unselect();
    }

    /// Return `true` if the pieces on `from` and `to` belong to different sides.
    ///
    /// This is the only rule. Moving onto an empty square is legal for any
    /// piece; moving from an empty square onto another empty square is not,
    /// since both sides are [`Side::Empty`].
    pub fn is_valid_move(&self, from: Coordinate, to: Coordinate) -> bool {
        self.get(from).side() != self.get(to).side()
    }

    /// Iterate over occupied squares in no particular order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.grid
            .iter()
            .filter(|(_, piece)| !piece.is_empty())
            .map(|(&coord, &piece)| (coord, piece))
    }

    /// Number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}
