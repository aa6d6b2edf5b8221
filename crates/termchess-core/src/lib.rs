//! Core board types: coordinates, pieces, and the board with its one move rule.

mod board;
mod coordinate;
mod error;
mod piece;
mod piece_kind;
mod side;

pub use board::Board;
pub use coordinate::Coordinate;
pub use error::CoordinateError;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use side::Side;
