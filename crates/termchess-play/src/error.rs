//! Interaction errors.

use termchess_core::{Coordinate, CoordinateError};

/// Errors that can occur while handling user input.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The input line is not a command and not a square.
    #[error(transparent)]
    MalformedCoordinate(#[from] CoordinateError),

    /// The destination holds a piece of the same side as the source.
    #[error("illegal move: {from} to {to}")]
    IllegalMove {
        /// Selected source square.
        from: Coordinate,
        /// Requested destination square.
        to: Coordinate,
    },

    /// An I/O error occurred on the terminal.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
