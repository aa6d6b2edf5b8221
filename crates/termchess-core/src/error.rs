//! Error types for coordinate parsing.

/// Errors that occur when turning user text into a [`Coordinate`](crate::Coordinate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    /// The text is not a file letter `a`-`h` followed by a rank digit `1`-`8`.
    #[error("malformed square \"{input}\": expected a file a-h and a rank 1-8, e.g. e2")]
    Malformed {
        /// The rejected input.
        input: String,
    },
}
