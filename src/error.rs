use thiserror::Error;

/// Contract violations surfaced by the sieve table.
///
/// The sieve itself has no recoverable-error surface (it is pure arithmetic over an owned
/// table), so the only entries are caller precondition violations, reported eagerly rather
/// than silently producing wrong output.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SieveError {
    /// A zero-length table was requested; the sieve needs at least one odd candidate.
    #[error("invalid bound: table length must be at least 1")]
    InvalidBound,

    /// The marking operation was asked to start at or past the end of the table.
    #[error("invalid mark range: start index {start} out of bounds for table length {len}")]
    InvalidMarkRange { start: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SieveError>;
