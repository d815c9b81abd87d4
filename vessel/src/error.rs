use thiserror::Error;

/// Errors returned when an [outcome](crate::outcome::Outcome) is assembled from a loosely
/// typed descriptor, see [`Outcome::from_parts`](crate::outcome::Outcome::from_parts).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Neither an `ok` nor an `error` side was provided.
    #[error("outcome descriptor carries neither a value nor an error")]
    Empty,
    /// Both sides were provided, so the descriptor is not a two-case union.
    #[error("outcome descriptor carries both a value and an error")]
    Ambiguous,
}
