use crate::error::DescriptorError;
use thiserror::Error;

/// The payload of a failed [outcome](Outcome).
///
/// `Uninitialized` is the identity of outcome accumulation: it marks an outcome that has not
/// been decided yet, and gets replaced by the first concrete success or failure folded into it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum Fault<E> {
    /// No decision has been made yet.
    #[error("outcome has not been decided yet")]
    Uninitialized,
    /// A concrete error supplied by the caller.
    #[error("{0}")]
    Error(E),
}

impl<E> Fault<E> {
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    /// Returns the concrete error, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            Self::Uninitialized => None,
        }
    }

    pub fn as_ref(&self) -> Fault<&E> {
        match self {
            Self::Error(error) => Fault::Error(error),
            Self::Uninitialized => Fault::Uninitialized,
        }
    }

    pub fn map<F, O>(self, f: F) -> Fault<O>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Self::Error(error) => Fault::Error(f(error)),
            Self::Uninitialized => Fault::Uninitialized,
        }
    }
}

impl<E> Default for Fault<E> {
    fn default() -> Self {
        Self::Uninitialized
    }
}

/// The result of a computation that either succeeded with a `T` or failed with an `E`.
///
/// An outcome is a sequence of exactly one element for iteration purposes: successes emit their
/// value, failures halt the fold they take part in. Failures take precedence over successes when
/// outcomes are accumulated, with the exception of [`Fault::Uninitialized`], which never wins
/// over a concrete decision. See [`OutcomeBuilder`](crate::build::OutcomeBuilder) for the exact
/// rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<E, T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed, or has not been decided yet.
    Failure(Fault<E>),
}

impl<E, T> Outcome<E, T> {
    /// Creates an undecided outcome, a failure holding [`Fault::Uninitialized`].
    pub fn new() -> Self {
        Self::Failure(Fault::Uninitialized)
    }

    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a concrete failure.
    pub fn failure(error: E) -> Self {
        Self::Failure(Fault::Error(error))
    }

    /// Maps `Ok` to a success and `Err` to a concrete failure.
    pub fn from_outcome(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Builds an outcome from a descriptor whose two sides are not tied together by the type
    /// system, such as a pair of optional fields. Exactly one side must be provided.
    pub fn from_parts(ok: Option<T>, error: Option<E>) -> Result<Self, DescriptorError> {
        match (ok, error) {
            (Some(value), None) => Ok(Self::Success(value)),
            (None, Some(error)) => Ok(Self::failure(error)),
            (Some(_), Some(_)) => Err(DescriptorError::Ambiguous),
            (None, None) => Err(DescriptorError::Empty),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this is a failure, including an undecided one.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Failure(Fault::Uninitialized))
    }

    /// Returns the success value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure payload, if any.
    pub fn fault(&self) -> Option<&Fault<E>> {
        match self {
            Self::Failure(fault) => Some(fault),
            Self::Success(_) => None,
        }
    }

    pub fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(fault) => Outcome::Failure(fault.as_ref()),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Maps a concrete error, leaving successes and undecided outcomes untouched.
    pub fn map_err<O, F>(self, f: F) -> Outcome<O, T>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(fault) => Outcome::Failure(fault.map(f)),
        }
    }

    /// Returns `self` if it is a success, otherwise `other`.
    ///
    /// There is no special handling of undecided outcomes here, an uninitialized failure is
    /// treated like any other failure.
    pub fn or_else(self, other: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => other,
        }
    }

    /// Like [`or_else`](Self::or_else), but `f` only runs when `self` is a failure.
    pub fn or_else_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => f(),
        }
    }

    /// Converts this into a standard [`Result`] so it can be used with `?`.
    pub fn into_result(self) -> Result<T, Fault<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault),
        }
    }
}

impl<E, T> Default for Outcome<E, T> {
    fn default() -> Self {
        Self::new()
    }
}
