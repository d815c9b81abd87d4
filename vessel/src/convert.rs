//! Conversions between the two containers and their standard library counterparts.
//!
//! Conversions are one-way by design: going from an optional to an outcome needs an error to
//! fill the absent case, while going the other way discards the failure payload.

use crate::optional::Optional;
use crate::outcome::{Fault, Outcome};

impl<T> Optional<T> {
    /// Maps `Present(v)` to a success and `Absent` to a concrete failure holding `error`.
    #[doc(alias = "to_right")]
    pub fn to_result<E>(self, error: E) -> Outcome<E, T> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::failure(error),
        }
    }
}

impl<E, T> Outcome<E, T> {
    /// Maps a success to `Present`, any failure to `Absent`.
    pub fn to_option(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Absent,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    fn from(value: Result<T, E>) -> Self {
        Self::from_outcome(value)
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, Fault<E>> {
    fn from(value: Outcome<E, T>) -> Self {
        value.into_result()
    }
}
