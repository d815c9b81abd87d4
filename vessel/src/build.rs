//! The reverse direction of the sequence protocol: materialising the elements emitted by a fold
//! back into a container.
//!
//! A fold starts from a seed container turned into a [builder](Builder) through [`Buildable`],
//! pushes every emitted value into it and [finishes](Builder::finish) it once the input is
//! exhausted. Halts coming from short-circuiting [sources](crate::source::Source) are handed over
//! through [`Absorb`]. A builder may become [settled](Builder::is_settled), meaning nothing else
//! can change its output, at which point the fold stops.

use std::convert::Infallible;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::trace;

use crate::optional::Optional;
use crate::outcome::{Fault, Outcome};

/// The opaque marker returned when a fold is [aborted](Builder::abort).
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Stop {
    _private: (),
}

impl Stop {
    fn new() -> Self {
        Self { _private: () }
    }
}

impl Debug for Stop {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Stop")
    }
}

/// An accumulator a fold materialises its output into.
pub trait Builder: Sized {
    /// The type of the values pushed into this builder.
    type Value;
    /// The container produced once the fold is finished.
    type Output;

    /// Feeds an emitted value, producing the next accumulator.
    fn push(self, value: Self::Value) -> Self;

    /// Whether the output is already decided, so the fold can stop early.
    fn is_settled(&self) -> bool {
        false
    }

    /// Returns the accumulated container.
    fn finish(self) -> Self::Output;

    /// Drops the accumulator without producing a container.
    fn abort(self) -> Stop {
        trace!("Fold aborted before finishing");
        Stop::new()
    }
}

/// Builders that know how to take a halt of type `H` from a short-circuiting source.
pub trait Absorb<H>: Builder {
    fn absorb(self, halt: H) -> Self;
}

impl<B: Builder> Absorb<Infallible> for B {
    fn absorb(self, halt: Infallible) -> Self {
        match halt {}
    }
}

/// Containers which can seed a fold.
pub trait Buildable: Sized {
    type Builder: Builder<Output = Self>;

    /// Uses `self` as the initial accumulator of a fold.
    fn into_builder(self) -> Self::Builder;
}

/// Builds an [optional](Optional) out of a fold. Every pushed value replaces the accumulator, so
/// the last value wins and an empty fold returns the seed unchanged.
#[derive(Clone, Debug)]
pub struct OptionalBuilder<T> {
    current: Optional<T>,
}

impl<T> OptionalBuilder<T> {
    /// Creates a builder seeded with [`Optional::Absent`].
    pub fn new() -> Self {
        Self::seeded(Optional::Absent)
    }

    pub fn seeded(seed: Optional<T>) -> Self {
        Self { current: seed }
    }
}

impl<T> Default for OptionalBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Builder for OptionalBuilder<T> {
    type Value = T;
    type Output = Optional<T>;

    fn push(self, value: T) -> Self {
        Self {
            current: Optional::Present(value),
        }
    }

    fn finish(self) -> Optional<T> {
        self.current
    }
}

impl<T> Buildable for Optional<T> {
    type Builder = OptionalBuilder<T>;

    fn into_builder(self) -> Self::Builder {
        OptionalBuilder::seeded(self)
    }
}

/// Builds an [outcome](Outcome) out of a fold.
///
/// The accumulator moves through three states:
///
/// - Undecided, a failure holding [`Fault::Uninitialized`], which is the usual seed.
/// - Succeeded, after a value has been pushed. Later values replace the previous one.
/// - Failed, after a concrete error has been absorbed. This state is final: every later value
///   or error is ignored, so the earliest error wins.
///
/// Absorbing [`Fault::Uninitialized`] never changes the accumulator.
#[derive(Clone, Debug)]
pub struct OutcomeBuilder<E, T> {
    current: Outcome<E, T>,
}

impl<E, T> OutcomeBuilder<E, T> {
    /// Creates a builder seeded with an undecided outcome.
    pub fn new() -> Self {
        Self::seeded(Outcome::new())
    }

    pub fn seeded(seed: Outcome<E, T>) -> Self {
        Self { current: seed }
    }

    /// Feeds a whole outcome: successes are pushed, failures absorbed.
    pub fn push_outcome(self, outcome: Outcome<E, T>) -> Self {
        match outcome {
            Outcome::Success(value) => self.push(value),
            Outcome::Failure(fault) => self.absorb(fault),
        }
    }
}

impl<E, T> Default for OutcomeBuilder<E, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, T> Builder for OutcomeBuilder<E, T> {
    type Value = T;
    type Output = Outcome<E, T>;

    fn push(self, value: T) -> Self {
        if self.is_settled() {
            trace!("Ignoring value pushed after the outcome failed");
            return self;
        }

        Self {
            current: Outcome::Success(value),
        }
    }

    fn is_settled(&self) -> bool {
        matches!(self.current, Outcome::Failure(Fault::Error(_)))
    }

    fn finish(self) -> Outcome<E, T> {
        self.current
    }
}

impl<E, T> Absorb<Fault<E>> for OutcomeBuilder<E, T> {
    fn absorb(self, halt: Fault<E>) -> Self {
        match halt {
            Fault::Uninitialized => self,
            Fault::Error(_) if self.is_settled() => {
                trace!("Ignoring error absorbed after the outcome failed");
                self
            }
            Fault::Error(error) => {
                trace!(
                    previous_success = self.current.is_success(),
                    "Outcome settled on failure"
                );
                Self {
                    current: Outcome::failure(error),
                }
            }
        }
    }
}

impl<E, T> Buildable for Outcome<E, T> {
    type Builder = OutcomeBuilder<E, T>;

    fn into_builder(self) -> Self::Builder {
        OutcomeBuilder::seeded(self)
    }
}

impl<T> FromIterator<T> for Optional<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(OptionalBuilder::new(), Builder::push)
            .finish()
    }
}

impl<T> Extend<T> for Optional<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let seed = std::mem::replace(self, Optional::Absent);
        let builder = iter.into_iter().fold(seed.into_builder(), Builder::push);
        *self = builder.finish();
    }
}

fn fold_outcomes<E, T, I>(mut builder: OutcomeBuilder<E, T>, iter: I) -> Outcome<E, T>
where
    I: IntoIterator<Item = Outcome<E, T>>,
{
    if builder.is_settled() {
        return builder.finish();
    }

    for outcome in iter {
        builder = builder.push_outcome(outcome);
        if builder.is_settled() {
            break;
        }
    }

    builder.finish()
}

/// Collects outcomes following the [`OutcomeBuilder`] rules, starting from an undecided outcome.
/// The iterator is not consumed past the first concrete failure.
impl<E, T> FromIterator<Outcome<E, T>> for Outcome<E, T> {
    fn from_iter<I: IntoIterator<Item = Outcome<E, T>>>(iter: I) -> Self {
        fold_outcomes(OutcomeBuilder::new(), iter)
    }
}

impl<E, T> Extend<Outcome<E, T>> for Outcome<E, T> {
    fn extend<I: IntoIterator<Item = Outcome<E, T>>>(&mut self, iter: I) {
        let seed = std::mem::take(self);
        *self = fold_outcomes(seed.into_builder(), iter);
    }
}
