//! The forward direction of the sequence protocol: consuming a container as the source of a
//! fold.

use std::convert::Infallible;
use std::iter::FusedIterator;

use crate::build::Absorb;
use crate::optional::Optional;
use crate::outcome::{Fault, Outcome};

mod sealed {
    use super::*;

    pub trait Sealed {}
    impl<T> Sealed for Optional<T> {}
    impl<E, T> Sealed for Outcome<E, T> {}
}

/// A single element produced by a [source](Source).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step<T, H> {
    /// A plain value to continue the fold with.
    Emit(T),
    /// The source cannot produce a value, the fold should hand `H` to its builder instead.
    Halt(H),
}

impl<T, H> Step<T, H> {
    pub fn is_emit(&self) -> bool {
        matches!(self, Self::Emit(_))
    }

    pub fn is_halt(&self) -> bool {
        matches!(self, Self::Halt(_))
    }

    pub fn as_ref(&self) -> Step<&T, &H> {
        match self {
            Self::Emit(value) => Step::Emit(value),
            Self::Halt(halt) => Step::Halt(halt),
        }
    }

    /// Returns the emitted value, if any.
    pub fn emitted(self) -> Option<T> {
        match self {
            Self::Emit(value) => Some(value),
            Self::Halt(_) => None,
        }
    }
}

/// Iterator over the zero or one [steps](Step) of a source.
#[derive(Clone, Debug)]
pub struct Steps<T, H> {
    next: Option<Step<T, H>>,
}

impl<T, H> Steps<T, H> {
    fn new(next: Option<Step<T, H>>) -> Self {
        Self { next }
    }
}

impl<T, H> Iterator for Steps<T, H> {
    type Item = Step<T, H>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.next.is_some());
        (len, Some(len))
    }
}

impl<T, H> ExactSizeIterator for Steps<T, H> {}
impl<T, H> FusedIterator for Steps<T, H> {}

/// A container that can feed a fold.
///
/// Sources produce at most one [step](Step). An emitted value continues the fold, a halt is
/// handed to the builder through [`Absorb`], which decides whether the whole fold is over.
pub trait Source: sealed::Sealed + Sized {
    /// The type of the values emitted into the fold.
    type Value;
    /// What the source hands to the builder when it has no value to emit.
    type Halt;
    type Steps: Iterator<Item = Step<Self::Value, Self::Halt>>;

    fn into_steps(self) -> Self::Steps;

    /// Folds this source into `builder` in a single left-to-right pass, stopping as soon as the
    /// builder is [settled](crate::build::Builder::is_settled).
    fn fold_into<B>(self, builder: B) -> B
    where
        B: Absorb<Self::Halt, Value = Self::Value>,
    {
        let mut builder = builder;

        for step in self.into_steps() {
            builder = match step {
                Step::Emit(value) => builder.push(value),
                Step::Halt(halt) => builder.absorb(halt),
            };

            if builder.is_settled() {
                break;
            }
        }

        builder
    }
}

impl<T> Source for Optional<T> {
    type Value = T;
    type Halt = Infallible;
    type Steps = Steps<T, Infallible>;

    fn into_steps(self) -> Self::Steps {
        Steps::new(self.into_option().map(Step::Emit))
    }
}

impl<E, T> Source for Outcome<E, T> {
    type Value = T;
    type Halt = Fault<E>;
    type Steps = Steps<T, Fault<E>>;

    fn into_steps(self) -> Self::Steps {
        Steps::new(Some(self.into_step()))
    }
}

impl<E, T> Outcome<E, T> {
    /// The single element of this outcome: successes emit their value, failures halt with their
    /// fault. An uninitialized failure halts with [`Fault::Uninitialized`] as is.
    pub fn into_step(self) -> Step<T, Fault<E>> {
        match self {
            Self::Success(value) => Step::Emit(value),
            Self::Failure(fault) => Step::Halt(fault),
        }
    }
}

impl<E, T> IntoIterator for Outcome<E, T> {
    type Item = Step<T, Fault<E>>;
    type IntoIter = Steps<T, Fault<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_steps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{Buildable, Builder, OptionalBuilder, OutcomeBuilder};

    #[test]
    fn optional_steps() {
        let steps: Vec<_> = Optional::present(1).into_steps().collect();
        assert_eq!(steps, vec![Step::Emit(1)]);
        assert_eq!(Optional::<i32>::absent().into_steps().len(), 0);
    }

    #[test]
    fn outcome_always_has_one_step() {
        assert_eq!(
            Outcome::<&str, _>::success(2).into_iter().collect::<Vec<_>>(),
            vec![Step::Emit(2)]
        );
        assert_eq!(
            Outcome::<_, i32>::failure("e").into_iter().collect::<Vec<_>>(),
            vec![Step::Halt(Fault::Error("e"))]
        );
        // Undecided outcomes are passed through without being unwrapped.
        assert_eq!(
            Outcome::<&str, i32>::new().into_iter().collect::<Vec<_>>(),
            vec![Step::Halt(Fault::Uninitialized)]
        );
    }

    #[test]
    fn fold_into_optional_builder() {
        let folded = Optional::present(4).fold_into(OptionalBuilder::new()).finish();
        assert_eq!(folded, Optional::present(4));

        let folded = Optional::<i32>::absent()
            .fold_into(Optional::present(9).into_builder())
            .finish();
        assert_eq!(folded, Optional::present(9));
    }

    #[test]
    fn fold_into_outcome_builder() {
        let folded = Outcome::<&str, _>::success(3)
            .fold_into(OutcomeBuilder::new())
            .finish();
        assert_eq!(folded, Outcome::success(3));

        let folded = Outcome::<_, i32>::failure("e")
            .fold_into(Outcome::success(1).into_builder())
            .finish();
        assert_eq!(folded, Outcome::failure("e"));

        let folded = Outcome::<&str, i32>::new()
            .fold_into(Outcome::success(1).into_builder())
            .finish();
        assert_eq!(folded, Outcome::success(1));
    }

    #[test]
    fn step_accessors() {
        let step: Step<i32, ()> = Step::Emit(1);
        assert!(step.is_emit());
        assert_eq!(step.as_ref(), Step::Emit(&1));
        assert_eq!(step.emitted(), Some(1));
        assert_eq!(Step::<i32, ()>::Halt(()).emitted(), None);
        assert!(Step::<i32, ()>::Halt(()).is_halt());
    }
}
