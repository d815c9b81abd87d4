use std::ops::{Bound, RangeBounds};

use crate::optional::Optional;
use crate::outcome::{Fault, Outcome};
use crate::source::Step;

/// A read-only view of a container as a sequence of zero or one elements.
///
/// This is kept apart from the value API of the containers: equality of two containers and
/// membership of a value in a container are different questions.
pub trait SequenceView {
    /// The type of the values membership can be checked for.
    type Value;
    /// A borrowed element of the sequence.
    type Element<'a>
    where
        Self: 'a;

    /// The number of elements, either 0 or 1.
    fn count(&self) -> usize;

    /// Whether the sequence holds a value equal to `value`.
    fn contains(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq;

    /// Returns the elements within `range`, clamped to the sequence bounds. Since the sequence
    /// has at most one element, the result is itself a sequence of length 0 or 1.
    fn slice<R>(&self, range: R) -> Optional<Self::Element<'_>>
    where
        R: RangeBounds<usize>;

    fn get(&self, index: usize) -> Optional<Self::Element<'_>> {
        self.slice(index..=index)
    }

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Whether the first and only element of a sequence of length `len` falls within `range`.
fn covers_first<R: RangeBounds<usize>>(len: usize, range: &R) -> bool {
    let start = match range.start_bound() {
        Bound::Included(start) => *start,
        Bound::Excluded(start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(end) => end.saturating_add(1),
        Bound::Excluded(end) => *end,
        Bound::Unbounded => len,
    };

    start.min(len) < end.min(len)
}

impl<T> SequenceView for Optional<T> {
    type Value = T;
    type Element<'a> = &'a T where T: 'a;

    fn count(&self) -> usize {
        usize::from(self.is_present())
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.value() == Some(value)
    }

    fn slice<R>(&self, range: R) -> Optional<&T>
    where
        R: RangeBounds<usize>,
    {
        if covers_first(self.count(), &range) {
            self.as_ref()
        } else {
            Optional::Absent
        }
    }
}

/// Outcomes always hold one element, which is either the success value or the failure payload.
/// Only success values take part in [`contains`](SequenceView::contains).
impl<E, T> SequenceView for Outcome<E, T> {
    type Value = T;
    type Element<'a> = Step<&'a T, Fault<&'a E>> where E: 'a, T: 'a;

    fn count(&self) -> usize {
        1
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.value() == Some(value)
    }

    fn slice<R>(&self, range: R) -> Optional<Step<&T, Fault<&E>>>
    where
        R: RangeBounds<usize>,
    {
        if covers_first(self.count(), &range) {
            Optional::Present(self.as_ref().into_step())
        } else {
            Optional::Absent
        }
    }
}
