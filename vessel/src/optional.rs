/// A value that may be absent.
///
/// Besides being a plain value, an `Optional` is a sequence of zero or one elements: iterating a
/// [`Present`] value yields its content once, iterating [`Absent`] yields nothing. See
/// [`SequenceView`] for the read-only view and [`OptionalBuilder`] for the reverse direction.
///
/// [`Present`]: Optional::Present
/// [`Absent`]: Optional::Absent
/// [`SequenceView`]: crate::sequence::SequenceView
/// [`OptionalBuilder`]: crate::build::OptionalBuilder
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Optional<T> {
    /// Wraps the given value.
    pub fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an empty optional.
    pub fn absent() -> Self {
        Self::Absent
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns a reference to the contained value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts this into the standard library [`Option`].
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns `self` if a value is present, otherwise returns `other` unchanged.
    ///
    /// Both sides are already evaluated, use [`or_else_with`](Self::or_else_with) when the
    /// fallback is expensive to build.
    pub fn or_else(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Like [`or_else`](Self::or_else), but `f` only runs when `self` is absent.
    pub fn or_else_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => f(),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}
