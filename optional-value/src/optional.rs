pub type Nullable<T> = Optional<T>;

/// A value that is either present or absent.
///
/// Presence has nothing to do with the content of the value:
/// `Optional::of(0)` and `Optional::of(String::new())` are both present.
///
/// ```
/// use optional_value::Optional;
///
/// let year = Optional::of(2017);
/// assert_eq!(2017, year.or(1));
///
/// let year = Optional::<u32>::empty();
/// assert_eq!(1, year.or(1));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    #[default]
    Absent,
    Present(T),
}

impl<T> Optional<T> {
    /// An absent value
    pub const fn empty() -> Self {
        Self::Absent
    }

    /// Wrap a value
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Present if the reference is `Some`, in which case
    /// the value behind the reference is cloned into the optional.
    pub fn of_ref(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        match value {
            Some(value) => Self::Present(value.clone()),
            None => Self::Absent,
        }
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Get the value along with a presence flag.
    /// If the value is absent this returns the default value of `T` and `false`.
    pub fn get(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        match self {
            Self::Present(value) => (value.clone(), true),
            Self::Absent => (T::default(), false),
        }
    }

    /// Call `f` with the value, if there is one.
    pub fn if_present<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            f(value);
        }
    }

    /// The value, or `default` if absent.
    pub fn or(self, default: T) -> T {
        self.or_else(|| default)
    }

    /// The value, or the result of `f` if absent.
    /// `f` is only called when the value is absent.
    pub fn or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => f(),
        }
    }

    /// The value, or the default value of `T` if absent.
    pub fn or_zero(self) -> T
    where
        T: Default,
    {
        self.or_else(T::default)
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => Self::of(val),
            None => Self::empty(),
        }
    }
}

impl<T: Clone> From<Option<&T>> for Optional<T> {
    fn from(value: Option<&T>) -> Self {
        Self::of_ref(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
