use crate::Extract;

/// A chain of null-safe calls bound to a single starting value.
///
/// A `Chain` wraps one possibly-absent value. Each [`step`](Chain::step)
/// either transforms the held value or, if absence has already been
/// observed, does nothing and keeps propagating absence. The step function
/// is never invoked on an absent value, so a transformation can never fail
/// for want of a receiver.
///
/// A `Chain` is immutable: every step consumes it and produces a new one.
/// Once constructed, the final value is read through the [`Extract`] trait.
///
/// # Example
///
/// ```
/// use safecall_core::{of, Extract};
///
/// struct Address { city: String }
/// struct Person { address: Option<Address> }
///
/// let person = Person {
///     address: Some(Address { city: "Springfield".to_string() }),
/// };
///
/// let city = of(person)
///     .step(|p| p.address)
///     .step_map(|a| a.city)
///     .get_or("Unknown".to_string());
///
/// assert_eq!(city, "Springfield");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<T> {
    value: Option<T>,
}

impl<T> Chain<T> {
    /// Starts a chain on a possibly-absent value.
    ///
    /// Accepts both a bare value and an `Option`, so `Chain::of(person)`
    /// and `Chain::of(None)` read equally well.
    pub fn of(value: impl Into<Option<T>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Applies a transformation that may itself produce absence.
    ///
    /// If the chain is already absent, `f` is not invoked and the resulting
    /// chain is absent as well. A panic inside `f` is not caught; it unwinds
    /// to the caller like any other panic.
    pub fn step<R, F>(self, f: F) -> Chain<R>
    where
        F: FnOnce(T) -> Option<R>,
    {
        Chain {
            value: self.value.and_then(f),
        }
    }

    /// Applies an infallible transformation.
    ///
    /// Like [`step`](Chain::step), but for functions that always produce a
    /// value when given one.
    pub fn step_map<R, F>(self, f: F) -> Chain<R>
    where
        F: FnOnce(T) -> R,
    {
        Chain {
            value: self.value.map(f),
        }
    }
}

impl<T> Extract for Chain<T> {
    type Value = T;

    fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> From<Option<T>> for Chain<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}
