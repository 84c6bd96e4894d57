use thiserror::Error;

/// Terminal extraction shared by [`Chain`](crate::Chain) and
/// [`Applied`](crate::Applied).
///
/// A call chain ends in exactly one of two states: it produced a value, or
/// absence was observed somewhere along the way. This trait is the common
/// vocabulary for reading that final state. Implementers only provide
/// [`get`](Extract::get) and [`into_option`](Extract::into_option); the
/// remaining methods are derived from those.
pub trait Extract {
    /// The type of the value produced by the chain.
    type Value;

    /// Returns a reference to the final value, or `None` if any step of the
    /// chain observed absence.
    fn get(&self) -> Option<&Self::Value>;

    /// Consumes the chain and returns the final value as an explicit
    /// present/absent wrapper.
    fn into_option(self) -> Option<Self::Value>;

    /// Returns `true` if the chain produced a value.
    fn is_present(&self) -> bool {
        self.get().is_some()
    }

    /// Consumes the chain and returns the final value, or `default` if any
    /// step observed absence.
    fn get_or(self, default: Self::Value) -> Self::Value
    where
        Self: Sized,
    {
        self.into_option().unwrap_or(default)
    }

    /// Consumes the chain and returns the final value, computing a fallback
    /// only when absence was observed.
    fn get_or_else<F>(self, default: F) -> Self::Value
    where
        Self: Sized,
        F: FnOnce() -> Self::Value,
    {
        self.into_option().unwrap_or_else(default)
    }

    /// Consumes the chain, converting absence into a typed error.
    ///
    /// Useful at the boundary where "no value" stops being an ordinary
    /// outcome and becomes a failure the caller must handle.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentError`] if the chain produced no value.
    fn require(self) -> Result<Self::Value, AbsentError>
    where
        Self: Sized,
    {
        self.into_option().ok_or(AbsentError)
    }
}

/// The error returned by [`Extract::require`] when a chain produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("call chain produced no value")]
pub struct AbsentError;
