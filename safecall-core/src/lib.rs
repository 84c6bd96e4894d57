//! Null-safe call chaining.
//!
//! This crate lets you traverse a chain of potentially-absent values without
//! writing an explicit check at every hop. There are two ways in:
//!
//! - [`of`] starts a [`Chain`]: a chain of calls bound to a single value.
//! - [`prepare`] starts a [`Prepared`] chain: a pipeline built once and
//!   applied to any number of values, which is the right tool when the same
//!   traversal runs over a whole collection.
//!
//! Either way, absence is terminal: the first step that observes it wins,
//! every later step is skipped, and the outcome is read through the
//! [`Extract`] trait as a raw `Option`, a value-with-default, or a typed
//! error via [`Extract::require`].
//!
//! # Example
//!
//! ```
//! use safecall_core::{prepare, Extract};
//!
//! struct Address { city: String }
//! struct Person { address: Option<Address> }
//!
//! let city_of = prepare::<Person>()
//!     .step(|p| p.address)
//!     .step_map(|a| a.city);
//!
//! let people = vec![
//!     Person { address: Some(Address { city: "Springfield".to_string() }) },
//!     Person { address: None },
//! ];
//!
//! let city_or_unknown = city_of.as_fn_or("Unknown".to_string());
//! let cities: Vec<String> = people.into_iter().map(Some).map(city_or_unknown).collect();
//!
//! assert_eq!(cities, vec!["Springfield".to_string(), "Unknown".to_string()]);
//! ```

mod applied;
mod chain;
mod extract;
mod prepared;

pub use applied::Applied;
pub use chain::Chain;
pub use extract::{AbsentError, Extract};
pub use prepared::Prepared;

/// Starts a single-shot [`Chain`] on a possibly-absent value.
///
/// Equivalent to [`Chain::of`].
pub fn of<T>(value: impl Into<Option<T>>) -> Chain<T> {
    Chain::of(value)
}

/// Starts an empty reusable [`Prepared`] chain for inputs of type `T`.
///
/// The empty chain is the identity pipeline; add steps with
/// [`Prepared::step`] and [`Prepared::step_map`], then apply it with
/// [`Prepared::on`] or export it with the `as_fn` family.
#[must_use]
pub fn prepare<T: 'static>() -> Prepared<T, T> {
    Prepared::new()
}
