use std::{any::Any, marker::PhantomData, sync::Arc};

use crate::Applied;

/// A single type-erased transformation step.
///
/// Erasure is what lets a heterogeneous pipeline live in one `Vec`: each
/// step downcasts its input to the concrete type the previous step produced,
/// which the `Prepared` type parameters guarantee at composition time.
type ErasedStep = Arc<dyn Fn(Box<dyn Any>) -> Option<Box<dyn Any>> + Send + Sync>;

/// A reusable null-safe call chain, prepared once and applied many times.
///
/// A `Prepared<T, R>` is a pipeline of transformation steps from an input of
/// type `T` to a result of type `R`, built independently of any particular
/// input. The steps are held as an explicit ordered sequence and evaluated
/// in order with a short-circuit check after each one: the first step that
/// observes absence stops the pipeline, and no later step function is
/// invoked.
///
/// `step` borrows rather than consumes, so a chain can serve as a shared
/// prefix for several longer pipelines. Applying the chain with
/// [`on`](Prepared::on) never mutates it, and because the step list is
/// immutable after construction a single `Prepared` is safe to apply
/// concurrently from many threads (`Prepared<T, R>` is `Send + Sync`; step
/// functions must be too).
///
/// # Example
///
/// ```
/// use safecall_core::{prepare, Extract};
///
/// struct Address { city: String }
/// struct Person { address: Option<Address> }
///
/// let city_of = prepare::<Person>()
///     .step(|p| p.address)
///     .step_map(|a| a.city);
///
/// let homer = Person {
///     address: Some(Address { city: "Springfield".to_string() }),
/// };
/// let nomad = Person { address: None };
///
/// assert_eq!(city_of.on(homer).get_or("Unknown".into()), "Springfield");
/// assert_eq!(city_of.on(nomad).get_or("Unknown".into()), "Unknown");
/// assert_eq!(city_of.on(None).get(), None);
/// ```
pub struct Prepared<T, R = T> {
    steps: Vec<ErasedStep>,
    _marker: PhantomData<fn(T) -> R>,
}

impl<T: 'static> Prepared<T, T> {
    /// Creates an empty chain whose pipeline is the identity: applying it
    /// returns its input unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            _marker: PhantomData,
        }
    }
}

impl<T: 'static> Default for Prepared<T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Prepared<T, R>
where
    T: 'static,
    R: 'static,
{
    /// Appends a transformation that may itself produce absence.
    ///
    /// Returns a new chain; `self` is left untouched and remains usable as
    /// a shared prefix. The step function is only ever invoked on a present
    /// intermediate value. A panic inside it is not caught; it unwinds to
    /// whoever applied the chain.
    pub fn step<V, F>(&self, f: F) -> Prepared<T, V>
    where
        V: 'static,
        F: Fn(R) -> Option<V> + Send + Sync + 'static,
    {
        self.append(f)
    }

    /// Appends an infallible transformation.
    ///
    /// Like [`step`](Prepared::step), but for functions that always produce
    /// a value when given one.
    pub fn step_map<V, F>(&self, f: F) -> Prepared<T, V>
    where
        V: 'static,
        F: Fn(R) -> V + Send + Sync + 'static,
    {
        self.append(move |value| Some(f(value)))
    }

    /// Applies the chain to one possibly-absent input.
    ///
    /// An absent input short-circuits immediately: no step function runs
    /// and the returned [`Applied`] wraps absence.
    pub fn on(&self, input: impl Into<Option<T>>) -> Applied<R> {
        Applied::new(input.into().and_then(|value| self.run(value)))
    }

    /// Exports the pipeline as a plain function over concrete inputs.
    ///
    /// Handy for mapping over a collection of values that are themselves
    /// known to exist, with absence only arising inside the pipeline.
    pub fn as_fn(&self) -> impl Fn(T) -> Option<R> {
        let chain = self.clone();
        move |input| chain.run(input)
    }

    /// Exports the pipeline as a function tolerating absent inputs.
    ///
    /// The returned function maps absence to absence without invoking any
    /// step, mirroring [`on`](Prepared::on).
    pub fn as_opt_fn(&self) -> impl Fn(Option<T>) -> Option<R> {
        let chain = self.clone();
        move |input| input.and_then(|value| chain.run(value))
    }

    /// Exports the pipeline as a function that substitutes `default`
    /// whenever the chain produces no value.
    pub fn as_fn_or(&self, default: R) -> impl Fn(Option<T>) -> R
    where
        R: Clone,
    {
        let chain = self.clone();
        move |input| {
            input
                .and_then(|value| chain.run(value))
                .unwrap_or_else(|| default.clone())
        }
    }

    /// Returns the number of steps in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no steps have been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn append<V, F>(&self, step: F) -> Prepared<T, V>
    where
        V: 'static,
        F: Fn(R) -> Option<V> + Send + Sync + 'static,
    {
        let mut steps = self.steps.clone();
        steps.push(Arc::new(move |boxed: Box<dyn Any>| {
            step(unbox::<R>(boxed)).map(|value| Box::new(value) as Box<dyn Any>)
        }));
        Prepared {
            steps,
            _marker: PhantomData,
        }
    }

    /// Runs the steps in order, stopping at the first absent intermediate.
    fn run(&self, input: T) -> Option<R> {
        let mut value: Box<dyn Any> = Box::new(input);
        for step in &self.steps {
            value = step(value)?;
        }
        Some(unbox(value))
    }
}

/// Cloning is cheap: the step list is shared via `Arc`, so a clone only
/// bumps reference counts.
impl<T, R> Clone for Prepared<T, R> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
            _marker: PhantomData,
        }
    }
}

fn unbox<T: 'static>(boxed: Box<dyn Any>) -> T {
    match boxed.downcast::<T>() {
        Ok(value) => *value,
        // The chain's type parameters guarantee each step is handed exactly
        // the type the previous step produced.
        Err(_) => unreachable!("mismatched step types in a prepared chain"),
    }
}
