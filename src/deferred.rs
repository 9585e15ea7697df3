//! The deferred-production handle

use crate::interface::{ProduceMut, ProduceOnce};

/// A handle which captures a producer and its arguments without invoking them
///
/// Construction is pure capture; the producer runs only when the handle is
/// materialized, and the result is returned by value so it lands directly in
/// the consumer's storage with at most a move. The handle is deliberately
/// neither cloneable nor default-constructible, so a deferred side effect
/// cannot be duplicated by accident.
///
/// A handle may be materialized any number of times through
/// [`materialize_mut`](Deferred::materialize_mut) (when the captured types
/// support it), exactly once through [`materialize`](Deferred::materialize),
/// or never at all.
///
/// ```
/// use deferred::Deferred;
///
/// let deferred = Deferred::new(|greeting: &str| greeting.len(), ("hello",));
/// assert_eq!(deferred.materialize(), 5);
/// ```
pub struct Deferred<F, A = ()> {
    producer: F,
    args: A,
}

impl<F, A> Deferred<F, A>
where
    F: ProduceOnce<A>,
{
    /// Capture `producer` and `args` without invoking them
    ///
    /// The bound rejects, at compile time, any producer that cannot be
    /// invoked with the captured arguments.
    #[inline]
    pub fn new(producer: F, args: A) -> Self {
        Deferred { producer, args }
    }

    /// Consume the handle, moving the producer and arguments into a single
    /// invocation
    ///
    /// Panics exactly when the producer does; the handle adds no failure
    /// mode of its own.
    #[inline]
    pub fn materialize(self) -> <F as ProduceOnce<A>>::Output {
        self.producer.produce_once(self.args)
    }

    /// Invoke the producer in place, leaving the handle ready for further
    /// materializations
    ///
    /// Every call is an independent invocation against the same stored
    /// arguments; no result is cached. Only available when the producer
    /// supports invocation through a binding.
    #[inline]
    pub fn materialize_mut(&mut self) -> <F as ProduceMut<A>>::Output
    where
        F: ProduceMut<A>,
    {
        self.producer.produce_mut(&mut self.args)
    }

    /// Give back the producer and arguments, uninvoked
    #[inline]
    pub fn into_parts(self) -> (F, A) {
        (self.producer, self.args)
    }
}

/// Defer a producer that takes no arguments
///
/// Shorthand for [`Deferred::new`] with an empty argument pack.
#[inline]
pub fn defer<F: ProduceOnce<()>>(producer: F) -> Deferred<F> {
    Deferred::new(producer, ())
}
