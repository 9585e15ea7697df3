//! Deduction of the storage type for a value that may be deferred
//!
//! Generic code that accepts "either a plain value or a [`Deferred`] handle
//! producing that value" needs to name its storage type before anything is
//! produced. [`Source::Output`] is that type: the value itself for a plain
//! value, the producer's output for a handle. [`Source::resolve`] then
//! populates the storage with at most one move, materializing a handle at
//! exactly that point.
//!
//! ```
//! use deferred::{defer, Source};
//!
//! struct Slot<S: Source> {
//!     value: S::Output,
//! }
//!
//! impl<S: Source> Slot<S> {
//!     fn fill(source: S) -> Self {
//!         Slot { value: source.resolve() }
//!     }
//! }
//!
//! let plain = Slot::fill(3u8);
//! let produced = Slot::fill(defer(|| 4u8));
//! assert_eq!(plain.value + produced.value, 7);
//! ```

use crate::deferred::Deferred;
use crate::interface::{ProduceMut, ProduceOnce};

/// A value that resolves into storage of type [`Self::Output`]
///
/// [`Self::Output`]: Source::Output
pub trait Source {
    /// The type this value materializes into
    type Output;

    /// Produce the value: materialize a deferred handle, or pass a plain
    /// value through unchanged
    fn resolve(self) -> Self::Output;
}

// The `Clone` bound keeps this impl disjoint from the `Deferred` impls
// below: `Deferred` is never `Clone`, and no other crate can make it so.
impl<T: Clone> Source for T {
    type Output = T;

    #[inline]
    fn resolve(self) -> T {
        self
    }
}

impl<F, A> Source for Deferred<F, A>
where
    F: ProduceOnce<A>,
{
    type Output = <F as ProduceOnce<A>>::Output;

    #[inline]
    fn resolve(self) -> Self::Output {
        self.materialize()
    }
}

impl<F, A> Source for &mut Deferred<F, A>
where
    F: ProduceOnce<A> + ProduceMut<A>,
{
    type Output = <F as ProduceMut<A>>::Output;

    #[inline]
    fn resolve(self) -> Self::Output {
        self.materialize_mut()
    }
}
