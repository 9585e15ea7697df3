//! The core interfaces used to materialize values from a producer
//!
//! A producer has up to two invocation forms. The consuming form
//! ([`ProduceOnce`]) moves the producer and its arguments into a single
//! invocation and is required of every producer. The in-place form
//! ([`ProduceMut`]) invokes the producer through a stable binding, borrowing
//! its arguments, and is optional; the two forms are typed independently and
//! may yield different outputs.
//!
//! Closures get both forms through blanket impls: any
//! `FnOnce(A0, ...) -> R` is a [`ProduceOnce`] over the matching argument
//! tuple, and any `FnMut(&mut A0, ...) -> R` is a [`ProduceMut`]. A producer
//! that needs both forms over non-empty arguments, or differently typed
//! outputs per form, implements the traits directly.

/// A producer which is invoked by consuming it
///
/// `Args` is the tuple of arguments captured alongside the producer; each is
/// moved into the invocation exactly as it was captured.
pub trait ProduceOnce<Args = ()> {
    /// The type of value this producer yields when consumed
    type Output;

    /// Invoke the producer, moving it and its arguments
    fn produce_once(self, args: Args) -> Self::Output;
}

/// A producer which is invoked repeatedly through a stable binding
///
/// Each invocation borrows the producer and the same stored arguments, so a
/// producer may observe changes it made to them on earlier invocations.
pub trait ProduceMut<Args = ()> {
    /// The type of value this producer yields when invoked in place
    ///
    /// May differ from [`ProduceOnce::Output`] for the same producer.
    type Output;

    /// Invoke the producer, borrowing it and its arguments
    fn produce_mut(&mut self, args: &mut Args) -> Self::Output;
}

macro_rules! tuples {
    ($(($($A:ident $a:ident),*))*) => {$(
        impl<F, R $(, $A)*> ProduceOnce<($($A,)*)> for F
        where
            F: FnOnce($($A),*) -> R,
        {
            type Output = R;

            #[inline]
            fn produce_once(self, ($($a,)*): ($($A,)*)) -> R {
                self($($a),*)
            }
        }

        impl<F, R $(, $A)*> ProduceMut<($($A,)*)> for F
        where
            F: FnMut($(&mut $A),*) -> R,
        {
            type Output = R;

            #[inline]
            fn produce_mut(&mut self, args: &mut ($($A,)*)) -> R {
                let ($($a,)*) = args;
                self($($a),*)
            }
        }
    )*};
}

tuples! {
    ()
    (A0 a0)
    (A0 a0, A1 a1)
    (A0 a0, A1 a1, A2 a2)
    (A0 a0, A1 a1, A2 a2, A3 a3)
    (A0 a0, A1 a1, A2 a2, A3 a3, A4 a4)
    (A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5)
    (A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6)
    (A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7)
}
