#![no_std]
#![forbid(missing_docs, unsafe_code)]

//! ## deferred
//!
//! A library for deferring production of a value to the point where it is
//! consumed, without invoking the producer early and without intermediate
//! copies
//!
//! A [`Deferred`] handle captures a producer and its arguments at the call
//! site and invokes nothing. The consumer later picks one of two
//! materialization paths: [`Deferred::materialize`] consumes the handle and
//! moves the captures into a single invocation, while
//! [`Deferred::materialize_mut`] re-invokes the producer any number of times
//! through a stable binding. Which paths exist is decided entirely by the
//! captured types, at compile time.
//!
//! ```
//! use deferred::defer;
//!
//! let value = defer(|| 5).materialize();
//! assert_eq!(value, 5);
//! ```
//!
//! The [`Source`] trait lets generic code declare correctly-typed storage for
//! a value that may or may not be deferred, without forcing production while
//! computing the type.

pub mod interface;
pub mod source;

mod deferred;

pub use deferred::{defer, Deferred};
pub use interface::{ProduceMut, ProduceOnce};
pub use source::Source;
