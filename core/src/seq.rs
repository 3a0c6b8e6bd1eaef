//! The sequence representation: [`Nil`], [`Cons`] and the [`Seq`] marker.

use core::marker::PhantomData;

use crate::index::{S, Unary, Z};

/// The empty sequence.
pub struct Nil;

/// A non-empty sequence: head descriptor `H` followed by tail sequence `T`.
///
/// Purely a compile-time label; no value of `H` or `T` is ever stored.
pub struct Cons<H: ?Sized, T>(PhantomData<(PhantomData<H>, T)>);

/// Marker trait implemented exactly for [`Nil`] and well-formed [`Cons`]
/// chains.
///
/// `Length` is the sequence's cardinality as a type-level unary number;
/// `LEN` is the same figure collapsed to a `usize`. [`crate::ops::Size`]
/// recomputes the count through an independent recursion, which the test
/// suite checks against `LEN`.
///
/// Recursive trait resolution bounds the practical sequence length to the
/// compiler's recursion limit — a few hundred elements is a sensible soft
/// limit.
pub trait Seq: sealed::Sealed {
    type Length: Unary;
    const LEN: usize = <Self::Length as Unary>::VALUE;
}

impl Seq for Nil {
    type Length = Z;
}

impl<H: ?Sized, T: Seq> Seq for Cons<H, T> {
    type Length = S<T::Length>;
}

/// Head/tail decomposition, available only when the sequence is non-empty.
///
/// There is deliberately no impl for [`Nil`]: taking the head or tail of the
/// empty sequence is a compile error, not a sentinel.
///
/// ```compile_fail
/// use typeseq_core::prelude::*;
///
/// type Oops = <Nil as NonEmpty>::Tail;
/// const _: usize = Oops::LEN;
/// ```
pub trait NonEmpty: Seq {
    type Head: ?Sized;
    type Tail: Seq;
}

impl<H: ?Sized, T: Seq> NonEmpty for Cons<H, T> {
    type Head = H;
    type Tail = T;
}

/// First element of a non-empty sequence.
pub type Head<L> = <L as NonEmpty>::Head;
/// Remaining elements of a non-empty sequence.
pub type Tail<L> = <L as NonEmpty>::Tail;

mod sealed {
    use super::{Cons, Nil};
    pub trait Sealed {}
    impl Sealed for Nil {}
    impl<H: ?Sized, T: Sealed> Sealed for Cons<H, T> {}
}

/// Names a sequence type from an ordered list of element types.
///
/// ```rust
/// use typeseq_core::prelude::*;
///
/// type Empty = Seq![];
/// type Three = Seq![u8, &'static str, Vec<i32>];
///
/// const _: () = assert!(Three::LEN == 3);
/// ```
#[macro_export]
macro_rules! Seq {
    () => { $crate::seq::Nil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::seq::Cons<$head, $crate::Seq![$($rest),*]>
    };
}
