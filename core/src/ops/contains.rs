//! Containment test.

use crate::identity::same_type;
use crate::seq::{Cons, Nil, Seq};

/// True iff some position of the sequence holds exactly `X`.
///
/// Total: an absent descriptor yields `false`, never an error. Matching is
/// exact identity, so querying `i32` against a sequence holding
/// `&'static i32` reports `false`.
pub trait Contains<X: ?Sized + 'static>: Seq {
    const VALUE: bool;
}

impl<X: ?Sized + 'static> Contains<X> for Nil {
    const VALUE: bool = false;
}

impl<X, H, T> Contains<X> for Cons<H, T>
where
    X: ?Sized + 'static,
    H: ?Sized + 'static,
    T: Contains<X>,
{
    // `||` short-circuits: a head match never recurses into the tail.
    const VALUE: bool = same_type::<X, H>() || T::VALUE;
}
