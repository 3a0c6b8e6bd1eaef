//! Duplicate detection.

use crate::ops::Contains;
use crate::seq::{Cons, Nil, Seq};

/// True iff no two positions hold identical descriptors.
///
/// Empty and single-element sequences are trivially unique. For longer
/// sequences the head is checked against the whole tail and the tail is
/// checked recursively, which is equivalent to "for all `i < j`,
/// `At(i) != At(j)`". The `&&` short-circuits on the first duplicate.
pub trait IsUnique: Seq {
    const VALUE: bool;
}

impl IsUnique for Nil {
    const VALUE: bool = true;
}

impl<H, T> IsUnique for Cons<H, T>
where
    H: ?Sized + 'static,
    T: IsUnique + Contains<H>,
{
    // Both bounds on `T` expose a `VALUE`, so each use is qualified.
    const VALUE: bool = !<T as Contains<H>>::VALUE && <T as IsUnique>::VALUE;
}
