//! Sequence concatenation.

use crate::seq::{Cons, Nil, Seq};

/// Appends `Rhs` after `self`, preserving the order of both halves.
pub trait Concat<Rhs: Seq>: Seq {
    type Output: Seq;
}

impl<Rhs: Seq> Concat<Rhs> for Nil {
    type Output = Rhs;
}

impl<H: ?Sized, T, Rhs> Concat<Rhs> for Cons<H, T>
where
    T: Concat<Rhs>,
    Rhs: Seq,
{
    type Output = Cons<H, <T as Concat<Rhs>>::Output>;
}

/// Alias form of [`Concat`].
pub type Concatenated<L, R> = <L as Concat<R>>::Output;
