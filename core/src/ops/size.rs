//! Sequence cardinality, recomputed by recursion.

use crate::seq::{Cons, Nil, Seq};

/// Counts the elements of a sequence: 0 for [`Nil`], `1 +` the tail's count
/// otherwise.
///
/// This runs a separate recursion from [`Seq::LEN`] (which goes through the
/// unary `Length` type); the two must always agree.
pub trait Size: Seq {
    const VALUE: usize;
}

impl Size for Nil {
    const VALUE: usize = 0;
}

impl<H: ?Sized, T: Size> Size for Cons<H, T> {
    const VALUE: usize = 1 + T::VALUE;
}
