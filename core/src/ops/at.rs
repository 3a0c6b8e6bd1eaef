//! Indexed lookup.

use crate::index::{S, Unary, Z};
use crate::seq::{Cons, Seq};

/// Descriptor at position `I`, counting from the head at `Z`.
///
/// Bounds are strict: there is no impl for an index past the end, so an
/// out-of-range lookup is rejected during compilation rather than clamped
/// or defaulted.
///
/// ```rust
/// use typeseq_core::prelude::*;
///
/// type L = Seq![i8, i16, i32];
/// const _: () = assert!(same_type::<ElemAt<U2, L>, i32>());
/// ```
///
/// ```compile_fail
/// use typeseq_core::prelude::*;
///
/// type L = Seq![i8, i16, i32];
/// const _: () = assert!(same_type::<ElemAt<U3, L>, i32>());
/// ```
pub trait At<I: Unary>: Seq {
    type Output: ?Sized;
}

// Base case first: a single-element sequence terminates here before the
// recursive arm ever looks at the (empty) tail.
impl<H: ?Sized, T: Seq> At<Z> for Cons<H, T> {
    type Output = H;
}

impl<I: Unary, H: ?Sized, T: At<I>> At<S<I>> for Cons<H, T> {
    type Output = <T as At<I>>::Output;
}

/// Alias form: `ElemAt<U1, Seq![a, b]>` is `b`.
pub type ElemAt<I, L> = <L as At<I>>::Output;
