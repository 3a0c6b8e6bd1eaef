//! Tuple-to-sequence conversion.
//!
//! Flat tuples are the readable way to hand an ordered list of types around;
//! this trait rewrites them into their inductive [`Seq`] form. Arities up to
//! 16 are generated by `typeseq_macros::impl_tuples!`.

use crate::seq::{Cons, Nil, Seq};

/// Converts a tuple of types into the equivalent sequence.
///
/// ```rust
/// use typeseq_core::prelude::*;
///
/// const _: () = assert!(same_type::<SeqOf<(i8, i16, i32)>, Seq![i8, i16, i32]>());
/// ```
pub trait Tuple {
    type AsSeq: Seq;
}

impl Tuple for () {
    type AsSeq = Nil;
}

typeseq_macros::impl_tuples!(16);

/// Alias form of [`Tuple`].
pub type SeqOf<T> = <T as Tuple>::AsSeq;
