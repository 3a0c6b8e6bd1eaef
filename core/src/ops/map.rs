//! Per-element transformation.

use crate::seq::{Cons, Nil, Seq};

/// A type-level function: one descriptor in, one descriptor out.
///
/// Implementors are empty marker types; the mapping lives entirely in the
/// associated `Output`.
///
/// ```rust
/// use typeseq_core::prelude::*;
///
/// struct Boxed;
/// impl<T: ?Sized> TypeFn<T> for Boxed {
///     type Output = Box<T>;
/// }
///
/// const _: () =
///     assert!(same_type::<Mapped<Boxed, Seq![u8, str]>, Seq![Box<u8>, Box<str>]>());
/// ```
pub trait TypeFn<T: ?Sized> {
    type Output: ?Sized;
}

/// Identity mapping; `Mapped<Ident, L>` is `L` itself.
pub struct Ident;

impl<T: ?Sized> TypeFn<T> for Ident {
    type Output = T;
}

/// Applies `F` to every element, preserving length and order.
pub trait Map<F>: Seq {
    type Output: Seq;
}

impl<F> Map<F> for Nil {
    type Output = Nil;
}

impl<F, H: ?Sized, T> Map<F> for Cons<H, T>
where
    F: TypeFn<H>,
    T: Map<F>,
{
    type Output = Cons<<F as TypeFn<H>>::Output, <T as Map<F>>::Output>;
}

/// Alias form of [`Map`].
pub type Mapped<F, L> = <L as Map<F>>::Output;
