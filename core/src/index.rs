//! Type-level unary indices, represented by zero [`Z`] and successor [`S`].
//!
//! Sequence positions are types, not values, so that an out-of-range index
//! is a missing trait impl (a compile error) rather than a runtime panic.

/// The index zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct S<N>(pub N);

/// Every unary index collapses to its value-level `usize`.
pub trait Unary: sealed::Sealed {
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

mod sealed {
    use super::{S, Z};
    pub trait Sealed {}
    impl Sealed for Z {}
    impl<N: Sealed> Sealed for S<N> {}
}

pub mod types {
    //! Shorthand aliases `U0..=U32` for small indices.
    use super::{S, Z};

    typeseq_macros::unary_types!(32);
}
