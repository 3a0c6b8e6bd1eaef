//! Prefix, suffix and slice derivations.
//!
//! All three saturate: a count or bound past the end of the sequence yields
//! as much of the sequence as exists, and an inverted slice yields the empty
//! sequence. Only [`crate::ops::At`] is strict about bounds; the policy is
//! uniform across every range derivation here.

use crate::index::{S, Unary, Z};
use crate::seq::{Cons, Nil, Seq};

/// Saturating subtraction on unary numbers; underflow stops at [`Z`].
pub trait Sub<Rhs: Unary>: Unary {
    type Output: Unary;
}

impl<N: Unary> Sub<Z> for N {
    type Output = N;
}

impl<M: Unary> Sub<S<M>> for Z {
    type Output = Z;
}

impl<N: Unary, M: Unary> Sub<S<M>> for S<N>
where
    N: Sub<M>,
{
    type Output = <N as Sub<M>>::Output;
}

/// Prefix of length `min(N, LEN)`.
pub trait Take<N: Unary>: Seq {
    type Output: Seq;
}

impl<L: Seq> Take<Z> for L {
    type Output = Nil;
}

impl<N: Unary> Take<S<N>> for Nil {
    type Output = Nil;
}

impl<N: Unary, H: ?Sized, T: Take<N>> Take<S<N>> for Cons<H, T> {
    type Output = Cons<H, <T as Take<N>>::Output>;
}

/// Everything after the first `min(N, LEN)` elements.
pub trait Skip<N: Unary>: Seq {
    type Output: Seq;
}

impl<L: Seq> Skip<Z> for L {
    type Output = L;
}

impl<N: Unary> Skip<S<N>> for Nil {
    type Output = Nil;
}

impl<N: Unary, H: ?Sized, T: Skip<N>> Skip<S<N>> for Cons<H, T> {
    type Output = <T as Skip<N>>::Output;
}

/// Suffix of length `min(N, LEN)`: skip `LEN - N` from the front.
pub trait TakeLast<N: Unary>: Seq {
    type Output: Seq;
}

// Fully qualified `<L as Seq>::Length` here: the shorthand form makes the
// bounds of `L` depend on themselves.
impl<N: Unary, L> TakeLast<N> for L
where
    L: Seq,
    <L as Seq>::Length: Sub<N>,
    L: Skip<<<L as Seq>::Length as Sub<N>>::Output>,
{
    type Output = <L as Skip<<<L as Seq>::Length as Sub<N>>::Output>>::Output;
}

/// Half-open range `[F, To)` of positions: skip `F`, then take `To - F`.
///
/// `F > To` normalizes to the empty sequence; `To` past the end saturates.
pub trait Slice<F: Unary, To: Unary>: Seq {
    type Output: Seq;
}

impl<F: Unary, To: Unary, L> Slice<F, To> for L
where
    L: Skip<F>,
    To: Sub<F>,
    <L as Skip<F>>::Output: Take<<To as Sub<F>>::Output>,
{
    type Output = <<L as Skip<F>>::Output as Take<<To as Sub<F>>::Output>>::Output;
}

/// Alias form of [`Take`].
pub type FirstN<N, L> = <L as Take<N>>::Output;
/// Alias form of [`TakeLast`].
pub type LastN<N, L> = <L as TakeLast<N>>::Output;
/// Alias form of [`Skip`].
pub type Skipped<N, L> = <L as Skip<N>>::Output;
/// Alias form of [`Slice`].
pub type Sliced<F, To, L> = <L as Slice<F, To>>::Output;
