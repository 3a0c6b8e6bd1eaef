//! Positional mirroring.

use crate::seq::{Cons, Nil, Seq};

/// Accumulator recursion behind [`Reverse`]: prepends each head onto `Acc`
/// while walking the sequence, so the walk order inverts.
pub trait ReverseOnto<Acc: Seq>: Seq {
    type Output: Seq;
}

impl<Acc: Seq> ReverseOnto<Acc> for Nil {
    type Output = Acc;
}

impl<Acc: Seq, H: ?Sized, T> ReverseOnto<Acc> for Cons<H, T>
where
    T: ReverseOnto<Cons<H, Acc>>,
{
    type Output = <T as ReverseOnto<Cons<H, Acc>>>::Output;
}

/// Sequence with positions mirrored; reversing twice restores the original.
pub trait Reverse: Seq {
    type Output: Seq;
}

impl<L: ReverseOnto<Nil>> Reverse for L {
    type Output = <L as ReverseOnto<Nil>>::Output;
}

/// Alias form of [`Reverse`].
pub type Reversed<L> = <L as Reverse>::Output;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    const _: () = {
        assert!(same_type::<Reversed<Seq![]>, Seq![]>());
        assert!(same_type::<Reversed<Seq![u8]>, Seq![u8]>());
        assert!(same_type::<Reversed<Seq![u8, u16, u32]>, Seq![u32, u16, u8]>());
    };

    #[test]
    fn involution() {
        type L = Seq![i8, i16, i32, i64, &'static i64];
        assert!(same_type::<Reversed<Reversed<L>>, L>());
    }
}
