//! Derivations chained back into queries, all during compilation.

use typeseq::prelude::*;

type Pipeline = Sliced<U1, U4, Reversed<Seq![i8, i16, i32, i64, i128]>>;

const _: () = {
    assert!(Pipeline::LEN == 3);
    assert!(same_type::<Pipeline, Seq![i64, i32, i16]>());
    assert!(<Pipeline as IndexOf<i32>>::INDEX == 1);
    assert!(!<Pipeline as Contains<i128>>::VALUE);
};

fn main() {}
