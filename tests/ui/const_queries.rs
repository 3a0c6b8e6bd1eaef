//! A whole query session evaluated in const context; no runtime code at all.

use typeseq::prelude::*;

type Args = Seq![u8, &'static str, Vec<i32>, bool];

const LEN: usize = Args::LEN;
const HAS_STR: bool = <Args as Contains<&'static str>>::VALUE;
const WHERE_BOOL: usize = <Args as IndexOf<bool>>::INDEX;
const MISSING: usize = <Args as IndexOf<f64>>::INDEX;
const UNIQUE: bool = <Args as IsUnique>::VALUE;

const _: () = {
    assert!(LEN == 4);
    assert!(HAS_STR);
    assert!(WHERE_BOOL == 3);
    assert!(MISSING == NOT_FOUND);
    assert!(UNIQUE);
};

fn main() {}
