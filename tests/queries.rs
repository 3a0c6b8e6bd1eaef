//! Query-family behavior: Size, At, Contains, IndexOf, IsUnique.

use typeseq::prelude::*;

// The reference sequence from the original test ladder:
// char, short, int, long, long long.
type Ints = Seq![i8, i16, i32, i64, i128];

const _: () = {
    assert!(Ints::LEN == 5);
    assert!(<Ints as Size>::VALUE == 5);
    assert!(same_type::<ElemAt<U2, Ints>, i32>());
    assert!(<Ints as IndexOf<i32>>::INDEX == 2);
    assert!(<Ints as IndexOf<f32>>::INDEX == NOT_FOUND);
    assert!(<Ints as IsUnique>::VALUE);
};

// The empty sequence: zero size, contains nothing, vacuously unique.
const _: () = {
    assert!(<Seq![]>::LEN == 0);
    assert!(<Seq![] as Size>::VALUE == 0);
    assert!(!<Seq![] as Contains<i32>>::VALUE);
    assert!(!<Seq![] as Contains<String>>::VALUE);
    assert!(<Seq![] as IndexOf<i32>>::INDEX == NOT_FOUND);
    assert!(<Seq![] as IsUnique>::VALUE);
};

// A reference-qualified element is a distinct descriptor.
const _: () = {
    type L = Seq![f64, f32, i8, i16, &'static i32, i64];
    assert!(!<L as Contains<i32>>::VALUE);
    assert!(<L as Contains<&'static i32>>::VALUE);
    assert!(<L as IndexOf<i32>>::INDEX == NOT_FOUND);
    assert!(<L as IndexOf<&'static i32>>::INDEX == 4);
};

#[test]
fn size_matches_construction_count() {
    assert_eq!(<Seq![u8]>::LEN, 1);
    assert_eq!(<Seq![u8, u8]>::LEN, 2);
    assert_eq!(<Seq![u8, u8] as Size>::VALUE, <Seq![u8, u8]>::LEN);
}

#[test]
fn has_and_find_agree() {
    fn check<L, X>()
    where
        X: ?Sized + 'static,
        L: Contains<X> + IndexOf<X>,
    {
        assert_eq!(
            <L as Contains<X>>::VALUE,
            <L as IndexOf<X>>::INDEX != NOT_FOUND
        );
    }

    check::<Ints, i32>();
    check::<Ints, f32>();
    check::<Seq![], u8>();
    check::<Seq![String, String], String>();
    check::<Seq![&'static i32], i32>();
}

#[test]
fn find_reports_first_occurrence() {
    type Dups = Seq![u8, i32, u8, i32, u8];
    assert_eq!(<Dups as IndexOf<u8>>::INDEX, 0);
    assert_eq!(<Dups as IndexOf<i32>>::INDEX, 1);
    // At a later duplicate position, Find still points at the earlier one.
    assert!(same_type::<ElemAt<U2, Dups>, u8>());
    assert!(<Dups as IndexOf<ElemAt<U2, Dups>>>::INDEX <= 2);
}

#[test]
fn duplicate_types_break_uniqueness() {
    assert!(!<Seq![i32, i32] as IsUnique>::VALUE);
    assert!(!<Seq![u8, i32, u8] as IsUnique>::VALUE);
    assert!(<Seq![u8, i32, &'static u8] as IsUnique>::VALUE);
}

#[test]
fn repeats_are_valid_sequences() {
    // Construction is total: repeats and qualified variants are fine.
    type R = Seq![i32, i32, &'static i32, i32];
    assert_eq!(R::LEN, 4);
    assert_eq!(<R as IndexOf<i32>>::INDEX, 0);
    assert!(!<R as IsUnique>::VALUE);
}
