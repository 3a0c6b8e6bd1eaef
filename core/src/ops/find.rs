//! First-index search.

use crate::identity::same_type;
use crate::seq::{Cons, Nil, Seq};

/// Sentinel index meaning "absent". Lies outside every valid 0-based
/// position, so `INDEX == NOT_FOUND` is never ambiguous with a real hit.
pub const NOT_FOUND: usize = usize::MAX;

/// Lowest position at which exactly `X` occurs, or [`NOT_FOUND`].
///
/// ```rust
/// use typeseq_core::prelude::*;
///
/// type L = Seq![i8, i16, i32, i64, i128];
/// const _: () = {
///     assert!(<L as IndexOf<i32>>::INDEX == 2);
///     assert!(<L as IndexOf<f32>>::INDEX == NOT_FOUND);
/// };
/// ```
pub trait IndexOf<X: ?Sized + 'static>: Seq {
    const INDEX: usize;
}

impl<X: ?Sized + 'static> IndexOf<X> for Nil {
    const INDEX: usize = NOT_FOUND;
}

impl<X, H, T> IndexOf<X> for Cons<H, T>
where
    X: ?Sized + 'static,
    H: ?Sized + 'static,
    T: IndexOf<X>,
{
    const INDEX: usize = if same_type::<X, H>() {
        0
    } else if T::INDEX == NOT_FOUND {
        NOT_FOUND
    } else {
        1 + T::INDEX
    };
}
