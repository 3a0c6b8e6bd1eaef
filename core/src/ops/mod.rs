//! The algorithm family: queries and structural derivations over sequences.
//!
//! Queries resolve to associated consts (`Size`, `Contains`, `IndexOf`,
//! `IsUnique`) or associated types (`At`); derivations (`Take`, `TakeLast`,
//! `Slice`, `Reverse`, `Map`, `Concat`) resolve to new sequence types.
//! Evaluation always proceeds head-to-tail, so `IndexOf` reports the first
//! occurrence and all positional operations index from the front.

mod at;
mod concat;
mod contains;
mod find;
mod map;
mod range;
mod reverse;
mod size;
mod unique;

pub use at::{At, ElemAt};
pub use concat::{Concat, Concatenated};
pub use contains::Contains;
pub use find::{IndexOf, NOT_FOUND};
pub use map::{Ident, Map, Mapped, TypeFn};
pub use range::{FirstN, LastN, Skip, Skipped, Slice, Sliced, Sub, Take, TakeLast};
pub use reverse::{Reverse, ReverseOnto, Reversed};
pub use size::Size;
pub use unique::IsUnique;
