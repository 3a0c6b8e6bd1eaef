//! # typeseq
//!
//! Compile-time type sequences for Rust: name an ordered list of types as a
//! single type, then query and derive properties of that list with zero
//! runtime representation or cost.
//!
//! ## Quick start
//!
//! ```rust
//! use typeseq::prelude::*;
//!
//! // `char, short, int, long, long long`, the classic ladder.
//! type Ints = Seq![i8, i16, i32, i64, i128];
//!
//! const _: () = {
//!     assert!(Ints::LEN == 5);
//!     assert!(same_type::<ElemAt<U2, Ints>, i32>());
//!     assert!(<Ints as IndexOf<i32>>::INDEX == 2);
//!     assert!(<Ints as IndexOf<f32>>::INDEX == NOT_FOUND);
//!     assert!(<Ints as IsUnique>::VALUE);
//! };
//!
//! // Derivations produce new sequences.
//! const _: () = {
//!     assert!(same_type::<Reversed<Reversed<Ints>>, Ints>());
//!     assert!(same_type::<FirstN<U2, Ints>, Seq![i8, i16]>());
//!     assert!(same_type::<Sliced<U1, U3, Ints>, Seq![i16, i32]>());
//! };
//! ```
//!
//! Everything above resolves during compilation; an out-of-range [`ElemAt`]
//! index does not produce a sentinel, it fails the build.
//!
//! Descriptor identity is exact: `&'static i32` and `i32` are different
//! elements, so `Contains<i32>` over a sequence holding only `&'static i32`
//! is `false`.
//!
//! The search family (`Contains`/`IndexOf`/`IsUnique`) compares [`TypeId`]s
//! in const context, which currently needs a nightly toolchain (see
//! `rust-toolchain.toml`).
//!
//! [`TypeId`]: core::any::TypeId

pub use typeseq_core::*;

/// Runtime inspection helpers (names, ids, positions).
pub use typeseq_core::inspect;
