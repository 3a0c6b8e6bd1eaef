//! # typeseq-core
//!
//! Compile-time type sequences. A sequence is an ordered list of types named
//! as a single type (`Seq![i32, String, &'static str]`); queries and
//! derivations over it resolve entirely during compilation and leave no
//! runtime artifact.
//!
//! ```rust
//! use typeseq_core::prelude::*;
//!
//! type Args = Seq![i8, i16, i32, i64];
//!
//! const _: () = {
//!     assert!(Args::LEN == 4);
//!     assert!(<Args as Contains<i32>>::VALUE);
//!     assert!(<Args as IndexOf<i32>>::INDEX == 2);
//!     assert!(<Args as IsUnique>::VALUE);
//! };
//! ```

#![feature(const_trait_impl)]
#![feature(const_cmp)]

pub mod identity;
pub mod index;
pub mod inspect;
pub mod ops;
pub mod seq;
pub mod tuple;

// Re-export key types and traits
pub use identity::same_type;
pub use index::{S, Unary, Z};
pub use inspect::{Inspect, SeqError};
pub use ops::*;
pub use seq::{Cons, Nil, NonEmpty, Seq};
pub use tuple::{SeqOf, Tuple};

pub mod prelude {
    //! Everything needed to declare and query sequences.
    pub use crate::Seq;
    pub use crate::identity::same_type;
    pub use crate::index::types::*;
    pub use crate::index::{S, Unary, Z};
    pub use crate::inspect::{Inspect, SeqError};
    pub use crate::ops::*;
    pub use crate::seq::{Cons, Nil, NonEmpty};
    pub use crate::tuple::{SeqOf, Tuple};
}
