//! Descriptor identity.
//!
//! Two descriptors are the same iff their [`TypeId`]s are equal, which makes
//! identity exact rather than structural: `&'static i32` and `i32` are
//! distinct, as are `Vec<u8>` and `Vec<i8>`.

use core::any::TypeId;

/// Compares two type descriptors for exact identity, at compile time.
///
/// The `'static` bound comes from [`TypeId`]; reference-qualified
/// descriptors are written `&'static T`.
///
/// ```rust
/// use typeseq_core::same_type;
///
/// const _: () = {
///     assert!(same_type::<i32, i32>());
///     assert!(!same_type::<i32, &'static i32>());
///     assert!(!same_type::<u32, i32>());
/// };
/// ```
pub const fn same_type<A: ?Sized + 'static, B: ?Sized + 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}
