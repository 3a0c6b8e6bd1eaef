//! Runtime inspection of sequence contents.
//!
//! A diagnostic side door: walks a sequence at runtime collecting element
//! names and [`TypeId`]s, for logging and for queries whose target type is
//! only known at runtime. The compile-time API never depends on this module.

use core::any::{TypeId, type_name};

use thiserror::Error;

use crate::seq::{Cons, Nil, Seq};

/// Errors from runtime sequence inspection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeqError {
    /// Requested position does not exist.
    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// Walks the sequence head-to-tail, reporting each element's name and id.
pub trait Inspect: Seq {
    fn collect_names(buf: &mut Vec<&'static str>);
    fn collect_ids(buf: &mut Vec<TypeId>);
}

impl Inspect for Nil {
    fn collect_names(_: &mut Vec<&'static str>) {}
    fn collect_ids(_: &mut Vec<TypeId>) {}
}

impl<H: ?Sized + 'static, T: Inspect> Inspect for Cons<H, T> {
    fn collect_names(buf: &mut Vec<&'static str>) {
        buf.push(type_name::<H>());
        T::collect_names(buf);
    }

    fn collect_ids(buf: &mut Vec<TypeId>) {
        buf.push(TypeId::of::<H>());
        T::collect_ids(buf);
    }
}

/// Element names in sequence order.
pub fn names<L: Inspect>() -> Vec<&'static str> {
    let mut buf = Vec::with_capacity(L::LEN);
    L::collect_names(&mut buf);
    buf
}

/// Element ids in sequence order.
pub fn ids<L: Inspect>() -> Vec<TypeId> {
    let mut buf = Vec::with_capacity(L::LEN);
    L::collect_ids(&mut buf);
    buf
}

/// Name of the element at `index`.
pub fn name_at<L: Inspect>(index: usize) -> Result<&'static str, SeqError> {
    names::<L>()
        .get(index)
        .copied()
        .ok_or(SeqError::OutOfBounds { index, len: L::LEN })
}

/// First position holding `id`, if any.
pub fn position_of<L: Inspect>(id: TypeId) -> Option<usize> {
    ids::<L>().iter().position(|&i| i == id)
}

/// Whether any position holds `id`.
pub fn contains_id<L: Inspect>(id: TypeId) -> bool {
    position_of::<L>(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seq;

    type L = Seq![i32, String, &'static i32];

    #[test]
    fn names_are_in_order() {
        let names = names::<L>();
        assert_eq!(names.len(), L::LEN);
        assert_eq!(names[0], "i32");
        assert!(names[1].ends_with("String"));
        assert_eq!(names[2], "&i32");
    }

    #[test]
    fn name_at_bounds() {
        assert_eq!(name_at::<L>(0), Ok("i32"));
        assert_eq!(
            name_at::<L>(3),
            Err(SeqError::OutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            name_at::<Nil>(0),
            Err(SeqError::OutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn position_lookup() {
        assert_eq!(position_of::<L>(TypeId::of::<String>()), Some(1));
        assert_eq!(position_of::<L>(TypeId::of::<u8>()), None);
        assert!(contains_id::<L>(TypeId::of::<&'static i32>()));
        assert!(!contains_id::<L>(TypeId::of::<i64>()));
    }
}
