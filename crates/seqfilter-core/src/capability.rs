//! Type aliases for the boxed closures callers supply to the library.
//!
//! The erased forms all work on one element as a row of raw bytes. The
//! typed adapters wrap an ordinary closure over `&T` into the erased shape;
//! an explicit context value becomes closure capture.

use std::cmp::Ordering;

use zerocopy::FromBytes;

use crate::element::Element;

/// Predicate: decides whether one element matches.
pub type RowPredicate = Box<dyn Fn(&[u8]) -> bool + Send + Sync>;

/// Comparator: three-way ordering between two elements.
pub type RowComparator = Box<dyn Fn(&[u8], &[u8]) -> Ordering + Send + Sync>;

/// Transformer: maps an input element onto an output row, returning a
/// success flag. A `false` return aborts the surrounding operation.
pub type RowTransform = Box<dyn Fn(&[u8], &mut [u8]) -> bool + Send + Sync>;

/// Reads a typed element back out of a byte row.
///
/// Rows always carry exactly one element; a length divergence is an
/// internal invariant violation, not a caller error.
fn read<T: Element>(row: &[u8]) -> T {
    T::read_from_bytes(row).expect("row length matches element layout")
}

/// Wraps a typed predicate into a row predicate.
pub fn predicate_of<T, F>(f: F) -> RowPredicate
where
    T: Element,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Box::new(move |row| f(&read::<T>(row)))
}

/// Wraps a typed predicate carrying an explicit context value.
///
/// The context is moved into the closure and handed to every call, which is
/// the ownership-safe rendition of an opaque context pointer forwarded
/// verbatim.
pub fn predicate_with<T, C, F>(ctx: C, f: F) -> RowPredicate
where
    T: Element,
    C: Send + Sync + 'static,
    F: Fn(&T, &C) -> bool + Send + Sync + 'static,
{
    Box::new(move |row| f(&read::<T>(row), &ctx))
}

/// Wraps a typed three-way comparator into a row comparator.
pub fn comparator_of<T, F>(f: F) -> RowComparator
where
    T: Element,
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    Box::new(move |a, b| f(&read::<T>(a), &read::<T>(b)))
}

/// Row comparator for any naturally ordered element type.
pub fn natural_order<T: Element + Ord>() -> RowComparator {
    comparator_of::<T, _>(|a, b| a.cmp(b))
}

/// Wraps a typed transformer into a row transform.
///
/// The output row is written through zerocopy, so the transform's output
/// type must match the output layout the caller runs it against.
pub fn transform_of<T, U, F>(f: F) -> RowTransform
where
    T: Element,
    U: Element,
    F: Fn(&T) -> Option<U> + Send + Sync + 'static,
{
    use zerocopy::IntoBytes;
    Box::new(move |input, output| match f(&read::<T>(input)) {
        Some(value) => {
            output.copy_from_slice(value.as_bytes());
            true
        }
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_of() {
        let even = predicate_of::<i32, _>(|v| v % 2 == 0);
        assert!(even(4i32.to_ne_bytes().as_slice()));
        assert!(!even(7i32.to_ne_bytes().as_slice()));
    }

    #[test]
    fn test_predicate_with_context() {
        let above = predicate_with::<i32, i32, _>(10, |v, limit| v > limit);
        assert!(above(11i32.to_ne_bytes().as_slice()));
        assert!(!above(10i32.to_ne_bytes().as_slice()));
    }

    #[test]
    fn test_natural_order() {
        let cmp = natural_order::<u32>();
        let (a, b) = (1u32.to_ne_bytes(), 2u32.to_ne_bytes());
        assert_eq!(cmp(&a, &b), Ordering::Less);
        assert_eq!(cmp(&b, &b), Ordering::Equal);
    }

    #[test]
    fn test_transform_of() {
        let double = transform_of::<i32, i64, _>(|v| Some(i64::from(*v) * 2));
        let mut out = [0u8; 8];
        assert!(double(21i32.to_ne_bytes().as_slice(), &mut out));
        assert_eq!(i64::from_ne_bytes(out), 42);
    }
}
