//! Single-pass map / filter / fold primitives over erased element arrays.
//!
//! The filter-chain engine composes on top of these; they are also usable
//! directly when no chain bookkeeping is wanted.

use crate::capability::RowTransform;
use crate::element::{ElementLayout, ErasedSlice, ErasedVec};
use crate::error::{FilterError, Result};

/// Keeps the elements for which `pred` holds, preserving order.
pub fn filter(input: ErasedSlice<'_>, pred: impl Fn(&[u8]) -> bool) -> ErasedVec {
    let mut out = ErasedVec::with_capacity(input.layout(), input.len());
    for row in input.rows() {
        if pred(row) {
            // Row length is exact by construction.
            let _ = out.push_row(row);
        }
    }
    out
}

/// Maps every element onto an output element of `out_layout`.
///
/// A transformer returning `false` aborts the whole map; partial output is
/// discarded.
pub fn map(
    input: ErasedSlice<'_>,
    out_layout: ElementLayout,
    transform: impl Fn(&[u8], &mut [u8]) -> bool,
) -> Result<ErasedVec> {
    let mut out = ErasedVec::with_capacity(out_layout, input.len());
    let mut scratch = vec![0u8; out_layout.size()];
    for (idx, row) in input.rows().enumerate() {
        if !transform(row, &mut scratch) {
            return Err(FilterError::Internal(format!(
                "transform failed at element {idx}"
            )));
        }
        out.push_row(&scratch)?;
    }
    Ok(out)
}

/// Left fold over the elements in order.
pub fn fold<A>(input: ErasedSlice<'_>, init: A, f: impl Fn(A, &[u8]) -> A) -> A {
    let mut acc = init;
    for row in input.rows() {
        acc = f(acc, row);
    }
    acc
}

/// Composes two transforms: the result runs `f` into a scratch element of
/// `mid_layout`, then `g` from that scratch onto the final output row.
pub fn compose(f: RowTransform, g: RowTransform, mid_layout: ElementLayout) -> RowTransform {
    Box::new(move |input, output| {
        let mut mid = vec![0u8; mid_layout.size()];
        f(input, &mut mid) && g(&mid, output)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{predicate_of, transform_of};

    #[test]
    fn test_filter_keeps_matching_in_order() {
        let items: Vec<i32> = vec![1, 2, 3, 4, 5, 6];
        let even = predicate_of::<i32, _>(|v| v % 2 == 0);
        let out = filter(ErasedSlice::of(&items), even);
        assert_eq!(out.into_vec::<i32>().unwrap(), vec![2, 4, 6]);
    }

    #[test]
    fn test_map_widens_elements() {
        let items: Vec<i32> = vec![1, 2, 3];
        let double = transform_of::<i32, i64, _>(|v| Some(i64::from(*v) * 2));
        let out = map(ErasedSlice::of(&items), ElementLayout::of::<i64>(), double).unwrap();
        assert_eq!(out.into_vec::<i64>().unwrap(), vec![2, 4, 6]);
    }

    #[test]
    fn test_map_aborts_on_transform_failure() {
        let items: Vec<i32> = vec![1, -1, 2];
        let positive_only = transform_of::<i32, i32, _>(|v| (*v > 0).then_some(*v));
        let result = map(
            ErasedSlice::of(&items),
            ElementLayout::of::<i32>(),
            positive_only,
        );
        assert!(matches!(result, Err(FilterError::Internal(_))));
    }

    #[test]
    fn test_fold_sums() {
        let items: Vec<i32> = vec![1, 2, 3, 4];
        let sum = fold(ErasedSlice::of(&items), 0i64, |acc, row| {
            acc + i64::from(i32::from_ne_bytes(row.try_into().unwrap()))
        });
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_compose_runs_both_stages() {
        let inc = transform_of::<i32, i32, _>(|v| Some(v + 1));
        let double = transform_of::<i32, i32, _>(|v| Some(v * 2));
        let both = compose(inc, double, ElementLayout::of::<i32>());

        let items: Vec<i32> = vec![1, 2, 3];
        let out = map(ErasedSlice::of(&items), ElementLayout::of::<i32>(), both).unwrap();
        assert_eq!(out.into_vec::<i32>().unwrap(), vec![4, 6, 8]);
    }
}
