//! The chain execution engine.
//!
//! Each operation consumes the previous operation's output; the first
//! consumes the original input. Every step produces a buffer no larger
//! than its input, except that duplicate index selection may repeat rows.

use seqfilter_core::{primitives, ErasedSlice, ErasedVec, Result};
use tracing::{debug, trace};

use crate::op::{FilterOp, OpKind};

/// Runs a pipeline of operations against an input array.
///
/// A pipeline with zero operations is the identity: the output is a copy
/// of the input.
pub(crate) fn run(ops: &[FilterOp], input: ErasedSlice<'_>) -> Result<ErasedVec> {
    let input_len = input.len();
    let mut current = ErasedVec::from_erased(input);
    for op in ops {
        let before = current.len();
        current = apply_op(op, current.as_erased())?;
        trace!(
            op = op.name(),
            before,
            after = current.len(),
            "applied filter operation"
        );
    }
    debug!(
        ops = ops.len(),
        input = input_len,
        output = current.len(),
        "chain applied"
    );
    Ok(current)
}

fn apply_op(op: &FilterOp, input: ErasedSlice<'_>) -> Result<ErasedVec> {
    let len = input.len();
    match op.kind() {
        OpKind::TakeFirst { count } => copy_positions(input, 0..(*count).min(len)),
        OpKind::Head => copy_positions(input, 0..1.min(len)),
        OpKind::TakeLast { count } => copy_positions(input, len - (*count).min(len)..len),
        OpKind::Tail => copy_positions(input, len - 1.min(len)..len),
        OpKind::TakeNth { step } => copy_positions(input, (0..len).step_by(*step)),
        OpKind::SkipFirst { count } => copy_positions(input, (*count).min(len)..len),
        OpKind::SkipLast { count } => copy_positions(input, 0..len - (*count).min(len)),
        OpKind::Init => copy_positions(input, 0..len.saturating_sub(1)),
        OpKind::Rest => copy_positions(input, 1.min(len)..len),
        OpKind::Range { start, end } => copy_positions(input, (*start).min(len)..(*end).min(len)),
        OpKind::Slice { start, end, step } => {
            copy_positions(input, ((*start).min(len)..(*end).min(len)).step_by(*step))
        }
        OpKind::Where { predicate } => Ok(primitives::filter(input, predicate)),
        OpKind::WhereNot { predicate } => Ok(primitives::filter(input, |row| !predicate(row))),
        OpKind::At { index } => select_indices(input, std::slice::from_ref(index)),
        OpKind::AtIndices { indices } => select_indices(input, indices),
        OpKind::Distinct { comparator } => distinct(input, comparator),
        OpKind::Reverse => copy_positions(input, (0..len).rev()),
    }
}

/// Copies the rows at the given positions, in iteration order.
///
/// Positions come from range arithmetic already clamped to the input, so
/// every lookup succeeds.
fn copy_positions(
    input: ErasedSlice<'_>,
    positions: impl Iterator<Item = usize>,
) -> Result<ErasedVec> {
    let mut out = ErasedVec::new(input.layout());
    for pos in positions {
        if let Some(row) = input.row(pos) {
            out.push_row(row)?;
        }
    }
    Ok(out)
}

/// Copies the rows at explicitly listed indices, in listed order.
///
/// Duplicates produce duplicate rows. An out-of-range index is dropped
/// silently; selection stays total instead of failing the whole chain.
fn select_indices(input: ErasedSlice<'_>, indices: &[usize]) -> Result<ErasedVec> {
    let mut out = ErasedVec::with_capacity(input.layout(), indices.len());
    for &idx in indices {
        match input.row(idx) {
            Some(row) => out.push_row(row)?,
            None => trace!(idx, len = input.len(), "index out of range, dropped"),
        }
    }
    Ok(out)
}

/// Keeps the first occurrence of each distinct value, preserving the order
/// of the kept occurrences.
fn distinct(
    input: ErasedSlice<'_>,
    comparator: &(dyn Fn(&[u8], &[u8]) -> std::cmp::Ordering + Send + Sync),
) -> Result<ErasedVec> {
    let mut out = ErasedVec::new(input.layout());
    for row in input.rows() {
        let seen = out
            .as_erased()
            .rows()
            .any(|kept| comparator(kept, row) == std::cmp::Ordering::Equal);
        if !seen {
            out.push_row(row)?;
        }
    }
    Ok(out)
}
