//! Ordered, bounded sequences of filter operations.

use seqfilter_core::{ErasedSlice, ErasedVec, FilterError, Result, RowComparator, RowPredicate};
use smallvec::SmallVec;

use crate::exec;
use crate::op::FilterOp;

/// Maximum number of operations a single chain may hold.
pub const MAX_CHAIN_LENGTH: usize = 32;

/// An ordered, bounded sequence of operations, executed in insertion order.
///
/// Chains are append-only: operations are never removed or reordered, only
/// the whole chain is discarded. Appending past [`MAX_CHAIN_LENGTH`] fails
/// cleanly and leaves the chain unchanged.
#[derive(Debug, Default)]
pub struct FilterChain {
    ops: SmallVec<[FilterOp; 4]>,
}

impl FilterChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations in the chain.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the chain holds no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The operations in execution order.
    pub fn ops(&self) -> &[FilterOp] {
        &self.ops
    }

    /// Appends an operation.
    ///
    /// Fails with [`FilterError::CapacityExceeded`] once the chain is at
    /// [`MAX_CHAIN_LENGTH`]; the chain is left unchanged.
    pub fn push(&mut self, op: FilterOp) -> Result<()> {
        if self.ops.len() >= MAX_CHAIN_LENGTH {
            return Err(FilterError::CapacityExceeded(format!(
                "chain already holds {MAX_CHAIN_LENGTH} operations"
            )));
        }
        self.ops.push(op);
        Ok(())
    }

    /// Executes the chain against an input array.
    ///
    /// All operations see the element layout carried by `input`; it is
    /// supplied once per call, not per operation. An empty chain is the
    /// identity and returns a copy of the input.
    pub fn apply(&self, input: ErasedSlice<'_>) -> Result<ErasedVec> {
        exec::run(&self.ops, input)
    }

    // Convenience adders mirroring the operation factories.

    /// Appends [`FilterOp::take_first`].
    pub fn add_take_first(&mut self, count: usize) -> Result<()> {
        self.push(FilterOp::take_first(count))
    }

    /// Appends [`FilterOp::take_last`].
    pub fn add_take_last(&mut self, count: usize) -> Result<()> {
        self.push(FilterOp::take_last(count))
    }

    /// Appends [`FilterOp::take_nth`].
    pub fn add_take_nth(&mut self, step: usize) -> Result<()> {
        self.push(FilterOp::take_nth(step))
    }

    /// Appends [`FilterOp::head`].
    pub fn add_head(&mut self) -> Result<()> {
        self.push(FilterOp::head())
    }

    /// Appends [`FilterOp::tail`].
    pub fn add_tail(&mut self) -> Result<()> {
        self.push(FilterOp::tail())
    }

    /// Appends [`FilterOp::skip_first`].
    pub fn add_skip_first(&mut self, count: usize) -> Result<()> {
        self.push(FilterOp::skip_first(count))
    }

    /// Appends [`FilterOp::skip_last`].
    pub fn add_skip_last(&mut self, count: usize) -> Result<()> {
        self.push(FilterOp::skip_last(count))
    }

    /// Appends [`FilterOp::init`].
    pub fn add_init(&mut self) -> Result<()> {
        self.push(FilterOp::init())
    }

    /// Appends [`FilterOp::rest`].
    pub fn add_rest(&mut self) -> Result<()> {
        self.push(FilterOp::rest())
    }

    /// Appends [`FilterOp::range`].
    pub fn add_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.push(FilterOp::range(start, end))
    }

    /// Appends [`FilterOp::slice`].
    pub fn add_slice(&mut self, start: usize, end: usize, step: usize) -> Result<()> {
        self.push(FilterOp::slice(start, end, step))
    }

    /// Appends [`FilterOp::where_`].
    pub fn add_where(&mut self, predicate: RowPredicate) -> Result<()> {
        self.push(FilterOp::where_(predicate))
    }

    /// Appends [`FilterOp::where_not`].
    pub fn add_where_not(&mut self, predicate: RowPredicate) -> Result<()> {
        self.push(FilterOp::where_not(predicate))
    }

    /// Appends [`FilterOp::at`].
    pub fn add_at(&mut self, index: usize) -> Result<()> {
        self.push(FilterOp::at(index))
    }

    /// Appends [`FilterOp::at_indices`].
    pub fn add_at_indices(&mut self, indices: &[usize]) -> Result<()> {
        self.push(FilterOp::at_indices(indices))
    }

    /// Appends [`FilterOp::distinct`].
    pub fn add_distinct(&mut self, comparator: RowComparator) -> Result<()> {
        self.push(FilterOp::distinct(comparator))
    }

    /// Appends [`FilterOp::reverse`].
    pub fn add_reverse(&mut self) -> Result<()> {
        self.push(FilterOp::reverse())
    }
}
