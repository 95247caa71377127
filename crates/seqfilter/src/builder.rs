//! Fluent, error-accumulating chain construction.
//!
//! The builder follows the railway pattern: each fluent call appends one
//! operation, and the first failure freezes the chain. Later calls are
//! no-ops that preserve the recorded error, so a whole pipeline can be
//! written without checking every call individually.

use seqfilter_core::{ErasedSlice, ErasedVec, FilterError, Result, RowComparator, RowPredicate};

use crate::chain::FilterChain;
use crate::op::FilterOp;

/// Fluent wrapper around a [`FilterChain`] with sticky error state.
///
/// # Example
///
/// ```
/// use seqfilter::{ChainBuilder, ErasedSlice};
/// use seqfilter_core::predicate_of;
///
/// let chain = ChainBuilder::new()
///     .skip_first(1)
///     .where_(predicate_of::<i32, _>(|v| v % 2 == 0))
///     .take_first(2)
///     .build()
///     .unwrap();
///
/// let input: Vec<i32> = vec![1, 2, 3, 4, 5, 6];
/// let out = chain.apply(ErasedSlice::of(&input)).unwrap();
/// assert_eq!(out.into_vec::<i32>().unwrap(), vec![2, 4]);
/// ```
#[derive(Debug, Default)]
pub struct ChainBuilder {
    chain: FilterChain,
    error: Option<FilterError>,
}

impl ChainBuilder {
    /// Creates a builder around an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing chain without copying it.
    ///
    /// The builder takes ownership; [`ChainBuilder::build`] hands the chain
    /// back, and dropping an unbuilt builder drops the chain with it.
    pub fn from_chain(chain: FilterChain) -> Self {
        Self { chain, error: None }
    }

    fn append(mut self, op: FilterOp) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.chain.push(op) {
                self.error = Some(e);
            }
        }
        self
    }

    /// True once any fluent call has failed. The error is never
    /// auto-cleared.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The sticky error, if any.
    pub fn error(&self) -> Option<&FilterError> {
        self.error.as_ref()
    }

    /// Numeric code of the sticky error; 0 when the builder is clean.
    pub fn error_code(&self) -> u32 {
        self.error.as_ref().map(FilterError::code).unwrap_or(0)
    }

    /// Message of the sticky error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Number of operations accumulated so far.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns true if no operations have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Detaches and returns the accumulated chain.
    ///
    /// Consumes the builder, so no stale post-build state exists. An empty
    /// builder yields a valid empty chain; a builder in error state yields
    /// the recorded error instead.
    pub fn build(self) -> Result<FilterChain> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.chain),
        }
    }

    /// Executes the accumulated chain without detaching it.
    ///
    /// An empty builder is the identity; a builder in error state returns
    /// the recorded error.
    pub fn apply(&self, input: ErasedSlice<'_>) -> Result<ErasedVec> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => self.chain.apply(input),
        }
    }

    // Fluent operation vocabulary.

    /// Appends [`FilterOp::take_first`].
    pub fn take_first(self, count: usize) -> Self {
        self.append(FilterOp::take_first(count))
    }

    /// Appends [`FilterOp::take_last`].
    pub fn take_last(self, count: usize) -> Self {
        self.append(FilterOp::take_last(count))
    }

    /// Appends [`FilterOp::take_nth`].
    pub fn take_nth(self, step: usize) -> Self {
        self.append(FilterOp::take_nth(step))
    }

    /// Appends [`FilterOp::head`].
    pub fn head(self) -> Self {
        self.append(FilterOp::head())
    }

    /// Appends [`FilterOp::tail`].
    pub fn tail(self) -> Self {
        self.append(FilterOp::tail())
    }

    /// Appends [`FilterOp::skip_first`].
    pub fn skip_first(self, count: usize) -> Self {
        self.append(FilterOp::skip_first(count))
    }

    /// Appends [`FilterOp::skip_last`].
    pub fn skip_last(self, count: usize) -> Self {
        self.append(FilterOp::skip_last(count))
    }

    /// Appends [`FilterOp::init`].
    pub fn init(self) -> Self {
        self.append(FilterOp::init())
    }

    /// Appends [`FilterOp::rest`].
    pub fn rest(self) -> Self {
        self.append(FilterOp::rest())
    }

    /// Appends [`FilterOp::range`].
    pub fn range(self, start: usize, end: usize) -> Self {
        self.append(FilterOp::range(start, end))
    }

    /// Appends [`FilterOp::slice`].
    pub fn slice(self, start: usize, end: usize, step: usize) -> Self {
        self.append(FilterOp::slice(start, end, step))
    }

    /// Appends [`FilterOp::where_`].
    pub fn where_(self, predicate: RowPredicate) -> Self {
        self.append(FilterOp::where_(predicate))
    }

    /// Appends [`FilterOp::where_not`].
    pub fn where_not(self, predicate: RowPredicate) -> Self {
        self.append(FilterOp::where_not(predicate))
    }

    /// Appends [`FilterOp::at`].
    pub fn at(self, index: usize) -> Self {
        self.append(FilterOp::at(index))
    }

    /// Appends [`FilterOp::at_indices`].
    pub fn at_indices(self, indices: &[usize]) -> Self {
        self.append(FilterOp::at_indices(indices))
    }

    /// Appends [`FilterOp::distinct`].
    pub fn distinct(self, comparator: RowComparator) -> Self {
        self.append(FilterOp::distinct(comparator))
    }

    /// Appends [`FilterOp::reverse`].
    pub fn reverse(self) -> Self {
        self.append(FilterOp::reverse())
    }
}
