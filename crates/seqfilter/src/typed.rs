//! Typed front-end over the erased chain machinery.
//!
//! `Chain<T>` and `Builder<T>` fix the element type once, so predicates and
//! comparators are written against `&T` and inputs are ordinary slices. The
//! erased layer underneath is shared with callers that only know an element
//! size at runtime.

use std::cmp::Ordering;
use std::marker::PhantomData;

use seqfilter_core::{
    comparator_of, predicate_of, predicate_with, Element, ErasedSlice, FilterError, Result,
};

use crate::builder::ChainBuilder;
use crate::chain::FilterChain;
use crate::op::FilterOp;

/// A filter chain fixed to one element type.
///
/// # Example
///
/// ```
/// use seqfilter::typed::Chain;
///
/// let chain = Chain::<i32>::builder()
///     .take_first(4)
///     .reverse()
///     .build()
///     .unwrap();
///
/// let out = chain.apply(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
/// assert_eq!(out, vec![4, 3, 2, 1]);
/// ```
#[derive(Debug, Default)]
pub struct Chain<T: Element> {
    inner: FilterChain,
    _elem: PhantomData<T>,
}

impl<T: Element> Chain<T> {
    /// Creates an empty typed chain.
    pub fn new() -> Self {
        Self::from_erased(FilterChain::new())
    }

    /// Starts a typed builder.
    pub fn builder() -> Builder<T> {
        Builder::new()
    }

    /// Fixes an erased chain to this element type.
    pub fn from_erased(inner: FilterChain) -> Self {
        Self {
            inner,
            _elem: PhantomData,
        }
    }

    /// Borrows the underlying erased chain.
    pub fn as_erased(&self) -> &FilterChain {
        &self.inner
    }

    /// Releases the underlying erased chain.
    pub fn into_erased(self) -> FilterChain {
        self.inner
    }

    /// Number of operations in the chain.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the chain holds no operations.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Appends an operation.
    pub fn push(&mut self, op: FilterOp) -> Result<()> {
        self.inner.push(op)
    }

    /// Executes the chain against a typed slice.
    pub fn apply(&self, input: &[T]) -> Result<Vec<T>> {
        self.inner.apply(ErasedSlice::of(input))?.into_vec()
    }
}

/// Typed fluent builder; see [`ChainBuilder`] for the error-accumulation
/// contract.
#[derive(Debug, Default)]
pub struct Builder<T: Element> {
    inner: ChainBuilder,
    _elem: PhantomData<T>,
}

impl<T: Element> Builder<T> {
    /// Creates a builder around an empty chain.
    pub fn new() -> Self {
        Self {
            inner: ChainBuilder::new(),
            _elem: PhantomData,
        }
    }

    /// Wraps an existing typed chain.
    pub fn from_chain(chain: Chain<T>) -> Self {
        Self {
            inner: ChainBuilder::from_chain(chain.into_erased()),
            _elem: PhantomData,
        }
    }

    fn map(self, f: impl FnOnce(ChainBuilder) -> ChainBuilder) -> Self {
        Self {
            inner: f(self.inner),
            _elem: PhantomData,
        }
    }

    /// True once any fluent call has failed.
    pub fn has_error(&self) -> bool {
        self.inner.has_error()
    }

    /// The sticky error, if any.
    pub fn error(&self) -> Option<&FilterError> {
        self.inner.error()
    }

    /// Numeric code of the sticky error; 0 when the builder is clean.
    pub fn error_code(&self) -> u32 {
        self.inner.error_code()
    }

    /// Message of the sticky error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.inner.error_message()
    }

    /// Detaches the accumulated chain, or yields the sticky error.
    pub fn build(self) -> Result<Chain<T>> {
        self.inner.build().map(Chain::from_erased)
    }

    /// Executes the accumulated chain without detaching it.
    pub fn apply(&self, input: &[T]) -> Result<Vec<T>> {
        self.inner.apply(ErasedSlice::of(input))?.into_vec()
    }

    /// Keep the first `count` elements.
    pub fn take_first(self, count: usize) -> Self {
        self.map(|b| b.take_first(count))
    }

    /// Keep the last `count` elements.
    pub fn take_last(self, count: usize) -> Self {
        self.map(|b| b.take_last(count))
    }

    /// Keep every `step`-th element.
    pub fn take_nth(self, step: usize) -> Self {
        self.map(|b| b.take_nth(step))
    }

    /// Keep the first element.
    pub fn head(self) -> Self {
        self.map(|b| b.head())
    }

    /// Keep the last element.
    pub fn tail(self) -> Self {
        self.map(|b| b.tail())
    }

    /// Drop the first `count` elements.
    pub fn skip_first(self, count: usize) -> Self {
        self.map(|b| b.skip_first(count))
    }

    /// Drop the last `count` elements.
    pub fn skip_last(self, count: usize) -> Self {
        self.map(|b| b.skip_last(count))
    }

    /// Drop the last element.
    pub fn init(self) -> Self {
        self.map(|b| b.init())
    }

    /// Drop the first element.
    pub fn rest(self) -> Self {
        self.map(|b| b.rest())
    }

    /// Keep the half-open interval `[start, end)`.
    pub fn range(self, start: usize, end: usize) -> Self {
        self.map(|b| b.range(start, end))
    }

    /// Keep every `step`-th position within `[start, end)`.
    pub fn slice(self, start: usize, end: usize, step: usize) -> Self {
        self.map(|b| b.slice(start, end, step))
    }

    /// Keep elements matching a typed predicate.
    pub fn where_<F>(self, f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.map(|b| b.where_(predicate_of::<T, _>(f)))
    }

    /// Keep elements matching a typed predicate over an explicit context.
    pub fn where_ctx<C, F>(self, ctx: C, f: F) -> Self
    where
        C: Send + Sync + 'static,
        F: Fn(&T, &C) -> bool + Send + Sync + 'static,
    {
        self.map(|b| b.where_(predicate_with::<T, C, _>(ctx, f)))
    }

    /// Keep elements rejected by a typed predicate.
    pub fn where_not<F>(self, f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.map(|b| b.where_not(predicate_of::<T, _>(f)))
    }

    /// Keep elements rejected by a typed predicate over an explicit
    /// context.
    pub fn where_not_ctx<C, F>(self, ctx: C, f: F) -> Self
    where
        C: Send + Sync + 'static,
        F: Fn(&T, &C) -> bool + Send + Sync + 'static,
    {
        self.map(|b| b.where_not(predicate_with::<T, C, _>(ctx, f)))
    }

    /// Keep the single element at `index`.
    pub fn at(self, index: usize) -> Self {
        self.map(|b| b.at(index))
    }

    /// Keep the elements at the listed indices, in listed order.
    pub fn at_indices(self, indices: &[usize]) -> Self {
        self.map(|b| b.at_indices(indices))
    }

    /// Keep the first occurrence of each distinct value under a typed
    /// three-way comparator.
    pub fn distinct_by<F>(self, cmp: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.map(|b| b.distinct(comparator_of::<T, _>(cmp)))
    }

    /// Keep the first occurrence of each distinct value under the natural
    /// order.
    pub fn distinct(self) -> Self
    where
        T: Ord,
    {
        self.distinct_by(|a, b| a.cmp(b))
    }

    /// Reverse the element order.
    pub fn reverse(self) -> Self {
        self.map(|b| b.reverse())
    }
}
