//! SeqFilter Core - Element storage contract and primitives
//!
//! This crate provides the fundamental abstractions for seqfilter:
//! - Erased element storage (byte buffers plus an element layout)
//! - Capability aliases for caller-supplied predicates, comparators and
//!   transformers
//! - Single-pass map/filter/fold primitives and predicate combinators
//! - Error types shared across the workspace

pub mod capability;
pub mod element;
pub mod error;
pub mod predicate;
pub mod primitives;

pub use capability::{
    comparator_of, natural_order, predicate_of, predicate_with, transform_of, RowComparator,
    RowPredicate, RowTransform,
};
pub use element::{Element, ElementLayout, ErasedSlice, ErasedVec};
pub use error::{FilterError, Result};
