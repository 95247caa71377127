//! SeqFilter - declarative filter chains over homogeneous arrays
//!
//! This crate provides the filter chain subsystem:
//! - A declarative operation vocabulary (take/skip/range/slice/where/
//!   indices/distinct/reverse)
//! - Bounded chains executed in insertion order by a single engine
//! - A fluent, error-accumulating builder
//! - Set combinators (union/intersection/difference) over independently
//!   executed chains
//! - A typed generic front-end over the erased machinery
//!
//! Elements are handled as opaque byte rows plus an element layout, so one
//! engine serves every element type; see `seqfilter-core` for the storage
//! contract.

pub mod builder;
pub mod chain;
pub mod combine;
mod exec;
pub mod op;
pub mod typed;

#[cfg(test)]
mod tests;

pub use builder::ChainBuilder;
pub use chain::{FilterChain, MAX_CHAIN_LENGTH};
pub use combine::{ChainDifference, ChainIntersection, ChainUnion};
pub use op::{FilterOp, OpKind};
pub use seqfilter_core::{
    Element, ElementLayout, ErasedSlice, ErasedVec, FilterError, Result, RowComparator,
    RowPredicate, RowTransform,
};
