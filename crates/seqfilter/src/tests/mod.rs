//! Tests for the filter chain subsystem.

mod test_chain;

use seqfilter_core::ErasedSlice;

use crate::chain::FilterChain;

/// Applies a chain to an i32 slice and unwraps the typed result.
fn apply_i32(chain: &FilterChain, input: &[i32]) -> Vec<i32> {
    chain
        .apply(ErasedSlice::of(input))
        .expect("chain apply")
        .into_vec::<i32>()
        .expect("typed result")
}

/// Byte-wise row equality, sufficient for the integer elements used here.
fn same_bytes(a: &[u8], b: &[u8]) -> bool {
    a == b
}
