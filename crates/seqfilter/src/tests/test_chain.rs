//! Tests for chain construction and the per-operation execution semantics.

use seqfilter_core::{natural_order, predicate_of, ErasedSlice};

use super::apply_i32;
use crate::chain::{FilterChain, MAX_CHAIN_LENGTH};
use crate::op::FilterOp;
use crate::FilterError;

fn is_even(v: &i32) -> bool {
    v % 2 == 0
}

#[test]
fn test_empty_chain_is_identity() {
    let chain = FilterChain::new();
    let input = vec![5, 4, 3, 2, 1];
    assert_eq!(apply_i32(&chain, &input), input);

    let empty: Vec<i32> = vec![];
    assert_eq!(apply_i32(&chain, &empty), empty);
}

#[test]
fn test_take_first_yields_prefix() {
    let input: Vec<i32> = (1..=5).collect();
    for n in [0usize, 1, 3, 5, 9] {
        let mut chain = FilterChain::new();
        chain.add_take_first(n).unwrap();
        let expected: Vec<i32> = input.iter().copied().take(n).collect();
        assert_eq!(apply_i32(&chain, &input), expected, "take_first({n})");
    }
}

#[test]
fn test_take_last_yields_suffix() {
    let input: Vec<i32> = (1..=5).collect();
    let mut chain = FilterChain::new();
    chain.add_take_last(2).unwrap();
    assert_eq!(apply_i32(&chain, &input), vec![4, 5]);

    let mut oversized = FilterChain::new();
    oversized.add_take_last(99).unwrap();
    assert_eq!(apply_i32(&oversized, &input), input);
}

#[test]
fn test_head_and_tail() {
    let input = vec![7, 8, 9];
    let mut head = FilterChain::new();
    head.add_head().unwrap();
    assert_eq!(apply_i32(&head, &input), vec![7]);

    let mut tail = FilterChain::new();
    tail.add_tail().unwrap();
    assert_eq!(apply_i32(&tail, &input), vec![9]);

    let empty: Vec<i32> = vec![];
    assert_eq!(apply_i32(&head, &empty), empty);
    assert_eq!(apply_i32(&tail, &empty), empty);
}

#[test]
fn test_take_nth_strides_from_zero() {
    let input: Vec<i32> = (0..10).collect();
    let mut chain = FilterChain::new();
    chain.add_take_nth(3).unwrap();
    assert_eq!(apply_i32(&chain, &input), vec![0, 3, 6, 9]);

    // Step 0 is normalized to 1 at construction
    let mut degenerate = FilterChain::new();
    degenerate.add_take_nth(0).unwrap();
    assert_eq!(apply_i32(&degenerate, &input), input);
}

#[test]
fn test_skip_operations() {
    let input: Vec<i32> = (1..=5).collect();

    let mut skip_first = FilterChain::new();
    skip_first.add_skip_first(2).unwrap();
    assert_eq!(apply_i32(&skip_first, &input), vec![3, 4, 5]);

    let mut skip_last = FilterChain::new();
    skip_last.add_skip_last(2).unwrap();
    assert_eq!(apply_i32(&skip_last, &input), vec![1, 2, 3]);

    let mut skip_all = FilterChain::new();
    skip_all.add_skip_first(99).unwrap();
    assert!(apply_i32(&skip_all, &input).is_empty());
}

#[test]
fn test_init_and_rest() {
    let input = vec![1, 2, 3];

    let mut init = FilterChain::new();
    init.add_init().unwrap();
    assert_eq!(apply_i32(&init, &input), vec![1, 2]);

    let mut rest = FilterChain::new();
    rest.add_rest().unwrap();
    assert_eq!(apply_i32(&rest, &input), vec![2, 3]);

    // No-ops on empty input
    let empty: Vec<i32> = vec![];
    assert_eq!(apply_i32(&init, &empty), empty);
    assert_eq!(apply_i32(&rest, &empty), empty);
}

#[test]
fn test_range_selects_half_open_interval() {
    let input: Vec<i32> = (1..=8).collect();
    let mut chain = FilterChain::new();
    chain.add_range(2, 5).unwrap();
    assert_eq!(apply_i32(&chain, &input), vec![3, 4, 5]);
}

#[test]
fn test_range_clamps_and_empties() {
    let input: Vec<i32> = (1..=4).collect();

    let mut past_end = FilterChain::new();
    past_end.add_range(2, 99).unwrap();
    assert_eq!(apply_i32(&past_end, &input), vec![3, 4]);

    let mut inverted = FilterChain::new();
    inverted.add_range(3, 3).unwrap();
    assert!(apply_i32(&inverted, &input).is_empty());

    let mut backwards = FilterChain::new();
    backwards.add_range(5, 2).unwrap();
    assert!(apply_i32(&backwards, &input).is_empty());
}

#[test]
fn test_slice_strides_within_interval() {
    let input: Vec<i32> = (0..10).collect();
    let mut chain = FilterChain::new();
    chain.add_slice(1, 8, 3).unwrap();
    assert_eq!(apply_i32(&chain, &input), vec![1, 4, 7]);

    let mut unit_step = FilterChain::new();
    unit_step.add_slice(2, 5, 0).unwrap();
    assert_eq!(apply_i32(&unit_step, &input), vec![2, 3, 4]);
}

#[test]
fn test_where_and_where_not() {
    let input: Vec<i32> = (1..=6).collect();

    let mut evens = FilterChain::new();
    evens.add_where(predicate_of::<i32, _>(is_even)).unwrap();
    assert_eq!(apply_i32(&evens, &input), vec![2, 4, 6]);

    let mut odds = FilterChain::new();
    odds.add_where_not(predicate_of::<i32, _>(is_even)).unwrap();
    assert_eq!(apply_i32(&odds, &input), vec![1, 3, 5]);
}

#[test]
fn test_at_selects_single_element() {
    let input = vec![10, 20, 30];
    let mut chain = FilterChain::new();
    chain.add_at(1).unwrap();
    assert_eq!(apply_i32(&chain, &input), vec![20]);

    let mut out_of_range = FilterChain::new();
    out_of_range.add_at(7).unwrap();
    assert!(apply_i32(&out_of_range, &input).is_empty());
}

#[test]
fn test_at_indices_listed_order_and_duplicates() {
    let input = vec![10, 20, 30, 40];
    let mut chain = FilterChain::new();
    chain.add_at_indices(&[3, 0, 0, 2]).unwrap();
    assert_eq!(apply_i32(&chain, &input), vec![40, 10, 10, 30]);
}

#[test]
fn test_at_indices_drops_out_of_range_silently() {
    let input = vec![10, 20, 30];
    let mut chain = FilterChain::new();
    chain.add_at_indices(&[1, 99, 0]).unwrap();
    assert_eq!(apply_i32(&chain, &input), vec![20, 10]);
}

#[test]
fn test_distinct_keeps_first_occurrences() {
    let input = vec![1, 2, 2, 3, 3, 3, 4];
    let mut chain = FilterChain::new();
    chain.add_distinct(natural_order::<i32>()).unwrap();
    assert_eq!(apply_i32(&chain, &input), vec![1, 2, 3, 4]);
}

#[test]
fn test_reverse_and_double_reverse() {
    let input = vec![1, 2, 3, 4];

    let mut once = FilterChain::new();
    once.add_reverse().unwrap();
    assert_eq!(apply_i32(&once, &input), vec![4, 3, 2, 1]);

    let mut twice = FilterChain::new();
    twice.add_reverse().unwrap();
    twice.add_reverse().unwrap();
    assert_eq!(apply_i32(&twice, &input), input);
}

#[test]
fn test_pipeline_skip_where_take() {
    let input: Vec<i32> = (1..=6).collect();
    let mut chain = FilterChain::new();
    chain.add_skip_first(1).unwrap();
    chain.add_where(predicate_of::<i32, _>(is_even)).unwrap();
    chain.add_take_first(2).unwrap();
    assert_eq!(apply_i32(&chain, &input), vec![2, 4]);
}

#[test]
fn test_pipeline_take_then_reverse() {
    let input: Vec<i32> = (1..=8).collect();
    let mut chain = FilterChain::new();
    chain.add_take_first(4).unwrap();
    chain.add_reverse().unwrap();
    assert_eq!(apply_i32(&chain, &input), vec![4, 3, 2, 1]);
}

#[test]
fn test_chain_capacity_bound() {
    let mut chain = FilterChain::new();
    for _ in 0..MAX_CHAIN_LENGTH {
        chain.push(FilterOp::reverse()).unwrap();
    }
    assert_eq!(chain.len(), MAX_CHAIN_LENGTH);

    let overflow = chain.push(FilterOp::reverse());
    assert!(matches!(overflow, Err(FilterError::CapacityExceeded(_))));
    assert_eq!(chain.len(), MAX_CHAIN_LENGTH);

    // A full chain still executes; 32 reversals cancel out
    let input = vec![1, 2, 3];
    assert_eq!(apply_i32(&chain, &input), input);
}

#[test]
fn test_apply_rejects_partial_buffers() {
    use seqfilter_core::ElementLayout;

    let layout = ElementLayout::new(4, 1).unwrap();
    let bytes = [0u8; 6];
    assert!(ErasedSlice::new(&bytes, layout).is_err());
}
