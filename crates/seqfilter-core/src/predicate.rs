//! Boolean combinators over row predicates.

use crate::capability::RowPredicate;

/// Predicate that holds when every member predicate holds (short-circuit).
///
/// An empty list yields the always-true predicate.
pub fn all_of(preds: Vec<RowPredicate>) -> RowPredicate {
    Box::new(move |row| preds.iter().all(|p| p(row)))
}

/// Predicate that holds when any member predicate holds (short-circuit).
///
/// An empty list yields the always-false predicate.
pub fn any_of(preds: Vec<RowPredicate>) -> RowPredicate {
    Box::new(move |row| preds.iter().any(|p| p(row)))
}

/// Predicate that holds when exactly one of the two predicates holds.
pub fn xor(a: RowPredicate, b: RowPredicate) -> RowPredicate {
    Box::new(move |row| a(row) != b(row))
}

/// Negation of a predicate.
pub fn not(p: RowPredicate) -> RowPredicate {
    Box::new(move |row| !p(row))
}
