//! Filter operations: one declarative step in a chain.
//!
//! Each operation kind carries exactly the parameters it needs, so reading
//! a field that does not belong to the kind is unrepresentable.

use std::fmt;

use seqfilter_core::{RowComparator, RowPredicate};

/// Parameter payload per operation kind.
pub enum OpKind {
    /// Keep the first `count` elements.
    TakeFirst { count: usize },
    /// Keep the last `count` elements.
    TakeLast { count: usize },
    /// Keep elements at positions `0, step, 2*step, ...`.
    TakeNth { step: usize },
    /// Keep the first element.
    Head,
    /// Keep the last element.
    Tail,
    /// Drop the first `count` elements.
    SkipFirst { count: usize },
    /// Drop the last `count` elements.
    SkipLast { count: usize },
    /// Drop the last element.
    Init,
    /// Drop the first element.
    Rest,
    /// Keep the half-open index interval `[start, end)`.
    Range { start: usize, end: usize },
    /// Like `Range`, keeping only every `step`-th position from `start`.
    Slice {
        start: usize,
        end: usize,
        step: usize,
    },
    /// Keep elements matching the predicate.
    Where { predicate: RowPredicate },
    /// Keep elements rejected by the predicate.
    WhereNot { predicate: RowPredicate },
    /// Keep the single element at `index`.
    At { index: usize },
    /// Keep the elements at the listed indices, in listed order.
    AtIndices { indices: Vec<usize> },
    /// Keep the first occurrence of each distinct value.
    Distinct { comparator: RowComparator },
    /// Reverse the element order.
    Reverse,
}

impl OpKind {
    /// Display name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            OpKind::TakeFirst { .. } => "take_first",
            OpKind::TakeLast { .. } => "take_last",
            OpKind::TakeNth { .. } => "take_nth",
            OpKind::Head => "head",
            OpKind::Tail => "tail",
            OpKind::SkipFirst { .. } => "skip_first",
            OpKind::SkipLast { .. } => "skip_last",
            OpKind::Init => "init",
            OpKind::Rest => "rest",
            OpKind::Range { .. } => "range",
            OpKind::Slice { .. } => "slice",
            OpKind::Where { .. } => "where",
            OpKind::WhereNot { .. } => "where_not",
            OpKind::At { .. } => "at",
            OpKind::AtIndices { .. } => "at_indices",
            OpKind::Distinct { .. } => "distinct",
            OpKind::Reverse => "reverse",
        }
    }
}

impl fmt::Debug for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::TakeFirst { count } | OpKind::TakeLast { count } => {
                write!(f, "{}({count})", self.name())
            }
            OpKind::TakeNth { step } => write!(f, "take_nth({step})"),
            OpKind::SkipFirst { count } | OpKind::SkipLast { count } => {
                write!(f, "{}({count})", self.name())
            }
            OpKind::Range { start, end } => write!(f, "range({start}, {end})"),
            OpKind::Slice { start, end, step } => write!(f, "slice({start}, {end}, {step})"),
            OpKind::At { index } => write!(f, "at({index})"),
            OpKind::AtIndices { indices } => write!(f, "at_indices({indices:?})"),
            _ => f.write_str(self.name()),
        }
    }
}

/// A single declarative step in a filter chain.
///
/// Constructed through the typed factories below; owned by at most one
/// chain once appended. The optional label is diagnostic only.
#[derive(Debug)]
pub struct FilterOp {
    kind: OpKind,
    label: Option<String>,
}

impl FilterOp {
    fn of(kind: OpKind) -> Self {
        Self { kind, label: None }
    }

    /// Attaches a diagnostic label, shown in trace output.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The operation's parameter payload.
    pub fn kind(&self) -> &OpKind {
        &self.kind
    }

    /// The diagnostic label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Display name: the label when present, the kind name otherwise.
    pub fn name(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.kind.name())
    }

    /// Keep the first `count` elements. Zero is a legal "select nothing".
    pub fn take_first(count: usize) -> Self {
        Self::of(OpKind::TakeFirst { count })
    }

    /// Keep the last `count` elements.
    pub fn take_last(count: usize) -> Self {
        Self::of(OpKind::TakeLast { count })
    }

    /// Keep every `step`-th element starting at position 0.
    ///
    /// A zero step is normalized to 1 rather than looping in place.
    pub fn take_nth(step: usize) -> Self {
        Self::of(OpKind::TakeNth {
            step: step.max(1),
        })
    }

    /// Keep the first element. Distinct kind from `take_first(1)` so
    /// callers branching on kind can tell them apart.
    pub fn head() -> Self {
        Self::of(OpKind::Head)
    }

    /// Keep the last element.
    pub fn tail() -> Self {
        Self::of(OpKind::Tail)
    }

    /// Drop the first `count` elements.
    pub fn skip_first(count: usize) -> Self {
        Self::of(OpKind::SkipFirst { count })
    }

    /// Drop the last `count` elements.
    pub fn skip_last(count: usize) -> Self {
        Self::of(OpKind::SkipLast { count })
    }

    /// Drop the last element; no-op on empty input.
    pub fn init() -> Self {
        Self::of(OpKind::Init)
    }

    /// Drop the first element; no-op on empty input.
    pub fn rest() -> Self {
        Self::of(OpKind::Rest)
    }

    /// Keep the half-open interval `[start, end)`, clamped to the input
    /// length at execution time. `start >= end` selects nothing.
    pub fn range(start: usize, end: usize) -> Self {
        Self::of(OpKind::Range { start, end })
    }

    /// Like [`FilterOp::range`] with a stride; a zero step is normalized
    /// to 1.
    pub fn slice(start: usize, end: usize, step: usize) -> Self {
        Self::of(OpKind::Slice {
            start,
            end,
            step: step.max(1),
        })
    }

    /// Keep elements for which the predicate holds.
    pub fn where_(predicate: RowPredicate) -> Self {
        Self::of(OpKind::Where { predicate })
    }

    /// Keep elements for which the predicate does not hold.
    pub fn where_not(predicate: RowPredicate) -> Self {
        Self::of(OpKind::WhereNot { predicate })
    }

    /// Keep the single element at `index`; no index list is allocated.
    pub fn at(index: usize) -> Self {
        Self::of(OpKind::At { index })
    }

    /// Keep the elements at the given indices, in listed order.
    ///
    /// The index list is copied into the operation; later mutation of the
    /// caller's buffer has no effect. An empty list selects nothing.
    pub fn at_indices(indices: &[usize]) -> Self {
        Self::of(OpKind::AtIndices {
            indices: indices.to_vec(),
        })
    }

    /// Keep the first occurrence of each distinct value, where two values
    /// are duplicates when the comparator returns `Ordering::Equal`.
    pub fn distinct(comparator: RowComparator) -> Self {
        Self::of(OpKind::Distinct { comparator })
    }

    /// Reverse the element order.
    pub fn reverse() -> Self {
        Self::of(OpKind::Reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqfilter_core::predicate_of;

    #[test]
    fn test_zero_step_normalized() {
        assert!(matches!(
            FilterOp::take_nth(0).kind(),
            OpKind::TakeNth { step: 1 }
        ));
        assert!(matches!(
            FilterOp::slice(0, 10, 0).kind(),
            OpKind::Slice { step: 1, .. }
        ));
    }

    #[test]
    fn test_range_stored_verbatim() {
        // start >= end is an empty selection at execution time, not an error
        assert!(matches!(
            FilterOp::range(5, 2).kind(),
            OpKind::Range { start: 5, end: 2 }
        ));
    }

    #[test]
    fn test_head_is_not_take_first() {
        assert!(matches!(FilterOp::head().kind(), OpKind::Head));
        assert!(matches!(FilterOp::tail().kind(), OpKind::Tail));
    }

    #[test]
    fn test_at_indices_copies() {
        let mut caller = vec![3, 1, 4];
        let op = FilterOp::at_indices(&caller);
        caller[0] = 99;
        match op.kind() {
            OpKind::AtIndices { indices } => assert_eq!(indices, &vec![3, 1, 4]),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_at_indices_empty_is_legal() {
        match FilterOp::at_indices(&[]).kind() {
            OpKind::AtIndices { indices } => assert!(indices.is_empty()),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_label_and_name() {
        let op = FilterOp::where_(predicate_of::<i32, _>(|v| *v > 0)).with_label("positives");
        assert_eq!(op.label(), Some("positives"));
        assert_eq!(op.name(), "positives");
        assert_eq!(FilterOp::reverse().name(), "reverse");
    }
}
