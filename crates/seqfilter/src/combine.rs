//! Set-style combinators over independently executed chains.
//!
//! Combinators borrow their member chains; they never own or drop them.
//! Because result rows are untyped bytes, the caller supplies the equality
//! notion when invoking a combinator.

use seqfilter_core::{ErasedSlice, ErasedVec, FilterError, Result};
use tracing::debug;

use crate::chain::FilterChain;

fn contains(haystack: &ErasedVec, row: &[u8], eq: &impl Fn(&[u8], &[u8]) -> bool) -> bool {
    haystack.as_erased().rows().any(|kept| eq(kept, row))
}

/// Union over the results of a bounded collection of chains.
///
/// Every member chain is executed against the same input; the union of the
/// per-chain result sets is returned in first-seen order, deduplicated by
/// the caller-supplied equality.
#[derive(Debug)]
pub struct ChainUnion<'a> {
    members: Vec<&'a FilterChain>,
    capacity: usize,
}

impl<'a> ChainUnion<'a> {
    /// Creates a union with room for `capacity` member chains.
    ///
    /// Capacity 0 is legal; such a union holds nothing and yields an empty
    /// result.
    pub fn new(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds a member chain by reference.
    ///
    /// Fails once the union is at capacity; existing members are unchanged.
    pub fn add(&mut self, chain: &'a FilterChain) -> Result<()> {
        if self.members.len() >= self.capacity {
            return Err(FilterError::CapacityExceeded(format!(
                "union already holds {} chains",
                self.capacity
            )));
        }
        self.members.push(chain);
        Ok(())
    }

    /// Number of member chains.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no chains have been added.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Executes every member against `input` and unions the results.
    pub fn apply(
        &self,
        input: ErasedSlice<'_>,
        eq: impl Fn(&[u8], &[u8]) -> bool,
    ) -> Result<ErasedVec> {
        let mut out = ErasedVec::new(input.layout());
        for chain in &self.members {
            let result = chain.apply(input)?;
            for row in result.as_erased().rows() {
                if !contains(&out, row, &eq) {
                    out.push_row(row)?;
                }
            }
        }
        debug!(
            members = self.members.len(),
            output = out.len(),
            "union applied"
        );
        Ok(out)
    }
}

/// Intersection over the results of a bounded collection of chains.
///
/// Identical shape and capacity contract to [`ChainUnion`]; at apply time
/// only elements present in every member's result are kept, in the first
/// member's order, deduplicated.
#[derive(Debug)]
pub struct ChainIntersection<'a> {
    members: Vec<&'a FilterChain>,
    capacity: usize,
}

impl<'a> ChainIntersection<'a> {
    /// Creates an intersection with room for `capacity` member chains.
    pub fn new(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds a member chain by reference.
    ///
    /// Fails once the intersection is at capacity; existing members are
    /// unchanged.
    pub fn add(&mut self, chain: &'a FilterChain) -> Result<()> {
        if self.members.len() >= self.capacity {
            return Err(FilterError::CapacityExceeded(format!(
                "intersection already holds {} chains",
                self.capacity
            )));
        }
        self.members.push(chain);
        Ok(())
    }

    /// Number of member chains.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no chains have been added.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Executes every member against `input` and intersects the results.
    ///
    /// An intersection with zero members yields an empty result.
    pub fn apply(
        &self,
        input: ErasedSlice<'_>,
        eq: impl Fn(&[u8], &[u8]) -> bool,
    ) -> Result<ErasedVec> {
        let mut out = ErasedVec::new(input.layout());
        let Some((first, rest)) = self.members.split_first() else {
            return Ok(out);
        };

        let base = first.apply(input)?;
        let others = rest
            .iter()
            .map(|chain| chain.apply(input))
            .collect::<Result<Vec<_>>>()?;

        for row in base.as_erased().rows() {
            let everywhere = others.iter().all(|result| contains(result, row, &eq));
            if everywhere && !contains(&out, row, &eq) {
                out.push_row(row)?;
            }
        }
        debug!(
            members = self.members.len(),
            output = out.len(),
            "intersection applied"
        );
        Ok(out)
    }
}

/// Difference between an include chain's result and an exclude chain's
/// result.
///
/// Arity is fixed at two, so there is no capacity limit. Either side may be
/// absent: an absent include passes the input through unfiltered, an absent
/// exclude excludes nothing.
#[derive(Debug)]
pub struct ChainDifference<'a> {
    include: Option<&'a FilterChain>,
    exclude: Option<&'a FilterChain>,
}

impl<'a> ChainDifference<'a> {
    /// Creates a difference over the two chain references.
    pub fn new(include: Option<&'a FilterChain>, exclude: Option<&'a FilterChain>) -> Self {
        Self { include, exclude }
    }

    /// Executes both sides against `input` and keeps include-result
    /// elements absent from the exclude result.
    pub fn apply(
        &self,
        input: ErasedSlice<'_>,
        eq: impl Fn(&[u8], &[u8]) -> bool,
    ) -> Result<ErasedVec> {
        let included = match self.include {
            Some(chain) => chain.apply(input)?,
            None => ErasedVec::from_erased(input),
        };
        let excluded = match self.exclude {
            Some(chain) => chain.apply(input)?,
            None => ErasedVec::new(input.layout()),
        };

        let mut out = ErasedVec::new(input.layout());
        for row in included.as_erased().rows() {
            if !contains(&excluded, row, &eq) {
                out.push_row(row)?;
            }
        }
        debug!(output = out.len(), "difference applied");
        Ok(out)
    }
}
