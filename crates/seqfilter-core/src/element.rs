//! Type-erased element storage.
//!
//! Every entry point of the library takes element data as an opaque byte
//! region, an element count implied by the byte length, and a uniform
//! element layout. The caller guarantees elements are laid out contiguously
//! and are copyable as raw bytes; the library never runs constructors or
//! destructors over them.
//!
//! The typed bridge (`ErasedSlice::of`, `ErasedVec::into_vec`) is built on
//! `zerocopy`, so no hand-written pointer casts are needed anywhere.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::error::{FilterError, Result};

/// Marker trait for element types usable through the typed bridge.
///
/// Blanket-implemented for every `Copy` type that zerocopy can view as bytes
/// and reconstruct from bytes.
pub trait Element: IntoBytes + FromBytes + Immutable + KnownLayout + Copy {}

impl<T> Element for T where T: IntoBytes + FromBytes + Immutable + KnownLayout + Copy {}

/// Size and alignment descriptor for one element of a homogeneous array.
///
/// # Example
///
/// ```
/// use seqfilter_core::ElementLayout;
///
/// let layout = ElementLayout::of::<u32>();
/// assert_eq!(layout.size(), 4);
///
/// // Erased callers describe their element explicitly.
/// let packed = ElementLayout::new(12, 4).unwrap();
/// assert_eq!(packed.size(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementLayout {
    size: usize,
    align: usize,
}

impl ElementLayout {
    /// Creates a layout from an explicit size and alignment.
    ///
    /// Fails on a zero-sized element, a non-power-of-two alignment, or a
    /// size that is not a multiple of the alignment.
    pub fn new(size: usize, align: usize) -> Result<Self> {
        if size == 0 {
            return Err(FilterError::InvalidArgument(
                "element size must be nonzero".into(),
            ));
        }
        if !align.is_power_of_two() {
            return Err(FilterError::InvalidArgument(format!(
                "alignment {align} is not a power of two"
            )));
        }
        if size % align != 0 {
            return Err(FilterError::InvalidArgument(format!(
                "size {size} is not a multiple of alignment {align}"
            )));
        }
        Ok(Self { size, align })
    }

    /// Derives the layout of a Rust element type.
    ///
    /// # Panics
    ///
    /// Panics on zero-sized types; an array of empty elements has no
    /// addressable rows.
    pub fn of<T: Element>() -> Self {
        assert!(
            std::mem::size_of::<T>() != 0,
            "zero-sized types have no element layout"
        );
        Self {
            size: std::mem::size_of::<T>(),
            align: std::mem::align_of::<T>(),
        }
    }

    /// Element size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Element alignment in bytes.
    pub fn align(&self) -> usize {
        self.align
    }
}

/// Borrowed view of a homogeneous element array as raw bytes.
#[derive(Debug, Clone, Copy)]
pub struct ErasedSlice<'a> {
    bytes: &'a [u8],
    layout: ElementLayout,
}

impl<'a> ErasedSlice<'a> {
    /// Wraps a raw byte region as an element array.
    ///
    /// Fails if the byte length is not a whole number of elements.
    pub fn new(bytes: &'a [u8], layout: ElementLayout) -> Result<Self> {
        if bytes.len() % layout.size() != 0 {
            return Err(FilterError::InvalidArgument(format!(
                "buffer of {} bytes is not a whole number of {}-byte elements",
                bytes.len(),
                layout.size()
            )));
        }
        Ok(Self { bytes, layout })
    }

    /// Views a typed slice as an erased element array.
    pub fn of<T: Element>(items: &'a [T]) -> Self {
        Self {
            bytes: items.as_bytes(),
            layout: ElementLayout::of::<T>(),
        }
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.layout.size()
    }

    /// Returns true if the view holds no elements.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The element layout this view was constructed with.
    pub fn layout(&self) -> ElementLayout {
        self.layout
    }

    /// The underlying byte region.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Borrows the element at `idx`, or `None` past the end.
    pub fn row(&self, idx: usize) -> Option<&'a [u8]> {
        let size = self.layout.size();
        let start = idx.checked_mul(size)?;
        let end = start.checked_add(size)?;
        self.bytes.get(start..end)
    }

    /// Iterates over the elements in order.
    pub fn rows(&self) -> std::slice::ChunksExact<'a, u8> {
        self.bytes.chunks_exact(self.layout.size())
    }
}

/// Owned, growable buffer of erased elements.
///
/// Produced by chain execution and the set combinators. Ownership of the
/// underlying storage follows normal move semantics; dropping the value
/// releases the buffer exactly once.
#[derive(Debug, Clone)]
pub struct ErasedVec {
    bytes: Vec<u8>,
    layout: ElementLayout,
}

impl ErasedVec {
    /// Creates an empty buffer for elements of the given layout.
    pub fn new(layout: ElementLayout) -> Self {
        Self {
            bytes: Vec::new(),
            layout,
        }
    }

    /// Creates an empty buffer with room for `count` elements.
    pub fn with_capacity(layout: ElementLayout, count: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(layout.size().saturating_mul(count)),
            layout,
        }
    }

    /// Copies every element of a view into a fresh owned buffer.
    pub fn from_erased(view: ErasedSlice<'_>) -> Self {
        Self {
            bytes: view.bytes().to_vec(),
            layout: view.layout(),
        }
    }

    /// Copies a typed slice into a fresh owned buffer.
    pub fn from_typed<T: Element>(items: &[T]) -> Self {
        Self::from_erased(ErasedSlice::of(items))
    }

    /// Appends one element, given as exactly one row of bytes.
    pub fn push_row(&mut self, row: &[u8]) -> Result<()> {
        if row.len() != self.layout.size() {
            return Err(FilterError::LayoutMismatch {
                expected: self.layout.size(),
                actual: row.len(),
            });
        }
        self.bytes.extend_from_slice(row);
        Ok(())
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.layout.size()
    }

    /// Returns true if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The element layout this buffer was constructed with.
    pub fn layout(&self) -> ElementLayout {
        self.layout
    }

    /// Borrows the element at `idx`, or `None` past the end.
    pub fn row(&self, idx: usize) -> Option<&[u8]> {
        self.as_erased().row(idx)
    }

    /// Borrows the whole buffer as an erased view.
    pub fn as_erased(&self) -> ErasedSlice<'_> {
        ErasedSlice {
            bytes: &self.bytes,
            layout: self.layout,
        }
    }

    /// Converts the buffer back into a typed vector.
    ///
    /// Fails if `T` does not match the element size the buffer was built
    /// with. Elements are copied out row by row, so the buffer's internal
    /// alignment never matters.
    pub fn into_vec<T: Element>(self) -> Result<Vec<T>> {
        if std::mem::size_of::<T>() != self.layout.size() {
            return Err(FilterError::LayoutMismatch {
                expected: self.layout.size(),
                actual: std::mem::size_of::<T>(),
            });
        }
        self.bytes
            .chunks_exact(self.layout.size())
            .map(|row| {
                T::read_from_bytes(row)
                    .map_err(|_| FilterError::Internal("row length diverged from layout".into()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_validation() {
        assert!(ElementLayout::new(0, 1).is_err());
        assert!(ElementLayout::new(4, 3).is_err());
        assert!(ElementLayout::new(2, 4).is_err());
        assert!(ElementLayout::new(8, 4).is_ok());
    }

    #[test]
    fn test_layout_of_type() {
        let layout = ElementLayout::of::<i64>();
        assert_eq!(layout.size(), 8);
        assert_eq!(layout.align(), 8);
    }

    #[test]
    fn test_erased_slice_rejects_partial_elements() {
        let layout = ElementLayout::new(4, 1).unwrap();
        let bytes = [0u8; 10];
        assert!(ErasedSlice::new(&bytes, layout).is_err());
        assert!(ErasedSlice::new(&bytes[..8], layout).is_ok());
    }

    #[test]
    fn test_typed_round_trip() {
        let items: Vec<i32> = vec![3, 1, 4, 1, 5];
        let view = ErasedSlice::of(&items);
        assert_eq!(view.len(), 5);

        let owned = ErasedVec::from_erased(view);
        assert_eq!(owned.into_vec::<i32>().unwrap(), items);
    }

    #[test]
    fn test_row_access() {
        let items: Vec<u16> = vec![10, 20, 30];
        let view = ErasedSlice::of(&items);
        assert_eq!(view.row(1), Some(&20u16.to_ne_bytes()[..]));
        assert_eq!(view.row(3), None);
    }

    #[test]
    fn test_push_row_checks_length() {
        let mut buf = ErasedVec::new(ElementLayout::of::<u32>());
        assert!(buf.push_row(&[1, 2, 3]).is_err());
        assert!(buf.push_row(&7u32.to_ne_bytes()).is_ok());
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn test_into_vec_checks_layout() {
        let buf = ErasedVec::from_typed(&[1u32, 2, 3]);
        assert!(buf.clone().into_vec::<u64>().is_err());
        assert_eq!(buf.into_vec::<u32>().unwrap(), vec![1, 2, 3]);
    }
}
