/// Every way a list operation can fail.
///
/// Errors are always returned as values; nothing in the crate panics on
/// these conditions except the `Index`/`IndexMut` operators, which are
/// documented to do so.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// Read, write or removal attempted on a list with no elements.
    Empty,
    /// `index` was outside the valid range for the operation.
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    /// The allocator could not provide a buffer of `new_capacity` slots.
    AllocFailed {
        new_capacity: usize,
    },
    /// The element type has size zero; the list refuses to allocate for it.
    ZeroSizedElement,
}

impl core::fmt::Display for ListError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => {
                write!(f, "list is empty")
            },
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} was out of bounds of len {}", index, len)
            },
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::ZeroSizedElement => {
                write!(f, "size of element type is zero")
            },
        }
    }
}

impl core::error::Error for ListError {}
