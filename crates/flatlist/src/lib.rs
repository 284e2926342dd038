//! Growable contiguous list with fallible allocation and shift-based
//! insertion/removal at arbitrary positions.

mod array_list;
mod error;
mod growth;

pub use array_list::ArrayList;
pub use error::ListError;
pub use growth::INITIAL_CAPACITY;
