use thiserror::Error;

use crate::value::ElementKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `Array::add` was called without any values.
    ///
    /// This is a usage error by the caller; the array is left untouched.
    #[error("empty values container for insert")]
    EmptyInsertion,
    /// A sequence was built from scalars of more than one kind.
    #[error("sequence of {expected} elements contains a {found} element at index {index}")]
    MixedSequence {
        expected: ElementKind,
        found: ElementKind,
        index: usize,
    },
    /// Minimum or maximum requested from a list without nodes.
    #[error("linked list is empty")]
    EmptyList,
}

pub type Result<T> = std::result::Result<T, Error>;
