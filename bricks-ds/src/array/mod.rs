//! A resizable array of heterogeneous values.
//!
//! The array either allows duplicates or silently drops any value that is
//! already stored. Storage grows in bursts: when an insertion doesn't fit,
//! capacity becomes twice the size needed after the insertion.
//!
//! | Operation | No duplicates | Duplicates |
//! |-----------|---------------|------------|
//! | Search    | N/2           | N          |
//! | Insertion | N             | 1          |

mod array_core;
mod capacity;
mod duplicates;
mod print;

pub use array_core::{Array, DuplicatePolicy};
pub use capacity::{grow, Growth};
pub use duplicates::is_duplicate;
pub use print::{PrintWindow, DEFAULT_HEAD, DEFAULT_TAIL};
