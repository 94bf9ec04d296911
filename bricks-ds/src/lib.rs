//! Elementary data structures.
//!
//! The main structure is [`Array`], a resizable container of heterogeneous
//! [`Value`]s that can optionally refuse duplicates. [`LinkedList`] is a
//! much simpler chain of floats.
pub mod array;
pub mod error;
pub mod list;
pub mod value;

pub use array::{Array, DuplicatePolicy, PrintWindow};
pub use error::{Error, Result};
pub use list::{LinkedList, Node};
pub use value::{ElementKind, FloatType, IntegerType, Scalar, Sequence, UnsignedType, Value};
