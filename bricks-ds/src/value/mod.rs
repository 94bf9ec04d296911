//! Values stored in an [`Array`](crate::Array).
//!
//! A value is either a single [`Scalar`] or a [`Sequence`] of scalars that
//! all share one [`ElementKind`]. Scalars remember the exact Rust type they
//! were created from; sequences can be normalized so that only the coarse
//! kind remains.

mod scalar;
mod sequence;
mod types;
mod value_core;

pub use scalar::Scalar;
pub use sequence::{Sequence, SequenceElement};
pub use types::{ElementKind, FloatType, IntegerType, UnsignedType};
pub use value_core::Value;
