//! Numerical measures of how far apart two vectors are.
//!
//! See <https://en.wikipedia.org/wiki/Distance>.
mod distance;
pub mod error;
mod shape;

pub use distance::{canberra, chebyshev, euclidean, l1, Metric};
pub use error::{Error, Result};
pub use shape::{check_dim, Matrix, Shape};
