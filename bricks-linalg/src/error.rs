use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Vectors dimension mismatch: first dimension: {first}, second dimension: {second}")]
    VectorDimension { first: usize, second: usize },
    #[error("Matrices dimension mismatch: first dimension: {first}, second dimension: {second}")]
    MatrixDimension { first: usize, second: usize },
    #[error("matrix of {rows}x{cols} cannot hold {len} values")]
    MatrixShape { rows: usize, cols: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
