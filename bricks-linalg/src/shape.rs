use crate::error;

/// Anything with a number of rows and columns.
///
/// Plain slices are column vectors.
pub trait Shape {
    fn dims(&self) -> (usize, usize);
}

impl Shape for [f64] {
    fn dims(&self) -> (usize, usize) {
        (self.len(), 1)
    }
}

impl Shape for Vec<f64> {
    fn dims(&self) -> (usize, usize) {
        (self.len(), 1)
    }
}

impl<const N: usize> Shape for [f64; N] {
    fn dims(&self) -> (usize, usize) {
        (N, 1)
    }
}

/// A dense row-major matrix.
///
/// This only exists so shapes can be checked; there is no arithmetic on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> error::Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(error::Error::MatrixShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col).copied()
        } else {
            None
        }
    }
}

impl Shape for Matrix {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Check that `a` and `b` can be combined.
///
/// Two column vectors need the same number of rows. Anything else needs as
/// many columns in `a` as there are rows in `b`.
pub fn check_dim<A, B>(a: &A, b: &B) -> error::Result<()>
where
    A: Shape + ?Sized,
    B: Shape + ?Sized,
{
    let (a_rows, a_cols) = a.dims();
    let (b_rows, b_cols) = b.dims();
    if a_cols == 1 && b_cols == 1 {
        if a_rows != b_rows {
            return Err(error::Error::VectorDimension {
                first: a_rows,
                second: b_rows,
            });
        }
    } else if a_cols != b_rows {
        return Err(error::Error::MatrixDimension {
            first: a_cols,
            second: b_rows,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dim_vec() {
        let vec = vec![0.0, 1.0, 2.0];
        let vec_ok = [0.0, 1.0, 2.0];
        let vec_fail = [0.0, 1.0];
        assert!(check_dim(&vec, &vec_ok).is_ok());
        assert_eq!(
            check_dim(&vec, &vec_fail),
            Err(error::Error::VectorDimension {
                first: 3,
                second: 2
            })
        );
    }

    #[test]
    fn test_check_dim_mat() {
        let matx = Matrix::new(2, 2, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let mat_ok = Matrix::new(2, 1, vec![0.0, 1.0]).unwrap();
        let mat_fail = Matrix::new(3, 1, vec![0.0, 1.0, 2.0]).unwrap();
        assert!(check_dim(&matx, &mat_ok).is_ok());
        assert_eq!(
            check_dim(&matx, &mat_fail),
            Err(error::Error::MatrixDimension {
                first: 2,
                second: 3
            })
        );
    }

    #[test]
    fn test_matrix_shape() {
        assert_eq!(
            Matrix::new(2, 3, vec![1.0; 5]),
            Err(error::Error::MatrixShape {
                rows: 2,
                cols: 3,
                len: 5
            })
        );
    }

    #[test]
    fn test_matrix_shape_overflow() {
        assert_eq!(
            Matrix::new(usize::MAX, 2, vec![]),
            Err(error::Error::MatrixShape {
                rows: usize::MAX,
                cols: 2,
                len: 0
            })
        );
    }

    #[test]
    fn test_matrix_get() {
        let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.get(1, 0), Some(4.0));
        assert_eq!(m.get(0, 2), Some(3.0));
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.dims(), (2, 3));
    }

    #[test]
    fn test_error_message() {
        let err = check_dim(&[1.0][..], &[1.0, 2.0][..]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Vectors dimension mismatch: first dimension: 1, second dimension: 2"
        );
    }
}
