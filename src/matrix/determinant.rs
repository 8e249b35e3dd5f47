use crate::matrix::element::Element;
use crate::matrix::error::MatrixError;
use crate::matrix::matrix::Matrix;

// Cofactor expansion costs O(n!), warn past this size
const COFACTOR_WARN_SIZE: usize = 10;

impl<T: Element> Matrix<T> {
    /// Submatrix without row `row` and column `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix<T>, MatrixError> {
        if self.rows < 2 || self.cols < 2 {
            return Err(MatrixError::InvalidDimension {
                rows: self.rows - 1,
                cols: self.cols - 1,
            });
        }
        self.get(row, col)?;

        Ok(Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: (0..self.rows)
                .filter(|&r| r != row)
                .flat_map(|r| {
                    (0..self.cols)
                        .filter(move |&c| c != col)
                        .map(move |c| self.at(r, c))
                })
                .collect(),
        })
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// The running sum is kept in `T`, so floating point matrices are not
    /// truncated. Runs in O(n!) and is only meant for small matrices.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        log::debug!("determinant of a {}x{} matrix", self.rows, self.cols);
        if self.rows > COFACTOR_WARN_SIZE {
            log::warn!(
                "cofactor expansion on a {}x{} matrix, this will be slow",
                self.rows,
                self.cols
            );
        }

        self.cofactor_expansion()
    }

    fn cofactor_expansion(&self) -> Result<T, MatrixError> {
        match self.rows {
            1 => Ok(self.at(0, 0)),
            2 => Ok(self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0)),
            n => {
                log::trace!("expanding {}x{} along the first row", n, n);

                let mut det = T::zero();
                for x in 0..n {
                    let term = self.at(0, x) * self.minor(0, x)?.cofactor_expansion()?;
                    det = if x % 2 == 0 { det + term } else { det - term };
                }
                Ok(det)
            }
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
