use crate::matrix::element::Element;
use crate::matrix::error::MatrixError;
use itertools::Itertools;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt;
use std::ops::{Index, IndexMut, Range};

/// Index types accepted by the checked accessors.
///
/// Signed indices are allowed so that a negative request is reported as
/// `IndexOutOfRange` instead of wrapping around.
pub trait MatrixIndex: Copy {
    fn to_usize(self) -> Option<usize>;
    fn to_i128(self) -> i128;
}

macro_rules! impl_matrix_index {
    ($($t:ty),*) => {
        $(
            impl MatrixIndex for $t {
                #[inline(always)]
                fn to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline(always)]
                fn to_i128(self) -> i128 {
                    i128::try_from(self).unwrap_or(i128::MAX)
                }
            }
        )*
    };
}

impl_matrix_index!(usize, u32, u64, isize, i32, i64);

/// Dense matrix, row-major in a single buffer.
///
/// Both dimensions are always positive and `cells.len() == rows * cols`.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
}

pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    Ok(())
}

impl<T: Element> Matrix<T> {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Matrix<T>, MatrixError> {
        check_dimensions(rows, cols)?;

        Ok(Matrix {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        })
    }

    pub fn identity(n: usize) -> Result<Matrix<T>, MatrixError> {
        check_dimensions(n, n)?;

        Ok(Matrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        })
    }

    /// Builds a matrix from nested rows, which must all have the same length.
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Matrix<T>, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        check_dimensions(rows, cols)?;

        if let Some((row, line)) = lines.iter().find_position(|l| l.len() != cols) {
            return Err(MatrixError::RaggedRow {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Ok(Matrix {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    pub fn get<I: MatrixIndex>(&self, row: I, col: I) -> Result<&T, MatrixError> {
        let offset = self.locate(row, col)?;
        Ok(&self.cells[offset])
    }

    pub fn get_mut<I: MatrixIndex>(&mut self, row: I, col: I) -> Result<&mut T, MatrixError> {
        let offset = self.locate(row, col)?;
        Ok(&mut self.cells[offset])
    }

    pub fn set_value<I: MatrixIndex>(&mut self, row: I, col: I, value: T) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }
}

impl<T: Element + SampleUniform> Matrix<T> {
    /// Matrix with every cell drawn uniformly from `range`.
    ///
    /// Panics if `range` is empty, as `rand` does.
    pub fn random(rows: usize, cols: usize, range: Range<T>) -> Result<Matrix<T>, MatrixError> {
        check_dimensions(rows, cols)?;

        let mut rng = rand::thread_rng();
        Ok(Matrix {
            rows,
            cols,
            cells: (0..rows * cols)
                .map(|_| rng.gen_range(range.clone()))
                .collect(),
        })
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cells of one row.
    ///
    /// Panics if `row >= rows`, like `Index`.
    pub fn row(&self, row: usize) -> &[T] {
        match self.locate(row, 0) {
            Ok(start) => &self.cells[start..start + self.cols],
            Err(error) => panic!("{}", error),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    // row is checked against rows only, col against cols only
    fn locate<I: MatrixIndex>(&self, row: I, col: I) -> Result<usize, MatrixError> {
        match (row.to_usize(), col.to_usize()) {
            (Some(r), Some(c)) if r < self.rows && c < self.cols => Ok(r * self.cols + c),
            _ => Err(MatrixError::IndexOutOfRange {
                row: row.to_i128(),
                col: col.to_i128(),
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.locate(row, col) {
            Ok(offset) => &self.cells[offset],
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.locate(row, col) {
            Ok(offset) => &mut self.cells[offset],
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `format` keeps the caller's width/precision for every cell
        let lines = self
            .cells
            .chunks(self.cols)
            .format_with("\n", |line, g| g(&line.iter().format(" ")));
        fmt::Display::fmt(&lines, f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled() {
        let m = Matrix::<i64>::new(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.to_list(), vec![vec![0, 0, 0], vec![0, 0, 0]]);

        let m = Matrix::<f64>::new(1, 1).unwrap();
        assert_eq!(m.as_slice(), &[0.0]);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Matrix::<i32>::new(0, 3).unwrap_err(),
            MatrixError::InvalidDimension { rows: 0, cols: 3 }
        );
        assert_eq!(
            Matrix::<i32>::new(3, 0).unwrap_err(),
            MatrixError::InvalidDimension { rows: 3, cols: 0 }
        );
        assert_eq!(
            Matrix::<i32>::identity(0).unwrap_err(),
            MatrixError::InvalidDimension { rows: 0, cols: 0 }
        );
        assert!(Matrix::<i32>::random(0, 2, 0..3).is_err());
    }

    #[test]
    fn test_identity() {
        let m = Matrix::<i32>::identity(3).unwrap();
        assert!(m.is_square());
        assert_eq!(
            m.to_list(),
            vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
        );
    }

    #[test]
    fn test_from_list() {
        let m = Matrix::from_list(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(1), &[4, 5, 6]);

        assert_eq!(
            Matrix::from_list(vec![vec![1, 2], vec![3]]).unwrap_err(),
            MatrixError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert!(Matrix::<i32>::from_list(vec![]).is_err());
        assert!(Matrix::<i32>::from_list(vec![vec![]]).is_err());
    }

    #[test]
    fn test_clone_is_deep() {
        let a = Matrix::from_list(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let mut b = a.clone();
        b.set_value(0, 0, 10).unwrap();
        assert_eq!(a.to_list(), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(b.to_list(), vec![vec![10, 2], vec![3, 4]]);

        // assignment replaces the shape as well
        b = Matrix::new(3, 1).unwrap();
        assert_eq!(b.shape(), (3, 1));
    }

    #[test]
    fn test_checked_access() {
        let mut m = Matrix::<f64>::identity(2).unwrap();
        m.set_value(0, 1, -2.0).unwrap();
        *m.get_mut(1, 0).unwrap() = -3.0;

        assert_eq!(*m.get(0, 1).unwrap(), -2.0);
        assert_eq!(*m.get(1i32, 0i32).unwrap(), -3.0);
        assert_eq!(m[(1, 1)], 1.0);

        assert_eq!(
            m.get(-1, 0).unwrap_err(),
            MatrixError::IndexOutOfRange {
                row: -1,
                col: 0,
                rows: 2,
                cols: 2
            }
        );
        assert!(m.get(0, -1).is_err());
        assert!(m.get(2, 0).is_err());
        assert!(m.set_value(0, 2, 5.0).is_err());
        assert_eq!(m.to_list(), vec![vec![1.0, -2.0], vec![-3.0, 1.0]]);
    }

    #[test]
    fn test_bounds_follow_own_dimension() {
        // 3x1: row 2 is valid even though there is a single column
        let mut m = Matrix::<i32>::new(3, 1).unwrap();
        m.set_value(2, 0, 7).unwrap();
        assert_eq!(m[(2, 0)], 7);
        assert!(m.get(0, 1).is_err());

        // 1x3: column 2 is valid even though there is a single row
        let mut m = Matrix::<i32>::new(1, 3).unwrap();
        m[(0, 2)] = 4;
        assert_eq!(*m.get(0, 2).unwrap(), 4);
        assert!(m.get(1, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_panics_out_of_range() {
        let m = Matrix::<i32>::new(2, 3).unwrap();
        let _ = m[(0, 3)];
    }

    #[test]
    #[should_panic(expected = "Index (2, 0) out of range for a 2x3 matrix")]
    fn test_row_panics_out_of_range() {
        let m = Matrix::<i32>::new(2, 3).unwrap();
        let _ = m.row(2);
    }

    #[test]
    fn test_huge_index_reported_as_given() {
        let m = Matrix::<i32>::new(2, 2).unwrap();
        assert_eq!(
            m.get(usize::MAX, 0).unwrap_err(),
            MatrixError::IndexOutOfRange {
                row: usize::MAX as i128,
                col: 0,
                rows: 2,
                cols: 2
            }
        );
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_list(vec![vec![1, 2, 5, 77], vec![3, 4, 7, 11], vec![4, 8, 9, 1]])
            .unwrap();

        let t = m.transpose();
        assert_eq!(t.shape(), (4, 3));
        assert_eq!(
            t.to_list(),
            vec![vec![1, 3, 4], vec![2, 4, 8], vec![5, 7, 9], vec![77, 11, 1]]
        );
        assert_eq!(t.transpose().to_list(), m.to_list());
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_list(vec![vec![1, -2], vec![3, 40]]).unwrap();
        assert_eq!(m.to_string(), "1 -2\n3 40");

        let m = Matrix::from_list(vec![vec![0.5, 1.0]]).unwrap();
        assert_eq!(format!("{:.2}", m), "0.50 1.00");
        assert_eq!(format!("{:>3}", Matrix::<i32>::identity(2).unwrap()), "  1   0\n  0   1");
    }

    #[test]
    fn test_random() {
        let m = Matrix::<i64>::random(4, 5, -3..3).unwrap();
        assert_eq!(m.shape(), (4, 5));
        assert!(m.as_slice().iter().all(|x| (-3..3).contains(x)));

        let m = Matrix::<f64>::random(2, 2, 0.0..1.0).unwrap();
        assert!(m.as_slice().iter().all(|x| *x >= 0.0 && *x < 1.0));
    }
}
