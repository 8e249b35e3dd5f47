use crate::matrix::element::Element;
use crate::matrix::matrix::Matrix;

/// Smallest cell of the matrix.
///
/// Cells that do not compare (NaN) are skipped, unless no cell compares.
pub fn find_min<T: Element>(matrix: &Matrix<T>) -> T {
    matrix
        .cells
        .iter()
        .skip(1)
        .fold(&matrix.cells[0], |min, x| {
            if x < min || min.partial_cmp(min).is_none() {
                x
            } else {
                min
            }
        })
        .clone()
}

/// Applies `f` to every cell in place.
pub fn apply<T: Element, F>(matrix: &mut Matrix<T>, mut f: F) -> &mut Matrix<T>
where
    F: FnMut(&T) -> T,
{
    for x in matrix.cells.iter_mut() {
        *x = f(x);
    }
    matrix
}

/// Reduces each row with `f(row, row_len)`, one result per row in order.
pub fn row_wise_apply<T: Element, R, F>(matrix: &Matrix<T>, mut f: F) -> Vec<R>
where
    F: FnMut(&[T], usize) -> R,
{
    matrix
        .cells
        .chunks(matrix.cols)
        .map(|line| f(line, line.len()))
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
