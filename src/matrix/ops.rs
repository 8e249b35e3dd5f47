use crate::matrix::element::Element;
use crate::matrix::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::rings::fraction::Fraction;
use num_bigint::BigInt;
use std::ops;

impl<T: Element> Matrix<T> {
    fn check_same_shape(&self, rhs: &Matrix<T>, op: &'static str) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Matrix<T>, f: impl Fn(T, T) -> T) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| f(a.to_owned(), b.to_owned()))
                .collect(),
        }
    }

    pub fn scale(&self, k: T) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|x| x.clone() * k.clone()).collect(),
        }
    }

    pub fn scale_in_place(&mut self, k: T) -> &mut Self {
        for x in self.cells.iter_mut() {
            *x = x.clone() * k.clone();
        }
        self
    }

    pub fn try_add_assign(&mut self, rhs: &Matrix<T>) -> Result<&mut Self, MatrixError> {
        self.check_same_shape(rhs, "addition")?;
        for (a, b) in self.cells.iter_mut().zip(rhs.cells.iter()) {
            *a = a.clone() + b.clone();
        }
        Ok(self)
    }

    pub fn try_sub_assign(&mut self, rhs: &Matrix<T>) -> Result<&mut Self, MatrixError> {
        self.check_same_shape(rhs, "subtraction")?;
        for (a, b) in self.cells.iter_mut().zip(rhs.cells.iter()) {
            *a = a.clone() - b.clone();
        }
        Ok(self)
    }

    /// Replaces `self` with `self * rhs`, which may change its shape.
    pub fn try_mul_assign(&mut self, rhs: &Matrix<T>) -> Result<&mut Self, MatrixError> {
        let product = (&*self * rhs)?;
        if product.shape() != self.shape() {
            log::debug!(
                "in-place product reshapes {}x{} into {}x{}",
                self.rows,
                self.cols,
                product.rows,
                product.cols
            );
        }
        *self = product;
        Ok(self)
    }

    /// Element-wise comparison; both operands must have the same shape.
    pub fn equals(&self, rhs: &Matrix<T>) -> Result<bool, MatrixError> {
        self.check_same_shape(rhs, "comparison")?;
        Ok(self.cells.iter().zip(rhs.cells.iter()).all(|(a, b)| a == b))
    }

    pub fn not_equals(&self, rhs: &Matrix<T>) -> Result<bool, MatrixError> {
        Ok(!self.equals(rhs)?)
    }
}

impl<T: Element> ops::Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|x| -x.clone()).collect(),
        }
    }
}

impl<T: Element> ops::Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -&self
    }
}

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.check_same_shape(rhs, "addition")?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.check_same_shape(rhs, "subtraction")?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiplication",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols).map(move |j| {
                        (0..self.cols).fold(T::zero(), |acc, k| acc + self.at(i, k) * rhs.at(k, j))
                    })
                })
                .collect(),
        })
    }
}

impl<T: Element> ops::Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Matrix<T> {
        self.scale(k)
    }
}

impl<T: Element> ops::Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, k: T) -> Matrix<T> {
        self.scale_in_place(k);
        self
    }
}

impl<T: Element> ops::MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, k: T) {
        self.scale_in_place(k);
    }
}

// `impl<T> Mul<Matrix<T>> for T` is forbidden by the orphan rule,
// so the scalar-on-the-left forms are spelled out per element type.
macro_rules! impl_left_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl ops::Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }

            impl ops::Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_left_scalar_mul!(i8, i16, i32, i64, i128, isize, f32, f64, BigInt, Fraction);

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
