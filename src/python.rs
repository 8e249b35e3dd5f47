use crate::matrix::error::MatrixError;
use crate::matrix::functions::find_min;
use crate::matrix::matrix::Matrix;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match &error {
            MatrixError::IndexOutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

/// `Matrix<f64>` as seen from Python.
#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct PyMatrix {
    pub inner: Matrix<f64>,
}

impl From<Matrix<f64>> for PyMatrix {
    fn from(inner: Matrix<f64>) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(rows: usize, cols: usize) -> PyResult<Self> {
        Ok(Matrix::new(rows, cols)?.into())
    }

    #[staticmethod]
    pub fn identity(n: usize) -> PyResult<Self> {
        Ok(Matrix::identity(n)?.into())
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(Matrix::from_list(lines)?.into())
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    pub fn __getitem__(&self, index: (i64, i64)) -> PyResult<f64> {
        Ok(*self.inner.get(index.0, index.1)?)
    }

    pub fn __setitem__(&mut self, index: (i64, i64), value: f64) -> PyResult<()> {
        Ok(self.inner.set_value(index.0, index.1, value)?)
    }

    pub fn __neg__(&self) -> PyMatrix {
        (-&self.inner).into()
    }

    pub fn __add__(&self, rhs: PyRef<PyMatrix>) -> PyResult<PyMatrix> {
        Ok((&self.inner + &rhs.inner)?.into())
    }

    pub fn __sub__(&self, rhs: PyRef<PyMatrix>) -> PyResult<PyMatrix> {
        Ok((&self.inner - &rhs.inner)?.into())
    }

    /// Matrix product, or scaling when `rhs` is a number.
    pub fn __mul__(&self, rhs: &Bound<PyAny>) -> PyResult<PyMatrix> {
        if let Ok(other) = rhs.extract::<PyRef<PyMatrix>>() {
            return Ok((&self.inner * &other.inner)?.into());
        }
        let k: f64 = rhs.extract()?;
        Ok((&self.inner * k).into())
    }

    pub fn __rmul__(&self, lhs: f64) -> PyMatrix {
        (lhs * &self.inner).into()
    }

    pub fn equals(&self, rhs: PyRef<PyMatrix>) -> PyResult<bool> {
        Ok(self.inner.equals(&rhs.inner)?)
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn find_min(&self) -> f64 {
        find_min(&self.inner)
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix({}x{})", self.inner.rows(), self.inner.cols())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
