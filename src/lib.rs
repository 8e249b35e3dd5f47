//! Generic dense matrices: element access, arithmetic operators,
//! transposition and cofactor-expansion determinants.
//!
//! ```
//! use rust_matrix::matrix::functions::find_min;
//! use rust_matrix::matrix::matrix::Matrix;
//!
//! let mut m = Matrix::<f64>::identity(2)?;
//! m.set_value(0, 1, -2.0)?;
//! m.set_value(1, 0, -3.0)?;
//!
//! assert_eq!(m.determinant()?, -5.0);
//! assert_eq!(find_min(&m), -3.0);
//! # Ok::<(), rust_matrix::matrix::error::MatrixError>(())
//! ```

pub mod matrix {
    pub mod determinant;
    pub mod element;
    pub mod error;
    pub mod functions;
    pub mod matrix;
    pub mod ops;
    mod proptests;
}
pub mod rings {
    pub mod fraction;
}

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_matrix(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
