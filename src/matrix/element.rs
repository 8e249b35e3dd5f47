use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Everything a matrix cell must support.
///
/// Text-like types are rejected at compile time since they have no
/// arithmetic closure:
///
/// ```compile_fail
/// use rust_matrix::matrix::matrix::Matrix;
///
/// let m = Matrix::<String>::new(2, 2);
/// ```
pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + fmt::Display
    + fmt::Debug
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Neg<Output = T>
        + fmt::Display
        + fmt::Debug
{
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;
    use num_bigint::BigInt;

    fn is_element<T: Element>() {}

    #[test]
    fn test_numeric_types_are_elements() {
        is_element::<i32>();
        is_element::<i64>();
        is_element::<f32>();
        is_element::<f64>();
        is_element::<BigInt>();
        is_element::<Fraction>();
    }
}
