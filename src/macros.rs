//! Macros for constructing matrices with a convenient syntax.

/// Creates a matrix from row literals.
///
/// # Examples
/// ```
/// use matrust::matrix;
///
/// // Create a 1x3 row matrix
/// let m = matrix!([1.0, 2.0, 3.0]);
/// assert_eq!(m.shape(), (1, 3));
///
/// // Create a 2x2 matrix
/// let m = matrix!([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(m.shape(), (2, 2));
/// ```
#[macro_export]
macro_rules! matrix {
    // Nested rows; must precede the single-row case so that bracketed
    // elements are parsed as rows.
    ([$([$($x:expr),+ $(,)?]),+ $(,)?]) => {
        $crate::Matrix::from_rows(vec![$(vec![$($x),+]),+]).unwrap()
    };

    // Single row
    ([$($x:expr),+ $(,)?]) => {
        $crate::Matrix::from_rows(vec![vec![$($x),+]]).unwrap()
    };
}

/// Creates a matrix filled with zeros.
///
/// # Examples
/// ```
/// use matrust::{zeros, Matrix};
///
/// let z: Matrix<f64> = zeros!([2, 3]);
/// assert_eq!(z.shape(), (2, 3));
/// ```
#[macro_export]
macro_rules! zeros {
    ([$rows:expr, $cols:expr]) => {
        $crate::Matrix::zeros($rows, $cols)
    };
}

/// Creates an identity matrix.
///
/// # Examples
/// ```
/// use matrust::{eye, Matrix};
///
/// let i: Matrix<f64> = eye!(3);
/// assert_eq!(i.shape(), (3, 3));
/// ```
#[macro_export]
macro_rules! eye {
    ($n:expr) => {
        $crate::Matrix::identity($n)
    };
}
