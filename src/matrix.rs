//! Core matrix type: dense row-major storage plus lazy re-indexing views.
//!
//! A [`Matrix`] is an immutable 2-D value. It is either *materialized*
//! (a shared row-major buffer with O(1) repeated access) or a *view*: a
//! reference to a source matrix plus a closure-free index-remapping rule,
//! evaluated on demand through a single dispatch point. Views are O(1) to
//! construct and never copy element data until [`Matrix::force`] is called.

use crate::error::{MatrustError, Result};
use crate::scalar::Scalar;
use crate::view::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Concatenation axis for lazy `augment`/`stack` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Rows,
    Cols,
}

#[derive(Debug, Clone)]
pub(crate) enum Repr<A: Scalar> {
    /// Materialized row-major storage.
    Dense(Arc<[A]>),
    /// Lazy re-indexing of a single source matrix.
    View {
        source: Arc<Matrix<A>>,
        map: IndexMap,
    },
    /// Lazy concatenation of parts along one axis.
    Concat {
        axis: Axis,
        parts: Arc<[Matrix<A>]>,
    },
}

/// An immutable 2-D matrix over a real or complex scalar type.
#[derive(Debug, Clone)]
pub struct Matrix<A: Scalar> {
    rows: usize,
    cols: usize,
    repr: Repr<A>,
}

impl<A: Scalar> Matrix<A> {
    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if the data length does not match `rows * cols`.
    pub fn from_vec(data: Vec<A>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrustError::invalid_shape(format!(
                "data length {} does not match {}x{}",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            repr: Repr::Dense(data.into()),
        })
    }

    /// Creates a matrix from a list of equal-length rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<A>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrustError::invalid_shape(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    ncols
                )));
            }
        }
        let data: Vec<A> = rows.into_iter().flatten().collect();
        Self::from_vec(data, nrows, ncols)
    }

    /// Creates a matrix by evaluating an index function at every position.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> A,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self {
            rows,
            cols,
            repr: Repr::Dense(data.into()),
        }
    }

    /// Creates a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| A::zero())
    }

    /// Creates the n-by-n identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { A::one() } else { A::zero() })
    }

    pub(crate) fn view_of(source: &Self, map: IndexMap, rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            repr: Repr::View {
                source: Arc::new(source.clone()),
                map,
            },
        }
    }

    pub(crate) fn concat_of(axis: Axis, parts: &[Self], rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            repr: Repr::Concat {
                axis,
                parts: parts.to_vec().into(),
            },
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if the matrix contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Bounds-checked element access.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending index, axis, and valid bound
    /// when `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> Result<A> {
        if i >= self.rows {
            return Err(MatrustError::index_out_of_bounds(i, 0, self.rows));
        }
        if j >= self.cols {
            return Err(MatrustError::index_out_of_bounds(j, 1, self.cols));
        }
        Ok(self.at(i, j))
    }

    /// Fast element access; bounds must have been validated by the caller.
    ///
    /// This is the single dispatch point through which every view rule is
    /// evaluated.
    pub fn at(&self, i: usize, j: usize) -> A {
        match &self.repr {
            Repr::Dense(data) => data[i * self.cols + j],
            Repr::View { source, map } => match map.apply(i, j) {
                Some((si, sj)) => source.at(si, sj),
                None => A::zero(),
            },
            Repr::Concat {
                axis: Axis::Cols,
                parts,
            } => {
                let mut j = j;
                for part in parts.iter() {
                    if j < part.cols() {
                        return part.at(i, j);
                    }
                    j -= part.cols();
                }
                unreachable!("column index exceeds concatenated width")
            }
            Repr::Concat {
                axis: Axis::Rows,
                parts,
            } => {
                let mut i = i;
                for part in parts.iter() {
                    if i < part.rows() {
                        return part.at(i, j);
                    }
                    i -= part.rows();
                }
                unreachable!("row index exceeds concatenated height")
            }
        }
    }

    /// Iterates over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = A> + '_ {
        (0..self.rows).flat_map(move |i| (0..self.cols).map(move |j| self.at(i, j)))
    }

    /// Collects all elements into a row-major vector.
    pub fn to_vec(&self) -> Vec<A> {
        self.iter().collect()
    }

    /// Materializes into dense row-major storage.
    ///
    /// O(1) when already materialized. Multi-pass algorithms call this
    /// first so that repeated access reads stored values instead of
    /// re-evaluating the view chain.
    pub fn force(&self) -> Self {
        match &self.repr {
            Repr::Dense(_) => self.clone(),
            _ => Self {
                rows: self.rows,
                cols: self.cols,
                repr: Repr::Dense(self.iter().collect()),
            },
        }
    }

    /// Returns `true` if this matrix is backed by dense storage.
    pub fn is_materialized(&self) -> bool {
        matches!(self.repr, Repr::Dense(_))
    }

    /// Applies a function to every element, producing a materialized matrix.
    pub fn map<B, F>(&self, f: F) -> Matrix<B>
    where
        B: Scalar,
        F: FnMut(A) -> B,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            repr: Repr::Dense(self.iter().map(f).collect()),
        }
    }

    /// Elementwise absolute value / complex modulus.
    pub fn magnitude(&self) -> Matrix<A::Real> {
        self.map(A::modulus)
    }

    /// Elementwise complex conjugate; the identity map for real scalars.
    pub fn conjugate_elementwise(&self) -> Self {
        self.map(A::conj)
    }

    /// Elementwise multiplication by a real factor.
    pub fn scale(&self, k: A::Real) -> Self {
        self.map(|x| x.scale(k))
    }

    /// Sum of all elements; the additive identity for the empty matrix.
    pub fn sum(&self) -> A {
        self.iter().fold(A::zero(), |acc, x| acc + x)
    }
}

impl<A: Scalar + PartialOrd> Matrix<A> {
    /// Largest element; the additive identity for the empty matrix.
    pub fn max(&self) -> A {
        let mut it = self.iter();
        let first = match it.next() {
            Some(x) => x,
            None => return A::zero(),
        };
        // NaN is sticky: once seen it is never displaced by a comparison.
        it.fold(first, |m, x| if x > m || x != x { x } else { m })
    }
}

impl<A: Scalar> PartialEq for Matrix<A> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Scalar + fmt::Display> fmt::Display for Matrix<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.at(i, j))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
