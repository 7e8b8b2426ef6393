//! Structural extraction and concatenation.
//!
//! Every operation here builds a new [`Matrix`] as a lazy re-indexing (or
//! lazy concatenation) of existing matrices: construction is O(1) and no
//! element data is copied until the result is forced. The index transform
//! is a closure-free rule evaluated through [`Matrix::at`].

use crate::error::{MatrustError, Result};
use crate::matrix::{Axis, Matrix};
use crate::scalar::Scalar;
use std::ops::Range;

/// Index-remapping rule carried by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndexMap {
    /// The view is row `i` of the source.
    FixedRow(usize),
    /// The view is column `j` of the source.
    FixedCol(usize),
    /// Transposition: view `(i, j)` reads source `(j, i)`.
    AxisSwap,
    /// Rectangular sub-block anchored at `(row0, col0)`.
    Offset { row0: usize, col0: usize },
    /// The view is the main diagonal: `(0, k)` reads source `(k, k)`.
    Diagonal,
    /// Triangle mask: entries off the kept side read as the additive identity.
    Triangle { upper: bool },
}

impl IndexMap {
    /// Resolves a view coordinate to a source coordinate, or `None` when
    /// the entry is masked to the additive identity.
    pub(crate) fn apply(self, i: usize, j: usize) -> Option<(usize, usize)> {
        match self {
            IndexMap::FixedRow(r) => Some((r, j)),
            IndexMap::FixedCol(c) => Some((i, c)),
            IndexMap::AxisSwap => Some((j, i)),
            IndexMap::Offset { row0, col0 } => Some((row0 + i, col0 + j)),
            IndexMap::Diagonal => Some((j, j)),
            IndexMap::Triangle { upper: true } => (j >= i).then_some((i, j)),
            IndexMap::Triangle { upper: false } => (j <= i).then_some((i, j)),
        }
    }
}

impl<A: Scalar> Matrix<A> {
    /// Returns the sub-block selected by half-open row and column ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if either range is decreasing or extends past the
    /// matrix shape.
    pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Self> {
        if rows.start > rows.end || rows.end > self.rows() {
            return Err(MatrustError::invalid_shape(format!(
                "row range {:?} out of bounds for {} rows",
                rows,
                self.rows()
            )));
        }
        if cols.start > cols.end || cols.end > self.cols() {
            return Err(MatrustError::invalid_shape(format!(
                "column range {:?} out of bounds for {} columns",
                cols,
                self.cols()
            )));
        }
        Ok(Self::view_of(
            self,
            IndexMap::Offset {
                row0: rows.start,
                col0: cols.start,
            },
            rows.end - rows.start,
            cols.end - cols.start,
        ))
    }

    /// Returns row `i` as a 1-by-n view.
    ///
    /// # Errors
    ///
    /// Returns an index error if `i` is out of range.
    pub fn row(&self, i: usize) -> Result<Self> {
        if i >= self.rows() {
            return Err(MatrustError::index_out_of_bounds(i, 0, self.rows()));
        }
        Ok(Self::view_of(self, IndexMap::FixedRow(i), 1, self.cols()))
    }

    /// Returns column `j` as an m-by-1 view.
    ///
    /// # Errors
    ///
    /// Returns an index error if `j` is out of range.
    pub fn col(&self, j: usize) -> Result<Self> {
        if j >= self.cols() {
            return Err(MatrustError::index_out_of_bounds(j, 1, self.cols()));
        }
        Ok(Self::view_of(self, IndexMap::FixedCol(j), self.rows(), 1))
    }

    /// Decomposes the matrix into its ordered row views.
    pub fn row_views(&self) -> Vec<Self> {
        (0..self.rows())
            .map(|i| Self::view_of(self, IndexMap::FixedRow(i), 1, self.cols()))
            .collect()
    }

    /// Decomposes the matrix into its ordered column views.
    pub fn col_views(&self) -> Vec<Self> {
        (0..self.cols())
            .map(|j| Self::view_of(self, IndexMap::FixedCol(j), self.rows(), 1))
            .collect()
    }

    /// Returns the main diagonal as a 1-by-n view.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the matrix is not square.
    pub fn diagonal(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(MatrustError::not_square(self.rows(), self.cols()));
        }
        Ok(Self::view_of(self, IndexMap::Diagonal, 1, self.rows()))
    }

    /// Returns a same-shape view keeping entries on or above the diagonal;
    /// entries strictly below read as zero. The diagonal belongs to both
    /// triangles.
    pub fn upper_triangle(&self) -> Self {
        Self::view_of(
            self,
            IndexMap::Triangle { upper: true },
            self.rows(),
            self.cols(),
        )
    }

    /// Returns a same-shape view keeping entries on or below the diagonal;
    /// entries strictly above read as zero.
    pub fn lower_triangle(&self) -> Self {
        Self::view_of(
            self,
            IndexMap::Triangle { upper: false },
            self.rows(),
            self.cols(),
        )
    }
}

/// Horizontal concatenation: columns of each part, in input order.
///
/// The result is a lazy view over the parts; nothing is copied.
///
/// # Errors
///
/// Returns an error on an empty part list, or when a part's row count
/// differs from the first part's (the error names the offending part).
pub fn augment<A: Scalar>(parts: &[Matrix<A>]) -> Result<Matrix<A>> {
    let first = parts.first().ok_or(MatrustError::EmptyConcat)?;
    let rows = first.rows();
    let mut cols = 0;
    for (k, part) in parts.iter().enumerate() {
        if part.rows() != rows {
            return Err(MatrustError::concat_mismatch("rows", k, rows, part.rows()));
        }
        cols += part.cols();
    }
    Ok(Matrix::concat_of(Axis::Cols, parts, rows, cols))
}

/// Vertical concatenation: rows of each part, in input order.
///
/// # Errors
///
/// Returns an error on an empty part list, or when a part's column count
/// differs from the first part's (the error names the offending part).
pub fn stack<A: Scalar>(parts: &[Matrix<A>]) -> Result<Matrix<A>> {
    let first = parts.first().ok_or(MatrustError::EmptyConcat)?;
    let cols = first.cols();
    let mut rows = 0;
    for (k, part) in parts.iter().enumerate() {
        if part.cols() != cols {
            return Err(MatrustError::concat_mismatch("cols", k, cols, part.cols()));
        }
        rows += part.rows();
    }
    Ok(Matrix::concat_of(Axis::Rows, parts, rows, cols))
}
