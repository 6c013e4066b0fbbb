use super::SparseFormatError;
use itertools::iproduct;
use std::collections::HashSet;
use std::iter::zip;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index base used when handing sparse coordinates to a solver.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexStyle {
    /// 0-based indexing
    #[default]
    C,
    /// 1-based indexing
    Fortran,
}

impl IndexStyle {
    /// Offset added to a 0-based index in this style
    pub fn offset(&self) -> usize {
        match self {
            IndexStyle::C => 0,
            IndexStyle::Fortran => 1,
        }
    }
}

impl std::fmt::Display for IndexStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IndexStyle::C => write!(f, "C (0-based)"),
            IndexStyle::Fortran => write!(f, "Fortran (1-based)"),
        }
    }
}

/// Coordinate (triplet) description of the nonzero entries of an `m x n`
/// sparse matrix, without values.
///
/// Indices are always stored 0-based.  Entries are kept in the order in which
/// they were supplied, since any subsequently reported values are listed in
/// the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SparsityPattern {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// row index of each nonzero
    pub rows: Vec<usize>,
    /// column index of each nonzero
    pub cols: Vec<usize>,
}

impl SparsityPattern {
    /// Create a pattern from 0-based row and column index arrays.
    pub fn new(
        m: usize,
        n: usize,
        rows: Vec<usize>,
        cols: Vec<usize>,
    ) -> Result<Self, SparseFormatError> {
        let pattern = Self { m, n, rows, cols };
        pattern.check_format()?;
        Ok(pattern)
    }

    /// Check that the index arrays agree in length and that every
    /// coordinate lies inside the `m x n` matrix.  Needed for patterns
    /// assembled directly through the public fields.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rows.len() != self.cols.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }
        if self.rows.iter().any(|&r| r >= self.m) {
            return Err(SparseFormatError::BadRowval);
        }
        if self.cols.iter().any(|&c| c >= self.n) {
            return Err(SparseFormatError::BadColval);
        }
        Ok(())
    }

    /// A fully dense pattern, enumerated row-major: every column
    /// of row 0, then every column of row 1, and so on.
    pub fn dense(m: usize, n: usize) -> Self {
        let (rows, cols) = iproduct!(0..m, 0..n).unzip();
        Self { m, n, rows, cols }
    }

    /// An empty pattern of the given size
    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        Self {
            m,
            n,
            rows: Vec::with_capacity(nnz),
            cols: Vec::with_capacity(nnz),
        }
    }

    /// Append a nonzero at `(row, col)`.
    ///
    /// Panics if the coordinate lies outside the matrix.
    pub fn push(&mut self, row: usize, col: usize) {
        assert!(row < self.m && col < self.n);
        self.rows.push(row);
        self.cols.push(col);
    }

    /// number of structural nonzeros
    pub fn nnz(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over 0-based `(row, col)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        zip(self.rows.iter().copied(), self.cols.iter().copied())
    }

    /// Iterate over `(row, col)` pairs in the given index style
    pub fn iter_styled(&self, style: IndexStyle) -> impl Iterator<Item = (usize, usize)> + '_ {
        let k = style.offset();
        self.iter().map(move |(r, c)| (r + k, c + k))
    }

    /// The set of `(row, col)` coordinates, for repeated membership tests
    pub fn coordinates(&self) -> HashSet<(usize, usize)> {
        self.iter().collect()
    }

    /// True if any coordinate appears more than once
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.nnz());
        !self.iter().all(|rc| seen.insert(rc))
    }

    /// True if every coordinate of the `m x n` matrix appears
    pub fn is_dense(&self) -> bool {
        self.nnz() == self.m * self.n && !self.has_duplicates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_is_row_major() {
        let p = SparsityPattern::dense(2, 3);
        let pairs: Vec<_> = p.iter().collect();
        assert_eq!(
            pairs,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        assert!(p.is_dense());
        assert!(!p.has_duplicates());
    }

    #[test]
    fn new_rejects_bad_indices() {
        assert_eq!(
            SparsityPattern::new(2, 2, vec![0, 1], vec![0]),
            Err(SparseFormatError::IncompatibleDimension)
        );
        assert_eq!(
            SparsityPattern::new(2, 2, vec![0, 2], vec![0, 1]),
            Err(SparseFormatError::BadRowval)
        );
        assert_eq!(
            SparsityPattern::new(2, 2, vec![0, 1], vec![0, 5]),
            Err(SparseFormatError::BadColval)
        );

        // patterns built through the public fields
        let p = SparsityPattern {
            m: 1,
            n: 2,
            rows: vec![3],
            cols: vec![0],
        };
        assert_eq!(p.check_format(), Err(SparseFormatError::BadRowval));
    }

    #[test]
    fn duplicates_and_lookup() {
        let mut p = SparsityPattern::spalloc(3, 3, 3);
        p.push(0, 0);
        p.push(2, 1);
        assert!(!p.has_duplicates());
        let coords = p.coordinates();
        assert!(coords.contains(&(2, 1)));
        assert!(!coords.contains(&(1, 1)));
        p.push(0, 0);
        assert!(p.has_duplicates());
        assert!(!p.is_dense());
    }

    #[test]
    fn fortran_style_offsets() {
        let p = SparsityPattern::dense(1, 2);
        let pairs: Vec<_> = p.iter_styled(IndexStyle::Fortran).collect();
        assert_eq!(pairs, vec![(1, 1), (1, 2)]);
    }
}
