use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by sparsity pattern assembly operations.
pub enum SparseFormatError {
    /// Row and column index arrays have different lengths
    #[error("Row and column index arrays have incompatible lengths")]
    IncompatibleDimension,
    #[error("Row index exceeds the matrix row dimension")]
    /// Row index exceeds the matrix row dimension
    BadRowval,
    #[error("Column index exceeds the matrix column dimension")]
    /// Column index exceeds the matrix column dimension
    BadColval,
}
