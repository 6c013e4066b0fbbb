//! Numeric types and sparse structure descriptions used by the problem interface.
//!
//! The [`FloatT`] trait bounds the floating point types that problem data may be
//! evaluated in.  [`SparsityPattern`] describes the coordinate structure of
//! derivative matrices reported to a solver.

mod error_types;
mod floats;
mod sparsity;
mod vecmath;

pub use error_types::*;
pub use floats::*;
pub use sparsity::*;
pub use vecmath::*;
