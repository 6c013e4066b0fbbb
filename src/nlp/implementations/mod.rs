//! Implementations of the problem callback interface.
//!
//! Only the coding exercise problem is provided.

pub mod tutorial;
