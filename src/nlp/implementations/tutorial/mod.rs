//! Tutorial problem implementation
//!
//! This module implements the [`NlpProblem`](crate::nlp::traits::NlpProblem)
//! callback interface for the coding exercise problem, together with its
//! settings, console output and solution record.

mod info_print;
mod problem;
mod settings;
mod solution;

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        mod json;
    }
}

// export flattened
pub use problem::*;
pub use settings::*;
pub use solution::*;
