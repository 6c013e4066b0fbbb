//! Problem interface main module.
//!
//! This module contains the callback contract through which an interior point
//! NLP solver queries a problem ([`NlpProblem`](crate::nlp::traits::NlpProblem)),
//! the request, response and status types used by that contract, and the
//! [tutorial implementation](crate::nlp::implementations::tutorial) of the
//! coding exercise problem.
//!
//! A generic [derivative checker](crate::nlp::check_derivatives) is provided
//! for verifying the first derivatives of any implementation.   When compiled
//! with the `ipopt` feature, the [`ffi`](crate::nlp::ffi) module registers
//! any `NlpProblem<f64>` with the Ipopt C interface.

pub(crate) const _INFINITY_DEFAULT: f64 = 1e19;
// internal module structure
pub(crate) mod core;
pub mod implementations;
pub(crate) mod utils;

cfg_if::cfg_if! {
    if #[cfg(feature = "ipopt")] {
        pub mod ffi;
    }
}

pub use crate::nlp::utils::infbounds::*;

//user facing traits and types required to interact with a solver
pub use crate::nlp::core::traits;
pub use crate::nlp::core::{
    check_derivatives, BoundCounts, BoundsInfo, Capability, DerivativeCheckReport,
    DerivativeEntry, HessianRequest, JacobianCheck, MatrixRequest, MatrixResponse, NlpError,
    NlpShape, SettingsError, SolutionReport, SolverReturn, StartingPointRequest,
};
pub use crate::nlp::core::traits::NlpProblem;

//Since there is only one problem implementation, it is
//exposed at the top level directly below.
pub use crate::nlp::implementations::tutorial;
pub use crate::nlp::implementations::tutorial::*;
