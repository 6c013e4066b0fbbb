//! __tnlp__ provides the nonlinear program of the Ipopt coding exercise,
//! implemented against a typed version of the callback interface that an
//! interior point NLP solver uses to query a problem.  The problem is
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \sum_{i=0}^{N-1} (x_i - 1)^2 \\\\\[2ex\]
//!  \text{subject to} & (x_{j+1}^2 + 1.5 x_{j+1} - a_j) \cos(x_{j+2}) - x_j = 0,
//!    \quad j = 0,\dots,N-3 \\\\\[1ex\]
//!         & -1.5 \le x_i \le 0
//!  \end{array}
//! $$
//!
//! with decision variables $x \in \mathbb{R}^N$ and constants
//! $a \in \mathbb{R}^{N-2}$.
//!
//! The callback contract is the [`NlpProblem`](crate::nlp::NlpProblem)
//! trait.  The problem itself is [`TutorialProblem`](crate::nlp::TutorialProblem),
//! configured through [`TutorialSettings`](crate::nlp::TutorialSettings).
//!
//! ## Features
//!
//! * __Derivative checking__: analytic first derivatives of any
//!   `NlpProblem` can be compared against central finite differences with
//!   [`check_derivatives`](crate::nlp::check_derivatives).
//!
//! * __Capability gaps__: parts of the interface a problem does not provide
//!   are reported as [`NlpError::UnsupportedCapability`](crate::nlp::NlpError)
//!   rather than as failures.  The exercise problem provides no Hessian.
//!
//! * __Ipopt__: with the `ipopt` feature the problem can be solved by the
//!   Ipopt C library through [`nlp::ffi::solve`](crate::nlp).
//!
//! * __JSON__: with the (default) `serde` feature problem data and settings
//!   can be written to and read from JSON files.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod nlp;
