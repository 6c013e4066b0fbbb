//! The callback contract between a problem definition and an interior point
//! NLP solver.
//!
//! A solver drives every call: it first asks for the problem shape, bounds
//! and starting point, then evaluates the objective, constraints and their
//! derivatives at candidate points of its own choosing, and finally hands
//! back its terminal iterate through [`NlpProblem::finalize_solution`].
//!
//! Every evaluation returns a `Result`.  An [`NlpError::UnsupportedCapability`]
//! tells the solver that a piece of information is not available at all
//! (e.g. exact second derivatives), in which case it should switch to an
//! approximation rather than retry.

use super::*;
use crate::algebra::*;

/// A nonlinear program
///
/// $$
/// \begin{array}{rl}
/// \text{minimize} & f(x)\\\\\[2ex\]
///  \text{subject to} & g_L \le g(x) \le g_U \\\\\[1ex\]
///         & x_L \le x \le x_U
///  \end{array}
/// $$
///
/// exposed through the callbacks an interior point solver requires.
pub trait NlpProblem<T: FloatT> {
    /// Problem dimensions and derivative nonzero counts.
    fn shape(&self) -> NlpShape;

    /// Variable and constraint bounds.  `n` and `m` are the sizes
    /// previously reported by [`shape`](NlpProblem::shape).
    fn bounds(&self, n: usize, m: usize) -> Result<BoundsInfo<T>, NlpError>;

    /// Initial primal point of length `n`.
    fn starting_point(&self, n: usize, request: StartingPointRequest)
        -> Result<Vec<T>, NlpError>;

    /// Objective value f(x).
    fn eval_f(&self, x: &[T]) -> Result<T, NlpError>;

    /// Objective gradient ∇f(x).
    fn eval_grad_f(&self, x: &[T]) -> Result<Vec<T>, NlpError>;

    /// Constraint values g(x).
    fn eval_g(&self, x: &[T]) -> Result<Vec<T>, NlpError>;

    /// Constraint Jacobian structure, or its values at `x`.
    fn eval_jac_g(&self, request: MatrixRequest<'_, T>) -> Result<MatrixResponse<T>, NlpError>;

    /// Lagrangian Hessian structure, or its values.
    fn eval_h(&self, request: HessianRequest<'_, T>) -> Result<MatrixResponse<T>, NlpError>;

    /// Receive the final iterate.  Called once, after the solve has concluded.
    fn finalize_solution(&mut self, report: SolutionReport<'_, T>);
}
