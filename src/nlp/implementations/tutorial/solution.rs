use crate::algebra::*;
use crate::nlp::core::{SolutionReport, SolverReturn};

/// Final iterate reported to the [`TutorialProblem`](super::TutorialProblem)
/// by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorialSolution<T> {
    /// final solver status
    pub status: SolverReturn,
    /// primal solution
    pub x: Vec<T>,
    /// lower bound multipliers
    pub z_l: Vec<T>,
    /// upper bound multipliers
    pub z_u: Vec<T>,
    /// constraint values at x
    pub g: Vec<T>,
    /// constraint multipliers
    pub lambda: Vec<T>,
    /// objective value at x
    pub obj_val: T,
}

impl<T> TutorialSolution<T>
where
    T: FloatT,
{
    /// Create a new `TutorialSolution` object
    pub fn new(n: usize, m: usize) -> Self {
        Self {
            status: SolverReturn::Unassigned,
            x: vec![T::zero(); n],
            z_l: vec![T::zero(); n],
            z_u: vec![T::zero(); n],
            g: vec![T::zero(); m],
            lambda: vec![T::zero(); m],
            obj_val: T::nan(),
        }
    }

    /// Overwrite with the contents of a solver report
    pub(crate) fn copy_from_report(&mut self, report: &SolutionReport<'_, T>) {
        self.status = report.status;
        self.obj_val = report.obj_value;
        _copy_resized(&mut self.x, report.x);
        _copy_resized(&mut self.z_l, report.z_l);
        _copy_resized(&mut self.z_u, report.z_u);
        _copy_resized(&mut self.g, report.g);
        _copy_resized(&mut self.lambda, report.lambda);
    }
}

// solvers may omit the multipliers, so the reported
// lengths are not guaranteed to match the problem size
fn _copy_resized<T: FloatT>(dst: &mut Vec<T>, src: &[T]) {
    dst.resize(src.len(), T::zero());
    dst.copy_from(src);
}
