// ---------------------------------
// Solver status type
// ---------------------------------

/// Terminal status reported by an interior point NLP solver
/// when it hands back its final iterate.
#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
pub enum SolverReturn {
    /// Converged to a point satisfying the termination tolerances.
    Success,
    /// Iteration limit reached.
    MaxIterExceeded,
    /// CPU time limit reached.
    CpuTimeExceeded,
    /// Wall clock time limit reached.
    WallTimeExceeded,
    /// Search direction became too small to make progress.
    StopAtTinyStep,
    /// Converged to the "acceptable" tolerances only.
    StopAtAcceptablePoint,
    /// Converged to a point of local infeasibility.
    LocalInfeasibility,
    /// Stopped on request of a user callback.
    UserRequestedStop,
    /// Found a feasible point (square problems).
    FeasiblePointFound,
    /// Iterates appear to diverge.
    DivergingIterates,
    /// Feasibility restoration phase failed.
    RestorationFailure,
    /// Unrecoverable error while computing a step.
    ErrorInStepComputation,
    /// A callback returned NaN or Inf.
    InvalidNumberDetected,
    /// Fewer degrees of freedom than equality constraints.
    TooFewDegreesOfFreedom,
    /// Invalid option supplied to the solver.
    InvalidOption,
    /// Solver ran out of memory.
    OutOfMemory,
    /// Internal solver error.
    InternalError,
    /// No status has been assigned (solver hasn't run).
    #[default]
    Unassigned,
}

impl SolverReturn {
    /// True if the returned point is a (locally) optimal solution
    pub fn is_solved(&self) -> bool {
        matches!(
            *self,
            SolverReturn::Success | SolverReturn::StopAtAcceptablePoint
        )
    }
}

impl std::fmt::Display for SolverReturn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[test]
fn test_solver_return_classes() {
    assert_eq!(SolverReturn::default(), SolverReturn::Unassigned);
    assert!(SolverReturn::Success.is_solved());
    assert!(SolverReturn::StopAtAcceptablePoint.is_solved());
    assert!(!SolverReturn::MaxIterExceeded.is_solved());
    assert_eq!(SolverReturn::LocalInfeasibility.to_string(), "LocalInfeasibility");
}
