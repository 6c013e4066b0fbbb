use super::*;
use crate::algebra::*;
use crate::io::{stderr, PrintTarget};
use crate::nlp::core::*;
use std::io::Write;

// variable bounds and starting value are fixed
// properties of the problem, not derived from data
const X_LOWER: f64 = -1.5;
const X_UPPER: f64 = 0.0;
const X_START: f64 = -0.5;

/// The Ipopt coding exercise problem
///
/// $$
/// \begin{array}{rl}
/// \text{minimize} & \sum_{i=0}^{N-1} (x_i - 1)^2 \\\\\[2ex\]
///  \text{subject to} & (x_{j+1}^2 + 1.5 x_{j+1} - a_j) \cos(x_{j+2}) - x_j = 0,
///    \quad j = 0,\dots,N-3 \\\\\[1ex\]
///         & -1.5 \le x_i \le 0
///  \end{array}
/// $$
///
/// Each constraint couples three consecutive variables and one constant
/// `a_j`.  The constants are copied into the problem at construction.
///
/// No exact Hessian is provided, so a solver must approximate second order
/// information.  With the default [`JacobianStructure::Dense`] setting the
/// Jacobian structure is declared but its values are not available either;
/// [`JacobianStructure::Sparse`] provides analytic Jacobian values.
#[derive(Debug)]
pub struct TutorialProblem<T: FloatT> {
    n: usize,
    a: Vec<T>,
    /// problem settings
    pub settings: TutorialSettings<T>,
    pub(crate) stream: PrintTarget,
    pub(crate) solution: Option<TutorialSolution<T>>,
}

impl<T> TutorialProblem<T>
where
    T: FloatT,
{
    /// Create a problem with `n` variables and constraint constants `a`,
    /// which must have length `n-2`.
    pub fn new(n: usize, a: &[T], settings: TutorialSettings<T>) -> Result<Self, NlpError> {
        check_size(n)?;

        if a.len() != n - 2 {
            return Err(NlpError::InvalidArgument(format!(
                "expected {} constraint constants for N = {}, got {}",
                n - 2,
                n,
                a.len()
            )));
        }
        if !a.is_finite() {
            return Err(NlpError::InvalidArgument(
                "constraint constants must be finite".to_string(),
            ));
        }

        settings
            .validate()
            .map_err(|e| NlpError::InvalidArgument(e.to_string()))?;

        Ok(Self {
            n,
            a: a.to_vec(),
            settings,
            stream: PrintTarget::default(),
            solution: None,
        })
    }

    /// Create a problem with `n` variables and the constants of the
    /// original exercise, `a_j = (j+2)/n`.
    pub fn with_default_data(n: usize, settings: TutorialSettings<T>) -> Result<Self, NlpError> {
        check_size(n)?;
        Self::new(n, &Self::default_constants(n), settings)
    }

    /// The constants `a_j = (j+2)/n`, `j = 0..n-3`
    pub fn default_constants(n: usize) -> Vec<T> {
        let nf: T = n.as_T();
        (2..n)
            .map(|i| {
                let i: T = i.as_T();
                i / nf
            })
            .collect()
    }

    /// number of variables
    pub fn n(&self) -> usize {
        self.n
    }

    /// number of constraints
    pub fn m(&self) -> usize {
        self.n - 2
    }

    /// constraint constants
    pub fn constants(&self) -> &[T] {
        &self.a
    }

    /// The final iterate, once the solver has reported it
    pub fn solution(&self) -> Option<&TutorialSolution<T>> {
        self.solution.as_ref()
    }

    /// Compare the analytic derivatives against finite differences at `x`,
    /// using the derivative test perturbation and tolerance from the settings.
    pub fn derivative_test(&self, x: &[T]) -> Result<DerivativeCheckReport<T>, NlpError> {
        check_derivatives(
            self,
            x,
            self.settings.derivative_test_perturbation,
            self.settings.derivative_test_tol,
        )
    }

    fn jacobian_structure(&self) -> SparsityPattern {
        let (m, n) = (self.m(), self.n);
        match self.settings.jacobian_structure {
            JacobianStructure::Dense => SparsityPattern::dense(m, n),
            JacobianStructure::Sparse => {
                let mut pattern = SparsityPattern::spalloc(m, n, 3 * m);
                for j in 0..m {
                    pattern.push(j, j);
                    pattern.push(j, j + 1);
                    pattern.push(j, j + 2);
                }
                pattern
            }
        }
    }

    // values in the order of the sparse structure
    fn jacobian_values(&self, x: &[T]) -> Vec<T> {
        let c: T = (1.5).as_T();
        let two: T = (2.0).as_T();
        let mut values = Vec::with_capacity(3 * self.m());

        for (w, &a) in x.windows(3).zip(&self.a) {
            let (x1, x2) = (w[1], w[2]);
            let q = x1 * x1 + c * x1 - a;
            values.push(-T::one());
            values.push((two * x1 + c) * x2.cos());
            values.push(-q * x2.sin());
        }
        values
    }
}

fn check_size(n: usize) -> Result<(), NlpError> {
    if n < 3 {
        return Err(NlpError::InvalidArgument(format!(
            "problem size N must be at least 3, got {}",
            n
        )));
    }
    Ok(())
}

impl<T> NlpProblem<T> for TutorialProblem<T>
where
    T: FloatT,
{
    fn shape(&self) -> NlpShape {
        let (n, m) = (self.n, self.m());
        let nnz_jac_g = match self.settings.jacobian_structure {
            JacobianStructure::Dense => n * m,
            JacobianStructure::Sparse => 3 * m,
        };

        // full diagonal, plus the first off-diagonal
        // except for the first and last variable
        let nnz_h_lag = n + (n - 2);

        NlpShape {
            n,
            m,
            nnz_jac_g,
            nnz_h_lag,
            index_style: IndexStyle::C,
        }
    }

    fn bounds(&self, n: usize, m: usize) -> Result<BoundsInfo<T>, NlpError> {
        check_length("variable bounds", n, self.n)?;
        check_length("constraint bounds", m, self.m())?;

        // all constraints are equalities with zero right hand side
        Ok(BoundsInfo {
            x_l: vec![X_LOWER.as_T(); n],
            x_u: vec![X_UPPER.as_T(); n],
            g_l: vec![T::zero(); m],
            g_u: vec![T::zero(); m],
        })
    }

    fn starting_point(
        &self,
        n: usize,
        request: StartingPointRequest,
    ) -> Result<Vec<T>, NlpError> {
        check_length("starting point", n, self.n)?;

        if !request.is_primal_only() {
            return Err(NlpError::ContractViolation(
                "only a primal starting point is available".to_string(),
            ));
        }
        Ok(vec![X_START.as_T(); n])
    }

    fn eval_f(&self, x: &[T]) -> Result<T, NlpError> {
        check_length("x", x.len(), self.n)?;
        let f = x
            .iter()
            .fold(T::zero(), |acc, &xi| acc + (xi - T::one()) * (xi - T::one()));
        Ok(f)
    }

    fn eval_grad_f(&self, x: &[T]) -> Result<Vec<T>, NlpError> {
        check_length("x", x.len(), self.n)?;
        let two: T = (2.0).as_T();
        Ok(x.iter().map(|&xi| two * (xi - T::one())).collect())
    }

    fn eval_g(&self, x: &[T]) -> Result<Vec<T>, NlpError> {
        check_length("x", x.len(), self.n)?;
        let c: T = (1.5).as_T();

        let g = x
            .windows(3)
            .zip(&self.a)
            .map(|(w, &a)| (w[1] * w[1] + c * w[1] - a) * w[2].cos() - w[0])
            .collect();
        Ok(g)
    }

    fn eval_jac_g(&self, request: MatrixRequest<'_, T>) -> Result<MatrixResponse<T>, NlpError> {
        match request {
            MatrixRequest::Structure => Ok(MatrixResponse::Structure(self.jacobian_structure())),
            MatrixRequest::Values { x } => {
                check_length("x", x.len(), self.n)?;
                match self.settings.jacobian_structure {
                    JacobianStructure::Dense => Err(NlpError::UnsupportedCapability(
                        Capability::JacobianValues,
                    )),
                    JacobianStructure::Sparse => Ok(MatrixResponse::Values(self.jacobian_values(x))),
                }
            }
        }
    }

    fn eval_h(&self, request: HessianRequest<'_, T>) -> Result<MatrixResponse<T>, NlpError> {
        // the declared Hessian nonzero count is never backed
        // by a structure.  Solvers must approximate instead.
        match request {
            HessianRequest::Structure => Err(NlpError::UnsupportedCapability(
                Capability::HessianStructure,
            )),
            HessianRequest::Values { .. } => Err(NlpError::UnsupportedCapability(
                Capability::HessianValues,
            )),
        }
    }

    fn finalize_solution(&mut self, report: SolutionReport<'_, T>) {
        let mut solution = TutorialSolution::new(self.n, self.m());
        solution.copy_from_report(&report);
        self.solution = Some(solution);

        // the solve has already concluded, so output
        // failures are reported here and go no further
        if let Err(e) = self.print_solution(&report) {
            let _ = writeln!(stderr(), "warning: failed to write solution report: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ConfigurablePrintTarget;

    fn sparse_problem(n: usize) -> TutorialProblem<f64> {
        let settings = TutorialSettingsBuilder::default()
            .jacobian_structure(JacobianStructure::Sparse)
            .build()
            .unwrap();
        TutorialProblem::with_default_data(n, settings).unwrap()
    }

    #[test]
    fn default_constants() {
        let a = TutorialProblem::<f64>::default_constants(4);
        assert_eq!(a, vec![0.5, 0.75]);
        let p = sparse_problem(5);
        assert_eq!(p.constants(), &[0.4, 0.6, 0.8]);
    }

    #[test]
    fn sparse_structure_layout() {
        let p = sparse_problem(5);
        let s = p.jacobian_structure();
        assert_eq!(s.rows, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
        assert_eq!(s.cols, vec![0, 1, 2, 1, 2, 3, 2, 3, 4]);
    }

    #[test]
    fn sparse_values_at_zero() {
        // at x = 0: dg/dx_j = -1, dg/dx_{j+1} = 1.5, dg/dx_{j+2} = 0
        let p = sparse_problem(4);
        let v = p.jacobian_values(&[0.; 4]);
        assert_eq!(v, vec![-1., 1.5, 0., -1., 1.5, 0.]);
    }

    #[test]
    fn objective_at_start() {
        let p = sparse_problem(4);
        let x = p.starting_point(4, StartingPointRequest::primal()).unwrap();
        assert_eq!(p.eval_f(&x).unwrap(), 4. * 2.25);
    }

    #[test]
    fn finalize_stores_solution() {
        let mut p = sparse_problem(3);
        p.print_to_sink();
        assert!(p.solution().is_none());

        let report = SolutionReport {
            status: SolverReturn::Success,
            x: &[-0.1, -0.2, -0.3],
            z_l: &[0., 0., 0.],
            z_u: &[1., 2., 3.],
            g: &[0.],
            lambda: &[0.5],
            obj_value: 4.5,
        };
        p.finalize_solution(report);

        let s = p.solution().unwrap();
        assert_eq!(s.status, SolverReturn::Success);
        assert_eq!(s.x, vec![-0.1, -0.2, -0.3]);
        assert_eq!(s.z_u, vec![1., 2., 3.]);
        assert_eq!(s.lambda, vec![0.5]);
        assert_eq!(s.obj_val, 4.5);
    }
}
