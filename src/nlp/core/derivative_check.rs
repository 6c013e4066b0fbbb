//! Finite difference verification of first derivatives.
//!
//! The analytic objective gradient and constraint Jacobian of any
//! [`NlpProblem`] are compared against central differences of the
//! objective and constraint functions at a given point.

use super::*;
use crate::algebra::*;

/// One compared derivative entry
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct DerivativeEntry<T> {
    /// constraint index (always 0 for the objective gradient)
    pub row: usize,
    /// variable index
    pub col: usize,
    /// value reported by the problem
    pub analytic: T,
    /// finite difference estimate
    pub estimate: T,
    /// `|analytic - estimate| / max(1, |estimate|)`
    pub rel_error: T,
}

impl<T: FloatT> DerivativeEntry<T> {
    fn new(row: usize, col: usize, analytic: T, estimate: T) -> Self {
        let rel_error = T::abs(analytic - estimate) / T::max(T::one(), T::abs(estimate));
        Self {
            row,
            col,
            analytic,
            estimate,
            rel_error,
        }
    }
}

/// Outcome of the constraint Jacobian test
#[derive(PartialEq, Clone, Debug)]
pub enum JacobianCheck<T> {
    /// Jacobian values were compared against finite differences
    Checked {
        /// one entry per declared structural nonzero
        entries: Vec<DerivativeEntry<T>>,
        /// significant finite difference entries absent from the declared structure
        missing: Vec<DerivativeEntry<T>>,
    },
    /// The problem does not provide Jacobian values
    Skipped(Capability),
}

/// Results of [`check_derivatives`]
#[derive(PartialEq, Clone, Debug)]
pub struct DerivativeCheckReport<T> {
    /// one entry per variable
    pub gradient: Vec<DerivativeEntry<T>>,
    pub jacobian: JacobianCheck<T>,
    /// relative error threshold
    pub tol: T,
}

impl<T: FloatT> DerivativeCheckReport<T> {
    /// Gradient entries exceeding the relative error threshold
    pub fn gradient_errors(&self) -> impl Iterator<Item = &DerivativeEntry<T>> {
        self.gradient.iter().filter(move |e| !(e.rel_error <= self.tol))
    }

    /// Jacobian entries exceeding the relative error threshold,
    /// including significant entries missing from the structure
    pub fn jacobian_errors(&self) -> Vec<&DerivativeEntry<T>> {
        match &self.jacobian {
            JacobianCheck::Checked { entries, missing } => entries
                .iter()
                .filter(|e| !(e.rel_error <= self.tol))
                .chain(missing.iter())
                .collect(),
            JacobianCheck::Skipped(_) => Vec::new(),
        }
    }

    /// Largest relative error found in the gradient
    pub fn max_gradient_error(&self) -> T {
        let errs: Vec<T> = self.gradient.iter().map(|e| e.rel_error).collect();
        errs.norm_inf()
    }

    /// True if the Jacobian test was skipped
    pub fn jacobian_skipped(&self) -> bool {
        matches!(self.jacobian, JacobianCheck::Skipped(_))
    }

    /// True if no checked entry exceeds the threshold
    pub fn is_ok(&self) -> bool {
        self.gradient_errors().next().is_none() && self.jacobian_errors().is_empty()
    }
}

/// Compare analytic first derivatives against central finite differences at `x`.
///
/// `perturbation` is the finite difference step and `tol` the relative error
/// threshold used to flag mismatches.  A problem that reports
/// [`UnsupportedCapability`](NlpError::UnsupportedCapability) for Jacobian
/// values has its Jacobian test marked as skipped.
pub fn check_derivatives<T, P>(
    problem: &P,
    x: &[T],
    perturbation: T,
    tol: T,
) -> Result<DerivativeCheckReport<T>, NlpError>
where
    T: FloatT,
    P: NlpProblem<T> + ?Sized,
{
    let shape = problem.shape();
    check_length("x", x.len(), shape.n)?;

    if !(perturbation > T::zero()) || !(tol > T::zero()) {
        return Err(NlpError::InvalidArgument(
            "derivative test perturbation and tolerance must be positive".to_string(),
        ));
    }
    if !x.is_finite() {
        return Err(NlpError::InvalidArgument(
            "derivative test point must be finite".to_string(),
        ));
    }

    let two: T = (2.0).as_T();
    let two_h = two * perturbation;
    let mut xp = x.to_vec();

    // objective gradient
    let grad = problem.eval_grad_f(x)?;
    check_length("grad_f", grad.len(), shape.n)?;

    let mut gradient = Vec::with_capacity(shape.n);
    for (i, &gi) in grad.iter().enumerate() {
        xp[i] = x[i] + perturbation;
        let fp = problem.eval_f(&xp)?;
        xp[i] = x[i] - perturbation;
        let fm = problem.eval_f(&xp)?;
        xp[i] = x[i];

        gradient.push(DerivativeEntry::new(0, i, gi, (fp - fm) / two_h));
    }

    // constraint Jacobian
    let structure = problem
        .eval_jac_g(MatrixRequest::Structure)?
        .into_structure()?;
    check_structure(&structure, &shape)?;

    let values = match problem.eval_jac_g(MatrixRequest::Values { x }) {
        Ok(response) => response.into_values()?,
        Err(NlpError::UnsupportedCapability(c)) => {
            return Ok(DerivativeCheckReport {
                gradient,
                jacobian: JacobianCheck::Skipped(c),
                tol,
            });
        }
        Err(e) => return Err(e),
    };
    check_length("Jacobian values", values.len(), structure.nnz())?;

    // finite difference Jacobian, stored by column
    let mut fd = Vec::with_capacity(shape.n);
    for j in 0..shape.n {
        xp[j] = x[j] + perturbation;
        let gp = problem.eval_g(&xp)?;
        xp[j] = x[j] - perturbation;
        let gm = problem.eval_g(&xp)?;
        xp[j] = x[j];
        check_length("g", gp.len(), shape.m)?;
        check_length("g", gm.len(), shape.m)?;

        let col: Vec<T> = gp.iter().zip(&gm).map(|(&p, &m)| (p - m) / two_h).collect();
        fd.push(col);
    }

    let entries: Vec<_> = structure
        .iter()
        .zip(&values)
        .map(|((r, c), &v)| DerivativeEntry::new(r, c, v, fd[c][r]))
        .collect();

    let declared = structure.coordinates();
    let mut missing = Vec::new();
    for (c, col) in fd.iter().enumerate() {
        for (r, &est) in col.iter().enumerate() {
            if T::abs(est) > tol && !declared.contains(&(r, c)) {
                missing.push(DerivativeEntry::new(r, c, T::zero(), est));
            }
        }
    }

    Ok(DerivativeCheckReport {
        gradient,
        jacobian: JacobianCheck::Checked { entries, missing },
        tol,
    })
}

// the declared structure must describe an m x n matrix
// with every coordinate inside it
fn check_structure(structure: &SparsityPattern, shape: &NlpShape) -> Result<(), NlpError> {
    if (structure.m, structure.n) != (shape.m, shape.n) {
        return Err(NlpError::ContractViolation(format!(
            "Jacobian structure is {} x {}, expected {} x {}",
            structure.m, structure.n, shape.m, shape.n
        )));
    }
    structure
        .check_format()
        .map_err(|e| NlpError::ContractViolation(format!("Jacobian structure: {}", e)))
}
