use super::{NlpError, SolverReturn};
use crate::algebra::*;
use crate::nlp::utils::infbounds::get_infinity;
use std::iter::zip;

/// Problem dimensions and derivative structure sizes.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NlpShape {
    /// number of variables
    pub n: usize,
    /// number of constraints
    pub m: usize,
    /// number of nonzeros in the constraint Jacobian
    pub nnz_jac_g: usize,
    /// number of nonzeros in the Lagrangian Hessian (lower triangle)
    pub nnz_h_lag: usize,
    /// index style of the reported sparse structures
    pub index_style: IndexStyle,
}

/// Lower and upper bounds on variables and constraints.
#[derive(PartialEq, Clone, Debug)]
pub struct BoundsInfo<T> {
    /// variable lower bounds
    pub x_l: Vec<T>,
    /// variable upper bounds
    pub x_u: Vec<T>,
    /// constraint lower bounds
    pub g_l: Vec<T>,
    /// constraint upper bounds
    pub g_u: Vec<T>,
}

/// Number of entries of each bound type in a pair of bound vectors
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct BoundCounts {
    pub free: usize,
    pub only_lower: usize,
    pub lower_and_upper: usize,
    pub only_upper: usize,
    /// lower bound equals upper bound
    pub fixed: usize,
}

impl BoundCounts {
    fn classify<T: FloatT>(l: &[T], u: &[T]) -> Self {
        let inf: T = get_infinity().as_T();
        let mut counts = BoundCounts::default();

        for (&l, &u) in zip(l, u) {
            let has_l = l > -inf;
            let has_u = u < inf;
            match (has_l, has_u) {
                (true, true) if l == u => counts.fixed += 1,
                (true, true) => counts.lower_and_upper += 1,
                (true, false) => counts.only_lower += 1,
                (false, true) => counts.only_upper += 1,
                (false, false) => counts.free += 1,
            }
        }
        counts
    }
}

impl<T: FloatT> BoundsInfo<T> {
    /// Bound types of the variables.  Bounds with magnitude at or
    /// beyond the [infinity threshold](crate::nlp::get_infinity) are
    /// treated as absent.
    pub fn variable_counts(&self) -> BoundCounts {
        BoundCounts::classify(&self.x_l, &self.x_u)
    }

    /// Bound types of the constraints.  Fixed entries are equality constraints.
    pub fn constraint_counts(&self) -> BoundCounts {
        BoundCounts::classify(&self.g_l, &self.g_u)
    }
}

/// The parts of a starting point requested by a solver.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct StartingPointRequest {
    /// primal variables x
    pub init_x: bool,
    /// bound multipliers z_L and z_U
    pub init_z: bool,
    /// constraint multipliers lambda
    pub init_lambda: bool,
}

impl StartingPointRequest {
    /// request the primal starting point only
    pub fn primal() -> Self {
        Self {
            init_x: true,
            init_z: false,
            init_lambda: false,
        }
    }

    pub fn is_primal_only(&self) -> bool {
        *self == Self::primal()
    }
}

impl Default for StartingPointRequest {
    fn default() -> Self {
        Self::primal()
    }
}

/// Two-phase request for a sparse derivative matrix: the coordinate
/// structure first, the values at a given point afterwards.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum MatrixRequest<'a, T> {
    Structure,
    Values { x: &'a [T] },
}

/// Two-phase request for the Hessian of the Lagrangian
/// `obj_factor * ∇²f(x) + Σ lambda_j ∇²g_j(x)`.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum HessianRequest<'a, T> {
    Structure,
    Values {
        x: &'a [T],
        obj_factor: T,
        lambda: &'a [T],
    },
}

/// Response to a [`MatrixRequest`] or [`HessianRequest`].  Values are
/// listed in the order of the previously reported structure.
#[derive(PartialEq, Clone, Debug)]
pub enum MatrixResponse<T> {
    Structure(SparsityPattern),
    Values(Vec<T>),
}

impl<T> MatrixResponse<T> {
    /// Unwrap a structure response, or fail if values were returned
    pub fn into_structure(self) -> Result<SparsityPattern, NlpError> {
        match self {
            MatrixResponse::Structure(p) => Ok(p),
            MatrixResponse::Values(_) => Err(NlpError::ContractViolation(
                "values returned for a structure request".to_string(),
            )),
        }
    }

    /// Unwrap a values response, or fail if a structure was returned
    pub fn into_values(self) -> Result<Vec<T>, NlpError> {
        match self {
            MatrixResponse::Values(v) => Ok(v),
            MatrixResponse::Structure(_) => Err(NlpError::ContractViolation(
                "structure returned for a values request".to_string(),
            )),
        }
    }
}

/// Final iterate handed back by the solver at termination.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct SolutionReport<'a, T> {
    pub status: SolverReturn,
    /// primal variables
    pub x: &'a [T],
    /// lower bound multipliers
    pub z_l: &'a [T],
    /// upper bound multipliers
    pub z_u: &'a [T],
    /// constraint values
    pub g: &'a [T],
    /// constraint multipliers
    pub lambda: &'a [T],
    /// objective value
    pub obj_value: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_counts() {
        let bounds = BoundsInfo {
            x_l: vec![-1., -1e20, 0., -1e20],
            x_u: vec![1., 2., 1e20, 1e20],
            g_l: vec![0., 0., -1e30],
            g_u: vec![0., 1., 5.],
        };
        let v = bounds.variable_counts();
        assert_eq!(v.lower_and_upper, 1);
        assert_eq!(v.only_upper, 1);
        assert_eq!(v.only_lower, 1);
        assert_eq!(v.free, 1);

        let c = bounds.constraint_counts();
        assert_eq!(c.fixed, 1);
        assert_eq!(c.lower_and_upper, 1);
        assert_eq!(c.only_upper, 1);
    }

    #[test]
    fn matrix_response_unwrap() {
        let r: MatrixResponse<f64> = MatrixResponse::Values(vec![1.]);
        assert!(r.clone().into_structure().is_err());
        assert_eq!(r.into_values().unwrap(), vec![1.]);

        let r: MatrixResponse<f64> = MatrixResponse::Structure(SparsityPattern::dense(1, 1));
        assert!(r.clone().into_values().is_err());
        assert_eq!(r.into_structure().unwrap().nnz(), 1);
    }

    #[test]
    fn starting_point_request() {
        assert!(StartingPointRequest::default().is_primal_only());
        let r = StartingPointRequest {
            init_lambda: true,
            ..StartingPointRequest::primal()
        };
        assert!(!r.is_primal_only());
    }
}
