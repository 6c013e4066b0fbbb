//! Solving an [`NlpProblem`] with the Ipopt C library.
//!
//! Only available with the `ipopt` feature, which links against `libipopt`.
//! Set `IPOPT_LIB_DIR` if the library is not on the default search path.

pub mod bindings;
pub(crate) mod adapter;

use crate::nlp::core::*;
use crate::nlp::TutorialSettings;
use adapter::CallbackData;
use bindings::*;
use std::ffi::CString;

/// Options forwarded to Ipopt before the solve.
#[derive(Debug, Clone, PartialEq)]
pub struct IpoptOptions {
    pub hessian_approximation: String,
    pub tol: f64,
    pub max_iter: u32,
    pub print_level: i32,
}

impl Default for IpoptOptions {
    fn default() -> Self {
        (&TutorialSettings::<f64>::default()).into()
    }
}

impl From<&TutorialSettings<f64>> for IpoptOptions {
    fn from(settings: &TutorialSettings<f64>) -> Self {
        Self {
            hessian_approximation: settings.hessian_approximation.clone(),
            tol: settings.tol,
            max_iter: settings.max_iter,
            print_level: settings.print_level,
        }
    }
}

impl From<ApplicationReturnStatus> for SolverReturn {
    fn from(status: ApplicationReturnStatus) -> Self {
        use ApplicationReturnStatus::*;
        match status {
            Solve_Succeeded => SolverReturn::Success,
            Solved_To_Acceptable_Level => SolverReturn::StopAtAcceptablePoint,
            Infeasible_Problem_Detected => SolverReturn::LocalInfeasibility,
            Search_Direction_Becomes_Too_Small => SolverReturn::StopAtTinyStep,
            Diverging_Iterates => SolverReturn::DivergingIterates,
            User_Requested_Stop => SolverReturn::UserRequestedStop,
            Feasible_Point_Found => SolverReturn::FeasiblePointFound,
            Maximum_Iterations_Exceeded => SolverReturn::MaxIterExceeded,
            Restoration_Failed => SolverReturn::RestorationFailure,
            Error_In_Step_Computation => SolverReturn::ErrorInStepComputation,
            Maximum_CpuTime_Exceeded => SolverReturn::CpuTimeExceeded,
            Maximum_WallTime_Exceeded => SolverReturn::WallTimeExceeded,
            Not_Enough_Degrees_Of_Freedom => SolverReturn::TooFewDegreesOfFreedom,
            Invalid_Option => SolverReturn::InvalidOption,
            Invalid_Number_Detected => SolverReturn::InvalidNumberDetected,
            Insufficient_Memory => SolverReturn::OutOfMemory,
            Invalid_Problem_Definition
            | Unrecoverable_Exception
            | NonIpopt_Exception_Thrown
            | Internal_Error => SolverReturn::InternalError,
        }
    }
}

// frees the Ipopt problem on every exit path
struct ProblemHandle(IpoptProblem);

impl Drop for ProblemHandle {
    fn drop(&mut self) {
        unsafe { FreeIpoptProblem(self.0) }
    }
}

impl ProblemHandle {
    fn keyword(key: &str) -> Result<CString, NlpError> {
        CString::new(key).map_err(|e| NlpError::InvalidArgument(e.to_string()))
    }

    fn rejected(key: &str) -> NlpError {
        NlpError::InvalidArgument(format!("Ipopt rejected option {}", key))
    }

    fn str_option(&self, key: &str, val: &str) -> Result<(), NlpError> {
        let k = Self::keyword(key)?;
        let v = Self::keyword(val)?;
        match unsafe { AddIpoptStrOption(self.0, k.as_ptr(), v.as_ptr()) } {
            true => Ok(()),
            false => Err(Self::rejected(key)),
        }
    }

    fn num_option(&self, key: &str, val: f64) -> Result<(), NlpError> {
        let k = Self::keyword(key)?;
        match unsafe { AddIpoptNumOption(self.0, k.as_ptr(), val) } {
            true => Ok(()),
            false => Err(Self::rejected(key)),
        }
    }

    fn int_option(&self, key: &str, val: i64) -> Result<(), NlpError> {
        let k = Self::keyword(key)?;
        let v = to_index(key, val)?;
        match unsafe { AddIpoptIntOption(self.0, k.as_ptr(), v) } {
            true => Ok(()),
            false => Err(Self::rejected(key)),
        }
    }
}

fn to_index<I>(name: &str, k: I) -> Result<Index, NlpError>
where
    I: TryInto<Index> + std::fmt::Display + Copy,
{
    k.try_into()
        .map_err(|_| NlpError::InvalidArgument(format!("{} = {} exceeds the Ipopt index range", name, k)))
}

/// Solve `problem` with Ipopt.
///
/// The problem's shape, bounds and primal starting point are queried first,
/// then the options are forwarded and the solve is run.  On return from the
/// solver, [`NlpProblem::finalize_solution`] is called exactly once with the
/// final iterate, and the mapped return status is passed back.  Errors are
/// only returned for failures before the solve starts.
pub fn solve<P>(problem: &mut P, options: &IpoptOptions) -> Result<SolverReturn, NlpError>
where
    P: NlpProblem<f64>,
{
    let shape = problem.shape();
    let (n, m) = (shape.n, shape.m);
    let mut bounds = problem.bounds(n, m)?;
    let mut x = problem.starting_point(n, StartingPointRequest::primal())?;

    check_length("x_l", bounds.x_l.len(), n)?;
    check_length("x_u", bounds.x_u.len(), n)?;
    check_length("g_l", bounds.g_l.len(), m)?;
    check_length("g_u", bounds.g_u.len(), m)?;
    check_length("starting point", x.len(), n)?;

    let raw = unsafe {
        CreateIpoptProblem(
            to_index("n", n)?,
            bounds.x_l.as_mut_ptr(),
            bounds.x_u.as_mut_ptr(),
            to_index("m", m)?,
            bounds.g_l.as_mut_ptr(),
            bounds.g_u.as_mut_ptr(),
            to_index("nnz_jac_g", shape.nnz_jac_g)?,
            to_index("nnz_h_lag", shape.nnz_h_lag)?,
            to_index("index style", shape.index_style.offset())?,
            Some(adapter::eval_f::<P>),
            Some(adapter::eval_g::<P>),
            Some(adapter::eval_grad_f::<P>),
            Some(adapter::eval_jac_g::<P>),
            Some(adapter::eval_h::<P>),
        )
    };
    if raw.is_null() {
        return Err(NlpError::InvalidArgument(
            "Ipopt could not create the problem".to_string(),
        ));
    }
    let handle = ProblemHandle(raw);

    handle.str_option("hessian_approximation", &options.hessian_approximation)?;
    handle.num_option("tol", options.tol)?;
    handle.int_option("max_iter", options.max_iter.into())?;
    handle.int_option("print_level", options.print_level.into())?;

    let mut g = vec![0.0; m];
    let mut mult_g = vec![0.0; m];
    let mut mult_x_l = vec![0.0; n];
    let mut mult_x_u = vec![0.0; n];
    let mut obj_val = 0.0;

    let code = {
        let data = CallbackData {
            problem: &*problem,
            index_style: shape.index_style,
        };
        let user_data = &data as *const CallbackData<P> as UserDataPtr;
        unsafe {
            IpoptSolve(
                handle.0,
                x.as_mut_ptr(),
                g.as_mut_ptr(),
                &mut obj_val,
                mult_g.as_mut_ptr(),
                mult_x_l.as_mut_ptr(),
                mult_x_u.as_mut_ptr(),
                user_data,
            )
        }
    };
    drop(handle);

    let status = ApplicationReturnStatus::from_raw(code)
        .map(SolverReturn::from)
        .unwrap_or(SolverReturn::Unassigned);

    problem.finalize_solution(SolutionReport {
        status,
        x: &x,
        z_l: &mult_x_l,
        z_u: &mult_x_u,
        g: &g,
        lambda: &mult_g,
        obj_value: obj_val,
    });

    Ok(status)
}

#[test]
fn test_status_mapping() {
    let s = ApplicationReturnStatus::from_raw(0).map(SolverReturn::from);
    assert_eq!(s, Some(SolverReturn::Success));
    let s = ApplicationReturnStatus::from_raw(-5).map(SolverReturn::from);
    assert_eq!(s, Some(SolverReturn::WallTimeExceeded));
    let s = ApplicationReturnStatus::from_raw(-11).map(SolverReturn::from);
    assert_eq!(s, Some(SolverReturn::InternalError));
    assert_eq!(ApplicationReturnStatus::from_raw(42), None);
}

#[test]
fn test_options_from_settings() {
    let opts = IpoptOptions::default();
    assert_eq!(opts.hessian_approximation, "limited-memory");
    assert_eq!(opts.tol, 1e-8);
    assert_eq!(opts.max_iter, 3000);
    assert_eq!(opts.print_level, 5);
}
