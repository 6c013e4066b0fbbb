//! `extern "C"` callbacks bridging Ipopt to an [`NlpProblem`].
//!
//! Each callback recovers the problem from the `user_data` pointer, forwards
//! to the safe trait method and copies the result into the solver's buffers.
//! Errors and panics are converted to a `false` return, which Ipopt treats
//! as an evaluation failure.

use super::bindings::{Index, Number, UserDataPtr};
use crate::algebra::IndexStyle;
use crate::io::stderr;
use crate::nlp::core::*;
use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::slice;

/// Passed to Ipopt as `user_data`.  Callbacks only read the problem.
pub(crate) struct CallbackData<'a, P: ?Sized> {
    pub problem: &'a P,
    pub index_style: IndexStyle,
}

fn callback_wrapper<F>(name: &str, closure: F) -> bool
where
    F: FnOnce() -> Result<(), NlpError>,
{
    match catch_unwind(AssertUnwindSafe(closure)) {
        Ok(Ok(())) => true,
        // a declined capability is an expected answer, not a fault
        Ok(Err(NlpError::UnsupportedCapability(_))) => false,
        Ok(Err(e)) => {
            let _ = writeln!(stderr(), "error in Ipopt callback {}: {}", name, e);
            false
        }
        Err(_) => {
            let _ = writeln!(stderr(), "panic in Ipopt callback {}", name);
            false
        }
    }
}

unsafe fn get_data<'a, P: ?Sized + 'a>(user_data: UserDataPtr) -> &'a CallbackData<'a, P> {
    &*(user_data as *const CallbackData<'a, P>)
}

fn to_usize(name: &str, k: Index) -> Result<usize, NlpError> {
    usize::try_from(k)
        .map_err(|_| NlpError::ContractViolation(format!("{} is negative ({})", name, k)))
}

fn to_index(k: usize) -> Result<Index, NlpError> {
    Index::try_from(k)
        .map_err(|_| NlpError::ContractViolation(format!("index {} out of range", k)))
}

// write a pattern into the solver's row / column buffers
fn fill_structure(
    pattern: &crate::algebra::SparsityPattern,
    style: IndexStyle,
    irow: *mut Index,
    jcol: *mut Index,
    nele: usize,
) -> Result<(), NlpError> {
    check_length("sparsity pattern", pattern.nnz(), nele)?;
    let irow = unsafe { slice::from_raw_parts_mut(irow, nele) };
    let jcol = unsafe { slice::from_raw_parts_mut(jcol, nele) };
    for (k, (r, c)) in pattern.iter_styled(style).enumerate() {
        irow[k] = to_index(r)?;
        jcol[k] = to_index(c)?;
    }
    Ok(())
}

fn fill_values(values: &[Number], out: *mut Number, nele: usize) -> Result<(), NlpError> {
    check_length("matrix values", values.len(), nele)?;
    let out = unsafe { slice::from_raw_parts_mut(out, nele) };
    out.copy_from_slice(values);
    Ok(())
}

pub(crate) extern "C" fn eval_f<P>(
    n: Index,
    x: *mut Number,
    _new_x: bool,
    obj_value: *mut Number,
    user_data: UserDataPtr,
) -> bool
where
    P: NlpProblem<f64> + ?Sized,
{
    callback_wrapper("eval_f", || {
        let data = unsafe { get_data::<P>(user_data) };
        let x = unsafe { slice::from_raw_parts(x, to_usize("n", n)?) };
        let f = data.problem.eval_f(x)?;
        unsafe { *obj_value = f };
        Ok(())
    })
}

pub(crate) extern "C" fn eval_grad_f<P>(
    n: Index,
    x: *mut Number,
    _new_x: bool,
    grad_f: *mut Number,
    user_data: UserDataPtr,
) -> bool
where
    P: NlpProblem<f64> + ?Sized,
{
    callback_wrapper("eval_grad_f", || {
        let data = unsafe { get_data::<P>(user_data) };
        let n = to_usize("n", n)?;
        let x = unsafe { slice::from_raw_parts(x, n) };
        let grad = data.problem.eval_grad_f(x)?;
        fill_values(&grad, grad_f, n)
    })
}

pub(crate) extern "C" fn eval_g<P>(
    n: Index,
    x: *mut Number,
    _new_x: bool,
    m: Index,
    g: *mut Number,
    user_data: UserDataPtr,
) -> bool
where
    P: NlpProblem<f64> + ?Sized,
{
    callback_wrapper("eval_g", || {
        let data = unsafe { get_data::<P>(user_data) };
        let x = unsafe { slice::from_raw_parts(x, to_usize("n", n)?) };
        let values = data.problem.eval_g(x)?;
        fill_values(&values, g, to_usize("m", m)?)
    })
}

#[allow(non_snake_case)]
pub(crate) extern "C" fn eval_jac_g<P>(
    n: Index,
    x: *mut Number,
    _new_x: bool,
    _m: Index,
    nele_jac: Index,
    iRow: *mut Index,
    jCol: *mut Index,
    values: *mut Number,
    user_data: UserDataPtr,
) -> bool
where
    P: NlpProblem<f64> + ?Sized,
{
    callback_wrapper("eval_jac_g", || {
        let data = unsafe { get_data::<P>(user_data) };
        let nele = to_usize("nele_jac", nele_jac)?;

        // a null `values` pointer asks for the structure
        if values.is_null() {
            let pattern = data
                .problem
                .eval_jac_g(MatrixRequest::Structure)?
                .into_structure()?;
            fill_structure(&pattern, data.index_style, iRow, jCol, nele)
        } else {
            let x = unsafe { slice::from_raw_parts(x, to_usize("n", n)?) };
            let v = data
                .problem
                .eval_jac_g(MatrixRequest::Values { x })?
                .into_values()?;
            fill_values(&v, values, nele)
        }
    })
}

#[allow(non_snake_case)]
pub(crate) extern "C" fn eval_h<P>(
    n: Index,
    x: *mut Number,
    _new_x: bool,
    obj_factor: Number,
    m: Index,
    lambda: *mut Number,
    _new_lambda: bool,
    nele_hess: Index,
    iRow: *mut Index,
    jCol: *mut Index,
    values: *mut Number,
    user_data: UserDataPtr,
) -> bool
where
    P: NlpProblem<f64> + ?Sized,
{
    callback_wrapper("eval_h", || {
        let data = unsafe { get_data::<P>(user_data) };
        let nele = to_usize("nele_hess", nele_hess)?;

        if values.is_null() {
            let pattern = data
                .problem
                .eval_h(HessianRequest::Structure)?
                .into_structure()?;
            fill_structure(&pattern, data.index_style, iRow, jCol, nele)
        } else {
            let x = unsafe { slice::from_raw_parts(x, to_usize("n", n)?) };
            let lambda = unsafe { slice::from_raw_parts(lambda, to_usize("m", m)?) };
            let v = data
                .problem
                .eval_h(HessianRequest::Values {
                    x,
                    obj_factor,
                    lambda,
                })?
                .into_values()?;
            fill_values(&v, values, nele)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{JacobianStructure, TutorialProblem, TutorialSettingsBuilder};
    use std::ptr;

    fn problem(structure: JacobianStructure) -> TutorialProblem<f64> {
        let settings = TutorialSettingsBuilder::default()
            .jacobian_structure(structure)
            .build()
            .unwrap();
        TutorialProblem::with_default_data(4, settings).unwrap()
    }

    #[test]
    fn test_callbacks_through_user_data() {
        let p = problem(JacobianStructure::Sparse);
        let data = CallbackData {
            problem: &p,
            index_style: IndexStyle::Fortran,
        };
        let ud = &data as *const CallbackData<TutorialProblem<f64>> as UserDataPtr;
        let mut x = vec![-0.5; 4];

        let mut f = 0.0;
        assert!(eval_f::<TutorialProblem<f64>>(4, x.as_mut_ptr(), true, &mut f, ud));
        assert_eq!(f, 9.0);

        // structure phase, one based
        let mut irow = vec![0; 6];
        let mut jcol = vec![0; 6];
        assert!(eval_jac_g::<TutorialProblem<f64>>(
            4,
            ptr::null_mut(),
            true,
            2,
            6,
            irow.as_mut_ptr(),
            jcol.as_mut_ptr(),
            ptr::null_mut(),
            ud
        ));
        assert_eq!(irow, vec![1, 1, 1, 2, 2, 2]);
        assert_eq!(jcol, vec![1, 2, 3, 2, 3, 4]);

        // a wrong element count is refused
        assert!(!eval_jac_g::<TutorialProblem<f64>>(
            4,
            ptr::null_mut(),
            true,
            2,
            8,
            irow.as_mut_ptr(),
            jcol.as_mut_ptr(),
            ptr::null_mut(),
            ud
        ));
    }

    #[test]
    fn test_unsupported_returns_false() {
        let p = problem(JacobianStructure::Dense);
        let data = CallbackData {
            problem: &p,
            index_style: IndexStyle::C,
        };
        let ud = &data as *const CallbackData<TutorialProblem<f64>> as UserDataPtr;
        let mut x = vec![-0.5; 4];
        let mut vals = vec![0.0; 8];

        assert!(!eval_jac_g::<TutorialProblem<f64>>(
            4,
            x.as_mut_ptr(),
            true,
            2,
            8,
            ptr::null_mut(),
            ptr::null_mut(),
            vals.as_mut_ptr(),
            ud
        ));

        let mut lambda = vec![1.0; 2];
        assert!(!eval_h::<TutorialProblem<f64>>(
            4,
            x.as_mut_ptr(),
            true,
            1.0,
            2,
            lambda.as_mut_ptr(),
            true,
            6,
            ptr::null_mut(),
            ptr::null_mut(),
            vals.as_mut_ptr(),
            ud
        ));
    }
}
