//! Raw declarations for the Ipopt C interface (`IpStdCInterface.h`).
//!
//! Declarations follow Ipopt 3.14, where `ipindex` is a C `int`, `ipnumber`
//! a `double`, and the callbacks return a C `bool`.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use libc::{c_char, c_int, c_void};

pub type Index = c_int;
pub type Number = f64;
pub type UserDataPtr = *mut c_void;

/// Opaque handle to an Ipopt problem
pub type IpoptProblem = *mut c_void;

pub type Eval_F_CB = extern "C" fn(
    n: Index,
    x: *mut Number,
    new_x: bool,
    obj_value: *mut Number,
    user_data: UserDataPtr,
) -> bool;

pub type Eval_G_CB = extern "C" fn(
    n: Index,
    x: *mut Number,
    new_x: bool,
    m: Index,
    g: *mut Number,
    user_data: UserDataPtr,
) -> bool;

pub type Eval_Grad_F_CB = extern "C" fn(
    n: Index,
    x: *mut Number,
    new_x: bool,
    grad_f: *mut Number,
    user_data: UserDataPtr,
) -> bool;

pub type Eval_Jac_G_CB = extern "C" fn(
    n: Index,
    x: *mut Number,
    new_x: bool,
    m: Index,
    nele_jac: Index,
    iRow: *mut Index,
    jCol: *mut Index,
    values: *mut Number,
    user_data: UserDataPtr,
) -> bool;

pub type Eval_H_CB = extern "C" fn(
    n: Index,
    x: *mut Number,
    new_x: bool,
    obj_factor: Number,
    m: Index,
    lambda: *mut Number,
    new_lambda: bool,
    nele_hess: Index,
    iRow: *mut Index,
    jCol: *mut Index,
    values: *mut Number,
    user_data: UserDataPtr,
) -> bool;

/// Return codes of `IpoptSolve`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationReturnStatus {
    Solve_Succeeded = 0,
    Solved_To_Acceptable_Level = 1,
    Infeasible_Problem_Detected = 2,
    Search_Direction_Becomes_Too_Small = 3,
    Diverging_Iterates = 4,
    User_Requested_Stop = 5,
    Feasible_Point_Found = 6,
    Maximum_Iterations_Exceeded = -1,
    Restoration_Failed = -2,
    Error_In_Step_Computation = -3,
    Maximum_CpuTime_Exceeded = -4,
    Maximum_WallTime_Exceeded = -5,
    Not_Enough_Degrees_Of_Freedom = -10,
    Invalid_Problem_Definition = -11,
    Invalid_Option = -12,
    Invalid_Number_Detected = -13,
    Unrecoverable_Exception = -100,
    NonIpopt_Exception_Thrown = -101,
    Insufficient_Memory = -102,
    Internal_Error = -199,
}

impl ApplicationReturnStatus {
    /// Decode a raw return code.  `None` for codes this
    /// library version does not know about.
    pub fn from_raw(code: c_int) -> Option<Self> {
        use ApplicationReturnStatus::*;
        let status = match code {
            0 => Solve_Succeeded,
            1 => Solved_To_Acceptable_Level,
            2 => Infeasible_Problem_Detected,
            3 => Search_Direction_Becomes_Too_Small,
            4 => Diverging_Iterates,
            5 => User_Requested_Stop,
            6 => Feasible_Point_Found,
            -1 => Maximum_Iterations_Exceeded,
            -2 => Restoration_Failed,
            -3 => Error_In_Step_Computation,
            -4 => Maximum_CpuTime_Exceeded,
            -5 => Maximum_WallTime_Exceeded,
            -10 => Not_Enough_Degrees_Of_Freedom,
            -11 => Invalid_Problem_Definition,
            -12 => Invalid_Option,
            -13 => Invalid_Number_Detected,
            -100 => Unrecoverable_Exception,
            -101 => NonIpopt_Exception_Thrown,
            -102 => Insufficient_Memory,
            -199 => Internal_Error,
            _ => return None,
        };
        Some(status)
    }
}

#[link(name = "ipopt")]
extern "C" {
    pub fn CreateIpoptProblem(
        n: Index,
        x_L: *mut Number,
        x_U: *mut Number,
        m: Index,
        g_L: *mut Number,
        g_U: *mut Number,
        nele_jac: Index,
        nele_hess: Index,
        index_style: Index,
        eval_f: Option<Eval_F_CB>,
        eval_g: Option<Eval_G_CB>,
        eval_grad_f: Option<Eval_Grad_F_CB>,
        eval_jac_g: Option<Eval_Jac_G_CB>,
        eval_h: Option<Eval_H_CB>,
    ) -> IpoptProblem;

    pub fn FreeIpoptProblem(ipopt_problem: IpoptProblem);

    pub fn AddIpoptStrOption(
        ipopt_problem: IpoptProblem,
        keyword: *const c_char,
        val: *const c_char,
    ) -> bool;
    pub fn AddIpoptNumOption(ipopt_problem: IpoptProblem, keyword: *const c_char, val: Number)
        -> bool;
    pub fn AddIpoptIntOption(ipopt_problem: IpoptProblem, keyword: *const c_char, val: Index)
        -> bool;

    // the return code is passed through as a raw integer, since
    // newer library versions may add codes unknown here
    pub fn IpoptSolve(
        ipopt_problem: IpoptProblem,
        x: *mut Number,
        g: *mut Number,
        obj_val: *mut Number,
        mult_g: *mut Number,
        mult_x_L: *mut Number,
        mult_x_U: *mut Number,
        user_data: UserDataPtr,
    ) -> c_int;
}
