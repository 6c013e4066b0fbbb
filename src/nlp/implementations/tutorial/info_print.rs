use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::nlp::core::*;
use crate::nlp::traits::NlpProblem;
use std::io::{Error, ErrorKind, Write};

impl<T> ConfigurablePrintTarget for TutorialProblem<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

// C style "%e" formatting, i.e. six fractional
// digits and an exponent of at least two digits
macro_rules! expformat {
    ($val:expr) => {
        if $val.is_finite() {
            _exp_str_reformat(format!("{:.6e}", $val))
        } else {
            format!("{}", $val)
        }
    };
}

impl<T> TutorialProblem<T>
where
    T: FloatT,
{
    /// Print the problem dimensions, derivative structure and bound types.
    /// Does nothing unless the `verbose` setting is enabled.
    pub fn print_configuration(&mut self) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }

        let shape = self.shape();
        let bounds = self
            .bounds(shape.n, shape.m)
            .map_err(|e| Error::new(ErrorKind::Other, e.to_string()))?;
        let vcounts = bounds.variable_counts();
        let ccounts = bounds.constraint_counts();
        let ineq = ccounts.only_lower + ccounts.lower_and_upper + ccounts.only_upper;

        let out = &mut self.stream;

        _print_banner(out)?;
        writeln!(out, "problem:")?;
        writeln!(out, "  variables     = {}", shape.n)?;
        writeln!(out, "  constraints   = {}", shape.m)?;
        writeln!(out, "  nnz(jac_g)    = {}", shape.nnz_jac_g)?;
        writeln!(out, "  nnz(h_lag)    = {}", shape.nnz_h_lag)?;
        writeln!(out, "  index style   = {}", shape.index_style)?;
        writeln!(out, "  jacobian      = {}", self.settings.jacobian_structure)?;
        writeln!(
            out,
            "  hessian       = {} approximation",
            self.settings.hessian_approximation
        )?;

        writeln!(out, "\nbounds:")?;
        _print_count(out, "variables with only lower bounds", vcounts.only_lower)?;
        _print_count(out, "variables with lower and upper bounds", vcounts.lower_and_upper)?;
        _print_count(out, "variables with only upper bounds", vcounts.only_upper)?;
        _print_count(out, "fixed variables", vcounts.fixed)?;
        _print_count(out, "free variables", vcounts.free)?;
        _print_count(out, "equality constraints", ccounts.fixed)?;
        _print_count(out, "inequality constraints", ineq)?;
        writeln!(out)?;

        out.flush()?;
        Ok(())
    }

    /// Print the results of a derivative test.  Only entries exceeding the
    /// tolerance are listed unless `derivative_test_print_all` is enabled.
    pub fn print_derivative_check(
        &mut self,
        report: &DerivativeCheckReport<T>,
    ) -> std::io::Result<()> {
        let print_all = self.settings.derivative_test_print_all;
        let perturbation = self.settings.derivative_test_perturbation;
        let out = &mut self.stream;

        writeln!(out, "\nderivative test:")?;
        writeln!(
            out,
            "  perturbation = {}, tolerance = {}",
            expformat!(perturbation),
            expformat!(report.tol)
        )?;

        for e in report.gradient.iter() {
            let bad = !(e.rel_error <= report.tol);
            if print_all || bad {
                let tag = format!("grad_f[{:>5}]      ", e.col);
                _print_entry(out, &tag, e, bad)?;
            }
        }

        match &report.jacobian {
            JacobianCheck::Skipped(capability) => {
                writeln!(out, "  {} not available: Jacobian test skipped", capability)?;
            }
            JacobianCheck::Checked { entries, missing } => {
                for e in entries.iter() {
                    let bad = !(e.rel_error <= report.tol);
                    if print_all || bad {
                        let tag = format!("jac_g[{:>5},{:>5}]", e.row, e.col);
                        _print_entry(out, &tag, e, bad)?;
                    }
                }
                for e in missing.iter() {
                    let tag = format!("jac_g[{:>5},{:>5}]", e.row, e.col);
                    _print_entry(out, &tag, e, true)?;
                    writeln!(out, "    ^ nonzero estimate outside declared structure")?;
                }
            }
        }

        let nerrors = report.gradient_errors().count() + report.jacobian_errors().len();
        if nerrors == 0 {
            writeln!(out, "  derivative test passed")?;
        } else {
            writeln!(out, "  derivative test found {} error(s)", nerrors)?;
        }
        out.flush()?;
        Ok(())
    }

    pub(crate) fn print_solution(&mut self, report: &SolutionReport<'_, T>) -> std::io::Result<()> {
        if !self.settings.print_solution {
            return Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "\n\nSolution of the primal variables, x")?;
        for (i, xi) in report.x.iter().enumerate() {
            writeln!(out, "x[{}] = {}", i, expformat!(xi))?;
        }

        writeln!(out, "\n\nSolution of the bound multipliers, z_L and z_U")?;
        for (i, zi) in report.z_l.iter().enumerate() {
            writeln!(out, "z_L[{}] = {}", i, expformat!(zi))?;
        }
        for (i, zi) in report.z_u.iter().enumerate() {
            writeln!(out, "z_U[{}] = {}", i, expformat!(zi))?;
        }

        writeln!(out, "\n\nObjective value")?;
        writeln!(out, "f(x*) = {}", expformat!(report.obj_value))?;

        out.flush()?;
        Ok(())
    }
}

fn _print_banner(out: &mut PrintTarget) -> std::io::Result<()> {
    let title = format!("tnlp v{}  -  Ipopt coding exercise NLP", crate::VERSION);
    let rule = "-".repeat(title.len() + 4);
    writeln!(out, "{}", rule)?;
    writeln!(out, "  {}", title)?;
    writeln!(out, "{}", rule)
}

fn _print_count(out: &mut PrintTarget, label: &str, count: usize) -> std::io::Result<()> {
    writeln!(out, "  {:<37} = {}", label, count)
}

fn _print_entry<T: FloatT>(
    out: &mut PrintTarget,
    tag: &str,
    e: &DerivativeEntry<T>,
    bad: bool,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{} {}  analytic = {}  estimate = {}  rel. error = {}",
        if bad { '*' } else { ' ' },
        tag,
        expformat!(e.analytic),
        expformat!(e.estimate),
        expformat!(e.rel_error)
    )
}

fn _exp_str_reformat(mut thestr: String) -> String {
    // Safe to `unwrap` as `num` is guaranteed to contain `'e'`
    let eidx = thestr.find('e').unwrap();
    let has_sign = thestr.chars().nth(eidx + 1).unwrap() == '-';

    let has_short_exp = {
        if !has_sign {
            thestr.len() == eidx + 2
        } else {
            thestr.len() == eidx + 3
        }
    };

    let chars;
    if !has_sign {
        if has_short_exp {
            chars = "+0";
        } else {
            chars = "+";
        }
    } else if has_short_exp {
        chars = "0";
    } else {
        chars = "";
    }

    let shift = if has_sign { 2 } else { 1 };
    thestr.insert_str(eidx + shift, chars);
    thestr
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(expformat!(-0.5f64), "-5.000000e-01");
    assert_eq!(expformat!(0.0f64), "0.000000e+00");
    assert_eq!(expformat!(12345.678f64), "1.234568e+04");
    assert_eq!(expformat!(1.5e-120f64), "1.500000e-120");
    assert_eq!(expformat!(f64::NAN), "NaN");
}
