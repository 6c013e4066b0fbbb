use tnlp::nlp::*;

fn main() {
    // Derivative test example

    let settings = TutorialSettingsBuilder::default()
        .jacobian_structure(JacobianStructure::Sparse)
        .derivative_test_print_all(true)
        .build()
        .unwrap();

    let mut problem = TutorialProblem::<f64>::with_default_data(6, settings).unwrap();
    problem.print_configuration().unwrap();

    let x0 = problem
        .starting_point(problem.n(), StartingPointRequest::primal())
        .unwrap();

    let report = problem.derivative_test(&x0).unwrap();
    problem.print_derivative_check(&report).unwrap();

    // with the default dense declaration the Jacobian test is skipped
    let mut dense = TutorialProblem::<f64>::with_default_data(6, TutorialSettings::default()).unwrap();
    let report = dense.derivative_test(&x0).unwrap();
    dense.print_derivative_check(&report).unwrap();
}
