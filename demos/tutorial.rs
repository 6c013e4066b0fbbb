use tnlp::nlp::ffi::{solve, IpoptOptions};
use tnlp::nlp::*;

fn main() {
    // Solve the coding exercise problem with Ipopt

    // Ipopt needs Jacobian values, so the analytic sparse
    // structure is used in place of the dense declaration
    let settings = TutorialSettingsBuilder::default()
        .jacobian_structure(JacobianStructure::Sparse)
        .build()
        .unwrap();

    let mut problem = TutorialProblem::<f64>::with_default_data(5, settings).unwrap();
    problem.print_configuration().unwrap();

    let options = IpoptOptions::from(&problem.settings);
    let status = solve(&mut problem, &options).unwrap();

    println!("\nIpopt returned {}", status);
    if let Some(solution) = problem.solution() {
        println!("Solution = {:?}", solution.x);
    }
}
