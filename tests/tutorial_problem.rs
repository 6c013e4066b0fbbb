use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tnlp::{algebra::*, io::ConfigurablePrintTarget, nlp::*};

fn tutorial_problem(n: usize, structure: JacobianStructure) -> TutorialProblem<f64> {
    let settings = TutorialSettingsBuilder::default()
        .jacobian_structure(structure)
        .verbose(false)
        .print_solution(false)
        .build()
        .unwrap();
    TutorialProblem::with_default_data(n, settings).unwrap()
}

fn random_point(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(-1.5..0.0)).collect()
}

#[test]
fn test_shape_bounds_and_start() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..20 {
        let n = rng.random_range(3..60);
        let p = tutorial_problem(n, JacobianStructure::Dense);

        let shape = p.shape();
        assert_eq!(shape.n, n);
        assert_eq!(shape.m, n - 2);
        assert_eq!(shape.nnz_jac_g, n * (n - 2));
        assert_eq!(shape.nnz_h_lag, 2 * n - 2);
        assert_eq!(shape.index_style, IndexStyle::C);

        let bounds = p.bounds(n, n - 2).unwrap();
        assert!(bounds.x_l.iter().all(|&v| v == -1.5));
        assert!(bounds.x_u.iter().all(|&v| v == 0.0));
        assert!(bounds.g_l.iter().all(|&v| v == 0.0));
        assert!(bounds.g_u.iter().all(|&v| v == 0.0));

        let x0 = p.starting_point(n, StartingPointRequest::primal()).unwrap();
        assert_eq!(x0, vec![-0.5; n]);
    }
}

#[test]
fn test_sparse_shape() {
    let p = tutorial_problem(7, JacobianStructure::Sparse);
    assert_eq!(p.shape().nnz_jac_g, 15);
    // Hessian count is unchanged by the Jacobian mode
    assert_eq!(p.shape().nnz_h_lag, 12);
}

#[test]
fn test_objective() {
    let mut rng = StdRng::seed_from_u64(3);
    let p = tutorial_problem(10, JacobianStructure::Dense);

    assert_eq!(p.eval_f(&[1.0; 10]).unwrap(), 0.0);
    assert_eq!(p.eval_f(&[0.0; 10]).unwrap(), 10.0);

    for _ in 0..10 {
        let x = random_point(&mut rng, 10);
        // every x_i <= 0, so each term is at least 1
        assert!(p.eval_f(&x).unwrap() >= 10.0);
    }
}

#[test]
fn test_gradient_against_differences() {
    let mut rng = StdRng::seed_from_u64(11);
    let p = tutorial_problem(8, JacobianStructure::Dense);
    let h = 1e-6;

    for _ in 0..10 {
        let x = random_point(&mut rng, 8);
        let grad = p.eval_grad_f(&x).unwrap();
        for i in 0..8 {
            let mut xp = x.clone();
            let mut xm = x.clone();
            xp[i] += h;
            xm[i] -= h;
            let fd = (p.eval_f(&xp).unwrap() - p.eval_f(&xm).unwrap()) / (2.0 * h);
            assert!((grad[i] - fd).abs() < 1e-6);
        }
    }
}

#[test]
fn test_constraint_values() {
    let settings = TutorialSettings::default();
    let p = TutorialProblem::new(4, &[0.5, 0.75], settings).unwrap();

    let g = p.eval_g(&[-0.5; 4]).unwrap();
    assert_eq!(g.len(), 2);

    // (0.25 - 0.75 - a_j) cos(-0.5) + 0.5
    let c = (-0.5f64).cos();
    assert!((g[0] - (-1.0 * c + 0.5)).abs() < 1e-14);
    assert!((g[1] - (-1.25 * c + 0.5)).abs() < 1e-14);
    assert!((g[0] + 0.3775826).abs() < 1e-6);

    // origin: g_j = -a_j
    let g = p.eval_g(&[0.0; 4]).unwrap();
    assert_eq!(g, vec![-0.5, -0.75]);
}

#[test]
fn test_dense_jacobian() {
    let p = tutorial_problem(6, JacobianStructure::Dense);

    let s = p
        .eval_jac_g(MatrixRequest::Structure)
        .unwrap()
        .into_structure()
        .unwrap();
    assert_eq!(s.nnz(), 4 * 6);
    assert!(s.is_dense());
    assert!(!s.has_duplicates());
    assert_eq!(s.iter().next(), Some((0, 0)));
    assert_eq!(s.iter().last(), Some((3, 5)));

    // repeated requests give the same answer
    let s2 = p
        .eval_jac_g(MatrixRequest::Structure)
        .unwrap()
        .into_structure()
        .unwrap();
    assert_eq!(s, s2);

    let x = [-0.5; 6];
    let err = p.eval_jac_g(MatrixRequest::Values { x: &x }).unwrap_err();
    assert_eq!(err, NlpError::UnsupportedCapability(Capability::JacobianValues));
    assert!(err.is_unsupported());
}

#[test]
fn test_sparse_jacobian_against_differences() {
    let mut rng = StdRng::seed_from_u64(5);
    let n = 7;
    let p = tutorial_problem(n, JacobianStructure::Sparse);
    let h = 1e-6;

    let s = p
        .eval_jac_g(MatrixRequest::Structure)
        .unwrap()
        .into_structure()
        .unwrap();
    assert_eq!(s.nnz(), 3 * (n - 2));
    assert!(!s.has_duplicates());

    for _ in 0..5 {
        let x = random_point(&mut rng, n);
        let v = p
            .eval_jac_g(MatrixRequest::Values { x: &x })
            .unwrap()
            .into_values()
            .unwrap();
        assert_eq!(v.len(), s.nnz());

        for ((r, c), &vk) in s.iter().zip(&v) {
            let mut xp = x.clone();
            let mut xm = x.clone();
            xp[c] += h;
            xm[c] -= h;
            let fd = (p.eval_g(&xp).unwrap()[r] - p.eval_g(&xm).unwrap()[r]) / (2.0 * h);
            assert!((vk - fd).abs() < 1e-6);
        }
    }
}

#[test]
fn test_hessian_unsupported() {
    for structure in [JacobianStructure::Dense, JacobianStructure::Sparse] {
        let p = tutorial_problem(5, structure);
        let x = [-0.5; 5];
        let lambda = [1.0; 3];

        let err = p.eval_h(HessianRequest::Structure).unwrap_err();
        assert_eq!(err, NlpError::UnsupportedCapability(Capability::HessianStructure));

        let err = p
            .eval_h(HessianRequest::Values {
                x: &x,
                obj_factor: 1.0,
                lambda: &lambda,
            })
            .unwrap_err();
        assert_eq!(err, NlpError::UnsupportedCapability(Capability::HessianValues));
    }
}

#[test]
fn test_finalize_solution() {
    let mut p = tutorial_problem(3, JacobianStructure::Dense);
    p.print_to_buffer();

    let x = [-0.1, -0.2, -0.3];
    let zeros = [0.0; 3];
    let g = p.eval_g(&x).unwrap();
    let f = p.eval_f(&x).unwrap();

    p.finalize_solution(SolutionReport {
        status: SolverReturn::MaxIterExceeded,
        x: &x,
        z_l: &zeros,
        z_u: &zeros,
        g: &g,
        lambda: &[0.0],
        obj_value: f,
    });

    let s = p.solution().unwrap();
    assert_eq!(s.status, SolverReturn::MaxIterExceeded);
    assert!(!s.status.is_solved());
    assert_eq!(s.x, x.to_vec());
    assert_eq!(s.g, g);
    assert_eq!(s.obj_val, f);

    // printing disabled in these settings
    assert_eq!(p.get_print_buffer().unwrap(), "");
}
