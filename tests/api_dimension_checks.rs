use tnlp::nlp::*;

// a collection of tests to ensure that data of
// incompatible dimension won't be accepted

fn api_dim_check_problem() -> TutorialProblem<f64> {
    TutorialProblem::new(5, &[0.1, 0.2, 0.3], TutorialSettings::default()).unwrap()
}

#[test]
fn api_dim_check_working() {
    // This example should work because dimensions are
    // all compatible.  All following checks vary one
    // of these sizes to test dimension checks
    let p = api_dim_check_problem();
    assert_eq!((p.n(), p.m()), (5, 3));
}

#[test]
fn api_dim_check_small_n() {
    for n in 0..3 {
        let err = TutorialProblem::<f64>::with_default_data(n, TutorialSettings::default())
            .unwrap_err();
        assert!(matches!(err, NlpError::InvalidArgument(_)));
    }
    assert!(TutorialProblem::<f64>::with_default_data(3, TutorialSettings::default()).is_ok());
}

#[test]
fn api_dim_check_bad_constants() {
    let settings = TutorialSettings::default();
    let err = TutorialProblem::new(5, &[0.1, 0.2], settings.clone()).unwrap_err();
    assert!(matches!(err, NlpError::InvalidArgument(_)));

    let err = TutorialProblem::new(5, &[0.1, 0.2, 0.3, 0.4], settings.clone()).unwrap_err();
    assert!(matches!(err, NlpError::InvalidArgument(_)));

    let err = TutorialProblem::new(5, &[0.1, f64::INFINITY, 0.3], settings).unwrap_err();
    assert!(matches!(err, NlpError::InvalidArgument(_)));
}

#[test]
fn api_dim_check_bad_settings() {
    let mut settings = TutorialSettings::default();
    settings.print_level = 13;
    let err = TutorialProblem::new(5, &[0.1, 0.2, 0.3], settings).unwrap_err();
    assert!(matches!(err, NlpError::InvalidArgument(_)));
}

#[test]
fn api_dim_check_bad_x() {
    let p = api_dim_check_problem();
    let x = [-0.5; 4];

    assert!(matches!(p.eval_f(&x), Err(NlpError::ContractViolation(_))));
    assert!(matches!(p.eval_grad_f(&x), Err(NlpError::ContractViolation(_))));
    assert!(matches!(p.eval_g(&x), Err(NlpError::ContractViolation(_))));

    let sparse = TutorialProblem::new(
        5,
        &[0.1, 0.2, 0.3],
        TutorialSettingsBuilder::default()
            .jacobian_structure(JacobianStructure::Sparse)
            .build()
            .unwrap(),
    )
    .unwrap();
    let r = sparse.eval_jac_g(MatrixRequest::Values { x: &x });
    assert!(matches!(r, Err(NlpError::ContractViolation(_))));
}

#[test]
fn api_dim_check_bad_sizes() {
    let p = api_dim_check_problem();

    assert!(matches!(p.bounds(4, 3), Err(NlpError::ContractViolation(_))));
    assert!(matches!(p.bounds(5, 2), Err(NlpError::ContractViolation(_))));
    assert!(matches!(
        p.starting_point(6, StartingPointRequest::primal()),
        Err(NlpError::ContractViolation(_))
    ));
}

#[test]
fn api_dim_check_dual_start() {
    let p = api_dim_check_problem();

    let request = StartingPointRequest {
        init_x: true,
        init_z: true,
        init_lambda: false,
    };
    assert!(matches!(
        p.starting_point(5, request),
        Err(NlpError::ContractViolation(_))
    ));

    let request = StartingPointRequest {
        init_x: true,
        init_z: false,
        init_lambda: true,
    };
    assert!(p.starting_point(5, request).is_err());
    assert!(p.starting_point(5, StartingPointRequest::default()).is_ok());
}

#[test]
fn settings_builder_checks() {
    assert!(TutorialSettingsBuilder::<f64>::default()
        .print_level(-1)
        .build()
        .is_err());
    assert!(TutorialSettingsBuilder::<f64>::default()
        .hessian_approximation("exact".to_string())
        .build()
        .is_err());
    let s = TutorialSettingsBuilder::<f64>::default()
        .print_level(12)
        .build()
        .unwrap();
    assert_eq!(s.print_level, 12);
}
